//! The grid alphabet: digits 1-9.

use std::fmt::{self, Display};

/// A grid digit in the range 1-9.
///
/// This enum provides type-safe representation of the nine symbols a grid
/// cell can hold, preventing invalid values at compile time.
///
/// # Examples
///
/// ```
/// use sudokode_core::Digit;
///
/// let digit = Digit::D5;
/// assert_eq!(digit.value(), 5);
///
/// // Create from a u8 value
/// let digit = Digit::from_value(7);
/// assert_eq!(digit, Digit::D7);
///
/// // Iterate over all digits in ascending order
/// for digit in Digit::ALL {
///     println!("{}", digit);
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Digit {
    /// The digit 1.
    D1 = 1,
    /// The digit 2.
    D2 = 2,
    /// The digit 3.
    D3 = 3,
    /// The digit 4.
    D4 = 4,
    /// The digit 5.
    D5 = 5,
    /// The digit 6.
    D6 = 6,
    /// The digit 7.
    D7 = 7,
    /// The digit 8.
    D8 = 8,
    /// The digit 9.
    D9 = 9,
}

impl Digit {
    /// Array containing all digits from 1 to 9 in ascending order.
    ///
    /// Ascending order is the canonical order used everywhere the codec
    /// needs determinism.
    pub const ALL: [Self; 9] = [
        Self::D1,
        Self::D2,
        Self::D3,
        Self::D4,
        Self::D5,
        Self::D6,
        Self::D7,
        Self::D8,
        Self::D9,
    ];

    /// Creates a digit from a u8 value in the range 1-9.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokode_core::Digit;
    ///
    /// assert_eq!(Digit::from_value(5), Digit::D5);
    /// ```
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match value {
            1 => Self::D1,
            2 => Self::D2,
            3 => Self::D3,
            4 => Self::D4,
            5 => Self::D5,
            6 => Self::D6,
            7 => Self::D7,
            8 => Self::D8,
            9 => Self::D9,
            _ => panic!("Invalid digit value: {value}"),
        }
    }

    /// Returns the numeric value of this digit (1-9).
    #[must_use]
    pub const fn value(&self) -> u8 {
        *self as u8
    }

    /// Creates a digit from its ASCII character form (`'1'..='9'`).
    ///
    /// Returns `None` for any other character.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudokode_core::Digit;
    ///
    /// assert_eq!(Digit::from_ascii('7'), Some(Digit::D7));
    /// assert_eq!(Digit::from_ascii('0'), None);
    /// assert_eq!(Digit::from_ascii('x'), None);
    /// ```
    #[must_use]
    pub fn from_ascii(ch: char) -> Option<Self> {
        match ch {
            '1'..='9' => {
                let value = u8::try_from(ch).ok()? - b'0';
                Some(Self::from_value(value))
            }
            _ => None,
        }
    }

    /// Returns the ASCII character form of this digit (`'1'..='9'`).
    #[must_use]
    pub const fn to_ascii(self) -> char {
        (b'0' + self.value()) as char
    }
}

// `Default` exists so `Digit` can live in `tinyvec` array-backed
// collections; the value is never observed through that path.
impl Default for Digit {
    fn default() -> Self {
        Self::D1
    }
}

impl Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.value(), f)
    }
}

impl From<Digit> for u8 {
    fn from(digit: Digit) -> u8 {
        digit.value()
    }
}
