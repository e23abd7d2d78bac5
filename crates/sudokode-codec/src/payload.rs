//! Unbounded-precision payload arithmetic.
//!
//! The message is packed into a single unsigned integer, 7 bits per
//! character, and consumed across grid cells by repeated division by
//! small mixed radices (1-9). [`Payload`] implements exactly the four
//! operations the codec needs over little-endian `u32` limbs: shift-in
//! and shift-out of sub-32-bit groups, in-place division by a small
//! divisor, and multiply-accumulate by a small factor.

/// An unbounded-precision unsigned integer.
///
/// Stored as little-endian `u32` limbs with no trailing zero limbs; the
/// empty limb vector represents zero.
///
/// # Examples
///
/// ```
/// use sudokode_codec::Payload;
///
/// let mut payload = Payload::new();
/// payload.push_low_bits(65, 7); // 'A'
/// assert_eq!(payload, Payload::from(65));
///
/// let digit = payload.div_rem_small(9);
/// assert_eq!(digit, 65 % 9);
/// assert_eq!(payload, Payload::from(65 / 9));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Payload {
    limbs: Vec<u32>,
}

impl Payload {
    /// Creates a payload with value zero.
    #[must_use]
    pub const fn new() -> Self {
        Self { limbs: Vec::new() }
    }

    /// Returns `true` if the payload is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.limbs.is_empty()
    }

    /// Shifts the payload left by `width` bits and ORs `bits` into the
    /// vacated low end.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `width` is in 1-31 and `bits` fits in `width`
    /// bits.
    pub fn push_low_bits(&mut self, bits: u32, width: u32) {
        debug_assert!((1..32).contains(&width));
        debug_assert!(bits < (1 << width));
        let mut carry = bits;
        for limb in &mut self.limbs {
            let wide = (u64::from(*limb) << width) | u64::from(carry);
            *limb = Self::low_limb(wide);
            carry = Self::high_limb(wide);
        }
        if carry != 0 {
            self.limbs.push(carry);
        }
    }

    /// Returns the low `width` bits and shifts the payload right by
    /// `width`.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `width` is in 1-31.
    pub fn pop_low_bits(&mut self, width: u32) -> u32 {
        debug_assert!((1..32).contains(&width));
        let mask = (1 << width) - 1;
        let out = self.limbs.first().copied().unwrap_or(0) & mask;
        let mut carry = 0;
        for limb in self.limbs.iter_mut().rev() {
            let current = *limb;
            *limb = (current >> width) | (carry << (32 - width));
            carry = current & mask;
        }
        self.normalize();
        out
    }

    /// Divides the payload in place by `divisor` and returns the
    /// remainder.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `divisor` is nonzero.
    pub fn div_rem_small(&mut self, divisor: u32) -> u32 {
        debug_assert!(divisor != 0);
        let divisor = u64::from(divisor);
        let mut rem = 0;
        for limb in self.limbs.iter_mut().rev() {
            let wide = (rem << 32) | u64::from(*limb);
            *limb = Self::low_limb(wide / divisor);
            rem = wide % divisor;
        }
        self.normalize();
        #[expect(clippy::cast_possible_truncation)]
        let rem = rem as u32;
        rem
    }

    /// Replaces the payload with `self * factor + addend`.
    pub fn mul_add_small(&mut self, factor: u32, addend: u32) {
        let mut carry = u64::from(addend);
        for limb in &mut self.limbs {
            let wide = u64::from(*limb) * u64::from(factor) + carry;
            *limb = Self::low_limb(wide);
            carry = u64::from(Self::high_limb(wide));
        }
        if carry != 0 {
            self.limbs.push(Self::low_limb(carry));
        }
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.limbs.last() == Some(&0) {
            self.limbs.pop();
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    const fn low_limb(wide: u64) -> u32 {
        wide as u32
    }

    const fn high_limb(wide: u64) -> u32 {
        Self::low_limb(wide >> 32)
    }

    #[cfg(test)]
    fn to_u64(&self) -> Option<u64> {
        match self.limbs.as_slice() {
            [] => Some(0),
            [lo] => Some(u64::from(*lo)),
            [lo, hi] => Some(u64::from(*hi) << 32 | u64::from(*lo)),
            _ => None,
        }
    }
}

impl From<u64> for Payload {
    fn from(value: u64) -> Self {
        let mut payload = Self {
            limbs: vec![Self::low_limb(value), Self::high_limb(value)],
        };
        payload.normalize();
        payload
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_zero() {
        assert!(Payload::new().is_zero());
        assert!(Payload::from(0).is_zero());
        assert!(!Payload::from(1).is_zero());
        assert_eq!(Payload::new(), Payload::from(0));
    }

    #[test]
    fn test_push_pop_low_bits() {
        let mut payload = Payload::new();
        payload.push_low_bits(0b100_0001, 7);
        payload.push_low_bits(0b110_0001, 7);
        assert_eq!(payload, Payload::from((65 << 7) | 97));

        assert_eq!(payload.pop_low_bits(7), 97);
        assert_eq!(payload.pop_low_bits(7), 65);
        assert!(payload.is_zero());
    }

    #[test]
    fn test_push_carries_across_limbs() {
        // 10 pushes of 7 bits is 70 bits, spanning three limbs.
        let mut payload = Payload::new();
        for _ in 0..10 {
            payload.push_low_bits(0x7f, 7);
        }
        for _ in 0..10 {
            assert_eq!(payload.pop_low_bits(7), 0x7f);
        }
        assert!(payload.is_zero());
    }

    #[test]
    fn test_div_rem_small() {
        let mut payload = Payload::from(65);
        assert_eq!(payload.div_rem_small(9), 2);
        assert_eq!(payload.to_u64(), Some(7));
        assert_eq!(payload.div_rem_small(9), 7);
        assert!(payload.is_zero());
    }

    #[test]
    fn test_div_rem_by_one() {
        let mut payload = Payload::from(12345);
        assert_eq!(payload.div_rem_small(1), 0);
        assert_eq!(payload, Payload::from(12345));
    }

    #[test]
    fn test_mul_add_small_undoes_div_rem() {
        let mut payload = Payload::from(0xdead_beef_cafe);
        let rem = payload.div_rem_small(7);
        payload.mul_add_small(7, rem);
        assert_eq!(payload, Payload::from(0xdead_beef_cafe));
    }

    #[test]
    fn test_mul_add_carries() {
        let mut payload = Payload::from(u64::MAX);
        payload.mul_add_small(9, 8);
        // (2^64 - 1) * 9 + 8 = 9 * 2^64 - 1
        assert_eq!(payload.div_rem_small(9), 8);
        assert_eq!(payload.to_u64(), Some(u64::MAX));
    }

    proptest! {
        #[test]
        fn prop_div_rem_matches_u64(value: u64, divisor in 1u32..=9) {
            let mut payload = Payload::from(value);
            let rem = payload.div_rem_small(divisor);
            prop_assert_eq!(u64::from(rem), value % u64::from(divisor));
            prop_assert_eq!(payload.to_u64(), Some(value / u64::from(divisor)));
        }

        #[test]
        fn prop_mixed_radix_round_trip(value: u64, radices in proptest::collection::vec(1u32..=9, 0..40)) {
            let mut payload = Payload::from(value);
            let mut digits = Vec::new();
            for radix in &radices {
                digits.push(payload.div_rem_small(*radix));
            }
            for (radix, digit) in radices.iter().zip(&digits).rev() {
                payload.mul_add_small(*radix, *digit);
            }
            prop_assert_eq!(payload, Payload::from(value));
        }
    }
}
