//! Sudokode command-line interface.
//!
//! Reads from stdin and writes to stdout; diagnostics, the internal
//! test, and statistics go to stderr.
//!
//! ```sh
//! echo -n 'HELLO SECRET WORLD' | sudokode --encode --stats > grids.txt
//! sudokode --decode < grids.txt
//! ```

use std::{
    io::{self, Read as _},
    process,
    str::FromStr as _,
};

use clap::Parser;
use sudokode_codec::{CodecError, Coder, Stats};
use sudokode_core::{Grid, GridParseError};

#[derive(Debug, Parser)]
#[command(author, version, about, group = clap::ArgGroup::new("mode").required(true))]
struct Args {
    /// Read plain text from stdin and write sudoku grids to stdout.
    #[arg(short, long, group = "mode")]
    encode: bool,

    /// Read sudoku grids from stdin and write plain text to stdout.
    #[arg(short, long, group = "mode")]
    decode: bool,

    /// Run a brief internal round-trip test.
    #[arg(short, long, group = "mode")]
    test: bool,

    /// Generate puzzle grids instead of filled-in grids.
    #[arg(short, long, requires = "encode")]
    puzzle: bool,

    /// Report encoding statistics on stderr.
    #[arg(short, long)]
    stats: bool,

    /// Write debugging information to stderr (same as RUST_LOG=debug).
    #[arg(short = 'D', long)]
    debug: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Io(io::Error),
    #[display("{_0}")]
    Codec(CodecError),
    #[display("{_0}")]
    Parse(GridParseError),
}

fn main() {
    better_panic::install();
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(err) = run(&args) {
        eprintln!("{err}");
        process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if debug && std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.init();
}

fn run(args: &Args) -> Result<(), CliError> {
    let mut coder = Coder::new().with_puzzle_mode(args.puzzle);
    if args.encode {
        encode_stream(&mut coder)?;
        if args.stats {
            report_stats(coder.stats());
        }
    } else if args.decode {
        decode_stream(&mut coder)?;
    } else {
        run_test(&mut coder)?;
    }
    Ok(())
}

fn encode_stream(coder: &mut Coder) -> Result<(), CliError> {
    let mut message = String::new();
    io::stdin().read_to_string(&mut message)?;
    for grid in coder.encode(&message)? {
        println!("{grid}\n");
    }
    Ok(())
}

fn decode_stream(coder: &mut Coder) -> Result<(), CliError> {
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    let grids = read_grids(&text)?;
    let message = coder.decode(&grids)?;
    print!("{message}");
    Ok(())
}

fn run_test(coder: &mut Coder) -> Result<(), CliError> {
    let message = "HELLO SECRET WORLD";
    eprintln!("Input message: {message:?}");
    let grids = coder.encode(message)?;
    eprintln!("Encoding:");
    for grid in &grids {
        eprintln!("{grid}\n");
    }
    let decoded = coder.decode(&grids)?;
    eprintln!("Decoded message: {decoded:?}");
    Ok(())
}

/// Splits blank-line-separated grid text into parsed grids.
fn read_grids(text: &str) -> Result<Vec<Grid>, GridParseError> {
    let mut grids = Vec::new();
    let mut buffer = String::new();
    for line in text.lines() {
        if line.trim().is_empty() {
            flush_grid(&mut buffer, &mut grids)?;
        } else {
            buffer.push_str(line.trim());
            buffer.push('\n');
        }
    }
    flush_grid(&mut buffer, &mut grids)?;
    Ok(grids)
}

fn flush_grid(buffer: &mut String, grids: &mut Vec<Grid>) -> Result<(), GridParseError> {
    if !buffer.is_empty() {
        grids.push(Grid::from_str(buffer)?);
        buffer.clear();
    }
    Ok(())
}

fn report_stats(stats: &Stats) {
    eprintln!("Characters encoded: {}", stats.chars);
    eprintln!("Bits encoded: {}", stats.bits);
    eprintln!("Blocks used: {}", stats.blocks);
    eprintln!("Entropy used: {:.3} bits", stats.entropy_used);
    eprintln!("Entropy unused: {:.3} bits", stats.entropy_unused);
    eprintln!("Clues removed by rule 1: {}", stats.removed_rule1);
    eprintln!("Clues removed by rule 2: {}", stats.removed_rule2);
    eprintln!("Clues remaining: {}", stats.clues_remaining());
}
