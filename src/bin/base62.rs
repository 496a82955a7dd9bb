//! base62 CLI - Encode or decode data as base62 text
//!
//! Reads the positional argument, or standard input when it is absent, and
//! writes the transformed data to standard output.

use clap::Parser;
use std::ffi::OsString;
use std::io;
use std::process;

use base62::input::{ArgumentInputReader, InputReader, StreamInputReader};
use base62::transcode::{self, Mode};

#[derive(Parser)]
#[command(name = "base62")]
#[command(version)]
#[command(about = "Encode or decode data as base62.", long_about = None)]
#[command(after_help = "If no input is provided, the program reads from stdin.\n\
    Decoding removes all line breaks from the input, whatever the wrap width.")]
struct Cli {
    /// Decode mode (the default is to encode)
    #[arg(short, long)]
    decode: bool,

    /// Wrap encoded output after WIDTH characters (0 or less for no wrapping)
    #[arg(
        short,
        long,
        value_name = "WIDTH",
        default_value_t = 0,
        allow_negative_numbers = true
    )]
    wrap: i64,

    /// Data to transform instead of standard input
    input: Option<OsString>,
}

fn main() {
    let cli = Cli::parse();

    let mode = if cli.decode {
        Mode::Decode
    } else {
        Mode::Encode { wrap: cli.wrap }
    };
    let mut reader = get_input_reader(cli.input);
    let mut stdout = io::stdout().lock();

    if let Err(e) = transcode::run(mode, &mut *reader, &mut stdout) {
        eprintln!("{}", e);
        process::exit(1);
    }
}

fn get_input_reader(input: Option<OsString>) -> Box<dyn InputReader> {
    match input {
        Some(arg) => Box::new(ArgumentInputReader::new(arg.into_encoded_bytes())),
        None => Box::new(StreamInputReader::new(Box::new(io::stdin()))),
    }
}
