//! Encode/decode operations over whole inputs
//!
//! This module ties the pieces together: it reads the complete input from an
//! [`InputReader`], runs it through the codec and line wrapper, and writes the
//! result to an output stream.

use crate::codec;
use crate::error::{Base62Error, ErrorCategory, ErrorKind, Result};
use crate::input::InputReader;
use crate::linewrap;
use std::io::{self, Write};

/// Direction of the transform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Bytes to base62 text, wrapped every `wrap` characters when positive.
    Encode { wrap: i64 },
    /// Base62 text to bytes.
    Decode,
}

/// Run the transform selected by `mode` and flush `output`.
pub fn run(mode: Mode, input: &mut dyn InputReader, output: &mut dyn Write) -> Result<()> {
    match mode {
        Mode::Encode { wrap } => encode_input(input, wrap, output)?,
        Mode::Decode => decode_input(input, output)?,
    }
    output.flush().map_err(write_error)
}

/// Encode the input and write it as text followed by a single newline.
pub fn encode_input(input: &mut dyn InputReader, wrap: i64, output: &mut dyn Write) -> Result<()> {
    let data = input.read_input()?;
    let mut encoded = linewrap::wrap(&codec::encode(&data), wrap);
    encoded.push('\n');
    output
        .write_all(encoded.as_bytes())
        .map_err(write_error)
}

/// Decode the input and write the raw bytes, with no trailing newline.
///
/// All line breaks are removed before decoding, whatever width the text was
/// wrapped at. Input that is not valid UTF-8 is rejected as an invalid
/// character. Nothing is written unless the whole input decodes.
pub fn decode_input(input: &mut dyn InputReader, output: &mut dyn Write) -> Result<()> {
    let data = input.read_input()?;
    let text = String::from_utf8_lossy(&data);
    let decoded = codec::decode(&linewrap::unwrap(&text)).map_err(|e| {
        let msg = format!("Error decoding: {}", e);
        e.with_context(msg)
    })?;
    output
        .write_all(&decoded)
        .map_err(write_error)
}

fn write_error(err: io::Error) -> Base62Error {
    Base62Error::with_kind_and_source(
        ErrorCategory::Internal,
        ErrorKind::Io,
        format!("Error writing output: {}", err),
        err,
    )
}
