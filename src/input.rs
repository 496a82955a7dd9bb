//! Sources of input data

use crate::error::{Base62Error, ErrorCategory, ErrorKind, Result};
use std::io::Read;

/// Trait for reading the complete input to be encoded or decoded
pub trait InputReader {
    /// Read the whole input as arbitrary bytes (not necessarily UTF-8)
    fn read_input(&mut self) -> Result<Vec<u8>>;
}

/// Hands over a fixed byte string, such as a command-line argument
///
/// The data is moved out on the first read; later reads return nothing.
pub struct ArgumentInputReader {
    data: Vec<u8>,
}

impl ArgumentInputReader {
    pub fn new(data: Vec<u8>) -> Self {
        Self { data }
    }
}

impl InputReader for ArgumentInputReader {
    fn read_input(&mut self) -> Result<Vec<u8>> {
        Ok(std::mem::take(&mut self.data))
    }
}

/// Reads input to the end of any io::Read source
pub struct StreamInputReader {
    reader: Box<dyn Read>,
}

impl StreamInputReader {
    pub fn new(reader: Box<dyn Read>) -> Self {
        Self { reader }
    }
}

impl InputReader for StreamInputReader {
    fn read_input(&mut self) -> Result<Vec<u8>> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data).map_err(|e| {
            Base62Error::with_kind_and_source(
                ErrorCategory::Internal,
                ErrorKind::Io,
                format!("Error reading input: {}", e),
                e,
            )
        })?;
        Ok(data)
    }
}
