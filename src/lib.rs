//! base62 - Encode binary data as text using digits and ASCII letters

#![forbid(unsafe_code)]

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod input;
pub mod linewrap;
pub mod transcode;
