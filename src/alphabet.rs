//! The base62 digit alphabet
//!
//! Digits, then uppercase, then lowercase letters. A symbol's position in
//! [`ALPHABET`] is its digit value.

/// Number of symbols, and the radix of the encoding.
pub const BASE: u32 = 62;

pub const ALPHABET: &[u8; BASE as usize] =
    b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Marks bytes that are not part of the alphabet in [`DIGITS`].
const INVALID: u8 = 0xFF;

/// Reverse lookup from ASCII byte to digit value.
static DIGITS: [u8; 256] = build_digit_table();

const fn build_digit_table() -> [u8; 256] {
    let mut table = [INVALID; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        table[ALPHABET[i] as usize] = i as u8;
        i += 1;
    }
    table
}

/// Symbol for a digit value. Panics if `digit >= BASE`.
pub fn symbol(digit: u8) -> char {
    ALPHABET[digit as usize] as char
}

/// Digit value of a symbol, or `None` if `c` is not in the alphabet.
pub fn digit_value(c: char) -> Option<u8> {
    if !c.is_ascii() {
        return None;
    }
    match DIGITS[c as usize] {
        INVALID => None,
        digit => Some(digit),
    }
}
