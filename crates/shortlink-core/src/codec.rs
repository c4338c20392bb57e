//! Base-62 conversion between counter values and short code strings.
//!
//! The alphabet order (`a-z`, `A-Z`, `0-9`) is part of the output format:
//! changing it changes every code ever issued.

pub const ALPHABET: &[u8; 62] = b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

const BASE: u64 = ALPHABET.len() as u64;

/// Longest possible encoding of a `u64` (62^11 > 2^64).
const MAX_ENCODED_LEN: usize = 11;

/// Encodes `n` as a minimal-length base-62 string, most significant symbol first.
///
/// `encode(0)` is the first alphabet symbol; no padding is ever added.
pub fn encode(mut n: u64) -> String {
    if n == 0 {
        return char::from(ALPHABET[0]).to_string();
    }

    let mut buf = [0u8; MAX_ENCODED_LEN];
    let mut pos = buf.len();
    while n > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(n % BASE) as usize];
        n /= BASE;
    }

    buf[pos..].iter().map(|&b| char::from(b)).collect()
}

/// Decodes a base-62 string back into its counter value.
///
/// Returns `None` for an empty string, a symbol outside the alphabet, or a
/// value that does not fit in a `u64`.
pub fn decode(code: &str) -> Option<u64> {
    if code.is_empty() {
        return None;
    }

    code.bytes().try_fold(0u64, |acc, b| {
        let digit = symbol_value(b)?;
        acc.checked_mul(BASE)?.checked_add(digit)
    })
}

fn symbol_value(b: u8) -> Option<u64> {
    let value = match b {
        b'a'..=b'z' => b - b'a',
        b'A'..=b'Z' => b - b'A' + 26,
        b'0'..=b'9' => b - b'0' + 52,
        _ => return None,
    };
    Some(u64::from(value))
}
