//! Chunking between hexadecimal strings and codec numbers.
//!
//! Arbitrary byte strings must round-trip exactly, including leading zero
//! bytes, so every chunk of up to 12 hex digits is carried inside a `u64`
//! behind a sentinel nibble of `1`. `"00ff"` becomes `0x100ff`, not `0xff`.

use crate::error::{HashIdError, Result};

/// Hex digits carried per number; 12 payload nibbles plus the sentinel
/// stay comfortably inside a `u64`.
const NIBBLES_PER_CHUNK: usize = 12;

/// Split a hex string into sentinel-prefixed numbers.
pub(crate) fn pack(hex: &str) -> Result<Vec<u64>> {
    let digits: Vec<char> = hex.chars().collect();
    let mut numbers = Vec::with_capacity(digits.len() / NIBBLES_PER_CHUNK + 1);
    for chunk in digits.chunks(NIBBLES_PER_CHUNK) {
        let mut number = 1_u64;
        for &ch in chunk {
            let nibble = ch.to_digit(16).ok_or(HashIdError::InvalidHexDigit { ch })?;
            number = number << 4 | u64::from(nibble);
        }
        numbers.push(number);
    }
    Ok(numbers)
}

/// Rejoin sentinel-prefixed numbers into the original hex string.
pub(crate) fn unpack(numbers: &[u64]) -> Result<String> {
    let mut out = String::with_capacity(numbers.len() * NIBBLES_PER_CHUNK);
    for &number in numbers {
        let formatted = format!("{number:x}");
        match formatted.strip_prefix('1') {
            Some(payload) => out.push_str(payload),
            None => return Err(HashIdError::MissingHexSentinel { number }),
        }
    }
    Ok(out)
}
