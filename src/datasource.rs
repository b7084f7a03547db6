//! The narrow contract the configuration-management host consumes: four
//! scalar input fields in, one computed `hash_id` string (or one typed
//! error) out. Everything else about the host protocol lives outside this
//! crate.

use crate::codec::Codec;
use crate::config::CodecConfig;
use crate::error::{HashIdError, Result};

/// The scalar fields supplied for one encode request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeInput {
    pub alphabet: String,
    /// Signed because the host delivers it as a signed integer; negatives
    /// are rejected here before the codec is built.
    pub min_length: i64,
    pub salt: String,
    pub encode_value: String,
}

/// Compute the `hash_id` output field for one request.
///
/// `encode_value` is hex-encoded byte-wise before encoding, so arbitrary
/// UTF-8 round-trips exactly through [`reverse`], including leading zero
/// bytes.
///
/// # Errors
///
/// Returns a configuration-kind error for an invalid alphabet or a
/// negative minimum length, and an encoding-kind error for an empty
/// value.
pub fn read(input: &EncodeInput) -> Result<String> {
    let codec = build_codec(input)?;
    let hash_id = codec.encode_hex(&hex::encode(input.encode_value.as_bytes()))?;
    log::trace!(
        "read hash id data source: {} bytes in, {} chars out",
        input.encode_value.len(),
        hash_id.len()
    );
    Ok(hash_id)
}

/// Invert [`read`]: recover the original `encode_value` from a `hash_id`
/// produced under the same alphabet, salt, and minimum length.
///
/// # Errors
///
/// Returns a decoding-kind error when the hash was not produced by this
/// configuration, or when the recovered bytes are not valid UTF-8.
pub fn reverse(input: &EncodeInput, hash_id: &str) -> Result<String> {
    let codec = build_codec(input)?;
    let hex_value = codec.decode_hex(hash_id)?;
    let bytes = hex::decode(&hex_value).map_err(|_| HashIdError::ReencodeMismatch {
        hash: hash_id.to_string(),
    })?;
    String::from_utf8(bytes).map_err(|_| HashIdError::ReencodeMismatch {
        hash: hash_id.to_string(),
    })
}

fn build_codec(input: &EncodeInput) -> Result<Codec> {
    if input.min_length < 0 {
        return Err(HashIdError::NegativeMinLength {
            value: input.min_length,
        });
    }
    let config = CodecConfig::new()
        .alphabet(input.alphabet.as_str())
        .salt(input.salt.as_str())
        .min_length(input.min_length as usize);
    Codec::new(&config)
}
