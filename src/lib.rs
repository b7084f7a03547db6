mod alphabet;
pub mod codec;
pub mod config;
pub mod datasource;
pub mod error;
mod nibble;

pub use codec::Codec;
pub use config::{CodecConfig, DEFAULT_ALPHABET};
pub use datasource::EncodeInput;
pub use error::{ErrorKind, HashIdError, Result};

/// Encode `value` under the given alphabet, salt, and minimum length,
/// returning its hash id.
///
/// # Errors
///
/// Returns a configuration-kind error for an invalid alphabet and an
/// encoding-kind error for an empty value.
pub fn hash_id(alphabet: &str, salt: &str, min_length: usize, value: &str) -> Result<String> {
    datasource::read(&EncodeInput {
        alphabet: alphabet.to_string(),
        min_length: min_length as i64,
        salt: salt.to_string(),
        encode_value: value.to_string(),
    })
}
