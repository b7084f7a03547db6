/// The three failure families the host adapter distinguishes.
///
/// Configuration errors are detected at construction and never at
/// encode/decode time; encoding and decoding errors belong to their
/// respective call sites.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Configuration,
    Encoding,
    Decoding,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HashIdError {
    #[error("alphabet must contain at least 16 unique characters, found {found}")]
    AlphabetTooShort { found: usize },

    #[error("alphabet must not contain whitespace")]
    AlphabetWhitespace,

    #[error("duplicate character '{ch}' in alphabet")]
    DuplicateCharacter { ch: char },

    #[error("minimum length must be non-negative, got {value}")]
    NegativeMinLength { value: i64 },

    #[error("cannot encode an empty sequence of numbers")]
    NothingToEncode,

    #[error("character '{ch}' is not part of the codec alphabet")]
    UnknownCharacter { ch: char },

    #[error("hash is missing its lottery character")]
    MissingLottery,

    #[error("decoded numbers do not re-encode to '{hash}'")]
    ReencodeMismatch { hash: String },

    #[error("invalid hex digit '{ch}'")]
    InvalidHexDigit { ch: char },

    #[error("number {number:#x} is missing the hex sentinel nibble")]
    MissingHexSentinel { number: u64 },
}

impl HashIdError {
    /// Which failure family this error belongs to.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AlphabetTooShort { .. }
            | Self::AlphabetWhitespace
            | Self::DuplicateCharacter { .. }
            | Self::NegativeMinLength { .. } => ErrorKind::Configuration,
            Self::NothingToEncode | Self::InvalidHexDigit { .. } => ErrorKind::Encoding,
            Self::UnknownCharacter { .. }
            | Self::MissingLottery
            | Self::ReencodeMismatch { .. }
            | Self::MissingHexSentinel { .. } => ErrorKind::Decoding,
        }
    }
}

pub type Result<T> = std::result::Result<T, HashIdError>;
