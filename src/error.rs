use thiserror::Error;

/// Result type for guga translator operations
pub type Result<T> = std::result::Result<T, GugaError>;

/// Decoding pipeline stage where validation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeStage {
    Tokenize,
    LengthValidation,
    CodeLookup,
    Base64Decode,
    Utf8Decode,
}

impl std::fmt::Display for DecodeStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecodeStage::Tokenize => write!(f, "tokenize"),
            DecodeStage::LengthValidation => write!(f, "length validation"),
            DecodeStage::CodeLookup => write!(f, "code lookup"),
            DecodeStage::Base64Decode => write!(f, "base64 decoding"),
            DecodeStage::Utf8Decode => write!(f, "utf-8 decoding"),
        }
    }
}

/// Error types for guga translation
#[derive(Error, Debug)]
pub enum GugaError {
    /// No alphabet token matches the input at `position` (byte offset)
    #[error("Input contains an invalid character combination at byte {position}")]
    InvalidToken { position: usize },

    /// Token count is not a multiple of the code width
    #[error("Input length invalid for 3-symbol grouping: {tokens} symbols")]
    InvalidLength { tokens: usize },

    /// A 3-symbol group has no entry in the decoding table
    #[error("Input contains an undecodable symbol combination: \"{0}\"")]
    UnknownCode(String),

    /// The reassembled Base64 string was rejected
    #[error("Base64 decoding failed: {0}")]
    Base64Decode(#[from] base64::DecodeError),

    /// Bytes are not valid UTF-8 text
    #[error("UTF-8 decoding failed: {0}")]
    Utf8Decode(#[from] std::str::Utf8Error),

    /// Alphabet cannot form a bijective code table
    #[error("Invalid alphabet: {0}")]
    InvalidAlphabet(String),

    /// Transport operation tag is neither `encode` nor `decode`
    #[error("Unknown operation: {0}")]
    UnknownOperation(String),
}

impl From<std::string::FromUtf8Error> for GugaError {
    fn from(err: std::string::FromUtf8Error) -> Self {
        GugaError::Utf8Decode(err.utf8_error())
    }
}

impl GugaError {
    /// The decoding stage that produced this error, if any
    pub fn stage(&self) -> Option<DecodeStage> {
        match self {
            GugaError::InvalidToken { .. } => Some(DecodeStage::Tokenize),
            GugaError::InvalidLength { .. } => Some(DecodeStage::LengthValidation),
            GugaError::UnknownCode(_) => Some(DecodeStage::CodeLookup),
            GugaError::Base64Decode(_) => Some(DecodeStage::Base64Decode),
            GugaError::Utf8Decode(_) => Some(DecodeStage::Utf8Decode),
            GugaError::InvalidAlphabet(_) | GugaError::UnknownOperation(_) => None,
        }
    }
}
