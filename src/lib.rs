//! Reversible translation between UTF-8 text and the five-symbol penguin
//! alphabet (`咕`, `嘎`, `🐧`, `🍄`, `哇擦`), layered on standard Base64.
//!
//! ```
//! let encoded = guga_translator::encode("你好".as_bytes()).unwrap();
//! let decoded = guga_translator::decode(&encoded).unwrap();
//! assert_eq!(decoded, "你好".as_bytes());
//! ```

pub mod alphabet;
pub mod codec;
pub mod error;
pub mod table;
pub mod tokenizer;
pub mod transport;

#[cfg(feature = "wasm-bindgen")]
pub mod wasm;

#[cfg(test)]
mod tests;

pub use alphabet::{Alphabet, DEFAULT_SYMBOLS};
pub use codec::{default_translator, Translator};
pub use error::{DecodeStage, GugaError, Result};
pub use transport::{Operation, Request, Response};

/// Encode a UTF-8 payload with the default alphabet
pub fn encode(raw: &[u8]) -> Result<Vec<u8>> {
    default_translator().encode(raw)
}

/// Decode an emoji payload with the default alphabet
pub fn decode(raw: &[u8]) -> Result<Vec<u8>> {
    default_translator().decode(raw)
}
