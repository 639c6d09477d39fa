use std::borrow::Cow;

use base64::alphabet::STANDARD;
use base64::engine::general_purpose::{GeneralPurpose, GeneralPurposeConfig, STANDARD as BASE64_STANDARD};
use base64::Engine;
use once_cell::sync::Lazy;
use tracing::debug;

use crate::alphabet::Alphabet;
use crate::error::{GugaError, Result};
use crate::table::{base64_char, base64_index, CodeTables, BASE64_PAD, CODE_WIDTH, DEFAULT_TABLES};
use crate::tokenizer::tokenize;

/// Standard alphabet with padding, tolerating non-zero bits in the last symbol
const BASE64_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &STANDARD,
    GeneralPurposeConfig::new().with_decode_allow_trailing_bits(true),
);

static DEFAULT_TRANSLATOR: Lazy<Translator> = Lazy::new(Translator::default);

/// Shared translator for the default penguin alphabet
pub fn default_translator() -> &'static Translator {
    &DEFAULT_TRANSLATOR
}

/// Translates text to and from an emoji alphabet.
///
/// Text is turned into standard Base64, then every Base64 character (except
/// padding) is replaced by its three-symbol code. Decoding reverses each step
/// and fails at the first stage that rejects the input.
#[derive(Debug, Clone)]
pub struct Translator {
    alphabet: Alphabet,
    tables: Cow<'static, CodeTables>,
}

impl Translator {
    /// Create a translator for a custom alphabet
    pub fn new(alphabet: Alphabet) -> Result<Self> {
        let tables = CodeTables::build(&alphabet)?;
        Ok(Translator {
            alphabet,
            tables: Cow::Owned(tables),
        })
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn tables(&self) -> &CodeTables {
        &self.tables
    }

    /// Encode text into emoji codes. Never fails.
    pub fn encode_text(&self, text: &str) -> String {
        let base64 = BASE64_STANDARD.encode(text.as_bytes());

        let mut encoded = String::with_capacity(base64.len() * CODE_WIDTH * 4);
        for c in base64.chars() {
            if c == BASE64_PAD {
                continue;
            }
            if let Some(code) = base64_index(c).and_then(|index| self.tables.code(index)) {
                encoded.push_str(code);
            }
        }
        encoded
    }

    /// Decode emoji codes back into text
    pub fn decode_text(&self, input: &str) -> Result<String> {
        let tokens = tokenize(&self.alphabet, input)?;
        debug!(tokens = tokens.len(), "tokenized input");

        if tokens.len() % CODE_WIDTH != 0 {
            return Err(GugaError::InvalidLength { tokens: tokens.len() });
        }

        // Tokens are contiguous, so each group is a slice of the input
        let mut base64 = String::with_capacity(tokens.len() / CODE_WIDTH + 3);
        let mut offset = 0;
        for group in tokens.chunks(CODE_WIDTH) {
            let len: usize = group.iter().map(|token| token.len()).sum();
            let code = &input[offset..offset + len];
            offset += len;

            let c = self
                .tables
                .index_of(code)
                .and_then(base64_char)
                .ok_or_else(|| GugaError::UnknownCode(code.to_string()))?;
            base64.push(c);
        }

        let padding = (4 - base64.len() % 4) % 4;
        base64.extend(std::iter::repeat(BASE64_PAD).take(padding));
        debug!(base64 = %base64, "reassembled base64");

        let bytes = BASE64_LENIENT.decode(&base64)?;
        Ok(String::from_utf8(bytes)?)
    }

    /// Encode a UTF-8 payload, returning the UTF-8 bytes of the emoji text
    pub fn encode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(raw)?;
        Ok(self.encode_text(text).into_bytes())
    }

    /// Decode a UTF-8 emoji payload, returning the UTF-8 bytes of the recovered text
    pub fn decode(&self, raw: &[u8]) -> Result<Vec<u8>> {
        let text = std::str::from_utf8(raw)?;
        Ok(self.decode_text(text)?.into_bytes())
    }
}

impl Default for Translator {
    fn default() -> Self {
        Translator {
            alphabet: Alphabet::default(),
            tables: Cow::Borrowed(&*DEFAULT_TABLES),
        }
    }
}
