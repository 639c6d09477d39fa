//! Code table generation: maps each of the 64 Base64 characters to a
//! three-symbol code by writing its index as a three-digit base-5 number.
use crate::alphabet::{Alphabet, ALPHABET_SIZE};
use crate::error::{GugaError, Result};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use tracing::trace;

/// Standard Base64 alphabet (RFC 4648); a character's position is its index
pub const BASE64_CHARS: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

/// Base64 padding character, never encoded
pub const BASE64_PAD: char = '=';

/// Number of Base64 characters, and therefore of codes
pub const TABLE_SIZE: usize = 64;

/// Symbols per code
pub const CODE_WIDTH: usize = 3;

// Reverse lookup from Base64 character to its index
lazy_static::lazy_static! {
    static ref BASE64_INDEX: HashMap<char, u8> = {
        let mut map = HashMap::with_capacity(TABLE_SIZE);
        for (i, c) in BASE64_CHARS.chars().enumerate() {
            map.insert(c, i as u8);
        }
        map
    };
}

/// Tables for the default alphabet, built on first use
pub static DEFAULT_TABLES: Lazy<CodeTables> = Lazy::new(|| CodeTables::build_unchecked(&Alphabet::default()));

/// Index of a Base64 character, `None` for padding or anything outside the alphabet
pub fn base64_index(c: char) -> Option<u8> {
    BASE64_INDEX.get(&c).copied()
}

/// Base64 character for an index 0-63
pub fn base64_char(index: u8) -> Option<char> {
    BASE64_CHARS.as_bytes().get(index as usize).map(|&b| b as char)
}

/// Split an index into base-5 digits, most significant first
pub fn index_digits(index: usize) -> [usize; CODE_WIDTH] {
    let d2 = index / (ALPHABET_SIZE * ALPHABET_SIZE);
    let rest = index % (ALPHABET_SIZE * ALPHABET_SIZE);
    [d2, rest / ALPHABET_SIZE, rest % ALPHABET_SIZE]
}

/// Encoding table (index to code) and its inverse
#[derive(Debug, Clone)]
pub struct CodeTables {
    encoding: Vec<String>,
    decoding: HashMap<String, u8>,
}

impl CodeTables {
    /// Build both tables for an alphabet.
    ///
    /// Fails if the longest-match tokenizer could split encoded text wrongly,
    /// or if two indices concatenate to the same code string. Both can only
    /// happen when one symbol is a prefix of another.
    pub fn build(alphabet: &Alphabet) -> Result<Self> {
        if let Some((short, long)) = alphabet.greedy_conflict() {
            return Err(GugaError::InvalidAlphabet(format!(
                "\"{}\" followed by other symbols can be read as \"{}\"",
                short, long
            )));
        }

        let tables = Self::build_unchecked(alphabet);
        if tables.decoding.len() != TABLE_SIZE {
            return Err(GugaError::InvalidAlphabet(format!(
                "symbols \"{}\" produce ambiguous codes",
                alphabet
            )));
        }
        Ok(tables)
    }

    fn build_unchecked(alphabet: &Alphabet) -> Self {
        let encoding: Vec<String> = (0..TABLE_SIZE)
            .map(|index| index_digits(index).iter().filter_map(|&d| alphabet.symbol(d)).collect())
            .collect();

        let mut decoding = HashMap::with_capacity(TABLE_SIZE);
        for (index, code) in encoding.iter().enumerate() {
            decoding.entry(code.clone()).or_insert(index as u8);
        }

        trace!(alphabet = %alphabet, codes = decoding.len(), "built code tables");
        CodeTables { encoding, decoding }
    }

    /// Code for a Base64 index 0-63
    pub fn code(&self, index: u8) -> Option<&str> {
        self.encoding.get(index as usize).map(String::as_str)
    }

    /// Base64 index for a code
    pub fn index_of(&self, code: &str) -> Option<u8> {
        self.decoding.get(code).copied()
    }

    pub fn codes(&self) -> &[String] {
        &self.encoding
    }

    /// Base64 characters paired with their codes, in index order
    pub fn entries(&self) -> impl Iterator<Item = (char, &str)> + '_ {
        BASE64_CHARS.chars().zip(self.encoding.iter().map(String::as_str))
    }
}
