use crate::error::{GugaError, Result};
use std::str::FromStr;

/// Number of symbols in an alphabet; each symbol is one base-5 digit
pub const ALPHABET_SIZE: usize = 5;

/// The penguin alphabet, in digit order 0-4
pub const DEFAULT_SYMBOLS: [&str; ALPHABET_SIZE] = ["咕", "嘎", "🐧", "🍄", "哇擦"];

/// An ordered set of five distinct, non-empty symbols.
///
/// Position in the set is the digit value of the symbol. Symbols may be
/// multi-character; the tokenizer always tries longer symbols first, so a
/// symbol that is a prefix of another never shadows it. Prefix pairs that
/// would still mislead the tokenizer are reported by [`Alphabet::greedy_conflict`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alphabet {
    symbols: [String; ALPHABET_SIZE],
    /// Digits sorted by descending symbol length
    match_order: [usize; ALPHABET_SIZE],
}

impl Alphabet {
    /// Create an alphabet, rejecting empty or duplicated symbols
    pub fn new<S: Into<String>>(symbols: [S; ALPHABET_SIZE]) -> Result<Self> {
        let symbols: [String; ALPHABET_SIZE] = symbols.map(Into::into);

        for (digit, symbol) in symbols.iter().enumerate() {
            if symbol.is_empty() {
                return Err(GugaError::InvalidAlphabet(format!("symbol {} is empty", digit)));
            }
            if symbols[..digit].contains(symbol) {
                return Err(GugaError::InvalidAlphabet(format!("symbol \"{}\" appears twice", symbol)));
            }
        }

        let mut match_order = [0, 1, 2, 3, 4];
        // Stable, so equal lengths keep alphabet order
        match_order.sort_by_key(|&digit| std::cmp::Reverse(symbols[digit].chars().count()));

        Ok(Alphabet { symbols, match_order })
    }

    /// Symbol for a digit value 0-4
    pub fn symbol(&self, digit: usize) -> Option<&str> {
        self.symbols.get(digit).map(String::as_str)
    }

    pub fn symbols(&self) -> &[String; ALPHABET_SIZE] {
        &self.symbols
    }

    /// Find the longest symbol that starts `input`
    pub fn longest_match(&self, input: &str) -> Option<&str> {
        self.match_order
            .iter()
            .map(|&digit| self.symbols[digit].as_str())
            .find(|symbol| input.starts_with(symbol))
    }

    /// Find a symbol pair that can make longest-match tokenizing go wrong.
    ///
    /// When `short` is a proper prefix of `long`, the text `short` followed by
    /// more symbols would be read as `long` if those symbols can start with the
    /// leftover of `long`. That is only impossible when the leftover neither
    /// starts any symbol nor has any symbol as its own prefix.
    pub fn greedy_conflict(&self) -> Option<(&str, &str)> {
        for short in &self.symbols {
            for long in &self.symbols {
                let Some(rest) = long.strip_prefix(short.as_str()) else {
                    continue;
                };
                if rest.is_empty() {
                    continue;
                }
                let overlaps = self
                    .symbols
                    .iter()
                    .any(|symbol| symbol.starts_with(rest) || rest.starts_with(symbol.as_str()));
                if overlaps {
                    return Some((short.as_str(), long.as_str()));
                }
            }
        }
        None
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Alphabet {
            symbols: DEFAULT_SYMBOLS.map(String::from),
            // 哇擦 is the only two-character symbol
            match_order: [4, 0, 1, 2, 3],
        }
    }
}

impl FromStr for Alphabet {
    type Err = GugaError;

    /// Parse a comma-separated list of exactly five symbols
    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        let parts: Vec<&str> = value.split(',').map(str::trim).collect();
        let symbols: [&str; ALPHABET_SIZE] = parts.as_slice().try_into().map_err(|_| {
            GugaError::InvalidAlphabet(format!("expected {} symbols, got {}", ALPHABET_SIZE, parts.len()))
        })?;
        Alphabet::new(symbols)
    }
}

impl std::fmt::Display for Alphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbols.join(","))
    }
}
