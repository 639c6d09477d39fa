use crate::alphabet::Alphabet;
use crate::error::{GugaError, Result};

/// Split `input` into alphabet symbols, scanning left to right and taking the
/// longest matching symbol at each position. Tokens borrow from `input` and
/// are contiguous.
pub fn tokenize<'a>(alphabet: &Alphabet, input: &'a str) -> Result<Vec<&'a str>> {
    let mut tokens = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        let len = alphabet
            .longest_match(&input[pos..])
            .ok_or(GugaError::InvalidToken { position: pos })?
            .len();
        tokens.push(&input[pos..pos + len]);
        pos += len;
    }

    Ok(tokens)
}
