//! Token stream with an explicit cursor.

use crate::error::ParseError;

/// Ordered token sequence plus a cursor at the next unconsumed token.
///
/// The cursor only moves forward. Exhaustion is a first-class value
/// ([`ParseError::EndOfInput`]), never a panic, so every caller decides
/// explicitly whether running out of tokens is an error at its
/// position.
#[derive(Debug)]
pub struct TokenStream {
    tokens: Vec<String>,
    cursor: usize,
}

impl TokenStream {
    /// Wrap a flat argument list.
    pub fn new(tokens: Vec<String>) -> Self {
        Self { tokens, cursor: 0 }
    }

    /// The current token, without consuming it.
    pub fn peek(&self) -> Result<&str, ParseError> {
        self.tokens
            .get(self.cursor)
            .map(String::as_str)
            .ok_or(ParseError::EndOfInput)
    }

    /// Consume and return the current token.
    pub fn advance(&mut self) -> Result<String, ParseError> {
        let token = self
            .tokens
            .get(self.cursor)
            .cloned()
            .ok_or(ParseError::EndOfInput)?;
        self.cursor += 1;
        Ok(token)
    }

    /// True when every token has been consumed.
    pub fn is_done(&self) -> bool {
        self.cursor >= self.tokens.len()
    }

    /// Tokens consumed so far.
    pub fn consumed(&self) -> &[String] {
        &self.tokens[..self.cursor]
    }

    /// The unconsumed suffix.
    pub fn remaining(&self) -> &[String] {
        &self.tokens[self.cursor..]
    }
}
