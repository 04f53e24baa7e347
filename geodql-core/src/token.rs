//! Token-stream capability consumed by function-call parsing.
//!
//! Lexing belongs to the host query language. The node only needs to look one
//! token ahead and to consume tokens of a few structural kinds, so the host
//! exposes its stream through [`TokenConsumer`]. Anything the node does not
//! care about is reported as [`TokenKind::Other`].

use std::fmt;

use crate::error::{GeoDqlError, Result};

/// Structural token kinds the argument parser inspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Identifier,
    OpenParenthesis,
    CloseParenthesis,
    Comma,
    Other,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TokenKind::Identifier => "identifier",
            TokenKind::OpenParenthesis => "'('",
            TokenKind::CloseParenthesis => "')'",
            TokenKind::Comma => "','",
            TokenKind::Other => "token",
        };
        f.write_str(label)
    }
}

/// Borrowed view of the token at the head of a stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    pub text: &'a str,
    /// Offset of the token in the host's input, used for diagnostics.
    pub position: usize,
}

/// An already-lexed token owned by a [`TokenCursor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnedToken {
    pub kind: TokenKind,
    pub text: String,
    pub position: usize,
}

impl OwnedToken {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: usize) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
        }
    }

    pub fn as_token(&self) -> Token<'_> {
        Token {
            kind: self.kind,
            text: &self.text,
            position: self.position,
        }
    }
}

/// Lookahead-one access to a host token stream.
pub trait TokenConsumer {
    /// The next token, without consuming it. `None` at end of input.
    fn peek(&self) -> Option<Token<'_>>;

    /// Consume the next token. No-op at end of input.
    fn advance(&mut self);

    /// Position of the end of input, reported when a token is missing there.
    fn position(&self) -> usize;

    fn at(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|token| token.kind == kind)
    }

    /// Consume the next token if it is of `kind`, otherwise fail with
    /// [`GeoDqlError::Syntax`] describing what was found instead.
    fn expect(&mut self, kind: TokenKind) -> Result<()> {
        let mismatch = match self.peek() {
            Some(token) if token.kind == kind => None,
            Some(token) => Some((format!("'{}'", token.text), token.position)),
            None => Some(("end of input".to_string(), self.position())),
        };

        match mismatch {
            None => {
                self.advance();
                Ok(())
            }
            Some((found, position)) => Err(GeoDqlError::Syntax {
                expected: kind,
                found,
                position,
            }),
        }
    }
}

impl<T: TokenConsumer + ?Sized> TokenConsumer for &mut T {
    fn peek(&self) -> Option<Token<'_>> {
        (**self).peek()
    }

    fn advance(&mut self) {
        (**self).advance();
    }

    fn position(&self) -> usize {
        (**self).position()
    }
}

/// A [`TokenConsumer`] over a vector of tokens the host has already lexed.
#[derive(Debug, Clone, Default)]
pub struct TokenCursor {
    tokens: Vec<OwnedToken>,
    index: usize,
}

impl TokenCursor {
    pub fn new(tokens: Vec<OwnedToken>) -> Self {
        Self { tokens, index: 0 }
    }

    /// Tokens not yet consumed.
    pub fn remaining(&self) -> &[OwnedToken] {
        &self.tokens[self.index..]
    }

    pub fn is_at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }
}

impl FromIterator<OwnedToken> for TokenCursor {
    fn from_iter<I: IntoIterator<Item = OwnedToken>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TokenConsumer for TokenCursor {
    fn peek(&self) -> Option<Token<'_>> {
        self.tokens.get(self.index).map(OwnedToken::as_token)
    }

    fn advance(&mut self) {
        if self.index < self.tokens.len() {
            self.index += 1;
        }
    }

    fn position(&self) -> usize {
        self.tokens
            .last()
            .map_or(0, |token| token.position + token.text.len())
    }
}
