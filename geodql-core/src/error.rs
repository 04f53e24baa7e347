use thiserror::Error;

use crate::token::TokenKind;

#[derive(Debug, Error)]
pub enum GeoDqlError {
    #[error("syntax error at position {position}: expected {expected}, got {found}")]
    Syntax {
        expected: TokenKind,
        found: String,
        position: usize,
    },

    #[error("platform \"{0}\" is not currently supported")]
    UnsupportedPlatform(String),

    #[error("unknown function: {0}")]
    UnknownFunction(String),

    #[error("function already registered: {0}")]
    DuplicateFunction(String),

    #[error("invalid function definition: {0}")]
    InvalidDefinition(String),

    #[error("invalid registry configuration: {0}")]
    Config(#[from] serde_json::Error),

    #[error("{0}")]
    InvalidInput(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GeoDqlError>;
