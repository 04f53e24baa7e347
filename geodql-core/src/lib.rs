#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geodql-core`.

pub mod arity;
pub mod error;
pub mod function_catalog;
pub mod node;
pub mod platform;
pub mod registry;
pub mod token;

pub use arity::{ArgumentBounds, MaxArgs};
pub use error::{GeoDqlError, Result};
pub use node::{ExpressionCompiler, FunctionCall, FunctionDefinition};
pub use platform::{AllowList, EmptyAllowList};
pub use registry::FunctionRegistry;
pub use token::{OwnedToken, Token, TokenConsumer, TokenCursor, TokenKind};
