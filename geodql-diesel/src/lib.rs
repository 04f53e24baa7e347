#![doc = include_str!("../../README.md")]
//! Crate-specific API surface for `geodql-diesel`.

pub mod backend;
pub mod literal;
pub mod prelude;

pub use backend::DieselPlatform;
pub use literal::{render_for, sql_literal};
