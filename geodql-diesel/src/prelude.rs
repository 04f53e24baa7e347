//! Convenience re-exports for geodql-diesel.
//!
//! ```rust,ignore
//! use geodql_diesel::prelude::*;
//! ```

pub use crate::backend::DieselPlatform;
pub use crate::literal::{render_for, sql_literal};
pub use geodql_core::{FunctionCall, FunctionRegistry, GeoDqlError};
