//! Rendering function calls for a Diesel backend.
//!
//! # Example
//!
//! ```rust,ignore
//! use diesel::prelude::*;
//! use diesel::sql_types::Double;
//! use geodql_diesel::prelude::*;
//!
//! let registry = FunctionRegistry::postgresql()?;
//! let call = /* parsed by the host query language */;
//! let distance = sql_literal::<diesel::pg::Pg, Double, _, _>(&call, |arg| compile(arg))?;
//! let rows: Vec<f64> = diesel::select(distance).load(&mut conn)?;
//! ```

use diesel::expression::{SqlLiteral, TypedExpressionType};
use diesel::sql_types::SqlType;
use geodql_core::{FunctionCall, Result};

use crate::backend::DieselPlatform;

/// Render `call` for the platform of backend `DB`.
pub fn render_for<DB, E, F>(call: &FunctionCall<'_, E>, render_argument: F) -> Result<String>
where
    DB: DieselPlatform,
    F: FnMut(&E) -> Result<String>,
{
    call.render(DB::PLATFORM, render_argument)
}

/// Render `call` for backend `DB` and wrap it as a raw SQL expression of
/// type `ST`, usable anywhere Diesel accepts an expression.
///
/// The allow-list is checked against `DB`, so a call rejected here never
/// reaches the query builder.
pub fn sql_literal<DB, ST, E, F>(
    call: &FunctionCall<'_, E>,
    render_argument: F,
) -> Result<SqlLiteral<ST>>
where
    DB: DieselPlatform,
    ST: SqlType + TypedExpressionType,
    F: FnMut(&E) -> Result<String>,
{
    let rendered = render_for::<DB, E, F>(call, render_argument)?;
    Ok(diesel::dsl::sql::<ST>(&rendered))
}
