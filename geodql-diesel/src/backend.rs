//! Platform identifiers for Diesel backends.
//!
//! Each enabled Diesel backend maps onto the platform name that function
//! allow-lists are declared with, so rendering can be driven by the backend
//! type a query is built for.

/// A Diesel backend that geodql can render function calls for.
pub trait DieselPlatform: diesel::backend::Backend {
    /// Identifier checked against function allow-lists.
    const PLATFORM: &'static str;
}

#[cfg(feature = "sqlite")]
impl DieselPlatform for diesel::sqlite::Sqlite {
    const PLATFORM: &'static str = geodql_core::platform::SQLITE;
}

#[cfg(feature = "postgres")]
impl DieselPlatform for diesel::pg::Pg {
    const PLATFORM: &'static str = geodql_core::platform::POSTGRESQL;
}

#[cfg(feature = "mysql")]
impl DieselPlatform for diesel::mysql::Mysql {
    const PLATFORM: &'static str = geodql_core::platform::MYSQL;
}
