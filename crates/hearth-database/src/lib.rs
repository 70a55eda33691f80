//! # hearth-database
//!
//! PostgreSQL access layer: connection pool management, embedded
//! migrations, and one repository per collection. All queries are single
//! atomic statements; consistency is delegated entirely to Postgres.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::{DatabasePool, health_check};
