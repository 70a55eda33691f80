//! # hearth-core
//!
//! Shared foundation for the Hearth listing platform: the unified
//! [`AppError`] type, the [`AppResult`] alias, and the configuration
//! schemas loaded at startup.

pub mod config;
pub mod error;
pub mod result;

pub use config::AppConfig;
pub use error::{AppError, ErrorKind};
pub use result::AppResult;
