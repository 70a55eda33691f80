//! # hearth-entity
//!
//! Entity models for the Hearth listing platform. Each collection gets a
//! persisted model, create/update payload structs, and an explicit
//! validator returning the full list of violated field rules.

pub mod agent;
pub mod contact;
pub mod inquiry;
pub mod property;
pub mod review;
pub mod user;
pub mod validate;

pub use validate::Violation;
