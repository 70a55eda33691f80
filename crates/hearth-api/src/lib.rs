//! # hearth-api
//!
//! HTTP API layer for Hearth built on Axum.
//!
//! Provides the REST endpoints, extractors, DTOs, and error mapping for
//! the listing platform: properties, agents, reviews, seller inquiries,
//! contact messages, and account auth.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod router;
pub mod state;

pub use router::build_router;
pub use state::AppState;
