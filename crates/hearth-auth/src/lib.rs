//! # hearth-auth
//!
//! Authentication and authorization for the Hearth platform.
//!
//! ## Modules
//!
//! - `jwt` — bearer token creation and validation
//! - `password` — Argon2id password hashing
//! - `ownership` — record-level ownership checks for mutations
//! - `gate` — role-based access checks

pub mod gate;
pub mod jwt;
pub mod ownership;
pub mod password;

pub use gate::authorize_roles;
pub use jwt::{Claims, JwtDecoder, JwtEncoder, TokenError};
pub use ownership::authorize_mutation;
pub use password::PasswordHasher;
