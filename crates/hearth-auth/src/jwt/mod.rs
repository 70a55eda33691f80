//! Bearer token creation and validation.

mod claims;
mod decoder;
mod encoder;

pub use claims::Claims;
pub use decoder::{JwtDecoder, TokenError};
pub use encoder::JwtEncoder;
