//! Property listing entity.

pub mod kind;
pub mod model;
pub mod status;

pub use kind::PropertyType;
pub use model::{CreateProperty, NewProperty, Property, UpdateProperty};
pub use status::PropertyStatus;
