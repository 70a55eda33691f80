//! Contact message intake entity.

pub mod model;

pub use model::{ContactMessage, CreateContactMessage, NewContactMessage};
