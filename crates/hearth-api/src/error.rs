//! Maps domain `AppError` to HTTP responses.

use hearth_core::error::AppError;
use hearth_entity::validate::Violation;

pub use hearth_core::error::ApiErrorResponse;

/// Collapse field violations into a single validation error.
///
/// One violated rule surfaces its own message; several surface a generic
/// message with every rule listed in `details`.
pub fn validation_error(violations: Vec<Violation>) -> AppError {
    if violations.len() == 1 {
        AppError::validation_details(violations[0].message.clone(), violations)
    } else {
        AppError::validation_details("Validation Error", violations)
    }
}
