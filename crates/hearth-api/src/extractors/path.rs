//! Typed path parameter helpers.

use uuid::Uuid;

use hearth_core::error::AppError;

/// Parses a UUID from a path segment.
///
/// A malformed id is reported as if the record simply does not exist,
/// so `/api/properties/abc` and `/api/properties/<unknown-uuid>` look
/// identical to clients.
pub fn parse_uuid(s: &str, not_found_message: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(s).map_err(|_| AppError::not_found(not_found_message))
}
