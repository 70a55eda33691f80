//! Record-level ownership checks for mutations.

use uuid::Uuid;

use hearth_core::error::AppError;
use hearth_core::result::AppResult;

/// Checks whether `caller` may mutate a record owned by `owner`.
///
/// A record with no recorded owner (legacy data) is mutable by any
/// authenticated caller. Rejections carry the caller-facing message
/// "Not authorized to {action} this {resource}" and map to 401, not
/// 403, matching the rest of the auth surface.
pub fn authorize_mutation(
    owner: Option<Uuid>,
    caller: Uuid,
    action: &str,
    resource: &str,
) -> AppResult<()> {
    match owner {
        Some(owner_id) if owner_id != caller => Err(AppError::unauthorized(format!(
            "Not authorized to {action} this {resource}"
        ))),
        _ => Ok(()),
    }
}
