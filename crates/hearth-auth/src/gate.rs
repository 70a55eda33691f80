//! Role-based access checks.
//!
//! No current route restricts by role, but the check is part of the auth
//! surface so that role-gated admin routes can be added without touching
//! the extractor.

use hearth_core::error::AppError;
use hearth_core::result::AppResult;

/// Checks that the caller's role, if any, is in the allowed set.
///
/// A caller with no role is always rejected. Rejections map to 403
/// rather than 401 since the caller is authenticated, just not
/// privileged enough.
pub fn authorize_roles(role: Option<&str>, allowed: &[&str]) -> AppResult<()> {
    match role {
        Some(role) if allowed.contains(&role) => Ok(()),
        _ => Err(AppError::forbidden("Forbidden")),
    }
}
