//! Integration test harness.
//!
//! These tests run the full router against a live PostgreSQL instance
//! (TEST_DATABASE_URL, defaulting to a local `hearth_test` database) and
//! are ignored by default.

mod helpers;

mod agent_test;
mod auth_test;
mod contact_test;
mod inquiry_test;
mod property_test;
mod review_test;
