//! HTTP handlers, one module per resource.

pub mod agent;
pub mod auth;
pub mod contact;
pub mod health;
pub mod inquiry;
pub mod property;
pub mod review;
