//! Agent directory entity.

pub mod model;

pub use model::{Agent, AgentContact, AgentSocial, CreateAgent, NewAgent, UpdateAgent};
