//! # User Directory
//!
//! A small REST/JSON service over an in-memory, insertion-ordered list of
//! user records.
//!
//! - **[model]**: [`User`](model::User), [`UserInput`](model::UserInput) and the seed records.
//! - **[user_actor]**: the [`ActorEntity`](actor_framework::ActorEntity) impl and [`UserError`](user_actor::UserError).
//! - **[clients]**: [`UserClient`](clients::UserClient), which applies the directory rules.
//! - **[api]**: the axum router and the error-to-status mapping.
//! - **[lifecycle]**: [`DirectorySystem`](lifecycle::DirectorySystem) and tracing setup.
//! - **[config]**: [`ServerConfig`](config::ServerConfig).
//!
//! All state lives in one actor task, so concurrent requests are applied one
//! at a time and ID allocation never races.

pub mod api;
pub mod clients;
pub mod config;
pub mod lifecycle;
pub mod model;
pub mod user_actor;
