//! # Actor Framework
//!
//! Building blocks for owning a collection of resources inside a single Tokio
//! task and exposing it through a cloneable async client. It pairs a
//! **Resource-Oriented** API (list, get, create, update, delete) with the
//! **Actor Model** (isolated state, message passing, sequential processing).
//!
//! ## Core Components
//!
//! - [`ActorEntity`]: the trait a resource implements (ID, payload types, update hook).
//! - [`ResourceActor`]: the server. Owns an ordered `Vec<T>` plus an ID counter.
//! - [`ResourceClient`]: the client. Sends a [`ResourceRequest`] and awaits the reply.
//! - [`ActorClient`]: trait that gives domain-specific wrappers `list`/`get` for free.
//! - [`FrameworkError`]: plumbing failures (`ActorClosed`, `ActorDropped`) and `NotFound`.
//! - [`mock::MockClient`]: scripted stand-in for an actor, for unit tests.
//!
//! ## Ordering & IDs
//!
//! Entities are kept in insertion order and looked up by linear scan. A delete
//! removes the entry and shifts later ones down without reordering them. IDs
//! come from a counter that starts at the seed count and only ever increases,
//! so a deleted ID is never handed out again.
//!
//! ## Concurrency Model
//!
//! - Each actor runs in its own Tokio task.
//! - Messages are processed **sequentially** within an actor, so check-then-act
//!   sequences (scan then mutate, bump counter then append) cannot interleave.
//! - Clients are `Clone` and may be used from any number of tasks.
//!
//! ## Lifecycle
//!
//! ```rust,ignore
//! let (actor, client) = ResourceActor::<User>::with_entities(32, seed);
//! let handle = tokio::spawn(actor.run(()));
//! // ... use client ...
//! drop(client);          // closes the channel
//! handle.await?;         // actor logs "Shutdown" and exits
//! ```

pub mod actor;
pub mod client;
pub mod client_trait;
pub mod entity;
pub mod error;
pub mod message;
pub mod mock;

// Re-export core types for convenience
pub use actor::ResourceActor;
pub use client::ResourceClient;
pub use client_trait::ActorClient;
pub use entity::ActorEntity;
pub use error::FrameworkError;
pub use message::{ResourceRequest, Response};
