//! # User Actor
//!
//! The user directory as a resource actor: one task owns the ordered list of
//! [`User`] records and the ID counter, and serves every request in turn.
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](actor_framework::ActorEntity) implementation for [`User`]
//! - [`error`] - [`UserError`] type for type-safe error handling
//! - [`new()`] / [`with_users()`] - Factory functions that create the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use user_directory::user_actor;
//! use user_directory::model::UserInput;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = user_actor::new(32);
//!     tokio::spawn(actor.run(()));
//!
//!     let input = UserInput {
//!         full_name: "Linh Pham".to_string(),
//!         ..UserInput::default()
//!     };
//!     let user = client.create_user(input).await?;
//!     assert_eq!(user.id.0, 3);
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::UserClient;
use crate::model::{seed_users, User};
use actor_framework::ResourceActor;

/// Creates a User actor pre-loaded with the seed records, and its client.
pub fn new(buffer_size: usize) -> (ResourceActor<User>, UserClient) {
    with_users(buffer_size, seed_users())
}

/// Creates a User actor holding `users`; the ID counter starts at `users.len()`.
pub fn with_users(buffer_size: usize, users: Vec<User>) -> (ResourceActor<User>, UserClient) {
    let (actor, generic_client) = ResourceActor::with_entities(buffer_size, users);
    (actor, UserClient::new(generic_client))
}
