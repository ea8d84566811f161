//! Pure data structures (DTOs). [`User`] implements the [`ActorEntity`](actor_framework::ActorEntity) trait.

pub mod user;

pub use user::*;
