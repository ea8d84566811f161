//! # ActorEntity Trait
//!
//! The contract a resource type implements to be stored by a
//! [`ResourceActor`](crate::ResourceActor). Associated types pin down the ID,
//! the creation and update payloads, the injected context and the error type,
//! so the actor loop is written once and reused for every resource.

use async_trait::async_trait;
use std::fmt::{Debug, Display};

/// Trait that any resource entity must implement to be managed by ResourceActor.
///
/// # Async & Context
/// The update hook is async so an entity may consult other actors. The
/// `Context` type is injected into hooks at `run()` time rather than at
/// construction ("late binding"); use `()` when there are no dependencies.
#[async_trait]
pub trait ActorEntity: Clone + Send + Sync + 'static {
    /// The unique identifier for this entity.
    /// Built from the actor's `i64` counter when a new entity is created.
    type Id: Eq + Clone + Send + Sync + Display + Debug + From<i64>;

    /// The data required to create a new instance.
    type Create: Send + Sync + Debug;

    /// The data required to update an existing instance.
    type Update: Send + Sync + Debug;

    /// The runtime context (dependencies) injected into the actor.
    type Context: Send + Sync;

    /// The error type for this entity.
    type Error: std::error::Error + Send + Sync + 'static;

    /// The identifier of this instance. Used by the actor's linear scans.
    fn id(&self) -> Self::Id;

    /// Construct the full entity from a freshly allocated ID and its payload.
    fn from_create_params(id: Self::Id, params: Self::Create) -> Result<Self, Self::Error>;

    /// Called when an update request matches this entity.
    /// The entity mutates its own state; the ID must not change.
    async fn on_update(
        &mut self,
        update: Self::Update,
        _ctx: &Self::Context,
    ) -> Result<(), Self::Error>;
}
