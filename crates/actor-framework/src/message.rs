//! # Generic Messages
//!
//! Request messages sent from a `ResourceClient` to its `ResourceActor`.

use crate::entity::ActorEntity;
use crate::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by actors.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// Internal message type sent to the actor to request operations.
///
/// The variants map onto the CRUD lifecycle of an ordered collection:
///
/// - **List**: every entity, in insertion order.
/// - **Get**: a single entity by ID, or `None`.
/// - **Create**: allocate the next ID and append a new entity.
/// - **Update**: mutate an existing entity in place via [`ActorEntity::on_update`].
/// - **Delete**: excise an entity, keeping the order of the rest.
///
/// The enum is generic over `T: ActorEntity`, so a payload meant for one
/// resource can never be sent to another.
#[derive(Debug)]
pub enum ResourceRequest<T: ActorEntity> {
    List {
        respond_to: Response<Vec<T>>,
    },
    Get {
        id: T::Id,
        respond_to: Response<Option<T>>,
    },
    Create {
        params: T::Create,
        respond_to: Response<T>,
    },
    Update {
        id: T::Id,
        update: T::Update,
        respond_to: Response<T>,
    },
    Delete {
        id: T::Id,
        respond_to: Response<()>,
    },
}
