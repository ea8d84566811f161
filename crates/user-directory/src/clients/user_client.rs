//! # User Client
//!
//! Provides a high‑level API for interacting with the `User` actor.
//! It wraps a `ResourceClient<User>` and applies the directory's rules on top
//! of the generic CRUD replies.
use crate::model::{User, UserId, UserInput};
use crate::user_actor::UserError;
use actor_framework::{ActorClient, FrameworkError, ResourceClient};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the User actor.
#[derive(Clone)]
pub struct UserClient {
    inner: ResourceClient<User>,
}

impl UserClient {
    pub fn new(inner: ResourceClient<User>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<User> for UserClient {
    type Error = UserError;

    fn inner(&self) -> &ResourceClient<User> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        UserError::ActorCommunicationError(e.to_string())
    }
}

impl UserClient {
    /// All users in insertion order.
    ///
    /// An empty directory is reported as `NotFound` rather than an empty list.
    /// Existing callers depend on this, so it stays.
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> Result<Vec<User>, UserError> {
        let users = self.list().await?;
        if users.is_empty() {
            return Err(UserError::NotFound("directory is empty".to_string()));
        }
        Ok(users)
    }

    #[instrument(skip(self))]
    pub async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.get(id)
            .await?
            .ok_or_else(|| UserError::NotFound(id.to_string()))
    }

    #[instrument(skip(self))]
    pub async fn create_user(&self, params: UserInput) -> Result<User, UserError> {
        debug!("Sending request");
        self.inner.create(params).await.map_err(Self::map_error)
    }

    /// Overwrites the user at `id` (the path ID) with `input`.
    ///
    /// `input.id` must be positive. It is checked on its own and is never
    /// compared with `id`.
    #[instrument(skip(self))]
    pub async fn update_user(&self, id: UserId, input: UserInput) -> Result<User, UserError> {
        if input.id <= 0 {
            return Err(UserError::InvalidBodyId(input.id));
        }
        debug!("Sending request");
        self.inner.update(id, input).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => UserError::NotFound(id),
            other => Self::map_error(other),
        })
    }

    /// Removes the user at `id`.
    ///
    /// A miss is `NotAccepted`, not `NotFound`. Clients rely on the distinct code.
    #[instrument(skip(self))]
    pub async fn delete_user(&self, id: UserId) -> Result<(), UserError> {
        debug!("Sending request");
        self.inner.delete(id).await.map_err(|e| match e {
            FrameworkError::NotFound(id) => UserError::NotAccepted(id),
            other => Self::map_error(other),
        })
    }
}
