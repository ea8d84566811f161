use crate::clients::UserClient;
use crate::model::{seed_users, User};
use crate::user_actor;
use tokio::task::{JoinError, JoinHandle};
use tracing::{error, info};

/// Owns the running directory actor and the client used to reach it.
///
/// Build one per process (or per test). Clone `user_client` freely, e.g. into
/// the HTTP router state; the actor keeps running while any clone is alive.
pub struct DirectorySystem {
    pub user_client: UserClient,
    handle: JoinHandle<()>,
}

impl DirectorySystem {
    /// Starts a directory pre-loaded with the two seed records.
    pub fn new(buffer_size: usize) -> Self {
        Self::with_users(buffer_size, seed_users())
    }

    /// Starts a directory holding exactly `users`.
    pub fn with_users(buffer_size: usize, users: Vec<User>) -> Self {
        let (actor, user_client) = user_actor::with_users(buffer_size, users);
        let handle = tokio::spawn(actor.run(()));
        Self {
            user_client,
            handle,
        }
    }

    /// Drops this system's client and waits for the actor to drain and exit.
    ///
    /// Every other `UserClient` clone must already be dropped, otherwise this
    /// waits until they are.
    pub async fn shutdown(self) -> Result<(), JoinError> {
        info!("Shutting down directory...");
        drop(self.user_client);

        if let Err(e) = self.handle.await {
            error!(error = %e, "Actor task failed");
            return Err(e);
        }

        info!("Directory shutdown complete.");
        Ok(())
    }
}
