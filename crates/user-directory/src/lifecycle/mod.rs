//! # System Lifecycle
//!
//! Starting, wiring and stopping the directory.
//!
//! 1. **Start**: [`DirectorySystem::new`] creates the actor with its seed
//!    records and spawns its run loop.
//! 2. **Serve**: the `UserClient` is cloned into the HTTP router.
//! 3. **Stop**: once the server has drained, dropping the router releases its
//!    clients. [`DirectorySystem::shutdown`] drops the last one and awaits the
//!    actor, which logs its final size and exits.
//!
//! [`setup_tracing`] installs the global subscriber; call it once from `main`.

pub mod directory_system;
pub mod tracing;

pub use directory_system::*;
pub use self::tracing::*;
