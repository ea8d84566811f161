//! Type-safe client wrappers around the generic `ResourceClient`.

pub mod user_client;

pub use user_client::UserClient;
