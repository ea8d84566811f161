//! # Observability & Tracing
//!
//! Structured logging for the service, configured through `RUST_LOG`
//! (default `info`).
//!
//! ```bash
//! RUST_LOG=info cargo run      # Created / Updated / Deleted events
//! RUST_LOG=debug cargo run     # plus request payloads and per-request spans
//! ```
//!
//! The actor tags its events with `entity_type`, `id` and `size`; HTTP
//! requests are wrapped in spans by `tower_http::trace::TraceLayer`.
//!
//! ```text
//! INFO Actor started entity_type="User" size=2
//! INFO request{method=POST uri=/api/v1/users}: Created entity_type="User" id=3 size=3
//! WARN request{method=DELETE uri=/api/v1/users/9}: Not found entity_type="User" id=9
//! ```

use tracing_subscriber::EnvFilter;

pub fn setup_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false) // entity_type already says where an event came from
        .compact()
        .init();
}
