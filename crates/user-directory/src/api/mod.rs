//! # HTTP Interface
//!
//! REST/JSON routes over the user directory:
//!
//! | Method | Path | Success |
//! |---|---|---|
//! | GET | `/test` | 200 OK-status |
//! | GET | `/api/v1/users` | 200 list (404 when empty) |
//! | GET | `/api/v1/users/:id` | 200 user |
//! | POST | `/api/v1/users` | 201 user |
//! | PUT | `/api/v1/users/:id` | 202 user |
//! | DELETE | `/api/v1/users/:id` | 202 OK-status (406 on a miss) |
//! | GET | `/api/v2/users/self`, `/api/v2/users/self/profiler` | 200 OK-status |

pub mod handlers;
pub mod response;

pub use response::StatusBody;

use crate::clients::UserClient;
use axum::routing::get;
use axum::Router;
use std::time::Duration;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// The bare route table, bound to a directory client.
pub fn router(users: UserClient) -> Router {
    let v1 = Router::new()
        .route(
            "/users",
            get(handlers::list_users).post(handlers::create_user),
        )
        .route(
            "/users/:id",
            get(handlers::get_user)
                .put(handlers::update_user)
                .delete(handlers::delete_user),
        );

    let v2 = Router::new()
        .route("/users/self", get(handlers::health))
        .route("/users/self/profiler", get(handlers::health));

    Router::new()
        .route("/test", get(handlers::health))
        .nest("/api/v1", v1)
        .nest("/api/v2", v2)
        .with_state(users)
}

/// The routes plus request tracing and a per-request timeout.
pub fn app(users: UserClient, request_timeout: Duration) -> Router {
    router(users)
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
