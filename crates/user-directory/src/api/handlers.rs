//! Route handlers. Each one parses its inputs in a fixed order, then defers to
//! [`UserClient`], whose errors render themselves via `IntoResponse`.

use crate::api::response::StatusBody;
use crate::clients::UserClient;
use crate::model::{User, UserId, UserInput};
use crate::user_actor::UserError;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

type JsonBody = Result<Json<UserInput>, JsonRejection>;

fn parse_id(raw: &str) -> Result<UserId, UserError> {
    raw.parse::<UserId>()
        .map_err(|e| UserError::InvalidId(format!("{raw:?}: {e}")))
}

fn bind(body: JsonBody) -> Result<UserInput, UserError> {
    body.map(|Json(input)| input)
        .map_err(|rejection| UserError::InvalidBody(rejection.body_text()))
}

/// `GET /test` and the v2 stubs.
pub async fn health() -> Json<StatusBody> {
    Json(StatusBody::ok())
}

pub async fn list_users(State(users): State<UserClient>) -> Result<Json<Vec<User>>, UserError> {
    users.list_users().await.map(Json)
}

pub async fn get_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
) -> Result<Json<User>, UserError> {
    let id = parse_id(&raw_id)?;
    users.get_user(id).await.map(Json)
}

pub async fn create_user(
    State(users): State<UserClient>,
    body: JsonBody,
) -> Result<(StatusCode, Json<User>), UserError> {
    let input = bind(body)?;
    let user = users.create_user(input).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

pub async fn update_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
    body: JsonBody,
) -> Result<(StatusCode, Json<User>), UserError> {
    let id = parse_id(&raw_id)?;
    let input = bind(body)?;
    let user = users.update_user(id, input).await?;
    Ok((StatusCode::ACCEPTED, Json(user)))
}

pub async fn delete_user(
    State(users): State<UserClient>,
    Path(raw_id): Path<String>,
) -> Result<(StatusCode, Json<StatusBody>), UserError> {
    let id = parse_id(&raw_id)?;
    users.delete_user(id).await?;
    Ok((StatusCode::ACCEPTED, Json(StatusBody::ok())))
}
