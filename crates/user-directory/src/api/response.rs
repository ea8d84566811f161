//! Response payloads and the mapping from [`UserError`] to HTTP.

use crate::user_actor::UserError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

/// The `{code, message}` body shared by every error and by the OK acknowledgement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBody {
    pub code: String,
    pub message: String,
}

impl StatusBody {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Fixed acknowledgement for health probes and successful deletes.
    pub fn ok() -> Self {
        Self::new("OK", "OK")
    }

    /// Fixed payload for any 404.
    pub fn not_found() -> Self {
        Self::new("NOT_FOUND", "Not found")
    }
}

impl UserError {
    /// Status code and body this error is reported with.
    pub fn status_and_body(&self) -> (StatusCode, StatusBody) {
        match self {
            UserError::InvalidId(_) => (
                StatusCode::BAD_REQUEST,
                StatusBody::new("REQ_INVALID", "ID not found"),
            ),
            UserError::InvalidBody(reason) => (
                StatusCode::BAD_REQUEST,
                StatusBody::new("REQ_INVALID", reason.clone()),
            ),
            UserError::InvalidBodyId(_) => (
                StatusCode::BAD_REQUEST,
                StatusBody::new("ID_INVALID", "ID invalid"),
            ),
            UserError::NotFound(_) => (StatusCode::NOT_FOUND, StatusBody::not_found()),
            // 406 rather than 404 for a delete miss; kept for compatibility.
            UserError::NotAccepted(_) => (
                StatusCode::NOT_ACCEPTABLE,
                StatusBody::new("ERROR", "Action not accepted"),
            ),
            UserError::ActorCommunicationError(reason) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                StatusBody::new("INTERNAL", reason.clone()),
            ),
        }
    }
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, body) = self.status_and_body();
        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, %status, "Request rejected");
        }
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn each_error_kind_has_its_own_status() {
        let cases = [
            (UserError::InvalidId("x".into()), StatusCode::BAD_REQUEST, "REQ_INVALID"),
            (UserError::InvalidBody("eof".into()), StatusCode::BAD_REQUEST, "REQ_INVALID"),
            (UserError::InvalidBodyId(0), StatusCode::BAD_REQUEST, "ID_INVALID"),
            (UserError::NotFound("3".into()), StatusCode::NOT_FOUND, "NOT_FOUND"),
            (UserError::NotAccepted("3".into()), StatusCode::NOT_ACCEPTABLE, "ERROR"),
            (
                UserError::ActorCommunicationError("Actor closed".into()),
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL",
            ),
        ];
        for (error, status, code) in cases {
            let (actual_status, body) = error.status_and_body();
            assert_eq!(actual_status, status, "{error:?}");
            assert_eq!(body.code, code, "{error:?}");
        }
    }

    #[test]
    fn bind_failures_pass_the_reason_through() {
        let (_, body) = UserError::InvalidBody("missing field".into()).status_and_body();
        assert_eq!(body, StatusBody::new("REQ_INVALID", "missing field"));
    }
}
