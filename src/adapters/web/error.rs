//! HTTP error responses for web adapter.

use axum::{
    Json,
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

use crate::domain::error::{Magnificent7Error, RosterViolation};

#[derive(Debug)]
pub struct WebError {
    pub status: StatusCode,
    pub body: Value,
}

impl WebError {
    pub fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, json!({ "error": message.into() }))
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "error": message.into() }),
        )
    }
}

impl From<Magnificent7Error> for WebError {
    fn from(err: Magnificent7Error) -> Self {
        let status = status_from_error(&err);
        let body = match &err {
            Magnificent7Error::UpstreamFetch { .. } => json!({ "error": "Failed to fetch data" }),
            Magnificent7Error::InboundShape(errors) => {
                serde_json::to_value(errors).unwrap_or_else(|_| json!({ "error": err.to_string() }))
            }
            Magnificent7Error::InvalidTeamFilter { team_name } => {
                json!({ "error": format!("'{team_name}' is not a valid team.") })
            }
            Magnificent7Error::OutboundShape(violation) => violation_body(violation),
            Magnificent7Error::ConfigParse { .. }
            | Magnificent7Error::ConfigMissing { .. }
            | Magnificent7Error::ConfigInvalid { .. }
            | Magnificent7Error::Io(_) => json!({ "error": "internal server error" }),
        };
        if status.is_server_error() {
            tracing::error!(%status, error = %err, "request failed");
        } else {
            tracing::warn!(%status, error = %err, "request rejected");
        }
        Self::new(status, body)
    }
}

impl From<QueryRejection> for WebError {
    fn from(rejection: QueryRejection) -> Self {
        tracing::warn!(error = %rejection, "malformed query string");
        Self::new(rejection.status(), json!({ "error": rejection.body_text() }))
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Client input and upstream problems are 400; a roster that fails its
/// delivery checks is a server fault.
pub fn status_from_error(err: &Magnificent7Error) -> StatusCode {
    match err {
        Magnificent7Error::UpstreamFetch { .. }
        | Magnificent7Error::InboundShape(_)
        | Magnificent7Error::InvalidTeamFilter { .. } => StatusCode::BAD_REQUEST,
        Magnificent7Error::OutboundShape(_)
        | Magnificent7Error::ConfigParse { .. }
        | Magnificent7Error::ConfigMissing { .. }
        | Magnificent7Error::ConfigInvalid { .. }
        | Magnificent7Error::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn violation_body(violation: &RosterViolation) -> Value {
    match violation {
        RosterViolation::Entries(entries) => {
            serde_json::to_value(entries).unwrap_or_else(|_| json!({ "error": violation.to_string() }))
        }
        RosterViolation::Size { expected, .. } => {
            json!({ "players": [format!("The list must only contain {expected} players.")] })
        }
        RosterViolation::PositionCount { code, expected, .. } => {
            json!({
                "position": [format!(
                    "Too many position count for {code}. There can only be {expected} {code}."
                )]
            })
        }
    }
}
