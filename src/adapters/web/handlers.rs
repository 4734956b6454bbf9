//! HTTP request handlers for web adapter.

use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use std::sync::Arc;

use crate::domain::pipeline::build_roster;
use crate::domain::selection::Roster;

use super::{AppState, WebError};

#[derive(Debug, Default, serde::Deserialize)]
pub struct MagnificenceQuery {
    pub team_name: Option<String>,
}

/// `GET /get-magnificence-data/?team_name=<name>`
///
/// The snapshot fetch runs on the blocking pool; everything after it is a
/// pure computation over the fetched data.
pub async fn magnificence_data(
    State(state): State<Arc<AppState>>,
    query: Result<Query<MagnificenceQuery>, QueryRejection>,
) -> Result<Json<Roster>, WebError> {
    let Query(query) = query?;
    let port = Arc::clone(&state.snapshot_port);
    let snapshot = tokio::task::spawn_blocking(move || port.fetch_snapshot())
        .await
        .map_err(|e| WebError::internal(format!("snapshot task failed: {e}")))??;

    let roster = build_roster(&snapshot, query.team_name.as_deref())?;
    Ok(Json(roster))
}

pub async fn not_found() -> WebError {
    WebError::not_found("not found")
}
