//! Axum route handlers for the People search API.

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::search::filter::FilterSpec;
use crate::search::translator::translate;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub requirement: String,
}

#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub requirement: String,
    /// The structured filter the requirement was translated into.
    pub filter: FilterSpec,
    pub results: Vec<Candidate>,
}

/// POST /people
///
/// Translates the free-text requirement and returns matching candidates.
/// An empty result list is a normal 200 response.
pub async fn handle_search(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Result<Json<SearchResponse>, AppError> {
    let Json(request) = payload?;
    info!(requirement = %request.requirement, "candidate search requested");

    let filter =
        translate(&request.requirement).with_default_limit(state.config.default_result_limit);
    info!(
        criteria = filter.conditions.len(),
        limit = ?filter.limit,
        "requirement translated"
    );

    let results = state.store.search(&filter).await?;
    info!(matches = results.len(), backend = state.store.backend(), "candidate search finished");

    Ok(Json(SearchResponse {
        requirement: request.requirement,
        filter,
        results,
    }))
}
