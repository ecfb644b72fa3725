use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use crate::error::ApiError;
use crate::people::requests::ListPeopleParams;
use crate::AppState;

/// `GET /people` — list persons, optionally filtered by a location id and
/// truncated to a limit. An empty result is a bodyless 204.
pub async fn list_people(
    State(state): State<AppState>,
    Query(params): Query<ListPeopleParams>,
) -> Result<Response, ApiError> {
    let request = params.into_request();
    let query = request.params.query.clone();

    let response = state.person_get.find(&request, &query).await?;

    if response.people.is_none() {
        return Ok(StatusCode::NO_CONTENT.into_response());
    }
    Ok(Json(response).into_response())
}
