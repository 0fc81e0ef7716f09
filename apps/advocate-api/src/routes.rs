use axum::{
	Json, Router,
	extract::{Query, State},
	http::StatusCode,
	response::{IntoResponse, Response},
	routing::{get, post},
};
use serde::Serialize;

use advocate_domain::{FilterOptions, PageResult, RawQuery};
use advocate_service::{SeedResponse, ServiceError};

use crate::state::AppState;

const ADVOCATES_ERROR: &str = "Failed to fetch advocates";
const FILTERS_ERROR: &str = "Failed to fetch filter options";

pub fn router(state: AppState) -> Router {
	Router::new()
		.route("/health", get(health))
		.route("/advocates", get(advocates))
		.route("/filters", get(filters))
		.route("/seed", post(seed))
		.with_state(state)
}

async fn health() -> StatusCode {
	StatusCode::OK
}

async fn advocates(
	State(state): State<AppState>,
	Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Json<PageResult>, ApiError> {
	let raw = RawQuery::from_pairs(pairs);
	let response = state
		.service
		.advocates(&raw)
		.await
		.map_err(|err| ApiError::internal(ADVOCATES_ERROR, err))?;

	Ok(Json(response))
}

async fn filters(State(state): State<AppState>) -> Result<Json<FilterOptions>, ApiError> {
	let response =
		state.service.filters().await.map_err(|err| ApiError::internal(FILTERS_ERROR, err))?;

	Ok(Json(response))
}

async fn seed(State(state): State<AppState>) -> Json<SeedResponse> {
	Json(state.service.seed().await)
}

#[derive(Debug, Serialize)]
struct ErrorBody {
	error: &'static str,
}

/// A fault reported to the client with a fixed message; the cause is only logged.
#[derive(Debug)]
pub struct ApiError {
	status: StatusCode,
	message: &'static str,
}
impl ApiError {
	fn internal(message: &'static str, err: ServiceError) -> Self {
		tracing::error!(error = %err, "{message}.");

		Self { status: StatusCode::INTERNAL_SERVER_ERROR, message }
	}
}

impl IntoResponse for ApiError {
	fn into_response(self) -> Response {
		(self.status, Json(ErrorBody { error: self.message })).into_response()
	}
}
