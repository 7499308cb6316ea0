//! Activity directory routes.

use std::collections::BTreeMap;

use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::services::activity::{Activity, ActivityError};
use crate::state::AppState;

/// Query string as ordered pairs, so a repeated `email` resolves to its last value.
type QueryPairs = Vec<(String, String)>;

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub detail: String,
}

/// Error returned from activity handlers, rendered as `{"detail": ...}`.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(ErrorResponse { detail: self.detail })).into_response()
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self { status: rejection.status(), detail: rejection.body_text() }
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self { status: activity_error_to_status(&err), detail: err.to_string() }
    }
}

pub(crate) fn activity_error_to_status(err: &ActivityError) -> StatusCode {
    match err {
        ActivityError::NotFound { .. } => StatusCode::NOT_FOUND,
        ActivityError::AlreadySignedUp { .. } | ActivityError::NotSignedUp { .. } => StatusCode::BAD_REQUEST,
    }
}

fn require_email(pairs: QueryPairs) -> Result<String, ApiError> {
    let email = pairs.into_iter().rev().find(|(key, _)| key == "email").map(|(_, value)| value);
    email.ok_or_else(|| ApiError {
        status: StatusCode::UNPROCESSABLE_ENTITY,
        detail: "missing required query parameter: email".into(),
    })
}

/// `GET /activities` — every activity keyed by name.
pub async fn list_activities(State(state): State<AppState>) -> Json<BTreeMap<String, Activity>> {
    let directory = state.directory.read().await;
    Json(directory.list().clone())
}

/// `POST /activities/:activity/signup?email=` — add a participant.
pub async fn signup(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity) = path?;
    let Query(pairs) = query?;
    let email = require_email(pairs)?;
    let result = state.directory.write().await.signup(&activity, &email);

    match result {
        Ok(message) => {
            info!(%activity, %email, "participant signed up");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(%activity, %email, error = %e, "signup rejected");
            Err(e.into())
        }
    }
}

/// `DELETE /activities/:activity/unregister?email=` — remove a participant.
pub async fn unregister(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    query: Result<Query<QueryPairs>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Path(activity) = path?;
    let Query(pairs) = query?;
    let email = require_email(pairs)?;
    let result = state.directory.write().await.unregister(&activity, &email);

    match result {
        Ok(message) => {
            info!(%activity, %email, "participant unregistered");
            Ok(Json(MessageResponse { message }))
        }
        Err(e) => {
            warn!(%activity, %email, error = %e, "unregister rejected");
            Err(e.into())
        }
    }
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
