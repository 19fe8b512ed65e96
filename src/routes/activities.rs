// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity CRUD routes.

use crate::db::ids::is_valid_id;
use crate::error::{AppError, Result};
use crate::models::{Activity, ActivityPatch, NewActivity};
use crate::AppState;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Confirmation returned by delete, whether or not the record existed.
pub const DELETED_MESSAGE: &str = "Activity deleted";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route(
            "/activities/{id}",
            put(update_activity).delete(delete_activity),
        )
}

#[derive(Serialize, Deserialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct MessageResponse {
    pub message: String,
}

/// Create an activity from the submitted fields.
async fn create_activity(
    State(state): State<Arc<AppState>>,
    payload: std::result::Result<Json<NewActivity>, JsonRejection>,
) -> Result<(StatusCode, Json<Activity>)> {
    let Json(new_activity) = payload?;

    let activity = state
        .db
        .create_activity(new_activity)
        .await
        .map_err(AppError::into_bad_request)?;

    tracing::info!(
        id = %activity.id,
        activity = %activity.activity,
        kind = %activity.kind,
        "Activity created"
    );

    Ok((StatusCode::CREATED, Json(activity)))
}

/// List every stored activity.
async fn list_activities(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Activity>>> {
    let activities = state.db.list_activities().await?;
    tracing::debug!(count = activities.len(), "Listed activities");
    Ok(Json(activities))
}

/// Merge the submitted fields into an activity.
///
/// Responds with `null` when no activity has this ID.
async fn update_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<ActivityPatch>, JsonRejection>,
) -> Result<Json<Option<Activity>>> {
    if !is_valid_id(&id) {
        return Err(AppError::BadRequest(format!("Malformed activity id: {:?}", id)));
    }

    let Json(patch) = payload?;

    if let Some(body_id) = patch.id.as_deref() {
        if body_id != id {
            return Err(AppError::BadRequest(
                "Activity id cannot be changed".to_string(),
            ));
        }
    }

    let updated = state
        .db
        .update_activity(&id, patch)
        .await
        .map_err(AppError::into_bad_request)?;

    match &updated {
        Some(_) => tracing::info!(id = %id, "Activity updated"),
        None => tracing::debug!(id = %id, "Update for unknown activity ignored"),
    }

    Ok(Json(updated))
}

/// Delete an activity. Succeeds whether or not the activity existed.
async fn delete_activity(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>> {
    // A malformed ID can't name a stored document, so there is nothing to delete.
    if is_valid_id(&id) {
        state.db.delete_activity(&id).await?;
        tracing::info!(id = %id, "Activity deleted");
    } else {
        tracing::debug!(id = %id, "Delete for malformed id ignored");
    }

    Ok(Json(MessageResponse {
        message: DELETED_MESSAGE.to_string(),
    }))
}
