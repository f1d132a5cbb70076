use axum::{extract::State, Json};
use chrono::{SecondsFormat, Utc};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::errors::AppError;
use crate::state::AppState;
use crate::store::RoadmapRecord;

/// POST /api/upsert-profile
///
/// Forwards the payload to the users-table upsert. Validation runs before
/// any store call; no retries, no dedup.
pub async fn handle_upsert_profile(
    State(state): State<AppState>,
    body: Option<Json<Value>>,
) -> Result<Json<Value>, AppError> {
    let profile = match body {
        Some(Json(value)) if is_nonempty_object(&value) => value,
        _ => return Err(AppError::Validation("Missing profile in body".to_string())),
    };

    let rows = state.store.upsert_profile(&profile).await?;
    Ok(Json(json!({ "data": rows })))
}

#[derive(Debug, Deserialize)]
pub struct SaveRoadmapRequest {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub roadmap: Option<Value>,
}

/// POST /api/save-roadmap
///
/// Stamps the current time and forwards an insert. Each save is a fresh
/// row, never an update.
pub async fn handle_save_roadmap(
    State(state): State<AppState>,
    body: Option<Json<SaveRoadmapRequest>>,
) -> Result<Json<Value>, AppError> {
    let Some(Json(req)) = body else {
        return Err(missing_roadmap_fields());
    };

    let user_id = req.user_id.filter(|id| !id.is_empty());
    let roadmap = req.roadmap.filter(|payload| !payload.is_null());
    let (Some(user_id), Some(roadmap)) = (user_id, roadmap) else {
        return Err(missing_roadmap_fields());
    };

    let record = RoadmapRecord {
        user_id,
        roadmap,
        created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };
    let rows = state.store.insert_roadmap(&record).await?;
    Ok(Json(json!({ "data": rows })))
}

fn is_nonempty_object(value: &Value) -> bool {
    value.as_object().is_some_and(|map| !map.is_empty())
}

fn missing_roadmap_fields() -> AppError {
    AppError::Validation("Missing user_id or roadmap".to_string())
}
