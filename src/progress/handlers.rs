use axum::{extract::State, routing::get, Json, Router};
use tracing::{info, instrument};

use crate::{
    auth::extractors::CurrentUser,
    error::AppResult,
    progress::{dto::ProgressUpdate, repo::ProgressRepo, repo_types::UserProgress},
    state::AppState,
};

pub fn progress_routes() -> Router<AppState> {
    Router::new().route("/progress", get(list_progress).post(record_progress))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn list_progress(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> AppResult<Json<Vec<UserProgress>>> {
    Ok(Json(state.store.list_progress(&user.id).await?))
}

#[instrument(skip_all, fields(user_id = %user.id))]
pub async fn record_progress(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Json(payload): Json<ProgressUpdate>,
) -> AppResult<Json<UserProgress>> {
    payload.validate()?;
    let record = payload.into_record(&user.id);
    state.store.insert_progress(&record).await?;
    info!(
        progress_id = %record.id,
        session_id = ?record.session_id,
        program_id = ?record.program_id,
        completed = record.completed,
        "progress recorded"
    );
    Ok(Json(record))
}
