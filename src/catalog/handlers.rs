use axum::{
    extract::{Path, Query, State},
    routing::get,
    Json, Router,
};
use tracing::{debug, instrument};

use crate::{
    catalog::{
        dto::SessionFilter,
        repo::CatalogRepo,
        repo_types::{Program, Session, Trainer},
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/trainers", get(list_trainers))
        .route("/sessions", get(list_sessions))
        .route("/sessions/:id", get(get_session))
        .route("/programs", get(list_programs))
        .route("/programs/:id", get(get_program))
}

#[instrument(skip(state))]
pub async fn list_trainers(State(state): State<AppState>) -> AppResult<Json<Vec<Trainer>>> {
    Ok(Json(state.store.list_trainers().await?))
}

#[instrument(skip(state))]
pub async fn list_sessions(
    State(state): State<AppState>,
    Query(filter): Query<SessionFilter>,
) -> AppResult<Json<Vec<Session>>> {
    let sessions = state.store.list_sessions(filter.category()).await?;
    debug!(count = sessions.len(), "sessions listed");
    Ok(Json(sessions))
}

#[instrument(skip(state))]
pub async fn get_session(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Session>> {
    state
        .store
        .get_session(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Session not found".into()))
}

#[instrument(skip(state))]
pub async fn list_programs(State(state): State<AppState>) -> AppResult<Json<Vec<Program>>> {
    Ok(Json(state.store.list_programs().await?))
}

#[instrument(skip(state))]
pub async fn get_program(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Program>> {
    state
        .store
        .get_program(&id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Program not found".into()))
}
