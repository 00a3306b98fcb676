use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;
use tracing::{info, instrument};

use crate::{catalog::repo::CatalogRepo, error::AppResult, seed::data, state::AppState};

#[derive(Debug, Serialize)]
pub struct SeedResponse {
    pub message: &'static str,
}

pub fn seed_routes() -> Router<AppState> {
    Router::new().route("/seed", post(seed))
}

#[instrument(skip(state))]
pub async fn seed(State(state): State<AppState>) -> AppResult<Json<SeedResponse>> {
    let data = data::demo();
    if !state.store.seed_if_empty(&data).await? {
        info!("catalog already seeded");
        return Ok(Json(SeedResponse {
            message: "Data already seeded",
        }));
    }
    info!(
        trainers = data.trainers.len(),
        sessions = data.sessions.len(),
        programs = data.programs.len(),
        "demo data seeded"
    );
    Ok(Json(SeedResponse {
        message: "Demo data seeded successfully",
    }))
}
