use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use tracing::warn;

use super::{jwt::JwtKeys, repo::UserRepo, repo_types::User};
use crate::{error::AppError, state::AppState};

/// The authenticated caller, resolved from the bearer token and reloaded from storage.
pub struct CurrentUser(pub User);

#[async_trait]
impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts)
            .ok_or_else(|| AppError::Unauthorized("Not authenticated".into()))?;

        let keys = JwtKeys::from_ref(state);
        let user_id = keys.verify(token).map_err(|e| {
            warn!(error = %e, "token rejected");
            AppError::Unauthorized(e.to_string())
        })?;

        // A valid token can outlive its account.
        let user = state
            .store
            .find_user_by_id(&user_id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user_id, "token subject no longer exists");
                AppError::Unauthorized("User not found".into())
            })?;

        Ok(CurrentUser(user))
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    parse_bearer(header)
}

/// Auth schemes are case-insensitive, so `BEARER`, `Bearer` and `bearer` all match.
fn parse_bearer(header: &str) -> Option<&str> {
    let (scheme, token) = header.trim().split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then_some(token)
}
