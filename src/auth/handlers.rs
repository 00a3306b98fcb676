use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};
use lazy_static::lazy_static;
use regex::Regex;
use tracing::{info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, SignupRequest, TokenResponse},
        extractors::CurrentUser,
        password::{hash_password, verify_password},
        repo::UserRepo,
        repo_types::User,
    },
    error::{AppError, AppResult},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/auth/me", get(get_me))
}

pub(crate) fn is_valid_email(email: &str) -> bool {
    lazy_static! {
        static ref EMAIL_RE: Regex = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").unwrap();
    }
    EMAIL_RE.is_match(email)
}

/// Trims and lowercases the domain. The local part is case-sensitive and kept as given.
pub(crate) fn normalize_email(raw: &str) -> AppResult<String> {
    let trimmed = raw.trim();
    let email = match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{}@{}", local, domain.to_lowercase()),
        None => trimmed.to_string(),
    };
    if !is_valid_email(&email) {
        warn!(email = %email, "invalid email");
        return Err(AppError::Validation("Invalid email address".into()));
    }
    Ok(email)
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> AppResult<Json<TokenResponse>> {
    let email = normalize_email(&payload.email)?;
    let name = payload.name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("Name is required".into()));
    }
    if payload.password.is_empty() {
        return Err(AppError::Validation("Password is required".into()));
    }

    let hash = hash_password(&payload.password)?;
    let user = User::new(email, name.to_string());

    if !state.store.create_user(&user, &hash).await? {
        warn!(email = %user.email, "email already registered");
        return Err(AppError::BadRequest("Email already registered".into()));
    }

    let access_token = state.jwt.sign(&user.id)?;
    info!(user_id = %user.id, email = %user.email, "user signed up");
    Ok(Json(TokenResponse::bearer(access_token, user)))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    let email = normalize_email(&payload.email)?;
    let invalid = || AppError::Unauthorized("Invalid email or password".into());

    let Some(creds) = state.store.find_credentials_by_email(&email).await? else {
        warn!(email = %email, "login unknown email");
        return Err(invalid());
    };

    if !verify_password(&payload.password, &creds.password_hash) {
        warn!(email = %email, user_id = %creds.user.id, "login invalid password");
        return Err(invalid());
    }

    let access_token = state.jwt.sign(&creds.user.id)?;
    info!(user_id = %creds.user.id, "user logged in");
    Ok(Json(TokenResponse::bearer(access_token, creds.user)))
}

#[instrument(skip_all)]
pub async fn get_me(CurrentUser(user): CurrentUser) -> Json<User> {
    Json(user)
}
