//! Registration, login and profile handlers.

use std::sync::Arc;

use axum::extract::State;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};

use pawkeeper_core::constants::DEFAULT_LANGUAGE;
use pawkeeper_core::users::{NewUser, User, UserProfileUpdate};

use super::AuthUser;
use crate::error::{ApiError, ApiResult};
use crate::main_lib::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest {
    name: String,
    email: String,
    phone: Option<String>,
    password: String,
    language: Option<String>,
}

#[derive(Deserialize)]
struct LoginRequest {
    email: String,
    password: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct AuthResponse {
    access_token: String,
    user: User,
}

async fn register(
    State(state): State<Arc<AppState>>,
    Json(body): Json<RegisterRequest>,
) -> ApiResult<Json<AuthResponse>> {
    if body.password.len() < 6 {
        return Err(ApiError::bad_request(
            "Password must be at least 6 characters",
        ));
    }

    let password_hash = state.auth.hash_password(&body.password)?;
    let user = state
        .user_service
        .register(NewUser {
            name: body.name,
            email: body.email,
            phone: body.phone,
            password_hash,
            language: body.language.unwrap_or_else(|| DEFAULT_LANGUAGE.to_string()),
        })
        .await?;

    let access_token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse { access_token, user }))
}

async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    // One error for both unknown email and wrong password.
    let user = state
        .user_service
        .find_by_email(&body.email)?
        .ok_or_else(|| ApiError::unauthorized("Invalid email or password"))?;

    if !state.auth.verify_password(&body.password, &user.password_hash) {
        return Err(ApiError::unauthorized("Invalid email or password"));
    }

    let access_token = state.auth.issue_token(&user.id)?;
    Ok(Json(AuthResponse { access_token, user }))
}

async fn get_profile(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<User>> {
    let user = state.user_service.get_user(&auth.user_id)?;
    Ok(Json(user))
}

async fn update_profile(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(update): Json<UserProfileUpdate>,
) -> ApiResult<Json<User>> {
    let user = state
        .user_service
        .update_profile(&auth.user_id, update)
        .await?;
    Ok(Json(user))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
        .route("/auth/profile", get(get_profile).put(update_profile))
}
