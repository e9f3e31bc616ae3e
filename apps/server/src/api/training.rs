use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use pawkeeper_core::training::{NewTrainingSession, TrainingSession, TrainingSessionUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_sessions(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<TrainingSession>>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let sessions = state.training_service.list_sessions(&dog_id)?;
    Ok(Json(sessions))
}

async fn create_session(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_session): Json<NewTrainingSession>,
) -> ApiResult<Json<TrainingSession>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let session = state
        .training_service
        .create_session(&dog_id, new_session)
        .await?;
    Ok(Json(session))
}

async fn update_session(
    auth: AuthUser,
    Path((dog_id, session_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<TrainingSessionUpdate>,
) -> ApiResult<Json<TrainingSession>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let session = state
        .training_service
        .update_session(&dog_id, &session_id, update)
        .await?;
    Ok(Json(session))
}

async fn delete_session(
    auth: AuthUser,
    Path((dog_id, session_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    state
        .training_service
        .delete_session(&dog_id, &session_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/training/dog/{dogId}",
            get(list_sessions).post(create_session),
        )
        .route(
            "/training/dog/{dogId}/{id}",
            put(update_session).delete(delete_session),
        )
}
