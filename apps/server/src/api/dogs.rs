use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;

use pawkeeper_core::dogs::{Dog, DogUpdate, NewDog};
use pawkeeper_core::wellness::HealthStatusReport;

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_dogs(auth: AuthUser, State(state): State<Arc<AppState>>) -> ApiResult<Json<Vec<Dog>>> {
    let dogs = state.dog_service.list_dogs(&auth.user_id)?;
    Ok(Json(dogs))
}

async fn create_dog(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_dog): Json<NewDog>,
) -> ApiResult<Json<Dog>> {
    let dog = state.dog_service.create_dog(&auth.user_id, new_dog).await?;
    Ok(Json(dog))
}

async fn get_dog(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Dog>> {
    let dog = state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    Ok(Json(dog))
}

async fn update_dog(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<DogUpdate>,
) -> ApiResult<Json<Dog>> {
    let dog = state
        .dog_service
        .update_dog(&auth.user_id, &dog_id, update)
        .await?;
    Ok(Json(dog))
}

async fn delete_dog(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.delete_dog(&auth.user_id, &dog_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Derived health status for one dog. The evaluation itself is pure; the
/// current date is injected here, at the edge.
async fn health_status(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<HealthStatusReport>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let report = state
        .wellness_service
        .health_status(&dog_id, Utc::now().date_naive())?;
    Ok(Json(report))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dogs", get(list_dogs).post(create_dog))
        .route(
            "/dogs/{dogId}",
            get(get_dog).put(update_dog).delete(delete_dog),
        )
        .route("/dogs/{dogId}/health-status", get(health_status))
}
