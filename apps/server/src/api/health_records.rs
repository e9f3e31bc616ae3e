use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use pawkeeper_core::health_records::{HealthRecord, HealthRecordUpdate, NewHealthRecord};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_health_records(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<HealthRecord>>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let records = state.health_record_service.list_health_records(&dog_id)?;
    Ok(Json(records))
}

async fn create_health_record(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_record): Json<NewHealthRecord>,
) -> ApiResult<Json<HealthRecord>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let record = state
        .health_record_service
        .create_health_record(&dog_id, new_record)
        .await?;
    Ok(Json(record))
}

async fn update_health_record(
    auth: AuthUser,
    Path((dog_id, record_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<HealthRecordUpdate>,
) -> ApiResult<Json<HealthRecord>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let record = state
        .health_record_service
        .update_health_record(&dog_id, &record_id, update)
        .await?;
    Ok(Json(record))
}

async fn delete_health_record(
    auth: AuthUser,
    Path((dog_id, record_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    state
        .health_record_service
        .delete_health_record(&dog_id, &record_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/health/dog/{dogId}",
            get(list_health_records).post(create_health_record),
        )
        .route(
            "/health/dog/{dogId}/{id}",
            put(update_health_record).delete(delete_health_record),
        )
}
