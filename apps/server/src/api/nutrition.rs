use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use pawkeeper_core::nutrition::{NewNutritionRecord, NutritionRecord, NutritionRecordUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_records(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<NutritionRecord>>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let records = state.nutrition_service.list_records(&dog_id)?;
    Ok(Json(records))
}

async fn create_record(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_record): Json<NewNutritionRecord>,
) -> ApiResult<Json<NutritionRecord>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let record = state
        .nutrition_service
        .create_record(&dog_id, new_record)
        .await?;
    Ok(Json(record))
}

async fn update_record(
    auth: AuthUser,
    Path((dog_id, record_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<NutritionRecordUpdate>,
) -> ApiResult<Json<NutritionRecord>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let record = state
        .nutrition_service
        .update_record(&dog_id, &record_id, update)
        .await?;
    Ok(Json(record))
}

async fn delete_record(
    auth: AuthUser,
    Path((dog_id, record_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    state
        .nutrition_service
        .delete_record(&dog_id, &record_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/nutrition/dog/{dogId}/records",
            get(list_records).post(create_record),
        )
        .route(
            "/nutrition/dog/{dogId}/records/{id}",
            put(update_record).delete(delete_record),
        )
}
