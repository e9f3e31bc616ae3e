use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use pawkeeper_core::emergency::{EmergencyContact, EmergencyContactUpdate, NewEmergencyContact};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_contacts(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<EmergencyContact>>> {
    let contacts = state.emergency_service.list_contacts(&auth.user_id)?;
    Ok(Json(contacts))
}

async fn create_contact(
    auth: AuthUser,
    State(state): State<Arc<AppState>>,
    Json(new_contact): Json<NewEmergencyContact>,
) -> ApiResult<Json<EmergencyContact>> {
    let contact = state
        .emergency_service
        .create_contact(&auth.user_id, new_contact)
        .await?;
    Ok(Json(contact))
}

async fn update_contact(
    auth: AuthUser,
    Path(contact_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<EmergencyContactUpdate>,
) -> ApiResult<Json<EmergencyContact>> {
    let contact = state
        .emergency_service
        .update_contact(&auth.user_id, &contact_id, update)
        .await?;
    Ok(Json(contact))
}

async fn delete_contact(
    auth: AuthUser,
    Path(contact_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state
        .emergency_service
        .delete_contact(&auth.user_id, &contact_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/emergency", get(list_contacts).post(create_contact))
        .route(
            "/emergency/{id}",
            put(update_contact).delete(delete_contact),
        )
}
