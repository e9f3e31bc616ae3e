use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, put};
use axum::{Json, Router};

use pawkeeper_core::appointments::{Appointment, AppointmentUpdate, NewAppointment};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_appointments(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Appointment>>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let appointments = state.appointment_service.list_appointments(&dog_id)?;
    Ok(Json(appointments))
}

async fn create_appointment(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_appointment): Json<NewAppointment>,
) -> ApiResult<Json<Appointment>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let appointment = state
        .appointment_service
        .create_appointment(&dog_id, new_appointment)
        .await?;
    Ok(Json(appointment))
}

async fn update_appointment(
    auth: AuthUser,
    Path((dog_id, appointment_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<AppointmentUpdate>,
) -> ApiResult<Json<Appointment>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let appointment = state
        .appointment_service
        .update_appointment(&dog_id, &appointment_id, update)
        .await?;
    Ok(Json(appointment))
}

async fn delete_appointment(
    auth: AuthUser,
    Path((dog_id, appointment_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    state
        .appointment_service
        .delete_appointment(&dog_id, &appointment_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/appointments/dog/{dogId}",
            get(list_appointments).post(create_appointment),
        )
        .route(
            "/appointments/dog/{dogId}/{id}",
            put(update_appointment).delete(delete_appointment),
        )
}
