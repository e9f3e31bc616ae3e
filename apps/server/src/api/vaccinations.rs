use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use pawkeeper_core::vaccinations::{NewVaccination, Vaccination, VaccinationUpdate};

use crate::auth::AuthUser;
use crate::error::ApiResult;
use crate::main_lib::AppState;

async fn list_vaccinations(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Vec<Vaccination>>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let vaccinations = state.vaccination_service.list_vaccinations(&dog_id)?;
    Ok(Json(vaccinations))
}

async fn create_vaccination(
    auth: AuthUser,
    Path(dog_id): Path<String>,
    State(state): State<Arc<AppState>>,
    Json(new_vaccination): Json<NewVaccination>,
) -> ApiResult<Json<Vaccination>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let vaccination = state
        .vaccination_service
        .create_vaccination(&dog_id, new_vaccination)
        .await?;
    Ok(Json(vaccination))
}

async fn update_vaccination(
    auth: AuthUser,
    Path((dog_id, vaccination_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
    Json(update): Json<VaccinationUpdate>,
) -> ApiResult<Json<Vaccination>> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    let vaccination = state
        .vaccination_service
        .update_vaccination(&dog_id, &vaccination_id, update)
        .await?;
    Ok(Json(vaccination))
}

async fn delete_vaccination(
    auth: AuthUser,
    Path((dog_id, vaccination_id)): Path<(String, String)>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<StatusCode> {
    state.dog_service.get_dog_for_user(&dog_id, &auth.user_id)?;
    state
        .vaccination_service
        .delete_vaccination(&dog_id, &vaccination_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/vaccinations/dog/{dogId}",
            get(list_vaccinations).post(create_vaccination),
        )
        .route(
            "/vaccinations/dog/{dogId}/{id}",
            axum::routing::put(update_vaccination).delete(delete_vaccination),
        )
}
