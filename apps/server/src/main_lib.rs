use std::sync::Arc;

use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use pawkeeper_core::appointments::{AppointmentService, AppointmentServiceTrait};
use pawkeeper_core::dogs::{DogService, DogServiceTrait};
use pawkeeper_core::emergency::{EmergencyContactService, EmergencyContactServiceTrait};
use pawkeeper_core::health_records::{HealthRecordService, HealthRecordServiceTrait};
use pawkeeper_core::nutrition::{NutritionService, NutritionServiceTrait};
use pawkeeper_core::training::{TrainingService, TrainingServiceTrait};
use pawkeeper_core::users::{UserService, UserServiceTrait};
use pawkeeper_core::vaccinations::{VaccinationService, VaccinationServiceTrait};
use pawkeeper_core::wellness::{WellnessService, WellnessServiceTrait};
use pawkeeper_storage_sqlite::appointments::AppointmentRepository;
use pawkeeper_storage_sqlite::db;
use pawkeeper_storage_sqlite::dogs::DogRepository;
use pawkeeper_storage_sqlite::emergency::EmergencyContactRepository;
use pawkeeper_storage_sqlite::health_records::HealthRecordRepository;
use pawkeeper_storage_sqlite::nutrition::NutritionRepository;
use pawkeeper_storage_sqlite::training::TrainingRepository;
use pawkeeper_storage_sqlite::users::UserRepository;
use pawkeeper_storage_sqlite::vaccinations::VaccinationRepository;

use crate::auth::AuthManager;
use crate::config::Config;
use crate::email::EmailClient;

pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
    pub dog_service: Arc<dyn DogServiceTrait>,
    pub vaccination_service: Arc<dyn VaccinationServiceTrait>,
    pub health_record_service: Arc<dyn HealthRecordServiceTrait>,
    pub appointment_service: Arc<dyn AppointmentServiceTrait>,
    pub training_service: Arc<dyn TrainingServiceTrait>,
    pub emergency_service: Arc<dyn EmergencyContactServiceTrait>,
    pub nutrition_service: Arc<dyn NutritionServiceTrait>,
    pub wellness_service: Arc<dyn WellnessServiceTrait>,
    pub auth: Arc<AuthManager>,
    pub email: Option<EmailClient>,
    pub db_path: String,
}

pub fn init_tracing() {
    let log_format = std::env::var("PK_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    let pool = db::init(&config.db_path)?;
    tracing::info!("Database path in use: {}", config.db_path);
    let writer = db::spawn_writer(pool.clone());

    let user_repository = Arc::new(UserRepository::new(pool.clone(), writer.clone()));
    let user_service = Arc::new(UserService::new(user_repository));

    let dog_repository = Arc::new(DogRepository::new(pool.clone(), writer.clone()));
    let dog_service = Arc::new(DogService::new(dog_repository));

    let vaccination_repository =
        Arc::new(VaccinationRepository::new(pool.clone(), writer.clone()));
    let vaccination_service = Arc::new(VaccinationService::new(vaccination_repository.clone()));

    let health_record_repository =
        Arc::new(HealthRecordRepository::new(pool.clone(), writer.clone()));
    let health_record_service =
        Arc::new(HealthRecordService::new(health_record_repository.clone()));

    let appointment_repository =
        Arc::new(AppointmentRepository::new(pool.clone(), writer.clone()));
    let appointment_service = Arc::new(AppointmentService::new(appointment_repository.clone()));

    let training_repository = Arc::new(TrainingRepository::new(pool.clone(), writer.clone()));
    let training_service = Arc::new(TrainingService::new(training_repository));

    let emergency_repository =
        Arc::new(EmergencyContactRepository::new(pool.clone(), writer.clone()));
    let emergency_service = Arc::new(EmergencyContactService::new(emergency_repository));

    let nutrition_repository = Arc::new(NutritionRepository::new(pool.clone(), writer.clone()));
    let nutrition_service = Arc::new(NutritionService::new(nutrition_repository));

    // The wellness evaluator reads the same repositories the CRUD services
    // write through.
    let wellness_service = Arc::new(WellnessService::new(
        vaccination_repository,
        health_record_repository,
        appointment_repository,
    ));

    let auth = Arc::new(AuthManager::new(
        &config.jwt_secret,
        config.token_ttl_hours,
    ));
    let email = config.email.as_ref().map(EmailClient::new);

    Ok(Arc::new(AppState {
        user_service,
        dog_service,
        vaccination_service,
        health_record_service,
        appointment_service,
        training_service,
        emergency_service,
        nutrition_service,
        wellness_service,
        auth,
        email,
        db_path: config.db_path.clone(),
    }))
}
