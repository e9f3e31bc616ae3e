//! Integration tests running the repositories against a real SQLite file.

use std::sync::Arc;

use chrono::NaiveDate;
use tempfile::TempDir;

use pawkeeper_core::dogs::{DogRepositoryTrait, NewDog};
use pawkeeper_core::errors::{DatabaseError, Error};
use pawkeeper_core::users::{NewUser, UserRepositoryTrait};
use pawkeeper_core::vaccinations::{NewVaccination, VaccinationRepositoryTrait, VaccinationUpdate};
use pawkeeper_storage_sqlite::dogs::DogRepository;
use pawkeeper_storage_sqlite::users::UserRepository;
use pawkeeper_storage_sqlite::vaccinations::VaccinationRepository;
use pawkeeper_storage_sqlite::{db, DbPool, WriteHandle};

fn setup() -> (TempDir, DbPool, WriteHandle) {
    let dir = TempDir::new().expect("temp dir");
    let db_path = dir.path().join("pawkeeper-test.db");
    let pool = db::init(db_path.to_str().unwrap()).expect("db init");
    let writer = db::spawn_writer(pool.clone());
    (dir, pool, writer)
}

fn sample_user(email: &str) -> NewUser {
    NewUser {
        name: "Jordan".to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: "argon2-hash".to_string(),
        language: "en".to_string(),
    }
}

fn sample_dog(name: &str) -> NewDog {
    NewDog {
        name: name.to_string(),
        breed: "Border Collie".to_string(),
        age: 4,
        weight: 18.5,
        profile_picture: None,
        microchip_id: None,
        license_number: None,
    }
}

#[tokio::test]
async fn user_dog_vaccination_round_trip() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let dogs = DogRepository::new(pool.clone(), writer.clone());
    let vaccinations = VaccinationRepository::new(pool, writer);

    let user = users.create(sample_user("jordan@example.com")).await.unwrap();
    assert!(!user.id.is_empty());

    let dog = dogs.create(&user.id, sample_dog("Piper")).await.unwrap();
    assert_eq!(dog.user_id, user.id);

    let created = vaccinations
        .create(
            &dog.id,
            NewVaccination {
                vaccine_name: "Rabies".to_string(),
                vaccine_type: "core".to_string(),
                date_given: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                next_due_date: NaiveDate::from_ymd_opt(2026, 5, 1),
                veterinarian: "Dr. Chen".to_string(),
                batch_number: Some("B-1042".to_string()),
                notes: None,
            },
        )
        .await
        .unwrap();

    let listed = vaccinations.list_for_dog(&dog.id).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].vaccine_name, "Rabies");
}

#[tokio::test]
async fn duplicate_email_is_a_unique_violation() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool, writer);

    users.create(sample_user("dup@example.com")).await.unwrap();
    let err = users
        .create(sample_user("dup@example.com"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Database(DatabaseError::UniqueViolation(_))
    ));
}

#[tokio::test]
async fn write_errors_keep_their_variant_through_the_writer() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let dogs = DogRepository::new(pool.clone(), writer.clone());
    let vaccinations = VaccinationRepository::new(pool, writer);

    let owner = users.create(sample_user("typed@example.com")).await.unwrap();
    let dog = dogs.create(&owner.id, sample_dog("Juno")).await.unwrap();

    // Updating a record that does not exist must come back as NotFound,
    // not flattened into an internal error by the writer round trip.
    let err = vaccinations
        .update(
            &dog.id,
            "no-such-id",
            VaccinationUpdate {
                vaccine_name: "Rabies".to_string(),
                vaccine_type: "core".to_string(),
                date_given: NaiveDate::from_ymd_opt(2025, 5, 1).unwrap(),
                next_due_date: None,
                veterinarian: "Dr. Chen".to_string(),
                batch_number: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn dog_lookup_is_scoped_to_its_owner() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let dogs = DogRepository::new(pool, writer);

    let owner = users.create(sample_user("owner@example.com")).await.unwrap();
    let other = users.create(sample_user("other@example.com")).await.unwrap();
    let dog = dogs.create(&owner.id, sample_dog("Scout")).await.unwrap();

    assert!(dogs.get_for_user(&dog.id, &owner.id).is_ok());
    let err = dogs.get_for_user(&dog.id, &other.id).unwrap_err();
    assert!(matches!(err, Error::Database(DatabaseError::NotFound(_))));
}

#[tokio::test]
async fn deleting_a_dog_cascades_to_its_records() {
    let (_dir, pool, writer) = setup();
    let users = UserRepository::new(pool.clone(), writer.clone());
    let dogs = DogRepository::new(pool.clone(), writer.clone());
    let vaccinations = VaccinationRepository::new(pool, writer);

    let owner = users.create(sample_user("cascade@example.com")).await.unwrap();
    let dog = dogs.create(&owner.id, sample_dog("Rex")).await.unwrap();
    vaccinations
        .create(
            &dog.id,
            NewVaccination {
                vaccine_name: "Distemper".to_string(),
                vaccine_type: "core".to_string(),
                date_given: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
                next_due_date: None,
                veterinarian: "Dr. Chen".to_string(),
                batch_number: None,
                notes: None,
            },
        )
        .await
        .unwrap();

    let deleted = dogs.delete(&owner.id, &dog.id).await.unwrap();
    assert_eq!(deleted, 1);
    assert!(vaccinations.list_for_dog(&dog.id).unwrap().is_empty());
}
