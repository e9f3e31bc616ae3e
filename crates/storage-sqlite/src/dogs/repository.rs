use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::dogs::{Dog, DogRepositoryTrait, DogUpdate, NewDog};
use pawkeeper_core::Result;

use super::model::{DogDB, DogUpdateDB, NewDogDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::dogs;
use crate::schema::dogs::dsl::*;

pub struct DogRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl DogRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        DogRepository { pool, writer }
    }
}

#[async_trait]
impl DogRepositoryTrait for DogRepository {
    async fn create(&self, owner_id: &str, new_dog: NewDog) -> Result<Dog> {
        let owner_id_owned = owner_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dog> {
                let new_dog_db =
                    NewDogDB::from_domain(Uuid::new_v4().to_string(), owner_id_owned, new_dog);

                let result_db = diesel::insert_into(dogs::table)
                    .values(&new_dog_db)
                    .returning(DogDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Dog::from(result_db))
            })
            .await
    }

    async fn update(&self, owner_id: &str, dog_id: &str, update: DogUpdate) -> Result<Dog> {
        let owner_id_owned = owner_id.to_string();
        let dog_id_owned = dog_id.to_string();
        let changeset = DogUpdateDB {
            name: update.name,
            breed: update.breed,
            age: update.age,
            weight: update.weight,
            profile_picture: update.profile_picture,
            microchip_id: update.microchip_id,
            license_number: update.license_number,
            updated_at: Utc::now().naive_utc(),
        };

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Dog> {
                // Scoping the update by owner makes a foreign dog id behave
                // exactly like a missing one.
                let result_db = diesel::update(
                    dogs.filter(id.eq(&dog_id_owned))
                        .filter(user_id.eq(&owner_id_owned)),
                )
                .set(&changeset)
                .returning(DogDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Dog::from(result_db))
            })
            .await
    }

    async fn delete(&self, owner_id: &str, dog_id: &str) -> Result<usize> {
        let owner_id_owned = owner_id.to_string();
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    dogs.filter(id.eq(dog_id_owned))
                        .filter(user_id.eq(owner_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn get_for_user(&self, dog_id: &str, owner_id: &str) -> Result<Dog> {
        let mut conn = get_connection(&self.pool)?;
        let dog_db = dogs
            .filter(id.eq(dog_id))
            .filter(user_id.eq(owner_id))
            .first::<DogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(Dog::from(dog_db))
    }

    fn list_for_user(&self, owner_id: &str) -> Result<Vec<Dog>> {
        let mut conn = get_connection(&self.pool)?;
        let dogs_db = dogs
            .filter(user_id.eq(owner_id))
            .order(created_at.desc())
            .load::<DogDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(dogs_db.into_iter().map(Dog::from).collect())
    }
}
