use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::nutrition::{
    NewNutritionRecord, NutritionRecord, NutritionRecordUpdate, NutritionRepositoryTrait,
};
use pawkeeper_core::Result;

use super::model::{NewNutritionRecordDB, NutritionRecordDB, NutritionRecordUpdateDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::nutrition_records;

pub struct NutritionRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl NutritionRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        NutritionRepository { pool, writer }
    }
}

#[async_trait]
impl NutritionRepositoryTrait for NutritionRepository {
    async fn create(
        &self,
        dog_id: &str,
        new_record: NewNutritionRecord,
    ) -> Result<NutritionRecord> {
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<NutritionRecord> {
                let new_db = NewNutritionRecordDB::from_domain(
                    Uuid::new_v4().to_string(),
                    dog_id_owned,
                    new_record,
                );

                let result_db = diesel::insert_into(nutrition_records::table)
                    .values(&new_db)
                    .returning(NutritionRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(NutritionRecord::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        dog_id: &str,
        record_id: &str,
        update: NutritionRecordUpdate,
    ) -> Result<NutritionRecord> {
        let dog_id_owned = dog_id.to_string();
        let record_id_owned = record_id.to_string();
        let changeset = NutritionRecordUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<NutritionRecord> {
                let result_db = diesel::update(
                    nutrition_records::table
                        .filter(nutrition_records::id.eq(&record_id_owned))
                        .filter(nutrition_records::dog_id.eq(&dog_id_owned)),
                )
                .set(&changeset)
                .returning(NutritionRecordDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(NutritionRecord::from(result_db))
            })
            .await
    }

    async fn delete(&self, dog_id: &str, record_id: &str) -> Result<usize> {
        let dog_id_owned = dog_id.to_string();
        let record_id_owned = record_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    nutrition_records::table
                        .filter(nutrition_records::id.eq(record_id_owned))
                        .filter(nutrition_records::dog_id.eq(dog_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<NutritionRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = nutrition_records::table
            .filter(nutrition_records::dog_id.eq(dog_id))
            .order(nutrition_records::date.desc())
            .load::<NutritionRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(NutritionRecord::from).collect())
    }
}
