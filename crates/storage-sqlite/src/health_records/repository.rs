use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::health_records::{
    HealthRecord, HealthRecordRepositoryTrait, HealthRecordUpdate, NewHealthRecord,
};
use pawkeeper_core::Result;

use super::model::{HealthRecordDB, HealthRecordUpdateDB, NewHealthRecordDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::health_records;

pub struct HealthRecordRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl HealthRecordRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        HealthRecordRepository { pool, writer }
    }
}

#[async_trait]
impl HealthRecordRepositoryTrait for HealthRecordRepository {
    async fn create(&self, dog_id: &str, new_record: NewHealthRecord) -> Result<HealthRecord> {
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<HealthRecord> {
                let new_db = NewHealthRecordDB::from_domain(
                    Uuid::new_v4().to_string(),
                    dog_id_owned,
                    new_record,
                );

                let result_db = diesel::insert_into(health_records::table)
                    .values(&new_db)
                    .returning(HealthRecordDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(HealthRecord::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        dog_id: &str,
        record_id: &str,
        update: HealthRecordUpdate,
    ) -> Result<HealthRecord> {
        let dog_id_owned = dog_id.to_string();
        let record_id_owned = record_id.to_string();
        let changeset = HealthRecordUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<HealthRecord> {
                let result_db = diesel::update(
                    health_records::table
                        .filter(health_records::id.eq(&record_id_owned))
                        .filter(health_records::dog_id.eq(&dog_id_owned)),
                )
                .set(&changeset)
                .returning(HealthRecordDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(HealthRecord::from(result_db))
            })
            .await
    }

    async fn delete(&self, dog_id: &str, record_id: &str) -> Result<usize> {
        let dog_id_owned = dog_id.to_string();
        let record_id_owned = record_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    health_records::table
                        .filter(health_records::id.eq(record_id_owned))
                        .filter(health_records::dog_id.eq(dog_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<HealthRecord>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = health_records::table
            .filter(health_records::dog_id.eq(dog_id))
            .order(health_records::date.desc())
            .load::<HealthRecordDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(HealthRecord::from).collect())
    }
}
