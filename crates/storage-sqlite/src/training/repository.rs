use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::training::{
    NewTrainingSession, TrainingRepositoryTrait, TrainingSession, TrainingSessionUpdate,
};
use pawkeeper_core::Result;

use super::model::{NewTrainingSessionDB, TrainingSessionDB, TrainingSessionUpdateDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::training_sessions;

pub struct TrainingRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl TrainingRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        TrainingRepository { pool, writer }
    }
}

#[async_trait]
impl TrainingRepositoryTrait for TrainingRepository {
    async fn create(
        &self,
        dog_id: &str,
        new_session: NewTrainingSession,
    ) -> Result<TrainingSession> {
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<TrainingSession> {
                let new_db = NewTrainingSessionDB::from_domain(
                    Uuid::new_v4().to_string(),
                    dog_id_owned,
                    new_session,
                );

                let result_db = diesel::insert_into(training_sessions::table)
                    .values(&new_db)
                    .returning(TrainingSessionDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(TrainingSession::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        dog_id: &str,
        session_id: &str,
        update: TrainingSessionUpdate,
    ) -> Result<TrainingSession> {
        let dog_id_owned = dog_id.to_string();
        let session_id_owned = session_id.to_string();
        let changeset = TrainingSessionUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<TrainingSession> {
                let result_db = diesel::update(
                    training_sessions::table
                        .filter(training_sessions::id.eq(&session_id_owned))
                        .filter(training_sessions::dog_id.eq(&dog_id_owned)),
                )
                .set(&changeset)
                .returning(TrainingSessionDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(TrainingSession::from(result_db))
            })
            .await
    }

    async fn delete(&self, dog_id: &str, session_id: &str) -> Result<usize> {
        let dog_id_owned = dog_id.to_string();
        let session_id_owned = session_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    training_sessions::table
                        .filter(training_sessions::id.eq(session_id_owned))
                        .filter(training_sessions::dog_id.eq(dog_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<TrainingSession>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = training_sessions::table
            .filter(training_sessions::dog_id.eq(dog_id))
            .order(training_sessions::date.desc())
            .load::<TrainingSessionDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(TrainingSession::from).collect())
    }
}
