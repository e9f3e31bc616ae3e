use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::emergency::{
    EmergencyContact, EmergencyContactRepositoryTrait, EmergencyContactUpdate,
    NewEmergencyContact,
};
use pawkeeper_core::Result;

use super::model::{EmergencyContactDB, EmergencyContactUpdateDB, NewEmergencyContactDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::emergency_contacts;

pub struct EmergencyContactRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl EmergencyContactRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        EmergencyContactRepository { pool, writer }
    }
}

#[async_trait]
impl EmergencyContactRepositoryTrait for EmergencyContactRepository {
    async fn create(
        &self,
        user_id: &str,
        new_contact: NewEmergencyContact,
    ) -> Result<EmergencyContact> {
        let user_id_owned = user_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<EmergencyContact> {
                let new_db = NewEmergencyContactDB::from_domain(
                    Uuid::new_v4().to_string(),
                    user_id_owned,
                    new_contact,
                );

                let result_db = diesel::insert_into(emergency_contacts::table)
                    .values(&new_db)
                    .returning(EmergencyContactDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(EmergencyContact::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        user_id: &str,
        contact_id: &str,
        update: EmergencyContactUpdate,
    ) -> Result<EmergencyContact> {
        let user_id_owned = user_id.to_string();
        let contact_id_owned = contact_id.to_string();
        let changeset = EmergencyContactUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<EmergencyContact> {
                let result_db = diesel::update(
                    emergency_contacts::table
                        .filter(emergency_contacts::id.eq(&contact_id_owned))
                        .filter(emergency_contacts::user_id.eq(&user_id_owned)),
                )
                .set(&changeset)
                .returning(EmergencyContactDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(EmergencyContact::from(result_db))
            })
            .await
    }

    async fn delete(&self, user_id: &str, contact_id: &str) -> Result<usize> {
        let user_id_owned = user_id.to_string();
        let contact_id_owned = contact_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    emergency_contacts::table
                        .filter(emergency_contacts::id.eq(contact_id_owned))
                        .filter(emergency_contacts::user_id.eq(user_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_user(&self, user_id: &str) -> Result<Vec<EmergencyContact>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = emergency_contacts::table
            .filter(emergency_contacts::user_id.eq(user_id))
            .order(emergency_contacts::name.asc())
            .load::<EmergencyContactDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(EmergencyContact::from).collect())
    }
}
