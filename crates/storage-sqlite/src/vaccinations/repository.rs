use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::vaccinations::{
    NewVaccination, Vaccination, VaccinationDue, VaccinationRepositoryTrait, VaccinationUpdate,
};
use pawkeeper_core::Result;

use super::model::{NewVaccinationDB, VaccinationDB, VaccinationUpdateDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{dogs, users, vaccinations};

pub struct VaccinationRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl VaccinationRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        VaccinationRepository { pool, writer }
    }
}

#[async_trait]
impl VaccinationRepositoryTrait for VaccinationRepository {
    async fn create(&self, dog_id: &str, new_vaccination: NewVaccination) -> Result<Vaccination> {
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vaccination> {
                let new_db = NewVaccinationDB::from_domain(
                    Uuid::new_v4().to_string(),
                    dog_id_owned,
                    new_vaccination,
                );

                let result_db = diesel::insert_into(vaccinations::table)
                    .values(&new_db)
                    .returning(VaccinationDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Vaccination::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        dog_id: &str,
        vaccination_id: &str,
        update: VaccinationUpdate,
    ) -> Result<Vaccination> {
        let dog_id_owned = dog_id.to_string();
        let vaccination_id_owned = vaccination_id.to_string();
        let changeset = VaccinationUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Vaccination> {
                let result_db = diesel::update(
                    vaccinations::table
                        .filter(vaccinations::id.eq(&vaccination_id_owned))
                        .filter(vaccinations::dog_id.eq(&dog_id_owned)),
                )
                .set(&changeset)
                .returning(VaccinationDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Vaccination::from(result_db))
            })
            .await
    }

    async fn delete(&self, dog_id: &str, vaccination_id: &str) -> Result<usize> {
        let dog_id_owned = dog_id.to_string();
        let vaccination_id_owned = vaccination_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    vaccinations::table
                        .filter(vaccinations::id.eq(vaccination_id_owned))
                        .filter(vaccinations::dog_id.eq(dog_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<Vaccination>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vaccinations::table
            .filter(vaccinations::dog_id.eq(dog_id))
            .order(vaccinations::date_given.desc())
            .load::<VaccinationDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Vaccination::from).collect())
    }

    fn due_between(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<VaccinationDue>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = vaccinations::table
            .inner_join(dogs::table.inner_join(users::table))
            .filter(vaccinations::next_due_date.is_not_null())
            .filter(vaccinations::next_due_date.between(start, end))
            .order(vaccinations::next_due_date.asc())
            .select((
                vaccinations::id,
                vaccinations::vaccine_name,
                vaccinations::next_due_date.assume_not_null(),
                dogs::name,
                users::name,
                users::email,
                users::language,
            ))
            .load::<(String, String, NaiveDate, String, String, String, String)>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(
                |(
                    vaccination_id,
                    vaccine_name,
                    next_due_date,
                    dog_name,
                    owner_name,
                    owner_email,
                    owner_language,
                )| VaccinationDue {
                    vaccination_id,
                    vaccine_name,
                    next_due_date,
                    dog_name,
                    owner_name,
                    owner_email,
                    owner_language,
                },
            )
            .collect())
    }
}
