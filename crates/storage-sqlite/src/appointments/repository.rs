use std::sync::Arc;

use async_trait::async_trait;
use chrono::{NaiveDate, NaiveTime};
use diesel::prelude::*;
use diesel::r2d2::{self, Pool};
use diesel::SqliteConnection;
use uuid::Uuid;

use pawkeeper_core::appointments::{
    Appointment, AppointmentReminder, AppointmentRepositoryTrait, AppointmentUpdate,
    NewAppointment,
};
use pawkeeper_core::Result;

use super::model::{AppointmentDB, AppointmentUpdateDB, NewAppointmentDB};
use crate::db::{get_connection, WriteHandle};
use crate::errors::StorageError;
use crate::schema::{appointments, dogs, users};

pub struct AppointmentRepository {
    pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
    writer: WriteHandle,
}

impl AppointmentRepository {
    pub fn new(
        pool: Arc<Pool<r2d2::ConnectionManager<SqliteConnection>>>,
        writer: WriteHandle,
    ) -> Self {
        AppointmentRepository { pool, writer }
    }
}

#[async_trait]
impl AppointmentRepositoryTrait for AppointmentRepository {
    async fn create(&self, dog_id: &str, new_appointment: NewAppointment) -> Result<Appointment> {
        let dog_id_owned = dog_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Appointment> {
                let new_db = NewAppointmentDB::from_domain(
                    Uuid::new_v4().to_string(),
                    dog_id_owned,
                    new_appointment,
                );

                let result_db = diesel::insert_into(appointments::table)
                    .values(&new_db)
                    .returning(AppointmentDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(Appointment::from(result_db))
            })
            .await
    }

    async fn update(
        &self,
        dog_id: &str,
        appointment_id: &str,
        update: AppointmentUpdate,
    ) -> Result<Appointment> {
        let dog_id_owned = dog_id.to_string();
        let appointment_id_owned = appointment_id.to_string();
        let changeset = AppointmentUpdateDB::from(update);

        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<Appointment> {
                let result_db = diesel::update(
                    appointments::table
                        .filter(appointments::id.eq(&appointment_id_owned))
                        .filter(appointments::dog_id.eq(&dog_id_owned)),
                )
                .set(&changeset)
                .returning(AppointmentDB::as_returning())
                .get_result(conn)
                .map_err(StorageError::from)?;
                Ok(Appointment::from(result_db))
            })
            .await
    }

    async fn delete(&self, dog_id: &str, appointment_id: &str) -> Result<usize> {
        let dog_id_owned = dog_id.to_string();
        let appointment_id_owned = appointment_id.to_string();
        self.writer
            .exec(move |conn: &mut SqliteConnection| -> Result<usize> {
                Ok(diesel::delete(
                    appointments::table
                        .filter(appointments::id.eq(appointment_id_owned))
                        .filter(appointments::dog_id.eq(dog_id_owned)),
                )
                .execute(conn)
                .map_err(StorageError::from)?)
            })
            .await
    }

    fn list_for_dog(&self, dog_id: &str) -> Result<Vec<Appointment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = appointments::table
            .filter(appointments::dog_id.eq(dog_id))
            .order((appointments::date.asc(), appointments::time.asc()))
            .load::<AppointmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    fn list_for_dog_since(&self, dog_id: &str, from: NaiveDate) -> Result<Vec<Appointment>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = appointments::table
            .filter(appointments::dog_id.eq(dog_id))
            .filter(appointments::date.ge(from))
            .order((appointments::date.asc(), appointments::time.asc()))
            .load::<AppointmentDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(rows.into_iter().map(Appointment::from).collect())
    }

    fn reminders_for_date(&self, date: NaiveDate) -> Result<Vec<AppointmentReminder>> {
        let mut conn = get_connection(&self.pool)?;
        let rows = appointments::table
            .inner_join(dogs::table.inner_join(users::table))
            .filter(appointments::date.eq(date))
            .filter(appointments::reminder.eq(true))
            .order(appointments::time.asc())
            .select((
                appointments::id,
                appointments::title,
                appointments::date,
                appointments::time,
                appointments::reminder_time,
                dogs::name,
                users::name,
                users::email,
                users::language,
            ))
            .load::<(
                String,
                String,
                NaiveDate,
                NaiveTime,
                i32,
                String,
                String,
                String,
                String,
            )>(&mut conn)
            .map_err(StorageError::from)?;

        Ok(rows
            .into_iter()
            .map(
                |(
                    appointment_id,
                    title,
                    date,
                    time,
                    reminder_time,
                    dog_name,
                    owner_name,
                    owner_email,
                    owner_language,
                )| AppointmentReminder {
                    appointment_id,
                    title,
                    date,
                    time,
                    reminder_time,
                    dog_name,
                    owner_name,
                    owner_email,
                    owner_language,
                },
            )
            .collect())
    }
}
