//! Appointment repository

use crate::{error::AppError, models::appointment::*};
use sqlx::PgPool;

pub struct AppointmentRepository {
    db: PgPool,
}

impl AppointmentRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        patient_id: i64,
        req: &CreateAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            INSERT INTO appointments (patient_id, doctor_id, date, time, reason)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(patient_id)
        .bind(req.doctor_id)
        .bind(req.date)
        .bind(req.time)
        .bind(&req.reason)
        .fetch_one(&self.db)
        .await?;

        Ok(appointment)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Appointment>, AppError> {
        let appointment =
            sqlx::query_as::<_, Appointment>("SELECT * FROM appointments WHERE id = $1")
                .bind(id)
                .fetch_optional(&self.db)
                .await?;

        Ok(appointment)
    }

    pub async fn find_by_patient(&self, patient_id: i64) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE patient_id = $1 ORDER BY date, time",
        )
        .bind(patient_id)
        .fetch_all(&self.db)
        .await?;

        Ok(appointments)
    }

    pub async fn find_by_doctor(&self, doctor_id: i64) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments WHERE doctor_id = $1 ORDER BY date, time",
        )
        .bind(doctor_id)
        .fetch_all(&self.db)
        .await?;

        Ok(appointments)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Appointment>, AppError> {
        let appointments = sqlx::query_as::<_, Appointment>(
            "SELECT * FROM appointments ORDER BY date, time LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(appointments)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM appointments")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    /// Update an appointment owned by the given patient. Someone else's
    /// appointment is indistinguishable from a missing one.
    pub async fn update(
        &self,
        id: i64,
        patient_id: i64,
        req: &UpdateAppointmentRequest,
    ) -> Result<Option<Appointment>, AppError> {
        let appointment = sqlx::query_as::<_, Appointment>(
            r#"
            UPDATE appointments
            SET date = $3, time = $4, reason = $5, updated_at = NOW()
            WHERE id = $1 AND patient_id = $2
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patient_id)
        .bind(req.date)
        .bind(req.time)
        .bind(&req.reason)
        .fetch_optional(&self.db)
        .await?;

        Ok(appointment)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM appointments WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
