//! Patient repository

use crate::{error::AppError, models::patient::*};
use sqlx::PgPool;

pub struct PatientRepository {
    db: PgPool,
}

impl PatientRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(patient)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>("SELECT * FROM patients WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(patient)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Patient>, AppError> {
        let patients = sqlx::query_as::<_, Patient>(
            "SELECT * FROM patients ORDER BY last_name, first_name LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(patients)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM patients")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    pub async fn create(
        &self,
        req: &RegisterPatientRequest,
        password_hash: &str,
    ) -> Result<Patient, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            INSERT INTO patients (first_name, last_name, email, password_hash, phone, date_of_birth, gender, address)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(password_hash)
        .bind(&req.phone)
        .bind(req.date_of_birth)
        .bind(&req.gender)
        .bind(&req.address)
        .fetch_one(&self.db)
        .await?;

        Ok(patient)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdatePatientRequest,
    ) -> Result<Option<Patient>, AppError> {
        let patient = sqlx::query_as::<_, Patient>(
            r#"
            UPDATE patients
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                phone = COALESCE($4, phone),
                date_of_birth = COALESCE($5, date_of_birth),
                gender = COALESCE($6, gender),
                address = COALESCE($7, address),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.phone)
        .bind(req.date_of_birth)
        .bind(&req.gender)
        .bind(&req.address)
        .fetch_optional(&self.db)
        .await?;

        Ok(patient)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM patients WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
