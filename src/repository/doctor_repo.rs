//! Doctor repository

use crate::{error::AppError, models::doctor::*};
use sqlx::PgPool;

pub struct DoctorRepository {
    db: PgPool,
}

impl DoctorRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(doctor)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>("SELECT * FROM doctors WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(doctor)
    }

    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Doctor>, AppError> {
        let doctors = sqlx::query_as::<_, Doctor>(
            "SELECT * FROM doctors ORDER BY last_name, first_name LIMIT $1 OFFSET $2",
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.db)
        .await?;

        Ok(doctors)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM doctors")
            .fetch_one(&self.db)
            .await?;

        Ok(count)
    }

    pub async fn create(
        &self,
        req: &RegisterDoctorRequest,
        password_hash: &str,
    ) -> Result<Doctor, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            INSERT INTO doctors (first_name, last_name, email, password_hash, specialty, phone, experience_years)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(password_hash)
        .bind(&req.specialty)
        .bind(&req.phone)
        .bind(req.experience_years)
        .fetch_one(&self.db)
        .await?;

        Ok(doctor)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateDoctorRequest,
    ) -> Result<Option<Doctor>, AppError> {
        let doctor = sqlx::query_as::<_, Doctor>(
            r#"
            UPDATE doctors
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                specialty = COALESCE($4, specialty),
                phone = COALESCE($5, phone),
                experience_years = COALESCE($6, experience_years),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.specialty)
        .bind(&req.phone)
        .bind(req.experience_years)
        .fetch_optional(&self.db)
        .await?;

        Ok(doctor)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM doctors WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
