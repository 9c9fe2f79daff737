//! Admin repository

use crate::{error::AppError, models::admin::*};
use sqlx::PgPool;

pub struct AdminRepository {
    db: PgPool,
}

impl AdminRepository {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE email = $1")
            .bind(email)
            .fetch_optional(&self.db)
            .await?;

        Ok(admin)
    }

    pub async fn find_by_id(&self, id: i64) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>("SELECT * FROM admins WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.db)
            .await?;

        Ok(admin)
    }

    pub async fn create(
        &self,
        req: &RegisterAdminRequest,
        password_hash: &str,
    ) -> Result<Admin, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            INSERT INTO admins (first_name, last_name, email, password_hash)
            VALUES ($1, $2, $3, $4)
            RETURNING *
            "#,
        )
        .bind(&req.first_name)
        .bind(&req.last_name)
        .bind(&req.email)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;

        Ok(admin)
    }

    pub async fn update(
        &self,
        id: i64,
        req: &UpdateAdminRequest,
    ) -> Result<Option<Admin>, AppError> {
        let admin = sqlx::query_as::<_, Admin>(
            r#"
            UPDATE admins
            SET
                first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                updated_at = NOW()
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&req.first_name)
        .bind(&req.last_name)
        .fetch_optional(&self.db)
        .await?;

        Ok(admin)
    }

    pub async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM admins WHERE id = $1")
            .bind(id)
            .execute(&self.db)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
