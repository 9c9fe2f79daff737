//! Authentication service: registration and login for the three account
//! kinds. The role baked into each login's token is implied by the table
//! the account lives in, never taken from the client.

use crate::{
    auth::{jwt::JwtService, password::PasswordHasher},
    error::AppError,
    models::{admin::*, auth::*, doctor::*, patient::*, role::Role},
    repository::{AdminRepository, DoctorRepository, PatientRepository},
};
use sqlx::PgPool;
use std::sync::Arc;

pub struct AuthService {
    db: PgPool,
    jwt_service: Arc<JwtService>,
}

impl AuthService {
    pub fn new(db: PgPool, jwt_service: Arc<JwtService>) -> Self {
        Self { db, jwt_service }
    }

    /// Register a patient account
    pub async fn register_patient(
        &self,
        req: RegisterPatientRequest,
    ) -> Result<PatientResponse, AppError> {
        let repo = PatientRepository::new(self.db.clone());

        if repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::bad_request("Patient already exists"));
        }

        let password_hash = PasswordHasher::new().hash(&req.password)?;
        let patient = repo.create(&req, &password_hash).await?;

        tracing::info!(patient_id = patient.id, "Patient registered");

        Ok(PatientResponse::from(patient))
    }

    /// Patient login
    pub async fn login_patient(
        &self,
        req: LoginRequest,
    ) -> Result<LoginResponse<PatientResponse>, AppError> {
        let repo = PatientRepository::new(self.db.clone());

        let patient = repo
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        PasswordHasher::new().verify(&req.password, &patient.password_hash)?;

        let token = self
            .jwt_service
            .generate_token(patient.id, Some(Role::Patient))?;

        Ok(LoginResponse {
            token,
            expires_in: self.jwt_service.token_ttl_secs(),
            user: PatientResponse::from(patient),
        })
    }

    /// Register a doctor account
    pub async fn register_doctor(
        &self,
        req: RegisterDoctorRequest,
    ) -> Result<DoctorResponse, AppError> {
        let repo = DoctorRepository::new(self.db.clone());

        if repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::bad_request("Doctor already exists"));
        }

        let password_hash = PasswordHasher::new().hash(&req.password)?;
        let doctor = repo.create(&req, &password_hash).await?;

        tracing::info!(doctor_id = doctor.id, "Doctor registered");

        Ok(DoctorResponse::from(doctor))
    }

    /// Doctor login
    pub async fn login_doctor(
        &self,
        req: LoginRequest,
    ) -> Result<LoginResponse<DoctorResponse>, AppError> {
        let repo = DoctorRepository::new(self.db.clone());

        let doctor = repo
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        PasswordHasher::new().verify(&req.password, &doctor.password_hash)?;

        let token = self
            .jwt_service
            .generate_token(doctor.id, Some(Role::Doctor))?;

        Ok(LoginResponse {
            token,
            expires_in: self.jwt_service.token_ttl_secs(),
            user: DoctorResponse::from(doctor),
        })
    }

    /// Register an admin account
    pub async fn register_admin(
        &self,
        req: RegisterAdminRequest,
    ) -> Result<AdminResponse, AppError> {
        let repo = AdminRepository::new(self.db.clone());

        if repo.find_by_email(&req.email).await?.is_some() {
            return Err(AppError::bad_request("Admin already exists"));
        }

        let password_hash = PasswordHasher::new().hash(&req.password)?;
        let admin = repo.create(&req, &password_hash).await?;

        tracing::info!(admin_id = admin.id, "Admin registered");

        Ok(AdminResponse::from(admin))
    }

    /// Admin login
    pub async fn login_admin(
        &self,
        req: LoginRequest,
    ) -> Result<LoginResponse<AdminResponse>, AppError> {
        let repo = AdminRepository::new(self.db.clone());

        let admin = repo
            .find_by_email(&req.email)
            .await?
            .ok_or(AppError::Unauthorized)?;

        PasswordHasher::new().verify(&req.password, &admin.password_hash)?;

        let token = self.jwt_service.generate_token(admin.id, Some(Role::Admin))?;

        Ok(LoginResponse {
            token,
            expires_in: self.jwt_service.token_ttl_secs(),
            user: AdminResponse::from(admin),
        })
    }
}

