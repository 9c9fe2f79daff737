//! Appointment booking service

use crate::{
    error::AppError,
    models::appointment::*,
    repository::{AppointmentRepository, DoctorRepository},
};
use sqlx::PgPool;

pub struct AppointmentService {
    db: PgPool,
}

impl AppointmentService {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }

    /// Book an appointment for the authenticated patient. The doctor must
    /// exist; a dangling doctor id is a client error, not a server one.
    pub async fn create(
        &self,
        patient_id: i64,
        req: CreateAppointmentRequest,
    ) -> Result<Appointment, AppError> {
        let doctors = DoctorRepository::new(self.db.clone());
        if doctors.find_by_id(req.doctor_id).await?.is_none() {
            return Err(AppError::bad_request("Unknown doctor"));
        }

        let repo = AppointmentRepository::new(self.db.clone());
        let appointment = repo.create(patient_id, &req).await?;

        tracing::info!(
            appointment_id = appointment.id,
            patient_id,
            doctor_id = req.doctor_id,
            "Appointment created"
        );

        Ok(appointment)
    }
}
