//! Database repository layer

pub mod admin_repo;
pub mod appointment_repo;
pub mod doctor_repo;
pub mod patient_repo;

pub use admin_repo::AdminRepository;
pub use appointment_repo::AppointmentRepository;
pub use doctor_repo::DoctorRepository;
pub use patient_repo::PatientRepository;
