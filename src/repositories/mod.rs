mod appointments;
mod directory;

pub use appointments::AppointmentRepository;
pub use directory::ClinicDirectory;
