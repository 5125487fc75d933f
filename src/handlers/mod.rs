pub mod appointments;

pub use appointments::{
    create_appointment, get_appointment, list_appointments, update_appointment,
    update_appointment_status, AppointmentError,
};
