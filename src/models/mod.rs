pub mod appointments;
pub mod owner;
pub mod pet;
pub mod veterinarian;

pub use appointments::{
    Appointment, AppointmentForm, AppointmentStatus, AppointmentUpdate, InvalidStatus,
};
pub use owner::Owner;
pub use pet::{Pet, PetForm, PetIdQuery};
pub use veterinarian::{Veterinarian, VeterinarianForm};
