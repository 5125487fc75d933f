mod appointments;
mod clinic;
mod health_check;

pub use appointments::*;
pub use clinic::*;
pub use health_check::*;
