pub mod aggregate;

pub use aggregate::{Appointment, AppointmentId, BookAppointmentRequest, UpdateStatusRequest};
