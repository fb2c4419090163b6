pub mod appointment_status;

pub use appointment_status::AppointmentStatus;
