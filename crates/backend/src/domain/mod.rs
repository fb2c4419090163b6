pub mod appointment;
pub mod doctor;
pub mod error;

pub use error::DomainError;
