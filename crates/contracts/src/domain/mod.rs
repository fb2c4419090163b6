pub mod appointment;
pub mod common;
pub mod doctor;
