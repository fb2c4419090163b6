pub mod dashboard;

pub use dashboard::StaffDashboard;
