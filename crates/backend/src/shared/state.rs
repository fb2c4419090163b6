use crate::domain::appointment::repository::AppointmentStore;
use crate::domain::doctor::repository::DoctorDirectory;

/// Shared handles, cloned into every handler through axum `State`.
/// No ambient globals: whoever needs the store gets it handed to them.
#[derive(Clone)]
pub struct AppState {
    pub store: AppointmentStore,
    pub doctors: DoctorDirectory,
}
