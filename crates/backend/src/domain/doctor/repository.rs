use contracts::domain::doctor::Doctor;
use std::sync::Arc;

/// Reference directory of the medical team. Filled once at startup and never
/// mutated, so a plain `Arc` is enough, no lock.
#[derive(Clone, Default)]
pub struct DoctorDirectory {
    items: Arc<Vec<Doctor>>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self {
            items: Arc::new(doctors),
        }
    }

    pub fn list_all(&self) -> Vec<Doctor> {
        self.items.as_ref().clone()
    }
}
