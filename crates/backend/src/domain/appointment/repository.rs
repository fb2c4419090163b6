use contracts::domain::appointment::{Appointment, AppointmentId};
use contracts::enums::AppointmentStatus;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory appointment collection.
///
/// Single source of truth for booking state, alive for the lifetime of the
/// process. Cloning the store clones the handle, not the data; handlers get
/// a clone through axum `State`. One writer lock guards the whole vector,
/// which is plenty for a single clinic's traffic.
#[derive(Clone, Default)]
pub struct AppointmentStore {
    items: Arc<RwLock<Vec<Appointment>>>,
}

impl AppointmentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a record; the listing contract is newest first
    pub async fn insert(&self, appointment: Appointment) {
        let mut items = self.items.write().await;
        items.insert(0, appointment);
    }

    /// Snapshot of the whole collection, insertion order preserved
    pub async fn list_all(&self) -> Vec<Appointment> {
        self.items.read().await.clone()
    }

    pub async fn get_by_id(&self, id: AppointmentId) -> Option<Appointment> {
        self.items.read().await.iter().find(|a| a.id == id).cloned()
    }

    /// Overwrite the status of the matching record and return the updated
    /// copy. `None` when no record carries the id.
    pub async fn set_status(
        &self,
        id: AppointmentId,
        status: AppointmentStatus,
    ) -> Option<Appointment> {
        let mut items = self.items.write().await;
        let appointment = items.iter_mut().find(|a| a.id == id)?;
        appointment.set_status(status);
        Some(appointment.clone())
    }

    pub async fn count(&self) -> usize {
        self.items.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::appointment::BookAppointmentRequest;

    fn booking(name: &str) -> Appointment {
        BookAppointmentRequest {
            patient_name: name.to_string(),
            patient_phone: "0600000000".to_string(),
            doctor_id: "dr-nadia".to_string(),
            date: "2025-07-01T09:00".to_string(),
            reason: None,
        }
        .into_appointment()
    }

    #[tokio::test]
    async fn test_insert_prepends() {
        let store = AppointmentStore::new();
        let first = booking("أولى");
        let second = booking("ثانية");
        store.insert(first.clone()).await;
        store.insert(second.clone()).await;

        let all = store.list_all().await;
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);
    }

    #[tokio::test]
    async fn test_set_status_touches_nothing_else() {
        let store = AppointmentStore::new();
        let original = booking("سارة المنصور");
        store.insert(original.clone()).await;

        let updated = store
            .set_status(original.id, AppointmentStatus::Confirmed)
            .await
            .unwrap();

        assert_eq!(updated.status, AppointmentStatus::Confirmed);
        assert_eq!(updated.id, original.id);
        assert_eq!(updated.patient_name, original.patient_name);
        assert_eq!(updated.patient_phone, original.patient_phone);
        assert_eq!(updated.doctor_id, original.doctor_id);
        assert_eq!(updated.date, original.date);
        assert_eq!(updated.reason, original.reason);
        assert_eq!(updated.created_at, original.created_at);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_leaves_store_alone() {
        let store = AppointmentStore::new();
        store.insert(booking("خديجة")).await;

        let missing = AppointmentId::new_v4();
        assert!(store
            .set_status(missing, AppointmentStatus::Cancelled)
            .await
            .is_none());

        let all = store.list_all().await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, AppointmentStatus::Pending);
    }
}
