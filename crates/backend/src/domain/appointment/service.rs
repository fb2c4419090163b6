use super::repository::AppointmentStore;
use crate::domain::DomainError;
use contracts::domain::appointment::{Appointment, AppointmentId, BookAppointmentRequest};
use contracts::domain::common::AggregateId;
use contracts::enums::AppointmentStatus;

/// New booking request from the public site. Fresh id, `Pending` status,
/// prepended so the dashboard sees it first.
pub async fn create(
    store: &AppointmentStore,
    request: BookAppointmentRequest,
) -> Result<Appointment, DomainError> {
    let appointment = request.into_appointment();
    appointment.validate().map_err(DomainError::Validation)?;

    store.insert(appointment.clone()).await;
    Ok(appointment)
}

/// Triage action from the dashboard. Overwrites the status field only; no
/// transition table is consulted. An unknown id is a hard error, not a no-op.
pub async fn set_status(
    store: &AppointmentStore,
    id: AppointmentId,
    status: AppointmentStatus,
) -> Result<Appointment, DomainError> {
    store
        .set_status(id, status)
        .await
        .ok_or_else(|| DomainError::NotFound(id.as_string()))
}

pub async fn list_all(store: &AppointmentStore) -> Vec<Appointment> {
    store.list_all().await
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str) -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_name: name.to_string(),
            patient_phone: phone.to_string(),
            doctor_id: "dr-nadia".to_string(),
            date: "2025-07-01T10:30".to_string(),
            reason: Some("متابعة حمل".to_string()),
        }
    }

    #[tokio::test]
    async fn test_create_starts_pending_with_unique_ids() {
        let store = AppointmentStore::new();
        let a = create(&store, request("سارة", "0600000001")).await.unwrap();
        let b = create(&store, request("خديجة", "0600000002")).await.unwrap();

        assert_eq!(a.status, AppointmentStatus::Pending);
        assert_eq!(b.status, AppointmentStatus::Pending);
        assert_ne!(a.id, b.id);

        // Newest first
        let all = list_all(&store).await;
        assert_eq!(all[0].id, b.id);
        assert_eq!(all[1].id, a.id);
    }

    #[tokio::test]
    async fn test_create_rejects_blank_phone() {
        let store = AppointmentStore::new();
        let result = create(&store, request("سارة", "   ")).await;

        assert!(matches!(result, Err(DomainError::Validation(_))));
        assert_eq!(store.count().await, 0);
    }

    #[tokio::test]
    async fn test_confirm_then_complete() {
        let store = AppointmentStore::new();
        let apt = create(&store, request("ليلى", "0661555555")).await.unwrap();

        let confirmed = set_status(&store, apt.id, AppointmentStatus::Confirmed)
            .await
            .unwrap();
        assert_eq!(confirmed.status, AppointmentStatus::Confirmed);

        let completed = set_status(&store, apt.id, AppointmentStatus::Completed)
            .await
            .unwrap();
        assert_eq!(completed.status, AppointmentStatus::Completed);

        // Still the same single record
        let all = list_all(&store).await;
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, apt.id);
    }

    #[tokio::test]
    async fn test_set_status_unknown_id_is_not_found() {
        let store = AppointmentStore::new();
        create(&store, request("سارة", "0600000001")).await.unwrap();

        let result = set_status(
            &store,
            AppointmentId::new_v4(),
            AppointmentStatus::Confirmed,
        )
        .await;

        assert!(matches!(result, Err(DomainError::NotFound(_))));
        assert_eq!(list_all(&store).await[0].status, AppointmentStatus::Pending);
    }
}
