use crate::domain::appointment::repository::AppointmentStore;
use contracts::dashboards::overview::ClinicStats;
use contracts::enums::AppointmentStatus;

/// Assemble the dashboard counters from one snapshot of the collection.
/// Derived on every read, never stored.
pub async fn get_stats(store: &AppointmentStore) -> ClinicStats {
    let appointments = store.list_all().await;

    ClinicStats {
        total_appointments: appointments.len(),
        pending: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Pending)
            .count(),
        completed: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::service;
    use contracts::domain::appointment::BookAppointmentRequest;

    fn request(name: &str) -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_name: name.to_string(),
            patient_phone: "0600000000".to_string(),
            doctor_id: "dr-nadia".to_string(),
            date: "2025-07-01T11:00".to_string(),
            reason: None,
        }
    }

    async fn assert_invariants(store: &AppointmentStore) {
        let stats = get_stats(store).await;
        assert!(stats.pending + stats.completed <= stats.total_appointments);

        let all = store.list_all().await;
        assert_eq!(
            stats.pending,
            all.iter()
                .filter(|a| a.status == AppointmentStatus::Pending)
                .count()
        );
        assert_eq!(
            stats.completed,
            all.iter()
                .filter(|a| a.status == AppointmentStatus::Completed)
                .count()
        );
    }

    #[tokio::test]
    async fn test_counters_track_the_workflow() {
        let store = AppointmentStore::new();
        assert_eq!(get_stats(&store).await.total_appointments, 0);

        // Booking arrives
        let apt = service::create(&store, request("سارة")).await.unwrap();
        let stats = get_stats(&store).await;
        assert_eq!(stats.total_appointments, 1);
        assert_eq!(stats.pending, 1);
        assert_eq!(stats.completed, 0);
        assert_invariants(&store).await;

        // Staff confirms: pending drops, record stays counted in total
        service::set_status(&store, apt.id, AppointmentStatus::Confirmed)
            .await
            .unwrap();
        let stats = get_stats(&store).await;
        assert_eq!(stats.total_appointments, 1);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completed, 0);
        assert_invariants(&store).await;

        // Visit happens
        service::set_status(&store, apt.id, AppointmentStatus::Completed)
            .await
            .unwrap();
        let stats = get_stats(&store).await;
        assert_eq!(stats.completed, 1);
        assert_invariants(&store).await;
    }

    #[tokio::test]
    async fn test_cancelled_only_counts_toward_total() {
        let store = AppointmentStore::new();
        let apt = service::create(&store, request("خديجة")).await.unwrap();
        service::set_status(&store, apt.id, AppointmentStatus::Cancelled)
            .await
            .unwrap();

        let stats = get_stats(&store).await;
        assert_eq!(stats.total_appointments, 1);
        assert_eq!(stats.pending, 0);
        assert_eq!(stats.completed, 0);
        assert_invariants(&store).await;
    }
}
