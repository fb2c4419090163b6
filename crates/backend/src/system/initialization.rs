use anyhow::Result;
use chrono::{Duration, SecondsFormat, Utc};
use contracts::domain::appointment::Appointment;
use contracts::domain::doctor::Doctor;
use contracts::enums::AppointmentStatus;

use crate::shared::state::AppState;

/// Medical team shown on the site and selectable in the booking form
pub fn doctor_directory() -> Vec<Doctor> {
    vec![
        Doctor::new(
            "dr-nadia",
            "د. نادية العلمي",
            "طبيبة نساء وتوليد",
            "https://images.unsplash.com/photo-1559839734-2b71ea197ec2?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&q=80",
        ),
        Doctor::new(
            "dr-karim",
            "د. كريم التازي",
            "أخصائي جراحة أجنة",
            "https://images.unsplash.com/photo-1612349317150-e413f6a5b16d?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&q=80",
        ),
    ]
}

/// Seed the store with the demo bookings a fresh start is expected to show:
/// two pending requests and one already-confirmed visit, all in the near
/// future so the dashboard has something to triage.
pub async fn seed_demo_data(state: &AppState) -> Result<()> {
    let slot_in = |d: Duration| (Utc::now() + d).to_rfc3339_opts(SecondsFormat::Millis, true);

    let mut seed = vec![
        Appointment::new_for_insert(
            "سارة المنصور".to_string(),
            "0661123456".to_string(),
            "dr-nadia".to_string(),
            slot_in(Duration::days(1)),
            Some("متابعة حمل - الشهر الخامس".to_string()),
        ),
        Appointment::new_for_insert(
            "خديجة بنجلون".to_string(),
            "0661987654".to_string(),
            "dr-nadia".to_string(),
            slot_in(Duration::days(2)),
            Some("استشارة أولية".to_string()),
        ),
        Appointment::new_for_insert(
            "ليلى العمراني".to_string(),
            "0661555555".to_string(),
            "dr-nadia".to_string(),
            slot_in(Duration::hours(1)),
            None,
        ),
    ];
    seed[2].set_status(AppointmentStatus::Confirmed);

    // The store prepends, so insert in reverse to keep intake order on screen
    for appointment in seed.into_iter().rev() {
        state.store.insert(appointment).await;
    }

    tracing::info!(
        "Seeded {} demo appointments, {} doctors",
        state.store.count().await,
        state.doctors.list_all().len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::appointment::repository::AppointmentStore;
    use crate::domain::doctor::repository::DoctorDirectory;

    #[tokio::test]
    async fn test_seed_shape() {
        let state = AppState {
            store: AppointmentStore::new(),
            doctors: DoctorDirectory::new(doctor_directory()),
        };
        seed_demo_data(&state).await.unwrap();

        let all = state.store.list_all().await;
        assert_eq!(all.len(), 3);
        // Intake order preserved: the two pending requests first
        assert_eq!(all[0].patient_name, "سارة المنصور");
        assert_eq!(all[0].status, AppointmentStatus::Pending);
        assert_eq!(all[1].status, AppointmentStatus::Pending);
        assert_eq!(all[2].patient_name, "ليلى العمراني");
        assert_eq!(all[2].status, AppointmentStatus::Confirmed);
        assert_eq!(state.doctors.list_all().len(), 2);
    }
}
