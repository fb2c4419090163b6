use serde::{Deserialize, Serialize};

/// Headline counters for the staff dashboard (GET /api/stats).
///
/// Confirmed and cancelled are not carried separately; the dashboard derives
/// its middle card as `total - pending - completed`, so that card reads
/// "confirmed + cancelled". Invariant: `pending + completed <= total_appointments`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ClinicStats {
    /// Every appointment ever recorded, regardless of state
    #[serde(rename = "totalAppointments")]
    pub total_appointments: usize,
    /// Bookings awaiting triage
    pub pending: usize,
    /// Visits that took place
    pub completed: usize,
}
