use serde::{Deserialize, Serialize};

/// Appointment workflow states.
///
/// Every appointment is born `Pending`; the staff dashboard moves it to
/// `Confirmed`, then `Completed`, or to `Cancelled` at any point. There is no
/// transition table on purpose: the dashboard buttons are the whole state
/// machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Stable wire code, also the serde representation
    pub fn code(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "PENDING",
            AppointmentStatus::Confirmed => "CONFIRMED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
        }
    }

    /// Human-readable name as shown on the dashboard
    pub fn display_name(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "جديدة",
            AppointmentStatus::Confirmed => "مؤكدة",
            AppointmentStatus::Completed => "مكتملة",
            AppointmentStatus::Cancelled => "ملغاة",
        }
    }

    /// All states, in workflow order
    pub fn all() -> Vec<AppointmentStatus> {
        vec![
            AppointmentStatus::Pending,
            AppointmentStatus::Confirmed,
            AppointmentStatus::Completed,
            AppointmentStatus::Cancelled,
        ]
    }

    /// Parse from the wire code
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDING" => Some(AppointmentStatus::Pending),
            "CONFIRMED" => Some(AppointmentStatus::Confirmed),
            "COMPLETED" => Some(AppointmentStatus::Completed),
            "CANCELLED" => Some(AppointmentStatus::Cancelled),
            _ => None,
        }
    }
}

impl ToString for AppointmentStatus {
    fn to_string(&self) -> String {
        self.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip() {
        for status in AppointmentStatus::all() {
            assert_eq!(AppointmentStatus::from_code(status.code()), Some(status));
        }
        assert_eq!(AppointmentStatus::from_code("UNKNOWN"), None);
    }

    #[test]
    fn test_serde_uses_wire_codes() {
        let json = serde_json::to_string(&AppointmentStatus::Confirmed).unwrap();
        assert_eq!(json, "\"CONFIRMED\"");
        let parsed: AppointmentStatus = serde_json::from_str("\"CANCELLED\"").unwrap();
        assert_eq!(parsed, AppointmentStatus::Cancelled);
    }
}
