use crate::domain::common::AggregateId;
use crate::enums::AppointmentStatus;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AppointmentId(pub Uuid);

impl AppointmentId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }

    /// Short suffix for display, e.g. "#3f2a" on dashboard cards
    pub fn short(&self) -> String {
        let s = self.0.to_string();
        s[s.len() - 4..].to_string()
    }
}

impl AggregateId for AppointmentId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(AppointmentId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: AppointmentId,

    #[serde(rename = "patientName")]
    pub patient_name: String,

    #[serde(rename = "patientPhone")]
    pub patient_phone: String,

    /// Reference to `Doctor::id` (slug, e.g. "dr-nadia")
    #[serde(rename = "doctorId")]
    pub doctor_id: String,

    /// Requested slot as entered in the booking form (`datetime-local` value).
    /// Kept verbatim; parsed only for display.
    pub date: String,

    pub reason: Option<String>,

    pub status: AppointmentStatus,

    #[serde(rename = "createdAt")]
    pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Appointment {
    /// New booking request: fresh id, Pending status, created now
    pub fn new_for_insert(
        patient_name: String,
        patient_phone: String,
        doctor_id: String,
        date: String,
        reason: Option<String>,
    ) -> Self {
        Self {
            id: AppointmentId::new_v4(),
            patient_name,
            patient_phone,
            doctor_id,
            date,
            reason,
            status: AppointmentStatus::Pending,
            created_at: chrono::Utc::now(),
        }
    }

    pub fn to_string_id(&self) -> String {
        self.id.as_string()
    }

    /// Overwrite the workflow status. Any transition is allowed; the staff
    /// dashboard is the only writer and is trusted to pick sensible moves.
    pub fn set_status(&mut self, status: AppointmentStatus) {
        self.status = status;
    }

    /// Presence checks only; the booking form preselects a doctor, so
    /// `doctor_id` is not part of them
    pub fn validate(&self) -> Result<(), String> {
        if self.patient_name.trim().is_empty() {
            return Err("الاسم الكامل مطلوب".into());
        }
        if self.patient_phone.trim().is_empty() {
            return Err("رقم الهاتف مطلوب".into());
        }
        if self.date.trim().is_empty() {
            return Err("المرجو اختيار تاريخ الموعد".into());
        }
        Ok(())
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Booking form payload (public site → POST /api/appointments)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct BookAppointmentRequest {
    #[serde(rename = "patientName")]
    pub patient_name: String,
    #[serde(rename = "patientPhone")]
    pub patient_phone: String,
    #[serde(rename = "doctorId")]
    pub doctor_id: String,
    pub date: String,
    pub reason: Option<String>,
}

impl BookAppointmentRequest {
    pub fn into_appointment(self) -> Appointment {
        // Whitespace-only reason counts as "not given"
        let reason = self.reason.filter(|r| !r.trim().is_empty());
        Appointment::new_for_insert(
            self.patient_name,
            self.patient_phone,
            self.doctor_id,
            self.date,
            reason,
        )
    }
}

/// Status change payload (dashboard → PATCH /api/appointments/:id/status)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: AppointmentStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_request() -> BookAppointmentRequest {
        BookAppointmentRequest {
            patient_name: "سارة المنصور".to_string(),
            patient_phone: "0661123456".to_string(),
            doctor_id: "dr-nadia".to_string(),
            date: "2025-06-10T10:30".to_string(),
            reason: Some("متابعة حمل".to_string()),
        }
    }

    #[test]
    fn test_new_booking_starts_pending() {
        let apt = valid_request().into_appointment();
        assert_eq!(apt.status, AppointmentStatus::Pending);
        assert!(apt.validate().is_ok());
    }

    #[test]
    fn test_blank_fields_fail_validation() {
        for blank in ["", "   "] {
            let mut req = valid_request();
            req.patient_name = blank.to_string();
            assert!(req.into_appointment().validate().is_err());

            let mut req = valid_request();
            req.patient_phone = blank.to_string();
            assert!(req.into_appointment().validate().is_err());

            let mut req = valid_request();
            req.date = blank.to_string();
            assert!(req.into_appointment().validate().is_err());
        }
    }

    #[test]
    fn test_blank_reason_dropped() {
        let mut req = valid_request();
        req.reason = Some("  ".to_string());
        assert_eq!(req.into_appointment().reason, None);
    }

    #[test]
    fn test_id_string_round_trip() {
        let id = AppointmentId::new_v4();
        let parsed = AppointmentId::from_string(&id.as_string()).unwrap();
        assert_eq!(id, parsed);
        assert_eq!(id.short().len(), 4);
    }

    #[test]
    fn test_wire_field_names() {
        let apt = valid_request().into_appointment();
        let json = serde_json::to_value(&apt).unwrap();
        assert!(json.get("patientName").is_some());
        assert!(json.get("patientPhone").is_some());
        assert!(json.get("doctorId").is_some());
        assert!(json.get("createdAt").is_some());
        assert_eq!(json["status"], "PENDING");
    }
}
