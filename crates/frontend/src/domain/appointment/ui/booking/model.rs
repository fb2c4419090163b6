use crate::shared::api_utils::api_url;
use contracts::domain::appointment::{Appointment, BookAppointmentRequest};
use gloo_net::http::Request;

/// Submit a booking request; the backend answers with the stored appointment
pub async fn submit_booking(request: &BookAppointmentRequest) -> Result<Appointment, String> {
    let url = api_url("/api/appointments");

    let response = Request::post(&url)
        .json(request)
        .map_err(|e| format!("Request failed: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Appointment = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
