use crate::shared::api_utils::api_url;
use contracts::dashboards::overview::ClinicStats;
use contracts::domain::appointment::{Appointment, UpdateStatusRequest};
use contracts::enums::AppointmentStatus;
use gloo_net::http::Request;

/// Fetch every appointment, newest first
pub async fn get_appointments() -> Result<Vec<Appointment>, String> {
    let url = api_url("/api/appointments");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Appointment> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Fetch the derived clinic counters
pub async fn get_stats() -> Result<ClinicStats, String> {
    let url = api_url("/api/stats");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: ClinicStats = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}

/// Move one appointment to a new workflow status
pub async fn update_status(id: &str, status: AppointmentStatus) -> Result<Appointment, String> {
    let url = api_url(&format!("/api/appointments/{}/status", id));

    let response = Request::patch(&url)
        .json(&UpdateStatusRequest { status })
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
