use crate::shared::api_utils::api_url;
use contracts::domain::doctor::Doctor;
use gloo_net::http::Request;

/// Fetch the clinic's doctor directory
pub async fn get_doctors() -> Result<Vec<Doctor>, String> {
    let url = api_url("/api/doctors");

    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let data: Vec<Doctor> = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;

    Ok(data)
}
