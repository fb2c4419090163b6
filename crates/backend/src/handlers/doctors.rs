use axum::extract::State;
use axum::Json;

use contracts::domain::doctor::Doctor;

use crate::domain::doctor;
use crate::shared::state::AppState;

/// GET /api/doctors
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Doctor>> {
    Json(doctor::service::list_all(&state.doctors).await)
}
