use axum::extract::{Path, State};
use axum::Json;
use serde_json::json;

use contracts::domain::appointment::{
    Appointment, AppointmentId, BookAppointmentRequest, UpdateStatusRequest,
};
use contracts::domain::common::AggregateId;

use crate::domain::{appointment, DomainError};
use crate::shared::state::AppState;

/// GET /api/appointments
pub async fn list_all(State(state): State<AppState>) -> Json<Vec<Appointment>> {
    Json(appointment::service::list_all(&state.store).await)
}

/// POST /api/appointments
pub async fn create(
    State(state): State<AppState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Appointment>, (axum::http::StatusCode, Json<serde_json::Value>)> {
    match appointment::service::create(&state.store, request).await {
        Ok(created) => Ok(Json(created)),
        Err(e @ DomainError::Validation(_)) => Err((
            axum::http::StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"error": e.to_string()})),
        )),
        Err(e) => Err((
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": e.to_string()})),
        )),
    }
}

/// PATCH /api/appointments/:id/status
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<UpdateStatusRequest>,
) -> Result<Json<Appointment>, axum::http::StatusCode> {
    let id = match AppointmentId::from_string(&id) {
        Ok(id) => id,
        Err(_) => return Err(axum::http::StatusCode::BAD_REQUEST),
    };
    match appointment::service::set_status(&state.store, id, request.status).await {
        Ok(updated) => Ok(Json(updated)),
        Err(DomainError::NotFound(_)) => Err(axum::http::StatusCode::NOT_FOUND),
        Err(_) => Err(axum::http::StatusCode::INTERNAL_SERVER_ERROR),
    }
}
