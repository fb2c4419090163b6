use axum::extract::State;
use axum::Json;

use contracts::dashboards::overview::ClinicStats;

use crate::dashboards::overview;
use crate::shared::state::AppState;

/// GET /api/stats
pub async fn get_stats(State(state): State<AppState>) -> Json<ClinicStats> {
    Json(overview::service::get_stats(&state.store).await)
}
