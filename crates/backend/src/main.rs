pub mod dashboards;
pub mod domain;
pub mod handlers;
pub mod shared;
pub mod system;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use axum::http::{header, Method};
    use axum::middleware;
    use axum::routing::{get, patch};
    use axum::Router;
    use std::net::SocketAddr;
    use tokio::net::TcpListener;
    use tower_http::cors::{Any, CorsLayer};
    use tower_http::services::ServeDir;

    system::tracing::initialize()?;

    let config = shared::config::load_config()?;
    tracing::info!(
        "clinic: {} | {} | WhatsApp: {} | {}",
        config.clinic.name,
        config.clinic.phone,
        config.clinic.whatsapp,
        config.clinic.address
    );

    // Build the shared state and seed the demo records
    let state = shared::state::AppState {
        store: domain::appointment::repository::AppointmentStore::new(),
        doctors: domain::doctor::repository::DoctorDirectory::new(
            system::initialization::doctor_directory(),
        ),
    };
    system::initialization::seed_demo_data(&state).await?;

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::PATCH, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let app = Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // BOOKING ROUTES
        // ========================================
        .route(
            "/api/appointments",
            get(handlers::appointments::list_all).post(handlers::appointments::create),
        )
        .route(
            "/api/appointments/:id/status",
            patch(handlers::appointments::update_status),
        )
        // Doctors handlers
        .route("/api/doctors", get(handlers::doctors::list_all))
        // ========================================
        // DASHBOARDS
        // ========================================
        .route("/api/stats", get(handlers::overview::get_stats))
        .fallback_service(ServeDir::new("dist"))
        .layer(middleware::from_fn(
            system::middleware::request_logger::request_logger,
        ))
        .layer(cors)
        .with_state(state);

    let addr: SocketAddr = ([0, 0, 0, 0], config.server.port).into();

    tracing::info!("Attempting to bind server to http://{}", addr);
    let listener = match TcpListener::bind(addr).await {
        Ok(listener) => {
            tracing::info!("Server successfully bound to {}", addr);
            listener
        }
        Err(e) => {
            if e.kind() == std::io::ErrorKind::AddrInUse {
                tracing::error!(
                    "Error: Port {} is already in use. Please ensure no other process is using this port.",
                    config.server.port
                );
            } else {
                tracing::error!("Failed to bind to port {}. Error: {}", config.server.port, e);
            }
            // Propagate the error to stop the application
            return Err(e.into());
        }
    };

    axum::serve(listener, app).await?;

    Ok(())
}
