use axum::body::to_bytes;
use axum::body::Body;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use chrono::Utc;

use crate::shared::format::format_number;

/// HTTP request logging middleware
///
/// Prints one console line per request: timestamp (clinic local time,
/// UTC+1), duration in ms, formatted response size, status code, method
/// and path.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // The real size is only known after draining the body
    let status = parts.status.as_u16();
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => {
            print_line(status, start.elapsed(), &format_number(bytes.len()), &method, &path);
            Response::from_parts(parts, Body::from(bytes))
        }
        Err(_) => {
            print_line(status, start.elapsed(), "error", &method, &path);
            Response::from_parts(parts, Body::default())
        }
    }
}

fn print_line(
    status: u16,
    duration: std::time::Duration,
    size: &str,
    method: &axum::http::Method,
    path: &str,
) {
    let timestamp = Utc::now() + chrono::Duration::hours(1);
    // Cyan timestamp for 200, yellow for everything else
    let color_code = if status == 200 { "36" } else { "33" };

    println!(
        "\x1b[{}m{}\x1b[0m | {:>5}ms | {:>12} | {} {:>6} {}",
        color_code,
        timestamp.format("%H:%M:%S"),
        duration.as_millis(),
        size,
        status,
        method,
        path
    );
}
