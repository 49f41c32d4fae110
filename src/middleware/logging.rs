use axum::{extract::Request, middleware::Next, response::Response};
use tracing::{error, warn};

/// Logs 4xx/5xx outcomes after the rest of the pipeline ran.
pub async fn access_log(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;
    let status = response.status();

    if status.is_server_error() {
        error!(%method, %uri, status = status.as_u16(), "server error");
    } else if status.is_client_error() {
        warn!(%method, %uri, status = status.as_u16(), "client error");
    }

    response
}
