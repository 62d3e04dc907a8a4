use axum::{
    extract::{MatchedPath, Request, State},
    middleware::Next,
    response::Response,
};

use crate::{handlers::AppState, services::metrics::RequestTimer};

/// Installed as a route layer, so every request it sees has a matched route
/// template and ids never become label values.
pub async fn metrics_middleware(
    State(state): State<AppState>,
    matched: MatchedPath,
    request: Request,
    next: Next,
) -> Response {
    let timer = RequestTimer::start();
    let method = request.method().to_string();
    let path = matched.as_str().to_string();

    let response = next.run(request).await;

    state
        .metrics
        .record_request(&method, &path, response.status().as_u16(), timer.elapsed());

    response
}
