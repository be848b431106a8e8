use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use once_cell::sync::Lazy;
use prometheus::{register_int_counter_vec, Encoder, IntCounterVec, TextEncoder};

// Prometheus metrics (default registry)
pub static CATALOG_OPERATIONS_TOTAL: Lazy<IntCounterVec> = Lazy::new(|| {
    register_int_counter_vec!(
        "catalog_operations_total",
        "Catalog API operations by entity, operation and outcome",
        &["entity", "op", "outcome"]
    )
    .expect("register catalog_operations_total")
});

/// Count every routed `/api` request once its response is known.
pub async fn track_operations(req: Request, next: Next) -> Response {
    let route = req.extensions().get::<MatchedPath>().map(|p| p.as_str().to_string());
    let method = req.method().as_str().to_ascii_lowercase();
    let response = next.run(req).await;
    if let Some((entity, op)) = route.as_deref().and_then(|r| classify(r, &method)) {
        CATALOG_OPERATIONS_TOTAL
            .with_label_values(&[entity, op.as_str(), outcome(response.status())])
            .inc();
    }
    response
}

/// `("owners", "get_photo")` for `GET /api/owners/:id/photo`.
fn classify<'a>(route: &'a str, method: &str) -> Option<(&'a str, String)> {
    let mut segments = route.strip_prefix("/api/")?.split('/');
    let entity = segments.next().filter(|s| !s.is_empty())?;
    let mut op = method.to_string();
    for seg in segments.filter(|s| !s.starts_with(':')) {
        op.push('_');
        op.push_str(seg);
    }
    Some((entity, op))
}

fn outcome(status: axum::http::StatusCode) -> &'static str {
    match status.as_u16() {
        404 => "not_found",
        s if s < 400 => "ok",
        s if s < 500 => "rejected",
        _ => "error",
    }
}

pub fn encode_metrics() -> (axum::http::StatusCode, String) {
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();
    let mut buffer = Vec::new();
    if let Err(e) = encoder.encode(&metric_families, &mut buffer) {
        return (
            axum::http::StatusCode::INTERNAL_SERVER_ERROR,
            format!("metrics encode error: {e}"),
        );
    }
    (
        axum::http::StatusCode::OK,
        String::from_utf8(buffer).unwrap_or_default(),
    )
}
