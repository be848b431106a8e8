pub mod owners;
pub mod properties;
pub mod property_images;
pub mod property_traces;

use axum::{
    extract::DefaultBodyLimit,
    middleware,
    routing::get,
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::Health;

use crate::observability::{encode_metrics, track_operations};
use crate::openapi::{ApiDoc, HealthResponse};
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, body = HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics() -> (axum::http::StatusCode, String) {
    encode_metrics()
}

/// Catalog API routes, without state.
fn api_routes() -> Router<ServerState> {
    Router::new()
        .route("/api/owners", get(owners::list).post(owners::create))
        .route("/api/owners/:id", get(owners::get).put(owners::update).delete(owners::delete))
        .route("/api/owners/:id/photo", get(owners::get_photo).put(owners::replace_photo))
        .route("/api/owners/:id/properties", get(owners::properties))
        .route("/api/properties", get(properties::list).post(properties::create))
        .route("/api/properties/filter", get(properties::filter))
        .route("/api/properties/:id", get(properties::get).put(properties::update).delete(properties::delete))
        .route("/api/properties/:id/images", get(properties::images))
        .route("/api/properties/:id/traces", get(properties::traces))
        .route("/api/property-images", get(property_images::list).post(property_images::create))
        .route(
            "/api/property-images/:id",
            get(property_images::get).put(property_images::update).delete(property_images::delete),
        )
        .route("/api/property-images/:id/file", get(property_images::get_file).put(property_images::replace_file))
        .route("/api/property-traces", get(property_traces::list).post(property_traces::create))
        .route(
            "/api/property-traces/:id",
            get(property_traces::get).put(property_traces::update).delete(property_traces::delete),
        )
        .route_layer(middleware::from_fn(track_operations))
}

/// Build the full application router: catalog API, health, metrics and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer, max_upload_bytes: usize) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/metrics", get(metrics))
        .merge(api_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use configs::CatalogConfig;
    use models::db::{connect_with_config, migrate, DatabaseConfig};
    use serde_json::{json, Value};
    use tempfile::NamedTempFile;
    use tower::ServiceExt;

    async fn app() -> anyhow::Result<(Router, NamedTempFile)> {
        let file = NamedTempFile::new()?;
        let url = format!("sqlite://{}?mode=rwc", file.path().display());
        let db = connect_with_config(&DatabaseConfig { url, max_connections: 4, ..DatabaseConfig::default() }).await?;
        migrate(&db).await?;
        let state = ServerState::new(db, &CatalogConfig::default());
        Ok((build_router(state, CorsLayer::very_permissive(), 1024 * 1024), file))
    }

    async fn send(app: &Router, req: Request<Body>) -> anyhow::Result<(StatusCode, Value)> {
        let res = app.clone().oneshot(req).await?;
        let status = res.status();
        let bytes = to_bytes(res.into_body(), usize::MAX).await?;
        let body = if bytes.is_empty() { Value::Null } else { serde_json::from_slice(&bytes)? };
        Ok((status, body))
    }

    fn json_req(method: &str, uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn empty_req(method: &str, uri: &str) -> Request<Body> {
        Request::builder().method(method).uri(uri).body(Body::empty()).unwrap()
    }

    fn owner_form(boundary: &str, name: &str) -> Body {
        Body::from(format!(
            "--{b}\r\nContent-Disposition: form-data; name=\"name\"\r\n\r\n{name}\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"address\"\r\n\r\n123 Elm Street\r\n\
             --{b}\r\nContent-Disposition: form-data; name=\"birthday\"\r\n\r\n1975-08-15\r\n\
             --{b}--\r\n",
            b = boundary
        ))
    }

    async fn create_owner(app: &Router, name: &str) -> anyhow::Result<(StatusCode, Value)> {
        let req = Request::builder()
            .method("POST")
            .uri("/api/owners")
            .header(header::CONTENT_TYPE, "multipart/form-data; boundary=XBOUNDARY")
            .body(owner_form("XBOUNDARY", name))?;
        send(app, req).await
    }

    #[tokio::test]
    async fn health_is_ok() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (status, body) = send(&app, empty_req("GET", "/health")).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
        Ok(())
    }

    #[tokio::test]
    async fn owner_multipart_create_and_json_update() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (status, created) = create_owner(&app, "John Doe").await?;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["name"], "John Doe");
        assert_eq!(created["birthday"], "1975-08-15");
        assert!(created.get("photo").is_none());
        let id = created["id"].as_i64().unwrap();

        let (status, updated) = send(
            &app,
            json_req("PUT", &format!("/api/owners/{id}"), json!({"name": "Jane Smith", "address": "456 Oak Avenue", "birthday": "1980-05-22"})),
        )
        .await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(updated["name"], "Jane Smith");
        assert_eq!(updated["id"], id);

        let (status, _) = send(&app, empty_req("GET", &format!("/api/owners/{id}/photo"))).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn status_mapping() -> anyhow::Result<()> {
        let (app, _db) = app().await?;

        let (status, body) = send(&app, empty_req("GET", "/api/owners/41")).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");

        let (status, _) = send(&app, empty_req("DELETE", "/api/properties/41")).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);

        let property = json!({"name": "Villa", "address": "1 Road", "price": 10, "code_internal": "V1", "year": 2000, "owner_id": 41});
        let (status, body) = send(&app, json_req("POST", "/api/properties", property)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing Parent");

        let (status, _) = create_owner(&app, " ").await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = send(&app, json_req("POST", "/api/properties", json!({"name": "no other fields"}))).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");
        Ok(())
    }

    #[tokio::test]
    async fn property_filter_query() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (_, owner) = create_owner(&app, "Owner").await?;
        let owner_id = owner["id"].clone();
        for (name, price, year) in [("A", 500, 2015), ("B", 1500, 2020), ("C", 2000, 2020)] {
            let body = json!({"name": name, "address": "x", "price": price, "code_internal": name, "year": year, "owner_id": owner_id});
            let (status, _) = send(&app, json_req("POST", "/api/properties", body)).await?;
            assert_eq!(status, StatusCode::CREATED);
        }
        let (status, body) = send(&app, empty_req("GET", "/api/properties/filter?min_price=1000&year=2020")).await?;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body.as_array().unwrap().iter().map(|p| p["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["B", "C"]);

        let (_, all) = send(&app, empty_req("GET", "/api/properties/filter")).await?;
        assert_eq!(all.as_array().unwrap().len(), 3);
        Ok(())
    }

    #[tokio::test]
    async fn malformed_path_and_query_get_json_errors() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (_, owner) = create_owner(&app, "Owner").await?;
        let body = json!({"name": "Villa", "address": "x", "price": 1500, "code_internal": "V1", "year": 2020, "owner_id": owner["id"]});
        let (status, _) = send(&app, json_req("POST", "/api/properties", body)).await?;
        assert_eq!(status, StatusCode::CREATED);

        for uri in ["/api/properties/filter?min_price=&max_price=&year=", "/api/properties/filter?min_price=%20&name="] {
            let (status, rows) = send(&app, empty_req("GET", uri)).await?;
            assert_eq!(status, StatusCode::OK, "{uri}");
            assert_eq!(rows.as_array().map(Vec::len), Some(1), "{uri}");
        }
        let (status, rows) = send(&app, empty_req("GET", "/api/properties/filter?min_price=&year=2020")).await?;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(rows[0]["name"], "Villa");

        // `send` fails unless the body is JSON
        let (status, body) = send(&app, empty_req("GET", "/api/properties/filter?min_price=abc")).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Bad Request");

        for (method, uri) in [("GET", "/api/owners/abc"), ("DELETE", "/api/properties/x1"), ("GET", "/api/property-images/1.5/file")] {
            let (status, body) = send(&app, empty_req(method, uri)).await?;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{method} {uri}");
            assert_eq!(body["error"], "Bad Request", "{method} {uri}");
        }
        Ok(())
    }

    #[tokio::test]
    async fn updates_of_absent_rows_are_not_found() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let property = json!({"name": "Villa", "address": "x", "price": 1, "code_internal": "V1", "year": 2000, "owner_id": 77});
        let (status, body) = send(&app, json_req("PUT", "/api/properties/41", property)).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Not Found");

        let trace = json!({"date_sale": "2020-07-15", "name": "Sale", "value": 1, "tax": 1, "property_id": 77});
        let (status, _) = send(&app, json_req("PUT", "/api/property-traces/41", trace)).await?;
        assert_eq!(status, StatusCode::NOT_FOUND);
        Ok(())
    }

    #[tokio::test]
    async fn overlong_name_is_rejected_before_storage() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (_, owner) = create_owner(&app, "Owner").await?;
        let body = json!({"name": "v".repeat(300), "address": "x", "price": 1, "code_internal": "V1", "year": 2000, "owner_id": owner["id"]});
        let (status, body) = send(&app, json_req("POST", "/api/properties", body)).await?;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Validation Error");
        Ok(())
    }

    #[tokio::test]
    async fn openapi_document_is_served() -> anyhow::Result<()> {
        let (app, _db) = app().await?;
        let (status, doc) = send(&app, empty_req("GET", "/api-docs/openapi.json")).await?;
        assert_eq!(status, StatusCode::OK);
        assert!(doc["paths"].get("/api/properties/filter").is_some());
        assert!(doc["paths"].get("/api/owners/{id}/photo").is_some());
        Ok(())
    }
}
