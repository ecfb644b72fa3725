mod error;
mod people;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    http::{header, HeaderValue, Method, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use rolodex_common::types::ServiceInfo;
use rolodex_config::{init_tracing, AppConfig};
use rolodex_db::people::pg_gateway::PgPersonGateway;
use tower_http::cors::CorsLayer;

use crate::people::find::PersonGet;

#[derive(Clone)]
pub struct AppState {
    pub person_get: PersonGet,
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

async fn info() -> Json<ServiceInfo> {
    Json(ServiceInfo::new("rolodex-api"))
}

async fn metrics() -> impl IntoResponse {
    let body = "\
# HELP rolodex_up Service up indicator\n\
# TYPE rolodex_up gauge\n\
rolodex_up 1\n\
# HELP rolodex_info Service info\n\
# TYPE rolodex_info gauge\n\
rolodex_info{service=\"rolodex-api\",version=\"0.1.0\"} 1\n";

    (
        StatusCode::OK,
        [(
            header::CONTENT_TYPE,
            "text/plain; version=0.0.4; charset=utf-8",
        )],
        body,
    )
}

fn build_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin([
            "http://localhost:3000".parse::<HeaderValue>().unwrap(),
            "http://127.0.0.1:3000".parse::<HeaderValue>().unwrap(),
        ])
        .allow_methods([Method::GET])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/health", get(health))
        .route("/info", get(info))
        .route("/metrics", get(metrics))
        .merge(people::router())
        .layer(cors)
        .with_state(state)
}

#[tokio::main]
async fn main() {
    init_tracing("info");

    let config = AppConfig::from_env().expect("failed to load config");
    tracing::info!(service = "rolodex-api", "starting");

    let pool = rolodex_db::create_pool(&config.database_url)
        .await
        .expect("failed to create database pool");

    let state = AppState {
        person_get: PersonGet::new(Arc::new(PgPersonGateway::new(pool))),
    };

    let app = build_router(state);
    let addr: SocketAddr = config.bind_addr().parse().expect("invalid bind address");

    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind");
    axum::serve(listener, app).await.expect("server error");
}
