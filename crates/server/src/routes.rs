pub mod items;

use axum::{
    routing::{get, post},
    Json, Router,
};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;

use common::types::{Greeting, Health};

use crate::state::ServerState;

pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn read_root() -> Json<Greeting> {
    Json(Greeting::default())
}

/// Build the full application router: greeting, health and the item routes
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let item_routes = Router::new()
        .route("/items/", post(items::create_item))
        .route("/items", post(items::create_item))
        .route(
            "/items/:item_id",
            get(items::read_item)
                .put(items::update_item)
                .delete(items::delete_item),
        );

    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health))
        .merge(item_routes)
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                // 每次请求创建 span，包含方法和路径
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                // 响应返回时打点，包含状态码与耗时
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
