pub mod pigs;
pub mod wolves;
pub mod houses;

use axum::{routing::{get, post}, Json, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use common::types::{Health, Message};

use crate::openapi::ApiDoc;
use crate::state::ServerState;

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

#[utoipa::path(get, path = "/", tag = "health", responses((status = 200, description = "Greeting", body = crate::openapi::MessageDoc)))]
pub async fn root() -> Json<Message> {
    Json(Message::new("Let's fry some bacon!"))
}

/// Build the full application router: greeting, health, entity CRUD and API docs.
pub fn build_router(state: ServerState, cors: CorsLayer) -> Router {
    let public = Router::new()
        .route("/", get(root))
        .route("/health", get(health));

    let pig_routes = Router::new()
        .route("/create_pig", post(pigs::create))
        .route("/pigs", get(pigs::list))
        .route("/pigs/:id", get(pigs::get).put(pigs::update).delete(pigs::delete))
        .route("/pigs/:id/houses", get(pigs::houses));

    let wolf_routes = Router::new()
        .route("/create_wolf", post(wolves::create))
        .route("/wolves", get(wolves::list))
        .route("/wolves/:id", get(wolves::get).put(wolves::update).delete(wolves::delete));

    let house_routes = Router::new()
        .route("/create_house", post(houses::create))
        .route("/houses", get(houses::list))
        .route("/houses/:id", get(houses::get).put(houses::update).delete(houses::delete));

    public
        .merge(pig_routes)
        .merge(wolf_routes)
        .merge(house_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx at ERROR
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}
