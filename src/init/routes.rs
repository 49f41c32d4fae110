use axum::{middleware, Router};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use utoipa::OpenApi;
use utoipa_swagger_ui::{Config, SwaggerUi};

use crate::init::docs::ApiDoc;
use crate::middleware::logging::access_log;
use crate::middleware::session::session_middleware;
use crate::routes::articles::register_article_routes;
use crate::utils::config::AppConfig;

/// Assembles the whole HTTP surface. Layer order is load-bearing: CORS is
/// outermost, then the access log, then the session middleware; business
/// routes live behind the `/api` prefix, static files behind `/static`,
/// and the OpenAPI UI at `/swagger-doc`.
pub fn init_routes(config: &AppConfig) -> Router {
    let swagger = SwaggerUi::new("/swagger-doc")
        .url("/swagger-doc/openapi.json", ApiDoc::openapi())
        .config(Config::default().persist_authorization(true));

    Router::new()
        .nest("/api", register_article_routes())
        .nest_service("/static", ServeDir::new(&config.static_dir))
        .merge(swagger)
        .layer(middleware::from_fn_with_state(
            config.session.clone(),
            session_middleware,
        ))
        .layer(middleware::from_fn(access_log))
        .layer(CorsLayer::permissive())
}
