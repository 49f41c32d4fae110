use axum::{
    routing::{get, post},
    Router,
};

use crate::handles::articles::{detail, list};

pub fn register_article_routes() -> Router {
    Router::new()
        .route("/article/detail", post(detail))
        .route("/article/list", get(list))
}
