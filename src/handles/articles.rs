use tracing::info;

use crate::params::requests::common::IdParams;
use crate::params::responses::article::ArticleDetail;
use crate::params::responses::common::ApiResponse;
use crate::services::articles::article_service::ArticleService;
use crate::utils::error::AppError;
use crate::utils::validate::ValidatedJson;

#[utoipa::path(
    post,
    path = "/api/article/detail",
    request_body = IdParams,
    responses(
        (status = 200, description = "文章详情", body = ArticleDetail),
        (status = 404, description = "文章不存在"),
    )
)]
pub async fn detail(
    ValidatedJson(params): ValidatedJson<IdParams>,
) -> Result<ApiResponse<ArticleDetail>, AppError> {
    let id = params
        .value()
        .map_err(|_| AppError::bad_request("请输入有效的id"))?;
    info!("article detail: {}", id);

    match ArticleService::find(id) {
        Some(article) => Ok(ApiResponse::new(ArticleDetail::from(article))),
        None => Err(AppError::not_found("文章不存在")),
    }
}

#[utoipa::path(
    get,
    path = "/api/article/list",
    responses((status = 200, description = "文章列表", body = [ArticleDetail]))
)]
pub async fn list() -> ApiResponse<Vec<ArticleDetail>> {
    let articles = ArticleService::list()
        .iter()
        .map(ArticleDetail::from)
        .collect();
    ApiResponse::new(articles)
}
