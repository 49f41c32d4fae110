use serde::Serialize;
use utoipa::ToSchema;

use crate::models::article::Article;

#[derive(Serialize, ToSchema)]
pub struct ArticleDetail {
    pub id: u64,
    pub title: String,
    pub content: String,
}

impl From<&Article> for ArticleDetail {
    fn from(article: &Article) -> ArticleDetail {
        ArticleDetail {
            id: article.id,
            title: article.title.clone(),
            content: article.content.clone(),
        }
    }
}
