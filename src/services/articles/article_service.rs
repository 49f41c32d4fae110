use once_cell::sync::Lazy;

use crate::models::article::Article;

// Seeded in-memory store; no database backs the article module yet.
static ARTICLES: Lazy<Vec<Article>> = Lazy::new(|| {
    vec![
        Article {
            id: 1,
            title: "Hello Rust".to_string(),
            content: "第一篇文章".to_string(),
        },
        Article {
            id: 2,
            title: "Axum in practice".to_string(),
            content: "第二篇文章".to_string(),
        },
        Article {
            id: 42,
            title: "The answer".to_string(),
            content: "第四十二篇文章".to_string(),
        },
    ]
});

pub struct ArticleService;

impl ArticleService {
    pub fn find(id: u64) -> Option<&'static Article> {
        ARTICLES.iter().find(|article| article.id == id)
    }

    pub fn list() -> &'static [Article] {
        &ARTICLES
    }
}

#[cfg(test)]
mod test {
    use super::ArticleService;

    #[test]
    fn test_find() {
        assert_eq!(ArticleService::find(42).unwrap().title, "The answer");
        assert!(ArticleService::find(999).is_none());
    }

    #[test]
    fn test_list() {
        assert_eq!(ArticleService::list().len(), 3);
    }
}
