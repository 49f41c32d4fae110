pub mod article_service;
