pub mod article;
pub mod common;
