pub mod config;
pub mod error;
pub mod regexps;
pub mod validate;
