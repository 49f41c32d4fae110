pub mod handles;
pub mod init;
pub mod middleware;
pub mod models;
pub mod params;
pub mod routes;
pub mod services;
pub mod utils;
