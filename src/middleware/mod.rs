pub mod cookies;
pub mod logging;
pub mod session;
