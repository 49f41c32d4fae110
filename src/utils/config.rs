use dotenv::dotenv;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init() {
    INIT.call_once(|| {
        dotenv().ok();
    });
}

#[derive(Clone, Debug)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub secret: String,
    pub max_age_ms: i64,
    pub rolling: bool,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind: String,
    pub static_dir: String,
    pub session: SessionConfig,
}

impl AppConfig {
    pub fn from_env() -> AppConfig {
        AppConfig {
            bind: std::env::var("BIND").unwrap_or_else(|_| "0.0.0.0:7788".to_string()),
            static_dir: std::env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string()),
            session: SessionConfig {
                cookie_name: std::env::var("SESSION_COOKIE_NAME")
                    .unwrap_or_else(|_| "blog.sid".to_string()),
                secret: std::env::var("SESSION_SECRET")
                    .unwrap_or_else(|_| "keyboard".to_string()),
                // express-session counts maxAge in milliseconds; the upstream
                // config said 10, so the cookie expires almost immediately.
                max_age_ms: std::env::var("SESSION_MAX_AGE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(10),
                rolling: std::env::var("SESSION_ROLLING")
                    .map(|v| v != "false")
                    .unwrap_or(true),
            },
        }
    }
}
