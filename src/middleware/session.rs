use axum::extract::{Request, State};
use axum::http::{header, HeaderMap, HeaderValue};
use axum::middleware::Next;
use axum::response::Response;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use chrono::{Duration, Utc};
use hmac::{Hmac, Mac};
use sha2::Sha256;
use tracing::warn;

use crate::middleware::cookies;
use crate::utils::config::SessionConfig;

type HmacSha256 = Hmac<Sha256>;

/// Session attached to the request extensions. `fresh` means no valid
/// cookie accompanied the request and a new id was generated.
#[derive(Clone, Debug)]
pub struct Session {
    pub id: String,
    pub fresh: bool,
}

/// Cookie-backed session middleware. The cookie value is `sid.sig` where
/// `sig` is HMAC-SHA256 over the sid under the configured secret; a
/// tampered or absent cookie yields a fresh session. With `rolling` set,
/// every response re-issues the cookie so the client expiry resets.
pub async fn session_middleware(
    State(config): State<SessionConfig>,
    mut req: Request,
    next: Next,
) -> Response {
    let session = incoming(&config, req.headers());
    req.extensions_mut().insert(session.clone());

    let mut response = next.run(req).await;

    if config.rolling || session.fresh {
        match HeaderValue::from_str(&set_cookie(&config, &session.id)) {
            Ok(value) => {
                response.headers_mut().append(header::SET_COOKIE, value);
            }
            Err(e) => warn!("failed to build session cookie: {}", e),
        }
    }
    response
}

fn incoming(config: &SessionConfig, headers: &HeaderMap) -> Session {
    if let Some(value) = cookies::get(headers, &config.cookie_name) {
        if let Some(id) = verify(&config.secret, &value) {
            return Session { id, fresh: false };
        }
    }
    Session {
        id: new_sid(),
        fresh: true,
    }
}

fn new_sid() -> String {
    URL_SAFE_NO_PAD.encode(rand::random::<[u8; 16]>())
}

fn sign(secret: &str, sid: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("hmac accepts any key length");
    mac.update(sid.as_bytes());
    URL_SAFE_NO_PAD.encode(mac.finalize().into_bytes())
}

fn seal(secret: &str, sid: &str) -> String {
    format!("{}.{}", sid, sign(secret, sid))
}

fn verify(secret: &str, value: &str) -> Option<String> {
    let (sid, sig) = value.rsplit_once('.')?;
    let sig = URL_SAFE_NO_PAD.decode(sig).ok()?;
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes()).ok()?;
    mac.update(sid.as_bytes());
    mac.verify_slice(&sig).ok()?;
    Some(sid.to_string())
}

fn set_cookie(config: &SessionConfig, sid: &str) -> String {
    let expires = Utc::now() + Duration::milliseconds(config.max_age_ms);
    format!(
        "{}={}; Path=/; Expires={}; HttpOnly",
        config.cookie_name,
        seal(&config.secret, sid),
        expires.format("%a, %d %b %Y %H:%M:%S GMT")
    )
}

#[cfg(test)]
mod test {
    use super::{seal, verify};
    use crate::utils::config::SessionConfig;

    fn config() -> SessionConfig {
        SessionConfig {
            cookie_name: "blog.sid".to_string(),
            secret: "keyboard".to_string(),
            max_age_ms: 10,
            rolling: true,
        }
    }

    #[test]
    fn test_seal_verify_roundtrip() {
        let sealed = seal("keyboard", "some-session-id");
        assert_eq!(verify("keyboard", &sealed).unwrap(), "some-session-id");
    }

    #[test]
    fn test_verify_rejects_tampering() {
        let sealed = seal("keyboard", "some-session-id");
        let forged = sealed.replace("some", "evil");
        assert!(verify("keyboard", &forged).is_none());
        assert!(verify("other-secret", &sealed).is_none());
        assert!(verify("keyboard", "no-dot-at-all").is_none());
    }

    #[test]
    fn test_set_cookie_attributes() {
        let cookie = super::set_cookie(&config(), "sid123");
        assert!(cookie.starts_with("blog.sid=sid123."));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Expires="));
        assert!(cookie.contains("HttpOnly"));
    }
}
