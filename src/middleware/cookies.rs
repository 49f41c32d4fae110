use axum::http::HeaderMap;

/// Parse the `Cookie` header into name/value pairs. Values are taken as-is;
/// this layer does not percent-decode.
pub fn parse(headers: &HeaderMap) -> Vec<(String, String)> {
    let Some(header) = headers.get(axum::http::header::COOKIE) else {
        return Vec::new();
    };
    let Ok(raw) = header.to_str() else {
        return Vec::new();
    };

    raw.split(';')
        .filter_map(|pair| {
            let (name, value) = pair.split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some((name.to_string(), value.trim().to_string()))
        })
        .collect()
}

pub fn get(headers: &HeaderMap, name: &str) -> Option<String> {
    parse(headers)
        .into_iter()
        .find(|(n, _)| n == name)
        .map(|(_, v)| v)
}

#[cfg(test)]
mod test {
    use axum::http::{header, HeaderMap, HeaderValue};

    fn headers(raw: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(raw).unwrap());
        headers
    }

    #[test]
    fn test_parse_pairs() {
        let headers = headers("a=1; blog.sid=abc.def; b=");
        let pairs = super::parse(&headers);
        assert_eq!(pairs.len(), 3);
        assert_eq!(super::get(&headers, "blog.sid").unwrap(), "abc.def");
        assert_eq!(super::get(&headers, "b").unwrap(), "");
    }

    #[test]
    fn test_no_header() {
        assert!(super::parse(&HeaderMap::new()).is_empty());
        assert!(super::get(&HeaderMap::new(), "blog.sid").is_none());
    }

    #[test]
    fn test_malformed_pairs_skipped() {
        let headers = headers("noequals; =1; ok=yes");
        let pairs = super::parse(&headers);
        assert_eq!(pairs, vec![("ok".to_string(), "yes".to_string())]);
    }
}
