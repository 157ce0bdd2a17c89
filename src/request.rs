//! Incoming HTTP request snapshot.
//!
//! One [`Request`] is built per inbound call, read-only, and dropped after
//! dispatch. Construction takes the hyper request as an explicit argument —
//! there is no ambient request state — so tests build snapshots straight
//! from `http::Request` values with `http_body_util` bodies.

use std::collections::HashMap;

use bytes::Bytes;
use http::{HeaderMap, Method};
use http_body_util::BodyExt;
use hyper::body::Body;
use serde_json::{Map, Value};

use crate::router::normalize_path;

/// An immutable snapshot of one inbound HTTP exchange.
///
/// The path arrives with the query string removed and trailing slashes
/// stripped (the bare root stays `/`), so it compares directly against
/// route-table keys. The body is a parsed JSON object; anything that is not
/// one — absent, unreadable, malformed, or a non-object document — degrades
/// to an empty map rather than an error.
pub struct Request {
    method: Method,
    path: String,
    headers: HashMap<String, String>,
    body: Map<String, Value>,
    query_params: HashMap<String, String>,
}

impl Request {
    /// Builds a snapshot from an `http::Request`, collecting the body.
    ///
    /// Generic over the body type: the server passes hyper's `Incoming`,
    /// tests pass `Full`/`Empty`.
    pub async fn from_http<B>(req: http::Request<B>) -> Self
    where
        B: Body,
    {
        let (parts, body) = req.into_parts();
        let path = normalize_path(parts.uri.path());
        let query_params = parts.uri.query().map(parse_query).unwrap_or_default();
        let bytes = match body.collect().await {
            Ok(collected) => collected.to_bytes(),
            Err(_) => Bytes::new(),
        };
        Self {
            method: parts.method,
            path,
            headers: flatten_headers(&parts.headers),
            body: parse_body(&bytes),
            query_params,
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// All headers, lowercase names, last value winning for repeats.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(&name.to_ascii_lowercase()).map(String::as_str)
    }

    /// The request body as a JSON object map; empty if the body was not one.
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// All query parameters, URL-decoded, last occurrence winning.
    pub fn query_params(&self) -> &HashMap<String, String> {
        &self.query_params
    }

    /// Returns a single query parameter.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query_params.get(name).map(String::as_str)
    }
}

fn flatten_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .iter()
        .filter_map(|(name, value)| {
            // Header values are not guaranteed UTF-8; unrepresentable ones
            // are dropped from the snapshot.
            value
                .to_str()
                .ok()
                .map(|v| (name.as_str().to_owned(), v.to_owned()))
        })
        .collect()
}

fn parse_query(query: &str) -> HashMap<String, String> {
    url::form_urlencoded::parse(query.as_bytes())
        .into_owned()
        .collect()
}

fn parse_body(bytes: &[u8]) -> Map<String, Value> {
    match serde_json::from_slice::<Value>(bytes) {
        Ok(Value::Object(map)) => map,
        _ => Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http_body_util::{Empty, Full};
    use serde_json::json;

    async fn snapshot(method: &str, uri: &str, body: &'static [u8]) -> Request {
        let req = http::Request::builder()
            .method(method)
            .uri(uri)
            .body(Full::new(Bytes::from_static(body)))
            .unwrap();
        Request::from_http(req).await
    }

    #[tokio::test]
    async fn parses_method_path_and_query() {
        let req = snapshot("POST", "/links/?page=2&q=a%20b", b"").await;
        assert_eq!(req.method(), &Method::POST);
        assert_eq!(req.path(), "/links");
        assert_eq!(req.query_param("page"), Some("2"));
        assert_eq!(req.query_param("q"), Some("a b"));
    }

    #[tokio::test]
    async fn repeated_query_parameter_keeps_last_value() {
        let req = snapshot("GET", "/links?page=1&page=3", b"").await;
        assert_eq!(req.query_param("page"), Some("3"));
        assert_eq!(req.query_params().len(), 1);
    }

    #[tokio::test]
    async fn root_path_is_preserved() {
        let req = snapshot("GET", "/", b"").await;
        assert_eq!(req.path(), "/");
    }

    #[tokio::test]
    async fn trailing_slashes_are_stripped() {
        let req = snapshot("GET", "/users///", b"").await;
        assert_eq!(req.path(), "/users");
    }

    #[tokio::test]
    async fn object_body_is_parsed() {
        let req = snapshot("POST", "/links", br#"{"url": "https://example.com", "n": 2}"#).await;
        assert_eq!(req.body().get("url"), Some(&json!("https://example.com")));
        assert_eq!(req.body().get("n"), Some(&json!(2)));
    }

    #[tokio::test]
    async fn malformed_body_degrades_to_empty_map() {
        let req = snapshot("POST", "/links", b"{not json").await;
        assert!(req.body().is_empty());
    }

    #[tokio::test]
    async fn non_object_body_degrades_to_empty_map() {
        let req = snapshot("POST", "/links", b"[1, 2, 3]").await;
        assert!(req.body().is_empty());
    }

    #[tokio::test]
    async fn absent_body_degrades_to_empty_map() {
        let req = http::Request::builder()
            .method("GET")
            .uri("/users")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let req = Request::from_http(req).await;
        assert!(req.body().is_empty());
    }

    #[tokio::test]
    async fn header_lookup_is_case_insensitive() {
        let req = http::Request::builder()
            .method("GET")
            .uri("/users")
            .header("Content-Type", "application/json")
            .body(Empty::<Bytes>::new())
            .unwrap();
        let req = Request::from_http(req).await;
        assert_eq!(req.header("content-type"), Some("application/json"));
        assert_eq!(req.header("Content-Type"), Some("application/json"));
    }
}
