//! Outgoing HTTP response value.
//!
//! A [`Response`] is plain data: status, headers, body bytes. Handlers and
//! the router *return* it — construction never writes to the connection, and
//! "stop processing" is an ordinary `return`, not a process-level side
//! effect. Exactly one place ([`Response::into_http`], called by the server)
//! converts the value into the wire response.

use bytes::Bytes;
use http::StatusCode;
use http_body_util::Full;
use serde_json::Value;

const CONTENT_TYPE_JSON: &str = "application/json; charset=utf-8";

/// An outgoing HTTP response.
///
/// # Shortcuts (200 OK / 302 Found, no custom headers needed)
///
/// ```rust
/// use serde_json::json;
/// use shortly::{Response, StatusCode};
///
/// Response::json(json!({ "data": [] }));
/// Response::redirect("https://example.com/");
/// Response::status(StatusCode::NO_CONTENT);
/// ```
///
/// # Builder (custom status or headers)
///
/// ```rust
/// use serde_json::json;
/// use shortly::{Response, StatusCode};
///
/// Response::builder()
///     .status(StatusCode::CREATED)
///     .header("location", "/links/42")
///     .json(json!({ "data": { "id": 42 } }));
///
/// Response::builder()
///     .status(StatusCode::MOVED_PERMANENTLY)
///     .redirect("https://example.com/");
/// ```
pub struct Response {
    status: StatusCode,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Response {
    /// `200 OK` with a serialized JSON body and
    /// `content-type: application/json; charset=utf-8`.
    pub fn json(data: Value) -> Self {
        Self::builder().json(data)
    }

    /// Response with the given status and no body.
    pub fn status(code: StatusCode) -> Self {
        Self { status: code, headers: Vec::new(), body: Vec::new() }
    }

    /// `302 Found` redirect. Use the builder for other redirect codes.
    pub fn redirect(url: &str) -> Self {
        Self::builder().status(StatusCode::FOUND).redirect(url)
    }

    /// Builder for responses that need a custom status or extra headers.
    pub fn builder() -> ResponseBuilder {
        ResponseBuilder { headers: Vec::new(), status: StatusCode::OK }
    }

    /// Adds the permissive CORS header triple: any origin, the five common
    /// methods, `Content-Type` and `Authorization` request headers.
    pub fn cors(mut self) -> Self {
        self.headers
            .push(("access-control-allow-origin".to_owned(), "*".to_owned()));
        self.headers.push((
            "access-control-allow-methods".to_owned(),
            "GET, POST, PUT, DELETE, OPTIONS".to_owned(),
        ));
        self.headers.push((
            "access-control-allow-headers".to_owned(),
            "Content-Type, Authorization".to_owned(),
        ));
        self
    }

    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    /// The single conversion point from response value to wire type.
    ///
    /// A header pair the `http` types reject (invalid name or value bytes)
    /// degrades the whole response to a bare 500 rather than panicking in
    /// the connection task.
    pub(crate) fn into_http(self) -> http::Response<Full<Bytes>> {
        let mut builder = http::Response::builder().status(self.status);
        for (name, value) in &self.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder
            .body(Full::new(Bytes::from(self.body)))
            .unwrap_or_else(|_| {
                let mut fallback = http::Response::new(Full::new(Bytes::new()));
                *fallback.status_mut() = StatusCode::INTERNAL_SERVER_ERROR;
                fallback
            })
    }
}

// ── ResponseBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Response`].
///
/// Obtain via [`Response::builder()`]. Defaults to `200 OK`. Terminated by
/// `json`, `redirect`, or `no_body`.
pub struct ResponseBuilder {
    headers: Vec<(String, String)>,
    status: StatusCode,
}

impl ResponseBuilder {
    /// Sets the status code only; nothing is emitted until a terminal method
    /// completes the response.
    pub fn status(mut self, code: StatusCode) -> Self {
        self.status = code;
        self
    }

    pub fn header(mut self, name: &str, value: &str) -> Self {
        self.headers.push((name.to_owned(), value.to_owned()));
        self
    }

    /// Terminate with a serialized JSON body.
    pub fn json(self, data: Value) -> Response {
        let mut headers = vec![("content-type".to_owned(), CONTENT_TYPE_JSON.to_owned())];
        headers.extend(self.headers);
        Response {
            status: self.status,
            headers,
            body: data.to_string().into_bytes(),
        }
    }

    /// Terminate with a `location` header and no body.
    pub fn redirect(self, url: &str) -> Response {
        let mut headers = self.headers;
        headers.push(("location".to_owned(), url.to_owned()));
        Response { status: self.status, headers, body: Vec::new() }
    }

    /// Terminate with no body.
    pub fn no_body(self) -> Response {
        Response { status: self.status, headers: self.headers, body: Vec::new() }
    }
}
