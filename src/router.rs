//! Static route table and dispatch.
//!
//! Routes are an exact-match table keyed by `(method, path)` — no path
//! parameters, no wildcards, no fallthrough chains. Registration normalizes
//! both keys (uppercased method, trailing slashes stripped) and incoming
//! request paths get the same treatment, so `GET /users/` and `get /users`
//! land on the same entry. Registering the same pair twice silently replaces
//! the earlier handler; the last registration wins.
//!
//! Handlers are bound at registration as typed values. A route that exists
//! in the table is a route that can be called — there is no name lookup at
//! dispatch time and no "handler not found" failure class.

use std::collections::HashMap;

use http::{Method, StatusCode};
use serde_json::{json, Map, Value};
use tracing::{debug, error};

use crate::handler::{BoxedHandler, Handler};
use crate::request::Request;
use crate::response::Response;

struct Route {
    handler: BoxedHandler,
    handler_name: &'static str,
    middleware: Vec<String>,
}

/// Exact-match request router.
///
/// ```rust
/// use serde_json::json;
/// use shortly::{Request, Router};
///
/// let app = Router::new()
///     .get("/healthz", |_req: Request| async { json!("ok") })
///     .route("POST", "/links", |_req: Request| async { json!({ "id": 1 }) });
/// # let _ = app;
/// ```
pub struct Router {
    routes: HashMap<Method, HashMap<String, Route>>,
}

impl Router {
    pub fn new() -> Self {
        Self { routes: HashMap::new() }
    }

    /// Registers `handler` for `(method, path)`.
    ///
    /// `method` is case-insensitive; `path` is stored with trailing slashes
    /// stripped (`"/"` itself is kept). Registering a pair that already
    /// exists replaces the previous handler.
    ///
    /// # Panics
    ///
    /// Panics if `method` is not a valid HTTP method token. Routes are
    /// registered at startup, so a bad method name is a programming error
    /// worth failing fast on, same as a malformed bind address.
    pub fn route(self, method: &str, path: &str, handler: impl Handler) -> Self {
        self.add(method, path, handler, Vec::new())
    }

    /// Shorthand for `route("GET", ..)`.
    pub fn get(self, path: &str, handler: impl Handler) -> Self {
        self.add("GET", path, handler, Vec::new())
    }

    /// Like [`route`](Self::route), additionally recording middleware names
    /// against the entry.
    ///
    /// The names are bookkeeping only: they show up in [`routes`](Self::routes)
    /// output and nothing runs them during dispatch.
    pub fn route_with_middleware(
        self,
        method: &str,
        path: &str,
        handler: impl Handler,
        middleware: Vec<String>,
    ) -> Self {
        self.add(method, path, handler, middleware)
    }

    fn add(
        mut self,
        method: &str,
        path: &str,
        handler: impl Handler,
        middleware: Vec<String>,
    ) -> Self {
        let method = parse_method(method);
        let path = normalize_path(path);
        let handler_name = std::any::type_name_of_val(&handler);
        let route = Route {
            handler: handler.into_boxed_handler(),
            handler_name,
            middleware,
        };
        self.routes.entry(method).or_default().insert(path, route);
        self
    }

    /// Looks up the route for `request` and runs its handler.
    ///
    /// - no entry for `(method, path)` → `404` with `{"error": "Route not found"}`
    /// - handler returns `Ok(data)` → `200` with `{"data": data}`
    /// - handler returns `Err(e)` → `500` with `{"error": <display of e>}`
    pub async fn dispatch(&self, request: Request) -> Response {
        let Some(route) = self
            .routes
            .get(request.method())
            .and_then(|by_path| by_path.get(request.path()))
        else {
            debug!(method = %request.method(), path = %request.path(), "no route");
            return Response::builder()
                .status(StatusCode::NOT_FOUND)
                .json(json!({ "error": "Route not found" }));
        };

        match route.handler.call(request).await {
            Ok(data) => Response::json(json!({ "data": data })),
            Err(e) => {
                error!(handler = route.handler_name, error = %e, "handler failed");
                Response::builder()
                    .status(StatusCode::INTERNAL_SERVER_ERROR)
                    .json(json!({ "error": e.to_string() }))
            }
        }
    }

    /// Diagnostic dump of the route table as a `200` JSON response:
    /// `{"routes": {METHOD: {path: {"handler": .., "middleware": [..]}}}}`.
    ///
    /// Handler names are the registered values' type names — useful for
    /// telling entries apart, not a stable format.
    pub fn routes(&self) -> Response {
        let mut by_method = Map::new();
        for (method, by_path) in &self.routes {
            let mut paths = Map::new();
            for (path, route) in by_path {
                paths.insert(
                    path.clone(),
                    json!({
                        "handler": route.handler_name,
                        "middleware": route.middleware,
                    }),
                );
            }
            by_method.insert(method.to_string(), Value::Object(paths));
        }
        Response::json(json!({ "routes": by_method }))
    }
}

impl Default for Router {
    fn default() -> Self { Self::new() }
}

fn parse_method(method: &str) -> Method {
    let upper = method.to_ascii_uppercase();
    match Method::from_bytes(upper.as_bytes()) {
        Ok(m) => m,
        Err(e) => panic!("invalid method `{method}`: {e}"),
    }
}

/// Strips trailing slashes; an all-slash or empty path collapses to `"/"`.
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else {
        trimmed.to_owned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_trailing_slashes() {
        assert_eq!(normalize_path("/users/"), "/users");
        assert_eq!(normalize_path("/users///"), "/users");
        assert_eq!(normalize_path("/users"), "/users");
    }

    #[test]
    fn normalize_keeps_root() {
        assert_eq!(normalize_path("/"), "/");
        assert_eq!(normalize_path("///"), "/");
        assert_eq!(normalize_path(""), "/");
    }

    #[test]
    fn parse_method_uppercases() {
        assert_eq!(parse_method("get"), Method::GET);
        assert_eq!(parse_method("Post"), Method::POST);
        assert_eq!(parse_method("DELETE"), Method::DELETE);
    }

    #[test]
    #[should_panic(expected = "invalid method")]
    fn parse_method_rejects_garbage() {
        parse_method("GE T");
    }
}
