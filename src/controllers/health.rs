//! Kubernetes health-check handlers.
//!
//! Kubernetes asks two questions. shortly answers them.
//!
//! | Probe | Path | Question |
//! |---|---|---|
//! | **Liveness** | `/healthz` | Is the process alive? Failure → restart. |
//! | **Readiness** | `/readyz` | Can the pod serve traffic? Failure → pulled from load-balancer. |
//!
//! Register them on your router:
//!
//! ```rust,no_run
//! use shortly::{controllers::health, Router};
//!
//! let app = Router::new()
//!     .get("/healthz", health::liveness)
//!     .get("/readyz", health::readiness);
//! ```
//!
//! Replace `readiness` with a custom handler if you need to gate on
//! dependency availability (database connections, downstream services, etc.):
//!
//! ```rust,no_run
//! use serde_json::json;
//! use shortly::{Outcome, Request};
//!
//! async fn readiness(_req: Request) -> Outcome {
//!     if dependencies_are_healthy().await {
//!         Ok(json!("ready"))
//!     } else {
//!         Err(std::io::Error::other("database unreachable").into())
//!     }
//! }
//!
//! async fn dependencies_are_healthy() -> bool { true }
//! ```

use serde_json::{json, Value};

use crate::request::Request;

/// Kubernetes liveness probe handler.
///
/// Always returns `200 OK` with `{"data": "ok"}`. If the process can respond
/// to HTTP at all, it is alive — this handler intentionally has no
/// dependencies.
pub async fn liveness(_req: Request) -> Value {
    json!("ok")
}

/// Kubernetes readiness probe handler (default implementation).
///
/// Returns `200 OK` with `{"data": "ready"}`. Replace this with your own
/// handler if your application needs a warm-up period or must verify
/// dependency health before accepting traffic.
pub async fn readiness(_req: Request) -> Value {
    json!("ready")
}
