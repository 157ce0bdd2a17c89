//! Handler trait, outcome contract, and type erasure.
//!
//! # How async handlers are stored
//!
//! The route table holds handlers of *different* concrete types in one
//! `HashMap`. Rust collections hold a single type, so handlers are erased
//! behind a trait object (`dyn ErasedHandler`) and stored uniformly:
//!
//! ```text
//! async fn index(req: Request) -> Value { … }      ← user writes this
//!        ↓ router.get("/users/", index)
//! index.into_boxed_handler()                       ← Handler blanket impl
//!        ↓
//! Arc::new(FnHandler(index))                       ← heap-allocated wrapper
//!        ↓  stored as BoxedHandler = Arc<dyn ErasedHandler>
//! handler.call(req)  at dispatch time              ← one vtable dispatch
//!        ↓
//! Box::pin(async { index(req).await.into_outcome() })
//! ```
//!
//! Because a route maps to a concrete function value rather than a name
//! looked up at request time, a handler that does not exist is a compile
//! error, not a 500.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use serde_json::Value;

use crate::error::Error;
use crate::request::Request;

/// What a route handler resolves to: the JSON payload the router wraps in
/// the `{"data": ..}` success envelope, or the error it renders into the
/// 500 `{"error": ..}` envelope.
pub type Outcome = Result<Value, Error>;

/// A heap-allocated, type-erased future that resolves to an [`Outcome`].
///
/// `Pin<Box<…>>` because the runtime polls the future in place; `Send +
/// 'static` so tokio may move it across threads.
pub(crate) type BoxFuture = Pin<Box<dyn Future<Output = Outcome> + Send + 'static>>;

/// Internal dispatch interface.
///
/// `#[doc(hidden)] pub` rather than `pub(crate)` because it appears in the
/// return type of the public `Handler` trait's `into_boxed_handler` method.
#[doc(hidden)]
pub trait ErasedHandler {
    fn call(&self, req: Request) -> BoxFuture;
}

/// A heap-allocated, type-erased handler shared across concurrent requests.
/// One atomic reference-count bump per dispatch, no copying.
#[doc(hidden)]
pub type BoxedHandler = Arc<dyn ErasedHandler + Send + Sync + 'static>;

// ── Outcome conversion ────────────────────────────────────────────────────────

/// Conversion into a handler [`Outcome`].
///
/// Infallible handlers return a bare `serde_json::Value`; fallible ones
/// return `Result<Value, Error>` and use `?` freely:
///
/// ```rust
/// use serde_json::{json, Value};
/// use shortly::{Outcome, Request};
///
/// async fn liveness(_req: Request) -> Value {
///     json!("ok")
/// }
///
/// async fn lookup(req: Request) -> Outcome {
///     let code = req.query_param("code").unwrap_or_default();
///     Ok(json!({ "code": code }))
/// }
/// ```
pub trait IntoOutcome {
    fn into_outcome(self) -> Outcome;
}

impl IntoOutcome for Outcome {
    fn into_outcome(self) -> Outcome {
        self
    }
}

impl IntoOutcome for Value {
    fn into_outcome(self) -> Outcome {
        Ok(self)
    }
}

// ── Public Handler trait ──────────────────────────────────────────────────────

/// Implemented for every valid route handler.
///
/// You never implement this yourself. It is automatically satisfied for any
/// `async fn` with the signature:
///
/// ```text
/// async fn name(req: Request) -> impl IntoOutcome
/// ```
///
/// The trait is **sealed** (via the private `Sealed` supertrait): only the
/// blanket impl below can satisfy it, which keeps the registration surface
/// stable.
pub trait Handler: private::Sealed + Send + Sync + 'static {
    #[doc(hidden)]
    fn into_boxed_handler(self) -> BoxedHandler;
}

/// The sealing module. `Sealed` is private, so external crates cannot name
/// it and therefore cannot implement `Handler` on their own types.
mod private {
    pub trait Sealed {}
}

// ── Blanket implementations ───────────────────────────────────────────────────

/// `Fn(Request) -> Fut` covers named `async fn` items, closures returning
/// async blocks, and any struct implementing `Fn`.
impl<F, Fut, R> private::Sealed for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoOutcome + Send + 'static,
{
}

impl<F, Fut, R> Handler for F
where
    F: Fn(Request) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoOutcome + Send + 'static,
{
    fn into_boxed_handler(self) -> BoxedHandler {
        Arc::new(FnHandler(self))
    }
}

// ── Concrete wrapper ──────────────────────────────────────────────────────────

/// Newtype that holds a concrete handler `F` and implements
/// [`ErasedHandler`], bridging the typed world to the trait-object world.
struct FnHandler<F>(F);

impl<F, Fut, R> ErasedHandler for FnHandler<F>
where
    F: Fn(Request) -> Fut + Send + Sync,
    Fut: Future<Output = R> + Send + 'static,
    R: IntoOutcome + Send + 'static,
{
    fn call(&self, req: Request) -> BoxFuture {
        // The concrete future is produced outside the async block so the
        // closure borrow of `self` ends before the future is boxed.
        let fut = (self.0)(req);
        Box::pin(async move { fut.await.into_outcome() })
    }
}
