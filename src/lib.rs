//! # shortly
//!
//! The HTTP and database plumbing for a small URL-shortener service.
//! One route table. One responder. Nothing clever.
//!
//! ## The contract
//!
//! Routing is an exact-match table: `(method, path)` in, handler out. No
//! path parameters, no wildcards, no name-based lookup. A route either
//! exists in the table or the client gets a `404` with
//! `{"error": "Route not found"}` — there is no third case, because every
//! handler is bound as a typed value when the table is built. If it
//! compiles, every registered route is callable.
//!
//! Handlers never touch the connection. Each one receives a [`Request`]
//! snapshot as its only input and returns data; the router wraps that data
//! in a `{"data": ..}` envelope (or an `{"error": ..}` envelope for
//! failures), and exactly one place in the server converts the finished
//! [`Response`] value into bytes on the wire.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use serde_json::{json, Value};
//! use shortly::{Request, Router, Server};
//!
//! #[tokio::main]
//! async fn main() {
//!     let app = Router::new()
//!         .get("/users/", list_users)
//!         .route("POST", "/links", create_link);
//!
//!     Server::bind("127.0.0.1:8080").serve(app).await.unwrap();
//! }
//!
//! async fn list_users(_req: Request) -> Value {
//!     json!([{ "id": 1, "name": "Luis" }])
//! }
//!
//! async fn create_link(req: Request) -> Value {
//!     let target = req.body().get("url").cloned().unwrap_or(Value::Null);
//!     json!({ "stored": target })
//! }
//! ```

mod error;
mod handler;
mod request;
mod response;
mod router;
mod server;

pub mod config;
pub mod controllers;
pub mod db;

pub use config::Config;
pub use error::Error;
pub use handler::{Handler, IntoOutcome, Outcome};
pub use http::{Method, StatusCode};
pub use request::Request;
pub use response::{Response, ResponseBuilder};
pub use router::Router;
pub use server::Server;
