//! Request handlers, grouped by resource.
//!
//! Handlers are free async functions taking a [`Request`](crate::Request) and
//! returning data for the `{"data": ..}` envelope. They are registered by
//! value in `main`, so every route in the table is backed by a real function
//! the compiler has already checked.

pub mod health;
pub mod users;
