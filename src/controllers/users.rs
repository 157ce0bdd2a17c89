//! `/users/` resource handlers.

use serde_json::{json, Value};

use crate::request::Request;

/// `GET /users/` — lists known users.
///
/// Returns the sample account the `seed` script creates. Password hashes
/// never leave the database.
pub async fn index(_req: Request) -> Value {
    json!([
        { "id": 1, "name": "Luis", "email": "luis@gmail.com" }
    ])
}
