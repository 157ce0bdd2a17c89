//! Dispatch semantics through the public API: table lookup, path and method
//! normalization, and the JSON envelopes.

use bytes::Bytes;
use http_body_util::{Empty, Full};
use serde_json::{json, Value};
use shortly::{Request, Response, Router, StatusCode};

async fn req(method: &str, uri: &str) -> Request {
    let http_req = http::Request::builder()
        .method(method)
        .uri(uri)
        .body(Empty::<Bytes>::new())
        .unwrap();
    Request::from_http(http_req).await
}

async fn req_json(method: &str, uri: &str, body: &str) -> Request {
    let http_req = http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Full::new(Bytes::copy_from_slice(body.as_bytes())))
        .unwrap();
    Request::from_http(http_req).await
}

fn body_json(res: &Response) -> Value {
    serde_json::from_slice(res.body()).unwrap()
}

async fn sample(_req: Request) -> Value {
    json!("sample")
}

async fn boom(_req: Request) -> shortly::Outcome {
    Err(std::io::Error::other("boom").into())
}

#[tokio::test]
async fn success_wraps_handler_data_in_envelope() {
    let app = Router::new().get("/users/", |_req: Request| async {
        json!([{ "id": 1, "name": "Luis", "email": "luis@gmail.com" }])
    });

    let res = app.dispatch(req("GET", "/users/").await).await;

    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(
        body_json(&res),
        json!({ "data": [{ "id": 1, "name": "Luis", "email": "luis@gmail.com" }] })
    );
}

#[tokio::test]
async fn unknown_route_gets_404_envelope() {
    let app = Router::new().get("/users/", sample);

    let res = app.dispatch(req("GET", "/missing").await).await;

    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&res), json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn registered_path_with_wrong_method_is_404() {
    let app = Router::new().get("/users/", sample);

    let res = app.dispatch(req("POST", "/users/").await).await;

    assert_eq!(res.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(&res), json!({ "error": "Route not found" }));
}

#[tokio::test]
async fn last_registration_wins() {
    let app = Router::new()
        .get("/users/", |_req: Request| async { json!("first") })
        .get("/users", |_req: Request| async { json!("second") });

    let res = app.dispatch(req("GET", "/users/").await).await;

    assert_eq!(body_json(&res), json!({ "data": "second" }));
}

#[tokio::test]
async fn trailing_slashes_never_matter() {
    let app = Router::new().get("/users/", sample);

    for path in ["/users", "/users/", "/users///"] {
        let res = app.dispatch(req("GET", path).await).await;
        assert_eq!(res.status_code(), StatusCode::OK, "path {path:?} should match");
    }
}

#[tokio::test]
async fn root_path_is_preserved_and_matchable() {
    let app = Router::new().get("/", sample);

    let res = app.dispatch(req("GET", "/").await).await;

    assert_eq!(body_json(&res), json!({ "data": "sample" }));
}

#[tokio::test]
async fn registration_method_is_case_insensitive() {
    let app = Router::new().route("get", "/users/", sample);

    let res = app.dispatch(req("GET", "/users/").await).await;

    assert_eq!(res.status_code(), StatusCode::OK);
}

#[tokio::test]
async fn same_path_distinct_methods_are_distinct_routes() {
    let app = Router::new()
        .route("GET", "/links", |_req: Request| async { json!("list") })
        .route("POST", "/links", |_req: Request| async { json!("create") });

    let get = app.dispatch(req("GET", "/links").await).await;
    let post = app.dispatch(req("POST", "/links").await).await;

    assert_eq!(body_json(&get), json!({ "data": "list" }));
    assert_eq!(body_json(&post), json!({ "data": "create" }));
}

#[tokio::test]
async fn query_string_does_not_affect_matching() {
    let app = Router::new().get("/users/", |req: Request| async move {
        json!(req.query_param("page"))
    });

    let res = app.dispatch(req("GET", "/users/?page=2&sort=name").await).await;

    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(body_json(&res), json!({ "data": "2" }));
}

#[tokio::test]
async fn handler_error_becomes_500_envelope() {
    let app = Router::new().get("/boom", boom);

    let res = app.dispatch(req("GET", "/boom").await).await;

    assert_eq!(res.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_json(&res), json!({ "error": "io: boom" }));
}

#[tokio::test]
async fn json_object_body_reaches_handler() {
    let app = Router::new().route("POST", "/links", |req: Request| async move {
        json!({ "target": req.body().get("url").cloned() })
    });

    let request = req_json("POST", "/links", r#"{"url": "https://example.com/"}"#).await;
    let res = app.dispatch(request).await;

    assert_eq!(
        body_json(&res),
        json!({ "data": { "target": "https://example.com/" } })
    );
}

#[tokio::test]
async fn malformed_body_reaches_handler_as_empty_map() {
    let app = Router::new().route("POST", "/links", |req: Request| async move {
        json!(req.body().len())
    });

    let request = req_json("POST", "/links", "{not json").await;
    let res = app.dispatch(request).await;

    assert_eq!(body_json(&res), json!({ "data": 0 }));
}

#[tokio::test]
async fn routes_dump_lists_every_entry() {
    let app = Router::new()
        .get("/users/", sample)
        .route_with_middleware("POST", "/links", sample, vec!["auth".to_owned()]);

    let res = app.routes();
    let dump = body_json(&res);

    assert_eq!(res.status_code(), StatusCode::OK);
    assert_eq!(dump["routes"]["GET"]["/users"]["middleware"], json!([]));
    assert_eq!(dump["routes"]["POST"]["/links"]["middleware"], json!(["auth"]));

    let name = dump["routes"]["GET"]["/users"]["handler"].as_str().unwrap();
    assert!(name.contains("sample"), "handler name was {name:?}");
}
