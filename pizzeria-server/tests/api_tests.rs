//! Integration tests for pizzeria-server API endpoints
//!
//! Each test builds the router over its own in-memory SQLite database and
//! drives it with `oneshot`.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use pizzeria_server::db::{create_memory_pool, migrate, RestaurantPizzaRepo};
use pizzeria_server::{build_router, ServerConfig};
use serde_json::{json, Value};
use sqlx::SqlitePool;
use tower::util::ServiceExt; // for `oneshot` method

/// Test helper: migrated in-memory database with the Dough Bros scenario
async fn setup_test_db() -> SqlitePool {
    let pool = create_memory_pool().await.expect("Should open in-memory db");
    migrate(&pool).await.expect("Should migrate");

    sqlx::query(
        "INSERT INTO restaurants (id, name, address) VALUES (1, 'Dough Bros', '1 Main St'), (2, 'Crust Club', '9 Elm Ave')",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "INSERT INTO pizzas (id, name, ingredients) VALUES (1, 'Margherita', 'Tomato, Mozzarella'), (2, 'Pepperoni', 'Dough, Pepperoni')",
    )
    .execute(&pool)
    .await
    .unwrap();

    pool
}

fn setup_app(pool: SqlitePool) -> Router {
    build_router(pool, &ServerConfig::default())
}

fn test_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

fn post_raw(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

fn post_json(uri: &str, body: Value) -> Request<Body> {
    post_raw(uri, body.to_string())
}

async fn extract_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Should read body");
    serde_json::from_slice(&bytes).expect("Should parse JSON")
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Should read body");
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("Should parse JSON")
    };
    (status, body)
}

async fn association_count(pool: &SqlitePool) -> i64 {
    RestaurantPizzaRepo::new(pool).count().await.unwrap()
}

// =============================================================================
// Listing
// =============================================================================

#[tokio::test]
async fn test_health_endpoint() {
    let app = setup_app(setup_test_db().await);

    let response = app.oneshot(test_request("GET", "/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = extract_json(response.into_body()).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_list_restaurants() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = send(&app, test_request("GET", "/restaurants")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Dough Bros", "address": "1 Main St"},
            {"id": 2, "name": "Crust Club", "address": "9 Elm Ave"}
        ])
    );
}

#[tokio::test]
async fn test_list_pizzas() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = send(&app, test_request("GET", "/pizzas")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "Margherita", "ingredients": "Tomato, Mozzarella"},
            {"id": 2, "name": "Pepperoni", "ingredients": "Dough, Pepperoni"}
        ])
    );
}

#[tokio::test]
async fn test_empty_storage_lists_empty_arrays() {
    let pool = create_memory_pool().await.unwrap();
    migrate(&pool).await.unwrap();
    let app = setup_app(pool);

    let (status, body) = send(&app, test_request("GET", "/restaurants")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));

    let (status, body) = send(&app, test_request("GET", "/pizzas")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

// =============================================================================
// Restaurant detail
// =============================================================================

#[tokio::test]
async fn test_get_restaurant_without_pizzas() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = send(&app, test_request("GET", "/restaurants/2")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({"id": 2, "name": "Crust Club", "address": "9 Elm Ave", "restaurant_pizzas": []})
    );
}

#[tokio::test]
async fn test_get_missing_restaurant_is_404() {
    let app = setup_app(setup_test_db().await);

    for uri in [
        "/restaurants/999",
        "/restaurants/0",
        "/restaurants/-1",
        "/restaurants/+1",
        "/restaurants/abc",
    ] {
        let (status, body) = send(&app, test_request("GET", uri)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
        assert_eq!(body, json!({"error": "Restaurant not found"}), "{uri}");
    }
}

// =============================================================================
// Association creation
// =============================================================================

#[tokio::test]
async fn test_create_then_fetch_scenario() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"price": 12, "pizza_id": 1, "restaurant_id": 1}),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({
            "id": 1,
            "price": 12,
            "pizza_id": 1,
            "restaurant_id": 1,
            "pizza": {"id": 1, "name": "Margherita"},
            "restaurant": {"id": 1, "name": "Dough Bros", "address": "1 Main St"}
        })
    );

    let (status, body) = send(&app, test_request("GET", "/restaurants/1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["restaurant_pizzas"], json!([{"id": 1, "name": "Margherita"}]));
}

#[tokio::test]
async fn test_every_valid_price_is_stored_exactly() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    for price in 1..=30 {
        let (status, body) = send(
            &app,
            post_json(
                "/restaurant_pizzas",
                json!({"price": price, "pizza_id": 2, "restaurant_id": 2}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::CREATED, "price {price}");
        assert_eq!(body["price"], price);
    }

    assert_eq!(association_count(&pool).await, 30);
}

#[tokio::test]
async fn test_out_of_range_price_is_rejected_and_not_persisted() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    for price in [0, 31, -5, 1000] {
        let (status, body) = send(
            &app,
            post_json(
                "/restaurant_pizzas",
                json!({"price": price, "pizza_id": 1, "restaurant_id": 1}),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST, "price {price}");
        assert_eq!(body, json!({"errors": ["validation errors"]}));
    }

    assert_eq!(association_count(&pool).await, 0);
}

#[tokio::test]
async fn test_missing_or_non_numeric_price_is_validation_error() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    for payload in [
        json!({"pizza_id": 1, "restaurant_id": 1}),
        json!({"price": null, "pizza_id": 1, "restaurant_id": 1}),
        json!({"price": "12", "pizza_id": 1, "restaurant_id": 1}),
        json!({"price": 12.5, "pizza_id": 1, "restaurant_id": 1}),
        json!({"price": 12}),
        json!([1, 2]),
    ] {
        let (status, body) = send(&app, post_json("/restaurant_pizzas", payload.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{payload}");
        assert_eq!(body, json!({"errors": ["validation errors"]}), "{payload}");
    }

    assert_eq!(association_count(&pool).await, 0);
}

#[tokio::test]
async fn test_unparseable_body_is_invalid_json() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    for raw in ["", "not json", "{\"price\": 12", "null"] {
        let (status, body) = send(&app, post_raw("/restaurant_pizzas", raw)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw:?}");
        assert_eq!(
            body,
            json!({"errors": ["Invalid JSON, could not parse the request body"]}),
            "{raw:?}"
        );
    }

    assert_eq!(association_count(&pool).await, 0);
}

#[tokio::test]
async fn test_unknown_references_are_rejected() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"price": 5, "pizza_id": 99, "restaurant_id": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Pizza not found"]}));

    let (status, body) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"price": 5, "pizza_id": 1, "restaurant_id": 99}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({"errors": ["Restaurant not found"]}));

    assert_eq!(association_count(&pool).await, 0);
}

// =============================================================================
// Deletion
// =============================================================================

#[tokio::test]
async fn test_delete_cascades_and_then_404s() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    for (pizza_id, restaurant_id) in [(1, 1), (2, 1), (1, 2)] {
        let (status, _) = send(
            &app,
            post_json(
                "/restaurant_pizzas",
                json!({"price": 10, "pizza_id": pizza_id, "restaurant_id": restaurant_id}),
            ),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let response = app
        .clone()
        .oneshot(test_request("DELETE", "/restaurants/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert!(bytes.is_empty());

    assert_eq!(association_count(&pool).await, 1);

    let (status, body) = send(&app, test_request("GET", "/restaurants/1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));

    let (_, body) = send(&app, test_request("GET", "/restaurants")).await;
    assert_eq!(body.as_array().map(Vec::len), Some(1));

    // pizzas are untouched by a restaurant delete
    let (_, body) = send(&app, test_request("GET", "/pizzas")).await;
    assert_eq!(body.as_array().map(Vec::len), Some(2));
}

#[tokio::test]
async fn test_delete_missing_restaurant_is_404() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = send(&app, test_request("DELETE", "/restaurants/42")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));
}

#[tokio::test]
async fn test_delete_signed_id_is_404_and_keeps_row() {
    let app = setup_app(setup_test_db().await);

    let (status, body) = send(&app, test_request("DELETE", "/restaurants/+1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"error": "Restaurant not found"}));

    let (status, _) = send(&app, test_request("GET", "/restaurants/1")).await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_pizza_delete_cascades_in_store() {
    let pool = setup_test_db().await;
    let app = setup_app(pool.clone());

    let (status, _) = send(
        &app,
        post_json(
            "/restaurant_pizzas",
            json!({"price": 10, "pizza_id": 1, "restaurant_id": 1}),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);

    sqlx::query("DELETE FROM pizzas WHERE id = 1")
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(association_count(&pool).await, 0);
    let (_, body) = send(&app, test_request("GET", "/restaurants/1")).await;
    assert_eq!(body["restaurant_pizzas"], json!([]));
}
