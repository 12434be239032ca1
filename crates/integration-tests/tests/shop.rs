//! Integration tests for catalog, orders, cart, and details.
//!
//! These tests require:
//! - A running `PostgreSQL` database
//! - The API server running (cargo run -p peppercorn-api)
//!
//! Run with: cargo test -p peppercorn-integration-tests -- --ignored

use reqwest::{Client, StatusCode};
use serde_json::{Value, json};

use peppercorn_integration_tests::{api_base_url, unique_name};

/// Test helper: create a product via the API and return the persisted row.
async fn create_test_product(client: &Client, name: &str) -> Value {
    let resp = client
        .post(format!("{}/product", api_base_url()))
        .json(&json!({
            "name": name,
            "description": "Integration test product",
            "image": "/img/test.png",
            "price": "19.99",
        }))
        .send()
        .await
        .expect("product creation failed");

    assert_eq!(resp.status(), StatusCode::CREATED);
    resp.json().await.expect("invalid JSON")
}

// ============================================================================
// Catalog
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_create_and_fetch_product() {
    let client = Client::new();
    let name = unique_name("product");

    let created = create_test_product(&client, &name).await;
    let id = created["id"].as_i64().expect("missing id");
    assert_eq!(created["name"], name.as_str());

    let resp = client
        .get(format!("{}/products/{id}", api_base_url()))
        .send()
        .await
        .expect("product fetch failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let fetched: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], name.as_str());
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_product_listing_includes_created_product() {
    let client = Client::new();
    let name = unique_name("product");
    create_test_product(&client, &name).await;

    let resp = client
        .get(format!("{}/products", api_base_url()))
        .send()
        .await
        .expect("products listing failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let body: Vec<Value> = resp.json().await.expect("invalid JSON");
    assert!(body.iter().any(|p| p["name"] == name.as_str()));
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_missing_product_is_not_found() {
    let client = Client::new();

    let resp = client
        .get(format!("{}/products/999999999", api_base_url()))
        .send()
        .await
        .expect("product fetch failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["error"], "Product not found");
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_unvalidated_product_creation_accepts_empty_body() {
    // Product submission is deliberately permissive.
    let client = Client::new();

    let resp = client
        .post(format!("{}/product", api_base_url()))
        .json(&json!({}))
        .send()
        .await
        .expect("product creation failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert!(body["id"].is_number());
    assert!(body["name"].is_null());
}

// ============================================================================
// Orders
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_place_order_then_listed_first() {
    let client = Client::new();
    let username = unique_name("buyer");

    let resp = client
        .post(format!("{}/orders", api_base_url()))
        .json(&json!({
            "username": username,
            "productId": 1,
            "productName": "Peppercorn Grinder",
            "price": "19.99",
            "image": "/img/grinder.png",
        }))
        .send()
        .await
        .expect("order placement failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "Order placed successfully");

    // Listing is most-recent-first, so the new order leads.
    let resp = client
        .get(format!("{}/orders", api_base_url()))
        .send()
        .await
        .expect("orders listing failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let orders: Vec<Value> = resp.json().await.expect("invalid JSON");
    assert_eq!(orders.first().expect("empty listing")["username"], username.as_str());
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_place_order_missing_field_inserts_nothing() {
    let client = Client::new();
    let username = unique_name("buyer");

    // Each omitted mandatory field must reject.
    for body in [
        json!({ "productId": 1, "productName": "x", "price": "1.00", "image": "i" }),
        json!({ "username": username, "productName": "x", "price": "1.00", "image": "i" }),
        json!({ "username": username, "productId": 1, "price": "1.00", "image": "i" }),
        json!({ "username": username, "productId": 1, "productName": "x", "image": "i" }),
        json!({ "username": username, "productId": 1, "productName": "x", "price": "1.00" }),
    ] {
        let resp = client
            .post(format!("{}/orders", api_base_url()))
            .json(&body)
            .send()
            .await
            .expect("order placement failed");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.expect("invalid JSON");
        assert_eq!(body["error"], "Missing required fields");
    }

    // Nothing was inserted for this user.
    let resp = client
        .get(format!("{}/orders/{username}", api_base_url()))
        .send()
        .await
        .expect("orders-for-user failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_orders_for_user_vs_cart_asymmetry() {
    // A user with no orders gets a 404; the same user's empty cart is a 200
    // with an empty list. Clients depend on the difference.
    let client = Client::new();
    let username = unique_name("emptyhands");

    let resp = client
        .get(format!("{}/orders/{username}", api_base_url()))
        .send()
        .await
        .expect("orders-for-user failed");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "No orders found for this user");

    let resp = client
        .get(format!("{}/cart/{username}", api_base_url()))
        .send()
        .await
        .expect("cart fetch failed");
    assert_eq!(resp.status(), StatusCode::OK);
    let items: Vec<Value> = resp.json().await.expect("invalid JSON");
    assert!(items.is_empty());
}

// ============================================================================
// Cart
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_add_to_cart_allows_duplicates() {
    let client = Client::new();
    let username = unique_name("shopper");

    for _ in 0..2 {
        let resp = client
            .post(format!("{}/add-to-cart", api_base_url()))
            .json(&json!({
                "username": username,
                "productId": 7,
                "title": "Peppercorn Grinder",
                "price": "19.99",
                "image": "/img/grinder.png",
            }))
            .send()
            .await
            .expect("add-to-cart failed");
        assert_eq!(resp.status(), StatusCode::OK);
    }

    let resp = client
        .get(format!("{}/cart/{username}", api_base_url()))
        .send()
        .await
        .expect("cart fetch failed");
    let items: Vec<Value> = resp.json().await.expect("invalid JSON");
    assert_eq!(items.len(), 2);
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_add_to_cart_requires_username_only() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/add-to-cart", api_base_url()))
        .json(&json!({ "productId": 7 }))
        .send()
        .await
        .expect("add-to-cart failed");
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "Username is required");

    // A bare username with no item fields still inserts.
    let resp = client
        .post(format!("{}/add-to-cart", api_base_url()))
        .json(&json!({ "username": unique_name("shopper") }))
        .send()
        .await
        .expect("add-to-cart failed");
    assert_eq!(resp.status(), StatusCode::OK);
}

// ============================================================================
// Details
// ============================================================================

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_submit_details_returns_persisted_row() {
    let client = Client::new();

    let resp = client
        .post(format!("{}/details", api_base_url()))
        .json(&json!({
            "name": "Jane Doe",
            "mobile": "9876543210",
            "address": "12 Elm St",
        }))
        .send()
        .await
        .expect("details submission failed");
    assert_eq!(resp.status(), StatusCode::CREATED);
    let body: Value = resp.json().await.expect("invalid JSON");
    assert_eq!(body["message"], "Details stored successfully");
    assert_eq!(body["user"]["name"], "Jane Doe");
    assert!(body["user"]["id"].is_number());
}

#[tokio::test]
#[ignore = "Requires a running API server and database"]
async fn test_submit_details_field_validation() {
    let client = Client::new();

    for (body, expected) in [
        (
            json!({ "name": "John123", "mobile": "9876543210", "address": "12 Elm St" }),
            "Invalid or missing name",
        ),
        (
            json!({ "name": "Jane Doe", "mobile": "12345", "address": "12 Elm St" }),
            "Invalid or missing mobile number",
        ),
        (
            json!({ "name": "Jane Doe", "mobile": "9876543210", "address": "   " }),
            "Address is required",
        ),
        (
            json!({ "name": "Jane Doe", "mobile": "9876543210" }),
            "Address is required",
        ),
    ] {
        let resp = client
            .post(format!("{}/details", api_base_url()))
            .json(&body)
            .send()
            .await
            .expect("details submission failed");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = resp.json().await.expect("invalid JSON");
        assert_eq!(body["error"], expected);
    }
}
