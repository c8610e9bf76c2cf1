//! Integration tests for admin login and catalog management.

use axum::http::StatusCode;
use cakes_n_bells_integration_tests::TestApp;
use cakes_n_bells_storefront::db::KeyValueStore;
use serde_json::json;

#[tokio::test]
async fn test_admin_endpoints_require_login() {
    let mut app = TestApp::new();

    let response = app.get("/admin/products").await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Admin login required");

    let response = app.post_json("/admin/sections", &json!({ "name": "Wedding" })).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_wrong_password_is_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_json("/admin/login", &json!({ "password": "letmein" }))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.json()["error"], "Incorrect password");
    assert_eq!(app.get("/admin/products").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_and_logout() {
    let mut app = TestApp::new();
    app.login().await;
    assert_eq!(app.get("/admin/products").await.status, StatusCode::OK);

    assert_eq!(app.post("/admin/logout").await.status, StatusCode::NO_CONTENT);
    assert_eq!(app.get("/admin/products").await.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_product() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app
        .post_json(
            "/admin/products",
            &json!({
                "name": "  Red Velvet Cake ",
                "category": "Cake",
                "sections": ["Birthday Cakes"],
                "prices": { "0.5kg": "450", "1kg": "850" },
                "images": ["https://drive.google.com/file/d/1AbC_x-9/view?usp=sharing", "  "],
                "paymentTier": "luxury",
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let product = response.json();
    let id = product["id"].as_str().expect("generated id").to_owned();
    assert_eq!(id.len(), 9);
    assert_eq!(product["name"], "Red Velvet Cake");
    assert_eq!(
        product["images"],
        json!(["https://drive.google.com/thumbnail?id=1AbC_x-9&sz=w1000"])
    );

    // Visible to shoppers and written to the store
    let detail = app.get(&format!("/products/{id}")).await.json();
    assert_eq!(detail["paymentTier"], "luxury");
    let stored = app
        .store()
        .get("shop_products")
        .expect("store readable")
        .expect("products written");
    assert!(stored.contains(&id));
}

#[tokio::test]
async fn test_product_without_images_stores_placeholder() {
    let mut app = TestApp::new();
    app.login().await;

    let product = app
        .post_json(
            "/admin/products",
            &json!({ "name": "Plum Cake", "prices": { "piece": "90" } }),
        )
        .await
        .json();

    assert_eq!(
        product["images"],
        json!(["https://placehold.co/600x600?text=No+Image"])
    );
}

#[tokio::test]
async fn test_product_requires_a_name() {
    let mut app = TestApp::new();
    app.login().await;

    let response = app.post_json("/admin/products", &json!({ "name": " " })).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_product_prices_must_be_positive() {
    let mut app = TestApp::new();
    app.login().await;

    for prices in [json!({ "piece": "-5" }), json!({ "0.5kg": "0", "1kg": "700" })] {
        let response = app
            .post_json("/admin/products", &json!({ "name": "Plum Cake", "prices": prices }))
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST);
        assert_eq!(response.json()["error"], "Prices must be positive");
    }

    let response = app
        .put_json("/admin/products/vanilla", &json!({ "name": "Vanilla", "prices": { "1kg": "-1" } }))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(app.get("/products/vanilla").await.json()["name"], "Vanilla Cake");
}

#[tokio::test]
async fn test_update_and_delete_product() {
    let mut app = TestApp::new();
    app.login().await;

    let updated = app
        .put_json(
            "/admin/products/vanilla",
            &json!({
                "name": "Vanilla Bean Cake",
                "category": "Cake",
                "prices": { "0.5kg": "380", "1kg": "700" },
            }),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);
    assert_eq!(app.get("/products/vanilla").await.json()["name"], "Vanilla Bean Cake");

    let missing = app
        .put_json("/admin/products/no-such-cake", &json!({ "name": "Ghost" }))
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);

    assert_eq!(
        app.delete("/admin/products/vanilla").await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(app.get("/products/vanilla").await.status, StatusCode::NOT_FOUND);
    assert_eq!(
        app.delete("/admin/products/vanilla").await.status,
        StatusCode::NOT_FOUND
    );
}

#[tokio::test]
async fn test_collections() {
    let mut app = TestApp::new();
    app.login().await;

    let added = app
        .post_json("/admin/sections", &json!({ "name": " Wedding Cakes " }))
        .await;
    assert_eq!(added.status, StatusCode::CREATED);
    assert_eq!(added.json().as_array().map(Vec::len), Some(4));

    let duplicate = app
        .post_json("/admin/sections", &json!({ "name": "Wedding Cakes" }))
        .await;
    assert_eq!(duplicate.status, StatusCode::OK);
    assert_eq!(duplicate.json().as_array().map(Vec::len), Some(4));

    let blank = app.post_json("/admin/sections", &json!({ "name": "" })).await;
    assert_eq!(blank.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_deleting_collection_keeps_product_tags() {
    let mut app = TestApp::new();
    app.login().await;

    assert_eq!(
        app.delete("/admin/sections/Anniversary%20Cakes").await.status,
        StatusCode::NO_CONTENT
    );
    assert_eq!(
        app.get("/admin/sections").await.json(),
        json!(["Birthday Cakes", "Celebration Cakes"])
    );

    // Landing page no longer shows it, but products keep the tag
    let landing = app.get("/").await.json();
    assert_eq!(landing["sections"].as_array().map(Vec::len), Some(2));
    let products = app.get("/admin/products").await.json();
    let blueberry = products
        .as_array()
        .expect("products")
        .iter()
        .find(|p| p["id"] == "blueberry")
        .expect("blueberry");
    assert_eq!(blueberry["sections"], json!(["Anniversary Cakes"]));

    assert_eq!(
        app.delete("/admin/sections/Anniversary%20Cakes").await.status,
        StatusCode::NOT_FOUND
    );
}
