//! Integration tests for the wishlist.

use axum::http::StatusCode;
use cakes_n_bells_integration_tests::TestApp;
use cakes_n_bells_storefront::db::KeyValueStore;

#[tokio::test]
async fn test_toggle_adds_then_removes() {
    let mut app = TestApp::new();

    let added = app.post("/wishlist/vanilla/toggle").await;
    assert_eq!(added.status, StatusCode::OK);
    let body = added.json();
    assert_eq!(body["productId"], "vanilla");
    assert_eq!(body["wishlisted"], true);
    assert_eq!(body["count"], 1);

    let wishlist = app.get("/wishlist").await.json();
    assert_eq!(wishlist["count"], 1);
    assert_eq!(wishlist["products"][0]["id"], "vanilla");
    assert_eq!(wishlist["products"][0]["wishlisted"], true);

    let removed = app.post("/wishlist/vanilla/toggle").await.json();
    assert_eq!(removed["wishlisted"], false);
    assert_eq!(removed["count"], 0);
}

#[tokio::test]
async fn test_toggle_is_persisted() {
    let mut app = TestApp::new();
    app.post("/wishlist/mango/toggle").await;

    let stored = app.store().get("wishlist").expect("store readable");
    assert_eq!(stored.as_deref(), Some(r#"["mango"]"#));
}

#[tokio::test]
async fn test_wishlist_flag_shows_on_product_page() {
    let mut app = TestApp::new();
    app.post("/wishlist/blueberry/toggle").await;

    let detail = app.get("/products/blueberry").await.json();
    assert_eq!(detail["wishlisted"], true);
}

#[tokio::test]
async fn test_unknown_product_cannot_be_wishlisted() {
    let mut app = TestApp::new();
    let response = app.post("/wishlist/no-such-cake/toggle").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(app.get("/wishlist").await.json()["count"], 0);
}

#[tokio::test]
async fn test_deleted_product_can_still_be_removed() {
    let mut app = TestApp::new();
    app.post("/wishlist/mango/toggle").await;

    app.login().await;
    assert_eq!(
        app.delete("/admin/products/mango").await.status,
        StatusCode::NO_CONTENT
    );

    // The stale ID still counts but is no longer listed
    let wishlist = app.get("/wishlist").await.json();
    assert_eq!(wishlist["count"], 1);
    assert_eq!(wishlist["products"].as_array().map(Vec::len), Some(0));

    let removed = app.post("/wishlist/mango/toggle").await;
    assert_eq!(removed.status, StatusCode::OK);
    assert_eq!(removed.json()["count"], 0);
}
