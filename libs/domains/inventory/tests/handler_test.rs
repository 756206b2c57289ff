//! Handler tests for the inventory domain
//!
//! Drive the HTTP surface end to end over the in-memory repositories:
//! status codes, JSON shapes, error bodies, and the reference rules between
//! products and their categories/suppliers.

use axum::Router;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use domain_inventory::*;
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt; // For oneshot()

struct TestApp {
    router: Router,
}

impl TestApp {
    fn new() -> Self {
        let store = InMemoryStore::new();
        let router = Router::new().nest(
            "/api",
            domain_inventory::router(
                Arc::new(store.categories()),
                Arc::new(store.suppliers()),
                Arc::new(store.products()),
            ),
        );
        Self { router }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, json)
    }

    async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    async fn put(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::PUT, uri, Some(body)).await
    }

    async fn delete(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::DELETE, uri, None).await
    }

    /// Tools / Acme (12.345) / Hammer, all with id 1
    async fn seed(&self) {
        let (status, _) = self.post("/api/categories", json!({ "name": "Tools" })).await;
        assert_eq!(status, StatusCode::OK);
        let (status, _) = self.post("/api/suppliers", acme("12.345")).await;
        assert_eq!(status, StatusCode::CREATED);
        let (status, _) = self.post("/api/products", hammer(1, 1)).await;
        assert_eq!(status, StatusCode::OK);
    }
}

fn acme(tax_id: &str) -> Value {
    json!({ "name": "Acme", "taxId": tax_id, "phone": "555-0001" })
}

fn hammer(category_id: i64, supplier_id: i64) -> Value {
    json!({
        "name": "Hammer",
        "price": 9.99,
        "quantityStock": 10,
        "categoryId": category_id,
        "supplierId": supplier_id
    })
}

fn assert_error_body(body: &Value) {
    assert!(body["error"].is_string(), "missing error in {}", body);
    assert!(body["timestamp"].is_string(), "missing timestamp in {}", body);
}

// ============================================================================
// Walkthrough
// ============================================================================

#[tokio::test]
async fn test_inventory_walkthrough() {
    let app = TestApp::new();

    let (status, category) = app.post("/api/categories", json!({ "name": "Tools" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(category, json!({ "id": 1, "name": "Tools" }));

    let (status, supplier) = app.post("/api/suppliers", acme("12.345")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(supplier["id"], 1);
    assert_eq!(supplier["taxId"], "12.345");
    assert_eq!(supplier["phone"], "555-0001");

    let (status, product) = app.post("/api/products", hammer(1, 1)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["id"], 1);
    assert_eq!(product["name"], "Hammer");
    assert_eq!(product["price"], 9.99);
    assert_eq!(product["category"]["name"], "Tools");
    assert_eq!(product["supplier"]["name"], "Acme");

    let (status, product) = app
        .send(Method::PATCH, "/api/products/1/stock", Some(json!({ "quantityStock": 5 })))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["quantityStock"], 5);

    let (status, product) = app.get("/api/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["quantityStock"], 5);
    assert_eq!(product["price"], 9.99);
    assert_eq!(product["name"], "Hammer");

    // Category still in use: refused, product left intact
    let (status, body) = app.delete("/api/categories/1").await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_body(&body);

    let (status, product) = app.get("/api/products/1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["category"]["id"], 1);
    assert_eq!(product["category"]["name"], "Tools");
}

// ============================================================================
// Categories
// ============================================================================

#[tokio::test]
async fn test_list_categories_in_id_order() {
    let app = TestApp::new();
    app.post("/api/categories", json!({ "name": "Tools" })).await;
    app.post("/api/categories", json!({ "name": "Paint" })).await;

    let (status, body) = app.get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": 1, "name": "Tools" }, { "id": 2, "name": "Paint" }]));
}

#[tokio::test]
async fn test_update_category() {
    let app = TestApp::new();
    app.post("/api/categories", json!({ "name": "Tools" })).await;

    let (status, body) = app.put("/api/categories/1", json!({ "name": "Hand tools" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Hand tools");

    let (status, body) = app.put("/api/categories/1", json!({ "name": "   " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (_, body) = app.get("/api/categories/1").await;
    assert_eq!(body["name"], "Hand tools");

    let (status, body) = app.put("/api/categories/99", json!({ "name": "Garden" })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body);
}

#[tokio::test]
async fn test_create_category_with_blank_name_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app.post("/api/categories", json!({ "name": "" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (_, body) = app.get("/api/categories").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_delete_category() {
    let app = TestApp::new();
    app.post("/api/categories", json!({ "name": "Tools" })).await;

    let (status, body) = app.delete("/api/categories/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);

    let (status, _) = app.get("/api/categories/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // Absent ids are a no-op
    let (status, _) = app.delete("/api/categories/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// Suppliers
// ============================================================================

#[tokio::test]
async fn test_blank_phone_is_rejected_and_nothing_stored() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/suppliers", json!({ "name": "Acme", "taxId": "12.345", "phone": "" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (_, body) = app.get("/api/suppliers").await;
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_missing_supplier_field_is_rejected() {
    let app = TestApp::new();

    let (status, body) = app
        .post("/api/suppliers", json!({ "name": "Acme", "phone": "555-0001" }))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);
}

#[tokio::test]
async fn test_invalid_supplier_email_is_rejected() {
    let app = TestApp::new();

    let mut input = acme("12.345");
    input["email"] = json!("not-an-email");
    let (status, _) = app.post("/api/suppliers", input).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let mut input = acme("12.345");
    input["email"] = json!("sales@acme.test");
    let (status, body) = app.post("/api/suppliers", input).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["email"], "sales@acme.test");
}

#[tokio::test]
async fn test_duplicate_tax_id_is_conflict() {
    let app = TestApp::new();
    app.post("/api/suppliers", acme("12.345")).await;
    app.post("/api/suppliers", acme("67.890")).await;

    let (status, body) = app.post("/api/suppliers", acme("12.345")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_error_body(&body);

    let (status, _) = app.put("/api/suppliers/2", acme("12.345")).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (_, body) = app.get("/api/suppliers/2").await;
    assert_eq!(body["taxId"], "67.890");
    let (_, body) = app.get("/api/suppliers").await;
    assert_eq!(body.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_update_supplier() {
    let app = TestApp::new();
    app.post("/api/suppliers", acme("12.345")).await;

    let (status, body) = app
        .put(
            "/api/suppliers/1",
            json!({
                "name": "Acme Ltd",
                "taxId": "12.345",
                "phone": "555-0002",
                "email": "a@acme.test"
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Acme Ltd");
    assert_eq!(body["phone"], "555-0002");

    let (status, _) = app.put("/api/suppliers/9", acme("99.999")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/suppliers").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_delete_supplier() {
    let app = TestApp::new();
    app.seed().await;
    app.post("/api/suppliers", acme("67.890")).await;

    let (status, _) = app.delete("/api/suppliers/1").await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = app.delete("/api/suppliers/2").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/api/suppliers/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = app.delete("/api/suppliers/2").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body);
}

// ============================================================================
// Products
// ============================================================================

#[tokio::test]
async fn test_create_product_with_unknown_references() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app.post("/api/products", hammer(42, 1)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (status, _) = app.post("/api/products", hammer(1, 42)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = app
        .post(
            "/api/products",
            json!({ "name": "Saw", "price": 5.0, "quantityStock": 1, "supplierId": 1 }),
        )
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = app.get("/api/products").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_product_with_negative_price_is_rejected() {
    let app = TestApp::new();
    app.seed().await;

    let mut input = hammer(1, 1);
    input["price"] = json!(-1.0);
    let (status, _) = app.post("/api/products", input).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_product() {
    let app = TestApp::new();
    app.seed().await;
    app.post("/api/categories", json!({ "name": "Garden" })).await;

    let (status, body) = app
        .put(
            "/api/products/1",
            json!({
                "name": "Mallet",
                "description": "Rubber head",
                "price": 12.5,
                "quantityStock": 3,
                "categoryId": 2
            }),
        )
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "Mallet");
    assert_eq!(body["description"], "Rubber head");
    assert_eq!(body["category"]["name"], "Garden");
    // supplierId omitted: reference kept
    assert_eq!(body["supplier"]["id"], 1);

    // Category 1 is now unused
    let (status, _) = app.delete("/api/categories/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

#[tokio::test]
async fn test_update_product_with_unknown_reference_changes_nothing() {
    let app = TestApp::new();
    app.seed().await;

    let mut input = hammer(7, 1);
    input["name"] = json!("Mallet");
    let (status, body) = app.put("/api/products/1", input).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (_, body) = app.get("/api/products/1").await;
    assert_eq!(body["name"], "Hammer");
    assert_eq!(body["category"]["id"], 1);
}

#[tokio::test]
async fn test_update_missing_product_is_not_found() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app.put("/api/products/9", hammer(1, 1)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_error_body(&body);

    let (_, body) = app.get("/api/products").await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_stock_update_rules() {
    let app = TestApp::new();
    app.seed().await;

    let (status, body) = app
        .send(Method::PATCH, "/api/products/1/stock", Some(json!({ "quantityStock": -3 })))
        .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_error_body(&body);

    let (status, _) = app
        .send(Method::PATCH, "/api/products/9/stock", Some(json!({ "quantityStock": 3 })))
        .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = app.get("/api/products/1").await;
    assert_eq!(body["quantityStock"], 10);
}

#[tokio::test]
async fn test_delete_product() {
    let app = TestApp::new();
    app.seed().await;

    let (status, _) = app.delete("/api/products/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, _) = app.get("/api/products/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = app.delete("/api/products/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    // References released
    let (status, _) = app.delete("/api/categories/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
    let (status, _) = app.delete("/api/suppliers/1").await;
    assert_eq!(status, StatusCode::NO_CONTENT);
}

// ============================================================================
// Malformed requests
// ============================================================================

#[tokio::test]
async fn test_non_numeric_id_is_bad_request() {
    let app = TestApp::new();

    for uri in ["/api/categories/abc", "/api/suppliers/abc", "/api/products/abc"] {
        let (status, body) = app.get(uri).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
        assert_error_body(&body);
    }
}

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = TestApp::new();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/categories")
        .header("content-type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.router.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let (status, body) = app.get("/api/categories").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}
