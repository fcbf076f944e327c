use std::time::Duration;
use std::sync::Arc;

use axum_test::TestServer;
use biskaken_shop::AppState;
use biskaken_shop::ai::{AiService, AiSettings, GeminiClient, GenerativeModel, InlineImage};
use biskaken_shop::error::AiError;
use biskaken_shop::server::build_router;
use biskaken_shop::store::{ShopStore, StoreSettings};
use serde_json::{Value, json};

/// Canned model answers, so no network is involved.
struct CannedModel;

#[async_trait::async_trait]
impl GenerativeModel for CannedModel {
    async fn generate_json(&self, _model: &str, prompt: &str, _schema: &Value) -> Result<Value, AiError> {
        if prompt.contains("blog") {
            return Ok(json!({
                "title": "Rainy Season Tyre Checks",
                "content": "Check your tread depth before the rains.",
                "category": "Maintenance",
                "readTime": "3 min read",
                "imagePrompt": "Mechanic inspecting a tyre in Accra"
            }));
        }
        if prompt.contains("complaint") || prompt.contains("Complaint") {
            return Ok(json!({
                "diagnosis": "Worn brake pads",
                "confidence": 0.85,
                "estimatedCostRange": "₵400 - ₵600",
                "suggestedParts": ["Brake pads"],
                "repairTime": "2 hours"
            }));
        }
        Ok(json!(["Restock brake pads.", "Chase the open invoices."]))
    }

    async fn generate_text(&self, _model: &str, _prompt: &str) -> Result<String, AiError> {
        Ok("  Reorder within two weeks.  ".to_string())
    }

    async fn generate_image(&self, _model: &str, _prompt: &str, _aspect_ratio: &str) -> Result<InlineImage, AiError> {
        Ok(InlineImage {
            mime_type: "image/png".to_string(),
            data: "aGVsbG8=".to_string(),
        })
    }
}

fn server_with(ai: AiService) -> TestServer {
    let store = ShopStore::seeded(StoreSettings::default());
    let app = build_router(AppState::new(store, ai), Duration::from_secs(30));
    TestServer::new(app).unwrap()
}

fn server() -> TestServer {
    server_with(AiService::new(Arc::new(CannedModel), &AiSettings::default()))
}

/// No API key, so every call fails with "not configured".
fn unconfigured_server() -> TestServer {
    let client = GeminiClient::new(AiSettings::default()).unwrap();
    server_with(AiService::new(Arc::new(client), &AiSettings::default()))
}

#[tokio::test]
async fn health_and_catalog() {
    let server = server();

    let resp = server.get("/health").await;
    assert_eq!(resp.status_code(), 200);

    let resp = server.get("/api/catalog").await;
    assert_eq!(resp.status_code(), 200);
    let body: Value = resp.json();
    assert!(body["vehicleMakes"].as_array().unwrap().iter().any(|m| m == "Toyota"));
    assert!(!body["paymentMethods"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn login_and_logout() {
    let server = server();

    let resp = server
        .post("/api/session/login")
        .json(&json!({ "email": "admin@biskaken.com", "role": "ADMIN" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let user: Value = resp.json();
    assert_eq!(user["email"], "admin@biskaken.com");

    let session: Value = server.get("/api/session").await.json();
    assert_eq!(session["user"]["email"], "admin@biskaken.com");

    let resp = server.post("/api/session/logout").await;
    assert_eq!(resp.status_code(), 204);
    let session: Value = server.get("/api/session").await.json();
    assert!(session["user"].is_null());
}

#[tokio::test]
async fn job_board_filters_by_status_and_search() {
    let server = server();

    let all: Vec<Value> = server.get("/api/jobs").await.json();
    assert_eq!(all.len(), 3);

    let resp = server.get("/api/jobs").add_query_param("status", "ALL").await;
    let jobs: Vec<Value> = resp.json();
    assert_eq!(jobs.len(), 3);

    let jobs: Vec<Value> = server
        .get("/api/jobs")
        .add_query_param("status", "IN_PROGRESS")
        .await
        .json();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["id"], "J002");

    let jobs: Vec<Value> = server
        .get("/api/jobs")
        .add_query_param("search", "mercedes")
        .await
        .json();
    assert_eq!(jobs.len(), 1);
    assert_eq!(jobs[0]["customerName"], "Emmanuel Tetteh");

    let resp = server.get("/api/jobs").add_query_param("status", "PARKED").await;
    assert_eq!(resp.status_code(), 400);
}

#[tokio::test]
async fn open_job_and_update_status() {
    let server = server();

    let resp = server
        .post("/api/jobs")
        .json(&json!({
            "customerId": "C003",
            "issueDescription": "AC blowing warm air",
            "diagnosis": {
                "diagnosis": "Low refrigerant",
                "confidence": 0.7,
                "estimatedCostRange": "₵300 - ₵500",
                "suggestedParts": [],
                "repairTime": "1 hour"
            }
        }))
        .await;
    assert_eq!(resp.status_code(), 201);
    let job: Value = resp.json();
    assert_eq!(job["id"], "J004");
    assert_eq!(job["status"], "PENDING");
    assert_eq!(job["priority"], "MEDIUM");
    assert_eq!(job["estimatedCost"], 300.0);
    assert_eq!(job["vehicleInfo"], "Nissan Patrol (GE-9988-21)");

    let resp = server
        .put("/api/jobs/J004/status")
        .json(&json!({ "status": "COMPLETED" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let job: Value = resp.json();
    assert_eq!(job["status"], "COMPLETED");
    assert_eq!(job["issueDescription"], "AC blowing warm air");

    let resp = server
        .put("/api/jobs/J999/status")
        .json(&json!({ "status": "COMPLETED" }))
        .await;
    assert_eq!(resp.status_code(), 404);

    let resp = server
        .post("/api/jobs")
        .json(&json!({ "customerId": "C404", "issueDescription": "Noise" }))
        .await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn customers_create_and_conflict() {
    let server = server();

    let new_customer = json!({
        "name": "Ama Serwaa",
        "phone": "0277000111",
        "vehicle": { "make": "Kia", "model": "Rio", "year": "2019", "plateNumber": "GN-1010-19" }
    });
    let resp = server.post("/api/customers").json(&new_customer).await;
    assert_eq!(resp.status_code(), 201);
    let customer: Value = resp.json();
    assert_eq!(customer["id"], "C006");

    let resp = server
        .post("/api/customers")
        .json(&json!({
            "id": "C001",
            "name": "Duplicate",
            "phone": "0200000000",
            "vehicle": { "make": "Kia", "model": "Rio", "year": "2019", "plateNumber": "X" }
        }))
        .await;
    assert_eq!(resp.status_code(), 409);
    let body: Value = resp.json();
    assert!(body["error"].as_str().unwrap().contains("C001"));

    let resp = server.get("/api/customers/C006").await;
    assert_eq!(resp.status_code(), 200);
    let resp = server.get("/api/customers/C404").await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn low_stock_follows_stock_updates() {
    let server = server();

    let low: Vec<Value> = server.get("/api/inventory/low-stock").await.json();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["id"], "I002");

    // Equal to the reorder level is not low.
    let resp = server
        .put("/api/inventory/I002/stock")
        .json(&json!({ "stock": 5 }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let low: Vec<Value> = server.get("/api/inventory/low-stock").await.json();
    assert!(low.is_empty());

    server
        .put("/api/inventory/I003/stock")
        .json(&json!({ "stock": 9 }))
        .await;
    let low: Vec<Value> = server.get("/api/inventory/low-stock").await.json();
    assert_eq!(low.len(), 1);
    assert_eq!(low[0]["id"], "I003");
}

#[tokio::test]
async fn invoice_from_job_settles_after_payments() {
    let server = server();

    let resp = server
        .post("/api/invoices/from-job/J001")
        .json(&json!({}))
        .await;
    assert_eq!(resp.status_code(), 201);
    let invoice: Value = resp.json();
    assert_eq!(invoice["id"], "INV001");
    assert_eq!(invoice["status"], "UNPAID");
    assert_eq!(invoice["grandTotal"], 450.0);

    let resp = server
        .post("/api/invoices/INV001/payments")
        .json(&json!({ "amount": 200.0, "method": "Cash" }))
        .await;
    let invoice: Value = resp.json();
    assert_eq!(invoice["status"], "UNPAID");

    let resp = server
        .post("/api/invoices/INV001/payments")
        .json(&json!({ "amount": 250.0, "method": "Mobile Money", "ref": "MM-77" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let invoice: Value = resp.json();
    assert_eq!(invoice["status"], "PAID");
    assert_eq!(invoice["payments"].as_array().unwrap().len(), 2);
    assert_eq!(invoice["payments"][1]["ref"], "MM-77");

    let resp = server
        .post("/api/invoices/INV001/payments")
        .json(&json!({ "amount": -5.0, "method": "Cash" }))
        .await;
    assert_eq!(resp.status_code(), 400);

    let resp = server
        .post("/api/invoices/INV404/payments")
        .json(&json!({ "amount": 5.0, "method": "Cash" }))
        .await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn overdue_invoices_are_flagged() {
    let server = server();

    let resp = server
        .post("/api/invoices")
        .json(&json!({
            "customerId": "C002",
            "date": "2024-01-01",
            "dueDate": "2024-01-31",
            "items": [{ "description": "Coolant flush", "quantity": 1.0, "unitPrice": 150.0 }]
        }))
        .await;
    assert_eq!(resp.status_code(), 201);

    let body: Value = server.post("/api/invoices/mark-overdue").await.json();
    assert_eq!(body["updated"], 1);
    let invoice: Value = server.get("/api/invoices/INV001").await.json();
    assert_eq!(invoice["status"], "OVERDUE");

    let resp = server
        .post("/api/invoices")
        .json(&json!({ "customerId": "C002", "items": [] }))
        .await;
    assert_eq!(resp.status_code(), 400);
}

#[tokio::test]
async fn blog_publish_and_delete() {
    let server = server();

    let resp = server
        .post("/api/blog/posts")
        .json(&json!({ "title": "No image", "content": "Body" }))
        .await;
    assert_eq!(resp.status_code(), 400);

    let resp = server
        .post("/api/blog/posts")
        .json(&json!({
            "title": "Harmattan Dust and Your Air Filter",
            "content": "Change it more often.",
            "image": "data:image/png;base64,aGVsbG8="
        }))
        .await;
    assert_eq!(resp.status_code(), 201);
    let post: Value = resp.json();
    assert_eq!(post["category"], "General");
    assert_eq!(post["readTime"], "3 min read");
    let id = post["id"].as_str().unwrap().to_string();

    let posts: Vec<Value> = server.get("/api/blog/posts").await.json();
    assert_eq!(posts.len(), 3);
    assert_eq!(posts[0]["id"], id.as_str());

    let resp = server.delete(&format!("/api/blog/posts/{id}")).await;
    assert_eq!(resp.status_code(), 204);
    let resp = server.delete(&format!("/api/blog/posts/{id}")).await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn assistant_endpoints_with_model() {
    let server = server();

    let resp = server
        .post("/api/jobs/diagnose")
        .json(&json!({ "complaint": "Grinding noise when braking" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let diagnosis: Value = resp.json();
    assert_eq!(diagnosis["estimatedCostRange"], "₵400 - ₵600");

    let resp = server
        .post("/api/blog/generate")
        .json(&json!({ "topic": "tyres in the rainy season" }))
        .await;
    assert_eq!(resp.status_code(), 200);
    let draft: Value = resp.json();
    assert_eq!(draft["imagePrompt"], "Mechanic inspecting a tyre in Accra");
    assert!(draft["date"].is_string());

    let resp = server
        .post("/api/blog/image")
        .json(&json!({ "prompt": "Mechanic inspecting a tyre" }))
        .await;
    let body: Value = resp.json();
    assert_eq!(body["image"], "data:image/png;base64,aGVsbG8=");

    let body: Value = server.get("/api/inventory/I002/prediction").await.json();
    assert_eq!(body["itemId"], "I002");
    assert_eq!(body["prediction"], "Reorder within two weeks.");

    let body: Value = server.get("/api/dashboard/insights").await.json();
    assert_eq!(body["insights"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn assistant_without_key() {
    let server = unconfigured_server();

    let resp = server
        .post("/api/jobs/diagnose")
        .json(&json!({ "complaint": "Grinding noise when braking" }))
        .await;
    assert_eq!(resp.status_code(), 503);

    let resp = server
        .post("/api/jobs/diagnose")
        .json(&json!({ "complaint": "   " }))
        .await;
    assert_eq!(resp.status_code(), 400);

    // Fallbacks keep these endpoints answering.
    let body: Value = server.get("/api/dashboard/insights").await.json();
    assert_eq!(body["insights"].as_array().unwrap().len(), 3);

    let body: Value = server.get("/api/inventory/I001/prediction").await.json();
    assert_eq!(body["prediction"], "Inventory prediction unavailable.");

    let resp = server.get("/api/inventory/I404/prediction").await;
    assert_eq!(resp.status_code(), 404);
}

#[tokio::test]
async fn dashboard_summary_counts() {
    let server = server();

    let summary: Value = server.get("/api/dashboard").await.json();
    assert_eq!(summary["totalJobs"], 3);
    assert_eq!(summary["pendingJobs"], 1);
    assert_eq!(summary["inProgressJobs"], 1);
    assert_eq!(summary["completedJobs"], 1);
    assert_eq!(summary["lowStockCount"], 1);
    assert_eq!(summary["openInvoices"], 0);
}
