use catalogbot_catalog::{Catalog, SeedCatalog};
use catalogbot_reply::{ReplyConfig, FALLBACK_TEXT, NO_MATCH_TEXT};
use catalogbot_server::{build_app, AppState};
use pretty_assertions::assert_eq;
use reqwest::StatusCode;
use serde_json::{json, Value};

struct TestServer {
    base_url: String,
    client: reqwest::Client,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    async fn spawn() -> Self {
        // Same router as prod, bound to an ephemeral port.
        let catalog = Catalog::load(&SeedCatalog).unwrap();
        let app = build_app(AppState::new(catalog, ReplyConfig::default()));
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            client: reqwest::Client::new(),
            handle,
        }
    }

    async fn fulfill(&self, intent: &str, parameters: Value) -> String {
        let res = self
            .client
            .post(format!("{}/webhook", self.base_url))
            .json(&json!({
                "queryResult": {
                    "intent": { "displayName": intent },
                    "parameters": parameters,
                }
            }))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::OK);

        let body: Value = res.json().await.unwrap();
        body["fulfillmentText"].as_str().unwrap().to_string()
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[tokio::test]
async fn phones_under_price_ceiling() {
    let server = TestServer::spawn().await;
    let text = server
        .fulfill(
            "search_product",
            json!({ "category": ["phones"], "price": ["50000"] }),
        )
        .await;
    assert_eq!(
        text,
        "Here are some products you may like: Samsung Galaxy S21 (₹45000), Samsung A52 (₹26000)"
    );
}

#[tokio::test]
async fn smartwatches_synonym() {
    let server = TestServer::spawn().await;
    let text = server
        .fulfill("search_product", json!({ "category": ["smartwatches"] }))
        .await;
    assert_eq!(
        text,
        "Here are some products you may like: Boat Xtend Smartwatch (₹2999), Apple Watch SE (₹29900)"
    );
}

#[tokio::test]
async fn brand_and_feature() {
    let server = TestServer::spawn().await;
    let text = server
        .fulfill(
            "search_product",
            json!({ "brand": ["Sony"], "features": ["bluetooth"] }),
        )
        .await;
    assert_eq!(
        text,
        "Here are some products you may like: Sony WH-1000XM4 (₹24000)"
    );
}

#[tokio::test]
async fn other_intent_falls_back() {
    let server = TestServer::spawn().await;
    let text = server.fulfill("Default Welcome Intent", json!({})).await;
    assert_eq!(text, FALLBACK_TEXT);
}

#[tokio::test]
async fn unknown_category_has_no_matches() {
    let server = TestServer::spawn().await;
    let text = server
        .fulfill("search_product", json!({ "category": ["spaceship"] }))
        .await;
    assert_eq!(text, NO_MATCH_TEXT);
}

#[tokio::test]
async fn scalar_parameters_and_bad_price() {
    let server = TestServer::spawn().await;

    // Numeric price, scalar category
    let text = server
        .fulfill("search_product", json!({ "category": "Laptops", "price": 50000 }))
        .await;
    assert_eq!(
        text,
        "Here are some products you may like: Dell Inspiron 3501 (₹47000)"
    );

    // Non-numeric price disables the price filter
    let text = server
        .fulfill("search_product", json!({ "category": "laptop", "price": "cheap" }))
        .await;
    assert_eq!(
        text,
        "Here are some products you may like: HP Pavilion 15 (₹52000), Dell Inspiron 3501 (₹47000)"
    );
}

#[tokio::test]
async fn health_and_malformed_payload() {
    let server = TestServer::spawn().await;

    let res = server
        .client
        .get(format!("{}/health", server.base_url))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let res = server
        .client
        .post(format!("{}/webhook", server.base_url))
        .json(&json!({ "queryResult": {} }))
        .send()
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}
