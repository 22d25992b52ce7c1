use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use clap::Parser;
use serde_json::{Value, json};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::Duration;
use tokio::sync::Notify;

use storefront::{Cli, Config, run_listing};
use storefront_core::{
    Catalog, FETCH_ERROR_MESSAGE, FetchFailure, HttpCatalog, LISTING_HEADING, Liveness,
    LoadOutcome, Product, SKELETON_COUNT,
};

type Hits = Arc<AtomicUsize>;

/// Helper to serve a fake Catalog Service on an ephemeral port.
/// Returns the listing URL and a counter of requests received.
async fn spawn_catalog(status: StatusCode, body: Value) -> (String, Hits) {
    let hits: Hits = Arc::new(AtomicUsize::new(0));

    let app = Router::new()
        .route(
            "/products",
            get(move |State(hits): State<Hits>| {
                let body = body.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    (status, Json(body)).into_response()
                }
            }),
        )
        .with_state(hits.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}/products", addr), hits)
}

/// Helper to serve a raw, non-JSON body.
async fn spawn_raw_catalog(body: &'static str) -> String {
    let app = Router::new().route("/products", get(move || async move { body }));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}/products", addr)
}

/// Helper to get a URL nothing is listening on.
async fn unreachable_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}/products", addr)
}

fn config_for(url: &str, extra: &[&str]) -> Config {
    let mut argv = vec!["storefront", "--catalog-url", url, "--no-color"];
    argv.extend_from_slice(extra);
    Config::from_cli(Cli::parse_from(argv)).unwrap()
}

fn sample_listing() -> Value {
    json!([
        {
            "id": 1,
            "title": "Fjallraven - Foldsack No. 1 Backpack",
            "price": 109.95,
            "description": "Your perfect pack for everyday use",
            "category": "men's clothing",
            "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
            "rating": { "rate": 3.9, "count": 120 }
        },
        {
            "id": 2,
            "title": "Mens Casual Premium Slim Fit T-Shirts",
            "price": 22.3,
            "image": "https://fakestoreapi.com/img/71-3HjGNDUL._AC_SY879._SX._UX._SY._UY_.jpg",
            "rating": { "rate": 4.1, "count": 259 }
        },
        {
            "id": 3,
            "title": "Mens Cotton Jacket",
            "price": 55.99
        }
    ])
}

/// Catalog whose response is held until the test releases it.
struct GatedCatalog {
    started: Notify,
    release: Notify,
    completed: AtomicBool,
    products: Vec<Product>,
}

impl GatedCatalog {
    fn new(products: Value) -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
            completed: AtomicBool::new(false),
            products: serde_json::from_value(products).unwrap(),
        }
    }
}

impl Catalog for GatedCatalog {
    async fn fetch_products(&self) -> Result<Vec<Product>, FetchFailure> {
        self.started.notify_one();
        self.release.notified().await;
        self.completed.store(true, Ordering::SeqCst);
        Ok(self.products.clone())
    }
}

// ============================================================================
// HTTP Catalog Tests
// ============================================================================

#[tokio::test]
async fn test_http_catalog_decodes_listing_in_order() {
    let (url, hits) = spawn_catalog(StatusCode::OK, sample_listing()).await;
    let catalog = HttpCatalog::new(url);

    let products = catalog.fetch_products().await.unwrap();

    assert_eq!(products.iter().map(|p| p.id).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(products[0].review_count(), 120);
    assert_eq!(products[1].stars().filled(), 4);
    assert!(products[2].rating.is_none());
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_http_catalog_non_success_status() {
    let (url, _) = spawn_catalog(
        StatusCode::INTERNAL_SERVER_ERROR,
        json!({ "error": "internal", "message": "boom" }),
    )
    .await;
    let catalog = HttpCatalog::new(url);

    let result = catalog.fetch_products().await;

    assert_eq!(result, Err(FetchFailure::Status(500)));
}

#[tokio::test]
async fn test_http_catalog_wrong_shape_is_malformed() {
    let (url, _) = spawn_catalog(StatusCode::OK, json!({ "products": [] })).await;
    let catalog = HttpCatalog::new(url);

    let result = catalog.fetch_products().await;

    assert!(matches!(result, Err(FetchFailure::Malformed(_))));
}

#[tokio::test]
async fn test_http_catalog_malformed_record_fails_whole_listing() {
    let (url, _) = spawn_catalog(
        StatusCode::OK,
        json!([
            { "id": 1, "title": "Shirt", "price": 19.99 },
            { "id": 2, "price": 5.0 }
        ]),
    )
    .await;
    let catalog = HttpCatalog::new(url);

    let result = catalog.fetch_products().await;

    assert!(matches!(result, Err(FetchFailure::Malformed(_))));
}

#[tokio::test]
async fn test_http_catalog_non_json_body() {
    let url = spawn_raw_catalog("<html>maintenance</html>").await;
    let catalog = HttpCatalog::new(url);

    let result = catalog.fetch_products().await;

    assert!(matches!(result, Err(FetchFailure::Malformed(_))));
}

#[tokio::test]
async fn test_http_catalog_unreachable() {
    let catalog = HttpCatalog::new(unreachable_url().await);

    let result = catalog.fetch_products().await;

    assert!(matches!(result, Err(FetchFailure::Request(_))));
}

// ============================================================================
// Terminal Listing Tests
// ============================================================================

#[tokio::test]
async fn test_run_listing_success_renders_cards() {
    let (url, hits) =
        spawn_catalog(StatusCode::OK, json!([{ "id": 1, "title": "Shirt", "price": 19.99 }])).await;
    let config = config_for(&url, &[]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let outcome = run_listing(&config, &catalog, &liveness, &mut out).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(1));
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let out = String::from_utf8(out).unwrap();
    let (loading, loaded) = out.split_at(out.find(LISTING_HEADING).unwrap());
    assert!(loading.matches("\n\n").count() >= SKELETON_COUNT);
    assert!(loaded.contains("Shirt"));
    assert!(loaded.contains("☆☆☆☆☆"));
    assert!(loaded.contains("(0 نظر)"));
    assert!(loaded.contains("$19.99"));
    assert!(!loaded.contains('░'));
}

#[tokio::test]
async fn test_run_listing_failure_renders_banner_only() {
    let (url, _) = spawn_catalog(StatusCode::SERVICE_UNAVAILABLE, json!({})).await;
    let config = config_for(&url, &[]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let outcome = run_listing(&config, &catalog, &liveness, &mut out).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Failed);

    let out = String::from_utf8(out).unwrap();
    let banner_at = out.find(FETCH_ERROR_MESSAGE).unwrap();
    assert!(!out[banner_at..].contains('░'));
    assert!(!out.contains(LISTING_HEADING));
}

#[tokio::test]
async fn test_run_listing_unreachable_service_renders_banner() {
    let url = unreachable_url().await;
    let config = config_for(&url, &[]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let outcome = run_listing(&config, &catalog, &liveness, &mut out).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Failed);
    assert!(String::from_utf8(out).unwrap().contains(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_run_listing_unmounted_before_delay_elapses() {
    let (url, hits) = spawn_catalog(StatusCode::OK, sample_listing()).await;
    let config = config_for(&url, &["--delay-ms", "5000"]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    liveness.unmount();
    let mut out = Vec::new();

    let outcome = run_listing(&config, &catalog, &liveness, &mut out).await.unwrap();

    assert_eq!(outcome, LoadOutcome::NotIssued);
    assert_eq!(hits.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_run_listing_unmounted_during_delay_never_requests() {
    let (url, hits) = spawn_catalog(StatusCode::OK, sample_listing()).await;
    let config = config_for(&url, &["--delay-ms", "60000"]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let teardown = liveness.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(20)).await;
        teardown.unmount();
    });

    // Teardown ends the delay early instead of waiting out the full minute.
    let outcome = tokio::time::timeout(
        Duration::from_secs(5),
        run_listing(&config, &catalog, &liveness, &mut out),
    )
    .await
    .expect("teardown did not end the delay")
    .unwrap();

    assert_eq!(outcome, LoadOutcome::NotIssued);
    assert_eq!(hits.load(Ordering::SeqCst), 0);

    let out = String::from_utf8(out).unwrap();
    assert!(!out.contains(LISTING_HEADING));
    assert!(!out.contains(FETCH_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_run_listing_unmounted_mid_fetch_discards_result() {
    let config = config_for("http://127.0.0.1:9/products", &[]);
    let catalog = GatedCatalog::new(sample_listing());
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let teardown = liveness.clone();
    let (outcome, ()) = tokio::join!(run_listing(&config, &catalog, &liveness, &mut out), async {
        catalog.started.notified().await;
        teardown.unmount();
        tokio::time::sleep(Duration::from_millis(100)).await;
        catalog.release.notify_one();
    });

    assert_eq!(outcome.unwrap(), LoadOutcome::Discarded);
    // The request is not cancelled; only its result is dropped.
    assert!(catalog.completed.load(Ordering::SeqCst));

    let out = String::from_utf8(out).unwrap();
    assert!(out.contains('░'));
    assert!(!out.contains(LISTING_HEADING));
    assert!(!out.contains(FETCH_ERROR_MESSAGE));
    assert!(!out.contains("Backpack"));
}

#[tokio::test]
async fn test_run_listing_json_mode() {
    let (url, _) = spawn_catalog(StatusCode::OK, sample_listing()).await;
    let config = config_for(&url, &["--output", "json"]);
    let catalog = config.catalog().unwrap();
    let liveness = Liveness::new();
    let mut out = Vec::new();

    let outcome = run_listing(&config, &catalog, &liveness, &mut out).await.unwrap();

    assert_eq!(outcome, LoadOutcome::Loaded(3));

    let body: Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(body.as_array().unwrap().len(), 3);
    assert_eq!(body[0]["stars"], 3);
    assert_eq!(body[2]["image"], "/placeholder-product.jpg");
    assert_eq!(body[2]["reviews"], 0);
}
