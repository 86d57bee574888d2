use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;
use storefront::catalog::{
    CatalogSource, ErrorKind, PriceValue, TimbuCatalog, TimbuCredentials,
};
use storefront::core::price::{NOT_AVAILABLE, format_price, resolve_display_price};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

// ============================================================================
// Helper Functions
// ============================================================================

fn catalog_for(base_url: String) -> TimbuCatalog {
    let credentials = TimbuCredentials {
        organization_id: Some("org-1".to_string()),
        app_id: Some("test-app".to_string()),
        api_key: Some("test-key".to_string()),
    };
    TimbuCatalog::new(base_url, credentials, 10, Duration::from_secs(5)).unwrap()
}

async fn serve(template: ResponseTemplate) -> MockServer {
    let mock_server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(template)
        .mount(&mock_server)
        .await;
    mock_server
}

/// Accepts one connection, reads the request, and answers with `reply`
/// verbatim before closing.
async fn serve_raw(reply: &'static [u8]) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        if let Ok((mut socket, _)) = listener.accept().await {
            let mut buf = [0u8; 4096];
            let _ = socket.read(&mut buf).await;
            let _ = socket.write_all(reply).await;
            let _ = socket.shutdown().await;
        }
    });
    format!("http://{addr}")
}

const THREE_ITEMS: &str = r#"{
    "page": 1,
    "size": 10,
    "total": 3,
    "items": [
        {
            "id": "b2",
            "name": "Max 90 Flyease",
            "description": "A versatile sneaker.",
            "photos": [{"model_name": "products", "url": "max90.jpg"}],
            "current_price": [{"NGN": [[24000.0, 26000.0]]}]
        },
        {
            "id": "a1",
            "name": "Nike Zoom Pegasus",
            "description": "A great running shoe.",
            "photos": [{"model_name": "products", "url": "pegasus.jpg"}],
            "current_price": [{"NGN": [15000.0, null, []]}]
        },
        {
            "id": "c3",
            "name": "Air Force 1",
            "description": null,
            "photos": [],
            "current_price": []
        }
    ]
}"#;

// ============================================================================
// Success
// ============================================================================

#[tokio::test]
async fn test_fetch_preserves_server_order() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_string(THREE_ITEMS)).await;
    let catalog = catalog_for(mock_server.uri());

    let products = catalog.fetch_products().await.unwrap();

    let ids: Vec<&str> = products.iter().map(|p| p.id.as_str()).collect();
    assert_eq!(ids, vec!["b2", "a1", "c3"]);
}

#[tokio::test]
async fn test_fetch_then_resolve_prices() {
    let mock_server = serve(ResponseTemplate::new(200).set_body_string(THREE_ITEMS)).await;
    let catalog = catalog_for(mock_server.uri());

    let products = catalog.fetch_products().await.unwrap();

    assert_eq!(
        resolve_display_price(&products[0]),
        PriceValue::NumberList(vec![24000.0, 26000.0])
    );
    assert_eq!(resolve_display_price(&products[1]), PriceValue::Number(15000.0));
    let missing = resolve_display_price(&products[2]);
    assert_eq!(missing, PriceValue::Empty);
    assert_eq!(format_price(&missing, "NGN"), NOT_AVAILABLE);
}

#[tokio::test]
async fn test_fetch_sends_credentials_and_page_params() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("organization_id", "org-1"))
        .and(query_param("Appid", "test-app"))
        .and(query_param("Apikey", "test-key"))
        .and(query_param("page", "1"))
        .and(query_param("size", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"items": []}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let catalog = catalog_for(mock_server.uri());
    let products = catalog.fetch_products().await.unwrap();

    assert!(products.is_empty());
}

// ============================================================================
// Failure classification
// ============================================================================

#[tokio::test]
async fn test_non_success_status_is_invalid_response() {
    let mock_server =
        serve(ResponseTemplate::new(401).set_body_string("Invalid API key")).await;
    let catalog = catalog_for(mock_server.uri());

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
    assert!(err.to_string().contains("401"));
}

#[tokio::test]
async fn test_server_error_is_invalid_response() {
    let mock_server = serve(ResponseTemplate::new(500)).await;
    let catalog = catalog_for(mock_server.uri());

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse);
}

#[tokio::test]
async fn test_malformed_json_is_invalid_data() {
    for body in [
        "{not json",
        "",
        r#"{"items": "nope"}"#,
        r#"{"items": [{"name": "missing id"}]}"#,
        "<html>maintenance</html>",
    ] {
        let mock_server = serve(ResponseTemplate::new(200).set_body_string(body)).await;
        let catalog = catalog_for(mock_server.uri());

        let err = catalog.fetch_products().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::InvalidData, "body: {body}");
    }
}

#[tokio::test]
async fn test_malformed_base_url_is_invalid_url() {
    let catalog = catalog_for("::not-a-url::".to_string());

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidUrl);
}

#[tokio::test]
async fn test_unreachable_host_is_unknown() {
    // Nothing listens on port 1; the connection is refused.
    let catalog = catalog_for("http://127.0.0.1:1".to_string());
    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn test_timeout_is_unknown() {
    let mock_server = serve(
        ResponseTemplate::new(200)
            .set_body_string(THREE_ITEMS)
            .set_delay(Duration::from_secs(3)),
    )
    .await;
    let catalog = TimbuCatalog::new(
        mock_server.uri(),
        TimbuCredentials::default(),
        10,
        Duration::from_millis(200),
    )
    .unwrap();

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Unknown);
}

#[tokio::test]
async fn test_non_http_reply_is_invalid_response() {
    let base_url = serve_raw(b"THIS IS NOT HTTP\r\n\r\n").await;
    let catalog = catalog_for(base_url);

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse, "{err}");
}

#[tokio::test]
async fn test_truncated_body_is_invalid_response() {
    let base_url = serve_raw(
        b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 500\r\n\r\n{\"items\": [",
    )
    .await;
    let catalog = catalog_for(base_url);

    let err = catalog.fetch_products().await.unwrap_err();

    assert_eq!(err.kind(), ErrorKind::InvalidResponse, "{err}");
}

#[tokio::test]
async fn test_error_text_never_contains_credentials() {
    let base_url = serve_raw(b"THIS IS NOT HTTP\r\n\r\n").await;
    let catalog = catalog_for(base_url);

    let err = catalog.fetch_products().await.unwrap_err();

    let text = err.to_string();
    assert!(!text.contains("test-key"), "leaked key: {text}");
    assert!(!text.contains("test-app"), "leaked app id: {text}");
}
