//! Integration tests for the crawler
//!
//! These tests use wiremock to create mock HTTP servers and test
//! the full crawl cycle end-to-end.

use product_scout::config::{load_config, Config, CrawlerConfig, OutputConfig};
use product_scout::crawler::{crawl, Coordinator};
use product_scout::output::write_results;
use product_scout::url::Domain;
use std::io::Write;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration crawling the given domains
fn create_test_config(domains: Vec<String>, results_path: &str) -> Config {
    Config {
        domains,
        crawler: CrawlerConfig {
            timeout_secs: 1,
            user_agent: "TestScout/1.0".to_string(),
            ..CrawlerConfig::default()
        },
        output: OutputConfig {
            results_path: results_path.to_string(),
        },
    }
}

/// Mounts an HTML page that must be requested exactly `times` times
async fn mount_page(server: &MockServer, page: &str, body: String, times: u64) {
    Mock::given(method("GET"))
        .and(path(page))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(body)
                .insert_header("content-type", "text/html"),
        )
        .expect(times)
        .mount(server)
        .await;
}

fn anchors(hrefs: &[&str]) -> String {
    let links: String = hrefs
        .iter()
        .map(|href| format!(r#"<a href="{}">link</a>"#, href))
        .collect();
    format!("<html><head><title>Shop</title></head><body>{}</body></html>", links)
}

#[tokio::test]
async fn test_reference_scenario() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        anchors(&[&format!("{}/item/1", base_url), &format!("{}/about", base_url)]),
        1,
    )
    .await;
    mount_page(
        &server,
        "/about",
        anchors(&["http://other.test/item/2", &format!("{}/", base_url)]),
        1,
    )
    .await;
    // Product pages are collected, never fetched
    mount_page(&server, "/item/1", anchors(&[]), 0).await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    assert_eq!(
        result.products(&base_url),
        Some(vec![format!("{}/item/1", base_url).as_str()])
    );
}

#[tokio::test]
async fn test_root_timeout_yields_empty_products() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string(anchors(&["/item/1"]))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    assert_eq!(result.products(&base_url), Some(vec![]));
    assert_eq!(result.outcomes()[0].pages_absent, 1);
}

#[tokio::test]
async fn test_root_server_error_yields_empty_products() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    assert_eq!(result.products(&base_url), Some(vec![]));
}

#[tokio::test]
async fn test_duplicate_product_link_listed_once() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(
        &server,
        "/",
        anchors(&["/product/42", "/category", "/product/42"]),
        1,
    )
    .await;
    mount_page(&server, "/category", anchors(&["/product/42", "/product/43"]), 1).await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    let product_42 = format!("{}/product/42", base_url);
    let product_43 = format!("{}/product/43", base_url);
    assert_eq!(
        result.products(&base_url),
        Some(vec![product_42.as_str(), product_43.as_str()])
    );
}

#[tokio::test]
async fn test_broken_page_mid_crawl_is_skipped() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", anchors(&["/gone", "/shelf"]), 1).await;
    Mock::given(method("GET"))
        .and(path("/gone"))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;
    mount_page(&server, "/shelf", anchors(&["/p/7", "/gone"]), 1).await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    let product = format!("{}/p/7", base_url);
    assert_eq!(result.products(&base_url), Some(vec![product.as_str()]));

    let outcome = &result.outcomes()[0];
    assert_eq!(outcome.pages_fetched, 2);
    assert_eq!(outcome.pages_absent, 1);
}

#[tokio::test]
async fn test_two_domains_crawled_independently() {
    let shop_a = MockServer::start().await;
    let shop_b = MockServer::start().await;
    let base_a = shop_a.uri();
    let base_b = shop_b.uri();

    // Cross links between the shops must be ignored
    mount_page(
        &shop_a,
        "/",
        anchors(&["/item/a1", &format!("{}/item/b9", base_b)]),
        1,
    )
    .await;
    mount_page(
        &shop_b,
        "/",
        anchors(&["/catalogue/b1", &format!("{}/item/a9", base_a)]),
        1,
    )
    .await;

    let config = create_test_config(vec![base_a.clone(), base_b.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    let a1 = format!("{}/item/a1", base_a);
    let b1 = format!("{}/catalogue/b1", base_b);
    assert_eq!(result.products(&base_a), Some(vec![a1.as_str()]));
    assert_eq!(result.products(&base_b), Some(vec![b1.as_str()]));
}

#[tokio::test]
async fn test_unreachable_domain_does_not_affect_others() {
    let shop = MockServer::start().await;
    let base_url = shop.uri();
    mount_page(&shop, "/", anchors(&["/item/1"]), 1).await;

    let down = MockServer::start().await;
    let down_url = down.uri();
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&down)
        .await;

    let config = create_test_config(vec![down_url.clone(), base_url.clone()], "unused.json");
    let result = crawl(&config).await.expect("Crawl failed");

    let product = format!("{}/item/1", base_url);
    assert_eq!(result.products(&down_url), Some(vec![]));
    assert_eq!(result.products(&base_url), Some(vec![product.as_str()]));
}

#[tokio::test]
async fn test_coordinator_with_custom_patterns() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", anchors(&["/dp/B001", "/item/1"]), 1).await;
    mount_page(&server, "/item/1", anchors(&["/dp/B002"]), 1).await;

    let crawler_config = CrawlerConfig {
        timeout_secs: 1,
        product_patterns: vec!["/dp/".to_string()],
        ..CrawlerConfig::default()
    };
    let coordinator = Coordinator::from_config(&crawler_config).unwrap();
    let domains = vec![Domain::parse(&base_url).unwrap()];
    let result = coordinator.crawl_all(&domains).await;

    let first = format!("{}/dp/B001", base_url);
    let second = format!("{}/dp/B002", base_url);
    assert_eq!(
        result.products(&base_url),
        Some(vec![first.as_str(), second.as_str()])
    );
}

#[tokio::test]
async fn test_results_file_end_to_end() {
    let shop_a = MockServer::start().await;
    let shop_b = MockServer::start().await;
    let base_a = shop_a.uri();
    let base_b = shop_b.uri();

    mount_page(&shop_a, "/", anchors(&["/item/2", "/item/1"]), 1).await;
    mount_page(&shop_b, "/", anchors(&["/about"]), 1).await;
    mount_page(&shop_b, "/about", anchors(&[]), 1).await;

    let dir = tempfile::tempdir().unwrap();
    let results_path = dir.path().join("product_urls.json");

    // Written through a config file, as the CLI would
    let mut config_file = tempfile::NamedTempFile::new().unwrap();
    write!(
        config_file,
        r#"
domains = ["{}", "{}"]

[crawler]
timeout-secs = 2

[output]
results-path = "{}"
"#,
        base_b,
        base_a,
        results_path.display()
    )
    .unwrap();
    config_file.flush().unwrap();

    let config = load_config(config_file.path()).expect("Failed to load config");
    let result = crawl(&config).await.expect("Crawl failed");
    write_results(&result, std::path::Path::new(&config.output.results_path))
        .await
        .expect("Failed to write results");

    let written = std::fs::read_to_string(&results_path).unwrap();
    let expected = format!(
        "{{\n    \"{b}\": [],\n    \"{a}\": [\n        \"{a}/item/2\",\n        \"{a}/item/1\"\n    ]\n}}",
        a = base_a,
        b = base_b
    );
    assert_eq!(written, expected);

    let value: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(value.as_object().unwrap().len(), 2);
}

#[tokio::test]
async fn test_repeat_crawl_is_identical() {
    let server = MockServer::start().await;
    let base_url = server.uri();

    mount_page(&server, "/", anchors(&["/a", "/item/1", "/b"]), 2).await;
    mount_page(&server, "/a", anchors(&["/item/2", "/b", "/"]), 2).await;
    mount_page(&server, "/b", anchors(&["/item/3", "/a"]), 2).await;

    let config = create_test_config(vec![base_url.clone()], "unused.json");
    let first = crawl(&config).await.expect("Crawl failed");
    let second = crawl(&config).await.expect("Crawl failed");

    assert_eq!(first.products(&base_url), second.products(&base_url));
    assert_eq!(first.products(&base_url).map(|p| p.len()), Some(3));
}
