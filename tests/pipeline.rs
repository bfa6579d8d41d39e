//! End-to-end tests driving the full pipeline over local HTTP.

use std::collections::BTreeSet;
use std::fs;
use std::time::Duration;

use tempfile::tempdir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bogsweep::config::Config;
use bogsweep::error::FetchError;
use bogsweep::fetcher::HttpFetcher;
use bogsweep::pipeline;

fn index_html(base: &str) -> String {
    format!(
        r#"<html><body>
        <h2>Advertising Lists</h2>
        <ul>
            <li class="bdCross"><a href="{base}/info/bd">bdCross:</a>
                <a href="{base}/lists/bd.txt">raw</a></li>
            <li><a href="{base}/info/ads">AdList:</a>
                <a href="{base}/lists/ads.txt">raw</a></li>
            <li><a href="{base}/info/dead">DeadList:</a>
                <a href="{base}/lists/dead.txt">raw</a></li>
        </ul>
        <h2>Malicious Lists</h2>
        <ul>
            <li><a href="{base}/info/mal">MalList:</a>
                <a href="{base}/lists/mal.txt">raw</a></li>
        </ul>
        </body></html>"#
    )
}

async fn mount_text(server: &MockServer, route: &str, body: &str) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(server)
        .await;
}

fn test_config(server: &MockServer, dir: &std::path::Path, categories: &[&str]) -> Config {
    Config {
        index_url: server.uri(),
        categories: categories.iter().map(|s| s.to_string()).collect(),
        output_dir: dir.to_path_buf(),
        timeout_secs: 5,
        ..Config::default()
    }
}

#[tokio::test]
async fn full_run_writes_deduplicated_category_files() {
    let server = MockServer::start().await;
    mount_text(&server, "/", &index_html(&server.uri())).await;
    mount_text(
        &server,
        "/lists/ads.txt",
        "x.com\n# comment\ny.com # trailing\nx.com\n",
    )
    .await;
    // dead.txt is not mounted: wiremock answers 404.
    mount_text(&server, "/lists/mal.txt", "x.com\nevil.com\n").await;

    let dir = tempdir().unwrap();
    let config = test_config(&server, dir.path(), &["Advertising Lists", "Malicious Lists"]);
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();

    let summary = pipeline::run(&config, &fetcher).await.unwrap();

    assert!(summary.missing.is_empty());
    assert_eq!(summary.total_unique, 3);
    assert_eq!(summary.failed_sources(), 1);

    let ads = &summary.reports[0].result;
    assert_eq!(ads.category.excluded, vec!["bdCross".to_string()]);
    // Excluded member never fetched; only AdList and DeadList have outcomes.
    assert_eq!(ads.outcomes.len(), 2);
    assert_eq!(*ads.outcomes[0].result.as_ref().unwrap(), 2);
    assert!(matches!(
        ads.outcomes[1].result,
        Err(FetchError::Unreachable { .. })
    ));
    let expected: BTreeSet<String> = ["x.com", "y.com"].iter().map(|s| s.to_string()).collect();
    assert_eq!(ads.novel, expected);

    // x.com belongs to the first category; the second only gets evil.com.
    let mal = fs::read_to_string(dir.path().join("malicious_lists.txt")).unwrap();
    assert_eq!(mal, "evil.com");
    let ads_file = fs::read_to_string(dir.path().join("advertising_lists.txt")).unwrap();
    assert_eq!(ads_file, "x.com\ny.com");
}

#[tokio::test]
async fn oversized_category_is_split_into_parts() {
    let server = MockServer::start().await;
    mount_text(&server, "/", &index_html(&server.uri())).await;
    mount_text(&server, "/lists/ads.txt", "a.com\nb.com\nc.com\n").await;
    mount_text(&server, "/lists/dead.txt", "").await;

    let dir = tempdir().unwrap();
    let mut config = test_config(&server, dir.path(), &["Advertising Lists"]);
    config.split_threshold = 6;
    let fetcher = HttpFetcher::new(config.timeout()).unwrap();

    let summary = pipeline::run(&config, &fetcher).await.unwrap();

    let artifacts = &summary.reports[0].artifacts;
    assert_eq!(artifacts.len(), 3);
    assert!(!dir.path().join("advertising_lists.txt").exists());

    let mut joined = String::new();
    for artifact in artifacts {
        joined.push_str(&fs::read_to_string(&artifact.path).unwrap());
    }
    assert_eq!(joined, "a.com\nb.com\nc.com");
}

#[tokio::test]
async fn slow_source_times_out_and_run_continues() {
    let server = MockServer::start().await;
    mount_text(&server, "/", &index_html(&server.uri())).await;
    Mock::given(method("GET"))
        .and(path("/lists/ads.txt"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("slow.com\n")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;
    mount_text(&server, "/lists/dead.txt", "fast.com\n").await;
    mount_text(&server, "/lists/mal.txt", "evil.com\n").await;

    let dir = tempdir().unwrap();
    let config = test_config(&server, dir.path(), &["Advertising Lists", "Malicious Lists"]);
    // Client timeout well below the mocked delay.
    let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();

    let summary = pipeline::run(&config, &fetcher).await.unwrap();

    let ads = &summary.reports[0].result;
    assert!(matches!(
        ads.outcomes[0].result,
        Err(FetchError::Timeout { .. })
    ));
    // Later sources and categories still processed.
    assert!(ads.novel.contains("fast.com"));
    assert!(summary.reports[1].result.novel.contains("evil.com"));
}

#[tokio::test]
async fn unreachable_index_aborts_run() {
    let dir = tempdir().unwrap();
    let config = Config {
        // RFC 5737 test address, nothing listens there.
        index_url: "http://192.0.2.1:9/".to_string(),
        categories: vec!["Advertising Lists".to_string()],
        output_dir: dir.path().to_path_buf(),
        ..Config::default()
    };
    let fetcher = HttpFetcher::new(Duration::from_millis(200)).unwrap();

    assert!(pipeline::run(&config, &fetcher).await.is_err());
}
