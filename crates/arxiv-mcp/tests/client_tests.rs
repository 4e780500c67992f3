//! Client tests: fetch, error classification and request spacing.

mod common;

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio_test::{assert_err, assert_ok};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

use arxiv_mcp::client::ArxivClient;
use arxiv_mcp::config::Config;
use arxiv_mcp::error::ClientError;
use arxiv_mcp::models::SortBy;

use common::{EMPTY_FEED, EntrySpec, SINGLE_ENTRY_FEED, feed};

fn client_for(mock_server: &MockServer, interval: Duration) -> ArxivClient {
    let config = Config {
        min_request_interval: interval,
        ..Config::for_testing(&mock_server.uri())
    };
    ArxivClient::new(config).unwrap()
}

fn query_url(mock_server: &MockServer) -> String {
    format!("{}/api/query?id_list=2105.14022", mock_server.uri())
}

/// Responds with a fixed feed and records when each request arrived.
#[derive(Clone, Default)]
struct ArrivalRecorder {
    arrivals: Arc<Mutex<Vec<Instant>>>,
}

impl ArrivalRecorder {
    fn arrivals(&self) -> Vec<Instant> {
        let mut arrivals = self.arrivals.lock().unwrap().clone();
        arrivals.sort();
        arrivals
    }
}

impl Respond for ArrivalRecorder {
    fn respond(&self, _request: &Request) -> ResponseTemplate {
        self.arrivals.lock().unwrap().push(Instant::now());
        ResponseTemplate::new(200).set_body_string(EMPTY_FEED)
    }
}

// =============================================================================
// Fetch + Normalize
// =============================================================================

#[tokio::test]
async fn test_fetch_arxiv_normalizes_feed() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "application/atom+xml")
                .set_body_string(SINGLE_ENTRY_FEED),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let papers = client.fetch_arxiv(&query_url(&mock_server)).await.unwrap();

    assert_eq!(papers.len(), 1);
    assert_eq!(papers[0].id, "2105.14022v1");
    assert_eq!(papers[0].authors, vec!["Albert Einstein", "Niels Bohr"]);
}

#[tokio::test]
async fn test_content_type_is_ignored() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("Content-Type", "text/plain")
                .set_body_string(SINGLE_ENTRY_FEED),
        )
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    assert_eq!(client.fetch_arxiv(&query_url(&mock_server)).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_fetch_returns_raw_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed/>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    assert_eq!(client.fetch(&query_url(&mock_server)).await.unwrap(), "<feed/>");
}

#[tokio::test]
async fn test_empty_feed_is_ok() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let papers = assert_ok!(client.fetch_arxiv(&query_url(&mock_server)).await);
    assert!(papers.is_empty());
}

// =============================================================================
// Error Classification
// =============================================================================

#[tokio::test]
async fn test_not_found_is_fetch_error_and_body_is_not_parsed() {
    let mock_server = MockServer::start().await;

    // A body that would fail to parse: a ParseError here would mean the
    // normalizer ran after the failed fetch.
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(404).set_body_string("<html><body>missing"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let err = assert_err!(client.fetch_arxiv(&query_url(&mock_server)).await);

    match err {
        ClientError::Fetch { status, ref status_text } => {
            assert_eq!(status, 404);
            assert_eq!(status_text, "Not Found");
        }
        other => panic!("expected fetch error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_server_error_is_fetch_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let err = client.fetch(&query_url(&mock_server)).await.unwrap_err();
    assert_eq!(err.status(), Some(503));
    assert_eq!(err.to_string(), "ArXiv API error: 503 Service Unavailable");
}

#[tokio::test]
async fn test_unreachable_host_is_network_error() {
    // Port 1 is reserved and refuses connections.
    let client = ArxivClient::new(Config::for_testing("http://127.0.0.1:1")).unwrap();
    let err = client.fetch_arxiv("http://127.0.0.1:1/api/query").await.unwrap_err();
    assert!(err.is_network(), "expected network error, got {err:?}");
}

#[tokio::test]
async fn test_malformed_body_is_parse_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<feed><entry><id>1</id></feed>"))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let err = client.fetch_arxiv(&query_url(&mock_server)).await.unwrap_err();
    assert!(err.is_parse(), "expected parse error, got {err:?}");
}

// =============================================================================
// Query Builders
// =============================================================================

#[tokio::test]
async fn test_search_sends_query_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/query"))
        .and(query_param("search_query", "au:einstein"))
        .and(query_param("max_results", "25"))
        .and(query_param("sortBy", "relevance"))
        .and(query_param("sortOrder", "descending"))
        .respond_with(ResponseTemplate::new(200).set_body_string(feed(&[
            EntrySpec::new("1905.00001v1", "Relativity"),
            EntrySpec::new("1905.00002v1", "Photons"),
        ])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let papers = client.search("au:einstein", 25, SortBy::Relevance).await.unwrap();
    assert_eq!(papers.len(), 2);
}

#[tokio::test]
async fn test_search_category_prefixes_cat() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("search_query", "cat:cs.AI"))
        .and(query_param("sortBy", "submittedDate"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    assert!(client.search_category("cs.AI", 10, SortBy::SubmittedDate).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_paper_returns_first_entry_or_none() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(query_param("id_list", "2105.14022"))
        .respond_with(ResponseTemplate::new(200).set_body_string(SINGLE_ENTRY_FEED))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id_list", "0000.00000"))
        .respond_with(ResponseTemplate::new(200).set_body_string(EMPTY_FEED))
        .mount(&mock_server)
        .await;

    let client = client_for(&mock_server, Duration::ZERO);
    let paper = client.get_paper("2105.14022").await.unwrap().unwrap();
    assert_eq!(paper.title, "Mock Physics Paper Title");
    assert!(client.get_paper("0000.00000").await.unwrap().is_none());
}

// =============================================================================
// Request Spacing
// =============================================================================

#[tokio::test]
async fn test_sequential_fetches_are_spaced() {
    let mock_server = MockServer::start().await;
    let recorder = ArrivalRecorder::default();

    Mock::given(method("GET")).respond_with(recorder.clone()).mount(&mock_server).await;

    let interval = Duration::from_millis(300);
    let client = client_for(&mock_server, interval);
    let url = query_url(&mock_server);

    client.fetch_arxiv(&url).await.unwrap();
    client.fetch_arxiv(&url).await.unwrap();

    let arrivals = recorder.arrivals();
    assert_eq!(arrivals.len(), 2);
    assert!(arrivals[1] - arrivals[0] >= interval, "gap was {:?}", arrivals[1] - arrivals[0]);
}

#[tokio::test]
async fn test_failed_fetch_still_delays_next_request() {
    let mock_server = MockServer::start().await;
    let recorder = ArrivalRecorder::default();

    Mock::given(method("GET"))
        .and(query_param("id_list", "bad"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(query_param("id_list", "good"))
        .respond_with(recorder.clone())
        .mount(&mock_server)
        .await;

    let interval = Duration::from_millis(300);
    let client = client_for(&mock_server, interval);

    let started = Instant::now();
    assert!(client.get_paper("bad").await.is_err());
    client.get_paper("good").await.unwrap();

    // The failed attempt is stamped after it started, so the next request
    // cannot arrive sooner than one interval after that.
    let arrivals = recorder.arrivals();
    assert_eq!(arrivals.len(), 1);
    assert!(arrivals[0] - started >= interval, "gap was {:?}", arrivals[0] - started);
}

#[tokio::test]
async fn test_concurrent_fetches_share_one_clock() {
    let mock_server = MockServer::start().await;
    let recorder = ArrivalRecorder::default();

    Mock::given(method("GET")).respond_with(recorder.clone()).mount(&mock_server).await;

    let interval = Duration::from_millis(200);
    let client = client_for(&mock_server, interval);
    let url = query_url(&mock_server);

    let handles: Vec<_> = (0..3)
        .map(|_| {
            let client = client.clone();
            let url = url.clone();
            tokio::spawn(async move { client.fetch_arxiv(&url).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let arrivals = recorder.arrivals();
    assert_eq!(arrivals.len(), 3);
    for pair in arrivals.windows(2) {
        assert!(pair[1] - pair[0] >= interval, "gap was {:?}", pair[1] - pair[0]);
    }
}
