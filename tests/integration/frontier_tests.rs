use crate::{create_test_config, mount_search_page, mount_search_page_expecting, search_page};
use folio_scout::crawler::Scraper;
use std::time::{Duration, Instant};
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn collect_urls(scraper: &Scraper, keyword: &str) -> Vec<String> {
    let mut frontier = scraper.frontier(keyword);
    let mut urls = Vec::new();
    while let Some(url) = frontier.next_url().await {
        urls.push(url.to_string());
    }
    urls
}

#[tokio::test]
async fn test_frontier_filters_denylisted_paths() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice", "/bob", "/search"])),
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 1)).expect("Failed to build scraper");
    let urls = collect_urls(&scraper, "designer").await;

    assert_eq!(
        urls,
        vec![format!("{}/alice", base_url), format!("{}/bob", base_url)]
    );
}

#[tokio::test]
async fn test_frontier_stops_when_page_fetch_fails() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice", "/bob"])),
    )
    .await;
    mount_search_page_expecting(&mock_server, 2, ResponseTemplate::new(500), 1).await;
    mount_search_page_expecting(
        &mock_server,
        3,
        ResponseTemplate::new(200).set_body_string(search_page(&["/carol"])),
        0,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 5)).expect("Failed to build scraper");
    let urls = collect_urls(&scraper, "designer").await;

    assert_eq!(
        urls,
        vec![format!("{}/alice", base_url), format!("{}/bob", base_url)]
    );
}

#[tokio::test]
async fn test_frontier_stops_on_page_without_candidates() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice"])),
    )
    .await;
    mount_search_page_expecting(
        &mock_server,
        2,
        ResponseTemplate::new(200).set_body_string(search_page(&["/gallery/1/x", "/search"])),
        1,
    )
    .await;
    mount_search_page_expecting(
        &mock_server,
        3,
        ResponseTemplate::new(200).set_body_string(search_page(&["/carol"])),
        0,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 5)).expect("Failed to build scraper");
    let urls = collect_urls(&scraper, "designer").await;

    assert_eq!(urls, vec![format!("{}/alice", base_url)]);
}

#[tokio::test]
async fn test_frontier_respects_page_budget() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for page in 1..=2 {
        let profile_path = format!("/user{}", page);
        mount_search_page_expecting(
            &mock_server,
            page,
            ResponseTemplate::new(200).set_body_string(search_page(&[profile_path.as_str()])),
            1,
        )
        .await;
    }
    mount_search_page_expecting(
        &mock_server,
        3,
        ResponseTemplate::new(200).set_body_string(search_page(&["/user3"])),
        0,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 2)).expect("Failed to build scraper");
    let urls = collect_urls(&scraper, "designer").await;

    assert_eq!(
        urls,
        vec![format!("{}/user1", base_url), format!("{}/user2", base_url)]
    );
}

#[tokio::test]
async fn test_frontier_pauses_between_pages_only() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    for page in 1..=2 {
        let profile_path = format!("/user{}", page);
        mount_search_page(
            &mock_server,
            page,
            ResponseTemplate::new(200).set_body_string(search_page(&[profile_path.as_str()])),
        )
        .await;
    }

    let mut config = create_test_config(&base_url, 2);
    config.delay_range = (0.3, 0.3);
    let scraper = Scraper::new(config).expect("Failed to build scraper");
    let mut frontier = scraper.frontier("designer");
    let delay = Duration::from_millis(300);

    let start = Instant::now();
    assert!(frontier.next_url().await.is_some());
    let first_page = start.elapsed();

    assert!(frontier.next_url().await.is_some());
    let second_page = start.elapsed();

    assert!(frontier.next_url().await.is_none());
    let finished = start.elapsed();

    assert!(first_page < delay, "first page waited {:?}", first_page);
    assert!(
        second_page - first_page >= delay,
        "second page came after {:?}",
        second_page - first_page
    );
    assert!(
        finished - second_page < delay,
        "paused {:?} after the last page",
        finished - second_page
    );
    assert_eq!(frontier.pages_visited(), 2);
}

#[tokio::test]
async fn test_frontier_yields_repeats_across_pages() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice", "/alice", "/bob"])),
    )
    .await;
    mount_search_page(
        &mock_server,
        2,
        ResponseTemplate::new(200).set_body_string(search_page(&["/bob"])),
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 2)).expect("Failed to build scraper");
    let urls = collect_urls(&scraper, "designer").await;

    assert_eq!(
        urls,
        vec![
            format!("{}/alice", base_url),
            format!("{}/bob", base_url),
            format!("{}/bob", base_url)
        ]
    );
}

#[tokio::test]
async fn test_frontier_sends_keyword_query() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("search", "logo design"))
        .and(query_param("page", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_string(search_page(&["/dana"])))
        .expect(1)
        .mount(&mock_server)
        .await;

    let scraper = Scraper::new(create_test_config(&base_url, 1)).expect("Failed to build scraper");
    let mut frontier = scraper.frontier("logo design");

    let first = frontier.next_url().await.expect("Expected one profile URL");
    assert_eq!(first, Url::parse(&format!("{}/dana", base_url)).unwrap());
    assert!(frontier.next_url().await.is_none());
    assert_eq!(frontier.pages_visited(), 1);
}
