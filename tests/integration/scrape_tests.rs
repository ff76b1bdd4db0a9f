use crate::{
    create_test_config, mount_profile, mount_search_page, mount_search_page_expecting,
    profile_page, search_page,
};
use folio_scout::crawler::Scraper;
use folio_scout::model::stable_id;
use std::collections::HashSet;
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_full_scrape_dedupes_and_skips_failures() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice", "/bob"])),
    )
    .await;
    mount_search_page(
        &mock_server,
        2,
        ResponseTemplate::new(200).set_body_string(search_page(&["/bob", "/carol"])),
    )
    .await;

    mount_profile(
        &mock_server,
        "alice",
        ResponseTemplate::new(200).set_body_string(profile_page("Alice", "Lisbon, Portugal")),
        1,
    )
    .await;
    // Bob's page is broken; he must be tried once and then skipped.
    mount_profile(&mock_server, "bob", ResponseTemplate::new(500), 1).await;
    mount_profile(
        &mock_server,
        "carol",
        ResponseTemplate::new(200).set_body_string(profile_page("Carol", "Austin, TX, USA")),
        1,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 2)).expect("Failed to build scraper");
    let profiles = scraper.run("designer", 10).await;

    assert_eq!(profiles.len(), 2);

    let alice = &profiles[0];
    assert_eq!(alice.username, "alice");
    assert_eq!(alice.display_name, "Alice");
    assert_eq!(alice.url, format!("{}/alice", base_url));
    assert_eq!(alice.id, stable_id(&alice.url));
    assert_eq!(alice.country, "Portugal");
    assert_eq!(alice.completed_projects_count(), alice.projects.len());
    assert_eq!(alice.projects[0].url, format!("{}/gallery/1/Alice", base_url));

    let carol = &profiles[1];
    assert_eq!(carol.username, "carol");
    assert_eq!(carol.country, "USA");

    let urls: HashSet<&str> = profiles.iter().map(|p| p.url.as_str()).collect();
    assert_eq!(urls.len(), profiles.len());
}

#[tokio::test]
async fn test_scrape_stops_at_profile_cap() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice", "/bob"])),
    )
    .await;
    mount_search_page_expecting(
        &mock_server,
        2,
        ResponseTemplate::new(200).set_body_string(search_page(&["/carol"])),
        0,
    )
    .await;

    mount_profile(
        &mock_server,
        "alice",
        ResponseTemplate::new(200).set_body_string(profile_page("Alice", "Oslo, Norway")),
        1,
    )
    .await;
    mount_profile(
        &mock_server,
        "bob",
        ResponseTemplate::new(200).set_body_string(profile_page("Bob", "Rome, Italy")),
        0,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 5)).expect("Failed to build scraper");
    let profiles = scraper.run("designer", 1).await;

    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].username, "alice");
}

#[tokio::test]
async fn test_layout_drift_yields_empty_run() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    // Results rendered without any plain profile anchors.
    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200)
            .set_body_string("<html><body><div id=\"app\" data-results=\"[]\"></div></body></html>"),
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 3)).expect("Failed to build scraper");
    let profiles = scraper.run("designer", 10).await;

    assert!(profiles.is_empty());
}

#[tokio::test]
async fn test_repeated_runs_are_independent() {
    let mock_server = MockServer::start().await;
    let base_url = mock_server.uri();

    mount_search_page(
        &mock_server,
        1,
        ResponseTemplate::new(200).set_body_string(search_page(&["/alice"])),
    )
    .await;
    mount_profile(
        &mock_server,
        "alice",
        ResponseTemplate::new(200).set_body_string(profile_page("Alice", "Oslo, Norway")),
        2,
    )
    .await;

    let scraper = Scraper::new(create_test_config(&base_url, 1)).expect("Failed to build scraper");
    let first = scraper.run("designer", 5).await;
    let second = scraper.run("designer", 5).await;

    assert_eq!(first.len(), 1);
    assert_eq!(first, second);
}
