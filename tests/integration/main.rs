//! Integration tests for the scraper
//!
//! These tests use wiremock to serve search result and profile pages and run
//! the frontier and the orchestrator end-to-end.

mod frontier_tests;
mod scrape_tests;

use folio_scout::crawler::ScraperConfig;
use url::Url;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Creates a test configuration against the mock server, with no delays
pub fn create_test_config(base_url: &str, max_pages: u32) -> ScraperConfig {
    let mut config = ScraperConfig::new(Url::parse(base_url).expect("Failed to parse base URL"));
    config.delay_range = (0.0, 0.0);
    config.max_pages = max_pages;
    config
}

/// Search results page linking to the given paths
pub fn search_page(paths: &[&str]) -> String {
    let links: String = paths
        .iter()
        .map(|p| format!(r#"<a href="{}">{}</a>"#, p, p))
        .collect();
    format!(
        r#"<html><head><title>Search</title></head><body><nav><a href="/">Home</a></nav>{}</body></html>"#,
        links
    )
}

/// Minimal profile page
pub fn profile_page(name: &str, location: &str) -> String {
    format!(
        r#"<html><head><title>{name} | Portfolio</title></head><body>
        <header><h1>{name}</h1><span class="Location">{location}</span></header>
        <a class="Project-cover" href="/gallery/1/{name}" title="Work of {name}"></a>
        </body></html>"#
    )
}

/// Mounts a search results page for `page`
pub async fn mount_search_page(server: &MockServer, page: u32, template: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("page", page.to_string()))
        .respond_with(template)
        .mount(server)
        .await;
}

/// Mounts a search results page that must be requested exactly `times` times
pub async fn mount_search_page_expecting(
    server: &MockServer,
    page: u32,
    template: ResponseTemplate,
    times: u64,
) {
    Mock::given(method("GET"))
        .and(path("/search/users"))
        .and(query_param("page", page.to_string()))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}

/// Mounts a profile page that must be requested exactly `times` times
pub async fn mount_profile(server: &MockServer, username: &str, template: ResponseTemplate, times: u64) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", username)))
        .respond_with(template)
        .expect(times)
        .mount(server)
        .await;
}
