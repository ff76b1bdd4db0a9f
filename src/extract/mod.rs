//! Field extraction engine
//!
//! Turns the markup of one profile page into a [`ProfileRecord`]. Extraction is
//! total: each field is resolved through its own cascade of heuristics (see
//! [`fields`]) and falls back to an empty default when none of them match. No
//! network or filesystem access happens here.

pub mod fields;
pub mod text;

use crate::model::{stable_id, ProfileRecord};
use fields::{
    cascade, country_from_location, extract_projects, extract_reviews, is_available,
    CATEGORIES_CASCADE, DISPLAY_NAME_CASCADE, LOCATION_CASCADE, PROFILE_IMAGE_CASCADE,
};
use scraper::Html;
use url::Url;

/// Extracts a profile record from a profile page
///
/// The username and identifier come from `url`, never from the markup.
///
/// # Example
///
/// ```
/// use folio_scout::extract::extract_profile;
/// use url::Url;
///
/// let url = Url::parse("https://www.behance.net/alice").unwrap();
/// let record = extract_profile("<html><body><h1>Alice</h1></body></html>", &url);
/// assert_eq!(record.username, "alice");
/// assert_eq!(record.display_name, "Alice");
/// assert_eq!(record.location, "");
/// ```
pub fn extract_profile(html: &str, url: &Url) -> ProfileRecord {
    let document = Html::parse_document(html);

    let location = cascade(&document, LOCATION_CASCADE).unwrap_or_default();
    let country = country_from_location(&location);

    let record = ProfileRecord {
        id: stable_id(url.as_str()),
        username: username_from_url(url),
        display_name: cascade(&document, DISPLAY_NAME_CASCADE).unwrap_or_default(),
        url: url.to_string(),
        location,
        country,
        is_available_for_freelance_services: is_available(&document),
        categories: cascade(&document, CATEGORIES_CASCADE).unwrap_or_default(),
        reviews: extract_reviews(&document),
        profile_image: cascade(&document, PROFILE_IMAGE_CASCADE).unwrap_or_default(),
        projects: extract_projects(&document, url),
    };

    tracing::debug!(
        "Extracted {}: name={:?}, location={:?}, {} categories, {} projects, {} reviews",
        record.url,
        record.display_name,
        record.location,
        record.categories.len(),
        record.projects.len(),
        record.reviews.len()
    );

    record
}

/// Last non-empty path segment of a profile URL
pub fn username_from_url(url: &Url) -> String {
    url.path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .unwrap_or_default()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL_PROFILE: &str = r#"
        <html>
        <head>
            <title>Alice Doe | Portfolio</title>
            <meta property="og:image" content="https://x/img.png">
        </head>
        <body>
            <header>
                <h1>Alice  Doe</h1>
                <span class="Location">Lisbon, Portugal</span>
            </header>
            <div class="badge">Available for freelance</div>
            <span class="Specialties-specialty">Branding</span>
            <span class="Specialties-specialty">Illustration</span>
            <a class="Project-cover" href="/gallery/1/Poster" title="Poster"><img src="https://cdn/1.jpg"></a>
            <a class="Project-cover" href="/gallery/2/Logo" title="Logo"></a>
            <section>
                <h2>Reviews</h2>
                <p>Alice delivered everything ahead of schedule.</p>
            </section>
        </body>
        </html>
    "#;

    fn profile_url() -> Url {
        Url::parse("https://www.behance.net/alice").unwrap()
    }

    #[test]
    fn test_full_profile() {
        let record = extract_profile(FULL_PROFILE, &profile_url());

        assert_eq!(record.id, stable_id("https://www.behance.net/alice"));
        assert_eq!(record.username, "alice");
        assert_eq!(record.display_name, "Alice Doe");
        assert_eq!(record.url, "https://www.behance.net/alice");
        assert_eq!(record.location, "Lisbon, Portugal");
        assert_eq!(record.country, "Portugal");
        assert!(record.is_available_for_freelance_services);
        assert_eq!(record.categories, vec!["Branding", "Illustration"]);
        assert_eq!(record.profile_image, "https://x/img.png");
        assert_eq!(record.completed_projects_count(), 2);
        assert_eq!(
            record.projects[0].url,
            "https://www.behance.net/gallery/1/Poster"
        );
        assert_eq!(
            record.reviews,
            vec!["Alice delivered everything ahead of schedule."]
        );
    }

    #[test]
    fn test_empty_markup_yields_defaults() {
        let record = extract_profile("", &profile_url());

        assert_eq!(record.username, "alice");
        assert_eq!(record.display_name, "");
        assert_eq!(record.location, "");
        assert_eq!(record.country, "");
        assert!(!record.is_available_for_freelance_services);
        assert!(record.categories.is_empty());
        assert!(record.reviews.is_empty());
        assert_eq!(record.profile_image, "");
        assert!(record.projects.is_empty());
        assert_eq!(record.completed_projects_count(), 0);
    }

    #[test]
    fn test_missing_location_leaves_country_empty() {
        let html = r#"<html><body><h1>Bob</h1><header><span>Designer</span></header>
            <p>Based somewhere, maybe</p></body></html>"#;
        let record = extract_profile(html, &profile_url());

        assert_eq!(record.location, "");
        assert_eq!(record.country, "");
    }

    #[test]
    fn test_og_image_without_avatar() {
        let html = r#"<html><head><meta property="og:image" content="https://x/img.png"></head>
            <body><h1>Carol</h1></body></html>"#;
        let record = extract_profile(html, &profile_url());

        assert_eq!(record.profile_image, "https://x/img.png");
    }

    #[test]
    fn test_extraction_is_idempotent() {
        let first = extract_profile(FULL_PROFILE, &profile_url());
        let second = extract_profile(FULL_PROFILE, &profile_url());

        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_username_from_url() {
        let url = Url::parse("https://www.behance.net/alice/").unwrap();
        assert_eq!(username_from_url(&url), "alice");

        let url = Url::parse("https://www.behance.net/alice/moodboards?x=1").unwrap();
        assert_eq!(username_from_url(&url), "moodboards");

        let url = Url::parse("https://www.behance.net/").unwrap();
        assert_eq!(username_from_url(&url), "");
    }
}
