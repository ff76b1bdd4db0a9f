//! Per-field extraction heuristics
//!
//! Every heuristic is a plain function from a parsed document to an optional
//! value. Cascades are ordered slices of them; the first heuristic returning
//! `Some` wins. A heuristic returns `None` rather than an empty value so the
//! cascade can fall through.

use crate::extract::text::{
    clean_text, element_text, first_attr, first_text, non_empty, push_distinct, selector,
    visible_text, word_count,
};
use crate::model::{stable_id, ProjectRecord};
use scraper::{ElementRef, Html};
use std::collections::HashSet;
use url::Url;

/// A single extraction strategy for one field
pub type Heuristic<T> = fn(&Html) -> Option<T>;

/// Class names used for the location line across site revisions
pub const LOCATION_CLASSES: &[&str] = &["Location", "e-location", "UserInfo-location"];

/// Class names used for specialty tags
pub const CATEGORY_CLASSES: &[&str] = &[
    "Specialties-specialty",
    "UserInfo-specialties",
    "js-speciality",
];

/// Class names used for the avatar image
pub const AVATAR_CLASSES: &[&str] = &["Avatar-image", "UserInfo-avatar", "Profile-avatar"];

/// Anchors wrapping a portfolio cover
pub const PROJECT_COVER_SELECTOR: &str = "a.Project-cover, a.js-project-cover, a.project-cover";

/// Lowercase phrases that mark a profile as open for work
pub const AVAILABILITY_PHRASES: &[&str] = &[
    "available for freelance",
    "available for work",
    "freelance available",
    "accepting new projects",
];

/// Minimum number of words for a paragraph to count as a review
pub const MIN_REVIEW_WORDS: usize = 4;

/// Maximum words in a header span that still looks like a location
const MAX_HEADER_LOCATION_WORDS: usize = 5;

pub const DISPLAY_NAME_CASCADE: &[Heuristic<String>] =
    &[name_from_microdata, name_from_heading, name_from_title];

pub const LOCATION_CASCADE: &[Heuristic<String>] = &[
    location_from_microdata,
    location_from_classes,
    location_from_header_text,
];

pub const CATEGORIES_CASCADE: &[Heuristic<Vec<String>>] =
    &[categories_from_classes, categories_from_heading];

pub const PROFILE_IMAGE_CASCADE: &[Heuristic<String>] =
    &[image_from_og_meta, image_from_avatar_classes];

/// Runs heuristics in order and returns the first hit
pub fn cascade<T>(document: &Html, steps: &[Heuristic<T>]) -> Option<T> {
    steps.iter().find_map(|step| step(document))
}

// ===== Display name =====

pub fn name_from_microdata(document: &Html) -> Option<String> {
    first_text(document, r#"[itemprop="name"]"#)
}

pub fn name_from_heading(document: &Html) -> Option<String> {
    first_text(document, "h1")
}

/// Title text up to the first `|` separator
pub fn name_from_title(document: &Html) -> Option<String> {
    let title = first_text(document, "title")?;
    let head = title.split('|').next().unwrap_or_default();
    non_empty(clean_text(head))
}

// ===== Location =====

pub fn location_from_microdata(document: &Html) -> Option<String> {
    first_text(document, r#"[itemprop="addressLocality"]"#)
}

pub fn location_from_classes(document: &Html) -> Option<String> {
    LOCATION_CLASSES
        .iter()
        .find_map(|class| first_text(document, &format!(".{}", class)))
}

/// Short comma-separated span text inside the page header
pub fn location_from_header_text(document: &Html) -> Option<String> {
    let header_selector = selector("header")?;
    let span_selector = selector("span")?;
    let header = document.select(&header_selector).next()?;

    header
        .select(&span_selector)
        .map(element_text)
        .find(|text| text.contains(',') && word_count(text) <= MAX_HEADER_LOCATION_WORDS)
}

/// Last non-empty comma-separated token of a location
pub fn country_from_location(location: &str) -> String {
    location
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .last()
        .unwrap_or_default()
        .to_string()
}

// ===== Availability =====

pub fn is_available(document: &Html) -> bool {
    let text = visible_text(document).to_lowercase();
    AVAILABILITY_PHRASES
        .iter()
        .any(|phrase| text.contains(phrase))
}

// ===== Categories =====

/// Union of all specialty tags, in class-variant then document order
pub fn categories_from_classes(document: &Html) -> Option<Vec<String>> {
    let mut categories = Vec::new();

    for class in CATEGORY_CLASSES {
        let Some(tag_selector) = selector(&format!(".{}", class)) else {
            continue;
        };
        for element in document.select(&tag_selector) {
            push_distinct(&mut categories, element_text(element));
        }
    }

    non_empty_vec(categories)
}

/// Link texts from the first list or container following a "Fields" heading
pub fn categories_from_heading(document: &Html) -> Option<Vec<String>> {
    let heading_selector = selector("h2, h3")?;
    let link_selector = selector("a")?;
    let elements: Vec<ElementRef<'_>> = document
        .root_element()
        .descendants()
        .filter_map(ElementRef::wrap)
        .collect();

    for heading in document.select(&heading_selector) {
        let text = element_text(heading).to_lowercase();
        if !text.contains("fields") && !text.contains("specialties") {
            continue;
        }

        let container = following_element(&elements, heading, "ul")
            .or_else(|| following_element(&elements, heading, "div"));
        let Some(container) = container else {
            continue;
        };

        let mut categories = Vec::new();
        for link in container.select(&link_selector) {
            push_distinct(&mut categories, element_text(link));
        }
        return non_empty_vec(categories);
    }

    None
}

/// First element named `name` after `anchor` in document order
fn following_element<'a>(
    elements: &[ElementRef<'a>],
    anchor: ElementRef<'a>,
    name: &str,
) -> Option<ElementRef<'a>> {
    let start = elements.iter().position(|el| el.id() == anchor.id())?;
    elements[start + 1..]
        .iter()
        .find(|el| el.value().name() == name)
        .copied()
}

// ===== Profile image =====

pub fn image_from_og_meta(document: &Html) -> Option<String> {
    first_attr(document, r#"meta[property="og:image"]"#, "content")
}

pub fn image_from_avatar_classes(document: &Html) -> Option<String> {
    AVATAR_CLASSES
        .iter()
        .find_map(|class| first_attr(document, &format!("img.{}", class), "src"))
}

// ===== Projects =====

/// Portfolio covers, de-duplicated
///
/// Relative links resolve against the root of the profile's site, so
/// `/carol` and `/carol/` give the same project URLs.
pub fn extract_projects(document: &Html, page_url: &Url) -> Vec<ProjectRecord> {
    let (Some(cover_selector), Some(span_selector), Some(div_selector), Some(img_selector)) = (
        selector(PROJECT_COVER_SELECTOR),
        selector("span"),
        selector("div"),
        selector("img"),
    ) else {
        return Vec::new();
    };

    let site_root = page_url.join("/").unwrap_or_else(|_| page_url.clone());
    let mut projects = Vec::new();
    let mut seen = HashSet::new();

    for card in document.select(&cover_selector) {
        let Some(href) = card.value().attr("href").map(str::trim) else {
            continue;
        };
        if href.is_empty() {
            continue;
        }
        let url = match site_root.join(href) {
            Ok(url) => url.to_string(),
            Err(e) => {
                tracing::debug!("Skipping project link '{}': {}", href, e);
                continue;
            }
        };
        if !seen.insert(url.clone()) {
            continue;
        }

        let name = ["title", "aria-label"]
            .iter()
            .filter_map(|attr| card.value().attr(attr))
            .map(clean_text)
            .find(|name| !name.is_empty())
            .or_else(|| {
                card.select(&span_selector)
                    .next()
                    .or_else(|| card.select(&div_selector).next())
                    .map(element_text)
            })
            .unwrap_or_default();

        let cover_image = card
            .select(&img_selector)
            .next()
            .and_then(|img| img.value().attr("src"))
            .map(str::trim)
            .unwrap_or_default()
            .to_string();

        projects.push(ProjectRecord {
            id: stable_id(&url),
            name,
            url,
            cover_image,
        });
    }

    projects
}

// ===== Reviews =====

/// Paragraphs of at least four words under review or testimonial headings
pub fn extract_reviews(document: &Html) -> Vec<String> {
    let (Some(heading_selector), Some(paragraph_selector)) = (selector("h2, h3"), selector("p"))
    else {
        return Vec::new();
    };

    let mut sections: Vec<ElementRef<'_>> = Vec::new();
    for heading in document.select(&heading_selector) {
        let text = element_text(heading).to_lowercase();
        if !text.contains("review") && !text.contains("testimonial") {
            continue;
        }

        let section = heading
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|el| el.value().name() == "section")
            .or_else(|| heading.parent().and_then(ElementRef::wrap));

        if let Some(section) = section {
            if !sections.iter().any(|known| known.id() == section.id()) {
                sections.push(section);
            }
        }
    }

    let mut reviews = Vec::new();
    for section in sections {
        for paragraph in section.select(&paragraph_selector) {
            let text = element_text(paragraph);
            if word_count(&text) >= MIN_REVIEW_WORDS {
                push_distinct(&mut reviews, text);
            }
        }
    }

    reviews
}

fn non_empty_vec(values: Vec<String>) -> Option<Vec<String>> {
    if values.is_empty() {
        None
    } else {
        Some(values)
    }
}
