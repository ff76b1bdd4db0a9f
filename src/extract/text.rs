//! Text normalization helpers shared by the field heuristics

use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text content is never rendered
const INVISIBLE_ELEMENTS: &[&str] = &["script", "style", "noscript", "template"];

/// Collapses whitespace runs to single spaces and trims both ends
pub fn clean_text(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns the normalized concatenated text of an element
pub fn element_text(element: ElementRef<'_>) -> String {
    clean_text(&element.text().collect::<String>())
}

/// Returns the whole document's visible text, normalized
///
/// Text nodes are joined with a space so adjacent blocks do not fuse into one
/// word. Script and style content is skipped.
pub fn visible_text(document: &Html) -> String {
    let mut fragments = Vec::new();

    for node in document.root_element().descendants() {
        let Node::Text(text) = node.value() else {
            continue;
        };

        let hidden = node.ancestors().any(|ancestor| {
            ancestor
                .value()
                .as_element()
                .is_some_and(|el| INVISIBLE_ELEMENTS.contains(&el.name()))
        });
        if !hidden {
            fragments.push(&**text);
        }
    }

    clean_text(&fragments.join(" "))
}

/// Counts whitespace-separated tokens
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Maps an empty string to `None`
pub fn non_empty(text: String) -> Option<String> {
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Appends `value` unless it is empty or already present
pub fn push_distinct(values: &mut Vec<String>, value: String) {
    if !value.is_empty() && !values.contains(&value) {
        values.push(value);
    }
}

/// Parses a CSS selector, logging instead of failing on a bad pattern
pub fn selector(css: &str) -> Option<Selector> {
    match Selector::parse(css) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::error!("Invalid selector '{}': {:?}", css, e);
            None
        }
    }
}

/// Returns the first non-empty normalized text among elements matching `css`
pub fn first_text(document: &Html, css: &str) -> Option<String> {
    let selector = selector(css)?;
    document
        .select(&selector)
        .find_map(|element| non_empty(element_text(element)))
}

/// Returns the first non-empty trimmed attribute among elements matching `css`
pub fn first_attr(document: &Html, css: &str, attr: &str) -> Option<String> {
    let selector = selector(css)?;
    document.select(&selector).find_map(|element| {
        element
            .value()
            .attr(attr)
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .map(str::to_string)
    })
}
