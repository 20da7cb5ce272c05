//! SVG fragment collection
//!
//! Finds every `<svg>` element on a page, serializes it without presentation
//! noise, and records it in a [`FragmentStore`] if it has not been seen yet.

use crate::storage::{normalize_fragment, FragmentStore};
use crate::url::origin_and_path;
use chrono::{DateTime, Utc};
use scraper::{ElementRef, Html, Node, Selector};
use url::Url;

/// Attributes dropped from a fragment and all of its descendants
pub const STRIPPED_ATTRIBUTES: &[&str] = &["class", "focusable"];

/// What a single page contributed to the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectOutcome {
    /// Fragments that were new and got recorded
    pub recorded: usize,

    /// Fragments already present in the store
    pub duplicates: usize,
}

/// Collects every SVG fragment of a page into the store
///
/// Fragments are visited in document order, nested `<svg>` elements
/// included. Each one is serialized from a copy made by
/// [`strip_presentation_attributes`], normalized, and offered to the store.
/// Every new fragment produces an `info` line (see [`discovery_message`]).
///
/// # Arguments
///
/// * `document` - The parsed page
/// * `page_url` - Final URL of the page, recorded as the fragment source
/// * `store` - Accumulator shared by the whole crawl
pub fn collect_fragments<S: FragmentStore + ?Sized>(
    document: &Html,
    page_url: &Url,
    store: &mut S,
) -> CollectOutcome {
    let mut outcome = CollectOutcome::default();

    let Ok(svg_selector) = Selector::parse("svg") else {
        return outcome;
    };

    let svg_ids: Vec<_> = document.select(&svg_selector).map(|svg| svg.id()).collect();
    if svg_ids.is_empty() {
        return outcome;
    }

    let cleaned = strip_presentation_attributes(document);
    for id in svg_ids {
        let Some(svg) = cleaned.tree.get(id).and_then(ElementRef::wrap) else {
            continue;
        };
        let body = svg.html();
        let normalized = normalize_fragment(&body);

        if store.insert_if_new(&normalized, page_url.as_str(), &body) {
            outcome.recorded += 1;
            tracing::info!("{}", discovery_message(Utc::now(), page_url, store.len()));
        } else {
            outcome.duplicates += 1;
        }
    }

    outcome
}

/// Returns a copy of the document without presentation attributes
///
/// Every element inside an `<svg>`, the `<svg>` itself included, loses the
/// unprefixed attributes named in [`STRIPPED_ATTRIBUTES`]. Node ids are
/// shared with `document`, which is left untouched.
pub fn strip_presentation_attributes(document: &Html) -> Html {
    let mut cleaned = document.clone();

    let Ok(svg_selector) = Selector::parse("svg") else {
        return cleaned;
    };

    let targets: Vec<_> = document
        .select(&svg_selector)
        .flat_map(|svg| svg.descendants().map(|node| node.id()))
        .collect();

    for id in targets {
        let Some(mut node) = cleaned.tree.get_mut(id) else {
            continue;
        };
        if let Node::Element(element) = node.value() {
            element.attrs.retain(|name, _| {
                name.prefix.is_some() || !STRIPPED_ATTRIBUTES.contains(&&*name.local)
            });
        }
    }

    cleaned
}

/// Log line announcing a newly recorded fragment
pub fn discovery_message(at: DateTime<Utc>, page_url: &Url, total: usize) -> String {
    format!(
        "{}: Found SVG on {} ({} total)",
        at.to_rfc3339(),
        origin_and_path(page_url),
        total
    )
}
