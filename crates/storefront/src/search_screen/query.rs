//! Conversion between locations and [`FilterState`].
//!
//! The location is the single source of truth for the search screen, so
//! these two functions are the whole contract between the address bar and
//! the screen: `parse_filters(&build_url(f, &FilterOverrides::new())) == f`.

use crate::model::{FilterOverrides, FilterState, ALL, DEFAULT_ORDER, DEFAULT_PAGE};
use std::borrow::Cow;
use url::form_urlencoded;

/// Path of the search screen. Navigating here clears every filter.
pub const SEARCH_PATH: &str = "/search";

/// Reads the six filter keys from a location.
///
/// Accepts a bare query (`?a=b` or `a=b`), a path with a query
/// (`/search?a=b`) or an absolute URL. Missing or empty keys fall back to
/// their defaults; for repeated keys the first one counts. Values are
/// otherwise passed through unchecked. A `page` that is not a non-negative
/// integer becomes `1`.
///
/// ```
/// use storefront::search_screen::parse_filters;
///
/// let filters = parse_filters("?category=Shirts&price=51-200");
/// assert_eq!(filters.category, "Shirts");
/// assert_eq!(filters.price, "51-200");
/// assert_eq!(filters.query, "all");
/// assert_eq!(filters.order, "newest");
/// assert_eq!(filters.page, 1);
/// ```
pub fn parse_filters(location: &str) -> FilterState {
    let pairs: Vec<(Cow<'_, str>, Cow<'_, str>)> =
        form_urlencoded::parse(query_part(location).as_bytes()).collect();

    let text = |key: &str, default: &str| -> String {
        first(&pairs, key).unwrap_or(default).to_string()
    };

    FilterState {
        category: text("category", ALL),
        query: text("query", ALL),
        price: text("price", ALL),
        rating: text("rating", ALL),
        order: text("order", DEFAULT_ORDER),
        page: first(&pairs, "page")
            .and_then(|page| page.parse().ok())
            .unwrap_or(DEFAULT_PAGE),
    }
}

/// Location of the search screen for `current` with `overrides` applied.
///
/// Pure. All six keys are always written, in a fixed order, so equal filter
/// states give byte-equal locations.
///
/// ```
/// use storefront::model::{FilterOverrides, FilterState};
/// use storefront::search_screen::build_url;
///
/// let url = build_url(&FilterState::default(), &FilterOverrides::new().order("lowest"));
/// assert_eq!(url, "/search?category=all&query=all&price=all&rating=all&order=lowest&page=1");
/// ```
pub fn build_url(current: &FilterState, overrides: &FilterOverrides) -> String {
    let next = current.apply(overrides);
    let query = form_urlencoded::Serializer::new(String::new())
        .append_pair("category", &next.category)
        .append_pair("query", &next.query)
        .append_pair("price", &next.price)
        .append_pair("rating", &next.rating)
        .append_pair("order", &next.order)
        .append_pair("page", &next.page.to_string())
        .finish();
    format!("{}?{}", SEARCH_PATH, query)
}

fn query_part(location: &str) -> &str {
    let location = location.split('#').next().unwrap_or_default();
    match location.split_once('?') {
        Some((_, query)) => query,
        // A path or absolute URL without a query carries no filters
        None if location.starts_with('/') || location.contains("://") => "",
        None => location,
    }
}

fn first<'a>(pairs: &'a [(Cow<'_, str>, Cow<'_, str>)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(name, _)| name == key)
        .map(|(_, value)| value.as_ref())
        .filter(|value| !value.is_empty())
}
