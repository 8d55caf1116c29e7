//! Search filter parameters.
//!
//! A [`FilterState`] is always derived from a location, never edited in
//! place. Changing a filter means building a new location with
//! [`FilterState::apply`] and navigating to it.

use serde::{Deserialize, Serialize};

/// Sentinel for "no restriction" on category, query, price and rating.
pub const ALL: &str = "all";

/// Sort order used when the location does not name one.
pub const DEFAULT_ORDER: &str = "newest";

/// Page used when the location does not name one, or names something that is
/// not a number.
pub const DEFAULT_PAGE: u32 = 1;

/// Canonical search/sort/pagination parameters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterState {
    pub category: String,
    pub query: String,
    pub price: String,
    pub rating: String,
    pub order: String,
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            query: ALL.to_string(),
            price: ALL.to_string(),
            rating: ALL.to_string(),
            order: DEFAULT_ORDER.to_string(),
            page: DEFAULT_PAGE,
        }
    }
}

impl FilterState {
    /// True when any of query, category, rating or price restricts the search.
    /// Sort order and page do not count.
    pub fn has_active_filters(&self) -> bool {
        [&self.query, &self.category, &self.rating, &self.price]
            .iter()
            .any(|value| value.as_str() != ALL)
    }

    /// Returns a copy with every present override replaced.
    pub fn apply(&self, overrides: &FilterOverrides) -> FilterState {
        fn pick(current: &str, replacement: &Option<String>) -> String {
            match replacement.as_deref() {
                Some(value) if !value.is_empty() => value.to_string(),
                _ => current.to_string(),
            }
        }

        FilterState {
            category: pick(&self.category, &overrides.category),
            query: pick(&self.query, &overrides.query),
            price: pick(&self.price, &overrides.price),
            rating: pick(&self.rating, &overrides.rating),
            order: pick(&self.order, &overrides.order),
            page: match overrides.page {
                Some(page) if page > 0 => page,
                _ => self.page,
            },
        }
    }
}

/// A partial [`FilterState`]. Empty strings and page `0` count as absent.
///
/// ```
/// use storefront::model::{FilterOverrides, FilterState};
///
/// let next = FilterState::default().apply(&FilterOverrides::new().category("Shirts").page(2));
/// assert_eq!(next.category, "Shirts");
/// assert_eq!(next.page, 2);
/// assert_eq!(next.order, "newest");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOverrides {
    pub category: Option<String>,
    pub query: Option<String>,
    pub price: Option<String>,
    pub rating: Option<String>,
    pub order: Option<String>,
    pub page: Option<u32>,
}

impl FilterOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn query(mut self, query: impl Into<String>) -> Self {
        self.query = Some(query.into());
        self
    }

    pub fn price(mut self, price: impl Into<String>) -> Self {
        self.price = Some(price.into());
        self
    }

    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn order(mut self, order: impl Into<String>) -> Self {
        self.order = Some(order.into());
        self
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_has_no_active_filters() {
        assert!(!FilterState::default().has_active_filters());

        let sorted = FilterState {
            order: "lowest".into(),
            page: 3,
            ..FilterState::default()
        };
        assert!(!sorted.has_active_filters());

        let rated = FilterState {
            rating: "4".into(),
            ..FilterState::default()
        };
        assert!(rated.has_active_filters());
    }

    #[test]
    fn test_apply_replaces_only_present_keys() {
        let current = FilterState {
            category: "Shirts".into(),
            query: "blue".into(),
            price: "1-50".into(),
            rating: "3".into(),
            order: "toprated".into(),
            page: 4,
        };

        let next = current.apply(&FilterOverrides::new().order("lowest"));
        assert_eq!(
            next,
            FilterState {
                order: "lowest".into(),
                ..current.clone()
            }
        );
    }

    #[test]
    fn test_empty_overrides_are_ignored() {
        let current = FilterState {
            category: "Pants".into(),
            page: 2,
            ..FilterState::default()
        };
        let next = current.apply(&FilterOverrides::new().category("").page(0));
        assert_eq!(next, current);
    }
}
