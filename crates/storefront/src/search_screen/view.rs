//! # Search View
//!
//! The search page as a view model: which links exist, where they point and
//! which are active, and what the main area shows. [`render`] is a pure
//! function of the filters, the load state and the category list.

use super::query::{build_url, SEARCH_PATH};
use crate::model::{FilterOverrides, FilterState, Product, ResultSet, ALL};
use screen_framework::LoadState;
use std::fmt;

/// Shown in place of the grid when a search matched nothing.
pub const NO_PRODUCTS: &str = "No Product Found";

/// Price buckets offered in the sidebar, after "Any".
pub const PRICES: [(&str, &str); 3] = [
    ("$1 to $50", "1-50"),
    ("$51 to $200", "51-200"),
    ("$201 to $1000", "201-1000"),
];

/// Star thresholds offered in the sidebar, before "all".
pub const RATINGS: [u8; 4] = [4, 3, 2, 1];

pub const SORT_OPTIONS: [(&str, &str); 4] = [
    ("newest", "Newest Arrivals"),
    ("lowest", "Price: Low to High"),
    ("highest", "Price: High to Low"),
    ("toprated", "Avg. Customer Reviews"),
];

/// A sidebar link.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterLink {
    pub label: String,
    pub value: String,
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PageLink {
    pub page: u32,
    pub target: String,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortOption {
    pub value: &'static str,
    pub label: &'static str,
    pub selected: bool,
}

/// One product tile in the grid.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCard {
    pub id: String,
    pub name: String,
    pub image: String,
    pub price: f64,
    pub rating: f64,
    pub num_reviews: u32,
    pub target: String,
    pub in_stock: bool,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            image: product.image.clone(),
            price: product.price,
            rating: product.rating,
            num_reviews: product.num_reviews,
            target: product.location(),
            in_stock: product.in_stock(),
        }
    }
}

/// What the search returned.
#[derive(Debug, Clone, PartialEq)]
pub enum Listing {
    /// The [`NO_PRODUCTS`] placeholder.
    Empty,
    Grid(Vec<ProductCard>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    pub headline: String,
    pub listing: Listing,
    pub pages: Vec<PageLink>,
}

/// The main area of the page.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    Loading,
    /// The fetch failed; the message replaces grid and pagination.
    Failed(String),
    Results(Results),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SearchView {
    pub filters: FilterState,
    pub categories: Vec<FilterLink>,
    pub prices: Vec<FilterLink>,
    pub ratings: Vec<FilterLink>,
    /// Target of the "Clear filters" button, present only when a filter is set.
    pub clear_filters: Option<String>,
    pub sort: Vec<SortOption>,
    pub body: Body,
}

impl SearchView {
    pub fn products(&self) -> &[ProductCard] {
        match &self.body {
            Body::Results(Results {
                listing: Listing::Grid(cards),
                ..
            }) => cards.as_slice(),
            _ => &[],
        }
    }

    pub fn page_links(&self) -> &[PageLink] {
        match &self.body {
            Body::Results(results) => results.pages.as_slice(),
            _ => &[],
        }
    }
}

/// Renders the page for `filters` in `state`.
pub fn render(filters: &FilterState, state: &LoadState<ResultSet>, categories: &[String]) -> SearchView {
    let link = |label: String, value: &str, current: &str, overrides: FilterOverrides| FilterLink {
        label,
        value: value.to_string(),
        target: build_url(filters, &overrides),
        active: value == current,
    };

    let categories = std::iter::once(("Any".to_string(), ALL))
        .chain(categories.iter().map(|c| (c.clone(), c.as_str())))
        .map(|(label, value)| {
            link(label, value, &filters.category, FilterOverrides::new().category(value))
        })
        .collect();

    let prices = std::iter::once(("Any", ALL))
        .chain(PRICES)
        .map(|(label, value)| {
            link(label.to_string(), value, &filters.price, FilterOverrides::new().price(value))
        })
        .collect();

    let ratings = RATINGS
        .iter()
        .map(|stars| (rating_label(*stars), stars.to_string()))
        .chain(std::iter::once(("Any".to_string(), ALL.to_string())))
        .map(|(label, value)| {
            link(label, &value, &filters.rating, FilterOverrides::new().rating(value.as_str()))
        })
        .collect();

    let sort = SORT_OPTIONS
        .iter()
        .map(|&(value, label)| SortOption {
            value,
            label,
            selected: value == filters.order,
        })
        .collect();

    let body = match state {
        LoadState::Loading => Body::Loading,
        LoadState::Failed(message) => Body::Failed(message.clone()),
        LoadState::Success(results) => Body::Results(Results {
            headline: headline(filters, results.count_products),
            listing: if results.count_products == 0 || results.products.is_empty() {
                Listing::Empty
            } else {
                Listing::Grid(results.products.iter().map(ProductCard::from).collect())
            },
            pages: (1..=results.pages)
                .map(|page| PageLink {
                    page,
                    target: build_url(filters, &FilterOverrides::new().page(page)),
                    active: page == filters.page,
                })
                .collect(),
        }),
    };

    SearchView {
        filters: filters.clone(),
        categories,
        prices,
        ratings,
        clear_filters: filters.has_active_filters().then(|| SEARCH_PATH.to_string()),
        sort,
        body,
    }
}

/// `"N Results"` (or `"No Results"`) followed by each filter in use.
pub fn headline(filters: &FilterState, count: u64) -> String {
    let mut line = if count == 0 {
        "No Results".to_string()
    } else {
        format!("{} Results", count)
    };
    if filters.query != ALL {
        line.push_str(&format!(" : {}", filters.query));
    }
    if filters.category != ALL {
        line.push_str(&format!(" : {}", filters.category));
    }
    if filters.price != ALL {
        line.push_str(&format!(" : Price {}", filters.price));
    }
    if filters.rating != ALL {
        line.push_str(&format!(" : Rating {} & up", filters.rating));
    }
    line
}

fn rating_label(stars: u8) -> String {
    if stars == 1 {
        "1 star & up".to_string()
    } else {
        format!("{} stars & up", stars)
    }
}

fn marker(active: bool) -> &'static str {
    if active {
        "*"
    } else {
        " "
    }
}

impl fmt::Display for SearchView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (title, links) in [
            ("Department", &self.categories),
            ("Price", &self.prices),
            ("Avg. Customer Review", &self.ratings),
        ] {
            writeln!(f, "{}", title)?;
            for link in links {
                writeln!(f, "  [{}] {}  -> {}", marker(link.active), link.label, link.target)?;
            }
        }

        let order = self
            .sort
            .iter()
            .find(|option| option.selected)
            .map_or(self.filters.order.as_str(), |option| option.label);
        writeln!(f, "Sort by: {}", order)?;
        if let Some(target) = &self.clear_filters {
            writeln!(f, "Clear filters -> {}", target)?;
        }
        writeln!(f)?;

        match &self.body {
            Body::Loading => writeln!(f, "Loading..."),
            Body::Failed(message) => writeln!(f, "Error: {}", message),
            Body::Results(results) => {
                writeln!(f, "{}", results.headline)?;
                match &results.listing {
                    Listing::Empty => writeln!(f, "{}", NO_PRODUCTS)?,
                    Listing::Grid(cards) => {
                        for card in cards {
                            writeln!(
                                f,
                                "  {} ${:.2} {:.1}/5 ({} reviews){}  -> {}",
                                card.name,
                                card.price,
                                card.rating,
                                card.num_reviews,
                                if card.in_stock { "" } else { " [Out of stock]" },
                                card.target
                            )?;
                        }
                    }
                }
                if !results.pages.is_empty() {
                    let pages: Vec<String> = results
                        .pages
                        .iter()
                        .map(|link| {
                            if link.active {
                                format!("[{}]", link.page)
                            } else {
                                link.page.to_string()
                            }
                        })
                        .collect();
                    writeln!(f, "Pages: {}", pages.join(" "))?;
                }
                Ok(())
            }
        }
    }
}
