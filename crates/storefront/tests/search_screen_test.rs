use std::sync::Arc;
use std::time::Duration;
use storefront::api::mock::MockCatalog;
use storefront::api::{ApiError, CatalogApi};
use storefront::clients::SearchClient;
use storefront::model::{FilterOverrides, FilterState, Product, ResultSet};
use storefront::search_screen::{self, parse_filters, Body, Listing, SearchError};
use screen_framework::{LoadState, ScreenHandle};

// --- Helpers ---

fn product(id: &str) -> Product {
    Product {
        id: id.into(),
        name: format!("Product {id}"),
        slug: format!("product-{id}"),
        category: "Shirts".into(),
        image: format!("/images/{id}.jpg"),
        price: 30.0,
        rating: 4.0,
        num_reviews: 3,
        count_in_stock: 5,
        description: None,
    }
}

fn page_of(ids: &[&str], pages: u32) -> ResultSet {
    ResultSet {
        products: ids.iter().map(|id| product(id)).collect(),
        page: 1,
        pages,
        count_products: ids.len() as u64,
    }
}

fn start(catalog: &MockCatalog, categories: Vec<String>) -> SearchClient {
    let (actor, client) = search_screen::new(8);
    let api: Arc<dyn CatalogApi> = Arc::new(catalog.clone());
    tokio::spawn(actor.run(api));
    SearchClient::new(client, categories)
}

// --- Tests ---

#[tokio::test]
async fn test_first_navigation_loads_results() {
    let catalog = MockCatalog::new();
    let filters = parse_filters("?category=Shirts&price=51-200");
    catalog.search.expect(filters.clone()).return_ok(page_of(&["a", "b"], 1));
    let client = start(&catalog, vec!["Pants".into(), "Shirts".into()]);

    let nav = client.open("/search?category=Shirts&price=51-200").await.unwrap();
    assert_eq!(
        nav.params,
        FilterState {
            category: "Shirts".into(),
            price: "51-200".into(),
            ..FilterState::default()
        }
    );

    let view = client.settled_view().await.unwrap();
    assert_eq!(view.products().len(), 2);
    assert_eq!(view.page_links().len(), 1);
    assert_eq!(view.clear_filters.as_deref(), Some("/search"));
    assert!(view.categories.iter().any(|l| l.label == "Shirts" && l.active));
    catalog.verify();
}

#[tokio::test]
async fn test_change_order_preserves_other_keys() {
    let catalog = MockCatalog::new();
    let start_filters = FilterState {
        category: "Shirts".into(),
        query: "slim".into(),
        price: "1-50".into(),
        rating: "3".into(),
        order: "newest".into(),
        page: 2,
    };
    let lowest = FilterState {
        order: "lowest".into(),
        ..start_filters.clone()
    };
    catalog.search.expect(start_filters.clone()).return_ok(page_of(&["a"], 2));
    catalog.search.expect(lowest.clone()).return_ok(page_of(&["b"], 2));
    let client = start(&catalog, vec![]);

    client
        .open("/search?category=Shirts&query=slim&price=1-50&rating=3&page=2")
        .await
        .unwrap();
    client.settled().await.unwrap();

    let nav = client.change_order("lowest").await.unwrap();
    assert_eq!(nav.params, lowest);
    assert!(nav.reloaded);

    let view = client.settled_view().await.unwrap();
    assert_eq!(view.products()[0].id, "b");
    catalog.verify();
}

#[tokio::test]
async fn test_filter_page_and_clear_navigation() {
    let catalog = MockCatalog::new();
    let shirts = FilterState {
        category: "Shirts".into(),
        ..FilterState::default()
    };
    let shirts_page_2 = FilterState {
        page: 2,
        ..shirts.clone()
    };
    catalog.search.expect(FilterState::default()).return_ok(page_of(&["a"], 1));
    catalog.search.expect(shirts.clone()).return_ok(page_of(&["b"], 2));
    catalog.search.expect(shirts_page_2.clone()).return_ok(page_of(&["c"], 2));
    catalog.search.expect(FilterState::default()).return_ok(page_of(&["a"], 1));
    let client = start(&catalog, vec!["Shirts".into()]);

    client.open("/search").await.unwrap();
    client.settled().await.unwrap();

    let nav = client
        .apply_filter(FilterOverrides::new().category("Shirts"))
        .await
        .unwrap();
    assert_eq!(nav.params, shirts);
    client.settled().await.unwrap();

    let nav = client.go_to_page(2).await.unwrap();
    assert_eq!(nav.params, shirts_page_2);
    let view = client.settled_view().await.unwrap();
    assert!(view.page_links()[1].active);

    let nav = client.clear_filters().await.unwrap();
    assert_eq!(nav.params, FilterState::default());
    let view = client.settled_view().await.unwrap();
    assert_eq!(view.clear_filters, None);
    catalog.verify();
}

#[tokio::test]
async fn test_stale_response_never_overwrites_newer_filters() {
    let catalog = MockCatalog::new();
    let f1 = parse_filters("?order=lowest");
    let f2 = parse_filters("?order=highest");
    let a = catalog.search.expect(f1.clone()).deferred();
    let b = catalog.search.expect(f2.clone()).deferred();
    let client = start(&catalog, vec![]);

    client.open("/search?order=lowest").await.unwrap();
    client.open("/search?order=highest").await.unwrap();

    // Newer filters' fetch (B) resolves first
    b.resolve_ok(page_of(&["highest"], 1));
    let view = client.settled_view().await.unwrap();
    assert_eq!(view.products()[0].id, "highest");

    // Older fetch (A) resolves afterwards
    a.resolve_ok(page_of(&["lowest"], 1));
    let snapshot = tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            let snapshot = client.snapshot().await.unwrap();
            if snapshot.discarded == 1 {
                return snapshot;
            }
            tokio::task::yield_now().await;
        }
    })
    .await
    .expect("stale fetch never completed");

    assert_eq!(snapshot.params, Some(f2));
    let committed = snapshot.state.data().unwrap();
    assert_eq!(committed.products[0].id, "highest");
    catalog.verify();
}

#[tokio::test]
async fn test_loading_is_entered_immediately() {
    let catalog = MockCatalog::new();
    let first = catalog.search.expect(FilterState::default()).deferred();
    let client = start(&catalog, vec![]);

    client.open("/search").await.unwrap();
    let view = client.view().await.unwrap();
    assert_eq!(view.body, Body::Loading);

    first.resolve_ok(page_of(&[], 0));
    let view = client.settled_view().await.unwrap();
    assert!(matches!(view.body, Body::Results(_)));
}

#[tokio::test]
async fn test_no_results_renders_placeholder_only() {
    let catalog = MockCatalog::new();
    let filters = parse_filters("?query=nothing");
    catalog.search.expect(filters).return_ok(page_of(&[], 0));
    let client = start(&catalog, vec![]);

    client.open("/search?query=nothing").await.unwrap();
    let view = client.settled_view().await.unwrap();
    match &view.body {
        Body::Results(results) => {
            assert_eq!(results.listing, Listing::Empty);
            assert!(results.pages.is_empty());
            assert_eq!(results.headline, "No Results : nothing");
        }
        other => panic!("unexpected body {other:?}"),
    }
}

#[tokio::test]
async fn test_failure_shows_message_then_retry_recovers() {
    let catalog = MockCatalog::new();
    let filters = parse_filters("?category=Shirts");
    catalog.search.expect(filters.clone()).return_err(ApiError::Status {
        status: 500,
        message: "Database unavailable".into(),
    });
    catalog.search.expect(filters.clone()).return_ok(page_of(&["a"], 1));
    let client = start(&catalog, vec![]);

    client.open("/search?category=Shirts").await.unwrap();
    let view = client.settled_view().await.unwrap();
    assert_eq!(view.body, Body::Failed("Database unavailable".into()));
    assert!(view.products().is_empty());
    assert!(view.page_links().is_empty());
    // The location still carries the filters
    assert_eq!(view.filters, filters);

    // Re-opening the unchanged location retries
    let nav = client.open("/search?category=Shirts").await.unwrap();
    assert!(nav.reloaded);
    let snapshot = client.settled().await.unwrap();
    assert!(matches!(snapshot.state, LoadState::Success(_)));
    catalog.verify();
}

#[tokio::test]
async fn test_unchanged_location_after_success_is_noop() {
    let catalog = MockCatalog::new();
    catalog.search.expect(FilterState::default()).return_ok(page_of(&["a"], 1));
    let client = start(&catalog, vec![]);

    client.open("/search").await.unwrap();
    client.settled().await.unwrap();

    // Spelling the defaults out is the same FilterState
    let nav = client
        .open("/search?category=all&query=all&price=all&rating=all&order=newest&page=1")
        .await
        .unwrap();
    assert!(!nav.reloaded);
    assert_eq!(nav.generation, 1);
    catalog.verify();
}

#[tokio::test]
async fn test_closed_screen_maps_to_search_error() {
    let (actor, client) = search_screen::new(8);
    drop(actor);
    let client = SearchClient::new(client, vec![]);

    let err = client.open("/search").await.unwrap_err();
    assert_eq!(err, SearchError::Screen("Screen closed".into()));
    assert_eq!(err.to_string(), "Screen communication error: Screen closed");
}
