//! End-to-end tests of the product list: fetch, filter, sort, paginate,
//! edit and export against a local backend.

use catalog_ops::catalog::{
    filter_products, paginate, sort_products, total_pages, CellFormatter, ProductFilter,
};
use catalog_ops::editing::{EditAction, EditError, EditKey, EditState, EditableField};
use catalog_ops::models::{
    default_columns, ProductColumnConfig, ProductFilterState, ProductSortState, SortDirection,
};
use catalog_ops::preferences::merge_columns;
use catalog_ops::{
    ApiBaseUrl, CatalogConfig, InlineEditSession, PageSize, Product, ProductCatalog,
    ProductListView, ProductsApi, RestClient, Session, ValidationError,
};
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn create_config(base_url: &str, page_size: usize) -> CatalogConfig {
    CatalogConfig::builder()
        .api_base_url(ApiBaseUrl::new(base_url).unwrap())
        .page_size(PageSize::new(page_size).unwrap())
        .build()
        .unwrap()
}

fn create_api(config: &CatalogConfig) -> ProductsApi {
    let session = Session::new("test-session", Some("user-1".to_string()), "test-token", None);
    ProductsApi::new(RestClient::new(&session, config))
}

/// Six products: a configurable tee with two variants, a mug, a poster and a hoodie.
fn catalog_json() -> serde_json::Value {
    json!([
        {"id": "p-1", "sku": "TSH-001", "name": "Classic Tee", "type": "configurable",
         "price": 29.99, "stockQuantity": 0, "tags": ["apparel"],
         "variants": [{"id": "p-2", "sku": "TSH-001-S"}, {"id": "p-3", "sku": "TSH-001-M"}],
         "updatedAt": "2024-10-03T09:00:00Z"},
        {"id": "p-2", "sku": "TSH-001-S", "name": "Classic Tee / S", "type": "variant",
         "parentId": "p-1", "price": 29.99, "stockQuantity": 4,
         "updatedAt": "2024-10-01T09:00:00Z"},
        {"id": "p-3", "sku": "TSH-001-M", "name": "Classic Tee / M", "type": "variant",
         "parentId": "p-1", "price": 29.99, "stockQuantity": 6,
         "updatedAt": "2024-10-02T09:00:00Z"},
        {"id": "p-4", "sku": "MUG-001", "name": "Coffee Mug", "price": 12.5,
         "stockQuantity": 40, "tags": ["kitchen", "gift"], "brand": "Acme",
         "updatedAt": "2024-09-20T09:00:00Z"},
        {"id": "p-5", "sku": "PST-001", "name": "Poster", "price": 8.0,
         "stockQuantity": 15, "tags": ["gift"],
         "updatedAt": "2024-09-25T09:00:00Z"},
        {"id": "p-6", "sku": "HOD-001", "name": "Hoodie", "price": 49.0,
         "stockQuantity": 2, "platform": "Shopify",
         "updatedAt": "2024-10-04T09:00:00Z"}
    ])
}

async fn mount_catalog(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(catalog_json()))
        .mount(server)
        .await;
}

fn local_products() -> Vec<Product> {
    serde_json::from_value(catalog_json()).unwrap()
}

fn ids(products: &[&Product]) -> Vec<String> {
    products.iter().map(|p| p.id.clone()).collect()
}

// ============================================================================
// Filtering
// ============================================================================

#[test]
fn test_parent_only_hides_variants() {
    let products = local_products();
    let filters = ProductFilterState {
        parent_only: true,
        ..Default::default()
    };

    let result = filter_products(&products, "", &filters, true);

    assert_eq!(ids(&result), ["p-1", "p-4", "p-5", "p-6"]);
    assert!(result.iter().all(|p| p.parent_id.is_none()));
}

#[test]
fn test_search_mug_matches_one_product() {
    let products = local_products();

    let result = filter_products(&products, "mug", &ProductFilterState::default(), true);

    assert_eq!(ids(&result), ["p-4"]);
}

#[test]
fn test_default_filters_are_identity() {
    let products = local_products();

    let result = filter_products(&products, "", &ProductFilterState::default(), true);

    assert_eq!(result.len(), products.len());
}

#[test]
fn test_single_criterion_partitions_list() {
    let products = local_products();
    let filters = ProductFilterState {
        tags: vec!["gift".to_string()],
        ..Default::default()
    };
    let filter = ProductFilter::new("", &filters, true);

    let (kept, dropped): (Vec<&Product>, Vec<&Product>) =
        products.iter().partition(|p| filter.matches(p));

    assert!(kept.iter().all(|p| p.tags.iter().any(|t| t == "gift")));
    assert!(dropped.iter().all(|p| !p.tags.iter().any(|t| t == "gift")));
    assert_eq!(kept.len() + dropped.len(), products.len());
}

// ============================================================================
// Sorting and pagination
// ============================================================================

#[test]
fn test_sort_is_idempotent_and_reversible() {
    let products = local_products();
    let asc = ProductSortState::new("price", SortDirection::Asc);
    let desc = ProductSortState::new("price", SortDirection::Desc);

    let once = sort_products(&products, &asc);
    let twice = sort_products(once.iter().copied(), &asc);
    assert_eq!(ids(&once), ids(&twice));

    let reversed = sort_products(once.iter().copied(), &desc);
    let prices: Vec<f64> = reversed.iter().map(|p| p.price).collect();
    assert!(prices.windows(2).all(|w| w[0] >= w[1]));
    assert_eq!(reversed.first().map(|p| p.id.as_str()), Some("p-6"));
    assert_eq!(reversed.last().map(|p| p.id.as_str()), Some("p-5"));
}

#[test]
fn test_pages_concatenate_to_sorted_list() {
    let products = local_products();
    let sorted = sort_products(&products, &ProductSortState::default());
    let page_size = PageSize::new(4).unwrap();
    let pages = total_pages(sorted.len(), page_size);

    let flattened: Vec<&Product> = (1..=pages)
        .flat_map(|page| paginate(&sorted, page, page_size).iter().copied())
        .collect();

    assert_eq!(pages, 2);
    assert_eq!(ids(&flattened), ids(&sorted));
    assert!(paginate(&sorted, pages + 1, page_size).is_empty());
}

// ============================================================================
// Column merge
// ============================================================================

#[test]
fn test_merge_appends_new_default_column() {
    let defaults = default_columns();
    let saved: Vec<ProductColumnConfig> = defaults
        .iter()
        .filter(|c| c.id != "barcode")
        .cloned()
        .collect();

    let merged = merge_columns(&saved, &defaults);

    let last = merged.last().unwrap();
    assert_eq!(last.id, "barcode");
    let default_barcode = defaults.iter().find(|c| c.id == "barcode").unwrap();
    assert_eq!(last.visible, default_barcode.visible);
    assert_eq!(merged.len(), defaults.len());
}

// ============================================================================
// Fetch, view and export
// ============================================================================

#[tokio::test]
async fn test_fetch_render_and_export() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;

    let config = create_config(&server.uri(), 2);
    let catalog = ProductCatalog::fetch(&create_api(&config)).await.unwrap();

    let columns = vec![
        ProductColumnConfig::new("sku", "SKU", true, true),
        ProductColumnConfig::new("price", "Price", true, true),
        ProductColumnConfig::new("brand", "Brand", true, false),
    ];

    let mut view = ProductListView::new(&config);
    view.set_filters(ProductFilterState {
        tags: vec!["gift".to_string()],
        ..Default::default()
    });
    view.set_sort(ProductSortState::new("price", SortDirection::Asc));

    let page = view.render(catalog.products(), &columns);
    assert_eq!(page.total_items, 2);
    assert_eq!(page.total_pages, 1);
    let first: Vec<&str> = page.rows[0].cells.iter().map(|c| c.text.as_str()).collect();
    assert_eq!(first, ["PST-001", "$8.00"]);

    let csv = view.export(catalog.products(), &columns);
    assert_eq!(csv, "SKU,Price\nPST-001,$8.00\nMUG-001,$12.50");
}

// ============================================================================
// Inline editing
// ============================================================================

#[tokio::test]
async fn test_price_edit_saves_and_shows_new_value() {
    let server = MockServer::start().await;
    mount_catalog(&server).await;
    Mock::given(method("PUT"))
        .and(path("/products/p-1"))
        .and(body_json(json!({"price": 35.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "p-1", "sku": "TSH-001", "name": "Classic Tee", "price": 35.5
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server.uri(), 25);
    let api = create_api(&config);
    let mut catalog = ProductCatalog::fetch(&api).await.unwrap();
    let tee = catalog.get("p-1").cloned().unwrap();

    let mut session = InlineEditSession::new();
    let editor = session.begin(&tee, EditableField::Price);
    assert_eq!(editor.buffer(), Some("29.99"));

    editor.input("35.5");
    assert_eq!(editor.key(EditKey::Enter), EditAction::Commit);

    let saved = editor.commit(Some(&api)).await.unwrap().unwrap();
    assert_eq!(editor.state(), &EditState::Viewing);

    catalog.apply_outcome("p-1", &saved.change, saved.outcome);

    let updated = catalog.get("p-1").unwrap();
    assert_eq!(CellFormatter::default().text(updated, "price"), "$35.50");
    assert!(catalog.last_sync_warning().is_none());
}

#[tokio::test]
async fn test_whitespace_sku_is_rejected_before_any_request() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(0)
        .mount(&server)
        .await;

    let config = create_config(&server.uri(), 25);
    let api = create_api(&config);
    let tee = local_products().remove(0);

    let mut session = InlineEditSession::new();
    let editor = session.begin(&tee, EditableField::Sku);
    editor.input("   ");

    let error = editor.commit(Some(&api)).await.unwrap_err();

    assert!(matches!(
        error,
        EditError::Validation(ValidationError::EmptySku)
    ));
    assert!(editor.is_active());
    assert_eq!(editor.error(), Some("SKU cannot be empty"));
}

#[tokio::test]
async fn test_rejected_save_keeps_editor_open_with_backend_message() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/p-4"))
        .respond_with(
            ResponseTemplate::new(409).set_body_json(json!({"message": "SKU already exists"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server.uri(), 25);
    let api = create_api(&config);
    let mug = local_products().remove(3);

    let mut session = InlineEditSession::new();
    let editor = session.begin(&mug, EditableField::Sku);
    editor.input("TSH-001");

    let error = editor.commit(Some(&api)).await.unwrap_err();

    assert_eq!(error.user_message(), "SKU already exists");
    assert_eq!(editor.buffer(), Some("TSH-001"));
    assert_eq!(editor.error(), Some("SKU already exists"));
}

#[tokio::test]
async fn test_warehouse_quantity_edit_updates_local_stock() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/products/p-4/warehouse/wh-1/inventory"))
        .and(body_json(json!({"quantity": 9})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "_syncWarning": {"message": "WooCommerce stock sync pending"}
        })))
        .expect(1)
        .mount(&server)
        .await;

    let config = create_config(&server.uri(), 25);
    let api = create_api(&config);
    let mut catalog = ProductCatalog::new(local_products());
    let mug = catalog.get("p-4").cloned().unwrap();

    let mut session = InlineEditSession::new();
    session.set_warehouse(Some("wh-1".to_string()));
    let editor = session.begin(&mug, EditableField::Quantity);
    editor.input("9");
    assert_eq!(editor.blur(), EditAction::Commit);

    let saved = editor.commit(Some(&api)).await.unwrap().unwrap();
    catalog.apply_outcome("p-4", &saved.change, saved.outcome);

    let updated = catalog.get("p-4").unwrap();
    assert_eq!(updated.stock_in(Some("wh-1")), 9);
    assert_eq!(
        catalog.last_sync_warning(),
        Some("WooCommerce stock sync pending")
    );
}
