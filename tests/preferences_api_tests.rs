//! Integration tests for the preferences endpoint and the store on top of it.

use catalog_ops::models::{default_columns, ProductSortState, SortDirection};
use catalog_ops::{
    ApiBaseUrl, CatalogConfig, PreferenceStore, PreferencesApi, PreferencesBackend, RestClient,
    Session,
};
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const PREFERENCES_PATH: &str = "/users/preferences/products";

fn create_api(base_url: &str) -> PreferencesApi {
    let config = CatalogConfig::builder()
        .api_base_url(ApiBaseUrl::new(base_url).unwrap())
        .build()
        .unwrap();
    let session = Session::new("test-session", Some("user-1".to_string()), "test-token", None);
    PreferencesApi::new(RestClient::new(&session, &config))
}

// ---------------------------------------------------------------------------
// PreferencesApi
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_fetch_missing_document_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({"error": "Not found"})))
        .mount(&server)
        .await;

    let fetched = create_api(&server.uri()).fetch().await.unwrap();

    assert!(fetched.is_none());
}

#[tokio::test]
async fn test_fetch_nested_document() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "preferences": {
                "columns": [{"id": "sku", "field": "sku", "label": "SKU", "sortable": true, "visible": true}],
                "sortConfig": {"field": "price", "direction": "asc"},
                "filters": {"status": "draft", "hasVariants": "yes"},
                "showFilters": true
            }
        })))
        .mount(&server)
        .await;

    let fetched = create_api(&server.uri()).fetch().await.unwrap().unwrap();

    assert_eq!(fetched.columns.len(), 1);
    assert_eq!(fetched.sort_config, ProductSortState::new("price", SortDirection::Asc));
    assert_eq!(fetched.filters.status, "draft");
    assert!(fetched.show_filters);
}

#[tokio::test]
async fn test_fetch_server_error_is_returned() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"error": "boom"})))
        .mount(&server)
        .await;

    let error = create_api(&server.uri()).fetch().await.unwrap_err();

    assert_eq!(error.to_string(), "boom");
}

#[tokio::test]
async fn test_reset_tolerates_missing_document() {
    let server = MockServer::start().await;

    Mock::given(method("DELETE"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    assert!(create_api(&server.uri()).reset().await.is_ok());
}

// ---------------------------------------------------------------------------
// PreferenceStore over HTTP
// ---------------------------------------------------------------------------

#[tokio::test]
async fn test_store_load_falls_back_to_defaults_on_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let mut store = PreferenceStore::new(create_api(&server.uri()));
    store.load().await;

    assert!(store.is_initialized());
    assert_eq!(store.columns(), default_columns().as_slice());
    assert_eq!(store.sort(), &ProductSortState::default());
}

#[tokio::test]
async fn test_store_load_appends_new_default_columns() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "columns": [
                {"id": "price", "field": "price", "label": "Price", "sortable": true, "visible": false},
                {"id": "retired", "field": "retired", "label": "Retired", "sortable": false, "visible": true},
                {"id": "name", "field": "name", "label": "Name", "sortable": true, "visible": true}
            ]
        })))
        .mount(&server)
        .await;

    let mut store = PreferenceStore::new(create_api(&server.uri()));
    store.load().await;

    let ids: Vec<&str> = store.columns().iter().map(|c| c.id.as_str()).collect();
    assert_eq!(&ids[..2], ["price", "name"]);
    assert!(!ids.contains(&"retired"));
    assert_eq!(ids.len(), default_columns().len());
    assert!(!store.columns()[0].visible);
}

#[tokio::test]
async fn test_store_patches_sort_and_visibility() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(PREFERENCES_PATH))
        .and(body_json(json!({"sortConfig": {"field": "name", "direction": "asc"}})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("PATCH"))
        .and(path(PREFERENCES_PATH))
        .and(body_partial_json(json!({"columns": [{"id": "image", "visible": false}]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = PreferenceStore::new(create_api(&server.uri()));
    store.load().await;

    store.set_sort_field("name").await;
    store.set_column_visibility("image", false).await;

    assert_eq!(store.sort().field, "name");
    assert!(!store.visible_columns().any(|c| c.id == "image"));
}

#[tokio::test]
async fn test_store_keeps_local_change_when_patch_fails() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = PreferenceStore::new(create_api(&server.uri()));
    store.set_show_filters(true).await;

    assert!(store.show_filters());
}

#[tokio::test]
async fn test_store_reset_deletes_document() {
    let server = MockServer::start().await;

    Mock::given(method("PATCH"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path(PREFERENCES_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = PreferenceStore::new(create_api(&server.uri()));
    store.move_column(0, 3).await;
    store.reset().await;

    assert_eq!(store.columns(), default_columns().as_slice());
}
