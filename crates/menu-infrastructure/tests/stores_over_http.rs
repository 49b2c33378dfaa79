use std::sync::Arc;

use menu_core::domain::{CategoryDraft, ItemDraft, Sender};
use menu_core::services::{CatalogStore, ChatSession};
use menu_core::DomainError;
use menu_infrastructure::{create_client, HttpCatalogGateway, HttpSuggestionGateway};
use menu_shared::constants::SUGGESTION_ERROR_REPLY;
use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn mount_menus(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/menus"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {
                "id": 4,
                "restaurantId": 1,
                "name": "Dinner Menu",
                "cuisine": "Italian",
                "availableTimes": ["dinner"],
                "categories": [
                    {"id": 10, "name": "Mains", "position": 2, "items": []},
                    {"id": 11, "name": "Starters", "position": 1, "items": []}
                ]
            }
        ])))
        .mount(server)
        .await;
}

fn store(server: &MockServer) -> CatalogStore<HttpCatalogGateway> {
    let gateway = HttpCatalogGateway::new(create_client().unwrap(), server.uri());
    CatalogStore::new(Arc::new(gateway), 1)
}

#[tokio::test]
async fn test_load_then_add_category_appends_after_last_position() {
    let server = MockServer::start().await;
    mount_menus(&server).await;
    Mock::given(method("POST"))
        .and(path("/menus/4/categories"))
        .and(body_json(json!({"name": "Desserts", "position": 3})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 12, "name": "Desserts", "position": 3
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store(&server);
    assert_eq!(store.load().await, 1);
    assert_eq!(store.selected_menu_id(), Some(4));

    store.add_category(4, &CategoryDraft::new("Desserts")).await.unwrap();

    let names: Vec<&str> = store
        .categories_in_display_order(4)
        .iter()
        .map(|c| c.name.as_str())
        .collect();
    assert_eq!(names, vec!["Starters", "Mains", "Desserts"]);
    assert_eq!(
        store.last_notification().unwrap().description,
        "\"Desserts\" has been added to Dinner Menu."
    );
}

#[tokio::test]
async fn test_add_category_server_error_leaves_tree_unchanged() {
    let server = MockServer::start().await;
    mount_menus(&server).await;
    Mock::given(method("POST"))
        .and(path("/menus/4/categories"))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store(&server);
    store.load().await;
    let before = store.menus().to_vec();

    let result = store.add_category(4, &CategoryDraft::new("Desserts")).await;

    assert_eq!(result, Err(DomainError::RemoteFailure("create category")));
    assert_eq!(store.menus(), before.as_slice());
    let toast = store.last_notification().unwrap();
    assert!(toast.is_failure());
    assert_eq!(toast.title, "Failed to add category");
}

#[tokio::test]
async fn test_created_item_is_attached_and_edit_stays_local() {
    let server = MockServer::start().await;
    mount_menus(&server).await;
    Mock::given(method("POST"))
        .and(path("/categories/11/items"))
        .and(body_partial_json(json!({"name": "Bruschetta", "price": 7.25})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 40, "name": "Bruschetta", "price": 7.25, "rating": 0, "numRatings": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut store = store(&server);
    store.load().await;

    let created = store
        .add_or_update_item(11, &ItemDraft::new("Bruschetta", "7.25"), None)
        .await
        .unwrap();
    assert_eq!(created.id, Some(40));

    // Only the single POST above is allowed to reach the server.
    let mut edit = ItemDraft::from_item(&created);
    edit.price = "8".to_string();
    let updated = store.add_or_update_item(11, &edit, Some(40)).await.unwrap();

    assert_eq!(updated.price, 8.0);
    let (_, category) = store.find_category(11).unwrap();
    assert_eq!(category.items.len(), 1);
    assert_eq!(category.items[0].price, 8.0);
}

#[tokio::test]
async fn test_chat_round_trip_for_selected_menu() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/menu-suggestion"))
        .and(body_json(json!({"prompt": "spicy noodles", "menuId": 7})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "suggestion": "Try the Dan Dan noodles."
        })))
        .expect(1)
        .mount(&server)
        .await;

    let gateway = HttpSuggestionGateway::new(create_client().unwrap(), server.uri());
    let mut chat = ChatSession::new(Arc::new(gateway), Some(7), Some("Noodle Bar"));

    assert!(chat.send_message("spicy noodles").await);

    let messages = chat.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].sender, Sender::User);
    assert_eq!(messages[2].sender, Sender::Bot);
    assert_eq!(messages[2].content, "Try the Dan Dan noodles.");
    assert!(!chat.is_loading());
}

#[tokio::test]
async fn test_chat_server_error_yields_apology() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/menu-suggestion"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let gateway = HttpSuggestionGateway::new(create_client().unwrap(), server.uri());
    let mut chat = ChatSession::new(Arc::new(gateway), Some(7), None);

    chat.send_message("anything").await;

    assert_eq!(chat.messages().last().unwrap().content, SUGGESTION_ERROR_REPLY);
    assert!(!chat.is_loading());
}
