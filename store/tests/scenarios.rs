//! End-to-end store scenarios against a mock server
//!
//! Drives the full path from facade command through transport, lifecycle
//! events, and slice reducers, and asserts the resulting state tree.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)] // Test code can use unwrap/expect/panic

use placeadmin_client::model::{TodoPatch, UserPatch};
use placeadmin_client::{AddressPatch, ApiClient};
use placeadmin_store::{AdminStore, FilterUpdate, StatusFilter};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn store_for(server: &MockServer) -> AdminStore {
    AdminStore::with_client(ApiClient::with_base_url(server.uri()).expect("client should build"))
}

fn user_json(id: u64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "name": name,
        "username": name.to_lowercase(),
        "email": format!("{}@example.com", name.to_lowercase()),
        "address": {
            "street": "A", "suite": "B", "city": "C", "zipcode": "10001",
            "geo": { "lat": "0", "lng": "0" }
        },
        "phone": "555",
        "website": "example.com",
        "company": { "name": "Acme", "catchPhrase": "Do", "bs": "bs" }
    })
}

#[tokio::test]
async fn fetch_users_happy_path() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "John Doe")])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let outcome = store.fetch_users().await;
    assert!(outcome.is_fulfilled());

    let users = store.snapshot().await.users;
    assert_eq!(users.users.len(), 1);
    assert_eq!(users.users[0].name, "John Doe");
    assert!(!users.status.loading);
    assert_eq!(users.status.error, None);
}

#[tokio::test]
async fn fetch_users_failure_sets_slice_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let outcome = store.fetch_users().await;
    assert!(outcome.is_rejected());

    let users = store.snapshot().await.users;
    assert!(!users.status.loading);
    assert_eq!(users.status.error.as_deref(), Some("unexpected status 503"));
}

#[tokio::test]
async fn update_user_deep_merges_echo_into_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([user_json(1, "John Doe")])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1,
            "email": "x@y.z",
            "address": { "street": "New" }
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_users().await;

    let outcome = store
        .update_user(
            1,
            UserPatch {
                email: Some("x@y.z".to_string()),
                address: Some(AddressPatch {
                    street: Some("New".to_string()),
                    ..AddressPatch::default()
                }),
                ..UserPatch::default()
            },
        )
        .await;
    assert!(outcome.is_fulfilled());

    let user = store.state(|s| s.users.users[0].clone()).await;
    assert_eq!(user.email, "x@y.z");
    assert_eq!(user.address.street, "New");
    assert_eq!(user.address.suite, "B");
    assert_eq!(user.address.city, "C");
    assert_eq!(user.address.zipcode, "10001");
    assert_eq!(user.company.name, "Acme");
}

#[tokio::test]
async fn update_user_rejection_surfaces_only_in_outcome() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/users/1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let outcome = store.update_user(1, UserPatch::default()).await;
    assert_eq!(outcome.message(), Some("unexpected status 500"));

    // The slice never sees the failure.
    let users = store.snapshot().await.users;
    assert_eq!(users.status.error, None);
    assert!(!users.status.loading);
}

#[tokio::test]
async fn todos_filter_pipeline() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 1, "id": 1, "title": "Buy milk", "completed": false },
            { "userId": 2, "id": 2, "title": "Buy bread", "completed": true },
            { "userId": 1, "id": 3, "title": "Run", "completed": true }
        ])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_todos().await;
    store
        .set_filters(FilterUpdate {
            status: Some(StatusFilter::Completed),
            title: Some("buy".to_string()),
            user_id: Some(None),
        })
        .await;

    let todos = store.snapshot().await.todos;
    let ids: Vec<_> = todos.filtered_todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![2]);
    assert_eq!(todos.pagination.total, 1);
    assert_eq!(todos.pagination.current_page, 1);
}

#[tokio::test]
async fn pagination_cursor_windows_the_filtered_list() {
    let todos: Vec<serde_json::Value> = (1..=25)
        .map(|id| json!({ "userId": 1, "id": id, "title": format!("task {id}"), "completed": false }))
        .collect();

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(todos))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_todos().await;
    store.set_page(3).await;

    let todos = store.snapshot().await.todos;
    assert_eq!(todos.pagination.current_page, 3);
    assert_eq!(todos.pagination.total, 25);
    let window = todos.page_window();
    assert_eq!(window.len(), 5);
    assert_eq!(window[0].id, 21);
    assert_eq!(window[4].id, 25);
}

#[tokio::test]
async fn update_todo_re_derives_projection() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 1, "id": 1, "title": "T", "completed": false }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("PUT"))
        .and(path("/todos/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1, "completed": true
        })))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_todos().await;
    store
        .set_filters(FilterUpdate {
            status: Some(StatusFilter::Completed),
            ..FilterUpdate::default()
        })
        .await;
    assert_eq!(store.state(|s| s.todos.pagination.total).await, 0);

    let outcome = store
        .update_todo(
            1,
            TodoPatch {
                completed: Some(true),
                ..TodoPatch::default()
            },
        )
        .await;
    assert!(outcome.is_fulfilled());

    let todos = store.snapshot().await.todos;
    let ids: Vec<_> = todos.filtered_todos.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![1]);
    assert_eq!(todos.pagination.total, 1);
    assert_eq!(todos.pagination.current_page, 1);
}

#[tokio::test]
async fn delete_post_removes_entry_from_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/posts"))
        .and(query_param("userId", "1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "userId": 1, "id": 1, "title": "a", "body": "x" },
            { "userId": 1, "id": 2, "title": "b", "body": "y" }
        ])))
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/posts/2"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let store = store_for(&server);
    store.fetch_user_posts(1).await;

    let outcome = store.delete_post(2).await;
    assert!(outcome.is_fulfilled());

    let ids: Vec<_> = store
        .state(|s| s.posts.posts.iter().map(|p| p.id).collect::<Vec<_>>())
        .await;
    assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn subscription_observes_lifecycle_in_commit_order() {
    use placeadmin_core::command::Lifecycle;
    use placeadmin_store::{AppEvent, TodosEvent};

    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/todos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let store = store_for(&server);
    let mut rx = store.subscribe();
    store.fetch_todos().await;

    assert!(matches!(
        rx.recv().await.unwrap(),
        AppEvent::Todos(TodosEvent::FetchTodos(Lifecycle::Pending { .. }))
    ));
    assert!(matches!(
        rx.recv().await.unwrap(),
        AppEvent::Todos(TodosEvent::FetchTodos(Lifecycle::Fulfilled { .. }))
    ));
}
