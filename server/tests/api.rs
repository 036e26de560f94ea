use std::net::SocketAddr;

use packlist_server::domain::{PackItem, PackList};
use packlist_server::repository::{Repository, IN_MEMORY};
use packlist_server::{build_router, AppState};
use serde_json::{json, Value};

async fn spawn_server(state: AppState) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    let app = build_router(state);
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    addr
}

fn generate_list(n: usize, num_items: usize) -> PackList {
    PackList {
        id: String::new(),
        name: format!("trip number {}", n),
        items: (0..num_items)
            .map(|i| PackItem::new(format!("thing{}", i), (i % 5) as u32 + 1, (i % 5) as u32 + 6))
            .collect(),
    }
}

async fn seeded() -> (AppState, SocketAddr) {
    let state = AppState::open(IN_MEMORY).expect("open db");
    for n in 0..10 {
        state.lists.create(&generate_list(n, 10)).await.expect("seed");
    }
    let addr = spawn_server(state.clone()).await;
    (state, addr)
}

fn keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<String> = value
        .as_object()
        .expect("object")
        .keys()
        .cloned()
        .collect();
    keys.sort();
    keys
}

#[tokio::test]
async fn root_is_not_found() {
    let addr = spawn_server(AppState::open(IN_MEMORY).unwrap()).await;

    let res = reqwest::get(format!("http://{addr}/")).await.unwrap();
    assert_eq!(res.status(), 404);
}

#[tokio::test]
async fn get_collection_returns_summaries() {
    let (_state, addr) = seeded().await;

    let res = reqwest::get(format!("http://{addr}/api/packing/")).await.unwrap();
    assert_eq!(res.status(), 200);
    let body: Vec<Value> = res.json().await.unwrap();
    assert_eq!(body.len(), 10);
    for list in &body {
        assert_eq!(keys(list), vec!["id", "name", "packed", "toPack"]);
    }
}

#[tokio::test]
async fn summaries_survive_counts_past_u32() {
    let (state, addr) = seeded().await;
    let target = state.lists.list().await.unwrap().remove(0);
    let client = reqwest::Client::new();

    let res = client
        .put(format!("http://{addr}/api/packing/{}", target.id))
        .json(&json!({
            "name": "big",
            "items": [
                { "item": "a", "toPack": 3000000000u32 },
                { "item": "b", "toPack": 3000000000u32 }
            ]
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    let res = client
        .get(format!("http://{addr}/api/packing/"))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Vec<Value> = res.json().await.unwrap();
    let big = body
        .iter()
        .find(|l| l["id"] == target.id.as_str())
        .expect("replaced list in overview");
    assert_eq!(big["toPack"], json!(6_000_000_000u64));
    assert_eq!(big["packed"], json!(0));
}

#[tokio::test]
async fn get_by_id_returns_full_list() {
    let (state, addr) = seeded().await;
    let expected = state.lists.list().await.unwrap().remove(0);

    let res = reqwest::get(format!("http://{addr}/api/packing/{}", expected.id))
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["id"], json!(expected.id));
    assert_eq!(body["name"], json!(expected.name));
    for item in body["items"].as_array().unwrap() {
        assert_eq!(keys(item), vec!["_id", "item", "packed", "toPack"]);
    }
}

#[tokio::test]
async fn get_unknown_id_is_404() {
    let (_state, addr) = seeded().await;

    let res = reqwest::get(format!("http://{addr}/api/packing/does-not-exist"))
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    let body: Value = res.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().contains("does-not-exist"));
}

#[tokio::test]
async fn post_creates_list() {
    let (state, addr) = seeded().await;
    let count = state.lists.count().await.unwrap();
    let new_list = generate_list(99, 10);

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/packing"))
        .json(&json!({ "name": new_list.name, "items": new_list.items }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 201);
    let body: PackList = res.json().await.unwrap();
    assert_eq!(body.name, new_list.name);
    assert!(!body.id.is_empty());

    let stored = state.lists.find_by_id(&body.id).await.unwrap().unwrap();
    assert_eq!(stored.name, new_list.name);
    assert_eq!(stored.items.len(), new_list.items.len());
    assert_eq!(state.lists.count().await.unwrap(), count + 1);
}

#[tokio::test]
async fn post_without_name_is_rejected() {
    let (_state, addr) = seeded().await;

    let res = reqwest::Client::new()
        .post(format!("http://{addr}/api/packing"))
        .json(&json!({ "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}

#[tokio::test]
async fn delete_removes_list() {
    let (state, addr) = seeded().await;
    let target = state.lists.list().await.unwrap().remove(0);

    let client = reqwest::Client::new();
    let url = format!("http://{addr}/api/packing/{}", target.id);
    let res = client.delete(&url).send().await.unwrap();
    assert_eq!(res.status(), 204);
    assert!(state.lists.find_by_id(&target.id).await.unwrap().is_none());

    let again = client.delete(&url).send().await.unwrap();
    assert_eq!(again.status(), 404);
}

#[tokio::test]
async fn put_replaces_list() {
    let (state, addr) = seeded().await;
    let target = state.lists.list().await.unwrap().remove(0);
    let mut update = generate_list(7, 20);
    update.id = target.id.clone();

    let res = reqwest::Client::new()
        .put(format!("http://{addr}/api/packing/{}", update.id))
        .json(&update)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);
    assert!(res.bytes().await.unwrap().is_empty());

    let stored = state.lists.find_by_id(&update.id).await.unwrap().unwrap();
    assert_eq!(stored.name, update.name);
    assert_eq!(stored.id, update.id);
    assert_eq!(stored.items.len(), 20);
}

#[tokio::test]
async fn put_keeps_existing_item_ids() {
    let (state, addr) = seeded().await;
    let mut target = state.lists.list().await.unwrap().remove(0);
    target.items[1].packed = target.items[1].to_pack;
    target.items.push(PackItem::new("socks", 0, 1));

    let res = reqwest::Client::new()
        .put(format!("http://{addr}/api/packing/{}", target.id))
        .json(&target)
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 204);

    let stored = state.lists.find_by_id(&target.id).await.unwrap().unwrap();
    assert_eq!(stored.items[1], target.items[1]);
    assert_eq!(stored.items[0].id, target.items[0].id);
    assert!(stored.items[10].id.is_some());
}

#[tokio::test]
async fn put_unknown_or_mismatched_id_fails() {
    let (state, addr) = seeded().await;
    let client = reqwest::Client::new();

    let res = client
        .put(format!("http://{addr}/api/packing/ghost"))
        .json(&json!({ "id": "ghost", "name": "x", "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);

    let target = state.lists.list().await.unwrap().remove(0);
    let res = client
        .put(format!("http://{addr}/api/packing/{}", target.id))
        .json(&json!({ "id": "someone-else", "name": "x", "items": [] }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);
}
