//! End-to-end tests for the repository routes.

use serde_json::{json, Value};

mod common;

#[tokio::test]
async fn test_list_returns_seeded_records_in_order() {
    let addr = common::start_server().await;
    let res = common::client()
        .get(format!("http://{}/repositories", addr))
        .send()
        .await
        .expect("Server unreachable");

    assert_eq!(res.status(), 200);
    assert!(res.headers()["content-type"]
        .to_str()
        .unwrap()
        .starts_with("application/json"));

    let body: Value = res.json().await.unwrap();
    assert_eq!(
        body,
        json!([
            {"id": 1, "name": "awesome-project", "owner": "user1", "stars": 42},
            {"id": 2, "name": "cool-library", "owner": "user2", "stars": 105},
            {"id": 3, "name": "utility-tool", "owner": "user3", "stars": 27}
        ])
    );
    for record in body.as_array().unwrap() {
        assert_eq!(record.as_object().unwrap().len(), 4, "unexpected fields in {record}");
    }
}

#[tokio::test]
async fn test_get_by_id() {
    let addr = common::start_server().await;
    let client = common::client();

    let cases = [
        (1, r#"{"id":1,"name":"awesome-project","owner":"user1","stars":42}"#),
        (2, r#"{"id":2,"name":"cool-library","owner":"user2","stars":105}"#),
        (3, r#"{"id":3,"name":"utility-tool","owner":"user3","stars":27}"#),
    ];

    for (id, expected) in cases {
        let res = client
            .get(format!("http://{}/repositories/{}", addr, id))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 200);
        assert_eq!(res.text().await.unwrap(), expected);
    }
}

#[tokio::test]
async fn test_unknown_and_malformed_ids_are_not_found() {
    let addr = common::start_server().await;
    let client = common::client();

    for segment in ["999", "0", "-1", "abc", "x1", "99999999999999999999"] {
        let res = client
            .get(format!("http://{}/repositories/{}", addr, segment))
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), 404, "segment {segment}");
        assert!(res.headers()["content-type"]
            .to_str()
            .unwrap()
            .starts_with("text/plain"));
        assert_eq!(res.text().await.unwrap(), "Repository not found");
    }
}

#[tokio::test]
async fn test_repeated_requests_are_identical() {
    let addr = common::start_server().await;
    let client = common::client();

    for path in ["/repositories", "/repositories/1", "/repositories/999", "/api-docs/openapi.json"] {
        let url = format!("http://{}{}", addr, path);
        let first = client.get(&url).send().await.unwrap().bytes().await.unwrap();
        let second = client.get(&url).send().await.unwrap().bytes().await.unwrap();
        assert_eq!(first, second, "body changed for {path}");
    }
}

#[tokio::test]
async fn test_request_id() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/repositories/1", addr))
        .header("x-request-id", "test-correlation-id")
        .send()
        .await
        .unwrap();
    assert_eq!(res.headers()["x-request-id"], "test-correlation-id");

    let res = client
        .get(format!("http://{}/repositories/999", addr))
        .send()
        .await
        .unwrap();
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn test_concurrent_reads() {
    let addr = common::start_server().await;
    let client = common::client();

    let mut handles = Vec::new();
    for i in 0..20 {
        let client = client.clone();
        let url = format!("http://{}/repositories/{}", addr, i % 4);
        handles.push(tokio::spawn(async move {
            let res = client.get(url).send().await.unwrap();
            res.status().as_u16()
        }));
    }

    for (i, handle) in handles.into_iter().enumerate() {
        let status = handle.await.unwrap();
        let expected = if i % 4 == 0 { 404 } else { 200 };
        assert_eq!(status, expected);
    }
}

#[tokio::test]
async fn test_trailing_slash_is_equivalent() {
    let addr = common::start_server().await;
    let client = common::client();

    let res = client
        .get(format!("http://{}/repositories/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body.as_array().map(Vec::len), Some(3));

    let res = client
        .get(format!("http://{}/repositories/1/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 200);
    assert_eq!(
        res.text().await.unwrap(),
        r#"{"id":1,"name":"awesome-project","owner":"user1","stars":42}"#
    );

    let res = client
        .get(format!("http://{}/repositories/abc/", addr))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 404);
    assert_eq!(res.text().await.unwrap(), "Repository not found");
}
