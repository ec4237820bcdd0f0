use axum_test::TestServer;
use chrono::{DateTime, Utc};
use http::StatusCode;
use serde_json::Value;
use std::collections::HashSet;
use user_info_server::startup::{self, SEED_LOGINS};

mod common;

#[tokio::test]
async fn test_seed_logins_over_http() {
    let app = common::setup_test_app().await.unwrap();
    let server = TestServer::new(app).unwrap();
    let before = Utc::now() - chrono::Duration::seconds(1);

    for login in SEED_LOGINS {
        let response = server
            .post("/users")
            .json(&common::create_user_json(login))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    let users: Vec<Value> = server.get("/users/list").await.json();
    assert_eq!(users.len(), 3);

    let ids: HashSet<i64> = users.iter().map(|u| u["id"].as_i64().unwrap()).collect();
    assert_eq!(ids.len(), 3);

    let logins: HashSet<&str> = users.iter().map(|u| u["login"].as_str().unwrap()).collect();
    assert_eq!(logins, SEED_LOGINS.into_iter().collect());

    for user in &users {
        let created: DateTime<Utc> = user["creationDate"].as_str().unwrap().parse().unwrap();
        assert!(created >= before);
    }
}

#[tokio::test]
async fn test_demo_walkthrough() {
    let backend = common::setup_test_database().await.unwrap();
    backend
        .create_user(&user_info_server::UserCreationInfo::new("left_over"))
        .await
        .unwrap();

    let users = startup::run_demo(backend.as_ref()).await.unwrap();

    assert_eq!(users.len(), 3);
    let logins: Vec<&str> = users.iter().map(|u| u.login.as_str()).collect();
    assert!(!logins.contains(&"left_over"));
    for login in SEED_LOGINS {
        assert!(logins.contains(&login));
    }
}
