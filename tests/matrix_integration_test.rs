use axum_test::TestServer;
use http::StatusCode;
use serde_json::Value;

mod common;

use common::TestDatabaseType;

// Run the same scenario against each store; PostgreSQL needs Docker
macro_rules! matrix_test {
    ($test_name:ident, $test_fn:ident) => {
        paste::paste! {
            #[tokio::test]
            async fn [<$test_name _sqlite>]() {
                $test_fn(TestDatabaseType::Sqlite).await;
            }

            #[tokio::test]
            #[ignore = "requires Docker"]
            async fn [<$test_name _postgres>]() {
                $test_fn(TestDatabaseType::Postgres).await;
            }
        }
    };
}

async fn user_crud_test(db_type: TestDatabaseType) {
    let (app, _test_db) = common::setup_test_app_with_db(db_type).await.unwrap();
    let server = TestServer::new(app).unwrap();

    let login = match db_type {
        TestDatabaseType::Sqlite => "sqlite_user",
        TestDatabaseType::Postgres => "postgres_user",
    };

    let response = server
        .post("/users")
        .json(&common::create_user_json(login))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK, "{:?}", db_type);
    let user_id: i64 = response.json();

    let fetched: Value = server.get(&format!("/users/{}", user_id)).await.json();
    assert_eq!(fetched["login"], login);

    let deleted = server.delete(&format!("/users/{}", user_id)).await;
    assert_eq!(deleted.status_code(), StatusCode::OK);
    let deleted: Value = deleted.json();
    assert_eq!(deleted, fetched);

    let missing = server.get(&format!("/users/{}", user_id)).await;
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
}

async fn batch_insert_test(db_type: TestDatabaseType) {
    let (backend, _container) = match db_type {
        TestDatabaseType::Sqlite => (common::setup_test_database().await.unwrap(), None),
        TestDatabaseType::Postgres => {
            let (backend, container) = common::setup_postgres_test_database().await.unwrap();
            (backend, Some(container))
        }
    };

    let users = user_info_server::startup::run_demo(backend.as_ref())
        .await
        .unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.windows(2).all(|pair| pair[0].id < pair[1].id));
}

matrix_test!(user_crud, user_crud_test);
matrix_test!(batch_insert, batch_insert_test);
