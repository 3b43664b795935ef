// tests/registration_tests.rs
mod common;

use actix_web::{test, web, App};
use boutique_api::repo::users;
use boutique_api::services::auth_service;
use boutique_api::web::routes::configure_app_routes;
use serde_json::json;

macro_rules! spawn_app {
  ($pool:expr) => {
    test::init_service(
      App::new()
        .app_data(web::Data::new(common::test_state($pool.clone())))
        .configure(configure_app_routes),
    )
    .await
  };
}

#[actix_web::test]
async fn register_with_missing_field_is_rejected_and_inserts_nothing() {
  let pool = common::test_pool().await;
  let app = spawn_app!(pool);

  let payloads = [
    json!({ "email": "ava@example.com", "password": "hunter2-long" }),
    json!({ "name": "Ava", "password": "hunter2-long" }),
    json!({ "name": "Ava", "email": "ava@example.com" }),
    json!({ "name": "", "email": "ava@example.com", "password": "hunter2-long" }),
  ];

  for payload in payloads {
    let req = test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(&payload)
      .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400, "payload {payload} should be rejected");

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert!(body["message"].is_string());
  }

  assert_eq!(common::count_rows(&pool, "users").await, 0);
}

#[actix_web::test]
async fn register_succeeds_and_stores_a_hash_not_the_plaintext() {
  let pool = common::test_pool().await;
  let app = spawn_app!(pool);

  let req = test::TestRequest::post()
    .uri("/api/v1/users/register")
    .set_json(json!({
      "name": "Ava Shopper",
      "email": "ava@example.com",
      "password": "correct horse battery",
    }))
    .to_request();
  let resp = test::call_service(&app, req).await;
  assert_eq!(resp.status(), 201);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["message"], "User registered successfully.");
  let user_id = body["userId"].as_i64().expect("userId should be numeric");

  let stored = users::find_by_email(&pool, "ava@example.com")
    .await
    .unwrap()
    .expect("registered user should be findable by email");
  assert_eq!(stored.id, user_id);
  assert_eq!(stored.name, "Ava Shopper");
  assert!(!stored.is_admin);
  assert_ne!(stored.password, "correct horse battery");
  assert!(auth_service::verify_password(&stored.password, "correct horse battery").unwrap());
}

#[actix_web::test]
async fn duplicate_email_is_rejected_with_exactly_one_row_remaining() {
  let pool = common::test_pool().await;
  let app = spawn_app!(pool);

  let payload = json!({
    "name": "Ava Shopper",
    "email": "ava@example.com",
    "password": "correct horse battery",
  });

  let first = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(&payload)
      .to_request(),
  )
  .await;
  assert_eq!(first.status(), 201);

  let second = test::call_service(
    &app,
    test::TestRequest::post()
      .uri("/api/v1/users/register")
      .set_json(&payload)
      .to_request(),
  )
  .await;
  assert_eq!(second.status(), 400);

  let body: serde_json::Value = test::read_body_json(second).await;
  assert_eq!(body["message"], "An account with this email already exists.");

  assert_eq!(common::count_rows(&pool, "users").await, 1);
}

// The uniqueness guarantee lives in the store, so simultaneous inserts with the
// same email resolve to exactly one winner regardless of interleaving.
#[tokio::test]
async fn concurrent_duplicate_inserts_leave_one_winner() {
  let pool = common::test_pool().await;
  let hash = auth_service::hash_password("correct horse battery").unwrap();

  let (first, second) = tokio::join!(
    users::insert(&pool, "Ava", "race@example.com", &hash),
    users::insert(&pool, "Eve", "race@example.com", &hash),
  );

  assert!(
    first.is_ok() != second.is_ok(),
    "exactly one of the two inserts should win: {first:?} / {second:?}"
  );
  assert_eq!(common::count_rows(&pool, "users").await, 1);
}
