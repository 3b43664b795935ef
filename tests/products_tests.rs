// tests/products_tests.rs
mod common;

use actix_web::{test, web, App};
use boutique_api::web::routes::configure_app_routes;

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
async fn health_check_responds_ok() {
  let pool = common::test_pool().await;
  let app = spawn_app!(pool);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/health").to_request()).await;
  assert_eq!(resp.status(), 200);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["status"], "ok");
}

#[actix_web::test]
async fn listing_products_returns_them_sorted_by_name() {
  let pool = common::test_pool().await;
  common::insert_product(&pool, "Wool Blazer", 149.0, 3).await;
  common::insert_product(&pool, "Linen Dress", 89.99, 10).await;
  let app = spawn_app!(pool);

  let resp = test::call_service(&app, test::TestRequest::get().uri("/api/v1/products").to_request()).await;
  assert_eq!(resp.status(), 200);

  let body: serde_json::Value = test::read_body_json(resp).await;
  let products = body["products"].as_array().expect("products array");
  assert_eq!(products.len(), 2);
  assert_eq!(products[0]["name"], "Linen Dress");
  assert_eq!(products[1]["name"], "Wool Blazer");
}

#[actix_web::test]
async fn fetching_a_product_by_id_returns_its_merchandising_fields() {
  let pool = common::test_pool().await;
  let product_id = common::insert_product(&pool, "Chelsea Boots", 189.0, 9).await;
  let app = spawn_app!(pool);

  let resp = test::call_service(
    &app,
    test::TestRequest::get()
      .uri(&format!("/api/v1/products/{product_id}"))
      .to_request(),
  )
  .await;
  assert_eq!(resp.status(), 200);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert_eq!(body["product"]["id"].as_i64(), Some(product_id));
  assert_eq!(body["product"]["price"].as_f64(), Some(189.0));
  assert_eq!(body["product"]["stock"].as_i64(), Some(9));
}

#[actix_web::test]
async fn fetching_an_unknown_product_is_a_404() {
  let pool = common::test_pool().await;
  let app = spawn_app!(pool);

  let resp = test::call_service(
    &app,
    test::TestRequest::get().uri("/api/v1/products/12345").to_request(),
  )
  .await;
  assert_eq!(resp.status(), 404);

  let body: serde_json::Value = test::read_body_json(resp).await;
  assert!(body["message"].as_str().unwrap().contains("not found"));
}
