use axum::http::StatusCode;
use axum_test::TestServer;
use customer_api::{AppState, build_router};
use customer_domain::{Customer, InMemoryCustomerRepository};
use serde_json::json;
use std::sync::Arc;

fn test_server() -> TestServer {
    let repository = Arc::new(InMemoryCustomerRepository::seeded());
    TestServer::new(build_router(AppState::new(repository))).unwrap()
}

#[tokio::test]
async fn health_reports_ok() {
    let server = test_server();
    let response = server.get("/health").await;
    response.assert_status_ok();
    let body: serde_json::Value = response.json();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn list_returns_the_seeded_customers() {
    let server = test_server();
    let response = server.get("/customer").await;
    response.assert_status_ok();

    let customers: Vec<Customer> = response.json();
    assert_eq!(customers.len(), 4);
    assert_eq!(customers[0].first_name, "Bill");
    assert_eq!(customers[3].last_name, "Giard");
}

#[tokio::test]
async fn get_by_id_returns_the_customer() {
    let server = test_server();
    let response = server.get("/customer/3").await;
    response.assert_status_ok();

    let customer: Customer = response.json();
    assert_eq!(
        customer,
        Customer {
            id: 3,
            first_name: "Satya".to_string(),
            last_name: "Nadella".to_string(),
            revenue: 300_000.0,
        }
    );
}

#[tokio::test]
async fn get_of_unknown_id_is_404() {
    let server = test_server();
    let response = server.get("/customer/99").await;
    response.assert_status_not_found();

    let body: serde_json::Value = response.json();
    assert_eq!(body["error"], "customer with id 99 not found");
}

#[tokio::test]
async fn post_assigns_the_next_id() {
    let server = test_server();
    let response = server
        .post("/customer")
        .json(&json!({
            "id": 0,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "revenue": 50000.0
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Customer = response.json();
    assert_eq!(created.id, 5);
    assert_eq!(created.first_name, "Ada");

    // 创建后立即可读
    let reloaded: Customer = server.get("/customer/5").await.json();
    assert_eq!(reloaded, created);
}

#[tokio::test]
async fn post_without_id_treats_it_as_unassigned() {
    let server = test_server();
    let response = server
        .post("/customer")
        .json(&json!({
            "firstName": "Grace",
            "lastName": "Hopper",
            "revenue": 60000.0
        }))
        .await;
    response.assert_status(StatusCode::CREATED);

    let created: Customer = response.json();
    assert_eq!(created.id, 5);
}

#[tokio::test]
async fn put_updates_the_stored_customer() {
    let server = test_server();
    let response = server
        .put("/customer")
        .json(&json!({
            "id": 2,
            "firstName": "Steven",
            "lastName": "Ballmer",
            "revenue": 250000.0
        }))
        .await;
    response.assert_status_ok();

    let updated: Customer = response.json();
    assert_eq!(updated.first_name, "Steven");

    // 原地更新：集合大小不变
    let customers: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(customers.len(), 4);
    assert_eq!(customers[1].revenue, 250_000.0);
}

#[tokio::test]
async fn put_of_unknown_id_is_404() {
    let server = test_server();
    let response = server
        .put("/customer")
        .json(&json!({
            "id": 99,
            "firstName": "Ada",
            "lastName": "Lovelace",
            "revenue": 50000.0
        }))
        .await;
    response.assert_status_not_found();

    let customers: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(customers.len(), 4);
}

#[tokio::test]
async fn delete_then_list_excludes_the_customer() {
    let server = test_server();

    // 与种子数据一起构成完整流程：新增 Ada（id 5），删除 id 2
    server
        .post("/customer")
        .json(&json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "revenue": 50000.0
        }))
        .await
        .assert_status(StatusCode::CREATED);

    let response = server.delete("/customer/2").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let customers: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(customers.len(), 4);
    assert!(customers.iter().all(|c| c.id != 2));
    assert!(customers.iter().any(|c| c.first_name == "Ada"));

    server.get("/customer/2").await.assert_status_not_found();
}

#[tokio::test]
async fn delete_of_unknown_id_is_still_no_content() {
    let server = test_server();
    let response = server.delete("/customer/99").await;
    response.assert_status(StatusCode::NO_CONTENT);

    let customers: Vec<Customer> = server.get("/customer").await.json();
    assert_eq!(customers.len(), 4);
}
