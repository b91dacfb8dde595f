use axum::http::Method;
use serde_json::json;

mod common;
use common::{read_bytes, read_json, spawn_app};

#[tokio::test]
async fn expenses_roll_up_into_the_dashboard() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("dana@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(&token),
            Some(json!({ "name": "Groceries", "budgetAmount": "100" })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let category = read_json(response).await;
    let category_id = category["id"].as_str().unwrap().to_string();

    for amount in ["30", "15.50"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/expenses",
                Some(&token),
                Some(json!({
                    "categoryId": category_id,
                    "amount": amount,
                    "note": "weekly shop",
                    "entryDate": "2025-08-10",
                })),
            )
            .await;
        assert_eq!(response.status(), 201);
    }

    let response = app
        .request(
            Method::GET,
            "/api/v1/dashboard?period=2025-08",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    let dashboard = read_json(response).await;

    let rows = dashboard["report"]["rows"].as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "Groceries");
    assert_eq!(rows[0]["spent"], 45.5);
    assert_eq!(rows[0]["percentUsed"], 45.5);
    assert_eq!(dashboard["report"]["total"]["budget"], 100.0);
    assert_eq!(dashboard["chart"]["labels"][0], "Groceries");
    assert_eq!(
        dashboard["report"]["recentExpenses"]
            .as_array()
            .unwrap()
            .len(),
        2
    );
}

#[tokio::test]
async fn invalid_expense_leaves_the_store_unchanged() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("lee@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(&token),
            Some(json!({ "name": "Dining", "budgetAmount": "50" })),
        )
        .await;
    let category = read_json(response).await;
    let category_id = category["id"].as_str().unwrap();

    for amount in ["-5", "0"] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/expenses",
                Some(&token),
                Some(json!({ "categoryId": category_id, "amount": amount })),
            )
            .await;
        assert_eq!(response.status(), 422);
    }

    let response = app
        .request(Method::GET, "/api/v1/expenses", Some(&token), None)
        .await;
    let expenses = read_json(response).await;
    assert_eq!(expenses.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn unknown_category_is_rejected() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("ash@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "categoryId": "no-such-category", "amount": "10" })),
        )
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn duplicate_category_name_conflicts() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("kim@example.com", "hunter2hunter2")
        .await;

    for expected in [201, 409] {
        let response = app
            .request(
                Method::POST,
                "/api/v1/categories",
                Some(&token),
                Some(json!({ "name": "Rent", "budgetAmount": "800" })),
            )
            .await;
        assert_eq!(response.status(), expected);
    }
}

#[tokio::test]
async fn category_with_expenses_cannot_be_deleted() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("rory@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(&token),
            Some(json!({ "name": "Travel", "budgetAmount": "200" })),
        )
        .await;
    let category = read_json(response).await;
    let category_id = category["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token),
            Some(json!({ "categoryId": category_id, "amount": "20" })),
        )
        .await;
    assert_eq!(response.status(), 201);
    let expense = read_json(response).await;
    let expense_id = expense["id"].as_str().unwrap().to_string();

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/categories/{category_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 409);

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/expenses/{expense_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 204);

    let response = app
        .request(
            Method::DELETE,
            &format!("/api/v1/categories/{category_id}"),
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 204);
}

#[tokio::test]
async fn users_cannot_see_each_other() {
    let app = spawn_app().await;
    let token_a = app
        .register_and_login("alex@example.com", "hunter2hunter2")
        .await;
    let token_b = app
        .register_and_login("blair@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(&token_a),
            Some(json!({ "name": "Gifts", "budgetAmount": "40" })),
        )
        .await;
    let category = read_json(response).await;
    let category_id = category["id"].as_str().unwrap();

    let response = app
        .request(
            Method::POST,
            "/api/v1/expenses",
            Some(&token_b),
            Some(json!({ "categoryId": category_id, "amount": "10" })),
        )
        .await;
    assert_eq!(response.status(), 404);

    let response = app
        .request(Method::GET, "/api/v1/categories", Some(&token_b), None)
        .await;
    let categories = read_json(response).await;
    assert_eq!(categories.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn pdf_export_returns_a_document() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("pat@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::POST,
            "/api/v1/categories",
            Some(&token),
            Some(json!({ "name": "Utilities", "budgetAmount": "120" })),
        )
        .await;
    assert_eq!(response.status(), 201);

    let response = app
        .request(
            Method::GET,
            "/api/v1/export/pdf?period=2025-08",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(
        response.headers()["content-type"].to_str().unwrap(),
        "application/pdf"
    );
    let bytes = read_bytes(response).await;
    assert!(bytes.starts_with(b"%PDF"));
}

#[tokio::test]
async fn bad_period_is_rejected() {
    let app = spawn_app().await;
    let token = app
        .register_and_login("morgan@example.com", "hunter2hunter2")
        .await;

    let response = app
        .request(
            Method::GET,
            "/api/v1/dashboard?period=2025-13",
            Some(&token),
            None,
        )
        .await;
    assert_eq!(response.status(), 422);
}
