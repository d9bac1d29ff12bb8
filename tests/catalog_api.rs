//! Table / category / menu CRUD integration tests

mod common;

use axum::http::StatusCode;
use common::{get, send_json, test_app};
use serde_json::json;

// ========================================================================
// Tables
// ========================================================================

#[tokio::test]
async fn table_registration_rejects_duplicates() {
    let (app, _state) = test_app().await;

    let (status, body) = send_json(&app, "POST", "/api/tables/add", json!({ "number": "5" })).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Table added");
    assert_eq!(body["table"]["number"], "5");
    assert_eq!(body["table"]["status"], "active");

    let (status, body) = send_json(&app, "POST", "/api/tables/add", json!({ "number": "5" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Table already exists.");

    let (status, body) = send_json(&app, "POST", "/api/tables/add", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Table number is required.");
}

#[tokio::test]
async fn tables_list_sorted_by_number() {
    let (app, _state) = test_app().await;

    for number in ["3", "1", "2"] {
        send_json(&app, "POST", "/api/tables/add", json!({ "number": number })).await;
    }

    let (status, tables) = get(&app, "/api/tables/all").await;
    assert_eq!(status, StatusCode::OK);
    let numbers: Vec<&str> = tables
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["number"].as_str().unwrap())
        .collect();
    assert_eq!(numbers, vec!["1", "2", "3"]);
}

#[tokio::test]
async fn check_activates_an_inactive_table() {
    let (app, state) = test_app().await;

    send_json(&app, "POST", "/api/tables/add", json!({ "number": "7" })).await;

    // Deactivate behind the API's back
    state
        .db
        .query("UPDATE dining_table SET status = 'inactive' WHERE number = '7'")
        .await
        .unwrap();

    let (status, body) = get(&app, "/api/tables/check/7").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Table valid and activated");
    assert_eq!(body["table"]["status"], "active");

    let (status, body) = get(&app, "/api/tables/check/99").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Table not found");
}

// ========================================================================
// Categories
// ========================================================================

#[tokio::test]
async fn category_lifecycle() {
    let (app, _state) = test_app().await;

    let (status, created) = send_json(
        &app,
        "POST",
        "/api/categories",
        json!({ "name": "south-indian", "displayName": "South Indian", "sortOrder": 2 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "south-indian");
    assert_eq!(created["displayName"], "South Indian");
    assert_eq!(created["isVisible"], true);
    let id = created["id"].as_str().unwrap().to_string();

    // displayName falls back to name
    let (status, fallback) = send_json(
        &app,
        "POST",
        "/api/categories",
        json!({ "name": "drinks", "sortOrder": 1 }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(fallback["displayName"], "drinks");

    // Duplicate name is a 400 under the legacy contract
    let (status, body) =
        send_json(&app, "POST", "/api/categories", json!({ "name": "drinks" })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Category already exists");

    // Sorted by sortOrder ascending
    let (_, listed) = get(&app, "/api/categories").await;
    let names: Vec<&str> = listed
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["drinks", "south-indian"]);

    // Update
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/categories/{id}"),
        json!({ "sortOrder": 0 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["sortOrder"], 0);
    assert_eq!(updated["displayName"], "South Indian");

    // Delete, then 404 on repeat
    let (status, body) = send_json(&app, "DELETE", &format!("/api/categories/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Category deleted");

    let (status, _) = send_json(&app, "DELETE", &format!("/api/categories/{id}"), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn category_update_unknown_id_is_404() {
    let (app, _state) = test_app().await;

    let (status, _) = send_json(
        &app,
        "PUT",
        "/api/categories/doesnotexist",
        json!({ "sortOrder": 5 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ========================================================================
// Menu
// ========================================================================

#[tokio::test]
async fn menu_lifecycle_and_availability_filter() {
    let (app, _state) = test_app().await;

    let (status, dosa) = send_json(
        &app,
        "POST",
        "/api/menu",
        json!({
            "name": "Dosa",
            "category": "south-indian",
            "availability": true,
            "price": 80,
            "jainAvailable": true
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(dosa["jainAvailable"], true);
    let dosa_id = dosa["id"].as_str().unwrap().to_string();

    send_json(
        &app,
        "POST",
        "/api/menu",
        json!({ "name": "Paneer Tikka", "category": "starters", "availability": false }),
    )
    .await;

    let (_, all) = get(&app, "/api/menu").await;
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, available) = get(&app, "/api/menu/available").await;
    let available = available.as_array().unwrap();
    assert_eq!(available.len(), 1);
    assert_eq!(available[0]["name"], "Dosa");

    // Flip availability off
    let (status, flipped) = send_json(
        &app,
        "PATCH",
        &format!("/api/menu/{dosa_id}/availability"),
        json!({ "availability": false }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(flipped["availability"], false);

    let (_, available) = get(&app, "/api/menu/available").await;
    assert!(available.as_array().unwrap().is_empty());

    // Full update
    let (status, updated) = send_json(
        &app,
        "PUT",
        &format!("/api/menu/{dosa_id}"),
        json!({ "price": 90 }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["price"], json!(90.0));
    assert_eq!(updated["name"], "Dosa");

    // Delete, then 404
    let (status, _) = send_json(&app, "DELETE", &format!("/api/menu/{dosa_id}"), json!({})).await;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = send_json(&app, "DELETE", &format!("/api/menu/{dosa_id}"), json!({})).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
