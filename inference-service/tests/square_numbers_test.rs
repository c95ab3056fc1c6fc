mod common;

use common::TestApp;
use serde_json::json;

#[tokio::test]
async fn squares_given_numbers() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/square_numbers", json!({ "numbers": [1, 2, 3] }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "original": [1, 2, 3], "squared": [1, 4, 9] }));
}

#[tokio::test]
async fn missing_numbers_default_to_one_two_three() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/square_numbers", json!({})).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "original": [1, 2, 3], "squared": [1, 4, 9] }));
}

#[tokio::test]
async fn empty_list_squares_to_empty_list() {
    let app = TestApp::spawn().await;

    let response = app.post_json("/square_numbers", json!({ "numbers": [] })).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "original": [], "squared": [] }));
}

#[tokio::test]
async fn order_and_negatives_are_preserved() {
    let app = TestApp::spawn().await;
    let numbers = vec![-4i64, 7, 0, -1, 12, 7];

    let response = app
        .post_json("/square_numbers", json!({ "numbers": numbers }))
        .await;

    assert_eq!(response.status().as_u16(), 200);
    let body: serde_json::Value = response.json().await.unwrap();
    let squared: Vec<i64> = serde_json::from_value(body["squared"].clone()).unwrap();
    assert_eq!(squared.len(), numbers.len());
    for (x, sq) in numbers.iter().zip(&squared) {
        assert_eq!(*sq, x * x);
    }
    assert_eq!(body["original"], json!(numbers));
}

#[tokio::test]
async fn non_integer_input_is_rejected_with_422() {
    let app = TestApp::spawn().await;

    for payload in [
        json!({ "numbers": "1,2,3" }),
        json!({ "numbers": [1, "two", 3] }),
        json!({ "numbers": [1.5] }),
    ] {
        let response = app.post_json("/square_numbers", payload).await;
        assert_eq!(response.status().as_u16(), 422);
    }
}

#[tokio::test]
async fn overflow_returns_generic_500() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json("/square_numbers", json!({ "numbers": [1, i64::MAX] }))
        .await;

    assert_eq!(response.status().as_u16(), 500);
    let body: serde_json::Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "detail": "Internal error" }));
}
