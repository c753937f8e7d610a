use super::*;
use crate::ScriptedDice;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app(roll: f64) -> Router {
    router(GameApi::with_dice(Box::new(ScriptedDice::always(roll))))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let request = axum::http::Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(axum::body::Body::from(body.unwrap_or("").to_string()))
        .expect("request should build");

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body should read");
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("body should be json")
    };
    (status, value)
}

async fn create(app: &Router, name: Option<&str>) -> u64 {
    let body = name.map(|name| json!({ "name": name }).to_string());
    let (status, value) = send(app, Method::POST, "/survivors", body.as_deref()).await;
    assert_eq!(status, StatusCode::CREATED);
    value["survivor"]["id"].as_u64().expect("numeric id")
}

async fn decide(app: &Router, id: u64, decision: &str) -> (StatusCode, Value) {
    let body = json!({ "decision": decision }).to_string();
    send(
        app,
        Method::POST,
        &format!("/survivors/{id}/decisions"),
        Some(&body),
    )
    .await
}

#[tokio::test]
async fn create_survivor_returns_defaults() {
    let app = app(0.0);
    let (status, value) = send(&app, Method::POST, "/survivors", Some(r#"{"name":"Ada"}"#)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(value["message"], json!("Survivor created successfully"));
    let survivor = &value["survivor"];
    assert_eq!(survivor["id"], json!(1));
    assert_eq!(survivor["name"], json!("Ada"));
    assert_eq!(survivor["hunger"], json!(100));
    assert_eq!(survivor["health"], json!(100));
    assert_eq!(survivor["morale"], json!(100));
    assert_eq!(survivor["day"], json!(1));
    assert_eq!(survivor["status"], json!("alive"));
    assert_eq!(survivor["decisions"], json!([]));
    assert!(survivor["createdAt"].is_string());
}

#[tokio::test]
async fn empty_body_creates_unknown_survivor_under_api_prefix() {
    let app = app(0.0);
    let (status, value) = send(&app, Method::POST, "/api/survivors", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(value["survivor"]["name"], json!("Unknown"));
    assert_eq!(create(&app, None).await, 2);
}

#[tokio::test]
async fn rest_decision_applies_daily_drain() {
    let app = app(0.0);
    let id = create(&app, Some("Ada")).await;
    let (status, value) = decide(&app, id, "rest").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["message"], json!("Rested peacefully"));
    assert_eq!(value["scoreGain"], json!(20));
    let survivor = &value["survivor"];
    assert_eq!(survivor["health"], json!(90));
    assert_eq!(survivor["hunger"], json!(90));
    assert_eq!(survivor["morale"], json!(90));
    assert_eq!(survivor["day"], json!(2));
    assert_eq!(survivor["score"], json!(20));
    assert_eq!(
        survivor["decisions"],
        json!([{ "day": 1, "decision": "rest", "result": "Rested peacefully" }])
    );
}

#[tokio::test]
async fn unknown_survivor_is_404() {
    let app = app(0.0);
    let expected = json!({ "message": "Survivor not found", "error": true });

    let (status, value) = decide(&app, 99, "rest").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value, expected);

    let (status, value) = send(&app, Method::POST, "/survivors/abc/decisions", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(value, expected);

    let (status, _) = send(&app, Method::GET, "/survivors/99", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn invalid_choice_is_200_and_changes_nothing() {
    let app = app(0.0);
    let id = create(&app, None).await;
    let (_, before) = send(&app, Method::GET, &format!("/survivors/{id}"), None).await;

    let (status, value) = decide(&app, id, "sleep").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value, json!({ "message": "Invalid Choice", "error": true }));

    let (_, after) = send(&app, Method::GET, &format!("/survivors/{id}"), None).await;
    assert_eq!(before, after);
    assert_eq!(after["survivor"]["day"], json!(1));
}

#[tokio::test]
async fn missing_decision_is_rejected_explicitly() {
    let app = app(0.0);
    let id = create(&app, None).await;
    let (status, value) = send(
        &app,
        Method::POST,
        &format!("/survivors/{id}/decisions"),
        Some("{}"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({ "message": "Missing decision", "error": true }));
}

#[tokio::test]
async fn dead_survivor_rejects_further_decisions() {
    let app = app(0.0);
    let id = create(&app, None).await;

    let mut last = Value::Null;
    for _ in 0..5 {
        let (status, value) = decide(&app, id, "allies").await;
        assert_eq!(status, StatusCode::OK);
        last = value;
    }
    assert_eq!(last["survivor"]["status"], json!("dead"));
    assert_eq!(last["survivor"]["health"], json!(0));

    let (status, value) = decide(&app, id, "rest").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        value,
        json!({ "message": "Survivor died or escaped", "error": true })
    );

    let (_, view) = send(&app, Method::GET, &format!("/survivors/{id}"), None).await;
    assert_eq!(view["survivor"]["day"], json!(6));
    assert_eq!(view["survivor"]["decisions"].as_array().map(Vec::len), Some(5));
}

#[tokio::test]
async fn leaderboard_returns_top_ten_with_total() {
    let app = app(0.0);
    for score in 0..12 {
        let body = json!({ "name": format!("p{score}"), "score": score, "days": 3, "survived": false })
            .to_string();
        let (status, value) = send(&app, Method::POST, "/leaderboard", Some(&body)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(value["message"], json!("Added entry"));
        assert_eq!(value["entry"]["score"], json!(score));
        assert!(value["entry"]["timeStamp"].is_string());
    }

    let (status, value) = send(&app, Method::GET, "/api/leaderboard", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["length"], json!(12));
    let scores: Vec<i64> = value["leaderboard"]
        .as_array()
        .expect("leaderboard array")
        .iter()
        .filter_map(|entry| entry["score"].as_i64())
        .collect();
    assert_eq!(scores, vec![11, 10, 9, 8, 7, 6, 5, 4, 3, 2]);
}

#[tokio::test]
async fn leaderboard_stores_pass_through_fields_as_given() {
    let app = app(0.0);
    let body = json!({ "name": 42, "score": 10, "days": -1, "survived": "yes" }).to_string();
    let (status, value) = send(&app, Method::POST, "/leaderboard", Some(&body)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["entry"]["name"], json!(42));
    assert_eq!(value["entry"]["days"], json!(-1));
    assert_eq!(value["entry"]["survived"], json!("yes"));

    let body = json!({ "score": 4, "days": 3.5 }).to_string();
    let (status, value) = send(&app, Method::POST, "/leaderboard", Some(&body)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(value["entry"]["days"], json!(3.5));

    let (_, page) = send(&app, Method::GET, "/leaderboard", None).await;
    assert_eq!(page["length"], json!(2));
    assert_eq!(page["leaderboard"][0]["survived"], json!("yes"));
}

#[tokio::test]
async fn signed_or_padded_ids_are_not_found() {
    let app = app(0.0);
    let id = create(&app, None).await;
    assert_eq!(id, 1);

    for raw in ["+1", "%201", "1%20", "01a", "-1", "99999999999999999999999"] {
        let (status, value) = send(
            &app,
            Method::POST,
            &format!("/survivors/{raw}/decisions"),
            Some(r#"{"decision":"rest"}"#),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND, "id {raw}");
        assert_eq!(value["message"], json!("Survivor not found"));
    }

    let (_, view) = send(&app, Method::GET, "/survivors/1", None).await;
    assert_eq!(view["survivor"]["day"], json!(1));
}

#[tokio::test]
async fn leaderboard_submission_requires_score() {
    let app = app(0.0);
    let (status, value) = send(
        &app,
        Method::POST,
        "/leaderboard",
        Some(r#"{"name":"Ada","days":4}"#),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value, json!({ "message": "Missing score", "error": true }));
}

#[tokio::test]
async fn malformed_json_is_400() {
    let app = app(0.0);
    let (status, value) = send(&app, Method::POST, "/survivors", Some("{not json")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(value["error"], json!(true));
}

#[tokio::test]
async fn preflight_gets_cors_headers() {
    let app = app(0.0);
    let request = axum::http::Request::builder()
        .method(Method::OPTIONS)
        .uri("/survivors")
        .body(axum::body::Body::empty())
        .expect("request should build");
    let response = app.oneshot(request).await.expect("router is infallible");

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|value| value.to_str().ok()),
        Some("*")
    );
}
