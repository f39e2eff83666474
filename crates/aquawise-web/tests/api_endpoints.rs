//! Integration tests for the JSON API

use aquawise_core::{
    Entropy, PLUMBING_TIPS, PredictionRequest, generate_water_data, predict_usage, round2,
};
use aquawise_web::{AppState, create_router};
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use chrono::{Local, NaiveDate};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn router() -> Router {
    create_router(AppState::default())
}

async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, value)
}

async fn get(router: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(router, request).await
}

async fn post_json(router: Router, uri: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}

fn parse_date(value: &Value) -> NaiveDate {
    NaiveDate::parse_from_str(value.as_str().unwrap(), "%Y-%m-%d").unwrap()
}

fn history(usage: u32, days: usize) -> String {
    json!({
        "historical_data": vec![json!({ "usage": usage }); days],
        "weather_data": {}
    })
    .to_string()
}

#[tokio::test]
async fn test_water_usage_series() {
    let before = Local::now().date_naive();
    let (status, body) = get(router(), "/api/water-usage").await;
    assert_eq!(status, StatusCode::OK);

    let records = body.as_array().unwrap();
    assert_eq!(records.len(), 30);

    let dates: Vec<NaiveDate> = records.iter().map(|r| parse_date(&r["date"])).collect();
    for pair in dates.windows(2) {
        assert_eq!((pair[1] - pair[0]).num_days(), 1);
    }
    let last = *dates.last().unwrap();
    assert!(
        last == before || Some(last) == before.succ_opt(),
        "series ended on {}, expected {}",
        last,
        before
    );

    for record in records {
        let usage = record["usage"].as_u64().unwrap();
        assert!((80..=200).contains(&usage));
        assert!(record["leak_detected"].is_boolean());
    }
}

#[tokio::test]
async fn test_leak_alerts_bounded_and_leaking() {
    for _ in 0..20 {
        let (status, body) = get(router(), "/api/leak-alerts").await;
        assert_eq!(status, StatusCode::OK);

        let alerts = body.as_array().unwrap();
        assert!(alerts.len() <= 3);
        assert!(alerts.iter().all(|a| a["leak_detected"] == json!(true)));

        let dates: Vec<NaiveDate> = alerts.iter().map(|a| parse_date(&a["date"])).collect();
        assert!(dates.windows(2).all(|pair| pair[0] < pair[1]));
    }
}

#[tokio::test]
async fn test_plumbing_tips_verbatim() {
    let (status, body) = get(router(), "/api/plumbing-tips").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(PLUMBING_TIPS));

    let (_, again) = get(router(), "/api/plumbing-tips").await;
    assert_eq!(body, again);
}

#[tokio::test]
async fn test_water_savings_is_quarter_of_current() {
    for _ in 0..20 {
        let (status, body) = get(router(), "/api/water-savings").await;
        assert_eq!(status, StatusCode::OK);

        let current = body["current_usage"].as_f64().unwrap();
        let savings = body["potential_savings"].as_f64().unwrap();
        assert!((80.0..=200.0).contains(&current));
        assert_eq!(savings, round2(current * 0.25));
    }
}

#[tokio::test]
async fn test_predict_flat_history_range() {
    for _ in 0..20 {
        let (status, body) =
            post_json(router(), "/api/predict-usage", &history(100, 7)).await;
        assert_eq!(status, StatusCode::OK);
        let prediction = body["prediction"].as_f64().unwrap();
        assert!((80.0..=120.0).contains(&prediction), "got {}", prediction);
    }
}

#[tokio::test]
async fn test_predict_end_to_end_example() {
    let (status, body) = post_json(router(), "/api/predict-usage", &history(150, 7)).await;
    assert_eq!(status, StatusCode::OK);
    let prediction = body["prediction"].as_f64().unwrap();
    assert!((80.0..=200.0).contains(&prediction));
}

#[tokio::test]
async fn test_predict_accepts_generated_records() {
    let (_, usage) = get(router(), "/api/water-usage").await;
    let body = json!({ "historical_data": usage }).to_string();

    let (status, result) = post_json(router(), "/api/predict-usage", &body).await;
    assert_eq!(status, StatusCode::OK);
    assert!(result["prediction"].is_number());
}

#[tokio::test]
async fn test_predict_missing_fields_default_then_reject_short_history() {
    let (status, body) = post_json(router(), "/api/predict-usage", "{}").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Insufficient history"));
}

#[tokio::test]
async fn test_predict_short_history_is_bad_request() {
    let (status, body) = post_json(router(), "/api/predict-usage", &history(150, 6)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["error"],
        json!("Insufficient history: at least 7 entries required, got 6")
    );
}

#[tokio::test]
async fn test_predict_malformed_json_is_bad_request() {
    let (status, body) = post_json(router(), "/api/predict-usage", "{not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());

    let (status, _) = post_json(router(), "/api/predict-usage", r#"{"historical_data": 5}"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_predict_skips_entries_outside_window() {
    let mut entries = vec![json!({ "date": "2024-01-01" }), json!(null)];
    entries.extend(vec![json!({ "usage": 100 }); 7]);
    let body = json!({ "historical_data": entries }).to_string();

    let (status, result) = post_json(router(), "/api/predict-usage", &body).await;
    assert_eq!(status, StatusCode::OK);
    let prediction = result["prediction"].as_f64().unwrap();
    assert!((80.0..=120.0).contains(&prediction), "got {}", prediction);
}

#[tokio::test]
async fn test_predict_missing_usage_in_window_is_bad_request() {
    let mut entries = vec![json!({ "usage": 100 }); 7];
    entries[4] = json!({ "date": "2024-01-01" });
    let body = json!({ "historical_data": entries }).to_string();

    let (status, result) = post_json(router(), "/api/predict-usage", &body).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(result["error"], json!("Missing numeric usage at index 4"));

    // A single entry without usage is short before it is malformed
    let (status, result) = post_json(
        router(),
        "/api/predict-usage",
        r#"{"historical_data": [{"date": "2024-01-01"}]}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(result["error"].as_str().unwrap().contains("Insufficient history"));
}

#[tokio::test]
async fn test_predict_without_content_type_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/api/predict-usage")
        .body(Body::from(history(100, 7)))
        .unwrap();
    let (status, _) = send(router(), request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_seeded_entropy_reproduces_responses() {
    let entropy = Entropy::Seeded(7);
    let seeded = create_router(AppState::new(entropy));

    let before = Local::now().date_naive();
    let (_, first) = get(seeded.clone(), "/api/water-usage").await;
    let (_, second) = get(seeded.clone(), "/api/water-usage").await;

    let expected_for = |day: NaiveDate| {
        serde_json::to_value(generate_water_data(&mut entropy.rng(), day)).unwrap()
    };
    let candidates: Vec<Value> = std::iter::once(before)
        .chain(before.succ_opt())
        .map(expected_for)
        .collect();
    assert!(candidates.contains(&first));
    assert!(candidates.contains(&second));

    let request = PredictionRequest::from_usages([150.0; 7]);
    let expected = predict_usage(&mut entropy.rng(), &request).unwrap();
    let (_, body) = post_json(seeded, "/api/predict-usage", &history(150, 7)).await;
    assert_eq!(body["prediction"].as_f64().unwrap(), expected.prediction);
}

#[tokio::test]
async fn test_index_serves_html() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = router().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(content_type.starts_with("text/html"));

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains("/api/water-usage"));
}

#[tokio::test]
async fn test_health_and_not_found() {
    let (status, body) = get(router(), "/api/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], json!("healthy"));

    let (status, body) = get(router(), "/api/unknown").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Not found" }));
}
