mod common;

use axum::{
    Json, Router,
    body::{Body, to_bytes},
    extract::{FromRequest, State},
    http::{
        Request, StatusCode,
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE, ORIGIN},
    },
    response::{IntoResponse, Response},
};
use carprice::application::context::AppContext;
use carprice::application::pricing::PricePredictor;
use carprice::application::training::Trainer;
use carprice::interfaces::http::{self, handlers};
use common::Car;
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceExt;

fn context() -> Arc<AppContext> {
    let predictor = PricePredictor::new(Trainer::fit(&common::training_set()).unwrap());
    let ctx =
        AppContext::from_parts(predictor, &common::training_set(), &common::test_set()).unwrap();
    Arc::new(ctx)
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn predict(ctx: Arc<AppContext>, body: &str) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri("/predict")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let payload = Json::<Value>::from_request(request, &()).await;
    handlers::predict_handler(State(ctx), payload)
        .await
        .into_response()
}

#[tokio::test]
async fn test_index_greets() {
    assert_eq!(
        handlers::index_handler().await,
        "Welcome to the Used Car Price Prediction API!"
    );
}

#[tokio::test]
async fn test_predict_returns_price() {
    let ctx = context();
    let car = Car::nth(42);
    let body = Value::Object(car.raw()).to_string();

    let response = predict(ctx, &body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let price = json["predicted_price"].as_f64().unwrap();
    assert!((price - car.price()).abs() < 1e-6);
}

#[tokio::test]
async fn test_predict_rejects_invalid_fields() {
    let ctx = context();

    let mut raw = Car::nth(1).raw();
    raw.insert("Year".to_string(), json!(1899));
    let response = predict(ctx.clone(), &Value::Object(raw).to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Invalid Year. Year should be between 1900 and 2024." })
    );

    let mut raw = Car::nth(1).raw();
    raw.remove("Seats");
    let response = predict(ctx.clone(), &Value::Object(raw).to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await,
        json!({ "error": "Missing required field: Seats" })
    );

    let mut raw = Car::nth(1).raw();
    raw.insert("Name".to_string(), json!("DeLorean DMC-12"));
    let response = predict(ctx, &Value::Object(raw).to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let message = body_json(response).await["error"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(message.contains("DeLorean DMC-12"));
}

#[tokio::test]
async fn test_predict_rejects_malformed_json() {
    let ctx = context();

    for body in ["{\"Name\": ", "[1, 2, 3]", "\"just text\""] {
        let response = predict(ctx.clone(), body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "body {}", body);
        assert!(body_json(response).await["error"].is_string());
    }
}

#[tokio::test]
async fn test_car_data_lists_training_values() {
    let ctx = context();
    let response = handlers::car_data_handler(State(ctx)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    for key in [
        "car_models",
        "years",
        "locations",
        "fuel_types",
        "transmissions",
        "mileage",
        "engine",
        "power",
        "seats",
        "new_price",
        "kilometers_driven",
    ] {
        assert!(json[key].is_array(), "missing {}", key);
    }
    assert_eq!(json["car_models"].as_array().unwrap().len(), 5);
    assert_eq!(json["transmissions"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_evaluate_reports_cached_metrics() {
    let ctx = context();
    let Json(metrics) = handlers::evaluate_handler(State(ctx.clone())).await;
    assert_eq!(metrics, ctx.metrics);

    let json = serde_json::to_value(metrics).unwrap();
    assert!(json["Mean_Absolute_Error"].as_f64().unwrap() < 1e-6);
    assert!(json["Mean_Squared_Error"].is_number());
    assert!((json["R_squared"].as_f64().unwrap() - 1.0).abs() < 1e-6);
}

async fn send(app: Router, method: &str, uri: &str, body: Body) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(ORIGIN, "http://localhost:3000")
        .header(CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();
    app.oneshot(request).await.unwrap()
}

#[tokio::test]
async fn test_router_serves_every_route() {
    let app = http::router(context(), true);

    let response = send(app.clone(), "GET", "/", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], handlers::WELCOME.as_bytes());

    let response = send(app.clone(), "GET", "/get_car_data", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["car_models"].is_array());

    let response = send(app.clone(), "GET", "/evaluate", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(body_json(response).await["R_squared"].is_number());

    let car = Car::nth(7);
    let body = Body::from(Value::Object(car.raw()).to_string());
    let response = send(app.clone(), "POST", "/predict", body).await;
    assert_eq!(response.status(), StatusCode::OK);
    let price = body_json(response).await["predicted_price"].as_f64().unwrap();
    assert!((price - car.price()).abs() < 1e-6);

    let response = send(app.clone(), "POST", "/predict", Body::from("{")).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(app.clone(), "GET", "/predict", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

    let response = send(app, "GET", "/no_such_route", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_cors_header_follows_config() {
    let ctx = context();

    let response = send(http::router(ctx.clone(), true), "GET", "/evaluate", Body::empty()).await;
    assert_eq!(
        response
            .headers()
            .get(ACCESS_CONTROL_ALLOW_ORIGIN)
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );

    let response = send(http::router(ctx, false), "GET", "/evaluate", Body::empty()).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(ACCESS_CONTROL_ALLOW_ORIGIN).is_none());
}
