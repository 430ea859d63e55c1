//! End-to-end tests for the HTTP API, driven through the full router

use axum::{
    Router,
    body::Body,
    http::{Method, Request, StatusCode, header},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use foodcoach::{AppState, Config};

/// State with the external recipe service switched off, fallback recipes only
fn test_state() -> AppState {
    let mut config = Config::default();
    config.recipe_search.enabled = false;

    AppState::new(config).expect("Failed to build app state")
}

fn test_app() -> Router {
    foodcoach::create_app(test_state())
}

fn post_json(uri: &str, body: Value, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }
    builder.body(Body::empty()).unwrap()
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("Response body is not JSON")
}

/// `name=value` part of the session cookie set on a response
fn session_cookie(response: &axum::response::Response) -> String {
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .expect("Session cookie not set")
        .to_str()
        .unwrap();
    set_cookie.split(';').next().unwrap().to_string()
}

#[tokio::test]
async fn test_chat_answers_with_ingredient_sections() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/chat",
            json!({"message": "tomato, bread, cheese"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let reply = body["response"].as_str().unwrap();
    assert!(reply.contains("Recipes You Can Try"));
    assert!(reply.contains("Nutrition Facts (per 100g)"));
    assert!(reply.contains("Environmental Impact Analysis"));
}

#[tokio::test]
async fn test_chat_without_ingredients_returns_help() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/chat", json!({"message": "hello"}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(
        body["response"]
            .as_str()
            .unwrap()
            .contains("AI Food Waste and Nutrition Coach")
    );
}

#[tokio::test]
async fn test_chat_blank_message_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/chat", json!({"message": "   "}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
    assert_eq!(
        body["error"],
        "Please enter some ingredients or ask a question!"
    );
}

#[tokio::test]
async fn test_chat_missing_message_field_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/chat", json!({"text": "tomato"}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["success"], false);
}

#[tokio::test]
async fn test_chat_invalid_json_is_rejected() {
    let app = test_app();

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/chat")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_first_request_sets_session_cookie() {
    let app = test_app();

    let response = app.oneshot(get("/api/history", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let set_cookie = response
        .headers()
        .get(header::SET_COOKIE)
        .unwrap()
        .to_str()
        .unwrap();
    assert!(set_cookie.starts_with("foodcoach_session="));
    assert!(set_cookie.contains("HttpOnly"));
}

#[tokio::test]
async fn test_history_records_exchange_per_session() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/chat", json!({"message": "apple, rice"}), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let cookie = session_cookie(&response);

    // Known session: no new cookie
    let response = app
        .clone()
        .oneshot(get("/api/history", Some(&cookie)))
        .await
        .unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    let body = json_body(response).await;
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["role"], "user");
    assert_eq!(history[0]["text"], "apple, rice");
    assert_eq!(history[1]["role"], "agent");

    // Another browser sees nothing
    let response = app.oneshot(get("/api/history", None)).await.unwrap();
    let body = json_body(response).await;
    assert!(body["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_clear_then_chat_leaves_one_exchange() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/chat", json!({"message": "banana"}), None))
        .await
        .unwrap();
    let cookie = session_cookie(&response);

    let response = app
        .clone()
        .oneshot(post_json("/api/clear", json!({}), Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Chat history cleared successfully!");

    app.clone()
        .oneshot(post_json("/api/chat", json!({"message": "carrot"}), Some(&cookie)))
        .await
        .unwrap();

    let response = app
        .oneshot(get("/api/history", Some(&cookie)))
        .await
        .unwrap();
    let body = json_body(response).await;
    let history = body["history"].as_array().unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0]["text"], "carrot");
}

#[tokio::test]
async fn test_rejected_chat_does_not_touch_history() {
    let app = test_app();

    let response = app
        .clone()
        .oneshot(post_json("/api/chat", json!({"message": ""}), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let cookie = session_cookie(&response);

    let response = app
        .oneshot(get("/api/history", Some(&cookie)))
        .await
        .unwrap();
    let body = json_body(response).await;
    assert!(body["history"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_meal_plan_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/meal-plan",
            json!({"ingredients": ["spinach", "eggs", "tomato"]}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert!(body["meal_plan"].as_str().unwrap().contains("Shopping List"));
    assert_eq!(body["plan"]["days"].as_array().unwrap().len(), 7);
}

#[tokio::test]
async fn test_ingredient_endpoints_reject_empty_lists() {
    for uri in [
        "/api/meal-plan",
        "/api/impact",
        "/api/smart-recipes",
        "/api/expiration-tracker",
    ] {
        let app = test_app();

        let response = app
            .oneshot(post_json(uri, json!({"ingredients": []}), None))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{uri}");
        let body = json_body(response).await;
        assert_eq!(body["success"], false, "{uri}");
        assert_eq!(body["error"], "Please provide a list of ingredients", "{uri}");
    }
}

#[tokio::test]
async fn test_missing_ingredients_field_is_rejected() {
    let app = test_app();

    let response = app
        .oneshot(post_json("/api/impact", json!({}), None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_impact_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/impact",
            json!({"ingredients": ["beef", "bread"]}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["impact"]["ingredients"].as_array().unwrap().len(), 2);
    assert!(body["impact"]["totals"]["co2_reduced_kg"].as_f64().unwrap() > 0.0);
    assert!(body["achievement"]["level"].is_string());
    assert!(body["challenge"].is_object());
}

#[tokio::test]
async fn test_impact_counts_unknown_ingredients_as_zero() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/impact",
            json!({"ingredients": ["xyzzyx"]}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["impact"]["totals"]["co2_reduced_kg"], 0.0);
    assert_eq!(body["impact"]["unresolved"][0], "xyzzyx");
}

#[tokio::test]
async fn test_smart_recipes_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/smart-recipes",
            json!({"ingredients": ["chicken", "rice", "broccoli"]}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    let recipes = body["recipes"].as_array().unwrap();
    assert!(!recipes.is_empty());
    assert!(recipes.len() <= 5);
    assert_eq!(body["total_recipes"], recipes.len());
}

#[tokio::test]
async fn test_smart_recipes_unknown_cuisine_is_empty() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/smart-recipes",
            json!({"ingredients": ["chicken"], "cuisine": "martian"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["total_recipes"], 0);
}

#[tokio::test]
async fn test_expiration_tracker_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(post_json(
            "/api/expiration-tracker",
            json!({"ingredients": ["milk", "rice"], "storage_location": "fridge"}),
            None,
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);

    let predictions = body["expiration_predictions"].as_array().unwrap();
    assert_eq!(predictions.len(), 2);
    // Most urgent first
    assert!(
        predictions[0]["days_remaining"].as_f64().unwrap()
            <= predictions[1]["days_remaining"].as_f64().unwrap()
    );
    assert!(body["urgent_items"].is_array());
}

#[tokio::test]
async fn test_status_endpoint() {
    let app = test_app();

    let response = app.oneshot(get("/api/status", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert!(!body["features"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn test_sustainability_tip_endpoint() {
    let app = test_app();

    let response = app
        .oneshot(get("/api/sustainability-tip", None))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert!(body["tip"]["fact"].is_string());
    assert!(body["tip"]["action"].is_string());
}

#[tokio::test]
async fn test_health_is_outside_sessions() {
    let app = test_app();

    let response = app.oneshot(get("/health", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_index_page_is_served() {
    let app = test_app();

    let response = app.oneshot(get("/", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().starts_with("text/html"));
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store, no-cache, must-revalidate, proxy-revalidate"
    );
}

#[tokio::test]
async fn test_static_assets_are_cached() {
    let app = test_app();

    let response = app.oneshot(get("/static/app.js", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "public, max-age=31536000, immutable"
    );
}

#[tokio::test]
async fn test_unknown_static_asset_is_404() {
    let app = test_app();

    let response = app.oneshot(get("/static/missing.js", None)).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_stateless_endpoints_do_not_create_sessions() {
    let state = test_state();
    let app = foodcoach::create_app(state.clone());

    for _ in 0..20 {
        let response = app.clone().oneshot(get("/api/status", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
    }

    for uri in ["/", "/api/sustainability-tip", "/health"] {
        let response = app.clone().oneshot(get(uri, None)).await.unwrap();
        assert!(response.headers().get(header::SET_COOKIE).is_none(), "{uri}");
    }

    let response = app
        .clone()
        .oneshot(post_json("/api/impact", json!({"ingredients": ["rice"]}), None))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().get(header::SET_COOKIE).is_none());

    assert_eq!(state.sessions.len().await, 0);

    // The conversation routes still open one
    let response = app.oneshot(get("/api/history", None)).await.unwrap();
    assert!(response.headers().get(header::SET_COOKIE).is_some());
    assert_eq!(state.sessions.len().await, 1);
}
