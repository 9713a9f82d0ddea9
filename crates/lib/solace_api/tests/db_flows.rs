//! End-to-end flows against a real PostgreSQL instance.
//!
//! Set `TEST_DATABASE_URL` to run these; without it every test returns
//! early. Migrations are applied on first connect, and each test uses a
//! unique email so runs never collide.

use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use solace_api::config::ApiConfig;
use solace_api::{AppState, router};
use solace_core::completion::{CompletionConfig, SearchConfig};
use tower::ServiceExt;

async fn test_state() -> Option<AppState> {
    let url = std::env::var("TEST_DATABASE_URL").ok()?;
    let pool = sqlx::PgPool::connect(&url).await.expect("connect");
    solace_api::migrate(&pool).await.expect("migrate");
    Some(AppState {
        pool,
        config: ApiConfig {
            bind_addr: "127.0.0.1:0".into(),
            database_url: url,
            completion: CompletionConfig {
                endpoint: None,
                api_key: None,
                deployment: None,
                api_version: "2024-06-01".into(),
                embedding_model: None,
                search: SearchConfig {
                    endpoint: None,
                    api_key: None,
                    index_name: None,
                },
            },
        },
    })
}

fn unique_email(tag: &str) -> String {
    format!("{tag}-{}@example.com", uuid::Uuid::new_v4())
}

fn json_post(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap()
}

async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("parse JSON")
}

async fn sign_up(app: &axum::Router, name: &str, email: &str, password: &str) -> StatusCode {
    let body = serde_json::json!({"name": name, "email": email, "password": password});
    app.clone()
        .oneshot(json_post("/sign_up", body.to_string()))
        .await
        .expect("request")
        .status()
}

#[tokio::test]
async fn duplicate_sign_up_is_a_conflict() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let email = unique_email("dup");
    assert_eq!(sign_up(&app, "Ada", &email, "hunter22").await, StatusCode::CREATED);
    assert_eq!(sign_up(&app, "Ada", &email, "hunter22").await, StatusCode::CONFLICT);
}

#[tokio::test]
async fn sign_up_then_check_user_returns_matching_profile() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let email = unique_email("check");
    assert_eq!(sign_up(&app, "Ada", &email, "hunter22").await, StatusCode::CREATED);

    let body = serde_json::json!({"email": email, "password": "hunter22"});
    let resp = app
        .clone()
        .oneshot(json_post("/check_user", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["name"], "Ada");
    assert_eq!(json["email"], email);

    // Wrong password is distinguished from an unknown email.
    let body = serde_json::json!({"email": email, "password": "wrong"});
    let resp = app
        .clone()
        .oneshot(json_post("/check_user", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body = serde_json::json!({"email": unique_email("ghost"), "password": "hunter22"});
    let resp = app
        .oneshot(json_post("/check_user", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn login_never_reveals_which_credential_failed() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let email = unique_email("login");
    assert_eq!(sign_up(&app, "Ada", &email, "hunter22").await, StatusCode::CREATED);

    let body = serde_json::json!({"email": email, "password": "wrong"});
    let resp = app
        .clone()
        .oneshot(json_post("/get_user_info", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let wrong_password = body_json(resp).await;

    let body = serde_json::json!({"email": unique_email("ghost"), "password": "hunter22"});
    let resp = app
        .oneshot(json_post("/get_user_info", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    let unknown_email = body_json(resp).await;

    assert_eq!(wrong_password["message"], unknown_email["message"]);
}

#[tokio::test]
async fn wellness_update_is_visible_in_user_info() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let email = unique_email("mood");
    assert_eq!(sign_up(&app, "Ada", &email, "hunter22").await, StatusCode::CREATED);

    let body = serde_json::json!({"email": email, "updates": {"mood": 5, "sleep_hours": 7.5}});
    let resp = app
        .clone()
        .oneshot(json_post("/update_wellness", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_json(resp).await["success"], true);

    let body = serde_json::json!({"email": email});
    let resp = app
        .oneshot(json_post("/user_info", body.to_string()))
        .await
        .expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    assert_eq!(json["mood"], 5);
    assert_eq!(json["sleep_hours"], 7.5);
}

#[tokio::test]
async fn journal_creation_lists_newest_first() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let email = unique_email("journal");
    let mut ids = Vec::new();
    for (content, score) in [("rough morning", 3), ("better evening", 7)] {
        let body = serde_json::json!({
            "email": email,
            "content": content,
            "activities": ["walking"],
            "score": score
        });
        let resp = app
            .clone()
            .oneshot(json_post("/journal_entries", body.to_string()))
            .await
            .expect("request");
        assert_eq!(resp.status(), StatusCode::CREATED);
        ids.push(body_json(resp).await["id"].as_str().expect("id").to_string());
    }

    let req = Request::builder()
        .uri(format!("/journal_entries?email={email}"))
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let entries = json["entries"].as_array().expect("entries");
    assert_eq!(entries.len(), 2);
    // Newest first: the second insert leads.
    assert_eq!(entries[0]["id"], ids[1].as_str());
    assert_eq!(entries[1]["id"], ids[0].as_str());
    assert_eq!(entries[0]["content"], "better evening");
    assert_eq!(entries[0]["activities"], serde_json::json!(["walking"]));

    // Fixed date format: "YYYY-MM-DD HH:MM:SS"
    let date = entries[0]["date"].as_str().expect("date");
    assert_eq!(date.len(), 19);
    assert_eq!(&date[4..5], "-");
    assert_eq!(&date[10..11], " ");
}

#[tokio::test]
async fn affirm_returns_exactly_one_seeded_row() {
    let Some(state) = test_state().await else { return };
    let app = router(state);

    let req = Request::builder()
        .uri("/affirm")
        .body(Body::empty())
        .unwrap();
    let resp = app.oneshot(req).await.expect("request");
    assert_eq!(resp.status(), StatusCode::OK);

    let json = body_json(resp).await;
    let affirmations = json["affirmations"].as_array().expect("affirmations");
    assert_eq!(affirmations.len(), 1);
    assert!(affirmations[0]["text"].is_string());
    assert!(affirmations[0]["category"].is_string());
}
