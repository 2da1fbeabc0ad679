mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, test_data, TestContext};

#[actix_web::test]
async fn test_register_then_token_flow_success() {
    println!("\n\n[+] Running test: test_register_then_token_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/create/")
        .set_json(test_data::sample_user())
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

    let req = test::TestRequest::post()
        .uri("/user/token/")
        .set_json(serde_json::json!({ "email": "test@example.com", "password": test_data::PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    println!("[<] Received response with status: {}", resp.status());
    assert_eq!(resp.status(), StatusCode::OK);

    let body: serde_json::Value = test::read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty());
    assert!(body.get("password").is_none());

    // The token identifies the user on later requests
    let req = test::TestRequest::get()
        .uri("/user/me/")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let me: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(me["email"], "test@example.com");
    assert!(me.get("password").is_none());
    println!("[/] Test passed: token issued and accepted.");
}

#[actix_web::test]
async fn test_token_wrong_password_and_unknown_user_look_the_same() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    client.create_test_user(Some("test@example.com".to_string())).await;

    let req = test::TestRequest::post()
        .uri("/user/token")
        .set_json(serde_json::json!({ "email": "test@example.com", "password": "wrongPassword" }))
        .to_request();
    let wrong = test::call_service(&app, req).await;
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    let wrong_body: serde_json::Value = test::read_body_json(wrong).await;

    let req = test::TestRequest::post()
        .uri("/user/token")
        .set_json(serde_json::json!({ "email": "never@example.com", "password": test_data::PASSWORD }))
        .to_request();
    let unknown = test::call_service(&app, req).await;
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    let unknown_body: serde_json::Value = test::read_body_json(unknown).await;

    assert_eq!(wrong_body, unknown_body);
    assert!(wrong_body.get("token").is_none());
    assert_eq!(
        wrong_body["non_field_errors"][0],
        "Unable to authenticate with provided credentials."
    );
}

#[actix_web::test]
async fn test_token_requires_credentials() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/user/token")
        .set_json(serde_json::json!({ "email": "test@example.com" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["password"][0], "This field is required.");
    assert!(body.get("token").is_none());
}

#[actix_web::test]
async fn test_relogin_invalidates_previous_token() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;
    let (_user_id, old_token) = client.create_test_user(Some("test@example.com".to_string())).await;

    let req = test::TestRequest::post()
        .uri("/user/token")
        .set_json(serde_json::json!({ "email": "test@example.com", "password": test_data::PASSWORD }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = test::TestRequest::get()
        .uri("/user/me")
        .insert_header(("Authorization", format!("Bearer {}", old_token)))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_me_flow_unauthorized() {
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    let req = test::TestRequest::get()
        .uri("/user/me")
        .insert_header(("Authorization", "Bearer invalid_token"))
        .to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);

    let req = test::TestRequest::get().uri("/user/me").to_request();
    assert_eq!(test::call_service(&app, req).await.status(), StatusCode::UNAUTHORIZED);
}
