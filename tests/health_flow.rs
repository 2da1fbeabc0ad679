mod common;

use actix_web::{http::StatusCode, test};
use common::{client::TestClient, TestContext};

#[actix_web::test]
async fn test_health_flow_success() {
    println!("\n\n[+] Running test: test_health_flow_success");
    let ctx = TestContext::new().await;
    let client = TestClient::new(&ctx);
    let app = test::init_service(client.create_app()).await;

    for uri in ["/health", "/health/"] {
        let req = test::TestRequest::get().uri(uri).to_request();
        let resp = test::call_service(&app, req).await;
        println!("[<] {} -> {}", uri, resp.status());
        assert_eq!(resp.status(), StatusCode::OK);
    }
}
