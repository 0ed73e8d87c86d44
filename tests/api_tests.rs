use actix_web::{http::StatusCode, test, web, App};
use serde_json::json;

use rust_passgen::api::routes::configure_routes;
use rust_passgen::api::types::{HealthResponse, PasswordAnalysisResponse, PasswordGenerationResponse};
use rust_passgen::{Config, StrengthLabel};

macro_rules! app {
    () => {
        test::init_service(
            App::new()
                .app_data(web::Data::new(Config::default()))
                .configure(configure_routes),
        )
        .await
    };
}

#[actix_web::test]
async fn generates_with_defaults() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({}))
        .to_request();

    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.success);
    let password = resp.password.expect("password");
    assert_eq!(password.len(), 8);
    assert!(password.chars().all(|c| c.is_ascii_uppercase()));
    assert_eq!(resp.strength, Some(StrengthLabel::Weak));
}

#[actix_web::test]
async fn generates_with_all_classes() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({
            "length": 20,
            "include_uppercase": true,
            "include_lowercase": true,
            "include_numbers": true,
            "include_symbols": true
        }))
        .to_request();

    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.success);
    let password = resp.password.expect("password");
    assert_eq!(password.len(), 20);
    assert_eq!(resp.strength, Some(rust_passgen::classify(&password)));
}

#[actix_web::test]
async fn rejects_empty_class_selection() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "include_uppercase": false }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: PasswordGenerationResponse = test::read_body_json(resp).await;
    assert!(!body.success);
    assert!(body.password.is_none());
    assert_eq!(body.error.as_deref(), Some("At least one character type must be included"));
}

#[actix_web::test]
async fn rejects_length_over_maximum() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": 21 }))
        .to_request();

    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn zero_length_is_allowed() {
    let app = app!();
    let req = test::TestRequest::post()
        .uri("/generator/password")
        .set_json(json!({ "length": 0 }))
        .to_request();

    let resp: PasswordGenerationResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.success);
    assert_eq!(resp.password.as_deref(), Some(""));
    assert_eq!(resp.strength, Some(StrengthLabel::Weak));
}

#[actix_web::test]
async fn analyzes_url_encoded_password() {
    let app = app!();
    // "Abcdefg1!" with the '!' percent-encoded
    let req = test::TestRequest::get()
        .uri("/generator/analysis/Abcdefg1%21")
        .to_request();

    let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
    assert!(resp.success);
    assert_eq!(resp.strength, StrengthLabel::Strong);
    assert_eq!(resp.satisfied, 4);
    assert_eq!(resp.feedback, vec!["Strong password".to_string()]);
}

#[actix_web::test]
async fn analysis_explains_short_password() {
    let app = app!();
    let req = test::TestRequest::get()
        .uri("/generator/analysis/Ab1%21")
        .to_request();

    let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.strength, StrengthLabel::Weak);
    assert_eq!(resp.satisfied, 4);
    assert!(resp.feedback.contains(&"Use at least 8 characters".to_string()));
}

#[actix_web::test]
async fn health_reports_version() {
    let app = app!();
    let req = test::TestRequest::get().uri("/health").to_request();

    let resp: HealthResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.status, "ok");
    assert_eq!(resp.version, env!("CARGO_PKG_VERSION"));
}

#[actix_web::test]
async fn analysis_keeps_literal_percent_sequences() {
    let app = app!();
    let password = "abcdEFGH1%41";
    assert_eq!(rust_passgen::classify(password), StrengthLabel::Strong);

    let uri = format!("/generator/analysis/{}", urlencoding::encode(password));
    let req = test::TestRequest::get().uri(&uri).to_request();

    let resp: PasswordAnalysisResponse = test::call_and_read_body_json(&app, req).await;
    assert_eq!(resp.strength, StrengthLabel::Strong);
    assert_eq!(resp.satisfied, 4);
}
