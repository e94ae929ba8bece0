mod common;

use actix_web::test;
use serde_json::json;

use common::{NotifierMode, TestApp};

fn tour_request() -> serde_json::Value {
    json!({
        "firstName": "Jane",
        "lastName": "Doe",
        "email": "jane@example.com",
        "phone": "514-555-0100",
        "property": "The Gramercy",
        "date": "2026-11-02",
        "time": "morning",
        "notes": "Evenings are best <b>after 6</b>"
    })
}

fn application() -> serde_json::Value {
    json!({
        "fullName": "Jane Doe",
        "email": "jane@example.com",
        "phone": "514-555-0100",
        "dateOfBirth": "2000-01-01",
        "property": "The Gramercy",
        "roomType": "Flex Basic",
        "moveInDate": "2026-11-01",
        "leaseDuration": "6 months",
        "occupation": "Student",
        "occupationDetail": "Concordia",
        "aboutYou": "Quiet, tidy and friendly.",
        "howHeard": "Instagram"
    })
}

#[actix_rt::test]
async fn test_tour_request_missing_email_is_rejected() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let mut body = tour_request();
    body.as_object_mut().unwrap().remove("email");

    let req = test::TestRequest::post()
        .uri("/api/send-tour-request")
        .set_json(&body)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "Missing required fields");
    assert_eq!(body["missing"], json!(["email"]));
    assert!(test_app.notifier.sent().is_empty());
}

#[actix_rt::test]
async fn test_tour_request_delivered() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/send-tour-request")
        .set_json(&tour_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": true, "message": "Tour request sent successfully"})
    );

    let sent = test_app.notifier.sent();
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].subject, "Tour Request - The Gramercy - Jane Doe");
    assert_eq!(sent[0].reply_to.as_deref(), Some("jane@example.com"));
    assert!(sent[0].html.contains("&lt;b&gt;after 6&lt;/b&gt;"));
}

#[actix_rt::test]
async fn test_application_delivered() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/send-application")
        .set_json(&application())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["message"], "Application sent successfully");

    let sent = test_app.notifier.sent();
    assert_eq!(sent[0].subject, "New Application - The Gramercy - Jane Doe");
    assert!(sent[0].html.contains("Concordia"));
}

#[actix_rt::test]
async fn test_application_missing_fields_listed() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/send-application")
        .set_json(&json!({"fullName": "Jane Doe", "email": "jane@example.com"}))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body["missing"],
        json!(["phone", "dateOfBirth", "moveInDate", "leaseDuration", "occupation", "aboutYou"])
    );
}

#[actix_rt::test]
async fn test_unconfigured_notifier_returns_503() {
    let test_app = TestApp::with_notifier(NotifierMode::Unconfigured);
    let app = test::init_service(test_app.create_app()).await;

    for (uri, body) in [
        ("/api/send-application", application()),
        ("/api/send-tour-request", tour_request()),
    ] {
        let req = test::TestRequest::post().uri(uri).set_json(&body).to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 503, "{}", uri);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Email service not configured. Please contact the administrator."
        );
    }
}

#[actix_rt::test]
async fn test_delivery_failure_returns_500() {
    let test_app = TestApp::with_notifier(NotifierMode::Fail);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/send-tour-request")
        .set_json(&tour_request())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 500);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(
        body,
        json!({"success": false, "message": "Failed to send tour request"})
    );
}

#[actix_rt::test]
async fn test_malformed_body_uses_error_envelope() {
    let test_app = TestApp::new();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/api/send-application")
        .insert_header(("content-type", "application/json"))
        .set_payload("{not json")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 400);

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["success"], false);
}
