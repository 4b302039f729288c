mod common;

use actix_web::test;
use serial_test::serial;

use common::{StubBackend, TestApp};

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

const FUTURE_DATE: &str = "2999-01-15";

#[actix_rt::test]
#[serial]
async fn test_booking_form_shows_listed_price() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/book/hotels/h2").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Book Hotels"));
    assert!(html.contains("$850.00"));
    assert!(html.contains(r#"action="/book/hotels/h2""#));
}

#[actix_rt::test]
#[serial]
async fn test_email_without_at_sign_is_rejected_before_backend() {
    // A reachable backend would confirm the booking, so a 422 here means
    // the request never left the form check.
    let backend = StubBackend::start().await;
    let test_app = TestApp::with_backend(&backend.base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book/flights/f1")
        .set_form([
            ("customer_name", "Ada Lovelace"),
            ("customer_email", "no-at-sign"),
            ("travel_date", FUTURE_DATE),
            ("passengers", "1"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please enter a valid email address"));
    assert!(html.contains(r#"value="no-at-sign""#));
    assert!(!html.contains("BK-STUB-1"));

    backend.stop().await;
}

#[actix_rt::test]
#[serial]
async fn test_successful_booking_shows_confirmation() {
    let backend = StubBackend::start().await;
    let test_app = TestApp::with_backend(&backend.base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book/hotels/h1")
        .set_form([
            ("customer_name", "Ada Lovelace"),
            ("customer_email", "ada@example.com"),
            ("travel_date", FUTURE_DATE),
            ("return_date", "2999-01-20"),
            ("passengers", "2"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("BK-STUB-1"));
    assert!(html.contains("ada@example.com"));
    assert!(html.contains("Check your email for confirmation"));

    backend.stop().await;
}

#[actix_rt::test]
#[serial]
async fn test_backend_refusal_keeps_form_open() {
    let backend = StubBackend::start().await;
    let test_app = TestApp::with_backend(&backend.base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book/packages/sold-out")
        .set_form([
            ("customer_name", "Ada Lovelace"),
            ("customer_email", "ada@example.com"),
            ("travel_date", FUTURE_DATE),
        ])
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Item no longer available"));
    assert!(html.contains("Confirm Booking"));

    backend.stop().await;
}

#[actix_rt::test]
#[serial]
async fn test_unreachable_backend_gives_generic_failure() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/book/activities/a1")
        .set_form([
            ("customer_name", "Ada Lovelace"),
            ("customer_email", "ada@example.com"),
            ("travel_date", FUTURE_DATE),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Booking failed. Please try again."));
    assert!(html.contains("$89.00"));
}
