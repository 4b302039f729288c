mod common;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::test;
use serial_test::serial;

use common::{StubBackend, TestApp};
use travel_planner_web::services::session::SESSION_COOKIE;

fn body_text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

fn session_cookie(resp: &ServiceResponse) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.into_owned())
        .expect("session cookie set")
}

#[actix_rt::test]
#[serial]
async fn test_drill_down_walks_levels_in_order() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::get().uri("/planner/destinations").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Choose a continent"));
    assert!(html.contains("/planner/continents/North%20America"));

    let req = test::TestRequest::post()
        .uri("/planner/continents/Europe")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let cookie = session_cookie(&resp);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Choose a country"));
    assert!(html.contains("France"));

    let req = test::TestRequest::post()
        .uri("/planner/countries/France")
        .cookie(cookie.clone())
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Choose a city"));
    assert!(html.contains("Lyon"));

    let req = test::TestRequest::post()
        .uri("/planner/continents/Asia")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Cannot choose a continent while browsing by city"));

    let req = test::TestRequest::post()
        .uri("/planner/reset")
        .cookie(cookie)
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Choose a continent"));
}

#[actix_rt::test]
#[serial]
async fn test_level_cannot_be_skipped() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/planner/countries/France")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 409);
}

#[actix_rt::test]
#[serial]
async fn test_step_guards() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post().uri("/planner/steps/2").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please generate recommendations first"));

    let req = test::TestRequest::post().uri("/planner/steps/1").to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Step 1 of 3"));
}

#[actix_rt::test]
#[serial]
async fn test_preferences_validated_before_backend() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/planner/preferences")
        .set_form([("age_group", "25-34"), ("group_size", "couple"), ("trip_duration", "7")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please select at least one interest"));
}

#[actix_rt::test]
#[serial]
async fn test_planner_flow_reaches_booking_step() {
    let backend = StubBackend::start().await;
    let test_app = TestApp::with_backend(&backend.base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/planner/preferences")
        .set_form([
            ("age_group", "25-34"),
            ("group_size", "family"),
            ("trip_duration", "7"),
            ("interests", "culture, food"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let cookie = session_cookie(&resp);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Kyoto"));
    assert!(html.contains(r#"action="/planner/select""#));
    assert!(html.contains("Day 1: Temples"));

    let req = test::TestRequest::post()
        .uri("/planner/select")
        .cookie(cookie.clone())
        .set_form([("destination", "kyoto")])
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Step 3 of 3"));
    assert!(html.contains("Hotel destination: Kyoto"));
    assert!(html.contains("Passengers: 4"));

    let req = test::TestRequest::get()
        .uri("/book/hotels/h1")
        .cookie(cookie)
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains(r#"name="destination" value="Kyoto""#));
    assert!(html.contains(r#"value="4""#));

    backend.stop().await;
}

#[actix_rt::test]
#[serial]
async fn test_detailed_itinerary_failure_offers_trip_search() {
    let backend = StubBackend::start().await;
    let test_app = TestApp::with_backend(&backend.base_url);
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/recommendations")
        .set_form([
            ("age_group", "35-44"),
            ("group_size", "2"),
            ("country", "Japan"),
            ("trip_duration", "5"),
            ("interests", "history"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let cookie = session_cookie(&resp);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains(r#"action="/recommendations/itinerary""#));

    let req = test::TestRequest::post()
        .uri("/recommendations/itinerary")
        .cookie(cookie)
        .set_form([("destination", "kyoto")])
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Book your trip to Kyoto"));
    assert!(html.contains("Generator offline"));
    assert!(html.contains(r#"action="/search/hotels""#));

    backend.stop().await;
}

#[actix_rt::test]
#[serial]
async fn test_recommendations_page_requires_country() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/recommendations")
        .set_form([
            ("age_group", "35-44"),
            ("group_size", "solo"),
            ("trip_duration", "5"),
            ("interests", "history"),
        ])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please select your country"));
}
