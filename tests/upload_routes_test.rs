mod common;

use actix_web::cookie::Cookie;
use actix_web::dev::ServiceResponse;
use actix_web::http::header;
use actix_web::test;
use serial_test::serial;

use common::TestApp;
use travel_planner_web::services::session::SESSION_COOKIE;

const BOUNDARY: &str = "----planner-test-boundary";

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

/// `(field, file name and content type if a file, contents)`
fn multipart_body(parts: &[(&str, Option<(&str, &str)>, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, file, contents) in parts {
        body.extend_from_slice(format!("--{}\r\n", BOUNDARY).as_bytes());
        match file {
            Some((file_name, content_type)) => {
                body.extend_from_slice(
                    format!(
                        "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\nContent-Type: {}\r\n\r\n",
                        name, file_name, content_type
                    )
                    .as_bytes(),
                );
            }
            None => {
                body.extend_from_slice(
                    format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
                );
            }
        }
        body.extend_from_slice(contents);
        body.extend_from_slice(b"\r\n".as_slice());
    }
    body.extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
    body
}

fn multipart_request(uri: &str, body: Vec<u8>) -> test::TestRequest {
    test::TestRequest::post()
        .uri(uri)
        .insert_header((
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={}", BOUNDARY),
        ))
        .set_payload(body)
}

#[actix_rt::test]
#[serial]
async fn test_upload_in_demo_mode_is_remembered() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let body = multipart_body(&[("file", Some(("beach.png", "image/png")), b"\x89PNG fake".as_slice())]);
    let resp = test::call_service(&app, multipart_request("/upload", body).to_request()).await;
    assert!(resp.status().is_success());
    let cookie = session_cookie(&resp);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Backend server is not available. Using demo mode."));
    assert!(html.contains("data:image/png;base64,"));
    assert!(html.contains("beach.png"));

    let req = test::TestRequest::get()
        .uri("/upload/recent")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 200);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Use your recent photo"));

    let req = test::TestRequest::post()
        .uri("/planner/image/paris")
        .cookie(cookie.clone())
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Demo: Visualization generated successfully!"));
    assert!(html.contains("source.unsplash.com"));

    let req = test::TestRequest::delete()
        .uri("/upload")
        .cookie(cookie.clone())
        .to_request();
    let html = body_text(&test::call_and_read_body(&app, req).await);
    assert!(html.contains("Photo removed"));

    let req = test::TestRequest::get()
        .uri("/upload/recent")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 204);
}

#[actix_rt::test]
#[serial]
async fn test_upload_rejects_unsupported_type() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let body = multipart_body(&[("file", Some(("anim.gif", "image/gif")), b"GIF89a".as_slice())]);
    let resp = test::call_service(&app, multipart_request("/upload", body).to_request()).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please select a valid image file (JPEG, PNG, or WebP)"));
}

#[actix_rt::test]
#[serial]
async fn test_destination_image_requires_photo() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/planner/image/paris")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please upload a photo first"));
}

#[actix_rt::test]
#[serial]
async fn test_photo_app_checks_inputs() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let body = multipart_body(&[("prompt", None, b"me surfing in Bali".as_slice())]);
    let resp =
        test::call_service(&app, multipart_request("/generate/photo-app", body).to_request()).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please upload a selfie."));

    let body = multipart_body(&[
        ("selfie", Some(("me.jpg", "image/jpeg")), b"jpeg bytes".as_slice()),
        ("prompt", None, b"surf".as_slice()),
    ]);
    let resp =
        test::call_service(&app, multipart_request("/generate/photo-app", body).to_request()).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Please enter a prompt (at least 10 characters)."));
}

#[actix_rt::test]
#[serial]
async fn test_text_to_image_validation_and_failure() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let req = test::TestRequest::post()
        .uri("/generate/text-to-image")
        .set_form([("prompt", "beach")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), 422);

    let req = test::TestRequest::post()
        .uri("/generate/text-to-image")
        .set_form([("prompt", "a quiet beach at sunset"), ("style", "painting")])
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("Failed to generate image:"));
}

#[actix_rt::test]
#[serial]
async fn test_lightx_requires_prompt() {
    let test_app = TestApp::offline();
    let app = test::init_service(test_app.create_app()).await;

    let body = multipart_body(&[
        ("image", Some(("me.jpg", "image/jpeg")), b"jpeg bytes".as_slice()),
        ("prompt", None, b"tan".as_slice()),
    ]);
    let resp =
        test::call_service(&app, multipart_request("/generate/lightx", body).to_request()).await;
    assert_eq!(resp.status(), 422);
    let html = body_text(&test::read_body(resp).await);
    assert!(html.contains("at least 5 characters"));
}
