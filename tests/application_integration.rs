#![forbid(unsafe_code)]

use poem::http::{header, Method, StatusCode, Uri};
use poem::{Endpoint, Request, Response};

use greet_server::build_app;

// ***************************************************************************
//                              Test Utilities
// ***************************************************************************
// ---------------------------------------------------------------------------
// get_page:
// ---------------------------------------------------------------------------
/** Issue a GET against the application's route table without binding a
 * socket.
 */
async fn get_page(path: &'static str) -> Response {
    let app = build_app();
    app.get_response(
        Request::builder()
            .method(Method::GET)
            .uri(Uri::from_static(path))
            .finish(),
    )
    .await
}

// ---------------------------------------------------------------------------
// post_form:
// ---------------------------------------------------------------------------
/** Submit a form-encoded body to the greet endpoint, the way a browser
 * submits the index page's form.
 */
async fn post_form(body: &'static str) -> Response {
    let app = build_app();
    app.get_response(
        Request::builder()
            .method(Method::POST)
            .uri(Uri::from_static("/greet"))
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(body),
    )
    .await
}

// ---------------------------------------------------------------------------
// body_string:
// ---------------------------------------------------------------------------
async fn body_string(resp: Response) -> String {
    resp.into_body().into_string().await.expect("response body should be readable")
}

// ***************************************************************************
//                         GET / - Greeting Form
// ***************************************************************************
#[tokio::test]
async fn welcomes_the_user() {
    let resp = get_page("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp.content_type().expect("response should carry a content type").to_string();
    assert!(content_type.starts_with("text/html"), "unexpected content type: {}", content_type);

    let body = body_string(resp).await;
    assert!(body.contains("Welcome!"));
}

#[tokio::test]
async fn has_a_greeting_form_with_a_user_name_field() {
    let resp = get_page("/").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("<form"));
    assert!(body.contains("name=\"user_name\""));
    assert!(body.contains("type=\"submit\""));
}

#[tokio::test]
async fn welcome_page_is_idempotent() {
    let first = body_string(get_page("/").await).await;
    let second = body_string(get_page("/").await).await;
    assert_eq!(first, second);
}

// ***************************************************************************
//                        POST /greet - User Greeting
// ***************************************************************************
#[tokio::test]
async fn greets_the_user_personally() {
    let resp = post_form("user_name=Avi").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let content_type = resp.content_type().expect("response should carry a content type").to_string();
    assert!(content_type.starts_with("text/html"), "unexpected content type: {}", content_type);

    let body = body_string(resp).await;
    assert!(body.contains("Hi Avi, nice to meet you!"));
}

#[tokio::test]
async fn greeting_round_trips_plain_names() {
    // The space arrives as '+' in a form-encoded body.
    let resp = post_form("user_name=Mary+Poppins").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Hi Mary Poppins, nice to meet you!"));
}

#[tokio::test]
async fn empty_name_still_greets() {
    // A submitted but empty field renders a greeting with an empty name.
    let resp = post_form("user_name=").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("Hi , nice to meet you!"));
}

#[tokio::test]
async fn missing_user_name_field_is_a_client_error() {
    // A body without the field never produces a server fault.
    let resp = post_form("").await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    assert!(!resp.status().is_server_error());
}

#[tokio::test]
async fn greeting_escapes_html_markup() {
    // user_name=<script>alert(1)</script>, form-encoded.
    let resp = post_form("user_name=%3Cscript%3Ealert(1)%3C%2Fscript%3E").await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = body_string(resp).await;
    assert!(body.contains("&lt;script&gt;"));
    assert!(!body.contains("<script>"));
}
