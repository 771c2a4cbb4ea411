//! Handler tests against a mocked users endpoint

use crate::config::ThemeConfig;
use crate::init::configure_webapp;
use crate::utils::{AppState, SESSION_COOKIE_NAME, create_reloader, get_session_middleware, path_config};
use crate::viewer::ViewerRegistry;
use actix_web::cookie::{Cookie, Key};
use actix_web::dev::ServiceResponse;
use actix_web::http::StatusCode;
use actix_web::http::header::LOCATION;
use actix_web::middleware::{NormalizePath, TrailingSlash};
use actix_web::{App, test};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use userlist_core::PaginationConfig;
use userlist_source::{HttpUserSource, SourceConfig};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

macro_rules! test_app {
    ($base_url:expr) => {{
        let source = HttpUserSource::new(&SourceConfig {
            base_url: $base_url,
            ..SourceConfig::default()
        })
        .unwrap();
        let state = AppState::new(
            Arc::new(create_reloader(format!(
                "{}/templates",
                env!("CARGO_MANIFEST_DIR")
            ))),
            ViewerRegistry::with_limits(Duration::from_secs(60), 16),
            ThemeConfig::default(),
            PaginationConfig::default(),
        );
        test::init_service(
            App::new()
                .app_data(path_config())
                .wrap(NormalizePath::new(TrailingSlash::Trim))
                .wrap(get_session_middleware(Key::generate(), false, 3600))
                .configure(configure_webapp(
                    state,
                    source,
                    env!("CARGO_MANIFEST_DIR").to_string(),
                )),
        )
        .await
    }};
}

fn users_json(count: usize) -> serde_json::Value {
    let users: Vec<serde_json::Value> = (1..=count)
        .map(|id| {
            json!({
                "id": id,
                "firstname": format!("First{id}"),
                "lastname": format!("Last{id}"),
                "email": format!("user{id}@example.com"),
                "phone": format!("+1 555 {id:04}"),
                "updatedAt": "2023-10-01T12:00:00.000Z"
            })
        })
        .collect();
    json!(users)
}

async fn upstream(response: ResponseTemplate, expected_calls: u64) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/users"))
        .respond_with(response)
        .expect(expected_calls)
        .mount(&server)
        .await;
    server
}

fn session_cookie<B>(resp: &ServiceResponse<B>) -> Cookie<'static> {
    resp.response()
        .cookies()
        .find(|c| c.name() == SESSION_COOKIE_NAME)
        .map(|c| c.into_owned())
        .expect("session cookie was not set")
}

async fn body_string<B: actix_web::body::MessageBody>(resp: ServiceResponse<B>) -> String {
    let body = test::read_body(resp).await;
    String::from_utf8(body.to_vec()).unwrap()
}

fn row_ids(body: &str) -> Vec<i64> {
    body.split("data-user-id=\"")
        .skip(1)
        .filter_map(|s| s.split('"').next()?.parse().ok())
        .collect()
}

#[actix_web::test]
async fn test_index_renders_first_page() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let _ = session_cookie(&resp);
    let body = body_string(resp).await;

    assert!(body.contains("<html"));
    assert!(body.contains("Пользователи"));
    assert!(body.contains("Дата обновления"));
    assert_eq!(row_ids(&body), (1..=20).collect::<Vec<i64>>());
    assert!(body.contains("href=\"/page/3\""));
    assert!(body.contains("hx-get=\"/page/3\""));
    assert!(!body.contains("href=\"/page/4\""));
    assert!(body.contains("href=\"/static/favicon.svg\""));
    assert!(body.contains("data-total-pages=\"3\""));
}

#[actix_web::test]
async fn test_navigation_does_not_refetch() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/page/3")
        .cookie(cookie.clone())
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert_eq!(row_ids(&body), (41..=45).collect::<Vec<i64>>());

    let req = test::TestRequest::get()
        .uri("/page/first")
        .cookie(cookie.clone())
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert_eq!(row_ids(&body), (1..=20).collect::<Vec<i64>>());

    let req = test::TestRequest::get()
        .uri("/page/last")
        .cookie(cookie.clone())
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert_eq!(row_ids(&body), (41..=45).collect::<Vec<i64>>());
    assert!(body.contains("data-page=\"3\""));

    let req = test::TestRequest::get()
        .uri("/page/2")
        .cookie(cookie)
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert_eq!(row_ids(&body), (21..=40).collect::<Vec<i64>>());
}

#[actix_web::test]
async fn test_reload_fetches_again() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 2).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);
    let req = test::TestRequest::get()
        .uri("/page/3")
        .cookie(cookie.clone())
        .to_request();
    test::call_service(&app, req).await;

    let req = test::TestRequest::get().uri("/").cookie(cookie).to_request();
    let resp = test::call_service(&app, req).await;
    let body = body_string(resp).await;
    assert_eq!(row_ids(&body), (1..=20).collect::<Vec<i64>>());
}

#[actix_web::test]
async fn test_htmx_navigation_renders_fragment() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/page/2")
        .insert_header(("HX-Request", "true"))
        .cookie(cookie)
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert!(!body.contains("<html"));
    assert!(body.contains("<table"));
    assert_eq!(row_ids(&body).len(), 20);
}

#[actix_web::test]
async fn test_out_of_range_page_is_empty() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/page/9")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(row_ids(&body).is_empty());
    assert!(!body.contains("aria-current"));
}

#[actix_web::test]
async fn test_upstream_error_renders_banner() {
    let server = upstream(ResponseTemplate::new(404), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    assert_eq!(resp.status(), StatusCode::OK);
    let body = body_string(resp).await;
    assert!(body.contains("Ошибка 404 при загрузке данных"));
    assert!(!body.contains("<table"));
    assert!(row_ids(&body).is_empty());
}

#[actix_web::test]
async fn test_unreachable_upstream_renders_500_banner() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let app = test_app!(format!("http://{addr}"));

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let body = body_string(resp).await;
    assert!(body.contains("Ошибка 500 при загрузке данных"));
    assert!(!body.contains("<table"));
}

#[actix_web::test]
async fn test_empty_user_list() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(json!([])), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);
    let body = body_string(resp).await;
    assert!(body.contains("<th>ID</th>"));
    assert!(row_ids(&body).is_empty());
    assert!(body.contains("href=\"/page/first\""));
    assert!(body.contains("href=\"/page/last\""));
    assert!(!body.contains("href=\"/page/1\""));
    assert!(body.contains("data-total-pages=\"0\""));

    let req = test::TestRequest::get()
        .uri("/page/last")
        .cookie(cookie)
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert!(body.contains("data-page=\"1\""));
}

#[actix_web::test]
async fn test_navigation_without_session_redirects() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(3)), 0).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/page/2").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers().get(LOCATION).unwrap(), "/");

    let resp = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/page/last")
            .insert_header(("HX-Request", "true"))
            .to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(resp.headers().get("HX-Redirect").unwrap(), "/");
}

#[actix_web::test]
async fn test_invalid_page_number_is_bad_request() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(3)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/page/abc")
        .cookie(cookie)
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_trailing_slash_is_trimmed() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(45)), 1).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
    let cookie = session_cookie(&resp);

    let req = test::TestRequest::get()
        .uri("/page/2/")
        .cookie(cookie.clone())
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(row_ids(&body_string(resp).await), (21..=40).collect::<Vec<i64>>());

    let req = test::TestRequest::get()
        .uri("/page/last/")
        .cookie(cookie)
        .to_request();
    let body = body_string(test::call_service(&app, req).await).await;
    assert!(body.contains("data-page=\"3\""));
}

#[actix_web::test]
async fn test_favicon_is_served() {
    let server = upstream(ResponseTemplate::new(200).set_body_json(users_json(1)), 0).await;
    let app = test_app!(server.uri());

    let resp = test::call_service(
        &app,
        test::TestRequest::get().uri("/static/favicon.svg").to_request(),
    )
    .await;
    assert_eq!(resp.status(), StatusCode::OK);
    assert!(body_string(resp).await.contains("<svg"));
}
