#![cfg(feature = "ssr")]

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use leptos::prelude::*;
use any_spawner::Executor;
use leptos_axum::{generate_route_list, LeptosRoutes};
use portfolio_site::app::{shell, App};
use portfolio_site::content::GLOBAL_PROJECT_CACHE;
use tower::ServiceExt;

fn site() -> Router {
    let _ = Executor::init_tokio();
    let options = LeptosOptions::builder()
        .output_name("portfolio-site")
        .build();
    let routes = generate_route_list(App);
    Router::new()
        .leptos_routes(&options, routes, {
            let options = options.clone();
            move || shell(options.clone())
        })
        .with_state(options)
}

async fn get(site: &Router, request: Request<Body>) -> (StatusCode, String) {
    let resp = site.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let body = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8_lossy(&body).into_owned())
}

fn page(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_missing_project_is_404_on_every_request() {
    let site = site();
    for _ in 0..3 {
        let (status, _) = get(&site, page("/projects/no-such-project")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }
    assert!(!GLOBAL_PROJECT_CACHE.contains_key("no-such-project"));

    let (status, _) = get(&site, page("/projects/another-missing-one")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(!GLOBAL_PROJECT_CACHE.contains_key("another-missing-one"));
}

#[tokio::test(flavor = "multi_thread")]
async fn test_known_project_renders() {
    let site = site();
    for _ in 0..2 {
        let (status, body) = get(&site, page("/projects/cozy-bs-api")).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("code-block"));
    }
}

#[tokio::test(flavor = "multi_thread")]
async fn test_color_scheme_hint_renders_light_until_restored() {
    let site = site();
    let request = Request::builder()
        .uri("/")
        .header("Sec-CH-Prefers-Color-Scheme", "dark")
        .body(Body::empty())
        .unwrap();
    let (status, body) = get(&site, request).await;
    assert_eq!(status, StatusCode::OK);
    // the saved preference only exists in the browser, so the server renders Light
    assert!(!body.contains(r#"<div class="dark">"#));
}
