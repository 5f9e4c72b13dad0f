//! Acquisition against an in-process HTTP server standing in for the metrics endpoint.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{extract::State, http::StatusCode, routing::get, Router};
use sysglance::error::{FetchError, FETCH_ERROR_MESSAGE};
use sysglance::poller::Poller;
use sysglance::source::{HttpSource, SnapshotSource};
use sysglance::state::Dashboard;
use sysglance::types::Metric;
use sysglance::ui::theme::{gauge_color, GAUGE_NORMAL, GAUGE_WARNING};
use url::Url;

type Script = Arc<Mutex<VecDeque<(u16, String)>>>;

async fn scripted(State(script): State<Script>) -> (StatusCode, String) {
    let next = script.lock().unwrap().pop_front();
    match next {
        Some((code, body)) => (StatusCode::from_u16(code).unwrap(), body),
        None => (StatusCode::SERVICE_UNAVAILABLE, String::new()),
    }
}

async fn serve(script: Vec<(u16, String)>) -> Url {
    let state: Script = Arc::new(Mutex::new(script.into()));
    let app = Router::new()
        .route("/system-info", get(scripted))
        .with_state(state);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    Url::parse(&format!("http://{addr}/system-info")).unwrap()
}

fn body(cpu: f64) -> String {
    serde_json::json!({
        "timestamp": "2024-05-01T10:00:00",
        "cpu_usage_percent": cpu,
        "cpu_usage_label": format!("{cpu:.2}%"),
        "memory_total_gb": 31.25,
        "memory_used_gb": 12.5,
        "memory_remaining_gb": 18.75,
        "memory_percent": 40.0,
        "disk_total_gb": 931.5,
        "disk_used_gb": 465.75,
        "disk_remaining_gb": 465.75,
        "disk_percent": 50.0
    })
    .to_string()
}

#[tokio::test]
async fn valid_body_decodes() {
    let url = serve(vec![(200, body(12.5))]).await;
    let snap = HttpSource::new(url).fetch().await.expect("snapshot");
    assert_eq!(snap.cpu_usage_percent, 12.5);
    assert_eq!(snap.cpu_usage_label, "12.50%");
    assert_eq!(snap.disk_total_gb, 931.5);
}

#[tokio::test]
async fn non_success_status_is_a_failure() {
    let url = serve(vec![(500, "boom".into())]).await;
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Status(500)), "{err:?}");
    assert_eq!(err.user_message(), FETCH_ERROR_MESSAGE);
}

#[tokio::test]
async fn shape_mismatch_is_a_failure() {
    let url = serve(vec![(200, r#"{"cpu_usage_percent": 5}"#.into())]).await;
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)), "{err:?}");
}

#[tokio::test]
async fn unreachable_endpoint_is_a_transport_failure() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let url = Url::parse(&format!("http://{addr}/system-info")).unwrap();
    let err = HttpSource::new(url).fetch().await.unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)), "{err:?}");
}

#[tokio::test]
async fn polling_sequence_updates_state_and_survives_a_500() {
    let url = serve(vec![
        (200, body(10.0)),
        (200, body(85.0)),
        (200, body(50.0)),
        (500, String::new()),
    ])
    .await;
    let mut p = Poller::new(
        HttpSource::new(url),
        Duration::from_secs(3600),
        Dashboard::default(),
    );

    p.mount();
    p.pump().await;
    assert_eq!(p.state().snapshot().map(|s| s.cpu_usage_percent), Some(10.0));

    assert!(p.refresh_now());
    p.pump().await;
    let cpu = p.state().snapshot().unwrap().cpu_usage_percent;
    assert_eq!(gauge_color(cpu), GAUGE_WARNING);

    assert!(p.refresh_now());
    p.pump().await;
    let cpu = p.state().snapshot().unwrap().cpu_usage_percent;
    assert_eq!(gauge_color(cpu), GAUGE_NORMAL);
    assert_eq!(p.state().history().series(Metric::Cpu), vec![10.0, 85.0, 50.0]);

    let before = p.state().snapshot().cloned();
    assert!(p.refresh_now());
    p.pump().await;
    assert_eq!(p.state().snapshot().cloned(), before);
    assert_eq!(p.state().error(), Some(FETCH_ERROR_MESSAGE));
    assert!(!p.state().loading());
    assert_eq!(p.state().history().len(), 3);

    p.teardown();
}
