//! Integration tests for the HTTP API

mod common;

use std::sync::Arc;

use axum::{
    body::{self, Body},
    http::{Request, StatusCode},
};
use chrono::Utc;
use serde_json::Value;
use tempfile::TempDir;
use tower::util::ServiceExt;

use timetable::cache::SnapshotCache;
use timetable::data::{DayLessons, Weekday};
use timetable::fetch::SheetClient;
use timetable::server;
use timetable::service::ScheduleService;

use common::{sample_rows, write_workbook};

/// Router over a cache holding a fresh snapshot of table `sample`
fn new_router(temp_dir: &TempDir) -> axum::Router {
    let cache = SnapshotCache::with_dir(temp_dir.path().to_path_buf());
    std::fs::create_dir_all(cache.dir()).unwrap();
    write_workbook(&cache.snapshot_path("sample", Utc::now()), &sample_rows());

    let client = SheetClient::with_base_url("http://127.0.0.1:9");
    server::router(Arc::new(ScheduleService::new(cache, client)))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, bytes.to_vec())
}

#[tokio::test]
async fn test_health() {
    let temp_dir = TempDir::new().unwrap();
    let (status, bytes) = get(new_router(&temp_dir), "/health").await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_schedule_for_class_and_days() {
    let temp_dir = TempDir::new().unwrap();
    // my_class=10А (upper-case Cyrillic), days Tuesday then Monday
    let uri = "/?week_days=%D0%B2%D1%82,%20monday&table_id=sample&my_class=10%D0%90";

    let (status, bytes) = get(new_router(&temp_dir), uri).await;

    assert_eq!(status, StatusCode::OK);
    let days: Vec<DayLessons> = serde_json::from_slice(&bytes).expect("Should be a lesson list");
    assert_eq!(days.len(), 2);

    assert_eq!(days[0].weekday, Weekday::Tuesday);
    assert_eq!(days[0].entry_lesson, 1);
    assert_eq!(
        days[0].lessons,
        vec![
            Some("Русский язык".to_string()),
            None,
            Some("Биология".to_string())
        ]
    );
    assert_eq!(days[0].cabinets, vec!["7", "---", "8"]);

    assert_eq!(days[1].weekday, Weekday::Monday);
    assert_eq!(days[1].lessons[1], None, "Struck-through lesson is cancelled");
    assert_eq!(days[1].cabinets, vec!["12", "5", "204"]);
}

#[tokio::test]
async fn test_empty_day_is_returned_empty() {
    let temp_dir = TempDir::new().unwrap();
    let uri = "/?week_days=saturday&table_id=sample&my_class=11%D0%B1";

    let (status, bytes) = get(new_router(&temp_dir), uri).await;

    assert_eq!(status, StatusCode::OK);
    let days: Vec<DayLessons> = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(days[0].entry_lesson, 0);
    assert!(days[0].lessons.is_empty());
}

#[tokio::test]
async fn test_unknown_class_returns_error_entry() {
    let temp_dir = TempDir::new().unwrap();
    let uri = "/?week_days=mo&table_id=sample&my_class=7z";

    let (status, bytes) = get(new_router(&temp_dir), uri).await;

    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    let message = body[0]["error"].as_str().expect("Error entry expected");
    assert!(message.contains("7z"), "Unexpected message: {message}");
}

#[tokio::test]
async fn test_unknown_weekday_returns_error_entry() {
    let temp_dir = TempDir::new().unwrap();
    let uri = "/?week_days=someday&table_id=sample&my_class=10a";

    let (_, bytes) = get(new_router(&temp_dir), uri).await;

    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert!(body[0]["error"].as_str().unwrap().contains("someday"));
}

#[tokio::test]
async fn test_missing_query_parameters_are_rejected() {
    let temp_dir = TempDir::new().unwrap();

    let (status, _) = get(new_router(&temp_dir), "/?table_id=sample").await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}
