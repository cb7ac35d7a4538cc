//! HTTP API for timetable lookups
//!
//! `GET /?week_days=mo,tu&table_id=..&my_class=10а` answers with one entry
//! per requested weekday. Failures keep the `200` status and answer with
//! `[{"error": "..."}]` so clients only have to handle a single shape.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Local;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, info};

use crate::data::{normalize_week_days, DayLessons};
use crate::service::{ScheduleError, ScheduleService};

/// Query parameters of a timetable request
#[derive(Debug, Deserialize)]
pub struct ScheduleQuery {
    /// Comma separated weekday aliases
    pub week_days: String,
    /// Google Sheets document id
    pub table_id: String,
    /// Class identifier, case-insensitive
    pub my_class: String,
}

/// Creates the API router
pub fn router(service: Arc<ScheduleService>) -> Router {
    Router::new()
        .route("/", get(get_schedule))
        .route("/health", get(health))
        .with_state(service)
}

/// Serves the API on `addr` until the process exits
pub async fn serve(addr: SocketAddr, service: ScheduleService) -> std::io::Result<()> {
    let app = router(Arc::new(service));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Timetable API listening");
    axum::serve(listener, app).await
}

async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// GET /
async fn get_schedule(
    Query(query): Query<ScheduleQuery>,
    State(service): State<Arc<ScheduleService>>,
) -> Response {
    info!(
        table_id = %query.table_id,
        class = %query.my_class,
        week_days = %query.week_days,
        "GET /"
    );

    match lookup(&service, &query).await {
        Ok(days) => Json(days).into_response(),
        Err(e) => {
            error!(error = %e, "Timetable request failed");
            Json(json!([{ "error": e.to_string() }])).into_response()
        }
    }
}

async fn lookup(
    service: &ScheduleService,
    query: &ScheduleQuery,
) -> Result<Vec<DayLessons>, ScheduleError> {
    let days = normalize_week_days(&query.week_days, Local::now().date_naive())?;
    service
        .class_lessons(&query.table_id, &query.my_class, &days)
        .await
}
