// SPDX-License-Identifier: MIT

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use std::sync::Arc;
use tower::ServiceExt;

use trainlog::config::Config;
use trainlog::db::MemStore;
use trainlog::models::{SetLog, WorkoutRecord, WorkoutType};
use trainlog::routes::create_router;
use trainlog::AppState;

/// Build the app over an in-memory store.
pub fn create_test_app(store: MemStore) -> Router {
    let state = Arc::new(AppState {
        config: Config::default(),
        store: Arc::new(store),
    });
    create_router(state)
}

#[allow(dead_code)]
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[allow(dead_code)]
pub fn workout(
    id: i64,
    owner_id: i64,
    date: NaiveDate,
    workout_type: WorkoutType,
    distance_km: Option<f64>,
    elevation_m: Option<i32>,
) -> WorkoutRecord {
    WorkoutRecord {
        id,
        owner_id,
        date,
        workout_type,
        distance_km,
        elevation_m,
        duration_min: None,
    }
}

#[allow(dead_code)]
pub fn set_log(exercise_id: i64, set_number: i32, reps: i32, weight: f64, date: NaiveDate) -> SetLog {
    SetLog {
        exercise_id,
        set_number,
        reps: Some(reps),
        weight: Some(weight),
        workout_date: date,
    }
}

/// Issue a GET as the given user and return status plus parsed JSON body.
#[allow(dead_code)]
pub async fn get_json(app: &Router, uri: &str, user_id: i64) -> (StatusCode, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header("x-user-id", user_id.to_string())
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Issue a GET with no identity header.
#[allow(dead_code)]
pub async fn get_anonymous(app: &Router, uri: &str) -> StatusCode {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    response.status()
}
