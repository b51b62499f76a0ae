// SPDX-License-Identifier: MIT

//! Statistics endpoints.
//!
//! Every endpoint is read-only and scoped to one owner. Authentication is
//! handled upstream; the gateway injects the authenticated user id as the
//! `X-User-Id` header, which is the only identity this service trusts.

use crate::db::DateRange;
use crate::error::{AppError, Result};
use crate::models::{
    DistanceBySubperiod, MedalHistoryEntry, PeriodSummary, StrengthVolume, WeekBucket,
    WeekProgress,
};
use crate::period::{parse_month_token, PeriodKind};
use crate::services::aggregation;
use crate::AppState;
use axum::{
    extract::{FromRequestParts, Query, State},
    http::request::Parts,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use std::sync::Arc;

/// Stats routes.
pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/stats/summary", get(get_period_summary))
        .route("/api/stats/weekly-progress", get(get_week_progress))
        .route("/api/stats/weekly-medals", get(get_weekly_medals))
        .route("/api/stats/medals-history", get(get_medal_history))
        .route("/api/stats/distance", get(get_distance_by_subperiod))
        .route("/api/stats/strength-volume", get(get_strength_volume))
}

/// Owner identity, taken from the gateway-injected `X-User-Id` header.
#[derive(Debug, Clone, Copy)]
pub struct OwnerId(pub i64);

impl<S> FromRequestParts<S> for OwnerId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> std::result::Result<Self, Self::Rejection> {
        parts
            .headers
            .get("x-user-id")
            .and_then(|value| value.to_str().ok())
            .and_then(|raw| raw.parse().ok())
            .map(OwnerId)
            .ok_or(AppError::Unauthorized)
    }
}

/// Period selection: a month (`YYYY-MM`) or a year (`YYYY`).
#[derive(Deserialize)]
struct PeriodQuery {
    month: Option<String>,
    year: Option<String>,
}

impl PeriodQuery {
    fn resolve(&self) -> Result<PeriodKind> {
        PeriodKind::from_params(self.month.as_deref(), self.year.as_deref())
    }
}

#[derive(Deserialize)]
struct MonthQuery {
    month: Option<String>,
}

// ─── Period Summary ──────────────────────────────────────────

/// Counts, distance, elevation, and active days for one month or year.
async fn get_period_summary(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<PeriodSummary>> {
    let period = params.resolve()?;
    tracing::debug!(owner_id = owner.0, ?period, "Fetching period summary");

    let records = state
        .store
        .list_workouts(owner.0, Some(DateRange::from(period.date_range())))
        .await?;

    let (counts_by_type, total_count) = aggregation::count_by_type(&records);
    let totals = aggregation::sum_measures(&records);

    Ok(Json(PeriodSummary {
        total_count,
        counts_by_type,
        total_distance_km: totals.total_distance_km,
        total_elevation_m: totals.total_elevation_m,
        active_day_count: totals.active_day_count,
    }))
}

// ─── Weekly Progress ─────────────────────────────────────────

/// Current-week session count and all-time medal total.
async fn get_week_progress(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
) -> Result<Json<WeekProgress>> {
    tracing::debug!(owner_id = owner.0, "Fetching weekly progress");

    // Full history: medal totals must not depend on any period filter
    let history = state.store.list_workouts(owner.0, None).await?;
    let today = chrono::Utc::now().date_naive();

    Ok(Json(aggregation::week_progress(&history, today)))
}

// ─── Weekly Medals ───────────────────────────────────────────

/// Medal-scored week buckets overlapping the given month.
async fn get_weekly_medals(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
    Query(params): Query<MonthQuery>,
) -> Result<Json<Vec<WeekBucket>>> {
    let month = params.month.as_deref().ok_or_else(|| {
        AppError::BadRequest("month query param required (YYYY-MM)".to_string())
    })?;
    let (year, month) = parse_month_token(month)?;
    tracing::debug!(owner_id = owner.0, year, month, "Fetching weekly medals");

    let history = state.store.list_workouts(owner.0, None).await?;

    Ok(Json(aggregation::weekly_medals_in_month(
        &history, year, month,
    )))
}

// ─── Medal History ───────────────────────────────────────────

/// All training weeks with running cumulative medal totals.
async fn get_medal_history(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
) -> Result<Json<Vec<MedalHistoryEntry>>> {
    tracing::debug!(owner_id = owner.0, "Fetching medal history");

    let history = state.store.list_workouts(owner.0, None).await?;

    Ok(Json(aggregation::medal_history(&history)))
}

// ─── Distance by Sub-period ──────────────────────────────────

/// Distance per (week, type) in month view or per (month, type) in year view.
async fn get_distance_by_subperiod(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<Vec<DistanceBySubperiod>>> {
    let period = params.resolve()?;
    tracing::debug!(owner_id = owner.0, ?period, "Fetching distance breakdown");

    let records = state
        .store
        .list_workouts(owner.0, Some(DateRange::from(period.date_range())))
        .await?;

    Ok(Json(aggregation::distance_by_subperiod(&records, &period)))
}

// ─── Strength Volume ─────────────────────────────────────────

/// Tonnage and set counts over the period's strength sessions.
async fn get_strength_volume(
    State(state): State<Arc<AppState>>,
    owner: OwnerId,
    Query(params): Query<PeriodQuery>,
) -> Result<Json<StrengthVolume>> {
    let period = params.resolve()?;
    tracing::debug!(owner_id = owner.0, ?period, "Fetching strength volume");

    let sets = state
        .store
        .list_sets(owner.0, DateRange::from(period.date_range()))
        .await?;

    Ok(Json(aggregation::strength_volume(&sets)))
}
