// SPDX-License-Identifier: MIT

//! Derived statistics types returned by the stats endpoints.
//!
//! All of these are recomputed from the stored workout set on every request;
//! nothing here is persisted or cached. Field names follow the wire format
//! the front end consumes.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::models::WorkoutType;
use crate::period::SubperiodKey;

/// Aggregate summary for one month or year.
#[derive(Debug, Clone, Serialize)]
pub struct PeriodSummary {
    pub total_count: u32,
    /// Count per workout type; only types with at least one session appear
    pub counts_by_type: HashMap<WorkoutType, u32>,
    pub total_distance_km: f64,
    pub total_elevation_m: i64,
    /// Distinct dates with at least one session (a day can host several)
    pub active_day_count: u32,
}

/// One Monday-start week of training, scored for medals.
///
/// `medals = max(workout_count - 2, 0)`: no medal for 0-2 sessions, then one
/// per session from the third onward, uncapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekBucket {
    /// Always a Monday
    pub week_start: NaiveDate,
    pub workout_count: u32,
    pub medals: u32,
}

/// A week bucket annotated with the running medal total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MedalHistoryEntry {
    pub week_start: NaiveDate,
    pub workout_count: u32,
    pub medals: u32,
    /// Prefix sum of `medals` over weeks ordered ascending; non-decreasing
    pub cumulative_medals: u32,
}

/// Progress-bar payload: this week's session count plus the all-time medal
/// total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WeekProgress {
    pub current_week_count: u32,
    pub total_medals: u32,
}

/// Summed distance for one (sub-period, type) cell of the distance chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistanceBySubperiod {
    pub period_num: SubperiodKey,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    pub distance: f64,
}

/// Strength-training volume for a period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StrengthVolume {
    /// Sum of reps * weight over every set
    pub total_tonnage: f64,
    /// Distinct exercises trained
    pub exercise_count: u32,
    /// Every logged set, including ones missing reps or weight
    pub total_sets: u32,
}
