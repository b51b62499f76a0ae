// SPDX-License-Identifier: MIT

//! Pure aggregation over workout snapshots.
//!
//! Every function here takes an explicit slice of records and returns a
//! derived value; nothing reaches for ambient state or the database. The
//! route handlers fetch a snapshot from the store and delegate to these.
//!
//! Medal scoring always runs over the owner's entire history, not a period
//! slice, so cumulative totals stay stable regardless of which month the
//! client is viewing.

use chrono::{Duration, NaiveDate};
use std::collections::{BTreeMap, HashMap, HashSet};

use crate::models::{
    DistanceBySubperiod, MedalHistoryEntry, SetLog, StrengthVolume, WeekBucket, WeekProgress,
    WorkoutRecord, WorkoutType,
};
use crate::period::PeriodKind;
use crate::time_utils::week_start_monday;

/// Sessions per week that earn no medal. From the third session onward each
/// session earns one medal, uncapped.
const MEDAL_FREE_SESSIONS: u32 = 2;

/// Summed measures for a period.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MeasureTotals {
    pub total_distance_km: f64,
    pub total_elevation_m: i64,
    pub active_day_count: u32,
}

/// Count sessions grouped by workout type. Returns the per-type map (only
/// non-zero types present) and the total count.
pub fn count_by_type(records: &[WorkoutRecord]) -> (HashMap<WorkoutType, u32>, u32) {
    let mut counts = HashMap::new();
    for record in records {
        *counts.entry(record.workout_type).or_insert(0) += 1;
    }
    (counts, records.len() as u32)
}

/// Sum distance and elevation over a period, counting distinct active days.
/// Missing measures contribute 0.
pub fn sum_measures(records: &[WorkoutRecord]) -> MeasureTotals {
    let mut totals = MeasureTotals::default();
    let mut active_days = HashSet::new();

    for record in records {
        totals.total_distance_km += record.distance_km.unwrap_or(0.0);
        totals.total_elevation_m += i64::from(record.elevation_m.unwrap_or(0));
        active_days.insert(record.date);
    }

    totals.active_day_count = active_days.len() as u32;
    totals
}

fn medals_for(workout_count: u32) -> u32 {
    workout_count.saturating_sub(MEDAL_FREE_SESSIONS)
}

/// Bucket every record into its Monday-start week. Only weeks with at least
/// one workout exist in the result.
pub fn bucket_by_week(records: &[WorkoutRecord]) -> BTreeMap<NaiveDate, u32> {
    let mut buckets = BTreeMap::new();
    for record in records {
        *buckets.entry(week_start_monday(record.date)).or_insert(0) += 1;
    }
    buckets
}

/// This week's session count plus the all-time medal total.
///
/// `history` must be the owner's full workout history.
pub fn week_progress(history: &[WorkoutRecord], today: NaiveDate) -> WeekProgress {
    let buckets = bucket_by_week(history);
    let current_week = week_start_monday(today);

    WeekProgress {
        current_week_count: buckets.get(&current_week).copied().unwrap_or(0),
        total_medals: buckets.values().map(|&count| medals_for(count)).sum(),
    }
}

/// Week buckets whose 7-day span overlaps the given month, ordered by week
/// start ascending.
///
/// A week straddling a month boundary belongs to both months, matching the
/// original query's `week_start + 6 days >= month_start AND week_start <
/// month_end` predicate.
pub fn weekly_medals_in_month(
    history: &[WorkoutRecord],
    year: i32,
    month: u32,
) -> Vec<WeekBucket> {
    let (month_start, month_end) = PeriodKind::Month { year, month }.date_range();

    bucket_by_week(history)
        .into_iter()
        .filter(|&(week_start, _)| {
            week_start < month_end && week_start + Duration::days(6) >= month_start
        })
        .map(|(week_start, workout_count)| WeekBucket {
            week_start,
            workout_count,
            medals: medals_for(workout_count),
        })
        .collect()
}

/// All non-empty week buckets ordered ascending, each annotated with the
/// running medal total.
///
/// Weeks with zero workouts are omitted rather than reported as zero
/// entries; clients that want a gap-free series interpolate.
pub fn medal_history(history: &[WorkoutRecord]) -> Vec<MedalHistoryEntry> {
    let mut cumulative = 0;

    bucket_by_week(history)
        .into_iter()
        .map(|(week_start, workout_count)| {
            let medals = medals_for(workout_count);
            cumulative += medals;
            MedalHistoryEntry {
                week_start,
                workout_count,
                medals,
                cumulative_medals: cumulative,
            }
        })
        .collect()
}

/// Pivot a period's records into (sub-period, type, distance) rows.
///
/// Cells whose summed distance is exactly 0 are omitted. Output is ordered
/// by sub-period key then type, for deterministic responses.
pub fn distance_by_subperiod(
    records: &[WorkoutRecord],
    period: &PeriodKind,
) -> Vec<DistanceBySubperiod> {
    let mut cells = BTreeMap::new();
    for record in records {
        let key = (period.subperiod_key(record.date), record.workout_type);
        *cells.entry(key).or_insert(0.0) += record.distance_km.unwrap_or(0.0);
    }

    cells
        .into_iter()
        .filter(|&(_, distance)| distance != 0.0)
        .map(|((period_num, workout_type), distance)| DistanceBySubperiod {
            period_num,
            workout_type,
            distance,
        })
        .collect()
}

/// Tonnage and set counts over a period's strength sets.
///
/// A set missing reps or weight contributes 0 tonnage but still counts
/// toward `total_sets`.
pub fn strength_volume(sets: &[SetLog]) -> StrengthVolume {
    let mut total_tonnage = 0.0;
    let mut exercises = HashSet::new();

    for set in sets {
        if let (Some(reps), Some(weight)) = (set.reps, set.weight) {
            total_tonnage += f64::from(reps) * weight;
        }
        exercises.insert(set.exercise_id);
    }

    StrengthVolume {
        total_tonnage,
        exercise_count: exercises.len() as u32,
        total_sets: sets.len() as u32,
    }
}
