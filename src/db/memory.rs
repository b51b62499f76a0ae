// SPDX-License-Identifier: MIT

//! In-memory [`WorkoutStore`] for tests and offline development.

use async_trait::async_trait;

use crate::db::{DateRange, WorkoutStore};
use crate::error::Result;
use crate::models::{SetLog, WorkoutRecord};

/// In-memory store with the same filtering semantics as [`super::PgStore`].
#[derive(Debug, Default, Clone)]
pub struct MemStore {
    workouts: Vec<WorkoutRecord>,
    sets: Vec<(i64, SetLog)>,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_workout(&mut self, workout: WorkoutRecord) {
        self.workouts.push(workout);
    }

    pub fn insert_set(&mut self, owner_id: i64, set: SetLog) {
        self.sets.push((owner_id, set));
    }
}

#[async_trait]
impl WorkoutStore for MemStore {
    async fn list_workouts(
        &self,
        owner_id: i64,
        range: Option<DateRange>,
    ) -> Result<Vec<WorkoutRecord>> {
        let mut records: Vec<WorkoutRecord> = self
            .workouts
            .iter()
            .filter(|w| w.owner_id == owner_id)
            .filter(|w| range.map_or(true, |r| r.contains(w.date)))
            .cloned()
            .collect();
        records.sort_by_key(|w| (w.date, w.id));
        Ok(records)
    }

    async fn list_sets(&self, owner_id: i64, range: DateRange) -> Result<Vec<SetLog>> {
        let mut sets: Vec<SetLog> = self
            .sets
            .iter()
            .filter(|(owner, set)| *owner == owner_id && range.contains(set.workout_date))
            .map(|(_, set)| set.clone())
            .collect();
        sets.sort_by_key(|s| (s.workout_date, s.exercise_id, s.set_number));
        Ok(sets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkoutType;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn workout(id: i64, owner_id: i64, date: NaiveDate) -> WorkoutRecord {
        WorkoutRecord {
            id,
            owner_id,
            date,
            workout_type: WorkoutType::Running,
            distance_km: None,
            elevation_m: None,
            duration_min: None,
        }
    }

    #[tokio::test]
    async fn test_scopes_by_owner() {
        let mut store = MemStore::new();
        store.insert_workout(workout(1, 1, d(2026, 2, 2)));
        store.insert_workout(workout(2, 2, d(2026, 2, 2)));

        let records = store.list_workouts(1, None).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 1);
    }

    #[tokio::test]
    async fn test_range_is_half_open() {
        let mut store = MemStore::new();
        store.insert_workout(workout(1, 1, d(2026, 1, 31)));
        store.insert_workout(workout(2, 1, d(2026, 2, 1)));
        store.insert_workout(workout(3, 1, d(2026, 3, 1)));

        let range = DateRange {
            start: d(2026, 2, 1),
            end: d(2026, 3, 1),
        };
        let records = store.list_workouts(1, Some(range)).await.unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].id, 2);
    }
}
