// SPDX-License-Identifier: MIT

//! Postgres implementation of [`WorkoutStore`].
//!
//! Queries the schema owned by the CRUD service: `workouts` plus the
//! per-discipline detail tables (`cycling_details`, `workout_details`) and
//! the strength set log (`exercise_logs`). Detail rows are coalesced in SQL
//! so each record carries a single optional distance/elevation/duration.
//! Numeric columns are cast to `float8` at the query level.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::postgres::{PgPool, PgPoolOptions};
use sqlx::FromRow;

use crate::db::{DateRange, WorkoutStore};
use crate::error::Result;
use crate::models::{SetLog, WorkoutRecord, WorkoutType};

const WORKOUTS_SELECT: &str = "\
    SELECT w.id::int8 AS id, w.user_id::int8 AS owner_id, w.date, w.type, \
           COALESCE(cd.distance, wd.distance)::float8 AS distance_km, \
           COALESCE(cd.elevation, wd.elevation) AS elevation_m, \
           COALESCE(cd.duration, wd.duration) AS duration_min \
    FROM workouts w \
    LEFT JOIN cycling_details cd ON cd.workout_id = w.id \
    LEFT JOIN workout_details wd ON wd.workout_id = w.id \
    WHERE w.user_id = $1";

const SETS_SELECT: &str = "\
    SELECT el.exercise_id::int8 AS exercise_id, el.set_number, el.reps, \
           el.weight::float8 AS weight, w.date AS workout_date \
    FROM exercise_logs el \
    JOIN workouts w ON w.id = el.workout_id \
    WHERE w.user_id = $1 AND w.type = 'musculation' \
      AND w.date >= $2 AND w.date < $3 \
    ORDER BY w.date, el.exercise_id, el.set_number";

/// Postgres-backed workout store.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connect a small pool to the given database URL.
    pub async fn connect(database_url: &str) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect(database_url)
            .await?;
        Ok(Self::new(pool))
    }
}

#[derive(FromRow)]
struct WorkoutRow {
    id: i64,
    owner_id: i64,
    date: NaiveDate,
    #[sqlx(rename = "type")]
    workout_type: String,
    distance_km: Option<f64>,
    elevation_m: Option<i32>,
    duration_min: Option<i32>,
}

impl From<WorkoutRow> for WorkoutRecord {
    fn from(row: WorkoutRow) -> Self {
        WorkoutRecord {
            id: row.id,
            owner_id: row.owner_id,
            date: row.date,
            workout_type: WorkoutType::from_db(&row.workout_type),
            distance_km: row.distance_km,
            elevation_m: row.elevation_m,
            duration_min: row.duration_min,
        }
    }
}

#[derive(FromRow)]
struct SetRow {
    exercise_id: i64,
    set_number: i32,
    reps: Option<i32>,
    weight: Option<f64>,
    workout_date: NaiveDate,
}

impl From<SetRow> for SetLog {
    fn from(row: SetRow) -> Self {
        SetLog {
            exercise_id: row.exercise_id,
            set_number: row.set_number,
            reps: row.reps,
            weight: row.weight,
            workout_date: row.workout_date,
        }
    }
}

#[async_trait]
impl WorkoutStore for PgStore {
    async fn list_workouts(
        &self,
        owner_id: i64,
        range: Option<DateRange>,
    ) -> Result<Vec<WorkoutRecord>> {
        let rows: Vec<WorkoutRow> = match range {
            Some(range) => {
                let query =
                    format!("{WORKOUTS_SELECT} AND w.date >= $2 AND w.date < $3 ORDER BY w.date, w.id");
                sqlx::query_as(&query)
                    .bind(owner_id)
                    .bind(range.start)
                    .bind(range.end)
                    .fetch_all(&self.pool)
                    .await?
            }
            None => {
                let query = format!("{WORKOUTS_SELECT} ORDER BY w.date, w.id");
                sqlx::query_as(&query)
                    .bind(owner_id)
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(rows.into_iter().map(WorkoutRecord::from).collect())
    }

    async fn list_sets(&self, owner_id: i64, range: DateRange) -> Result<Vec<SetLog>> {
        let rows: Vec<SetRow> = sqlx::query_as(SETS_SELECT)
            .bind(owner_id)
            .bind(range.start)
            .bind(range.end)
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.into_iter().map(SetLog::from).collect())
    }
}
