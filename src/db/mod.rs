// SPDX-License-Identifier: MIT

//! Read-only access to the workout store.
//!
//! The stats service never writes: workouts, detail rows, and set logs are
//! owned by the CRUD service. [`WorkoutStore`] is the seam between route
//! handlers and the concrete store, so integration tests can run against
//! [`MemStore`] without a database.

pub mod memory;
pub mod postgres;

pub use memory::MemStore;
pub use postgres::PgStore;

use async_trait::async_trait;
use chrono::NaiveDate;

use crate::error::Result;
use crate::models::{SetLog, WorkoutRecord};

/// Half-open calendar range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date < self.end
    }
}

impl From<(NaiveDate, NaiveDate)> for DateRange {
    fn from((start, end): (NaiveDate, NaiveDate)) -> Self {
        Self { start, end }
    }
}

/// Read-only view of the workout store, scoped by owner.
#[async_trait]
pub trait WorkoutStore: Send + Sync {
    /// Workouts for one owner, optionally restricted to a date range.
    /// `None` means the owner's entire history (medal scoring needs it).
    async fn list_workouts(
        &self,
        owner_id: i64,
        range: Option<DateRange>,
    ) -> Result<Vec<WorkoutRecord>>;

    /// Strength-training set logs for one owner within a date range.
    async fn list_sets(&self, owner_id: i64, range: DateRange) -> Result<Vec<SetLog>>;
}
