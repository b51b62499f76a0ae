// SPDX-License-Identifier: MIT

//! Data models for the application.

pub mod summary;
pub mod workout;

pub use summary::{
    DistanceBySubperiod, MedalHistoryEntry, PeriodSummary, StrengthVolume, WeekBucket,
    WeekProgress,
};
pub use workout::{SetLog, WorkoutRecord, WorkoutType};
