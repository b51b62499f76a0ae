// SPDX-License-Identifier: MIT

//! Stored workout records, as read from the workout store.
//!
//! These are inputs only: the stats service never writes them. Creation and
//! editing belong to the CRUD service that owns the schema.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workout discipline.
///
/// The wire and database tokens are the French labels the original
/// application stores (`velo`, `musculation`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WorkoutType {
    #[serde(rename = "velo")]
    Cycling,
    #[serde(rename = "musculation")]
    Strength,
    #[serde(rename = "course")]
    Running,
    #[serde(rename = "natation")]
    Swimming,
    #[serde(rename = "marche")]
    Walking,
    #[serde(rename = "custom")]
    Custom,
}

impl WorkoutType {
    /// Parse a stored type token. The schema stores a free varchar, so
    /// anything unrecognized is treated as a custom workout.
    pub fn from_db(token: &str) -> Self {
        match token {
            "velo" => WorkoutType::Cycling,
            "musculation" => WorkoutType::Strength,
            "course" => WorkoutType::Running,
            "natation" => WorkoutType::Swimming,
            "marche" => WorkoutType::Walking,
            _ => WorkoutType::Custom,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Cycling => "velo",
            WorkoutType::Strength => "musculation",
            WorkoutType::Running => "course",
            WorkoutType::Swimming => "natation",
            WorkoutType::Walking => "marche",
            WorkoutType::Custom => "custom",
        }
    }
}

/// A single stored workout session.
///
/// The store coalesces the cycling-specific and generic detail rows into the
/// optional measure fields, so a record carries at most one distance value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutRecord {
    pub id: i64,
    /// Owning user; aggregation never crosses owners.
    pub owner_id: i64,
    /// Calendar date of the session (no time component)
    pub date: NaiveDate,
    #[serde(rename = "type")]
    pub workout_type: WorkoutType,
    /// Distance in kilometers, if the session has one
    pub distance_km: Option<f64>,
    /// Elevation gain in meters
    pub elevation_m: Option<i32>,
    /// Duration in minutes
    pub duration_min: Option<i32>,
}

/// One logged set of a strength exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLog {
    pub exercise_id: i64,
    pub set_number: i32,
    pub reps: Option<i32>,
    pub weight: Option<f64>,
    /// Date of the workout the set belongs to
    pub workout_date: NaiveDate,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_type_token_maps_to_custom() {
        assert_eq!(WorkoutType::from_db("escalade"), WorkoutType::Custom);
        assert_eq!(WorkoutType::from_db("velo"), WorkoutType::Cycling);
    }

    #[test]
    fn test_type_serializes_to_wire_token() {
        let json = serde_json::to_string(&WorkoutType::Strength).unwrap();
        assert_eq!(json, "\"musculation\"");
    }

    #[test]
    fn test_db_and_wire_tokens_agree() {
        for t in [
            WorkoutType::Cycling,
            WorkoutType::Strength,
            WorkoutType::Running,
            WorkoutType::Swimming,
            WorkoutType::Walking,
            WorkoutType::Custom,
        ] {
            assert_eq!(WorkoutType::from_db(t.as_str()), t);
        }
    }
}
