// SPDX-License-Identifier: MIT

//! Trainlog stats API: period summaries, weekly medal scoring, and
//! distance/volume breakdowns over a user's workout history.
//!
//! This crate is the read-only statistics backend of a personal workout
//! tracker. Workouts are created and edited by a separate CRUD service;
//! everything here is recomputed from the stored records on each request.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod period;
pub mod routes;
pub mod services;
pub mod time_utils;

use std::sync::Arc;

use config::Config;
use db::WorkoutStore;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn WorkoutStore>,
}
