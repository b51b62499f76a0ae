// SPDX-License-Identifier: MIT

//! Business logic services.

pub mod aggregation;
