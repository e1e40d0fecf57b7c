// SPDX-FileCopyrightText: © 2025 TTKB, LLC
// SPDX-License-Identifier: BSD-3-CLAUSE

use thiserror::Error;

/// Errors raised while setting up or running a simulation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SimulationError {
    /// The requested number of rolls was less than one.
    #[error("Invalid rolls. Try again.")]
    InvalidRollCount(i64),

    /// A [DieSource](crate::rng::DieSource) produced a face outside `1..=6`.
    #[error("die face {0} is not between 1 and 6")]
    InvalidFace(u8),
}
