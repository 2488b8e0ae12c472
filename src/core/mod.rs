//! Core engine types: errors, randomness, configuration.
//!
//! Everything else in the crate builds on these.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BoardSpec, LadderConfig, MAX_SELECTABLE_COLUMNS, MIN_COLUMNS, MIN_ROWS};
pub use error::{ErrorKind, LadderError, Result};
pub use rng::{LadderRng, LadderRngState, RandomSource};
