//! Core engine types: RNG, configuration, errors.
//!
//! This module contains the building blocks every other module leans on.
//! Game rules live in `rules` and `games`, not here.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DrawCount, KlondikeConfig};
pub use error::RuleError;
pub use rng::GameRng;
