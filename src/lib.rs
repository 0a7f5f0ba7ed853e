// src/lib.rs
//! Confidence-pool pick sheet scraper.
//!
//! `specs::picks` reads the weekly table, `codec` decodes each pick cell,
//! `points` works out what every player can still score.

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod codec;
pub mod config;
pub mod core;
pub mod csv;
pub mod error;
pub mod export;
pub mod file;
pub mod pipeline;
pub mod points;
pub mod specs;
pub mod types;

#[cfg(feature = "cli")]
pub mod cli;

pub use error::{PoolError, PoolResult};
pub use pipeline::process;
pub use types::{Game, Pick, PickStatus, PlayerRecord, PlayerRow, WeekReport, WeeklySummary};
