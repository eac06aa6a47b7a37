pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::LocalReportSink, CliConfig};
pub use core::engine::DrillEngine;
pub use core::{classifier::ClassifierExercise, perfect::PerfectExercise};
pub use utils::error::{DrillError, Result};
