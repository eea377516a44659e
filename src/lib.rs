pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliArgs;

pub use adapters::http::{headhunter::HeadHunterClient, superjob::SuperJobClient};
pub use adapters::report::AsciiTableReporter;
pub use config::{SourceSelection, StatsConfig};
pub use core::{engine::StatsEngine, salary::SalaryEstimator};
pub use domain::model::{LanguageStats, StatsTable, ZeroBoundPolicy};
pub use utils::error::{Result, StatsError};
