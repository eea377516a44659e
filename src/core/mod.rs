pub mod aggregator;
pub mod engine;
pub mod salary;

pub use crate::domain::model::{FetchedVacancies, LanguageStats, StatsTable};
pub use crate::domain::ports::{PagedEndpoint, StatsReporter, VacancyPage, VacancySource};
pub use crate::utils::error::Result;
