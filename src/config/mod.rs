#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::domain::model::ZeroBoundPolicy;
use crate::utils::error::{Result, StatsError};
use crate::utils::validation::{self, Validate};
use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LANGUAGES: [&str; 13] = [
    "TypeScript",
    "Swift",
    "Scala",
    "Objective-C",
    "Go",
    "C",
    "C#",
    "C++",
    "PHP",
    "Ruby",
    "Python",
    "Java",
    "JavaScript",
];

const MAX_DAYS_AGO: u32 = 365;

/// 要統計的資料來源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum SourceSelection {
    #[default]
    All,
    #[cfg_attr(feature = "cli", value(name = "hh"))]
    #[serde(rename = "hh")]
    HeadHunter,
    #[cfg_attr(feature = "cli", value(name = "superjob"))]
    SuperJob,
}

impl SourceSelection {
    pub fn includes_headhunter(&self) -> bool {
        matches!(self, SourceSelection::All | SourceSelection::HeadHunter)
    }

    pub fn includes_superjob(&self) -> bool {
        matches!(self, SourceSelection::All | SourceSelection::SuperJob)
    }
}

// 明確設定的標題優先，其次為已知地區名稱，最後退回 area id
fn region_title(board: &str, title: Option<&str>, region: Option<&str>, area: u32) -> String {
    match (title, region) {
        (Some(title), _) => title.to_string(),
        (None, Some(region)) => format!("{} {}", board, region),
        (None, None) => format!("{} area {}", board, area),
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadHunterSettings {
    pub base_url: String,
    /// Table title. When unset it is derived from `area`, see `resolved_title`.
    pub title: Option<String>,
    /// HeadHunter area id, `1` is Moscow.
    pub area: u32,
    /// Word prepended to the language in the free-text query.
    pub role_prefix: String,
    pub currency: String,
}

impl HeadHunterSettings {
    pub fn resolved_title(&self) -> String {
        let region = match self.area {
            1 => Some("Moscow"),
            2 => Some("Saint Petersburg"),
            _ => None,
        };
        region_title("HeadHunter", self.title.as_deref(), region, self.area)
    }
}

impl Default for HeadHunterSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.hh.ru/vacancies/".to_string(),
            title: None,
            area: 1,
            role_prefix: "Программист".to_string(),
            currency: "RUR".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuperJobSettings {
    pub base_url: String,
    /// Table title. When unset it is derived from `area`, see `resolved_title`.
    pub title: Option<String>,
    /// `X-Api-App-Id` secret key.
    pub token: Option<String>,
    /// SuperJob town id, `4` is Moscow.
    pub area: u32,
    /// Catalogue id, `48` is "Development, programming".
    pub catalogue: u32,
    /// Where keywords are matched, `1` searches vacancy titles only.
    pub keyword_scope: u32,
    pub currency: String,
}

impl SuperJobSettings {
    pub fn resolved_title(&self) -> String {
        let region = match self.area {
            4 => Some("Moscow"),
            14 => Some("Saint Petersburg"),
            _ => None,
        };
        region_title("SuperJob", self.title.as_deref(), region, self.area)
    }
}

impl Default for SuperJobSettings {
    fn default() -> Self {
        Self {
            base_url: "https://api.superjob.ru/2.0/vacancies/".to_string(),
            title: None,
            token: None,
            area: 4,
            catalogue: 48,
            keyword_scope: 1,
            currency: "rub".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatsConfig {
    pub languages: Vec<String>,
    /// HeadHunter only returns vacancies published within this many days.
    pub days_ago: u32,
    pub zero_bound_policy: ZeroBoundPolicy,
    pub sources: SourceSelection,
    pub user_agent: String,
    pub headhunter: HeadHunterSettings,
    pub superjob: SuperJobSettings,
}

impl Default for StatsConfig {
    fn default() -> Self {
        Self {
            languages: DEFAULT_LANGUAGES.iter().map(|l| l.to_string()).collect(),
            days_ago: 30,
            zero_bound_policy: ZeroBoundPolicy::default(),
            sources: SourceSelection::default(),
            user_agent: format!("vacancy-stats/{}", env!("CARGO_PKG_VERSION")),
            headhunter: HeadHunterSettings::default(),
            superjob: SuperJobSettings::default(),
        }
    }
}

impl StatsConfig {
    /// First publication date HeadHunter should include, `days_ago` days before `today`.
    pub fn date_from(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_sub_days(Days::new(u64::from(self.days_ago)))
            .unwrap_or(NaiveDate::MIN)
    }
}

impl Validate for StatsConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_languages("languages", &self.languages)?;
        validation::validate_range("days_ago", self.days_ago, 0, MAX_DAYS_AGO)?;
        validation::validate_non_empty_string("user_agent", &self.user_agent)?;

        if self.sources.includes_headhunter() {
            validation::validate_base_url("headhunter.base_url", &self.headhunter.base_url)?;
            validation::validate_non_empty_string("headhunter.currency", &self.headhunter.currency)?;
        }

        if self.sources.includes_superjob() {
            validation::validate_base_url("superjob.base_url", &self.superjob.base_url)?;
            validation::validate_non_empty_string("superjob.currency", &self.superjob.currency)?;
            let token = validation::validate_required_field("superjob.token", &self.superjob.token)?;
            validation::validate_non_empty_string("superjob.token", token)?;
            if let Some(variable) = toml_config::unresolved_placeholder(token)? {
                return Err(StatsError::MissingConfigError { field: variable });
            }
        }

        Ok(())
    }
}
