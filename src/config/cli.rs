use crate::config::{SourceSelection, StatsConfig};
use crate::domain::model::ZeroBoundPolicy;
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "vacancy-stats")]
#[command(about = "Programming language vacancy statistics from HeadHunter and SuperJob")]
pub struct CliArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Comma separated list of programming languages
    #[arg(long, env = "LANGUAGES", value_delimiter = ',')]
    pub languages: Option<Vec<String>>,

    /// Only count HeadHunter vacancies published within this many days
    #[arg(long, env = "DAYS_AGO")]
    pub days_ago: Option<u32>,

    /// SuperJob API secret key
    #[arg(long, env = "SUPERJOB_TOKEN", hide_env_values = true)]
    pub superjob_token: Option<String>,

    /// Which job boards to query
    #[arg(long, value_enum)]
    pub source: Option<SourceSelection>,

    /// How a salary bound of 0 is interpreted
    #[arg(long, value_enum)]
    pub zero_bound_policy: Option<ZeroBoundPolicy>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CliArgs {
    /// 預設值 -> TOML 檔案 -> 環境變數與命令列參數
    pub fn load_config(&self) -> Result<StatsConfig> {
        let mut config = match &self.config {
            Some(path) => StatsConfig::from_file(path)?,
            None => StatsConfig::default(),
        };
        self.apply_overrides(&mut config);
        Ok(config)
    }

    pub fn apply_overrides(&self, config: &mut StatsConfig) {
        if let Some(languages) = &self.languages {
            config.languages = languages.iter().map(|l| l.trim().to_string()).collect();
        }
        if let Some(days_ago) = self.days_ago {
            config.days_ago = days_ago;
        }
        if let Some(token) = &self.superjob_token {
            config.superjob.token = Some(token.clone());
        }
        if let Some(source) = self.source {
            config.sources = source;
        }
        if let Some(policy) = self.zero_bound_policy {
            config.zero_bound_policy = policy;
        }
    }
}
