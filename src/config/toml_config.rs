use crate::config::StatsConfig;
use crate::utils::error::{Result, StatsError};
use regex::{Captures, Regex};
use std::path::Path;

const PLACEHOLDER_PATTERN: &str = r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}";

impl StatsConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| StatsError::ConfigError {
            message: format!("Cannot read config file '{}': {}", path.display(), e),
        })?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置，未列出的欄位使用預設值
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| StatsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }
}

fn placeholder_regex() -> Result<Regex> {
    Regex::new(PLACEHOLDER_PATTERN).map_err(|e| StatsError::ConfigError {
        message: format!("Invalid placeholder pattern: {}", e),
    })
}

/// 替換環境變數 (例如 ${SUPERJOB_TOKEN})，未設定的變數保留原樣，
/// 由 `validate` 針對實際選用的來源回報
fn substitute_env_vars(content: &str) -> Result<String> {
    let re = placeholder_regex()?;

    let result = re.replace_all(content, |caps: &Captures| {
        std::env::var(&caps[1]).unwrap_or_else(|_| caps[0].to_string())
    });

    Ok(result.into_owned())
}

/// Name of the first `${VAR}` placeholder left unresolved in `value`.
pub(crate) fn unresolved_placeholder(value: &str) -> Result<Option<String>> {
    let re = placeholder_regex()?;
    Ok(re.captures(value).map(|caps| caps[1].to_string()))
}
