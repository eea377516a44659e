use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("{source_name} returned HTTP {status} for {url}")]
    Transport {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Malformed response from {source_name}: {message}")]
    MalformedResponse {
        source_name: String,
        message: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 錯誤分類，決定 CLI 的退出碼
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Network,
    Data,
}

impl ErrorCategory {
    pub fn exit_code(&self) -> i32 {
        match self {
            ErrorCategory::Configuration => 1,
            ErrorCategory::Network => 2,
            ErrorCategory::Data => 3,
        }
    }
}

impl StatsError {
    pub fn malformed(source_name: &str, message: impl Into<String>) -> Self {
        StatsError::MalformedResponse {
            source_name: source_name.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::Transport { .. } | StatsError::Request(_) => ErrorCategory::Network,
            StatsError::MalformedResponse { .. } => ErrorCategory::Data,
            StatsError::ConfigError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StatsError::Transport { status, .. } if *status == 401 || *status == 403 => {
                "Check the API credentials (SUPERJOB_TOKEN) and the User-Agent".to_string()
            }
            StatsError::Transport { status, .. } if *status >= 500 => {
                "The job board is having trouble, try again later".to_string()
            }
            StatsError::Transport { .. } => {
                "Check the request parameters (area, catalogue, languages)".to_string()
            }
            StatsError::Request(_) => "Check the network connection and base URLs".to_string(),
            StatsError::MalformedResponse { .. } => {
                "The API response format may have changed, check the base URL".to_string()
            }
            StatsError::MissingConfigError { field } => {
                format!("Set '{}' in the config file, environment or command line", field)
            }
            StatsError::ConfigError { .. } | StatsError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch vacancies: {}", self),
            ErrorCategory::Data => format!("Unexpected API response: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
