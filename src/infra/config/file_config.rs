use std::path::PathBuf;

use serde::Deserialize;

use crate::infra::config::{AppConfig, ForumConfig, HttpConfig, LogConfig, PacingConfig};

/// On-disk shape of `config.json`: the three credentials are mandatory,
/// everything else falls back to defaults.
#[derive(Debug, Deserialize)]
pub struct FileConfig {
    pub hostname: String,
    pub username: String,
    pub api_key: String,
    pub logging: Option<FileLogConfig>,
    pub pacing: Option<FilePacingConfig>,
    pub http: Option<FileHttpConfig>,
    pub work_list_path: Option<PathBuf>,
}

impl FileConfig {
    pub fn empty_required_field(&self) -> Option<&'static str> {
        [
            ("hostname", &self.hostname),
            ("username", &self.username),
            ("api_key", &self.api_key),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
    }

    pub fn into_app_config(self) -> AppConfig {
        let mut config = AppConfig::new(ForumConfig {
            hostname: self.hostname,
            username: self.username,
            api_key: self.api_key,
        });

        if let Some(logging) = self.logging {
            logging.merge_into(&mut config.logging);
        }

        if let Some(pacing) = self.pacing {
            pacing.merge_into(&mut config.pacing);
        }

        if let Some(http) = self.http {
            http.merge_into(&mut config.http);
        }

        if let Some(path) = self.work_list_path {
            config.work_list_path = path;
        }

        config
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileLogConfig {
    pub level: Option<String>,
}

impl FileLogConfig {
    fn merge_into(self, config: &mut LogConfig) {
        if let Some(level) = self.level {
            config.level = level;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FilePacingConfig {
    pub request_delay_ms: Option<u64>,
    pub page_size: Option<usize>,
    pub rate_limit_fallback_secs: Option<u64>,
}

impl FilePacingConfig {
    fn merge_into(self, config: &mut PacingConfig) {
        if let Some(delay_ms) = self.request_delay_ms {
            config.request_delay_ms = delay_ms;
        }

        if let Some(page_size) = self.page_size.filter(|size| *size > 0) {
            config.page_size = page_size;
        }

        if let Some(fallback_secs) = self.rate_limit_fallback_secs {
            config.rate_limit_fallback_secs = fallback_secs;
        }
    }
}

#[derive(Debug, Deserialize, Default)]
pub struct FileHttpConfig {
    pub timeout_secs: Option<u64>,
}

impl FileHttpConfig {
    fn merge_into(self, config: &mut HttpConfig) {
        if let Some(timeout_secs) = self.timeout_secs {
            config.timeout_secs = timeout_secs;
        }
    }
}
