use std::{fmt, path::PathBuf, time::Duration};

pub const DEFAULT_WORK_LIST_PATH: &str = "work_list.json";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub forum: ForumConfig,
    pub logging: LogConfig,
    pub pacing: PacingConfig,
    pub http: HttpConfig,
    pub work_list_path: PathBuf,
}

impl AppConfig {
    pub fn new(forum: ForumConfig) -> Self {
        Self {
            forum,
            logging: LogConfig::default(),
            pacing: PacingConfig::default(),
            http: HttpConfig::default(),
            work_list_path: PathBuf::from(DEFAULT_WORK_LIST_PATH),
        }
    }
}

/// Credentials and location of the forum the messages are sent through.
#[derive(Clone, PartialEq, Eq)]
pub struct ForumConfig {
    pub hostname: String,
    pub username: String,
    pub api_key: String,
}

impl fmt::Debug for ForumConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ForumConfig")
            .field("hostname", &self.hostname)
            .field("username", &self.username)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingConfig {
    pub request_delay_ms: u64,
    pub page_size: usize,
    pub rate_limit_fallback_secs: u64,
}

impl PacingConfig {
    pub fn request_delay(&self) -> Duration {
        Duration::from_millis(self.request_delay_ms)
    }

    pub fn rate_limit_fallback(&self) -> Duration {
        Duration::from_secs(self.rate_limit_fallback_secs)
    }
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: 1_000,
            page_size: 50,
            rate_limit_fallback_secs: 10,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpConfig {
    pub timeout_secs: u64,
}

impl HttpConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { timeout_secs: 30 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_never_contains_api_key() {
        let forum = ForumConfig {
            hostname: "forum.example.com".to_owned(),
            username: "system".to_owned(),
            api_key: "d3adb33fcafe".to_owned(),
        };

        let rendered = format!("{:?}", AppConfig::new(forum));

        assert!(!rendered.contains("d3adb33fcafe"));
        assert!(rendered.contains("[REDACTED]"));
        assert!(rendered.contains("forum.example.com"));
    }
}
