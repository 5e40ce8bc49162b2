use chrono::NaiveDate;
use std::fmt::Display;
use std::path::PathBuf;

#[derive(Debug)]
pub struct Config {
    pub debug_config: DebugConfig,
    pub source: SourceConfig,
    pub cutoff_date: NaiveDate,
    /// Seed for likes and attendee placeholders
    pub seed: Option<u64>,
}

#[derive(Debug)]
pub struct DebugConfig {
    pub event_limit: Option<i32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SourceConfig {
    Http(String),
    Directory(PathBuf),
}

impl SourceConfig {
    pub fn parse(value: &str) -> Self {
        if value.starts_with("http://") || value.starts_with("https://") {
            SourceConfig::Http(value.to_string())
        } else {
            SourceConfig::Directory(PathBuf::from(value))
        }
    }
}

impl Display for SourceConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceConfig::Http(url) => write!(f, "{}", url),
            SourceConfig::Directory(path) => write!(f, "{}", path.display()),
        }
    }
}
