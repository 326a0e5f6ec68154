use std::time::Duration;

use crate::cli::Cli;
use crate::dictionary::parse_extensions;
use crate::error::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11: Lunux x86_64: rv:19.0) Gecko/20100101 Firefox/19.0";
pub const DEFAULT_THREADS: usize = 10;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Settings for one run. Built once, then shared read-only with every worker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub target_url: String,
    pub dictionary_url: String,
    pub threads: usize,
    pub extensions: Vec<String>,
    pub user_agent: String,
    /// `None` leaves requests unbounded.
    pub timeout: Option<Duration>,
}

impl ScanConfig {
    pub fn new(target_url: impl Into<String>, dictionary_url: impl Into<String>) -> Self {
        Self {
            target_url: target_url.into(),
            dictionary_url: dictionary_url.into(),
            threads: DEFAULT_THREADS,
            extensions: Vec::new(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            timeout: Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)),
        }
    }

    pub fn from_cli(cli: &Cli) -> Result<Self, ConfigError> {
        let config = Self {
            target_url: cli.url.clone(),
            dictionary_url: cli.dict.clone(),
            threads: cli.threads,
            extensions: parse_extensions(&cli.ext),
            user_agent: cli.user_agent.clone(),
            timeout: match cli.timeout {
                0 => None,
                secs => Some(Duration::from_secs(secs)),
            },
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.target_url.trim().is_empty() {
            return Err(ConfigError::EmptyTarget);
        }
        if self.dictionary_url.trim().is_empty() {
            return Err(ConfigError::EmptyDictionary);
        }
        if self.threads == 0 {
            return Err(ConfigError::NoWorkers);
        }
        Ok(())
    }

    /// The target is joined literally: `base + "/" + candidate`.
    pub fn url_for(&self, candidate: &str) -> String {
        format!("{}/{}", self.target_url, candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_from_cli() {
        let cli = Cli::parse_from(["dirlister", "-u", "http://x", "-d", "http://w/list.txt"]);
        let config = ScanConfig::from_cli(&cli).unwrap();

        assert_eq!(config.threads, DEFAULT_THREADS);
        assert!(config.extensions.is_empty());
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout, Some(Duration::from_secs(DEFAULT_TIMEOUT_SECS)));
    }

    #[test]
    fn test_thread_count_is_honoured() {
        let cli = Cli::parse_from([
            "dirlister", "-u", "http://x", "-d", "http://w", "-t", "20", "-e", "html,txt",
        ]);
        let config = ScanConfig::from_cli(&cli).unwrap();

        assert_eq!(config.threads, 20);
        assert_eq!(config.extensions, vec!["html", "txt"]);
    }

    #[test]
    fn test_zero_timeout_disables_it() {
        let cli = Cli::parse_from([
            "dirlister", "-u", "http://x", "-d", "http://w", "--timeout", "0",
        ]);
        let config = ScanConfig::from_cli(&cli).unwrap();
        assert_eq!(config.timeout, None);
    }

    #[test]
    fn test_zero_threads_rejected() {
        let cli = Cli::parse_from(["dirlister", "-u", "http://x", "-d", "http://w", "-t", "0"]);
        assert_eq!(ScanConfig::from_cli(&cli), Err(ConfigError::NoWorkers));
    }

    #[test]
    fn test_empty_target_rejected() {
        let config = ScanConfig::new("  ", "http://w");
        assert_eq!(config.validate(), Err(ConfigError::EmptyTarget));
    }

    #[test]
    fn test_url_is_joined_literally() {
        let config = ScanConfig::new("http://x", "http://w");
        assert_eq!(config.url_for("admin"), "http://x/admin");

        let trailing = ScanConfig::new("http://x/", "http://w");
        assert_eq!(trailing.url_for("admin"), "http://x//admin");
    }
}
