use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

pub const DEFAULT_TARGET_DIR: &str = "Fetched_Images";
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_USER_AGENT: &str = "Ubuntu-Image-Fetcher/1.0 (Respectful Client)";

#[derive(Debug, Clone, PartialEq)]
pub struct FetcherConfig {
    pub target_dir: PathBuf,
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetcherConfig {
    fn default() -> Self {
        Self {
            target_dir: PathBuf::from(DEFAULT_TARGET_DIR),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            user_agent: DEFAULT_USER_AGENT.to_string(),
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "image-fetcher")]
#[command(about = "Fetch images from the web into a local directory, skipping duplicates")]
pub struct Cli {
    /// Image URLs, each optionally a comma separated list. Prompts when omitted.
    pub urls: Vec<String>,

    #[arg(long, default_value = DEFAULT_TARGET_DIR)]
    pub target_dir: PathBuf,

    /// Per request timeout in seconds
    #[arg(long, default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    #[arg(long, default_value = DEFAULT_USER_AGENT)]
    pub user_agent: String,

    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn fetcher_config(&self) -> FetcherConfig {
        FetcherConfig {
            target_dir: self.target_dir.clone(),
            timeout: Duration::from_secs(self.timeout),
            user_agent: self.user_agent.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use clap::Parser;

    use super::{Cli, FetcherConfig};

    #[test]
    fn test_defaults_match_fetcher_config() {
        let cli = Cli::parse_from(["image-fetcher"]);

        assert!(cli.urls.is_empty());
        assert!(!cli.verbose);
        assert_eq!(cli.fetcher_config(), FetcherConfig::default());
    }

    #[test]
    fn test_overrides() {
        let cli = Cli::parse_from([
            "image-fetcher",
            "--target-dir",
            "pictures",
            "--timeout",
            "3",
            "-v",
            "https://example.com/a.png,https://example.com/b.png",
        ]);

        let config = cli.fetcher_config();

        assert!(cli.verbose);
        assert_eq!(cli.urls.len(), 1);
        assert_eq!(config.target_dir.to_str(), Some("pictures"));
        assert_eq!(config.timeout, Duration::from_secs(3));
    }
}
