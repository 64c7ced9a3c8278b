use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, ValueEnum};
use directory_engine::FetchSettings;
use engine_logging::{LevelFilter, LogDestination};

#[derive(Parser, Debug)]
#[command(
    name = "candidates",
    about = "Browse, filter and sort candidates served by the directory API",
    version
)]
pub struct Cli {
    /// Base URL of the directory backend
    #[arg(long, env = "CANDIDATES_BASE_URL", default_value = "http://127.0.0.1:5001")]
    pub base_url: String,
    /// Request timeout in seconds for each list load
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,
    /// Where log output is written
    #[arg(long, value_enum, default_value_t = LogTarget::File)]
    pub log: LogTarget,
    /// Log file used by `--log file` and `--log both`
    #[arg(long, default_value = "candidates.log")]
    pub log_file: PathBuf,
    /// Log at debug level
    #[arg(long)]
    pub verbose: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    File,
    Terminal,
    Both,
    Off,
}

impl From<LogTarget> for LogDestination {
    fn from(target: LogTarget) -> Self {
        match target {
            LogTarget::File => LogDestination::File,
            LogTarget::Terminal => LogDestination::Terminal,
            LogTarget::Both => LogDestination::Both,
            LogTarget::Off => LogDestination::Off,
        }
    }
}

impl Cli {
    pub fn fetch_settings(&self) -> FetchSettings {
        FetchSettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            ..FetchSettings::with_base_url(self.base_url.clone())
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overrides_reach_fetch_settings() {
        let cli = Cli::try_parse_from([
            "candidates",
            "--base-url",
            "http://directory.internal:8080",
            "--timeout-secs",
            "5",
            "--log",
            "off",
        ])
        .expect("valid args");

        let settings = cli.fetch_settings();
        assert_eq!(settings.base_url, "http://directory.internal:8080");
        assert_eq!(settings.request_timeout, Duration::from_secs(5));
        assert_eq!(LogDestination::from(cli.log), LogDestination::Off);
        assert_eq!(cli.log_level(), LevelFilter::Info);
    }

    #[test]
    fn rejects_unknown_log_target() {
        assert!(Cli::try_parse_from(["candidates", "--log", "syslog"]).is_err());
    }
}
