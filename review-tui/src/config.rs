//! Runtime configuration for the reviewer.
//!
//! Every tunable has a compile-time default and can be overridden through a
//! dedicated environment variable. Command line flags take precedence over
//! both.

use clap::Parser;
use review_client::Source;
use std::path::PathBuf;
use std::time::Duration;

/// Default review source: the current directory.
const DEFAULT_SOURCE: &str = ".";

/// Default HTTP timeout (in seconds).
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Default log directory.
const DEFAULT_LOG_DIR: &str = "logs";

/// Fallback data directory when no home directory can be determined.
const FALLBACK_DATA_DIR: &str = "data";

#[derive(Debug, Parser)]
#[command(name = "reviewer", version, about = "Browse reviewed chess games")]
pub struct Args {
    /// Review directory or http(s) origin
    #[arg(long)]
    pub source: Option<String>,

    /// Directory holding favorites.json
    #[arg(long)]
    pub data_dir: Option<PathBuf>,
}

/// Resolved settings for one run.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: Source,
    pub data_dir: PathBuf,
    pub refresh_command: Option<String>,
    pub http_timeout: Duration,
    pub log_dir: PathBuf,
}

impl Settings {
    pub fn resolve(args: Args) -> Self {
        let source = args.source.unwrap_or_else(get_source);
        Self {
            source: Source::parse(&source),
            data_dir: args.data_dir.unwrap_or_else(get_data_dir),
            refresh_command: get_refresh_command(),
            http_timeout: Duration::from_secs(get_http_timeout_secs()),
            log_dir: get_log_dir(),
        }
    }
}

/// Get the review source location.
///
/// Priority:
/// 1. `REVIEWER_SOURCE` env variable if set
/// 2. `.` as fallback
pub fn get_source() -> String {
    std::env::var("REVIEWER_SOURCE").unwrap_or_else(|_| DEFAULT_SOURCE.to_string())
}

/// Get the directory where favorites are stored.
///
/// Priority:
/// 1. `REVIEWER_DATA_DIR` env variable if set
/// 2. `$HOME/.config/reviewer`
/// 3. `./data` when no home directory is known
pub fn get_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REVIEWER_DATA_DIR") {
        return PathBuf::from(dir);
    }

    dirs::home_dir()
        .map(|home| home.join(".config").join("reviewer"))
        .unwrap_or_else(|| PathBuf::from(FALLBACK_DATA_DIR))
}

/// Get the command run on refresh for directory sources. Unset or blank
/// means no command.
pub fn get_refresh_command() -> Option<String> {
    std::env::var("REVIEWER_REFRESH_CMD")
        .ok()
        .filter(|cmd| !cmd.trim().is_empty())
}

/// Get the HTTP timeout in seconds.
///
/// Priority:
/// 1. `REVIEWER_HTTP_TIMEOUT_SECS` env variable if set (falls back to the
///    default if the value is not a positive integer)
/// 2. `10` seconds as fallback
pub fn get_http_timeout_secs() -> u64 {
    if let Ok(timeout) = std::env::var("REVIEWER_HTTP_TIMEOUT_SECS") {
        return timeout
            .trim()
            .parse()
            .ok()
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS);
    }

    DEFAULT_HTTP_TIMEOUT_SECS
}

/// Get the log directory.
///
/// Priority:
/// 1. `REVIEWER_LOG_DIR` env variable if set
/// 2. `logs` as fallback
pub fn get_log_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("REVIEWER_LOG_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from(DEFAULT_LOG_DIR)
}
