//! CLI options, mirroring the usual load-tool knobs (vus/duration/target).

use std::time::Duration;

use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "formbench-load", about = "Drive the formbench demo routes")]
pub struct LoadOpts {
    /// Base URL of the target server.
    #[arg(long, env = "FORMBENCH_BASE_URL", default_value = "http://127.0.0.1:3000")]
    pub base_url: String,

    /// Number of virtual clients running the scenario concurrently.
    #[arg(long, default_value_t = 10)]
    pub vus: u32,

    /// Total run duration in seconds.
    #[arg(long, default_value_t = 30)]
    pub duration_secs: u64,

    /// Pause after each request, in milliseconds.
    #[arg(long, default_value_t = 1000)]
    pub think_time_ms: u64,
}

impl LoadOpts {
    pub fn duration(&self) -> Duration {
        Duration::from_secs(self.duration_secs)
    }

    pub fn think_time(&self) -> Duration {
        Duration::from_millis(self.think_time_ms)
    }

    /// Base URL without a trailing slash, so route paths join cleanly.
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}
