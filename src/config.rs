use std::path::PathBuf;
use std::time::Duration;

use crate::api::DEFAULT_LATENCY;
use crate::session::DEFAULT_DURATION;

/// Runtime settings, built from the command line.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Time allowed to solve one quiz.
    pub quiz_duration: Duration,
    /// Artificial delay of every mock API call.
    pub api_latency: Duration,
    /// Optional JSON file of quizzes to start with.
    pub seed_path: Option<PathBuf>,
    /// Where log records go. No logging without it.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiz_duration: DEFAULT_DURATION,
            api_latency: DEFAULT_LATENCY,
            seed_path: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn with_duration_secs(mut self, secs: u64) -> Self {
        self.quiz_duration = Duration::from_secs(secs);
        self
    }

    pub fn with_latency_ms(mut self, millis: u64) -> Self {
        self.api_latency = Duration::from_millis(millis);
        self
    }

    pub fn with_seed(mut self, path: Option<PathBuf>) -> Self {
        self.seed_path = path;
        self
    }

    pub fn with_log_file(mut self, path: Option<PathBuf>) -> Self {
        self.log_file = path;
        self
    }
}
