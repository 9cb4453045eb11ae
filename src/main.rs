use std::path::PathBuf;

use clap::Parser;
use quiz_builder::{Config, logging};

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file with quizzes to start with
    #[arg(short, long)]
    quizzes: Option<PathBuf>,

    /// Seconds allowed to solve one quiz
    #[arg(short, long, default_value_t = 120, value_parser = clap::value_parser!(u64).range(1..))]
    duration: u64,

    /// Simulated backend latency in milliseconds
    #[arg(long, default_value_t = 500)]
    latency_ms: u64,

    /// Write logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn into_config(self) -> Config {
        Config::default()
            .with_seed(self.quizzes)
            .with_duration_secs(self.duration)
            .with_latency_ms(self.latency_ms)
            .with_log_file(self.log_file)
    }
}

#[tokio::main]
async fn main() {
    let config = Args::parse().into_config();

    if let Some(path) = &config.log_file
        && let Err(e) = logging::init(path)
    {
        eprintln!("Failed to open log file {}: {}", path.display(), e);
        std::process::exit(1);
    }

    if let Err(e) = quiz_builder::run(config).await {
        log::error!("{}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
