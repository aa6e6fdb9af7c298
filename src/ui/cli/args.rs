// Sun Oct 18 2026 - Alex

use crate::config::Config;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "fanout-fetch")]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Fetch from every data source concurrently and report the results", long_about = None)]
pub struct Args {
    #[arg(short, long, default_value = "warn")]
    pub log_level: String,

    /// Seed for reproducible delays and failures
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(long, default_value = "0.2")]
    pub failure_rate: f64,

    #[arg(long, default_value = "500")]
    pub min_delay_ms: u64,

    #[arg(long, default_value = "1000")]
    pub max_delay_ms: u64,

    #[arg(long)]
    pub json: bool,

    #[arg(long)]
    pub no_color: bool,
}

impl Args {
    pub fn to_config(&self) -> Config {
        let mut config = Config::new()
            .with_delay_range(self.min_delay_ms, self.max_delay_ms)
            .with_failure_rate(self.failure_rate)
            .with_json_output(self.json)
            .with_color(!self.no_color);

        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }

        config
    }
}
