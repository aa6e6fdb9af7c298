// Sun Oct 18 2026 - Alex

use super::args::Args;
use crate::config::Config;
use crate::orchestration::{Aggregator, Dispatcher, Report};
use crate::source::default_sources;
use crate::ui::report::ReportPrinter;
use std::time::Instant;

pub struct CommandHandler;

impl CommandHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn execute(&self, args: Args) -> anyhow::Result<()> {
        self.setup_logging(&args)?;

        let config = args.to_config();
        config.validate().map_err(|e| anyhow::anyhow!(e))?;

        self.fetch_all(&config)?;
        Ok(())
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Warn,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()?;

        Ok(())
    }

    /// One full fetch cycle. Fetch failures end up in the report, only
    /// infrastructure errors are returned.
    pub fn fetch_all(&self, config: &Config) -> anyhow::Result<Report> {
        let printer = ReportPrinter::new().with_color(config.use_color);
        let sources = default_sources(config);
        let count = sources.len();
        let mut dispatcher = Dispatcher::from_config(config);

        if !config.json_output {
            println!("{}", printer.start_line(count));
        }

        let started = Instant::now();
        let mut conduit = dispatcher.dispatch(sources)?;
        let elapsed = started.elapsed();

        if !config.json_output {
            println!("{}", printer.completion_line(elapsed));
        }

        let report = Aggregator::new()
            .with_expected(count)
            .drain(&mut conduit)?
            .with_elapsed(elapsed);

        if config.json_output {
            println!("{}", printer.render_json(&report)?);
        } else {
            for line in printer.render(&report) {
                println!("{}", line);
            }
        }

        log::info!(
            "Fetched {} sources: {} succeeded, {} failed",
            report.len(),
            report.success_count(),
            report.failure_count()
        );

        Ok(report)
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fetch_all_reports_every_source() {
        let config = Config::new()
            .with_delay_range(1, 20)
            .with_failure_rate(1.0)
            .with_seed(8)
            .with_color(false);

        let report = CommandHandler::new().fetch_all(&config).unwrap();

        assert_eq!(report.len(), 3);
        assert_eq!(report.failure_count(), 1);
        assert!(report.find("Product Service").unwrap().is_failure());
    }
}
