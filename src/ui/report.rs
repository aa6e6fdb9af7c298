// Sun Oct 18 2026 - Alex

use crate::orchestration::aggregator::Report;
use crate::orchestration::outcome::Outcome;
use colored::*;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marker {
    Info,
    Success,
    Failure,
}

impl Marker {
    fn text(&self) -> &'static str {
        match self {
            Marker::Info => "[*]",
            Marker::Success => "[+]",
            Marker::Failure => "[!]",
        }
    }
}

/// Renders the console lines for a dispatch. Every method returns the line
/// instead of printing it, the handler decides where it goes.
pub struct ReportPrinter {
    use_color: bool,
}

impl ReportPrinter {
    pub fn new() -> Self {
        Self { use_color: true }
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    fn marker(&self, marker: Marker) -> String {
        if !self.use_color {
            return marker.text().to_string();
        }

        match marker {
            Marker::Info => marker.text().blue().to_string(),
            Marker::Success => marker.text().green().to_string(),
            Marker::Failure => marker.text().red().to_string(),
        }
    }

    pub fn start_line(&self, source_count: usize) -> String {
        format!("{} Fetching from {} sources...", self.marker(Marker::Info), source_count)
    }

    pub fn completion_line(&self, elapsed: Duration) -> String {
        format!(
            "{} All sources completed in {}ms",
            self.marker(Marker::Info),
            elapsed.as_millis()
        )
    }

    pub fn outcome_line(&self, outcome: &Outcome) -> String {
        match outcome.error() {
            None => format!(
                "{} {}: {}",
                self.marker(Marker::Success),
                outcome.source(),
                outcome.payload()
            ),
            Some(e) => format!("{} {}: {}", self.marker(Marker::Failure), outcome.source(), e),
        }
    }

    pub fn end_line(&self, report: &Report) -> String {
        format!(
            "{} Done: {} succeeded, {} failed",
            self.marker(Marker::Info),
            report.success_count(),
            report.failure_count()
        )
    }

    /// Outcome lines in arrival order followed by the end marker.
    pub fn render(&self, report: &Report) -> Vec<String> {
        report
            .outcomes()
            .iter()
            .map(|o| self.outcome_line(o))
            .chain(std::iter::once(self.end_line(report)))
            .collect()
    }

    pub fn render_json(&self, report: &Report) -> serde_json::Result<String> {
        serde_json::to_string_pretty(report)
    }
}

impl Default for ReportPrinter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::error::FetchError;

    fn sample_report() -> Report {
        Report::new(vec![
            Outcome::success("User Service", "User data fetched successfully."),
            Outcome::failure(
                "Product Service",
                FetchError::failed("failed to fetch product data"),
            ),
        ])
    }

    #[test]
    fn test_plain_lines() {
        let printer = ReportPrinter::new().with_color(false);

        assert_eq!(printer.start_line(3), "[*] Fetching from 3 sources...");
        assert_eq!(
            printer.completion_line(Duration::from_millis(742)),
            "[*] All sources completed in 742ms"
        );
        assert_eq!(
            printer.render(&sample_report()),
            vec![
                "[+] User Service: User data fetched successfully.".to_string(),
                "[!] Product Service: failed to fetch product data".to_string(),
                "[*] Done: 1 succeeded, 1 failed".to_string(),
            ]
        );
    }

    #[test]
    fn test_empty_report_still_has_end_marker() {
        let printer = ReportPrinter::new().with_color(false);
        assert_eq!(
            printer.render(&Report::default()),
            vec!["[*] Done: 0 succeeded, 0 failed".to_string()]
        );
    }

    #[test]
    fn test_json_output() {
        let json = ReportPrinter::new().render_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["outcomes"][1]["source"], "Product Service");
        assert_eq!(
            value["outcomes"][1]["error"]["FetchFailed"],
            "failed to fetch product data"
        );
    }
}
