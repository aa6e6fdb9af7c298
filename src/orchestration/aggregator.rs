// Sun Oct 18 2026 - Alex

use crate::orchestration::conduit::Conduit;
use crate::orchestration::error::{OrchestrationError, Result};
use crate::orchestration::outcome::Outcome;
use serde::Serialize;
use std::time::Duration;

/// Single-threaded consumer of a closed conduit.
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    expected: Option<usize>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self { expected: None }
    }

    pub fn with_expected(mut self, count: usize) -> Self {
        self.expected = Some(count);
        self
    }

    /// Drains every outcome in arrival order. Relies on the dispatcher
    /// having closed the conduit after all producers finished.
    pub fn drain(&self, conduit: &mut Conduit) -> Result<Report> {
        if !conduit.is_closed() {
            return Err(OrchestrationError::NotFinalized);
        }

        let outcomes = conduit.drain();

        if let Some(expected) = self.expected {
            if outcomes.len() != expected {
                log::warn!(
                    "Drained {} outcomes, expected {}",
                    outcomes.len(),
                    expected
                );
            }
        }

        log::debug!("Drained {} outcomes from conduit", outcomes.len());
        Ok(Report::new(outcomes))
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    outcomes: Vec<Outcome>,
    elapsed_ms: u64,
}

impl Report {
    pub fn new(outcomes: Vec<Outcome>) -> Self {
        Self {
            outcomes,
            elapsed_ms: 0,
        }
    }

    pub fn with_elapsed(mut self, elapsed: Duration) -> Self {
        self.elapsed_ms = elapsed.as_millis() as u64;
        self
    }

    /// Outcomes in the order they arrived.
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn into_outcomes(self) -> Vec<Outcome> {
        self.outcomes
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn successes(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_success())
    }

    pub fn failures(&self) -> impl Iterator<Item = &Outcome> {
        self.outcomes.iter().filter(|o| o.is_failure())
    }

    pub fn success_count(&self) -> usize {
        self.successes().count()
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    pub fn find(&self, source: &str) -> Option<&Outcome> {
        self.outcomes.iter().find(|o| o.source() == source)
    }
}
