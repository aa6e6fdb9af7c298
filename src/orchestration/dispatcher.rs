// Sun Oct 18 2026 - Alex

use crate::config::Config;
use crate::orchestration::aggregator::{Aggregator, Report};
use crate::orchestration::completion::CompletionSignal;
use crate::orchestration::conduit::Conduit;
use crate::orchestration::error::Result;
use crate::orchestration::outcome::Outcome;
use crate::source::error::FetchError;
use crate::source::traits::DataSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::thread;
use std::time::Instant;

/// Fans fetches out to one thread per source and waits for all of them.
///
/// Every unit gets its own generator, seeded from the dispatcher's master
/// generator in source order, so a fixed seed reproduces each unit's draws.
pub struct Dispatcher {
    rng: StdRng,
}

impl Dispatcher {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        match config.seed {
            Some(seed) => Self::with_seed(seed),
            None => Self::new(),
        }
    }

    /// Spawns every unit, blocks until all have finished, and returns the
    /// conduit already closed.
    pub fn dispatch(&mut self, sources: Vec<Box<dyn DataSource>>) -> Result<Conduit> {
        let count = sources.len();
        let mut conduit = Conduit::with_capacity(count);
        let signal = CompletionSignal::new();
        let guards = signal.register(count);
        let mut handles = Vec::with_capacity(count);
        let mut spawn_error = None;

        log::info!("Dispatching {} fetch units", count);

        for (index, (source, guard)) in sources.into_iter().zip(guards).enumerate() {
            let producer = conduit.producer()?;
            let rng = StdRng::seed_from_u64(self.rng.next_u64());

            let spawned = thread::Builder::new()
                .name(format!("fetch-{}", index))
                .spawn(move || {
                    // dropped last: the outcome is enqueued before the count drops
                    let _guard = guard;
                    let outcome = run_unit(&*source, rng);
                    let name = outcome.source().to_string();
                    if let Err(e) = producer.send(outcome) {
                        log::error!("Outcome from {} was lost: {}", name, e);
                    }
                });

            match spawned {
                Ok(handle) => handles.push(handle),
                Err(e) => {
                    log::error!("Failed to spawn fetch unit {}: {}", index, e);
                    spawn_error = Some(e);
                    break;
                }
            }
        }

        signal.wait();
        log::debug!("All {} fetch units finished", handles.len());

        for handle in handles {
            if handle.join().is_err() {
                log::warn!("Fetch unit panicked after reporting its outcome");
            }
        }

        conduit.close();

        match spawn_error {
            Some(e) => Err(e.into()),
            None => Ok(conduit),
        }
    }

    pub fn run(&mut self, sources: Vec<Box<dyn DataSource>>) -> Result<Report> {
        let expected = sources.len();
        let started = Instant::now();
        let mut conduit = self.dispatch(sources)?;
        let elapsed = started.elapsed();

        let report = Aggregator::new().with_expected(expected).drain(&mut conduit)?;
        Ok(report.with_elapsed(elapsed))
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

fn run_unit(source: &dyn DataSource, mut rng: StdRng) -> Outcome {
    let name = source.name().to_string();
    log::debug!("[START] fetching {}", name);

    let started = Instant::now();
    let result = panic::catch_unwind(AssertUnwindSafe(|| source.fetch(&mut rng)))
        .unwrap_or_else(|payload| {
            Err(FetchError::failed(format!(
                "source panicked: {}",
                panic_message(&*payload)
            )))
        });
    let elapsed = started.elapsed();

    match &result {
        Ok(_) => log::debug!("[DONE] {} in {}ms", name, elapsed.as_millis()),
        Err(e) => log::warn!("{} failed after {}ms: {}", name, elapsed.as_millis(), e),
    }

    Outcome::new(name, result, elapsed)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg.to_string()
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}
