// Sun Oct 18 2026 - Alex

use crate::orchestration::error::{OrchestrationError, Result};
use crate::orchestration::outcome::Outcome;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::mpsc::{sync_channel, Receiver, SyncSender, TrySendError};
use std::sync::Arc;

/// Bounded many-producer, single-consumer queue of outcomes.
///
/// Capacity equals the number of sources, so a producer never blocks.
/// Arrival order is preserved on drain.
pub struct Conduit {
    sender: Option<SyncSender<Outcome>>,
    receiver: Receiver<Outcome>,
    capacity: usize,
    state: Arc<ConduitState>,
}

#[derive(Default)]
struct ConduitState {
    closed: AtomicBool,
    enqueued: AtomicUsize,
}

impl Conduit {
    pub fn with_capacity(capacity: usize) -> Self {
        let (sender, receiver) = sync_channel(capacity);

        Self {
            sender: Some(sender),
            receiver,
            capacity,
            state: Arc::new(ConduitState::default()),
        }
    }

    pub fn producer(&self) -> Result<Producer> {
        match &self.sender {
            Some(sender) if !self.is_closed() => Ok(Producer {
                sender: sender.clone(),
                state: self.state.clone(),
            }),
            _ => Err(OrchestrationError::ConduitClosed),
        }
    }

    /// Stops accepting outcomes. Only call once every producer is done.
    pub fn close(&mut self) {
        self.state.closed.store(true, Ordering::SeqCst);
        self.sender.take();
    }

    pub fn is_closed(&self) -> bool {
        self.state.closed.load(Ordering::SeqCst)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Total outcomes accepted so far, drained or not.
    pub fn enqueued(&self) -> usize {
        self.state.enqueued.load(Ordering::SeqCst)
    }

    /// Takes everything currently queued. The conduit is exhausted
    /// afterwards; draining again yields nothing new.
    pub fn drain(&mut self) -> Vec<Outcome> {
        self.receiver.try_iter().collect()
    }
}

/// Write handle for a single unit. `send` consumes it, so one producer
/// delivers at most one outcome.
pub struct Producer {
    sender: SyncSender<Outcome>,
    state: Arc<ConduitState>,
}

impl Producer {
    pub fn send(self, outcome: Outcome) -> Result<()> {
        if self.state.closed.load(Ordering::SeqCst) {
            return Err(OrchestrationError::ConduitClosed);
        }

        match self.sender.try_send(outcome) {
            Ok(()) => {
                self.state.enqueued.fetch_add(1, Ordering::SeqCst);
                Ok(())
            }
            Err(TrySendError::Full(_)) => Err(OrchestrationError::ConduitFull),
            Err(TrySendError::Disconnected(_)) => Err(OrchestrationError::Disconnected),
        }
    }
}
