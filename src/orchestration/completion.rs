// Sun Oct 18 2026 - Alex

use parking_lot::{Condvar, Mutex};
use std::sync::Arc;

/// Counts outstanding fetch units. Each unit holds a `CompletionGuard`
/// and the count drops when the guard does, including on unwind.
#[derive(Clone, Default)]
pub struct CompletionSignal {
    inner: Arc<SignalInner>,
}

#[derive(Default)]
struct SignalInner {
    outstanding: Mutex<usize>,
    condvar: Condvar,
}

impl CompletionSignal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `count` units at once so the counter only reaches zero
    /// after every one of them has finished.
    pub fn register(&self, count: usize) -> Vec<CompletionGuard> {
        *self.inner.outstanding.lock() += count;

        (0..count)
            .map(|_| CompletionGuard {
                inner: self.inner.clone(),
            })
            .collect()
    }

    pub fn outstanding(&self) -> usize {
        *self.inner.outstanding.lock()
    }

    pub fn is_complete(&self) -> bool {
        self.outstanding() == 0
    }

    /// Blocks until every registered guard has been dropped.
    pub fn wait(&self) {
        let mut outstanding = self.inner.outstanding.lock();
        while *outstanding > 0 {
            self.inner.condvar.wait(&mut outstanding);
        }
    }
}

pub struct CompletionGuard {
    inner: Arc<SignalInner>,
}

impl Drop for CompletionGuard {
    fn drop(&mut self) {
        let mut outstanding = self.inner.outstanding.lock();
        *outstanding -= 1;
        if *outstanding == 0 {
            self.inner.condvar.notify_all();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::thread;
    use std::time::Duration;

    #[test]
    fn test_wait_without_units_returns_immediately() {
        let signal = CompletionSignal::new();
        signal.wait();
        assert!(signal.is_complete());
    }

    #[test]
    fn test_wait_blocks_until_all_guards_dropped() {
        let signal = CompletionSignal::new();
        let finished = Arc::new(AtomicUsize::new(0));
        let guards = signal.register(4);
        assert_eq!(signal.outstanding(), 4);

        let handles: Vec<_> = guards
            .into_iter()
            .enumerate()
            .map(|(i, guard)| {
                let finished = finished.clone();
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(10 * (i as u64 + 1)));
                    finished.fetch_add(1, Ordering::SeqCst);
                    drop(guard);
                })
            })
            .collect();

        signal.wait();
        assert_eq!(finished.load(Ordering::SeqCst), 4);
        assert!(signal.is_complete());

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_guard_released_on_panic() {
        let signal = CompletionSignal::new();
        let mut guards = signal.register(1);
        let guard = guards.pop().unwrap();

        let handle = thread::spawn(move || {
            let _guard = guard;
            panic!("unit blew up");
        });

        signal.wait();
        assert!(handle.join().is_err());
        assert_eq!(signal.outstanding(), 0);
    }
}
