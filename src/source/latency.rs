// Sun Oct 18 2026 - Alex

use rand::rngs::StdRng;
use rand::Rng;
use std::thread;
use std::time::Duration;

/// Simulated response time of a source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Latency {
    /// Uniform whole milliseconds in `[min, max)`.
    Range { min: Duration, max: Duration },
    Fixed(Duration),
}

impl Latency {
    pub fn range_ms(min_ms: u64, max_ms: u64) -> Self {
        Latency::Range {
            min: Duration::from_millis(min_ms),
            max: Duration::from_millis(max_ms),
        }
    }

    pub fn fixed_ms(ms: u64) -> Self {
        Latency::Fixed(Duration::from_millis(ms))
    }

    pub fn sample(&self, rng: &mut StdRng) -> Duration {
        match *self {
            Latency::Fixed(d) => d,
            Latency::Range { min, max } => {
                let min_ms = min.as_millis() as u64;
                let max_ms = max.as_millis() as u64;
                if max_ms <= min_ms {
                    return min;
                }
                Duration::from_millis(rng.random_range(min_ms..max_ms))
            }
        }
    }

    /// Sleeps the current thread for one sampled delay and returns it.
    pub fn wait(&self, rng: &mut StdRng) -> Duration {
        let delay = self.sample(rng);
        thread::sleep(delay);
        delay
    }
}

impl Default for Latency {
    fn default() -> Self {
        Latency::range_ms(500, 1000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_range_sample_stays_in_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        let latency = Latency::range_ms(500, 1000);

        for _ in 0..200 {
            let d = latency.sample(&mut rng);
            assert!(d >= Duration::from_millis(500));
            assert!(d < Duration::from_millis(1000));
        }
    }

    #[test]
    fn test_fixed_sample() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(Latency::fixed_ms(250).sample(&mut rng), Duration::from_millis(250));
    }

    #[test]
    fn test_empty_range_falls_back_to_min() {
        let mut rng = StdRng::seed_from_u64(1);
        let latency = Latency::range_ms(300, 300);
        assert_eq!(latency.sample(&mut rng), Duration::from_millis(300));
    }
}
