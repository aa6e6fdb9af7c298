// Sun Oct 18 2026 - Alex

use crate::source::latency::Latency;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub min_delay_ms: u64,
    pub max_delay_ms: u64,
    pub product_failure_rate: f64,
    pub seed: Option<u64>,
    pub json_output: bool,
    pub use_color: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            min_delay_ms: 500,
            max_delay_ms: 1000,
            product_failure_rate: 0.2,
            seed: None,
            json_output: false,
            use_color: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delay_range(mut self, min_ms: u64, max_ms: u64) -> Self {
        self.min_delay_ms = min_ms;
        self.max_delay_ms = max_ms;
        self
    }

    pub fn with_failure_rate(mut self, rate: f64) -> Self {
        self.product_failure_rate = rate;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json_output = json;
        self
    }

    pub fn with_color(mut self, use_color: bool) -> Self {
        self.use_color = use_color;
        self
    }

    pub fn latency(&self) -> Latency {
        Latency::range_ms(self.min_delay_ms, self.max_delay_ms)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.min_delay_ms > self.max_delay_ms {
            return Err(format!(
                "min_delay_ms ({}) must not exceed max_delay_ms ({})",
                self.min_delay_ms, self.max_delay_ms
            ));
        }
        if !(0.0..=1.0).contains(&self.product_failure_rate) {
            return Err("product_failure_rate must be between 0.0 and 1.0".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.latency(), Latency::range_ms(500, 1000));
    }

    #[test]
    fn test_rejects_inverted_delay_range() {
        let config = Config::new().with_delay_range(900, 100);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_out_of_range_failure_rate() {
        assert!(Config::new().with_failure_rate(1.5).validate().is_err());
        assert!(Config::new().with_failure_rate(-0.1).validate().is_err());
        assert!(Config::new().with_failure_rate(1.0).validate().is_ok());
    }
}
