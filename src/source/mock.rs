// Sun Oct 18 2026 - Alex

use crate::config::Config;
use crate::source::error::{FetchError, FetchResult};
use crate::source::latency::Latency;
use crate::source::traits::DataSource;
use rand::rngs::StdRng;
use rand::Rng;

pub const USER_SOURCE_NAME: &str = "User Service";
pub const PRODUCT_SOURCE_NAME: &str = "Product Service";
pub const ORDER_SOURCE_NAME: &str = "Order Service";

pub const PRODUCT_FAILURE_MESSAGE: &str = "failed to fetch product data";

#[derive(Debug, Clone, Default)]
pub struct UserSource {
    latency: Latency,
}

impl UserSource {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl DataSource for UserSource {
    fn name(&self) -> &str {
        USER_SOURCE_NAME
    }

    fn fetch(&self, rng: &mut StdRng) -> FetchResult<String> {
        self.latency.wait(rng);
        Ok("User data fetched successfully.".to_string())
    }
}

/// The only source that can fail; each fetch fails independently with
/// `failure_rate`.
#[derive(Debug, Clone)]
pub struct ProductSource {
    latency: Latency,
    failure_rate: f64,
}

impl ProductSource {
    pub fn new(latency: Latency, failure_rate: f64) -> Self {
        Self {
            latency,
            failure_rate: failure_rate.clamp(0.0, 1.0),
        }
    }

    pub fn failure_rate(&self) -> f64 {
        self.failure_rate
    }
}

impl Default for ProductSource {
    fn default() -> Self {
        Self::new(Latency::default(), 0.2)
    }
}

impl DataSource for ProductSource {
    fn name(&self) -> &str {
        PRODUCT_SOURCE_NAME
    }

    fn fetch(&self, rng: &mut StdRng) -> FetchResult<String> {
        self.latency.wait(rng);

        if rng.random_bool(self.failure_rate) {
            return Err(FetchError::failed(PRODUCT_FAILURE_MESSAGE));
        }

        Ok("Product data fetched successfully.".to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct OrderSource {
    latency: Latency,
}

impl OrderSource {
    pub fn new(latency: Latency) -> Self {
        Self { latency }
    }
}

impl DataSource for OrderSource {
    fn name(&self) -> &str {
        ORDER_SOURCE_NAME
    }

    fn fetch(&self, rng: &mut StdRng) -> FetchResult<String> {
        self.latency.wait(rng);
        Ok("Order data fetched successfully.".to_string())
    }
}

pub fn default_sources(config: &Config) -> Vec<Box<dyn DataSource>> {
    let latency = config.latency();

    vec![
        Box::new(UserSource::new(latency)),
        Box::new(ProductSource::new(latency, config.product_failure_rate)),
        Box::new(OrderSource::new(latency)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn instant() -> Latency {
        Latency::fixed_ms(0)
    }

    #[test]
    fn test_user_and_order_always_succeed() {
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..20 {
            assert_eq!(
                UserSource::new(instant()).fetch(&mut rng).unwrap(),
                "User data fetched successfully."
            );
            assert_eq!(
                OrderSource::new(instant()).fetch(&mut rng).unwrap(),
                "Order data fetched successfully."
            );
        }
    }

    #[test]
    fn test_product_forced_failure() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = ProductSource::new(instant(), 1.0);

        let err = source.fetch(&mut rng).unwrap_err();
        assert_eq!(err, FetchError::failed(PRODUCT_FAILURE_MESSAGE));
        assert_eq!(err.to_string(), "failed to fetch product data");
    }

    #[test]
    fn test_product_never_fails_at_zero_rate() {
        let mut rng = StdRng::seed_from_u64(3);
        let source = ProductSource::new(instant(), 0.0);

        for _ in 0..50 {
            assert!(source.fetch(&mut rng).is_ok());
        }
    }

    #[test]
    fn test_product_failure_rate_is_clamped() {
        assert_eq!(ProductSource::new(instant(), 4.0).failure_rate(), 1.0);
        assert_eq!(ProductSource::new(instant(), -1.0).failure_rate(), 0.0);
    }

    #[test]
    fn test_product_fails_roughly_one_in_five() {
        let mut rng = StdRng::seed_from_u64(2026);
        let source = ProductSource::new(instant(), 0.2);

        let failures = (0..2000)
            .filter(|_| source.fetch(&mut rng).is_err())
            .count();

        assert!(failures > 300 && failures < 500, "failures = {}", failures);
    }

    #[test]
    fn test_default_sources_names() {
        let sources = default_sources(&Config::default());
        let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();

        assert_eq!(names, vec![USER_SOURCE_NAME, PRODUCT_SOURCE_NAME, ORDER_SOURCE_NAME]);
    }
}
