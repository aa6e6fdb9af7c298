// Sun Oct 18 2026 - Alex

pub mod error;
pub mod latency;
pub mod mock;
pub mod traits;

pub use error::{FetchError, FetchResult};
pub use latency::Latency;
pub use mock::{default_sources, OrderSource, ProductSource, UserSource};
pub use traits::DataSource;
