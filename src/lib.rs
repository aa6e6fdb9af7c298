// Sun Oct 18 2026 - Alex

pub mod config;
pub mod orchestration;
pub mod source;
pub mod ui;

pub use config::Config;
pub use orchestration::{Aggregator, Conduit, Dispatcher, Outcome, Report};
pub use source::{DataSource, FetchError};
