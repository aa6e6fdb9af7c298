// Sun Oct 18 2026 - Alex

pub mod aggregator;
pub mod completion;
pub mod conduit;
pub mod dispatcher;
pub mod error;
pub mod outcome;

pub use aggregator::{Aggregator, Report};
pub use completion::{CompletionGuard, CompletionSignal};
pub use conduit::{Conduit, Producer};
pub use dispatcher::Dispatcher;
pub use error::OrchestrationError;
pub use outcome::Outcome;
