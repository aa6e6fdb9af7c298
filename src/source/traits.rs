// Sun Oct 18 2026 - Alex

use crate::source::error::FetchResult;
use rand::rngs::StdRng;

/// A single independent place results can be fetched from.
///
/// `fetch` blocks the calling thread for as long as the source takes to
/// answer. The generator is owned by the caller so that no source ever
/// touches a process-wide random state.
pub trait DataSource: Send {
    fn name(&self) -> &str;

    fn fetch(&self, rng: &mut StdRng) -> FetchResult<String>;
}
