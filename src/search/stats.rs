use tracing::{Level, enabled, trace};

/// Counts recorded by a search.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SearchStats {
    /// The number of times the comparison function was called.
    pub comparisons: usize,
    /// The number of elements in the searched range.
    pub range_size: usize,
}

/// Records the outcome of a search into `stats` (if present) and emits a trace event. Measuring
/// the range can mean walking a list, so `range_size` is only called if someone is listening.
pub(crate) fn finish<R>(
    algorithm: &'static str,
    stats: Option<&mut SearchStats>,
    comparisons: usize,
    range_size: R,
) where
    R: FnOnce() -> usize,
{
    if stats.is_none() && !enabled!(Level::TRACE) {
        return;
    }
    let range_size = range_size();
    trace!(algorithm, comparisons, range_size, "search finished");
    if let Some(stats) = stats {
        *stats = SearchStats {
            comparisons,
            range_size,
        };
    }
}
