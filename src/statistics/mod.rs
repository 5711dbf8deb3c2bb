use std::sync::atomic::{AtomicU64, Ordering};

/// Merge-engine statistics
///
/// Lock-free counters for everything a merge does: merges constructed,
/// records emitted, pulls issued against sources, sources drained, and hard
/// failures observed. A handle can be private to one merge or shared across
/// many (see `MergingIterator::with_statistics`).
#[derive(Debug, Default)]
pub struct Statistics {
    pub num_merges: AtomicU64,
    pub num_streams_merged: AtomicU64,
    pub num_records_emitted: AtomicU64,
    pub num_source_pulls: AtomicU64,
    pub num_streams_exhausted: AtomicU64,
    pub num_failures: AtomicU64,
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    #[inline]
    pub fn record_merge_started(&self, streams: u64) {
        self.num_merges.fetch_add(1, Ordering::Relaxed);
        self.num_streams_merged.fetch_add(streams, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_emitted(&self) {
        self.num_records_emitted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_source_pull(&self) {
        self.num_source_pulls.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_stream_exhausted(&self) {
        self.num_streams_exhausted.fetch_add(1, Ordering::Relaxed);
    }

    #[inline]
    pub fn record_failure(&self) {
        self.num_failures.fetch_add(1, Ordering::Relaxed);
    }

    // Getters (snapshot values)
    pub fn num_merges(&self) -> u64 {
        self.num_merges.load(Ordering::Relaxed)
    }

    pub fn num_streams_merged(&self) -> u64 {
        self.num_streams_merged.load(Ordering::Relaxed)
    }

    pub fn num_records_emitted(&self) -> u64 {
        self.num_records_emitted.load(Ordering::Relaxed)
    }

    pub fn num_source_pulls(&self) -> u64 {
        self.num_source_pulls.load(Ordering::Relaxed)
    }

    pub fn num_streams_exhausted(&self) -> u64 {
        self.num_streams_exhausted.load(Ordering::Relaxed)
    }

    pub fn num_failures(&self) -> u64 {
        self.num_failures.load(Ordering::Relaxed)
    }

    /// Source pulls per emitted record. Converges toward 1.0 for long
    /// streams; priming and drain pulls dominate for short ones.
    pub fn pulls_per_record(&self) -> f64 {
        let pulls = self.num_source_pulls() as f64;
        let emitted = self.num_records_emitted() as f64;
        if emitted > 0.0 { pulls / emitted } else { 0.0 }
    }

    /// Reset all statistics to zero
    pub fn reset(&self) {
        self.num_merges.store(0, Ordering::Relaxed);
        self.num_streams_merged.store(0, Ordering::Relaxed);
        self.num_records_emitted.store(0, Ordering::Relaxed);
        self.num_source_pulls.store(0, Ordering::Relaxed);
        self.num_streams_exhausted.store(0, Ordering::Relaxed);
        self.num_failures.store(0, Ordering::Relaxed);
    }

    /// Get a formatted statistics report
    pub fn report(&self) -> String {
        format!(
            "Merge Statistics:\n\
            - Merges:            {}\n\
            - Streams merged:    {}\n\
            - Records emitted:   {}\n\
            - Source pulls:      {}\n\
            - Streams exhausted: {}\n\
            - Pulls per record:  {:.3}\n\
            - Failures:          {}",
            self.num_merges(),
            self.num_streams_merged(),
            self.num_records_emitted(),
            self.num_source_pulls(),
            self.num_streams_exhausted(),
            self.pulls_per_record(),
            self.num_failures(),
        )
    }
}
