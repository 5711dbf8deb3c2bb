use std::{cmp::Ordering, collections::BinaryHeap, sync::Arc};

use crate::{
    iterator::RecordIterator, record::Orderable, statistics::Statistics, util::Result,
};

/// Merging iterator for combining multiple sorted record sources
///
/// Uses a min-heap to merge any number of individually sorted sources into a
/// single non-decreasing stream, pulling lazily so that at most one record
/// per source is buffered at any time.
///
/// # Architecture
///
/// ```text
/// MergingIterator
///     ├─→ Min-heap of (record, source_index)
///     ├─→ Vec<Option<Box<dyn RecordIterator>>> (live source slots)
///     └─→ Arc<Statistics> (merge counters)
/// ```
///
/// Construction pulls exactly one record from every source (eager priming).
/// Each subsequent pull pops the heap minimum, refills from that record's
/// origin source, and emits the popped record. A source that reports
/// exhaustion is dropped from its slot, releasing whatever it owned.
///
/// # Ordering Rules
///
/// - Records are ordered by `Orderable::sorts_before`
/// - When two buffered records compare equal, the source with the lower
///   index wins; within one source, emission order always matches input
///   order because a source never has more than one buffered record
///
/// # Failure Rules
///
/// The merge is fail-fast. A failure while priming aborts construction; a
/// failure while refilling surfaces on that pull, and the record popped
/// alongside it is abandoned. Records emitted before the failure stand. The
/// engine never retries a source and makes no promise about pulls after a
/// failure.
///
/// # Complexity
///
/// O(log K) per emitted record for K live sources, O(K) construction,
/// and one buffered record per live source.
pub struct MergingIterator<T> {
    sources: Vec<Option<Box<dyn RecordIterator<Record = T>>>>,
    heap: BinaryHeap<HeapNode<T>>,
    statistics: Arc<Statistics>,
}

impl<T> std::fmt::Debug for MergingIterator<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MergingIterator")
            .field("sources", &self.sources.len())
            .field("buffered", &self.heap.len())
            .finish()
    }
}

/// Heap node pairing a buffered record with the index of its origin source.
struct HeapNode<T> {
    record: T,
    index: usize,
}

impl<T: Orderable> Ord for HeapNode<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed for min-heap behavior (BinaryHeap is a max-heap).
        // Equal records fall back to the origin index, lower index first.
        if self.record.sorts_before(&other.record) {
            Ordering::Greater
        } else if other.record.sorts_before(&self.record) {
            Ordering::Less
        } else {
            other.index.cmp(&self.index)
        }
    }
}

impl<T: Orderable> PartialOrd for HeapNode<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Orderable> Eq for HeapNode<T> {}

impl<T: Orderable> PartialEq for HeapNode<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T: Orderable> MergingIterator<T> {
    /// Create a merging iterator over the given sources.
    ///
    /// Eagerly pulls one record from every source, in input order. Sources
    /// that are already exhausted are dropped silently; the first hard
    /// failure aborts construction and is returned to the caller. An empty
    /// source list is legal and yields an immediately exhausted iterator.
    pub fn new(sources: Vec<Box<dyn RecordIterator<Record = T>>>) -> Result<Self> {
        Self::with_statistics(sources, Arc::new(Statistics::new()))
    }

    /// Like [`MergingIterator::new`], but counts into a shared
    /// [`Statistics`] handle instead of a private one.
    pub fn with_statistics(
        sources: Vec<Box<dyn RecordIterator<Record = T>>>,
        statistics: Arc<Statistics>,
    ) -> Result<Self> {
        statistics.record_merge_started(sources.len() as u64);

        let mut heap = BinaryHeap::with_capacity(sources.len());
        let mut slots = Vec::with_capacity(sources.len());

        for (index, mut source) in sources.into_iter().enumerate() {
            statistics.record_source_pull();
            match source.next_record() {
                Ok(Some(record)) => {
                    heap.push(HeapNode { record, index });
                    slots.push(Some(source));
                },
                Ok(None) => {
                    statistics.record_stream_exhausted();
                    slots.push(None);
                },
                Err(e) => {
                    statistics.record_failure();
                    return Err(e);
                },
            }
        }

        Ok(MergingIterator {
            sources: slots,
            heap,
            statistics,
        })
    }

    /// Counters accumulated by this merge (shared if constructed with
    /// [`MergingIterator::with_statistics`]).
    pub fn statistics(&self) -> &Arc<Statistics> {
        &self.statistics
    }

    /// Number of sources that still have a buffered record.
    pub fn live_streams(&self) -> usize {
        self.heap.len()
    }

    /// Whether every source has been drained. Once true, stays true.
    pub fn is_exhausted(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T: Orderable> RecordIterator for MergingIterator<T> {
    type Record = T;

    fn next_record(&mut self) -> Result<Option<T>> {
        // Empty heap means every source drained; this state is terminal.
        let Some(node) = self.heap.pop() else {
            return Ok(None);
        };

        // Refill from the origin of the record about to be emitted, so the
        // heap again holds one candidate per live source.
        if let Some(source) = self.sources[node.index].as_mut() {
            self.statistics.record_source_pull();
            match source.next_record() {
                Ok(Some(record)) => {
                    self.heap.push(HeapNode {
                        record,
                        index: node.index,
                    });
                },
                Ok(None) => {
                    self.sources[node.index] = None;
                    self.statistics.record_stream_exhausted();
                },
                Err(e) => {
                    self.statistics.record_failure();
                    return Err(e);
                },
            }
        }

        self.statistics.record_emitted();
        Ok(Some(node.record))
    }
}
