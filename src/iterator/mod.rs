/// Iterator module for sortmerge
///
/// Provides the pull-based record stream contract and the iterators built on
/// top of it:
/// - In-memory and closure-backed sources (test fixtures and adapters)
/// - Newline-delimited JSON sources (decoding records from readers)
/// - The merging iterator combining many sorted sources into one
///
/// # Architecture
///
/// ```text
/// MergingIterator
///     ├─→ VecIterator (pre-sorted in-memory records)
///     ├─→ FnIterator (closure-backed producer)
///     ├─→ JsonRecordIterator (records decoded from a reader)
///     └─→ MergingIterator (merges compose)
/// ```
///
/// ## Key Design Principles
///
/// 1. **Pull-based**: a source does no work until asked for its next record
/// 2. **Tagged termination**: `Ok(None)` is exhaustion, `Err` is a failure;
///    the two can never be confused
/// 3. **One buffered record per source**: peak memory is proportional to the
///    number of streams, never to the number of records
use crate::util::Result;

/// Pull-based producer of records in a fixed order.
///
/// Each call to `next_record` returns:
/// - `Ok(Some(record))` — the next record. For sources feeding a merge, the
///   record must sort at or after every record this source returned earlier;
///   per-source sortedness is assumed, not validated.
/// - `Ok(None)` — the source is exhausted. No further calls are expected to
///   succeed, and the merge engine never makes one.
/// - `Err(status)` — the source is broken. No assumption can be made about
///   remaining data; the engine never retries.
///
/// Side effects (I/O, decoding) are the implementation's concern; consumers
/// treat the source as an opaque effectful producer.
pub trait RecordIterator {
    type Record;

    fn next_record(&mut self) -> Result<Option<Self::Record>>;
}

impl<I: RecordIterator + ?Sized> RecordIterator for Box<I> {
    type Record = I::Record;

    fn next_record(&mut self) -> Result<Option<Self::Record>> {
        (**self).next_record()
    }
}

impl<I: RecordIterator + ?Sized> RecordIterator for &mut I {
    type Record = I::Record;

    fn next_record(&mut self) -> Result<Option<Self::Record>> {
        (**self).next_record()
    }
}

/// Bridge from a `RecordIterator` to `std::iter::Iterator`.
///
/// Yields `Result<Record>` items and fuses after the first exhaustion or
/// failure, so a broken source cannot be polled again through the bridge.
pub struct Records<I> {
    inner: Option<I>,
}

impl<I: RecordIterator> Iterator for Records<I> {
    type Item = Result<I::Record>;

    fn next(&mut self) -> Option<Self::Item> {
        let iter = self.inner.as_mut()?;
        match iter.next_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.inner = None;
                None
            },
            Err(e) => {
                self.inner = None;
                Some(Err(e))
            },
        }
    }
}

/// Convenience adapters available on every `RecordIterator`.
pub trait RecordIteratorExt: RecordIterator + Sized {
    /// Adapt into a `std::iter::Iterator` of `Result<Record>`.
    fn records(self) -> Records<Self> {
        Records { inner: Some(self) }
    }

    /// Drain the source to exhaustion, or stop at the first failure.
    fn collect_all(self) -> Result<Vec<Self::Record>> {
        self.records().collect()
    }
}

impl<I: RecordIterator + Sized> RecordIteratorExt for I {}

mod fn_iterator;
mod json_iterator;
mod merging_iterator;
mod vec_iterator;

pub use fn_iterator::{FnIterator, from_fn};
pub use json_iterator::JsonRecordIterator;
pub use merging_iterator::MergingIterator;
pub use vec_iterator::VecIterator;
