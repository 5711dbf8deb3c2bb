pub mod iterator;
pub mod record;
pub mod statistics;
pub mod util;

pub use iterator::{
    FnIterator, JsonRecordIterator, MergingIterator, RecordIterator, RecordIteratorExt, Records,
    VecIterator, from_fn,
};
pub use record::Orderable;
pub use statistics::Statistics;
pub use util::{Code, Result, Status};
