use crate::{iterator::RecordIterator, util::Result};

/// Record source draining a pre-sorted in-memory vector.
///
/// The vector must already be sorted under the ordering the consuming merge
/// uses; this is assumed, not validated. Mainly useful as a test fixture and
/// for merging small already-materialized batches into larger streams.
pub struct VecIterator<T> {
    records: std::vec::IntoIter<T>,
}

impl<T> VecIterator<T> {
    pub fn new(records: Vec<T>) -> Self {
        VecIterator {
            records: records.into_iter(),
        }
    }
}

impl<T> RecordIterator for VecIterator<T> {
    type Record = T;

    fn next_record(&mut self) -> Result<Option<T>> {
        Ok(self.records.next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vec_iterator_drains_in_order() {
        let mut iter = VecIterator::new(vec![1, 2, 3]);
        assert_eq!(iter.next_record().unwrap(), Some(1));
        assert_eq!(iter.next_record().unwrap(), Some(2));
        assert_eq!(iter.next_record().unwrap(), Some(3));
        assert_eq!(iter.next_record().unwrap(), None);
    }

    #[test]
    fn test_vec_iterator_empty() {
        let mut iter = VecIterator::<i64>::new(vec![]);
        assert_eq!(iter.next_record().unwrap(), None);
        assert_eq!(iter.next_record().unwrap(), None);
    }
}
