use std::{io::BufRead, marker::PhantomData};

use serde::de::DeserializeOwned;

use crate::{iterator::RecordIterator, util::Result};

/// Record source decoding newline-delimited JSON from a reader.
///
/// Each non-blank line is one record. Callers are responsible for the lines
/// being in sort order when the source feeds a merge. Read failures surface
/// as `IOError`, undecodable lines as `Corruption`; either leaves the source
/// in a broken state the consumer should not pull past.
pub struct JsonRecordIterator<R, T> {
    reader: R,
    line: String,
    _record: PhantomData<fn() -> T>,
}

impl<R: BufRead, T> JsonRecordIterator<R, T> {
    pub fn new(reader: R) -> Self {
        JsonRecordIterator {
            reader,
            line: String::new(),
            _record: PhantomData,
        }
    }
}

impl<R: BufRead, T: DeserializeOwned> RecordIterator for JsonRecordIterator<R, T> {
    type Record = T;

    fn next_record(&mut self) -> Result<Option<T>> {
        loop {
            self.line.clear();
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }

            let line = self.line.trim();
            if line.is_empty() {
                continue;
            }

            return Ok(Some(serde_json::from_str(line)?));
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use serde::Deserialize;

    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Reading {
        ts: u64,
        value: f64,
    }

    #[test]
    fn test_json_iterator_decodes_lines() {
        let data = "{\"ts\":1,\"value\":0.5}\n{\"ts\":2,\"value\":1.5}\n";
        let mut iter = JsonRecordIterator::<_, Reading>::new(Cursor::new(data));

        assert_eq!(
            iter.next_record().unwrap(),
            Some(Reading { ts: 1, value: 0.5 })
        );
        assert_eq!(
            iter.next_record().unwrap(),
            Some(Reading { ts: 2, value: 1.5 })
        );
        assert_eq!(iter.next_record().unwrap(), None);
    }

    #[test]
    fn test_json_iterator_skips_blank_lines() {
        let data = "\n{\"ts\":1,\"value\":0.0}\n\n\n{\"ts\":2,\"value\":0.0}\n";
        let mut iter = JsonRecordIterator::<_, Reading>::new(Cursor::new(data));

        assert_eq!(iter.next_record().unwrap().unwrap().ts, 1);
        assert_eq!(iter.next_record().unwrap().unwrap().ts, 2);
        assert_eq!(iter.next_record().unwrap(), None);
    }

    #[test]
    fn test_json_iterator_reports_corruption() {
        let data = "{\"ts\":1,\"value\":0.0}\nnot json at all\n";
        let mut iter = JsonRecordIterator::<_, Reading>::new(Cursor::new(data));

        assert!(iter.next_record().unwrap().is_some());
        assert!(iter.next_record().unwrap_err().is_corruption());
    }

    #[test]
    fn test_json_iterator_empty_reader() {
        let mut iter = JsonRecordIterator::<_, Reading>::new(Cursor::new(""));
        assert_eq!(iter.next_record().unwrap(), None);
    }
}
