#![no_main]

use libfuzzer_sys::fuzz_target;
use sortmerge::{MergingIterator, RecordIterator, RecordIteratorExt, VecIterator};

// Fuzz target for the merge engine.
// Carves arbitrary bytes into up to 16 streams, sorts each stream, and
// checks the two load-bearing merge invariants: output is non-decreasing
// and is exactly the multiset of the inputs.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let num_streams = (data[0] as usize % 16) + 1;
    let mut streams: Vec<Vec<u8>> = vec![Vec::new(); num_streams];
    for (i, &byte) in data[1..].iter().enumerate() {
        streams[i % num_streams].push(byte);
    }
    for stream in &mut streams {
        stream.sort();
    }

    let mut expected: Vec<u8> = streams.iter().flatten().copied().collect();
    expected.sort();

    let sources: Vec<Box<dyn RecordIterator<Record = u8>>> = streams
        .into_iter()
        .map(|s| Box::new(VecIterator::new(s)) as Box<dyn RecordIterator<Record = u8>>)
        .collect();

    let mut merged = MergingIterator::new(sources).unwrap();
    let records = (&mut merged).collect_all().unwrap();

    assert_eq!(records, expected);
    assert!(merged.next_record().unwrap().is_none());
});
