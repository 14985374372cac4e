use std::sync::{Arc, Mutex};

use formkit_dom::{NodeHandle, NodeRef, RefSink, Tag, merge_refs};

type Log = Arc<Mutex<Vec<(usize, Option<NodeHandle>)>>>;

fn recording(log: &Log, index: usize) -> RefSink {
    let log = Arc::clone(log);
    RefSink::callback(move |node| log.lock().unwrap().push((index, node.copied())))
}

#[test]
fn test_create_then_destroy_reaches_every_sink() {
    for count in [1usize, 2, 5] {
        let log: Log = Arc::default();
        let sink = merge_refs((0..count).map(|i| Some(recording(&log, i))));
        let node = NodeHandle::new(Tag::Div);

        sink.deliver(Some(&node));
        sink.deliver(None);

        let log = log.lock().unwrap();
        for i in 0..count {
            let seen: Vec<_> = log.iter().filter(|(j, _)| *j == i).map(|(_, n)| *n).collect();
            assert_eq!(seen, vec![Some(node), None], "sink {i} of {count}");
        }
    }
}

#[test]
fn test_delivery_follows_supplied_order() {
    let log: Log = Arc::default();
    let sink = merge_refs([Some(recording(&log, 0)), None, Some(recording(&log, 2))]);
    let node = NodeHandle::new(Tag::Span);

    sink.deliver(Some(&node));

    assert_eq!(*log.lock().unwrap(), vec![(0, Some(node)), (2, Some(node))]);
}

#[test]
fn test_panicking_sink_does_not_block_others() {
    let log: Log = Arc::default();
    let calls = Arc::new(Mutex::new(0usize));
    let failing = {
        let calls = Arc::clone(&calls);
        RefSink::callback(move |_| {
            *calls.lock().unwrap() += 1;
            panic!("sink failure");
        })
    };
    let sink = merge_refs([Some(recording(&log, 0)), Some(failing), Some(recording(&log, 2))]);
    let node = NodeHandle::new(Tag::Button);

    sink.deliver(Some(&node));
    sink.deliver(None);

    assert_eq!(*calls.lock().unwrap(), 2);
    assert_eq!(
        *log.lock().unwrap(),
        vec![(0, Some(node)), (2, Some(node)), (0, None), (2, None)]
    );
}

#[test]
fn test_cells_and_callbacks_mix() {
    let cell = NodeRef::new();
    let log: Log = Arc::default();
    let sink = merge_refs([Some(RefSink::cell(&cell)), Some(recording(&log, 1))]);
    let first = NodeHandle::new(Tag::Div);
    let second = NodeHandle::new(Tag::Div);

    sink.deliver(Some(&first));
    assert_eq!(cell.get(), Some(first));

    sink.deliver(Some(&second));
    assert_eq!(cell.get(), Some(second));
    assert_eq!(log.lock().unwrap().len(), 2);
}

#[test]
fn test_nested_merges_flatten_delivery() {
    let inner_cell = NodeRef::new();
    let outer_cell = NodeRef::new();
    let inner = merge_refs([Some(RefSink::cell(&inner_cell))]);
    let sink = merge_refs([Some(inner), Some(RefSink::cell(&outer_cell))]);
    let node = NodeHandle::new(Tag::Ul);

    sink.deliver(Some(&node));

    assert_eq!(inner_cell.get(), Some(node));
    assert_eq!(outer_cell.get(), Some(node));
}
