//! Reference sinks and fan-out.
//!
//! A reference sink observes the node created for an element: it receives
//! `Some(handle)` when the node is created or replaced and `None` when it is
//! destroyed. [`merge_refs`] combines several sinks into one so that more
//! than one consumer can observe the same node.
//!
//! ```ignore
//! let anchor = NodeRef::new();
//! let sink = merge_refs([forwarded, Some(RefSink::cell(&anchor))]);
//! let elem = Element::new(Tag::Button).with_ref(sink);
//! ```

use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::{Arc, RwLock};

use log::warn;

use crate::node::NodeHandle;

/// A shared mutable cell holding the current node, if any.
///
/// Cloning is cheap; clones observe the same cell.
#[derive(Debug, Clone, Default)]
pub struct NodeRef {
    inner: Arc<RwLock<Option<NodeHandle>>>,
}

impl NodeRef {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current node, `None` if unmounted.
    pub fn get(&self) -> Option<NodeHandle> {
        self.inner
            .read()
            .map(|guard| *guard)
            .unwrap_or_else(|poisoned| *poisoned.into_inner())
    }

    pub fn set(&self, node: Option<NodeHandle>) {
        match self.inner.write() {
            Ok(mut guard) => *guard = node,
            Err(poisoned) => *poisoned.into_inner() = node,
        }
    }

    pub fn is_mounted(&self) -> bool {
        self.get().is_some()
    }
}

type RefCallback = Arc<dyn Fn(Option<&NodeHandle>) + Send + Sync>;

/// Something that observes a node: either a cell to assign or a callback.
#[derive(Clone)]
pub enum RefSink {
    Cell(NodeRef),
    Callback(RefCallback),
}

impl RefSink {
    pub fn cell(cell: &NodeRef) -> Self {
        Self::Cell(cell.clone())
    }

    pub fn callback(f: impl Fn(Option<&NodeHandle>) + Send + Sync + 'static) -> Self {
        Self::Callback(Arc::new(f))
    }

    /// Deliver the current node to this sink.
    ///
    /// A panicking callback is contained here and logged; it never unwinds
    /// into the caller.
    pub fn deliver(&self, node: Option<&NodeHandle>) {
        match self {
            Self::Cell(cell) => cell.set(node.copied()),
            Self::Callback(f) => {
                if let Err(panic) = catch_unwind(AssertUnwindSafe(|| f(node))) {
                    warn!(
                        "reference sink panicked while receiving {}: {}",
                        node.map_or_else(|| "null".to_string(), ToString::to_string),
                        panic_message(panic.as_ref()),
                    );
                }
            }
        }
    }
}

impl fmt::Debug for RefSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Cell(cell) => f.debug_tuple("Cell").field(cell).finish(),
            Self::Callback(_) => f.write_str("Callback(..)"),
        }
    }
}

impl From<NodeRef> for RefSink {
    fn from(cell: NodeRef) -> Self {
        Self::Cell(cell)
    }
}

impl From<&NodeRef> for RefSink {
    fn from(cell: &NodeRef) -> Self {
        Self::Cell(cell.clone())
    }
}

/// Combine sinks into one.
///
/// Absent sinks are skipped. Every present sink receives each delivery in
/// the order given, synchronously, and a panic in one sink does not stop
/// delivery to the rest.
pub fn merge_refs<I>(sinks: I) -> RefSink
where
    I: IntoIterator<Item = Option<RefSink>>,
{
    let sinks: Vec<RefSink> = sinks.into_iter().flatten().collect();
    RefSink::callback(move |node| {
        for sink in &sinks {
            sink.deliver(node);
        }
    })
}

fn panic_message(panic: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}
