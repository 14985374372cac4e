//! Node identity.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_ID: AtomicU64 = AtomicU64::new(0);

/// The kind of node an element renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Div,
    Span,
    Button,
    /// Navigational link.
    A,
    Hr,
    Input,
    Label,
    Ul,
    Li,
}

impl Tag {
    pub fn name(self) -> &'static str {
        match self {
            Self::Div => "div",
            Self::Span => "span",
            Self::Button => "button",
            Self::A => "a",
            Self::Hr => "hr",
            Self::Input => "input",
            Self::Label => "label",
            Self::Ul => "ul",
            Self::Li => "li",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unique identifier for a created node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u64);

impl NodeId {
    pub(crate) fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

/// Handle to a node created by the host.
///
/// Handles are what reference sinks observe. They are plain values: holding
/// one does not keep the node alive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeHandle {
    id: NodeId,
    tag: Tag,
}

impl NodeHandle {
    /// Allocate a fresh handle. Called by the host when it creates a node.
    pub fn new(tag: Tag) -> Self {
        Self {
            id: NodeId::next(),
            tag,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{}#{}>", self.tag, self.id)
    }
}
