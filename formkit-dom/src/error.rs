//! Host error types.

use thiserror::Error;

use crate::node::NodeId;

/// Errors reported by the [`Document`](crate::Document) host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomError {
    /// The node is not mounted in this document.
    #[error("Node {0} is not mounted")]
    UnknownNode(NodeId),

    /// The node has no handler for the fired event.
    #[error("Node {node} has no '{key}' handler")]
    NoHandler {
        /// Target node.
        node: NodeId,
        /// Handler attribute that was looked up.
        key: &'static str,
    },
}
