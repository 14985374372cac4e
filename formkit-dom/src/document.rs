//! In-memory host that creates and destroys nodes.
//!
//! The document is the minimum host the controls need: it turns element
//! descriptions into node handles, tells each element's reference sink
//! about its node, and routes events to handler attributes. It does no
//! layout and no drawing.

use std::collections::HashMap;

use log::debug;

use crate::bag::AttributeBag;
use crate::element::Element;
use crate::error::DomError;
use crate::node::{NodeHandle, NodeId};
use crate::value::Event;

#[derive(Debug)]
struct Mounted {
    handle: NodeHandle,
    attrs: AttributeBag,
    text: Option<String>,
    children: Vec<NodeId>,
}

/// A tree of created nodes.
#[derive(Debug, Default)]
pub struct Document {
    nodes: HashMap<NodeId, Mounted>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create nodes for `element` and its descendants.
    ///
    /// Children are created before their parent. Each element's reference
    /// sink receives its node before this call returns.
    pub fn mount(&mut self, element: &Element) -> NodeHandle {
        let children = element
            .children
            .iter()
            .map(|child| self.mount(child).id())
            .collect();

        let handle = NodeHandle::new(element.tag);
        debug!("mount {handle}");

        if let Some(sink) = element.attrs.node_ref() {
            sink.deliver(Some(&handle));
        }

        self.nodes.insert(
            handle.id(),
            Mounted {
                handle,
                attrs: element.attrs.clone(),
                text: element.text.clone(),
                children,
            },
        );
        handle
    }

    /// Destroy a node and its descendants.
    ///
    /// Each destroyed node's reference sink receives `None`, parents before
    /// children.
    pub fn unmount(&mut self, handle: NodeHandle) -> Result<(), DomError> {
        let mounted = self
            .nodes
            .remove(&handle.id())
            .ok_or(DomError::UnknownNode(handle.id()))?;
        debug!("unmount {handle}");

        if let Some(sink) = mounted.attrs.node_ref() {
            sink.deliver(None);
        }

        for child in mounted.children {
            if let Some(child) = self.nodes.get(&child).map(|m| m.handle) {
                self.unmount(child)?;
            }
        }
        Ok(())
    }

    /// Destroy `handle` and create `element` in its place.
    pub fn replace(&mut self, handle: NodeHandle, element: &Element) -> Result<NodeHandle, DomError> {
        self.unmount(handle)?;
        Ok(self.mount(element))
    }

    /// Deliver an event to the node's matching handler attribute.
    pub fn fire(&self, handle: NodeHandle, event: Event) -> Result<(), DomError> {
        let key = event.handler_key();
        let mounted = self
            .nodes
            .get(&handle.id())
            .ok_or(DomError::UnknownNode(handle.id()))?;
        let handler = mounted
            .attrs
            .handler(key)
            .cloned()
            .ok_or(DomError::NoHandler {
                node: handle.id(),
                key,
            })?;
        handler.call(&event);
        Ok(())
    }

    pub fn is_mounted(&self, handle: NodeHandle) -> bool {
        self.nodes.contains_key(&handle.id())
    }

    /// Attributes the node was created with.
    pub fn attrs(&self, handle: NodeHandle) -> Option<&AttributeBag> {
        self.nodes.get(&handle.id()).map(|m| &m.attrs)
    }

    pub fn text(&self, handle: NodeHandle) -> Option<&str> {
        self.nodes.get(&handle.id()).and_then(|m| m.text.as_deref())
    }

    /// Direct children of a node, in order.
    pub fn children(&self, handle: NodeHandle) -> Vec<NodeHandle> {
        self.nodes
            .get(&handle.id())
            .map(|m| {
                m.children
                    .iter()
                    .filter_map(|id| self.nodes.get(id).map(|c| c.handle))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// First node, depth first from `root`, whose attributes satisfy `pred`.
    pub fn find(&self, root: NodeHandle, pred: &dyn Fn(&AttributeBag) -> bool) -> Option<NodeHandle> {
        let mounted = self.nodes.get(&root.id())?;
        if pred(&mounted.attrs) {
            return Some(root);
        }
        self.children(root)
            .into_iter()
            .find_map(|child| self.find(child, pred))
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
