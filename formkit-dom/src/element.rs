//! Element descriptions.

use crate::bag::{AttrValue, AttributeBag};
use crate::node::Tag;
use crate::refs::RefSink;

/// A description of a node to be created by the host.
#[derive(Debug, Clone)]
pub struct Element {
    pub tag: Tag,
    pub attrs: AttributeBag,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: Tag) -> Self {
        Self {
            tag,
            attrs: AttributeBag::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn div() -> Self {
        Self::new(Tag::Div)
    }

    pub fn span(text: impl Into<String>) -> Self {
        Self::new(Tag::Span).text(text)
    }

    /// Replace the attribute bag.
    pub fn attrs(mut self, attrs: AttributeBag) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn attr(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.attrs.insert(key, value);
        self
    }

    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class.into())
    }

    pub fn with_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.attrs = self.attrs.with_ref(sink);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// The `class` attribute, if set.
    pub fn class_name(&self) -> Option<&str> {
        self.attrs.str("class")
    }

    /// Concatenated text of this element and its descendants, depth first.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        if let Some(text) = &self.text {
            out.push_str(text);
        }
        for child in &self.children {
            child.collect_text(out);
        }
    }

    /// Find the first element, depth first, matching `pred`.
    pub fn find(&self, pred: &dyn Fn(&Element) -> bool) -> Option<&Element> {
        if pred(self) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(pred))
    }

    /// Find an element by its `id` attribute.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        self.find(&|elem| elem.attrs.str("id") == Some(id))
    }
}
