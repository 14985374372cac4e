//! Layout containers.
//!
//! `Container` nests a `ContainerInner` inside a `ContainerOuter`; the
//! caller's reference and attributes land on the outer node.

use formkit_dom::{AttributeBag, Element, RefSink, classes, compose, extend};

fn wrapper(
    base: &str,
    class: Option<&str>,
    node_ref: Option<RefSink>,
    attrs: AttributeBag,
    inner_class: &str,
    children: Vec<Element>,
) -> Element {
    let own = AttributeBag::new().with("class", classes([Some(base), class]));
    let own = match node_ref {
        Some(sink) => own.with_ref(sink),
        None => own,
    };
    let attrs = extend(&own, attrs);
    Element::div()
        .attrs(compose([own, attrs]))
        .child(Element::div().class(inner_class).children(children))
}

macro_rules! container_builder {
    ($name:ident) => {
        impl $name {
            pub fn new() -> Self {
                Self::default()
            }

            /// Extra classes for the wrapper node.
            pub fn class(mut self, class: impl Into<String>) -> Self {
                self.class = Some(class.into());
                self
            }

            /// Pass-through attributes for the wrapper node. Classes are
            /// appended; other keys override.
            pub fn attrs(mut self, attrs: AttributeBag) -> Self {
                self.attrs = attrs;
                self
            }

            /// Observe the wrapper node.
            pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
                self.node_ref = Some(sink.into());
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
        }
    };
}

/// Outer page gutter.
#[derive(Clone, Debug, Default)]
pub struct ContainerOuter {
    class: Option<String>,
    attrs: AttributeBag,
    node_ref: Option<RefSink>,
    children: Vec<Element>,
}

container_builder!(ContainerOuter);

impl ContainerOuter {
    pub fn build(self) -> Element {
        wrapper(
            "container-outer",
            self.class.as_deref(),
            self.node_ref,
            self.attrs,
            "container-outer__content",
            self.children,
        )
    }
}

/// Inner content column.
#[derive(Clone, Debug, Default)]
pub struct ContainerInner {
    class: Option<String>,
    attrs: AttributeBag,
    node_ref: Option<RefSink>,
    children: Vec<Element>,
}

container_builder!(ContainerInner);

impl ContainerInner {
    pub fn build(self) -> Element {
        wrapper(
            "container-inner",
            self.class.as_deref(),
            self.node_ref,
            self.attrs,
            "container-inner__content",
            self.children,
        )
    }
}

/// Outer gutter and inner column together.
#[derive(Clone, Debug, Default)]
pub struct Container {
    class: Option<String>,
    attrs: AttributeBag,
    node_ref: Option<RefSink>,
    children: Vec<Element>,
}

container_builder!(Container);

impl Container {
    pub fn build(self) -> Element {
        let inner = ContainerInner::new().children(self.children).build();
        let outer = ContainerOuter {
            class: self.class,
            attrs: self.attrs,
            node_ref: self.node_ref,
            children: vec![inner],
        };
        outer.build()
    }
}
