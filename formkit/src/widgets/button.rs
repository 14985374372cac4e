//! Button widget.

use formkit_dom::{AttributeBag, Element, Handler, RefSink, classes, compose, extend};

use crate::dispatch::{DispatchInput, Role, dispatch};

/// Visual weight of a button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Destructive,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            Self::Primary => "button--primary",
            Self::Secondary => "button--secondary",
            Self::Destructive => "button--destructive",
        }
    }
}

/// A button builder.
///
/// With an `href` the button renders as a link; otherwise it renders as a
/// button element, with or without a click handler.
///
/// # Example
///
/// ```
/// use formkit::widgets::{Button, ButtonVariant};
/// use formkit_dom::Tag;
///
/// let link = Button::new().label("Docs").href("/docs").build();
/// assert_eq!(link.tag, Tag::A);
///
/// let delete = Button::new()
///     .label("Delete")
///     .variant(ButtonVariant::Destructive)
///     .build();
/// assert_eq!(delete.tag, Tag::Button);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Button {
    label: Option<String>,
    variant: ButtonVariant,
    class: Option<String>,
    href: Option<String>,
    on_click: Option<Handler>,
    attrs: AttributeBag,
    node_ref: Option<RefSink>,
}

impl Button {
    /// Create a new button builder.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    /// Extra classes, appended after the variant classes.
    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    /// Navigate to `href` instead of acting as a button.
    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Pass-through attributes. Classes are appended and a caller `on_click`
    /// runs after the button's own; other keys override.
    pub fn attrs(mut self, attrs: AttributeBag) -> Self {
        self.attrs = attrs;
        self
    }

    /// Observe the created node.
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.node_ref = Some(sink.into());
        self
    }

    /// The role this button renders with.
    pub fn role(&self) -> Role {
        let input = DispatchInput {
            navigation_target: self.href.clone(),
            activation_handler: self.on_click.clone(),
            explicit_role: None,
        };
        match dispatch(&input) {
            Role::Static => Role::Actionable,
            role => role,
        }
    }

    pub fn build(self) -> Element {
        let role = self.role();
        let class = classes([
            Some("button"),
            Some(self.variant.class()),
            self.class.as_deref(),
        ]);

        let wired = match role {
            Role::Navigational => AttributeBag::new().with_opt("href", self.href),
            _ => AttributeBag::new()
                .with("type", "button")
                .with_opt("on_click", self.on_click),
        };
        let node_ref = match self.node_ref {
            Some(sink) => AttributeBag::new().with_ref(sink),
            None => AttributeBag::new(),
        };

        let own = compose([AttributeBag::new().with("class", class), wired]);
        let caller = extend(&own, self.attrs);
        let attrs = compose([own, node_ref, caller]);

        let elem = Element::new(role.tag()).attrs(attrs);
        match self.label {
            Some(label) => elem.text(label),
            None => elem,
        }
    }
}
