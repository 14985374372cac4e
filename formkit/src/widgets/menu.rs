//! Menu widget: a trigger button with a positioned panel of items.

use formkit_dom::{AttributeBag, Element, Handler, RefSink, Tag, classes, compose, extend};
use log::debug;

use super::Interaction;
use crate::config::ControlsConfig;
use crate::dispatch::{DispatchInput, Role, dispatch};
use crate::positioning::{FloatingPair, Placement, Positioner};

/// State a menu keeps between renders.
///
/// Holds the trigger and panel nodes the positioning engine works from.
#[derive(Debug, Clone, Default)]
pub struct MenuState {
    pair: FloatingPair,
}

impl MenuState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pair(&self) -> &FloatingPair {
        &self.pair
    }
}

/// Emphasis of a menu item.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuItemVariant {
    Primary,
    Destructive,
}

/// One entry in a menu.
///
/// An item with an `href` is a link, one with only a click handler is a
/// button, and one with neither is plain content. If both are given the
/// link wins and the handler is not attached.
#[derive(Clone, Debug)]
pub struct MenuItem {
    label: String,
    href: Option<String>,
    on_click: Option<Handler>,
    role: Option<Role>,
    variant: Option<MenuItemVariant>,
    class: Option<String>,
    attrs: AttributeBag,
}

impl MenuItem {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: None,
            on_click: None,
            role: None,
            variant: None,
            class: None,
            attrs: AttributeBag::new(),
        }
    }

    pub fn href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }

    pub fn on_click(mut self, handler: Handler) -> Self {
        self.on_click = Some(handler);
        self
    }

    /// Force a role regardless of href and handler.
    pub fn role(mut self, role: Role) -> Self {
        self.role = Some(role);
        self
    }

    pub fn variant(mut self, variant: MenuItemVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn attrs(mut self, attrs: AttributeBag) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn resolved_role(&self) -> Role {
        dispatch(&DispatchInput {
            navigation_target: self.href.clone(),
            activation_handler: self.on_click.clone(),
            explicit_role: self.role,
        })
    }

    /// Build the item. `active` is the toolkit's highlight flag.
    pub fn build(self, active: bool) -> Element {
        let role = self.resolved_role();
        let variant = match self.variant {
            Some(MenuItemVariant::Primary) => Some("menu-item--primary"),
            Some(MenuItemVariant::Destructive) => Some("menu-item--destructive"),
            None => None,
        };
        let class = classes([
            Some("menu-item"),
            variant,
            active.then_some("menu-item--active"),
            self.class.as_deref(),
        ]);

        let wired = match role {
            Role::Navigational => {
                if self.on_click.is_some() {
                    debug!("menu item '{}' has an href; click handler not attached", self.label);
                }
                AttributeBag::new().with_opt("href", self.href)
            }
            Role::Actionable => AttributeBag::new().with_opt("on_click", self.on_click),
            Role::Static => AttributeBag::new(),
        };

        let own = compose([AttributeBag::new().with("class", class), wired]);
        let caller = extend(&own, self.attrs);
        Element::new(role.tag())
            .attrs(compose([own, caller]))
            .child(Element::span(self.label).class("menu-item__label"))
    }
}

/// A separator between groups of items.
#[derive(Clone, Copy, Debug, Default)]
pub struct MenuDivider;

impl MenuDivider {
    pub fn build(self) -> Element {
        Element::new(Tag::Hr).class("menu-divider")
    }
}

#[derive(Clone, Debug)]
pub enum MenuEntry {
    Item(MenuItem),
    Divider(MenuDivider),
}

impl From<MenuItem> for MenuEntry {
    fn from(item: MenuItem) -> Self {
        Self::Item(item)
    }
}

impl From<MenuDivider> for MenuEntry {
    fn from(divider: MenuDivider) -> Self {
        Self::Divider(divider)
    }
}

/// A menu builder.
///
/// The trigger's node is observed by both the caller's `node_ref` and the
/// menu's own anchor cell, so the caller can hold on to the trigger while
/// the panel is positioned against it.
///
/// # Example
///
/// ```
/// use formkit::positioning::PlacementOnly;
/// use formkit::widgets::{Interaction, Menu, MenuDivider, MenuItem, MenuState};
///
/// let state = MenuState::new();
/// let menu = Menu::new()
///     .trigger(formkit_dom::Element::span("Options"))
///     .item(MenuItem::new("Profile").href("/profile"))
///     .divider()
///     .item(MenuItem::new("Sign out"))
///     .build(&state, Interaction::closed(), &PlacementOnly);
/// assert_eq!(menu.children.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Menu {
    trigger: Vec<Element>,
    entries: Vec<MenuEntry>,
    placement: Option<Placement>,
    full_width: bool,
    outer: AttributeBag,
    trigger_attrs: AttributeBag,
    node_ref: Option<RefSink>,
    config: ControlsConfig,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    /// Content of the trigger button.
    pub fn trigger(mut self, content: Element) -> Self {
        self.trigger.push(content);
        self
    }

    pub fn item(mut self, item: MenuItem) -> Self {
        self.entries.push(item.into());
        self
    }

    pub fn divider(mut self) -> Self {
        self.entries.push(MenuDivider.into());
        self
    }

    pub fn entries(mut self, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
        self.entries.extend(entries);
        self
    }

    /// Panel placement. Defaults to the configured menu placement.
    pub fn placement(mut self, placement: Placement) -> Self {
        self.placement = Some(placement);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    /// Attributes for the outer wrapper, applied over its defaults.
    pub fn outer_attrs(mut self, attrs: AttributeBag) -> Self {
        self.outer = attrs;
        self
    }

    /// Attributes for the trigger button. Classes are appended and handlers
    /// chained; other keys override.
    pub fn trigger_attrs(mut self, attrs: AttributeBag) -> Self {
        self.trigger_attrs = attrs;
        self
    }

    /// Observe the trigger node.
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.node_ref = Some(sink.into());
        self
    }

    pub fn config(mut self, config: ControlsConfig) -> Self {
        self.config = config;
        self
    }

    pub fn build(
        self,
        state: &MenuState,
        interaction: Interaction,
        positioner: &dyn Positioner,
    ) -> Element {
        let own_outer = AttributeBag::new().with(
            "class",
            classes([Some("menu"), self.full_width.then_some("menu--full-width")]),
        );
        let caller_outer = extend(&own_outer, self.outer);
        let outer = compose([own_outer, caller_outer]);

        let forwarded = match self.node_ref {
            Some(sink) => AttributeBag::new().with_ref(sink),
            None => AttributeBag::new(),
        };
        let own_trigger = forwarded.with("class", "menu__trigger");
        let caller_trigger = extend(&own_trigger, self.trigger_attrs);
        let trigger = compose([
            own_trigger,
            AttributeBag::new().with_ref(state.pair.anchor_sink()),
            caller_trigger,
        ]);

        let mut root = Element::div()
            .attrs(outer)
            .child(Element::new(Tag::Button).attrs(trigger).children(self.trigger));

        if interaction.open {
            let placement = self.placement.unwrap_or(self.config.menu_placement);
            let positioned = state
                .pair
                .position(positioner, placement, self.config.menu_offset)
                .unwrap_or_default();

            let mut index = 0;
            let entries = self.entries.into_iter().map(|entry| match entry {
                MenuEntry::Item(item) => {
                    let active = interaction.is_active(index);
                    index += 1;
                    item.build(active)
                }
                MenuEntry::Divider(divider) => divider.build(),
            });

            let panel = Element::div()
                .class(classes([
                    Some("menu__panel"),
                    self.full_width.then_some("menu__panel--inset"),
                ]))
                .children(entries);

            let items = compose([
                positioned.style,
                positioned.attributes,
                AttributeBag::new()
                    .with(
                        "class",
                        classes([
                            Some("menu__items"),
                            (!self.full_width).then_some("menu__items--fixed"),
                        ]),
                    )
                    .with_ref(state.pair.floating_sink()),
            ]);
            root = root.child(Element::div().attrs(items).child(panel));
        }

        root
    }
}
