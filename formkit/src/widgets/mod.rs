//! Built-in controls.
//!
//! Each control is a builder that produces an [`Element`](formkit_dom::Element).
//! Controls never track focus, keyboard navigation or open/closed state;
//! the interaction toolkit owns those and passes the current flags in as an
//! [`Interaction`]. State that must survive between renders, such as an
//! internally owned selection or the nodes a popup is anchored to, lives in
//! a separate state value (`MenuState`, `SelectState`) that the caller
//! keeps and passes to `build`.

pub mod button;
pub mod container;
pub mod menu;
pub mod range;
pub mod select;

pub use button::{Button, ButtonVariant};
pub use container::{Container, ContainerInner, ContainerOuter};
pub use menu::{Menu, MenuDivider, MenuEntry, MenuItem, MenuItemVariant, MenuState};
pub use range::Range;
pub use select::{Select, SelectState};

/// Flags reported by the interaction toolkit for one popup control.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Interaction {
    /// Whether the popup is open.
    pub open: bool,
    /// Index of the highlighted entry, if any.
    pub active: Option<usize>,
}

impl Interaction {
    pub fn closed() -> Self {
        Self::default()
    }

    pub fn open() -> Self {
        Self {
            open: true,
            active: None,
        }
    }

    pub fn active(mut self, index: usize) -> Self {
        self.active = Some(index);
        self
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.active == Some(index)
    }
}
