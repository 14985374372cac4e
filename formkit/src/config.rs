//! Control configuration.

use crate::positioning::{Offset, Placement};

/// Settings shared by all controls built from one configuration.
///
/// # Example
///
/// ```
/// use formkit::config::ControlsConfig;
/// use formkit::positioning::Placement;
///
/// let config = ControlsConfig::new()
///     .select_placeholder("Pick one")
///     .menu_placement(Placement::BottomStart);
/// assert_eq!(config.select_placeholder, "Pick one");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsConfig {
    /// Text shown by a select with no valid selection.
    pub select_placeholder: String,
    /// Where menu panels are placed relative to their trigger.
    pub menu_placement: Placement,
    /// Gap between a menu trigger and its panel.
    pub menu_offset: Offset,
    /// Where select option lists are placed relative to their button.
    pub select_placement: Placement,
    /// Gap between a select button and its option list.
    pub select_offset: Offset,
    /// Prefix for generated fallback identities.
    pub id_prefix: String,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            select_placeholder: "- Select -".into(),
            menu_placement: Placement::BottomEnd,
            menu_offset: Offset::new(0, 12),
            select_placement: Placement::BottomStart,
            select_offset: Offset::new(0, 4),
            id_prefix: "field".into(),
        }
    }
}

impl ControlsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.select_placeholder = placeholder.into();
        self
    }

    pub fn menu_placement(mut self, placement: Placement) -> Self {
        self.menu_placement = placement;
        self
    }

    pub fn menu_offset(mut self, offset: Offset) -> Self {
        self.menu_offset = offset;
        self
    }

    pub fn select_placement(mut self, placement: Placement) -> Self {
        self.select_placement = placement;
        self
    }

    pub fn select_offset(mut self, offset: Offset) -> Self {
        self.select_offset = offset;
        self
    }

    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.id_prefix = prefix.into();
        self
    }
}
