//! Ambient form defaults.
//!
//! A form wrapper hands a [`FormContext`] to everything rendered inside it.
//! Controls fall back to the context for any setting they were not given
//! directly. Contexts are immutable snapshots passed down explicitly; a
//! nested wrapper builds a new snapshot with [`FormContext::nested`] and
//! the outer one is left untouched.
//!
//! ```
//! use formkit::context::FormContext;
//!
//! let outer = FormContext::new().disabled(true);
//! let inner = outer.nested(&FormContext::new().full_width(true));
//! assert_eq!(inner.is_disabled, Some(true));
//! assert_eq!(inner.is_full_width, Some(true));
//! assert_eq!(outer.is_full_width, None);
//! ```

use std::fmt;

/// Validation outcome shown by a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationState {
    Error,
    Success,
}

impl ValidationState {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl fmt::Display for ValidationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Defaults provided by an enclosing form scope.
///
/// Every field is optional. `Some(false)` is a real setting and shadows an
/// outer `Some(true)`; only `None` inherits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormContext {
    pub id: Option<String>,
    pub state: Option<ValidationState>,
    pub is_disabled: Option<bool>,
    pub is_full_width: Option<bool>,
}

impl FormContext {
    /// The empty context seen outside any form scope.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn state(mut self, state: ValidationState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.is_disabled = Some(disabled);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.is_full_width = Some(full_width);
        self
    }

    /// Snapshot for a scope nested inside `self`.
    ///
    /// Fields set in `inner` win; fields `inner` leaves unset are inherited.
    pub fn nested(&self, inner: &FormContext) -> FormContext {
        FormContext {
            id: inner.id.clone().or_else(|| self.id.clone()),
            state: inner.state.or(self.state),
            is_disabled: inner.is_disabled.or(self.is_disabled),
            is_full_width: inner.is_full_width.or(self.is_full_width),
        }
    }
}
