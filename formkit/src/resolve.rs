//! Effective form settings for a single control.
//!
//! Each setting is taken from the first place that defines it: the value
//! passed to the control, then the enclosing [`FormContext`], then a fixed
//! default. Identity has no fixed default; a control that gets no id from
//! anywhere uses its own generated [`FallbackId`].

use std::sync::{Arc, OnceLock};

use uuid::Uuid;

use crate::context::{FormContext, ValidationState};

/// Form settings passed directly to a control. Unset fields defer to the
/// ambient context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInputProps {
    pub id: Option<String>,
    /// Identity of the labelled control, used when `id` is unset.
    pub html_for: Option<String>,
    pub state: Option<ValidationState>,
    pub is_disabled: Option<bool>,
    pub is_full_width: Option<bool>,
}

impl FormInputProps {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn html_for(mut self, id: impl Into<String>) -> Self {
        self.html_for = Some(id.into());
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
}

/// Fully resolved form settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedFormInput {
    pub id: String,
    pub state: Option<ValidationState>,
    pub is_disabled: bool,
    pub is_full_width: bool,
}

/// A generated identity that stays the same for the life of one control.
///
/// The value is created on first use. Clones share it.
#[derive(Debug, Clone)]
pub struct FallbackId {
    prefix: Arc<str>,
    value: Arc<OnceLock<String>>,
}

impl FallbackId {
    pub fn new(prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            prefix: Arc::from(prefix),
            value: Arc::new(OnceLock::new()),
        }
    }

    pub fn get(&self) -> &str {
        self.value
            .get_or_init(|| format!("{}-{}", self.prefix, Uuid::new_v4().simple()))
    }

    /// Whether an identity has been generated yet.
    pub fn is_generated(&self) -> bool {
        self.value.get().is_some()
    }
}

impl Default for FallbackId {
    fn default() -> Self {
        Self::new("field")
    }
}

/// Resolve a control's settings from its own props and the ambient context.
///
/// `fallback` is only called when neither source supplies an identity. It
/// should return the same value every time for a given control, which
/// [`FallbackId`] does, so that repeated resolution within a render agrees.
pub fn resolve(
    explicit: &FormInputProps,
    context: &FormContext,
    fallback: impl FnOnce() -> String,
) -> ResolvedFormInput {
    let id = explicit
        .id
        .clone()
        .or_else(|| explicit.html_for.clone())
        .or_else(|| context.id.clone())
        .unwrap_or_else(fallback);

    ResolvedFormInput {
        id,
        state: explicit.state.or(context.state),
        is_disabled: explicit.is_disabled.or(context.is_disabled).unwrap_or(false),
        is_full_width: explicit
            .is_full_width
            .or(context.is_full_width)
            .unwrap_or(false),
    }
}
