//! Single-selection state.
//!
//! A [`SelectionController`] either owns the selected key itself or defers
//! to an external owner that holds the value and accepts change requests.
//! Either way, every [`read`](SelectionController::read) checks the key
//! against the current options; a key that no longer matches any option is
//! reported as no selection and a request to clear it is issued.
//!
//! # Example
//!
//! ```
//! use formkit::selection::SelectionController;
//!
//! let controller = SelectionController::internal();
//! let options = ["low", "medium", "high"];
//!
//! controller.set_selected(Some("medium".into()));
//! assert_eq!(controller.read(&options).selected_option, Some(&"medium"));
//!
//! controller.set_selected(Some("urgent".into()));
//! assert_eq!(controller.read(&options).selected, None);
//! assert_eq!(controller.current(), None);
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use formkit_dom::{Event, Handler, Value};
use log::{debug, warn};

use crate::error::ControlError;
use crate::state::State;

/// Identity of an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum OptionKey {
    Str(String),
    Int(i64),
}

impl OptionKey {
    /// Interpret an event value as a selection. `Null` means no selection.
    pub fn from_value(value: &Value) -> Result<Option<OptionKey>, ControlError> {
        match value {
            Value::Null => Ok(None),
            Value::Str(s) => Ok(Some(Self::Str(s.clone()))),
            Value::Int(i) => Ok(Some(Self::Int(*i))),
            other => Err(ControlError::InvalidOptionKey(other.to_string())),
        }
    }
}

impl fmt::Display for OptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
        }
    }
}

impl From<&str> for OptionKey {
    fn from(value: &str) -> Self {
        Self::Str(value.to_owned())
    }
}

impl From<String> for OptionKey {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<i64> for OptionKey {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for OptionKey {
    fn from(value: i32) -> Self {
        Self::Int(value.into())
    }
}

impl From<OptionKey> for Value {
    fn from(key: OptionKey) -> Self {
        match key {
            OptionKey::Str(s) => Value::Str(s),
            OptionKey::Int(i) => Value::Int(i),
        }
    }
}

/// An item that can be offered in a select.
pub trait SelectOption {
    /// Identity used to track selection.
    fn key(&self) -> OptionKey;

    /// Text shown for this option.
    fn label(&self) -> String;
}

impl SelectOption for String {
    fn key(&self) -> OptionKey {
        OptionKey::Str(self.clone())
    }

    fn label(&self) -> String {
        self.clone()
    }
}

impl SelectOption for &str {
    fn key(&self) -> OptionKey {
        OptionKey::Str((*self).to_owned())
    }

    fn label(&self) -> String {
        (*self).to_owned()
    }
}

impl SelectOption for i64 {
    fn key(&self) -> OptionKey {
        OptionKey::Int(*self)
    }

    fn label(&self) -> String {
        self.to_string()
    }
}

// (id, label) pairs
impl<K, L> SelectOption for (K, L)
where
    K: Clone + Into<OptionKey>,
    L: AsRef<str>,
{
    fn key(&self) -> OptionKey {
        self.0.clone().into()
    }

    fn label(&self) -> String {
        self.1.as_ref().to_owned()
    }
}

/// An external owner of a selection value.
pub trait SelectionSource: Send + Sync {
    /// The owner's current value.
    fn value(&self) -> Option<OptionKey>;

    /// Ask the owner to change its value.
    fn set_value(&self, value: Option<OptionKey>);
}

impl SelectionSource for State<Option<OptionKey>> {
    fn value(&self) -> Option<OptionKey> {
        self.get()
    }

    fn set_value(&self, value: Option<OptionKey>) {
        self.set(value);
    }
}

type Getter = Arc<dyn Fn() -> Option<OptionKey> + Send + Sync>;
type Setter = Arc<dyn Fn(Option<OptionKey>) + Send + Sync>;

/// An external owner given as a getter and a setter.
#[derive(Clone)]
pub struct ExternalSelection {
    get: Getter,
    set: Setter,
}

impl ExternalSelection {
    pub fn new(
        get: impl Fn() -> Option<OptionKey> + Send + Sync + 'static,
        set: impl Fn(Option<OptionKey>) + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }
}

impl SelectionSource for ExternalSelection {
    fn value(&self) -> Option<OptionKey> {
        (self.get)()
    }

    fn set_value(&self, value: Option<OptionKey>) {
        (self.set)(value)
    }
}

impl fmt::Debug for ExternalSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ExternalSelection(..)")
    }
}

/// Who holds the selected value.
#[derive(Clone)]
pub enum Ownership {
    /// The controller's own cell. Nothing outside reads or writes it.
    Internal(State<Option<OptionKey>>),
    /// A caller-supplied owner. The controller keeps no copy of the value.
    External(Arc<dyn SelectionSource>),
}

impl Ownership {
    pub fn is_external(&self) -> bool {
        matches!(self, Self::External(_))
    }
}

impl fmt::Debug for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal(cell) => f.debug_tuple("Internal").field(&cell.get()).finish(),
            Self::External(_) => f.write_str("External(..)"),
        }
    }
}

/// The result of reading a selection against a set of options.
#[derive(Debug, PartialEq)]
pub struct Selection<'a, T> {
    pub selected: Option<OptionKey>,
    pub selected_option: Option<&'a T>,
}

impl<T> Selection<'_, T> {
    pub fn is_selected(&self, key: &OptionKey) -> bool {
        self.selected.as_ref() == Some(key)
    }
}

/// Bookkeeping for clear requests.
#[derive(Debug, Default)]
struct Correction {
    /// Set while a clear request is being delivered.
    in_progress: AtomicBool,
    /// Stale key whose clear request the owner ignored.
    requested_for: Mutex<Option<OptionKey>>,
}

impl Correction {
    fn requested_for(&self) -> std::sync::MutexGuard<'_, Option<OptionKey>> {
        self.requested_for
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

/// Resets the in-progress flag even if the owner's setter panics.
struct InProgress<'a>(&'a AtomicBool);

impl Drop for InProgress<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

/// Owns or delegates a single selection.
///
/// Cloning is cheap; clones share ownership and correction state.
#[derive(Debug, Clone)]
pub struct SelectionController {
    owner: Ownership,
    correction: Arc<Correction>,
}

impl SelectionController {
    /// A controller that owns its value, starting with no selection.
    pub fn internal() -> Self {
        Self::with_owner(Ownership::Internal(State::new(None)))
    }

    /// A controller that reads from and writes to `source`.
    pub fn external(source: impl SelectionSource + 'static) -> Self {
        Self::with_owner(Ownership::External(Arc::new(source)))
    }

    pub fn with_owner(owner: Ownership) -> Self {
        Self {
            owner,
            correction: Arc::default(),
        }
    }

    pub fn ownership(&self) -> &Ownership {
        &self.owner
    }

    /// The raw value held by the owner, without checking it against options.
    pub fn current(&self) -> Option<OptionKey> {
        match &self.owner {
            Ownership::Internal(cell) => cell.get(),
            Ownership::External(source) => source.value(),
        }
    }

    /// Change the selection.
    ///
    /// The key is not checked against any options here; a stale key is
    /// caught by the next [`read`](Self::read).
    pub fn set_selected(&self, key: Option<OptionKey>) {
        match &self.owner {
            Ownership::Internal(cell) => cell.set(key),
            Ownership::External(source) => source.set_value(key),
        }
    }

    /// Read the selection against `options`.
    ///
    /// A key with no matching option reads as no selection and triggers a
    /// clear request. If the owner ignores the request, the same stale key
    /// does not trigger another one; once the owner has cleared, a stale key
    /// set again is cleared again. A read made from inside the owner's setter
    /// while a clear is being delivered does not start a second one.
    pub fn read<'a, T: SelectOption>(&self, options: &'a [T]) -> Selection<'a, T> {
        let Some(key) = self.current() else {
            *self.correction.requested_for() = None;
            return Selection {
                selected: None,
                selected_option: None,
            };
        };

        if let Some(option) = options.iter().find(|option| option.key() == key) {
            *self.correction.requested_for() = None;
            return Selection {
                selected: Some(key),
                selected_option: Some(option),
            };
        }

        self.request_clear(key);
        Selection {
            selected: None,
            selected_option: None,
        }
    }

    fn request_clear(&self, stale: OptionKey) {
        if self.correction.in_progress.swap(true, Ordering::SeqCst) {
            debug!("selection '{stale}' is stale during a clear; not re-requesting");
            return;
        }
        let _reset = InProgress(&self.correction.in_progress);

        {
            let mut requested = self.correction.requested_for();
            if requested.as_ref() == Some(&stale) {
                return;
            }
            *requested = Some(stale.clone());
        }

        debug!("selection '{stale}' matches no option; clearing");
        self.set_selected(None);

        // Only remember clears the owner ignored, so the same key picked
        // again later is cleared again.
        if self.current().is_none() {
            *self.correction.requested_for() = None;
        }
    }

    /// A change handler that forwards the event's value to
    /// [`set_selected`](Self::set_selected).
    pub fn change_handler(&self) -> Handler {
        let controller = self.clone();
        Handler::new(move |event| {
            let Event::Change(value) = event else {
                return;
            };
            match OptionKey::from_value(value) {
                Ok(key) => controller.set_selected(key),
                Err(err) => warn!("ignoring selection change: {err}"),
            }
        })
    }
}

impl Default for SelectionController {
    fn default() -> Self {
        Self::internal()
    }
}
