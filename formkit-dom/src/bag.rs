//! Attribute bags and their composition.
//!
//! Controls receive attributes from several places: their own defaults,
//! values they compute, and whatever the caller passes through. [`compose`]
//! folds those bags into the single bag handed to an element.
//!
//! Composition knows about exactly one key, [`REF_KEY`]. Sinks under that
//! key are collected from every bag and fanned out; every other key is
//! overwritten by the last bag that defines it. Anything smarter, such as
//! joining class lists or chaining handlers, is done by the caller before
//! the bags are composed; [`extend`] does that for a control's own bag and
//! the pass-through bag it was handed.

use std::collections::HashMap;

use log::warn;

use crate::class::classes;
use crate::refs::{RefSink, merge_refs};
use crate::value::{Handler, Value};

/// Reserved key for the node-reference binding.
pub const REF_KEY: &str = "ref";

/// How values for one key are combined across bags.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompositionPolicy {
    /// The last bag that defines the key wins.
    Override,
    /// Every sink from every bag receives the node.
    FanOut,
}

impl CompositionPolicy {
    pub fn for_key(key: &str) -> Self {
        if key == REF_KEY {
            Self::FanOut
        } else {
            Self::Override
        }
    }
}

/// A single attribute value.
#[derive(Debug, Clone)]
pub enum AttrValue {
    Value(Value),
    Handler(Handler),
    Ref(RefSink),
}

impl AttrValue {
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_handler(&self) -> Option<&Handler> {
        match self {
            Self::Handler(h) => Some(h),
            _ => None,
        }
    }

    pub fn as_ref_sink(&self) -> Option<&RefSink> {
        match self {
            Self::Ref(r) => Some(r),
            _ => None,
        }
    }
}

macro_rules! attr_value_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for AttrValue {
                fn from(value: $ty) -> Self {
                    Self::Value(value.into())
                }
            }
        )*
    };
}

attr_value_from!(Value, bool, i64, i32, f64, &str, String);

impl<T: Into<Value>> From<Option<T>> for AttrValue {
    fn from(value: Option<T>) -> Self {
        Self::Value(value.into())
    }
}

impl From<Handler> for AttrValue {
    fn from(handler: Handler) -> Self {
        Self::Handler(handler)
    }
}

impl From<RefSink> for AttrValue {
    fn from(sink: RefSink) -> Self {
        Self::Ref(sink)
    }
}

/// An unordered mapping from attribute name to value.
#[derive(Debug, Clone, Default)]
pub struct AttributeBag {
    entries: HashMap<String, AttrValue>,
}

impl AttributeBag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder-style insert of an optional value; `None` leaves the key absent.
    pub fn with_opt<V: Into<AttrValue>>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Builder-style insert of a node-reference sink.
    pub fn with_ref(self, sink: impl Into<RefSink>) -> Self {
        self.with(REF_KEY, AttrValue::Ref(sink.into()))
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn remove(&mut self, key: &str) -> Option<AttrValue> {
        self.entries.remove(key)
    }

    pub fn get(&self, key: &str) -> Option<&AttrValue> {
        self.entries.get(key)
    }

    /// Primitive value for `key`, if the entry is a primitive.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.get(key).and_then(AttrValue::as_value)
    }

    /// String value for `key`, if present and a string.
    pub fn str(&self, key: &str) -> Option<&str> {
        self.value(key).and_then(Value::as_str)
    }

    pub fn handler(&self, key: &str) -> Option<&Handler> {
        self.get(key).and_then(AttrValue::as_handler)
    }

    /// The node-reference sink, if any.
    pub fn node_ref(&self) -> Option<&RefSink> {
        self.get(REF_KEY).and_then(AttrValue::as_ref_sink)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl IntoIterator for AttributeBag {
    type Item = (String, AttrValue);
    type IntoIter = std::collections::hash_map::IntoIter<String, AttrValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

/// Merge bags in order into one.
///
/// Order matters: pass defaults first and overrides last. Keys absent from
/// every bag are absent from the result. If any bag carries [`REF_KEY`], the
/// result holds a single sink that fans out to all of them in bag order.
pub fn compose<I>(bags: I) -> AttributeBag
where
    I: IntoIterator<Item = AttributeBag>,
{
    let mut result = AttributeBag::new();
    let mut sinks: Option<Vec<Option<RefSink>>> = None;

    for bag in bags {
        for (key, value) in bag {
            match CompositionPolicy::for_key(&key) {
                CompositionPolicy::FanOut => {
                    let sink = match value {
                        AttrValue::Ref(sink) => Some(sink),
                        AttrValue::Value(Value::Null) => None,
                        other => {
                            warn!("ignoring non-reference value under '{key}': {other:?}");
                            None
                        }
                    };
                    sinks.get_or_insert_with(Vec::new).push(sink);
                }
                CompositionPolicy::Override => {
                    result.entries.insert(key, value);
                }
            }
        }
    }

    if let Some(sinks) = sinks {
        result.insert(REF_KEY, AttrValue::Ref(merge_refs(sinks)));
    }

    result
}

/// Prepare a pass-through bag to be composed over a control's own bag.
///
/// The returned bag's `class` is `own`'s classes followed by the caller's,
/// and any key both bags hold a handler under runs `own`'s handler first and
/// then the caller's. Everything else is left as the caller gave it, so
/// `compose([own, extend(&own, caller)])` still lets the caller override
/// plain values.
pub fn extend(own: &AttributeBag, mut caller: AttributeBag) -> AttributeBag {
    if let Some(extra) = caller.str("class").map(str::to_owned) {
        caller.insert("class", classes([own.str("class"), Some(extra.as_str())]));
    }

    let keys: Vec<String> = caller.keys().map(str::to_owned).collect();
    for key in keys {
        let chained = match (own.handler(&key), caller.handler(&key)) {
            (Some(first), Some(second)) => first.chain(second),
            _ => continue,
        };
        caller.insert(key, chained);
    }

    caller
}
