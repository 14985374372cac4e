//! Range widget: a labelled integer slider.

use std::fmt;
use std::sync::Arc;

use formkit_dom::{AttributeBag, Element, Event, Handler, Tag, Value, classes, compose, extend};
use log::warn;

use crate::error::ControlError;

type Setter = Arc<dyn Fn(i64) + Send + Sync>;

/// A range slider builder.
///
/// The label doubles as the input's id. Change events are parsed to an
/// integer and passed to the setter; values that do not parse are logged
/// and dropped.
///
/// # Example
///
/// ```
/// use formkit::widgets::Range;
///
/// let range = Range::new("Volume", 30).on_change(|v| println!("volume: {v}")).build();
/// assert_eq!(range.children.len(), 2);
/// ```
#[derive(Clone, Default)]
pub struct Range {
    label: String,
    value: i64,
    min: Option<i64>,
    max: Option<i64>,
    class: Option<String>,
    on_change: Option<Setter>,
    attrs: AttributeBag,
}

impl Range {
    pub fn new(label: impl Into<String>, value: i64) -> Self {
        Self {
            label: label.into(),
            value,
            ..Default::default()
        }
    }

    pub fn min(mut self, min: i64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn on_change(mut self, f: impl Fn(i64) + Send + Sync + 'static) -> Self {
        self.on_change = Some(Arc::new(f));
        self
    }

    /// Pass-through attributes for the input. Classes are appended and a
    /// caller `on_change` runs after the slider's own; other keys override.
    pub fn attrs(mut self, attrs: AttributeBag) -> Self {
        self.attrs = attrs;
        self
    }

    pub fn build(self) -> Element {
        let handler = self.on_change.map(|setter| {
            let label = self.label.clone();
            Handler::new(move |event| {
                let Event::Change(raw) = event else {
                    return;
                };
                match parse_range_value(&label, raw) {
                    Ok(value) => setter(value),
                    Err(err) => warn!("{err}"),
                }
            })
        });

        let own = AttributeBag::new()
            .with("id", self.label.clone())
            .with("type", "range")
            .with("value", self.value)
            .with_opt("min", self.min)
            .with_opt("max", self.max)
            .with("class", "range__input")
            .with_opt("on_change", handler);
        let caller = extend(&own, self.attrs);
        let input = compose([own, caller]);

        Element::div()
            .class(classes([Some("range"), self.class.as_deref()]))
            .child(
                Element::new(Tag::Label)
                    .attr("for", self.label.clone())
                    .class("range__label")
                    .text(self.label),
            )
            .child(Element::new(Tag::Input).attrs(input))
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Range")
            .field("label", &self.label)
            .field("value", &self.value)
            .field("min", &self.min)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}

/// Read an integer out of a range change value.
///
/// Accepts integers, finite floats (truncated) and strings holding either.
pub fn parse_range_value(label: &str, raw: &Value) -> Result<i64, ControlError> {
    let invalid = || ControlError::InvalidRangeValue {
        label: label.to_owned(),
        raw: raw.to_string(),
    };
    match raw {
        Value::Int(i) => Ok(*i),
        Value::Float(x) if x.is_finite() => Ok(x.trunc() as i64),
        Value::Str(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| {
                    s.parse::<f64>()
                        .ok()
                        .filter(|x| x.is_finite())
                        .map(|x| x.trunc() as i64)
                })
                .ok_or_else(invalid)
        }
        _ => Err(invalid()),
    }
}
