//! Select widget - a button that shows the chosen option and a positioned
//! list of options.

use std::fmt;
use std::sync::Arc;

use formkit_dom::{AttributeBag, Element, RefSink, Tag, Value, classes, compose, extend};

use super::Interaction;
use crate::config::ControlsConfig;
use crate::context::{FormContext, ValidationState};
use crate::positioning::{FloatingPair, Positioner};
use crate::resolve::{FallbackId, FormInputProps, resolve};
use crate::selection::{SelectOption, SelectionController, SelectionSource};

/// State a select keeps between renders.
///
/// Holds the selection controller, the generated fallback id and the nodes
/// the option list is positioned against. Clones share all of it.
#[derive(Debug, Clone)]
pub struct SelectState {
    controller: SelectionController,
    fallback_id: FallbackId,
    pair: FloatingPair,
}

impl SelectState {
    /// A select that owns its selection.
    pub fn new() -> Self {
        Self::with_controller(SelectionController::internal())
    }

    /// A select whose selection is held by `source`.
    pub fn controlled(source: impl SelectionSource + 'static) -> Self {
        Self::with_controller(SelectionController::external(source))
    }

    pub fn with_controller(controller: SelectionController) -> Self {
        Self {
            controller,
            fallback_id: FallbackId::new(ControlsConfig::default().id_prefix),
            pair: FloatingPair::new(),
        }
    }

    /// Use `prefix` for the generated fallback id.
    pub fn id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.fallback_id = FallbackId::new(prefix);
        self
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn fallback_id(&self) -> &FallbackId {
        &self.fallback_id
    }

    pub fn pair(&self) -> &FloatingPair {
        &self.pair
    }
}

impl Default for SelectState {
    fn default() -> Self {
        Self::new()
    }
}

type RenderRow<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// A select builder.
///
/// # Example
///
/// ```
/// use formkit::context::FormContext;
/// use formkit::positioning::PlacementOnly;
/// use formkit::widgets::{Interaction, Select, SelectState};
///
/// let state = SelectState::new();
/// state.controller().set_selected(Some("uk".into()));
///
/// let select = Select::new(vec![("us", "United States"), ("uk", "United Kingdom")])
///     .id("country")
///     .build(&state, &FormContext::new(), Interaction::closed(), &PlacementOnly);
/// assert!(select.text_content().contains("United Kingdom"));
/// ```
pub struct Select<T> {
    options: Vec<T>,
    render_row: Option<RenderRow<T>>,
    placeholder: Option<String>,
    props: FormInputProps,
    attrs: AttributeBag,
    input_attrs: AttributeBag,
    node_ref: Option<RefSink>,
    config: ControlsConfig,
}

impl<T: SelectOption> Select<T> {
    pub fn new(options: impl IntoIterator<Item = T>) -> Self {
        Self {
            options: options.into_iter().collect(),
            render_row: None,
            placeholder: None,
            props: FormInputProps::default(),
            attrs: AttributeBag::new(),
            input_attrs: AttributeBag::new(),
            node_ref: None,
            config: ControlsConfig::default(),
        }
    }

    /// Text for an option, in the button and in the list. Defaults to the
    /// option's label.
    pub fn render_row(mut self, f: impl Fn(&T) -> String + Send + Sync + 'static) -> Self {
        self.render_row = Some(Arc::new(f));
        self
    }

    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    /// Form settings given directly to this select.
    pub fn props(mut self, props: FormInputProps) -> Self {
        self.props = props;
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.props.id = Some(id.into());
        self
    }

    pub fn state(mut self, state: ValidationState) -> Self {
        self.props.state = Some(state);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.props.is_disabled = Some(disabled);
        self
    }

    pub fn full_width(mut self, full_width: bool) -> Self {
        self.props.is_full_width = Some(full_width);
        self
    }

    /// Attributes for the listbox root. Classes are appended and handlers
    /// run after the select's own; other keys override.
    pub fn attrs(mut self, attrs: AttributeBag) -> Self {
        self.attrs = attrs;
        self
    }

    /// Attributes for the button, merged like [`attrs`](Self::attrs).
    pub fn input_attrs(mut self, attrs: AttributeBag) -> Self {
        self.input_attrs = attrs;
        self
    }

    /// Observe the button node.
    pub fn node_ref(mut self, sink: impl Into<RefSink>) -> Self {
        self.node_ref = Some(sink.into());
        self
    }

    pub fn config(mut self, config: ControlsConfig) -> Self {
        self.config = config;
        self
    }

    fn row_text(&self, option: &T) -> String {
        match &self.render_row {
            Some(f) => f(option),
            None => option.label(),
        }
    }

    pub fn build(
        self,
        state: &SelectState,
        cx: &FormContext,
        interaction: Interaction,
        positioner: &dyn Positioner,
    ) -> Element {
        let resolved = resolve(&self.props, cx, || state.fallback_id.get().to_owned());
        let selection = state.controller.read(&self.options);
        let tone = resolved.state.map_or("default", ValidationState::as_str);

        let shown = match selection.selected_option {
            Some(option) => self.row_text(option),
            None => self
                .placeholder
                .clone()
                .unwrap_or_else(|| self.config.select_placeholder.clone()),
        };

        let width = if resolved.is_full_width {
            "select--full-width"
        } else {
            "select--fixed"
        };
        let own_root = AttributeBag::new()
            .with("class", classes([Some("select"), Some(width)]))
            .with("value", Value::from(selection.selected.clone()))
            .with("disabled", resolved.is_disabled)
            .with("on_change", state.controller.change_handler());
        let caller_root = extend(&own_root, self.attrs.clone());
        let root = compose([own_root, caller_root]);

        let forwarded = match &self.node_ref {
            Some(sink) => AttributeBag::new().with_ref(sink.clone()),
            None => AttributeBag::new(),
        };
        let button_tone = format!("select__button--{tone}");
        let own_button = forwarded
            .with(
                "class",
                classes([Some("select__button"), Some(button_tone.as_str())]),
            )
            .with("id", resolved.id.clone())
            .with("disabled", resolved.is_disabled);
        let caller_button = extend(&own_button, self.input_attrs.clone());
        let button = compose([
            own_button,
            AttributeBag::new().with_ref(state.pair.anchor_sink()),
            caller_button,
        ]);

        let mut elem = Element::div().attrs(root).child(
            Element::new(Tag::Button)
                .attrs(button)
                .child(Element::span(shown).class("select__value"))
                .child(
                    Element::new(Tag::Span)
                        .class(format!("select__icon select__icon--{tone}")),
                ),
        );

        if interaction.open {
            let positioned = state
                .pair
                .position(
                    positioner,
                    self.config.select_placement,
                    self.config.select_offset,
                )
                .unwrap_or_default();

            let rows = self.options.iter().enumerate().map(|(index, option)| {
                let key = option.key();
                let selected = selection.is_selected(&key);
                let active = interaction.is_active(index);

                let mut row = Element::new(Tag::Li)
                    .class(classes([
                        Some("select__option"),
                        active.then_some("select__option--active"),
                    ]))
                    .attr("value", Value::from(key))
                    .attr("selected", selected)
                    .child(Element::span(self.row_text(option)).class(if selected {
                        "select__label select__label--selected"
                    } else {
                        "select__label"
                    }));
                if selected {
                    row = row.child(Element::new(Tag::Span).class("select__check"));
                }
                row
            });

            let list = compose([
                positioned.style,
                positioned.attributes,
                AttributeBag::new()
                    .with("class", "select__options")
                    .with_ref(state.pair.floating_sink()),
            ]);
            elem = elem.child(Element::new(Tag::Ul).attrs(list).children(rows));
        }

        elem
    }
}

impl<T: fmt::Debug> fmt::Debug for Select<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("options", &self.options)
            .field("placeholder", &self.placeholder)
            .field("props", &self.props)
            .finish_non_exhaustive()
    }
}
