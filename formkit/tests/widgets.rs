use std::sync::{Arc, Mutex};

use formkit::context::{FormContext, ValidationState};
use formkit::positioning::{Placement, PlacementOnly};
use formkit::selection::{ExternalSelection, OptionKey};
use formkit::widgets::{
    Button, ButtonVariant, Container, Interaction, Menu, MenuItem, MenuItemVariant, MenuState,
    Range, Select, SelectState,
};
use formkit_dom::{AttributeBag, Document, Element, Event, Handler, NodeRef, Tag, Value};

fn find_class<'a>(root: &'a Element, class: &str) -> Option<&'a Element> {
    root.find(&|elem| {
        elem.class_name()
            .is_some_and(|c| c.split(' ').any(|token| token == class))
    })
}

// ============================================================================
// Button
// ============================================================================

#[test]
fn test_button_with_href_is_a_link() {
    let elem = Button::new()
        .label("Docs")
        .href("/docs")
        .on_click(Handler::new(|_| {}))
        .build();

    assert_eq!(elem.tag, Tag::A);
    assert_eq!(elem.attrs.str("href"), Some("/docs"));
    assert!(elem.attrs.handler("on_click").is_none());
}

#[test]
fn test_button_without_href_is_a_button() {
    let elem = Button::new()
        .label("Save")
        .variant(ButtonVariant::Secondary)
        .class("wide")
        .build();

    assert_eq!(elem.tag, Tag::Button);
    assert_eq!(elem.class_name(), Some("button button--secondary wide"));
    assert_eq!(elem.text.as_deref(), Some("Save"));
}

#[test]
fn test_button_pass_through_attrs_apply_last() {
    let elem = Button::new()
        .attrs(AttributeBag::new().with("type", "submit").with("title", "Go"))
        .build();

    assert_eq!(elem.attrs.str("type"), Some("submit"));
    assert_eq!(elem.attrs.str("title"), Some("Go"));
}

#[test]
fn test_button_caller_click_runs_after_own() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let record = |name: &'static str| {
        let calls = Arc::clone(&calls);
        Handler::new(move |_| calls.lock().unwrap().push(name))
    };
    let button = Button::new()
        .label("Save")
        .on_click(record("own"))
        .attrs(AttributeBag::new().with("on_click", record("caller")))
        .build();

    let mut doc = Document::new();
    let root = doc.mount(&button);
    doc.fire(root, Event::Click).unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["own", "caller"]);
}

#[test]
fn test_button_click_reaches_handler() {
    let clicks = Arc::new(Mutex::new(0));
    let handler = {
        let clicks = Arc::clone(&clicks);
        Handler::new(move |_| *clicks.lock().unwrap() += 1)
    };
    let mut doc = Document::new();
    let node = doc.mount(&Button::new().on_click(handler).build());

    doc.fire(node, Event::Click).unwrap();

    assert_eq!(*clicks.lock().unwrap(), 1);
}

// ============================================================================
// Menu
// ============================================================================

#[test]
fn test_menu_item_prefers_navigation() {
    let item = MenuItem::new("Profile")
        .href("/x")
        .on_click(Handler::new(|_| {}));

    let elem = item.build(false);

    assert_eq!(elem.tag, Tag::A);
    assert_eq!(elem.attrs.str("href"), Some("/x"));
    assert!(elem.attrs.handler("on_click").is_none());
}

#[test]
fn test_menu_item_roles() {
    let action = MenuItem::new("Sign out").on_click(Handler::new(|_| {})).build(false);
    assert_eq!(action.tag, Tag::Button);

    let plain = MenuItem::new("Signed in as ada").build(false);
    assert_eq!(plain.tag, Tag::Div);
    assert_eq!(plain.text_content(), "Signed in as ada");
}

#[test]
fn test_menu_item_active_and_variant_classes() {
    let elem = MenuItem::new("Delete")
        .variant(MenuItemVariant::Destructive)
        .build(true);

    assert_eq!(
        elem.class_name(),
        Some("menu-item menu-item--destructive menu-item--active")
    );
}

#[test]
fn test_menu_trigger_fans_out_to_caller_and_anchor() {
    let state = MenuState::new();
    let caller = NodeRef::new();
    let menu = Menu::new()
        .trigger(Element::span("Open"))
        .node_ref(&caller)
        .item(MenuItem::new("One"))
        .build(&state, Interaction::closed(), &PlacementOnly);

    let mut doc = Document::new();
    let root = doc.mount(&menu);
    let trigger = doc.children(root)[0];

    assert_eq!(caller.get(), Some(trigger));
    assert_eq!(state.pair().anchor().get(), Some(trigger));

    doc.unmount(root).unwrap();
    assert_eq!(caller.get(), None);
    assert_eq!(state.pair().anchor().get(), None);
}

#[test]
fn test_menu_trigger_class_is_extended() {
    let menu = Menu::new()
        .trigger(Element::span("Open"))
        .trigger_attrs(AttributeBag::new().with("class", "ghost"))
        .outer_attrs(AttributeBag::new().with("class", "right"))
        .build(&MenuState::new(), Interaction::closed(), &PlacementOnly);

    assert_eq!(menu.class_name(), Some("menu right"));
    assert_eq!(menu.children[0].class_name(), Some("menu__trigger ghost"));
}

#[test]
fn test_menu_closed_renders_trigger_only() {
    let menu = Menu::new()
        .item(MenuItem::new("One"))
        .build(&MenuState::new(), Interaction::closed(), &PlacementOnly);

    assert_eq!(menu.children.len(), 1);
    assert!(find_class(&menu, "menu__items").is_none());
}

#[test]
fn test_menu_panel_positioned_after_mount() {
    let state = MenuState::new();
    let build = || {
        Menu::new()
            .trigger(Element::span("Open"))
            .item(MenuItem::new("One"))
            .divider()
            .item(MenuItem::new("Two"))
            .build(&state, Interaction::open().active(1), &PlacementOnly)
    };

    let first = build();
    let items = find_class(&first, "menu__items").unwrap();
    assert!(items.attrs.str("data-placement").is_none());

    let mut doc = Document::new();
    let root = doc.mount(&first);
    assert!(state.pair().floating().is_mounted());

    let second = build();
    let items = find_class(&second, "menu__items").unwrap();
    assert_eq!(items.attrs.str("data-placement"), Some("bottom-end"));
    assert_eq!(items.attrs.str("position"), Some("absolute"));

    let active = find_class(&second, "menu-item--active").unwrap();
    assert_eq!(active.text_content(), "Two");
    assert!(find_class(&second, "menu-divider").is_some());

    doc.unmount(root).unwrap();
}

#[test]
fn test_menu_full_width_and_placement() {
    let state = MenuState::new();
    let mut doc = Document::new();
    let build = || {
        Menu::new()
            .full_width(true)
            .placement(Placement::TopStart)
            .outer_attrs(AttributeBag::new().with("data-testid", "menu"))
            .build(&state, Interaction::open(), &PlacementOnly)
    };
    doc.mount(&build());

    let menu = build();
    assert_eq!(menu.class_name(), Some("menu menu--full-width"));
    assert_eq!(menu.attrs.str("data-testid"), Some("menu"));
    let items = find_class(&menu, "menu__items").unwrap();
    assert_eq!(items.class_name(), Some("menu__items"));
    assert_eq!(items.attrs.str("data-placement"), Some("top-start"));
    assert!(find_class(&menu, "menu__panel--inset").is_some());
}

// ============================================================================
// Select
// ============================================================================

#[test]
fn test_select_shows_placeholder_without_selection() {
    let select = Select::new(["a", "b"]).build(
        &SelectState::new(),
        &FormContext::new(),
        Interaction::closed(),
        &PlacementOnly,
    );
    assert_eq!(select.text_content(), "- Select -");

    let custom = Select::new(["a", "b"]).placeholder("Pick").build(
        &SelectState::new(),
        &FormContext::new(),
        Interaction::closed(),
        &PlacementOnly,
    );
    assert_eq!(custom.text_content(), "Pick");
}

#[test]
fn test_select_change_updates_internal_selection() {
    let state = SelectState::new();
    let options = || vec![("us", "United States"), ("uk", "United Kingdom")];
    let build = || {
        Select::new(options()).build(
            &state,
            &FormContext::new(),
            Interaction::closed(),
            &PlacementOnly,
        )
    };

    let mut doc = Document::new();
    let root = doc.mount(&build());
    doc.fire(root, Event::Change(Value::from("uk"))).unwrap();

    let select = build();
    assert_eq!(select.attrs.value("value"), Some(&Value::from("uk")));
    assert!(select.text_content().contains("United Kingdom"));
}

#[test]
fn test_select_caller_change_handler_keeps_selection_wired() {
    let state = SelectState::new();
    let seen = Arc::new(Mutex::new(Vec::new()));
    let caller = {
        let seen = Arc::clone(&seen);
        Handler::new(move |event| {
            if let Event::Change(value) = event {
                seen.lock().unwrap().push(value.clone());
            }
        })
    };
    let select = Select::new(["a", "b"])
        .attrs(AttributeBag::new().with("on_change", caller).with("class", "compact"))
        .input_attrs(AttributeBag::new().with("class", "shadow"))
        .build(&state, &FormContext::new(), Interaction::closed(), &PlacementOnly);

    assert_eq!(select.class_name(), Some("select select--fixed compact"));
    let button = select.children.iter().find(|c| c.tag == Tag::Button).unwrap();
    assert_eq!(
        button.class_name(),
        Some("select__button select__button--default shadow")
    );

    let mut doc = Document::new();
    let root = doc.mount(&select);
    doc.fire(root, Event::Change(Value::from("b"))).unwrap();

    assert_eq!(state.controller().current(), Some(OptionKey::from("b")));
    assert_eq!(*seen.lock().unwrap(), vec![Value::from("b")]);
}

#[test]
fn test_select_clears_when_option_disappears() {
    let requests = Arc::new(Mutex::new(Vec::new()));
    let source = {
        let requests = Arc::clone(&requests);
        ExternalSelection::new(
            || Some(OptionKey::from("b")),
            move |value| requests.lock().unwrap().push(value),
        )
    };
    let state = SelectState::controlled(source);
    let cx = FormContext::new();

    let select = Select::new(["a", "b", "c"]).build(&state, &cx, Interaction::closed(), &PlacementOnly);
    assert_eq!(select.attrs.value("value"), Some(&Value::from("b")));
    assert!(requests.lock().unwrap().is_empty());

    let select = Select::new(["a", "c"]).build(&state, &cx, Interaction::closed(), &PlacementOnly);
    assert_eq!(select.attrs.value("value"), Some(&Value::Null));
    assert_eq!(select.text_content(), "- Select -");
    assert_eq!(*requests.lock().unwrap(), vec![None]);
}

#[test]
fn test_select_inherits_form_context() {
    let cx = FormContext::new()
        .disabled(true)
        .full_width(true)
        .state(ValidationState::Error)
        .id("country");

    let select = Select::new(["a"]).build(&SelectState::new(), &cx, Interaction::closed(), &PlacementOnly);

    assert_eq!(select.class_name(), Some("select select--full-width"));
    assert_eq!(select.attrs.value("disabled"), Some(&Value::Bool(true)));
    let button = select.find_by_id("country").unwrap();
    assert_eq!(button.tag, Tag::Button);
    assert_eq!(button.class_name(), Some("select__button select__button--error"));
}

#[test]
fn test_select_explicit_props_beat_context() {
    let cx = FormContext::new().disabled(true);

    let select = Select::new(["a"])
        .disabled(false)
        .id("own")
        .build(&SelectState::new(), &cx, Interaction::closed(), &PlacementOnly);

    assert_eq!(select.attrs.value("disabled"), Some(&Value::Bool(false)));
    assert!(select.find_by_id("own").is_some());
}

#[test]
fn test_select_fallback_id_is_stable_across_renders() {
    let state = SelectState::new().id_prefix("select");
    let cx = FormContext::new();
    let button_id = |elem: &Element| {
        find_class(elem, "select__button")
            .and_then(|b| b.attrs.str("id"))
            .map(str::to_owned)
    };

    let first = Select::new(["a"]).build(&state, &cx, Interaction::closed(), &PlacementOnly);
    let second = Select::new(["a"]).build(&state, &cx, Interaction::closed(), &PlacementOnly);

    let id = button_id(&first).unwrap();
    assert!(id.starts_with("select-"));
    assert_eq!(button_id(&second), Some(id));
}

#[test]
fn test_select_button_ref_fans_out() {
    let state = SelectState::new();
    let caller = NodeRef::new();
    let select = Select::new(["a"])
        .node_ref(&caller)
        .build(&state, &FormContext::new(), Interaction::closed(), &PlacementOnly);

    let mut doc = Document::new();
    let root = doc.mount(&select);
    let button = doc.children(root)[0];

    assert_eq!(caller.get(), Some(button));
    assert_eq!(state.pair().anchor().get(), Some(button));
}

#[test]
fn test_select_open_marks_selected_and_active_rows() {
    let state = SelectState::new();
    state.controller().set_selected(Some(OptionKey::from("b")));

    let select = Select::new(["a", "b", "c"])
        .render_row(|o| o.to_uppercase())
        .build(
            &state,
            &FormContext::new(),
            Interaction::open().active(2),
            &PlacementOnly,
        );

    let list = find_class(&select, "select__options").unwrap();
    assert_eq!(list.tag, Tag::Ul);
    assert_eq!(list.children.len(), 3);

    let selected: Vec<_> = list
        .children
        .iter()
        .map(|row| row.attrs.value("selected") == Some(&Value::Bool(true)))
        .collect();
    assert_eq!(selected, vec![false, true, false]);
    assert!(find_class(&list.children[1], "select__check").is_some());

    let active = find_class(list, "select__option--active").unwrap();
    assert_eq!(active.text_content(), "C");
}

// ============================================================================
// Range
// ============================================================================

#[test]
fn test_range_change_parses_integer() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let range = {
        let seen = Arc::clone(&seen);
        Range::new("Volume", 10)
            .min(0)
            .max(100)
            .on_change(move |v| seen.lock().unwrap().push(v))
            .build()
    };

    let mut doc = Document::new();
    let root = doc.mount(&range);
    let input = doc.find(root, &|attrs| attrs.str("type") == Some("range")).unwrap();

    doc.fire(input, Event::Change(Value::from("55"))).unwrap();
    doc.fire(input, Event::Change(Value::from("loud"))).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![55]);
}

#[test]
fn test_range_label_targets_input() {
    let range = Range::new("Volume", 10).class("compact").build();

    assert_eq!(range.class_name(), Some("range compact"));
    let label = &range.children[0];
    assert_eq!(label.tag, Tag::Label);
    assert_eq!(label.attrs.str("for"), Some("Volume"));
    let input = range.find_by_id("Volume").unwrap();
    assert_eq!(input.attrs.value("value"), Some(&Value::Int(10)));
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_container_ref_lands_on_outer_node() {
    let outer = NodeRef::new();
    let elem = Container::new()
        .class("page")
        .node_ref(&outer)
        .child(Element::span("body"))
        .build();

    assert_eq!(elem.class_name(), Some("container-outer page"));
    assert!(find_class(&elem, "container-inner").is_some());
    assert_eq!(elem.text_content(), "body");

    let mut doc = Document::new();
    let root = doc.mount(&elem);
    assert_eq!(outer.get(), Some(root));
}
