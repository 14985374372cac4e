//! Control Gallery
//!
//! Mounts each control into an in-memory document and drives it with a few
//! events:
//! - A select inside a disabled form scope, then re-enabled by a nested scope
//! - A menu whose trigger is observed by the caller and positioned against
//! - A range slider fed by change events
//!
//! Logs go to `gallery.log`.

use std::fs::File;
use std::sync::{Arc, Mutex};

use formkit::positioning::PlacementOnly;
use formkit::prelude::*;
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

fn render_select(state: &SelectState, cx: &FormContext, open: bool) -> Element {
    let interaction = if open { Interaction::open() } else { Interaction::closed() };
    Select::new(vec![("low", "Low"), ("medium", "Medium"), ("high", "High")])
        .placeholder("Priority")
        .build(state, cx, interaction, &PlacementOnly)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize file logging
    if let Ok(log_file) = File::create("gallery.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file);
    }

    let mut doc = Document::new();

    // ------------------------------------------------------------------------
    // Select
    // ------------------------------------------------------------------------

    let form = FormContext::new().disabled(true);
    let section = form.nested(&FormContext::new().disabled(false));
    let priority = SelectState::new();

    let root = doc.mount(&render_select(&priority, &section, false));
    doc.fire(root, Event::Change(Value::from("high")))?;
    let root = doc.replace(root, &render_select(&priority, &section, true))?;
    let root = doc.replace(root, &render_select(&priority, &section, true))?;
    println!(
        "select: {}",
        doc.find(root, &|attrs| attrs.str("class") == Some("select__value"))
            .and_then(|node| doc.text(node))
            .unwrap_or_default()
    );

    priority.controller().set_selected(Some("urgent".into()));
    let root = doc.replace(root, &render_select(&priority, &section, false))?;
    println!("select after stale value: {:?}", priority.controller().current());
    doc.unmount(root)?;

    // ------------------------------------------------------------------------
    // Menu
    // ------------------------------------------------------------------------

    let trigger = NodeRef::new();
    let menu_state = MenuState::new();
    let signed_out = Arc::new(Mutex::new(false));
    let sign_out = {
        let signed_out = Arc::clone(&signed_out);
        Handler::new(move |_| *signed_out.lock().unwrap_or_else(|p| p.into_inner()) = true)
    };
    let render_menu = |interaction| {
        Menu::new()
            .trigger(Element::span("Account"))
            .node_ref(&trigger)
            .item(MenuItem::new("Profile").href("/profile"))
            .divider()
            .item(MenuItem::new("Sign out").on_click(sign_out.clone()))
            .build(&menu_state, interaction, &PlacementOnly)
    };

    let root = doc.mount(&render_menu(Interaction::open()));
    let root = doc.replace(root, &render_menu(Interaction::open().active(1)))?;
    if let Some(button) = doc.find(root, &|attrs| attrs.str("class") == Some("menu-item menu-item--active")) {
        doc.fire(button, Event::Click)?;
    }
    info!("menu trigger mounted: {}", trigger.is_mounted());
    println!(
        "menu: trigger {:?}, signed out {}",
        trigger.get(),
        *signed_out.lock().unwrap_or_else(|p| p.into_inner())
    );
    doc.unmount(root)?;

    // ------------------------------------------------------------------------
    // Range
    // ------------------------------------------------------------------------

    let volume = State::new(30i64);
    let range = {
        let volume = volume.clone();
        Range::new("Volume", volume.get())
            .min(0)
            .max(100)
            .on_change(move |v| volume.set(v))
            .build()
    };
    let root = doc.mount(&range);
    if let Some(input) = doc.find(root, &|attrs| attrs.str("type") == Some("range")) {
        doc.fire(input, Event::Change(Value::from("72")))?;
    }
    println!("range: {}", volume.get());

    let page = Container::new()
        .child(Button::new().label("Done").variant(ButtonVariant::Secondary).build())
        .build();
    let root = doc.replace(root, &page)?;
    println!("container nodes: {}", doc.children(root).len());

    Ok(())
}
