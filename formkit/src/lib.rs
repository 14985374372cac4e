pub mod config;
pub mod context;
pub mod dispatch;
pub mod error;
pub mod positioning;
pub mod resolve;
pub mod selection;
pub mod state;
pub mod widgets;

pub use formkit_dom as dom;

pub mod prelude {
    pub use crate::config::ControlsConfig;
    pub use crate::context::{FormContext, ValidationState};
    pub use crate::dispatch::{DispatchInput, Role, dispatch};
    pub use crate::error::ControlError;
    pub use crate::positioning::{FloatingPair, Offset, Placement, Positioned, Positioner};
    pub use crate::resolve::{FallbackId, FormInputProps, ResolvedFormInput, resolve};
    pub use crate::selection::{
        ExternalSelection, OptionKey, Ownership, SelectOption, Selection, SelectionController,
        SelectionSource,
    };
    pub use crate::state::State;
    pub use crate::widgets::{
        Button, ButtonVariant, Container, ContainerInner, ContainerOuter, Interaction, Menu,
        MenuDivider, MenuEntry, MenuItem, MenuItemVariant, MenuState, Range, Select, SelectState,
    };

    pub use formkit_dom::{
        AttributeBag, Document, Element, Event, Handler, NodeHandle, NodeRef, RefSink, Tag, Value,
        classes, compose, merge_refs,
    };
}
