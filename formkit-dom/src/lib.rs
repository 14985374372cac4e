pub mod bag;
pub mod class;
pub mod document;
pub mod element;
pub mod error;
pub mod node;
pub mod refs;
pub mod value;

pub use bag::{AttrValue, AttributeBag, CompositionPolicy, REF_KEY, compose, extend};
pub use class::classes;
pub use document::Document;
pub use element::Element;
pub use error::DomError;
pub use node::{NodeHandle, NodeId, Tag};
pub use refs::{NodeRef, RefSink, merge_refs};
pub use value::{Event, Handler, Value};
