//! In-memory document tree: element handles, events, selectors, and the
//! settable-attribute capability table.
//!
//! The tree is single-threaded by design: handles are `Rc`-based and all
//! mutation happens on the caller's stack. Everything the augmenter and the
//! state store need from a host document lives here.

pub mod capability;
mod document;
mod event;
mod node;
pub mod selector;

pub use document::Document;
pub use event::{Event, EventHandler, IntoEventHandler};
pub use node::{Element, WeakElement};
pub use selector::Selector;
