//! sprig: a minimal chainable DOM helper with a synchronous reactive
//! state store.
//!
//! Two cooperating parts:
//!
//! - **Capability augmenter** ([`augment`] / [`Augmented`]): wraps an
//!   element handle in a decorator exposing attribute setters, class
//!   manipulation, event binding (direct and delegated), style assignment,
//!   and child insertion. Every method returns the decorator, so calls
//!   chain.
//! - **Reactive state store** ([`State`]): a key/value record whose writes
//!   go through change detection; a distinct-value write synchronously
//!   notifies every element bound to that key, in registration order,
//!   before the write returns. No scheduler, no queue, no async boundary.
//!
//! The document tree itself is modeled in-memory ([`dom`]), which keeps the
//! whole crate testable without a host browser. Root registration and
//! element creation live on an explicit [`Mount`] context; there is no
//! process-wide mutable root.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sprig::prelude::*;
//!
//! let doc = Document::new();
//! let app = doc.create_element("div").unwrap();
//! doc.root().append_child(&app).unwrap();
//!
//! let mount = Mount::new(&doc);
//! mount.register_root(&app).unwrap();
//!
//! let counter = mount
//! 	.create("span", Props::default(), Attach::Root)
//! 	.unwrap()
//! 	.add_class("counter")
//! 	.into_element();
//!
//! let state = State::from_object(json!({"count": 0})).unwrap();
//! state
//! 	.bind("count", counter.clone(), {
//! 		let counter = counter.clone();
//! 		move |value| {
//! 			counter.set_text(&value.to_string());
//! 			Ok(())
//! 		}
//! 	})
//! 	.unwrap();
//! assert_eq!(counter.text(), "0");
//!
//! state.set("count", json!(5)).unwrap();
//! assert_eq!(counter.text(), "5");
//! ```
//!
//! This is deliberately not a component framework: no virtual DOM, no
//! diffing, no lifecycle hooks, no templating, and no router. Everything is
//! single-threaded and synchronous; handles are `Rc`-based and nothing here
//! is `Send`.

#![warn(missing_docs)]

pub mod callback;
pub mod dom;
pub mod element;
pub mod error;
pub mod logging;
pub mod mount;
pub mod prelude;
pub mod select;
pub mod state;

pub use callback::Callback;
pub use dom::{Document, Element, Event};
pub use element::{Augmented, augment};
pub use error::{PageError, UpdateError};
pub use mount::{Attach, Mount, Props};
pub use state::{State, Value};
