//! Unified prelude for simplified imports.
//!
//! ```
//! use sprig::prelude::*;
//!
//! let doc = Document::new();
//! let el = doc.create_element("div").unwrap();
//! let _ = augment(el).add_class("ready");
//! ```

pub use crate::callback::Callback;
pub use crate::dom::{Document, Element, Event, IntoEventHandler, WeakElement};
pub use crate::element::{Augmented, augment};
pub use crate::error::{PageError, UpdateError};
pub use crate::mount::{Attach, Mount, Props};
pub use crate::select::{by_class, by_id, by_name, by_tag, select, select_all};
pub use crate::state::{State, Value};
