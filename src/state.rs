//! Reactive state store.
//!
//! [`State`] wraps a key/value record so every write goes through change
//! detection: a write that leaves the value equal (by [`Value`] equality) is
//! a no-op, a distinct-value write is stored and then fanned out
//! synchronously to every binding registered for that key, in registration
//! order, before [`State::set`] returns. There is no scheduler, no queue,
//! and no async boundary; everything runs on the caller's stack.
//!
//! ## Example
//!
//! ```
//! use serde_json::json;
//! use sprig::dom::Document;
//! use sprig::State;
//!
//! let doc = Document::new();
//! let label = doc.create_element("span").unwrap();
//!
//! let state = State::new(json!({"count": 0}).as_object().cloned().unwrap());
//! state
//! 	.bind("count", label.clone(), {
//! 		let label = label.clone();
//! 		move |value| {
//! 			label.set_text(&value.to_string());
//! 			Ok(())
//! 		}
//! 	})
//! 	.unwrap();
//! assert_eq!(label.text(), "0"); // bind fires once immediately
//!
//! state.set("count", json!(0)).unwrap(); // equal value: no update
//! state.set("count", json!(5)).unwrap();
//! assert_eq!(label.text(), "5");
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Map;

use crate::dom::Element;
use crate::error::{PageError, UpdateError};

/// Value type stored under each state key.
///
/// Re-exported from `serde_json`; the store's equality rule is this type's
/// structural equality.
pub type Value = serde_json::Value;

type UpdateFn = Rc<RefCell<dyn FnMut(&Value) -> Result<(), UpdateError>>>;

struct Binding {
	element: Element,
	update: UpdateFn,
}

struct StateInner {
	values: Map<String, Value>,
	bindings: HashMap<String, Vec<Binding>>,
}

/// A key/value store that pushes distinct-value writes to bound elements.
///
/// Cloning a `State` aliases the same record and binding registry. The store
/// is single-threaded; nothing here is `Send`.
#[derive(Clone)]
pub struct State {
	inner: Rc<RefCell<StateInner>>,
}

impl State {
	/// Creates a store from an initial snapshot.
	pub fn new(initial: Map<String, Value>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(StateInner {
				values: initial,
				bindings: HashMap::new(),
			})),
		}
	}

	/// Creates a store from a JSON object value.
	///
	/// # Errors
	///
	/// `InvalidArgument` when `initial` is not an object.
	pub fn from_object(initial: Value) -> Result<Self, PageError> {
		match initial {
			Value::Object(map) => Ok(Self::new(map)),
			other => Err(PageError::invalid_argument(format!(
				"initial state must be an object, got {other}"
			))),
		}
	}

	/// Current value under `key`; `Null` when the key has never been set.
	pub fn get(&self, key: &str) -> Value {
		self.inner
			.borrow()
			.values
			.get(key)
			.cloned()
			.unwrap_or(Value::Null)
	}

	/// Writes `value` under `key`.
	///
	/// Equal values (by the store's equality rule) are a no-op: nothing is
	/// stored and no binding fires. A distinct value is stored first, then
	/// every binding for `key` is invoked in registration order with the new
	/// value, synchronously, before this call returns. Any key may be
	/// introduced by its first write.
	///
	/// Callbacks may re-enter the store. A re-entrant write to the same key
	/// skips the callback that is mid-call performing it; that callback has
	/// already observed the value it wrote.
	///
	/// # Errors
	///
	/// `Update` when a binding callback fails. The failure aborts the
	/// remaining callbacks for this write; the stored value stays applied.
	pub fn set(&self, key: &str, value: impl Into<Value>) -> Result<(), PageError> {
		let value = value.into();
		let to_notify: Vec<UpdateFn> = {
			let mut inner = self.inner.borrow_mut();
			if inner.values.get(key) == Some(&value) {
				crate::debug_log!("state: '{key}' unchanged, skipping fan-out");
				return Ok(());
			}
			inner.values.insert(key.to_string(), value.clone());
			// Snapshot before invoking: callbacks may re-enter the store,
			// and bindings added mid-flight must not see this write.
			inner
				.bindings
				.get(key)
				.map(|bindings| {
					bindings
						.iter()
						.map(|binding| binding.update.clone())
						.collect()
				})
				.unwrap_or_default()
		};

		crate::debug_log!(
			"state: '{key}' changed, notifying {} binding(s)",
			to_notify.len()
		);
		for update in to_notify {
			// A cell that is already borrowed belongs to the callback that
			// re-entered `set` and triggered this fan-out; it has seen the
			// value it wrote, so it is skipped rather than re-entered.
			let Ok(mut update) = update.try_borrow_mut() else {
				continue;
			};
			(*update)(&value).map_err(|source| PageError::Update {
				key: key.to_string(),
				source,
			})?;
		}
		Ok(())
	}

	/// Binds `key` to an element through an update callback.
	///
	/// The binding is appended after any existing bindings for `key`, and
	/// `update` is invoked exactly once, immediately and synchronously, with
	/// the current value (`Null` for a never-written key); the initial view
	/// state never waits for a future write. Bindings are never removed.
	///
	/// # Errors
	///
	/// `Update` when the initial invocation fails. The binding stays
	/// registered either way.
	pub fn bind(
		&self,
		key: &str,
		element: Element,
		update: impl FnMut(&Value) -> Result<(), UpdateError> + 'static,
	) -> Result<(), PageError> {
		let update: UpdateFn = Rc::new(RefCell::new(update));
		let current = {
			let mut inner = self.inner.borrow_mut();
			inner.bindings.entry(key.to_string()).or_default().push(Binding {
				element,
				update: update.clone(),
			});
			inner.values.get(key).cloned().unwrap_or(Value::Null)
		};
		(update.borrow_mut())(&current).map_err(|source| PageError::Update {
			key: key.to_string(),
			source,
		})
	}

	/// Elements currently bound to `key`, in registration order.
	pub fn bound_elements(&self, key: &str) -> Vec<Element> {
		self.inner
			.borrow()
			.bindings
			.get(key)
			.map(|bindings| {
				bindings
					.iter()
					.map(|binding| binding.element.clone())
					.collect()
			})
			.unwrap_or_default()
	}
}

impl std::fmt::Debug for State {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		let inner = self.inner.borrow();
		f.debug_struct("State")
			.field("values", &inner.values)
			.field("bound_keys", &inner.bindings.keys().collect::<Vec<_>>())
			.finish()
	}
}
