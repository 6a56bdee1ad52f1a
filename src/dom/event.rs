//! Events and event handlers.
//!
//! Dispatch is synchronous and bubbles from the originating element up
//! through its ancestors (see [`crate::dom::Element::emit`]). There is no
//! capture phase and no `stopPropagation`; the library's delegation support
//! filters at the listening element instead.

use std::cell::RefCell;
use std::rc::Rc;

use crate::callback::Callback;
use crate::dom::node::Element;

/// A dispatched event.
#[derive(Clone)]
pub struct Event {
	event_type: String,
	target: Element,
}

impl Event {
	pub(crate) fn new(event_type: &str, target: Element) -> Self {
		Self {
			event_type: event_type.to_string(),
			target,
		}
	}

	/// Event type name, e.g. `"click"`.
	pub fn event_type(&self) -> &str {
		&self.event_type
	}

	/// Element the event originated at.
	pub fn target(&self) -> &Element {
		&self.target
	}
}

impl std::fmt::Debug for Event {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Event")
			.field("event_type", &self.event_type)
			.field("target", &self.target)
			.finish()
	}
}

/// Stored form of an event handler.
///
/// Handlers are `FnMut` so they can carry mutable captured state; `Rc` keeps
/// them cloneable for snapshot-then-invoke dispatch.
pub type EventHandler = Rc<RefCell<dyn FnMut(&Event)>>;

pub(crate) struct Listener {
	pub(crate) event_type: String,
	pub(crate) handler: EventHandler,
}

/// Conversion into the stored event-handler type.
///
/// Implemented for closures and for [`Callback`], so subscription methods
/// accept either:
///
/// ```
/// use sprig::dom::Document;
/// use sprig::{Callback, augment};
///
/// let doc = Document::new();
/// let el = doc.create_element("button").unwrap();
/// let via_callback = Callback::new(|_event| {});
/// augment(el)
/// 	.on("click", |_event: &sprig::Event| {})
/// 	.on("focus", via_callback);
/// ```
pub trait IntoEventHandler {
	/// Converts self into an [`EventHandler`].
	fn into_event_handler(self) -> EventHandler;
}

impl<F> IntoEventHandler for F
where
	F: FnMut(&Event) + 'static,
{
	fn into_event_handler(self) -> EventHandler {
		Rc::new(RefCell::new(self))
	}
}

impl IntoEventHandler for Callback<Event, ()> {
	fn into_event_handler(self) -> EventHandler {
		Rc::new(RefCell::new(move |event: &Event| self.call(event.clone())))
	}
}

impl IntoEventHandler for EventHandler {
	fn into_event_handler(self) -> EventHandler {
		self
	}
}
