//! Capability augmenter: chainable element decorator.
//!
//! [`augment`] wraps an [`Element`] in an [`Augmented`] decorator exposing
//! attribute setters, class manipulation, event binding (direct and
//! delegated), style assignment, and child insertion. Every method returns
//! the decorator so calls chain; the element type itself is never mutated,
//! so augmenting the same handle twice is harmless by construction.
//!
//! ## Example
//!
//! ```
//! use sprig::dom::Document;
//! use sprig::augment;
//!
//! let doc = Document::new();
//! let link = doc.create_element("a").unwrap();
//! let link = augment(link)
//! 	.id("home")
//! 	.href("/")
//! 	.text("Home")
//! 	.add_class("nav-link")
//! 	.into_element();
//! assert_eq!(link.attribute("href").as_deref(), Some("/"));
//! ```

use crate::dom::selector::Selector;
use crate::dom::{Element, Event, IntoEventHandler, capability};
use crate::error::PageError;

/// Wraps an element in the chainable decorator.
pub fn augment(element: Element) -> Augmented {
	Augmented { element }
}

/// Chainable decorator over an [`Element`].
///
/// Holds the handle rather than patching methods onto it; drop the wrapper
/// (or call [`Augmented::into_element`]) to get the plain handle back.
#[derive(Clone, Debug)]
pub struct Augmented {
	element: Element,
}

/// Macro for defining chainable attribute setters from the capability table.
macro_rules! define_setter {
	($(#[$meta:meta])* $name:ident, $attr:literal) => {
		$(#[$meta])*
		pub fn $name(self, value: &str) -> Self {
			self.element.set_attribute($attr, value);
			self
		}
	};
}

impl Augmented {
	/// Borrow the wrapped element.
	pub fn element(&self) -> &Element {
		&self.element
	}

	/// Unwraps back into the plain element handle.
	pub fn into_element(self) -> Element {
		self.element
	}

	// ------------------------------------------------------------------
	// Attribute setters
	// ------------------------------------------------------------------

	define_setter!(
		/// Sets the `id` attribute.
		id, "id"
	);

	define_setter!(
		/// Sets the `class` attribute wholesale. Use space-separated values
		/// for multiple classes; for incremental changes prefer
		/// [`Augmented::add_class`] and friends.
		class_name, "class"
	);

	define_setter!(
		/// Sets the `title` attribute.
		title, "title"
	);

	define_setter!(
		/// Sets the `name` attribute.
		name, "name"
	);

	define_setter!(
		/// Sets the `value` attribute.
		value, "value"
	);

	define_setter!(
		/// Sets the `href` attribute.
		href, "href"
	);

	define_setter!(
		/// Sets the `src` attribute.
		src, "src"
	);

	define_setter!(
		/// Sets the `alt` attribute.
		alt, "alt"
	);

	define_setter!(
		/// Sets the `placeholder` attribute.
		placeholder, "placeholder"
	);

	define_setter!(
		/// Sets the `type` attribute (named to avoid the keyword).
		input_type, "type"
	);

	/// Sets a custom attribute without capability validation.
	///
	/// Escape hatch for anything the table does not list.
	pub fn attr(self, name: &str, value: &str) -> Self {
		self.element.set_attribute(name, value);
		self
	}

	/// Sets an attribute by dynamic name, validated against the capability
	/// table for this element's tag.
	///
	/// # Errors
	///
	/// `InvalidArgument` if the tag does not support the attribute.
	pub fn set(self, name: &str, value: &str) -> Result<Self, PageError> {
		let tag = self.element.tag();
		if !capability::is_settable(&tag, name) {
			return Err(PageError::invalid_argument(format!(
				"attribute '{name}' is not settable on <{tag}>"
			)));
		}
		self.element.set_attribute(name, value);
		Ok(self)
	}

	/// Replaces the element's text content.
	pub fn text(self, text: &str) -> Self {
		self.element.set_text(text);
		self
	}

	/// Assigns the whole inline style text.
	pub fn style(self, css_text: &str) -> Self {
		self.element.set_style(css_text);
		self
	}

	// ------------------------------------------------------------------
	// Children
	// ------------------------------------------------------------------

	/// Appends a single child.
	///
	/// An append that would create a cycle is ignored, keeping the chain
	/// infallible; use [`Element::append_child`] directly to observe the
	/// error.
	pub fn child(self, child: Element) -> Self {
		let _ = self.element.append_child(&child);
		self
	}

	/// Appends children in iteration order.
	pub fn children(self, children: impl IntoIterator<Item = Element>) -> Self {
		children.into_iter().fold(self, Self::child)
	}

	// ------------------------------------------------------------------
	// Events
	// ------------------------------------------------------------------

	/// Subscribes a handler to `event_type` events on this element.
	///
	/// The handler also fires for events bubbling up from descendants; use
	/// [`Augmented::delegate`] to filter by origin.
	pub fn on(self, event_type: &str, handler: impl IntoEventHandler) -> Self {
		self.element
			.add_event_listener(event_type, handler.into_event_handler());
		self
	}

	/// Delegated event subscription: listens at this element, but invokes
	/// `handler` only when the event's origin (or one of its ancestors up to
	/// this element) matches `selector`. The handler receives the event and
	/// the matching element.
	///
	/// # Errors
	///
	/// `InvalidArgument` if the selector does not parse.
	pub fn delegate(
		self,
		event_type: &str,
		selector: &str,
		mut handler: impl FnMut(&Event, &Element) + 'static,
	) -> Result<Self, PageError> {
		let selector = Selector::parse(selector)?;
		// Weak capture: the listener lives on the element it watches.
		let owner = self.element.downgrade();
		let listener = move |event: &Event| {
			let Some(owner) = owner.upgrade() else {
				return;
			};
			if let Some(matching) = event.target().closest(&selector) {
				if owner.contains(&matching) {
					handler(event, &matching);
				}
			}
		};
		self.element
			.add_event_listener(event_type, listener.into_event_handler());
		Ok(self)
	}

	// ------------------------------------------------------------------
	// Class manipulation
	// ------------------------------------------------------------------

	/// Adds a class name if not already present.
	pub fn add_class(self, class: &str) -> Self {
		self.element.add_class(class);
		self
	}

	/// Removes a class name if present.
	pub fn remove_class(self, class: &str) -> Self {
		self.element.remove_class(class);
		self
	}

	/// Toggles membership of `class`: removes it when present, adds it when
	/// absent. Toggling twice restores the original membership.
	///
	/// # Errors
	///
	/// `InvalidArgument` when `class` is empty.
	pub fn toggle_class(self, class: &str) -> Result<Self, PageError> {
		if class.is_empty() {
			return Err(PageError::invalid_argument(
				"toggle_class: class name must not be empty",
			));
		}
		if self.element.has_class(class) {
			self.element.remove_class(class);
		} else {
			self.element.add_class(class);
		}
		Ok(self)
	}
}

impl From<Element> for Augmented {
	fn from(element: Element) -> Self {
		augment(element)
	}
}
