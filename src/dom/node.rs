//! Element handles for the in-memory document tree.
//!
//! An [`Element`] is a cheap, cloneable handle (`Rc<RefCell<_>>`) to one
//! node. Clones alias the same node; identity is pointer identity, never
//! structural, which is what the augmenter and the event system rely on.

use std::cell::RefCell;
use std::collections::BTreeMap;
use std::fmt;
use std::rc::{Rc, Weak};

use crate::dom::event::{Event, EventHandler, Listener};
use crate::dom::selector::Selector;
use crate::error::PageError;

pub(crate) struct NodeData {
	tag: String,
	attributes: BTreeMap<String, String>,
	text: String,
	children: Vec<Element>,
	parent: Option<Weak<RefCell<NodeData>>>,
	listeners: Vec<Listener>,
}

/// A handle to a live node in the document tree.
///
/// Cloning an `Element` does not copy the node; both handles point at the
/// same underlying data. Compare handles with [`Element::ptr_eq`].
#[derive(Clone)]
pub struct Element {
	inner: Rc<RefCell<NodeData>>,
}

/// A non-owning handle to an element, used where a strong reference would
/// create a cycle (event listeners capturing the element they live on).
#[derive(Clone)]
pub struct WeakElement {
	inner: Weak<RefCell<NodeData>>,
}

impl WeakElement {
	/// Upgrades back to a strong handle if the node is still alive.
	pub fn upgrade(&self) -> Option<Element> {
		self.inner.upgrade().map(|inner| Element { inner })
	}
}

impl Element {
	/// Creates a detached element with the given tag name.
	///
	/// Prefer [`crate::dom::Document::create_element`], which validates the
	/// tag name.
	pub(crate) fn new(tag: impl Into<String>) -> Self {
		Self {
			inner: Rc::new(RefCell::new(NodeData {
				tag: tag.into(),
				attributes: BTreeMap::new(),
				text: String::new(),
				children: Vec::new(),
				parent: None,
				listeners: Vec::new(),
			})),
		}
	}

	/// Tag name this element was created with.
	pub fn tag(&self) -> String {
		self.inner.borrow().tag.clone()
	}

	/// Whether two handles point at the same node.
	pub fn ptr_eq(&self, other: &Element) -> bool {
		Rc::ptr_eq(&self.inner, &other.inner)
	}

	/// Downgrades to a non-owning handle.
	pub fn downgrade(&self) -> WeakElement {
		WeakElement {
			inner: Rc::downgrade(&self.inner),
		}
	}

	// ------------------------------------------------------------------
	// Attributes
	// ------------------------------------------------------------------

	/// Current value of an attribute, if set.
	pub fn attribute(&self, name: &str) -> Option<String> {
		self.inner.borrow().attributes.get(name).cloned()
	}

	/// Sets an attribute, replacing any previous value.
	pub fn set_attribute(&self, name: &str, value: &str) {
		self.inner
			.borrow_mut()
			.attributes
			.insert(name.to_string(), value.to_string());
	}

	/// Removes an attribute if present.
	pub fn remove_attribute(&self, name: &str) {
		self.inner.borrow_mut().attributes.remove(name);
	}

	/// Assigns the whole inline style text.
	pub fn set_style(&self, css_text: &str) {
		self.set_attribute("style", css_text);
	}

	// ------------------------------------------------------------------
	// Class list (stored as the `class` attribute)
	// ------------------------------------------------------------------

	/// Class names currently on the element, in order.
	pub fn classes(&self) -> Vec<String> {
		self.attribute("class")
			.map(|value| value.split_whitespace().map(str::to_string).collect())
			.unwrap_or_default()
	}

	/// Whether the class list contains `name`.
	pub fn has_class(&self, name: &str) -> bool {
		self.classes().iter().any(|class| class == name)
	}

	/// Adds a class name if not already present.
	pub fn add_class(&self, name: &str) {
		if name.is_empty() || self.has_class(name) {
			return;
		}
		let mut classes = self.classes();
		classes.push(name.to_string());
		self.set_attribute("class", &classes.join(" "));
	}

	/// Removes a class name if present.
	pub fn remove_class(&self, name: &str) {
		if !self.has_class(name) {
			return;
		}
		let classes: Vec<String> = self
			.classes()
			.into_iter()
			.filter(|class| class != name)
			.collect();
		self.set_attribute("class", &classes.join(" "));
	}

	// ------------------------------------------------------------------
	// Text content
	// ------------------------------------------------------------------

	/// Text content of this node.
	pub fn text(&self) -> String {
		self.inner.borrow().text.clone()
	}

	/// Replaces the text content. Like the host `textContent` setter this
	/// also drops all children.
	pub fn set_text(&self, text: &str) {
		let dropped = {
			let mut data = self.inner.borrow_mut();
			data.text = text.to_string();
			std::mem::take(&mut data.children)
		};
		for child in dropped {
			child.inner.borrow_mut().parent = None;
		}
	}

	// ------------------------------------------------------------------
	// Tree structure
	// ------------------------------------------------------------------

	/// Parent element, if attached.
	pub fn parent(&self) -> Option<Element> {
		let weak = self.inner.borrow().parent.clone()?;
		weak.upgrade().map(|inner| Element { inner })
	}

	/// Snapshot of the current children, in order.
	pub fn children(&self) -> Vec<Element> {
		self.inner.borrow().children.clone()
	}

	/// Whether `other` is this element or a descendant of it.
	pub fn contains(&self, other: &Element) -> bool {
		let mut current = Some(other.clone());
		while let Some(element) = current {
			if element.ptr_eq(self) {
				return true;
			}
			current = element.parent();
		}
		false
	}

	/// Appends `child` as the last child, re-parenting it if it was
	/// attached elsewhere.
	///
	/// # Errors
	///
	/// `InvalidArgument` if the append would create a cycle (the child is
	/// this element or one of its ancestors).
	pub fn append_child(&self, child: &Element) -> Result<(), PageError> {
		if child.contains(self) {
			return Err(PageError::invalid_argument(
				"cannot attach an element inside itself",
			));
		}
		child.detach();
		child.inner.borrow_mut().parent = Some(Rc::downgrade(&self.inner));
		self.inner.borrow_mut().children.push(child.clone());
		Ok(())
	}

	/// Detaches this element from its parent, if any.
	pub fn detach(&self) {
		if let Some(parent) = self.parent() {
			parent
				.inner
				.borrow_mut()
				.children
				.retain(|sibling| !sibling.ptr_eq(self));
		}
		self.inner.borrow_mut().parent = None;
	}

	// ------------------------------------------------------------------
	// Selector matching
	// ------------------------------------------------------------------

	/// Whether this element matches a parsed selector.
	pub fn matches_selector(&self, selector: &Selector) -> bool {
		selector.matches(self)
	}

	/// Nearest ancestor-or-self matching `selector`, walking up the tree.
	pub fn closest(&self, selector: &Selector) -> Option<Element> {
		let mut current = Some(self.clone());
		while let Some(element) = current {
			if selector.matches(&element) {
				return Some(element);
			}
			current = element.parent();
		}
		None
	}

	// ------------------------------------------------------------------
	// Events
	// ------------------------------------------------------------------

	/// Registers a listener for `event_type` on this element.
	pub fn add_event_listener(&self, event_type: &str, handler: EventHandler) {
		self.inner.borrow_mut().listeners.push(Listener {
			event_type: event_type.to_string(),
			handler,
		});
	}

	/// Dispatches an event of `event_type` originating at this element.
	///
	/// The event bubbles: listeners fire on this element first, then on each
	/// ancestor up to the root, in registration order at every node.
	/// Listeners added during dispatch do not see the in-flight event. A
	/// listener that re-enters `emit` and reaches itself again is skipped for
	/// the nested dispatch; it is already running.
	pub fn emit(&self, event_type: &str) {
		let event = Event::new(event_type, self.clone());
		let mut current = Some(self.clone());
		while let Some(element) = current {
			let handlers: Vec<EventHandler> = element
				.inner
				.borrow()
				.listeners
				.iter()
				.filter(|listener| listener.event_type == event_type)
				.map(|listener| listener.handler.clone())
				.collect();
			for handler in handlers {
				// an already-borrowed cell is this handler mid-call on an
				// outer dispatch that re-entered `emit`
				if let Ok(mut handler) = handler.try_borrow_mut() {
					(*handler)(&event);
				}
			}
			current = element.parent();
		}
	}

	/// Pre-order walk over this element and all descendants.
	pub(crate) fn walk(&self, visit: &mut impl FnMut(&Element)) {
		visit(self);
		for child in self.children() {
			child.walk(visit);
		}
	}
}

impl fmt::Debug for Element {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let data = self.inner.borrow();
		f.debug_struct("Element")
			.field("tag", &data.tag)
			.field("attributes", &data.attributes)
			.field("children", &data.children.len())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_clone_aliases_same_node() {
		let el = Element::new("div");
		let alias = el.clone();
		alias.set_attribute("id", "a");
		assert_eq!(el.attribute("id").as_deref(), Some("a"));
		assert!(el.ptr_eq(&alias));
	}

	#[test]
	fn test_append_reparents() {
		let first = Element::new("div");
		let second = Element::new("div");
		let child = Element::new("span");

		first.append_child(&child).unwrap();
		assert_eq!(first.children().len(), 1);

		second.append_child(&child).unwrap();
		assert_eq!(first.children().len(), 0);
		assert!(child.parent().unwrap().ptr_eq(&second));
	}

	#[test]
	fn test_append_rejects_cycles() {
		let outer = Element::new("div");
		let inner = Element::new("div");
		outer.append_child(&inner).unwrap();

		assert!(matches!(
			inner.append_child(&outer),
			Err(PageError::InvalidArgument(_))
		));
		assert!(matches!(
			outer.append_child(&outer),
			Err(PageError::InvalidArgument(_))
		));
	}

	#[test]
	fn test_contains_includes_self_and_descendants() {
		let root = Element::new("div");
		let mid = Element::new("ul");
		let leaf = Element::new("li");
		root.append_child(&mid).unwrap();
		mid.append_child(&leaf).unwrap();

		assert!(root.contains(&root));
		assert!(root.contains(&leaf));
		assert!(!leaf.contains(&root));
	}

	#[test]
	fn test_class_list_round_trip() {
		let el = Element::new("div");
		el.add_class("a");
		el.add_class("b");
		el.add_class("a"); // duplicate, ignored
		assert_eq!(el.classes(), vec!["a", "b"]);

		el.remove_class("a");
		assert_eq!(el.classes(), vec!["b"]);
		assert!(!el.has_class("a"));
	}

	#[test]
	fn test_set_text_drops_children() {
		let el = Element::new("div");
		let child = Element::new("span");
		el.append_child(&child).unwrap();

		el.set_text("hello");
		assert_eq!(el.text(), "hello");
		assert!(el.children().is_empty());
		assert!(child.parent().is_none());
	}
}
