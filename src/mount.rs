//! Root registration and element creation.
//!
//! [`Mount`] is an explicit context object owned by the caller: it knows the
//! document and, once registered, the root container that serves as the
//! default attach point for [`Mount::create`]. Keeping this state on a value
//! rather than in a process-wide global means unrelated call sites cannot
//! couple through a hidden root.

use std::cell::RefCell;

use crate::callback::Callback;
use crate::dom::{Document, Element, Event};
use crate::element::{Augmented, augment};
use crate::error::PageError;

/// Where [`Mount::create`] attaches the new element.
#[derive(Clone, Debug, Default)]
pub enum Attach {
	/// Attach under the registered root (the default).
	#[default]
	Root,
	/// Leave the element parentless.
	Detached,
	/// Attach under a specific element.
	To(Element),
}

/// Initial properties applied to a created element.
///
/// All fields are optional; `Props::default()` creates a bare element.
#[derive(Clone, Debug, Default)]
pub struct Props {
	/// `id` attribute.
	pub id: Option<String>,
	/// `class` attribute, space-separated.
	pub class_name: Option<String>,
	/// Children appended in order.
	pub children: Vec<Element>,
	/// Click handler subscribed on the new element.
	pub on_click: Option<Callback<Event>>,
}

/// Creation context: a document plus the registered root container.
pub struct Mount {
	document: Document,
	root: RefCell<Option<Element>>,
}

impl Mount {
	/// Creates a mount for `document` with no root registered yet.
	pub fn new(document: &Document) -> Self {
		Self {
			document: document.clone(),
			root: RefCell::new(None),
		}
	}

	/// Registers the root container used as the default attach point.
	///
	/// Re-registering replaces the previous root.
	///
	/// # Errors
	///
	/// `InvalidArgument` when `element` is not attached to this mount's
	/// document tree; a detached or foreign handle cannot serve as the
	/// default attach point.
	pub fn register_root(&self, element: &Element) -> Result<(), PageError> {
		if !self.document.owns(element) {
			return Err(PageError::invalid_argument(
				"register_root: element is not attached to this document",
			));
		}
		crate::info_log!("mount: root registered on <{}>", element.tag());
		*self.root.borrow_mut() = Some(element.clone());
		Ok(())
	}

	/// Currently registered root, if any.
	pub fn root(&self) -> Option<Element> {
		self.root.borrow().clone()
	}

	/// Creates an element, attaches it per `attach`, and applies `props`.
	///
	/// # Errors
	///
	/// `IllegalState` when no root has been registered, checked before
	/// anything else, even for [`Attach::Detached`]. `InvalidArgument` for a
	/// bad tag name or an attach target that would create a cycle.
	pub fn create(&self, tag: &str, props: Props, attach: Attach) -> Result<Augmented, PageError> {
		let root = self.root().ok_or_else(|| {
			PageError::illegal_state("create: register the root container first")
		})?;

		let element = self.document.create_element(tag)?;
		match attach {
			Attach::Root => root.append_child(&element)?,
			Attach::To(target) => target.append_child(&element)?,
			Attach::Detached => {}
		}

		let mut augmented = augment(element);
		if let Some(id) = props.id {
			augmented = augmented.id(&id);
		}
		if let Some(class_name) = props.class_name {
			augmented = augmented.class_name(&class_name);
		}
		augmented = augmented.children(props.children);
		if let Some(on_click) = props.on_click {
			augmented = augmented.on("click", on_click);
		}
		crate::debug_log!("mount: created <{tag}>");
		Ok(augmented)
	}
}

impl std::fmt::Debug for Mount {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Mount")
			.field("root", &self.root.borrow())
			.finish()
	}
}
