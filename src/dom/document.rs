//! Document: tree root, element creation, and query operations.

use crate::dom::node::Element;
use crate::dom::selector::Selector;
use crate::error::PageError;

/// An owned document tree.
///
/// Unlike a browser there is no ambient global document; callers create one
/// and pass it (or a [`crate::Mount`] built on it) where needed. Cloning a
/// `Document` aliases the same tree.
#[derive(Clone, Debug)]
pub struct Document {
	root: Element,
}

impl Document {
	/// Creates an empty document.
	pub fn new() -> Self {
		Self {
			root: Element::new("#document"),
		}
	}

	/// The document root node. Application containers attach under it.
	pub fn root(&self) -> &Element {
		&self.root
	}

	/// Creates a detached element.
	///
	/// # Errors
	///
	/// `InvalidArgument` for an empty or malformed tag name.
	pub fn create_element(&self, tag: &str) -> Result<Element, PageError> {
		if tag.is_empty() {
			return Err(PageError::invalid_argument("tag name must not be empty"));
		}
		if !tag
			.chars()
			.all(|c| c.is_ascii_alphanumeric() || c == '-')
		{
			return Err(PageError::invalid_argument(format!(
				"invalid tag name '{tag}'"
			)));
		}
		Ok(Element::new(tag.to_ascii_lowercase()))
	}

	/// Whether `element` is attached somewhere in this document's tree.
	pub fn owns(&self, element: &Element) -> bool {
		self.root.contains(element)
	}

	/// First element with the given `id` attribute, in document order.
	pub fn get_element_by_id(&self, id: &str) -> Option<Element> {
		self.find_first(|element| element.attribute("id").as_deref() == Some(id))
	}

	/// All elements with the given `name` attribute, in document order.
	pub fn get_elements_by_name(&self, name: &str) -> Vec<Element> {
		self.find_all(|element| element.attribute("name").as_deref() == Some(name))
	}

	/// All elements with the given tag, in document order.
	pub fn get_elements_by_tag(&self, tag: &str) -> Vec<Element> {
		self.find_all(|element| element.tag().eq_ignore_ascii_case(tag))
	}

	/// All elements carrying the given class, in document order.
	pub fn get_elements_by_class(&self, class: &str) -> Vec<Element> {
		self.find_all(|element| element.has_class(class))
	}

	/// First element matching `selector`, in document order.
	///
	/// # Errors
	///
	/// `InvalidArgument` if the selector does not parse.
	pub fn query_selector(&self, selector: &str) -> Result<Option<Element>, PageError> {
		let selector = Selector::parse(selector)?;
		Ok(self.find_first(|element| selector.matches(element)))
	}

	/// All elements matching `selector`, in document order.
	///
	/// # Errors
	///
	/// `InvalidArgument` if the selector does not parse.
	pub fn query_selector_all(&self, selector: &str) -> Result<Vec<Element>, PageError> {
		let selector = Selector::parse(selector)?;
		Ok(self.find_all(|element| selector.matches(element)))
	}

	fn find_first(&self, mut predicate: impl FnMut(&Element) -> bool) -> Option<Element> {
		let mut found = None;
		self.root.walk(&mut |element| {
			if found.is_none() && !element.ptr_eq(&self.root) && predicate(element) {
				found = Some(element.clone());
			}
		});
		found
	}

	fn find_all(&self, mut predicate: impl FnMut(&Element) -> bool) -> Vec<Element> {
		let mut found = Vec::new();
		self.root.walk(&mut |element| {
			if !element.ptr_eq(&self.root) && predicate(element) {
				found.push(element.clone());
			}
		});
		found
	}
}

impl Default for Document {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> (Document, Element, Element, Element) {
		let doc = Document::new();
		let container = doc.create_element("div").unwrap();
		container.set_attribute("id", "app");
		doc.root().append_child(&container).unwrap();

		let first = doc.create_element("li").unwrap();
		first.add_class("item");
		let second = doc.create_element("li").unwrap();
		second.add_class("item");
		second.set_attribute("name", "pick");
		container.append_child(&first).unwrap();
		container.append_child(&second).unwrap();

		(doc, container, first, second)
	}

	#[test]
	fn test_create_element_validates_tag() {
		let doc = Document::new();
		assert!(doc.create_element("div").is_ok());
		assert!(matches!(
			doc.create_element(""),
			Err(PageError::InvalidArgument(_))
		));
		assert!(matches!(
			doc.create_element("no spaces"),
			Err(PageError::InvalidArgument(_))
		));
	}

	#[test]
	fn test_get_element_by_id() {
		let (doc, container, ..) = sample();
		assert!(doc.get_element_by_id("app").unwrap().ptr_eq(&container));
		assert!(doc.get_element_by_id("missing").is_none());
	}

	#[test]
	fn test_queries_in_document_order() {
		let (doc, _, first, second) = sample();
		let items = doc.get_elements_by_class("item");
		assert_eq!(items.len(), 2);
		assert!(items[0].ptr_eq(&first));
		assert!(items[1].ptr_eq(&second));

		assert_eq!(doc.get_elements_by_tag("li").len(), 2);
		assert_eq!(doc.get_elements_by_name("pick").len(), 1);
	}

	#[test]
	fn test_query_selector() {
		let (doc, _, first, _) = sample();
		let hit = doc.query_selector("li.item").unwrap().unwrap();
		assert!(hit.ptr_eq(&first));
		assert!(doc.query_selector(".absent").unwrap().is_none());
		assert!(doc.query_selector("li li").is_err());
	}

	#[test]
	fn test_owns_detects_detached_elements() {
		let (doc, container, ..) = sample();
		assert!(doc.owns(&container));
		let loose = doc.create_element("div").unwrap();
		assert!(!doc.owns(&loose));
	}
}
