//! Selection helpers.
//!
//! Thin delegations over [`Document`] queries that hand back augmented
//! handles, so lookups chain straight into mutation:
//!
//! ```
//! use sprig::dom::Document;
//! use sprig::select;
//!
//! let doc = Document::new();
//! let button = doc.create_element("button").unwrap();
//! button.set_attribute("id", "go");
//! doc.root().append_child(&button).unwrap();
//!
//! select::by_id(&doc, "go")
//! 	.unwrap()
//! 	.add_class("primary")
//! 	.text("Go");
//! assert!(button.has_class("primary"));
//! ```

use crate::dom::Document;
use crate::element::{Augmented, augment};
use crate::error::PageError;

/// First element with the given `id`, augmented.
pub fn by_id(document: &Document, id: &str) -> Option<Augmented> {
	document.get_element_by_id(id).map(augment)
}

/// All elements with the given `name` attribute, augmented, in document order.
pub fn by_name(document: &Document, name: &str) -> Vec<Augmented> {
	document
		.get_elements_by_name(name)
		.into_iter()
		.map(augment)
		.collect()
}

/// All elements with the given tag, augmented, in document order.
pub fn by_tag(document: &Document, tag: &str) -> Vec<Augmented> {
	document
		.get_elements_by_tag(tag)
		.into_iter()
		.map(augment)
		.collect()
}

/// All elements carrying the given class, augmented, in document order.
pub fn by_class(document: &Document, class: &str) -> Vec<Augmented> {
	document
		.get_elements_by_class(class)
		.into_iter()
		.map(augment)
		.collect()
}

/// First element matching `selector`, augmented.
///
/// # Errors
///
/// `InvalidArgument` if the selector does not parse.
pub fn select(document: &Document, selector: &str) -> Result<Option<Augmented>, PageError> {
	Ok(document.query_selector(selector)?.map(augment))
}

/// All elements matching `selector`, augmented, in document order.
///
/// # Errors
///
/// `InvalidArgument` if the selector does not parse.
pub fn select_all(document: &Document, selector: &str) -> Result<Vec<Augmented>, PageError> {
	Ok(document
		.query_selector_all(selector)?
		.into_iter()
		.map(augment)
		.collect())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample() -> Document {
		let doc = Document::new();
		let form = doc.create_element("form").unwrap();
		form.set_attribute("id", "login");
		doc.root().append_child(&form).unwrap();

		for name in ["user", "pass"] {
			let input = doc.create_element("input").unwrap();
			input.set_attribute("name", name);
			input.add_class("field");
			form.append_child(&input).unwrap();
		}
		doc
	}

	#[test]
	fn test_by_id_miss_is_none() {
		let doc = sample();
		assert!(by_id(&doc, "login").is_some());
		assert!(by_id(&doc, "logout").is_none());
	}

	#[test]
	fn test_collection_helpers() {
		let doc = sample();
		assert_eq!(by_tag(&doc, "input").len(), 2);
		assert_eq!(by_class(&doc, "field").len(), 2);
		assert_eq!(by_name(&doc, "user").len(), 1);
		assert!(by_class(&doc, "absent").is_empty());
	}

	#[test]
	fn test_select_and_select_all() {
		let doc = sample();
		let first = select(&doc, "input.field").unwrap().unwrap();
		assert_eq!(
			first.element().attribute("name").as_deref(),
			Some("user")
		);
		assert_eq!(select_all(&doc, ".field").unwrap().len(), 2);
		assert!(select(&doc, "form input").is_err());
	}
}
