//! Simple compound selector parsing and matching.
//!
//! The supported grammar covers what element delegation and the query
//! helpers need: a tag name, `#id`, any number of `.class` parts, the
//! universal selector `*`, and compounds of those (`button.primary#go`).
//! Combinators and attribute selectors are rejected with `InvalidArgument`
//! at parse time rather than silently matching nothing.

use crate::dom::node::Element;
use crate::error::PageError;

/// A parsed simple compound selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
	tag: Option<String>,
	id: Option<String>,
	classes: Vec<String>,
}

impl Selector {
	/// Parses a selector string.
	///
	/// # Errors
	///
	/// `InvalidArgument` for an empty selector, an empty `#`/`.` part, a
	/// compound with more than one `#` part, or anything outside the
	/// simple-compound grammar (whitespace means a combinator, which is
	/// unsupported).
	pub fn parse(input: &str) -> Result<Self, PageError> {
		let source = input.trim();
		if source.is_empty() {
			return Err(PageError::invalid_argument("selector must not be empty"));
		}
		if source.chars().any(char::is_whitespace) {
			return Err(PageError::invalid_argument(format!(
				"combinators are not supported in selector '{source}'"
			)));
		}
		if source == "*" {
			return Ok(Self {
				tag: None,
				id: None,
				classes: Vec::new(),
			});
		}

		let boundary = source.find(['#', '.']).unwrap_or(source.len());
		let tag = if boundary > 0 {
			let tag = &source[..boundary];
			validate_part(tag, source)?;
			Some(tag.to_string())
		} else {
			None
		};

		let mut id = None;
		let mut classes = Vec::new();
		let mut rest = &source[boundary..];
		while !rest.is_empty() {
			// rest starts with '#' or '.' by construction
			let marker = rest.as_bytes()[0] as char;
			let end = rest[1..]
				.find(['#', '.'])
				.map(|offset| offset + 1)
				.unwrap_or(rest.len());
			let part = &rest[1..end];
			validate_part(part, source)?;
			match marker {
				'#' => {
					if id.is_some() {
						return Err(PageError::invalid_argument(format!(
							"selector '{source}' has more than one id part"
						)));
					}
					id = Some(part.to_string());
				}
				_ => classes.push(part.to_string()),
			}
			rest = &rest[end..];
		}

		Ok(Self { tag, id, classes })
	}

	/// Whether `element` matches every part of this selector.
	pub fn matches(&self, element: &Element) -> bool {
		if let Some(tag) = &self.tag {
			if !element.tag().eq_ignore_ascii_case(tag) {
				return false;
			}
		}
		if let Some(id) = &self.id {
			if element.attribute("id").as_deref() != Some(id.as_str()) {
				return false;
			}
		}
		self.classes.iter().all(|class| element.has_class(class))
	}
}

fn validate_part(part: &str, source: &str) -> Result<(), PageError> {
	if part.is_empty() {
		return Err(PageError::invalid_argument(format!(
			"selector '{source}' has an empty part"
		)));
	}
	if !part
		.chars()
		.all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
	{
		return Err(PageError::invalid_argument(format!(
			"selector '{source}' contains unsupported syntax"
		)));
	}
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;

	fn element(tag: &str, id: Option<&str>, classes: &[&str]) -> Element {
		let el = Element::new(tag);
		if let Some(id) = id {
			el.set_attribute("id", id);
		}
		for class in classes {
			el.add_class(class);
		}
		el
	}

	#[test]
	fn test_tag_selector() {
		let sel = Selector::parse("button").unwrap();
		assert!(sel.matches(&element("button", None, &[])));
		assert!(sel.matches(&element("BUTTON", None, &[])));
		assert!(!sel.matches(&element("div", None, &[])));
	}

	#[test]
	fn test_id_selector() {
		let sel = Selector::parse("#go").unwrap();
		assert!(sel.matches(&element("a", Some("go"), &[])));
		assert!(!sel.matches(&element("a", Some("stop"), &[])));
		assert!(!sel.matches(&element("a", None, &[])));
	}

	#[test]
	fn test_class_selector() {
		let sel = Selector::parse(".item").unwrap();
		assert!(sel.matches(&element("li", None, &["item", "active"])));
		assert!(!sel.matches(&element("li", None, &["active"])));
	}

	#[test]
	fn test_compound_selector() {
		let sel = Selector::parse("button.primary#go").unwrap();
		assert!(sel.matches(&element("button", Some("go"), &["primary"])));
		assert!(!sel.matches(&element("button", Some("go"), &[])));
		assert!(!sel.matches(&element("div", Some("go"), &["primary"])));
	}

	#[test]
	fn test_universal_selector() {
		let sel = Selector::parse("*").unwrap();
		assert!(sel.matches(&element("whatever", None, &[])));
	}

	#[test]
	fn test_rejects_bad_selectors() {
		for bad in ["", "  ", "div p", ".", "#", "a[href]", "div..x", "a#x#y", "#x#y"] {
			assert!(
				matches!(Selector::parse(bad), Err(PageError::InvalidArgument(_))),
				"expected parse failure for {bad:?}"
			);
		}
	}
}
