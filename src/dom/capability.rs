//! Settable-attribute capability table.
//!
//! The original design discovered settable properties by reflecting over a
//! host object's capability chain. Here the chain is an explicit table: a
//! global attribute list shared by every element, plus per-tag extensions.
//! [`crate::Augmented::set`] consults this table to validate dynamic
//! attribute writes; `data-*` attributes are always allowed.

/// Attributes settable on every element.
pub const GLOBAL_ATTRIBUTES: &[&str] = &[
	"id", "class", "style", "title", "lang", "dir", "hidden", "tabindex", "role",
];

/// Extra attributes settable on a given tag, beyond [`GLOBAL_ATTRIBUTES`].
///
/// Unknown tags have no extras; custom attributes go through `data-*` or the
/// unvalidated [`crate::Augmented::attr`] escape hatch.
pub fn tag_attributes(tag: &str) -> &'static [&'static str] {
	match tag.to_ascii_lowercase().as_str() {
		"a" => &["href", "target", "rel", "download"],
		"img" => &["src", "alt", "width", "height", "loading"],
		"input" => &[
			"name",
			"type",
			"value",
			"placeholder",
			"disabled",
			"checked",
			"required",
			"min",
			"max",
			"step",
		],
		"button" => &["name", "type", "value", "disabled"],
		"form" => &["action", "method", "enctype", "novalidate", "name"],
		"label" => &["for"],
		"select" => &["name", "multiple", "disabled", "size"],
		"option" => &["value", "selected", "disabled"],
		"textarea" => &["name", "rows", "cols", "placeholder", "disabled"],
		"iframe" => &["src", "width", "height", "allow"],
		"video" | "audio" => &["src", "controls", "autoplay", "loop", "muted"],
		"source" => &["src", "type"],
		"time" => &["datetime"],
		"progress" => &["value", "max"],
		_ => &[],
	}
}

/// All attributes settable on `tag`: the global list plus per-tag extras.
pub fn settable_attributes(tag: &str) -> Vec<&'static str> {
	let mut names: Vec<&'static str> = GLOBAL_ATTRIBUTES.to_vec();
	names.extend_from_slice(tag_attributes(tag));
	names
}

/// Whether `name` is a settable attribute for `tag`.
pub fn is_settable(tag: &str, name: &str) -> bool {
	name.starts_with("data-")
		|| GLOBAL_ATTRIBUTES.contains(&name)
		|| tag_attributes(tag).contains(&name)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_global_attributes_apply_to_any_tag() {
		assert!(is_settable("div", "id"));
		assert!(is_settable("custom-widget", "class"));
	}

	#[test]
	fn test_tag_specific_attributes() {
		assert!(is_settable("a", "href"));
		assert!(is_settable("input", "placeholder"));
		assert!(!is_settable("div", "href"));
		assert!(!is_settable("a", "placeholder"));
	}

	#[test]
	fn test_data_attributes_always_allowed() {
		assert!(is_settable("div", "data-test-id"));
	}

	#[test]
	fn test_settable_attributes_includes_both_layers() {
		let names = settable_attributes("img");
		assert!(names.contains(&"id"));
		assert!(names.contains(&"src"));
		assert!(!names.contains(&"href"));
	}
}
