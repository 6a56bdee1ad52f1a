//! Integration tests for root registration and element creation.

use serde_json::json;
use sprig::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn app() -> (Document, Mount, Element) {
	let doc = Document::new();
	let container = doc.create_element("div").unwrap();
	container.set_attribute("id", "app");
	doc.root().append_child(&container).unwrap();

	let mount = Mount::new(&doc);
	mount.register_root(&container).unwrap();
	(doc, mount, container)
}

#[test]
fn test_create_before_register_root_fails_illegal_state() {
	let doc = Document::new();
	let mount = Mount::new(&doc);
	assert!(matches!(
		mount.create("div", Props::default(), Attach::Root),
		Err(PageError::IllegalState(_))
	));
}

#[test]
fn test_create_detached_with_registered_root() {
	let (_doc, mount, _container) = app();
	let el = mount
		.create("div", Props::default(), Attach::Detached)
		.unwrap()
		.into_element();
	assert!(el.parent().is_none());
}

#[test]
fn test_register_root_requires_attached_element() {
	let doc = Document::new();
	let mount = Mount::new(&doc);
	let loose = doc.create_element("main").unwrap();
	assert!(matches!(
		mount.register_root(&loose),
		Err(PageError::InvalidArgument(_))
	));

	doc.root().append_child(&loose).unwrap();
	mount.register_root(&loose).unwrap();
	assert!(mount.root().unwrap().ptr_eq(&loose));
}

#[test]
fn test_created_elements_default_into_the_root() {
	let (doc, mount, container) = app();
	let card = mount
		.create(
			"div",
			Props {
				id: Some("card".to_string()),
				class_name: Some("card".to_string()),
				..Props::default()
			},
			Attach::Root,
		)
		.unwrap()
		.into_element();

	assert!(card.parent().unwrap().ptr_eq(&container));
	assert!(doc.get_element_by_id("card").unwrap().ptr_eq(&card));
}

#[test]
fn test_props_on_click_subscribes_handler() {
	let (_doc, mount, _container) = app();
	let clicks = Rc::new(RefCell::new(0));
	let clicks_clone = clicks.clone();

	let button = mount
		.create(
			"button",
			Props {
				on_click: Some(Callback::new(move |_event| {
					*clicks_clone.borrow_mut() += 1;
				})),
				..Props::default()
			},
			Attach::Root,
		)
		.unwrap()
		.into_element();

	button.emit("click");
	button.emit("click");
	assert_eq!(*clicks.borrow(), 2);
}

/// End-to-end: create, select, bind, write.
#[test]
fn test_full_flow() {
	let (doc, mount, _container) = app();
	let label = mount
		.create(
			"span",
			Props {
				id: Some("status".to_string()),
				..Props::default()
			},
			Attach::Root,
		)
		.unwrap()
		.into_element();

	let state = State::from_object(json!({"status": "idle"})).unwrap();
	let target = by_id(&doc, "status").unwrap().into_element();
	assert!(target.ptr_eq(&label));

	state
		.bind("status", target.clone(), {
			let target = target.clone();
			move |value| {
				target.set_text(value.as_str().unwrap_or_default());
				Ok(())
			}
		})
		.unwrap();
	assert_eq!(label.text(), "idle");

	state.set("status", json!("busy")).unwrap();
	assert_eq!(label.text(), "busy");
}
