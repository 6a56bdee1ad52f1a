//! Cloneable callback wrapper.
//!
//! `Callback` wraps a function in an `Rc`, making it cheaply cloneable while
//! providing a stable handle that can be stored in [`crate::Props`] and
//! converted into an event handler. The whole crate is single-threaded by
//! contract, so `Rc` (not `Arc`) is the right sharing primitive here.

use std::rc::Rc;

use crate::dom::Event;

/// A type-safe, cloneable callback wrapper.
///
/// ## Type parameters
///
/// - `Args`: argument type the callback receives (defaults to [`Event`])
/// - `Ret`: return type (defaults to `()`)
///
/// ## Example
///
/// ```
/// use sprig::Callback;
///
/// let double = Callback::new(|x: i32| x * 2);
/// assert_eq!(double.call(21), 42);
///
/// let alias = double.clone();
/// assert_eq!(alias.call(5), 10);
/// ```
pub struct Callback<Args = Event, Ret = ()> {
	inner: Rc<dyn Fn(Args) -> Ret + 'static>,
}

impl<Args, Ret> Callback<Args, Ret> {
	/// Creates a new callback from a function or closure.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(Args) -> Ret + 'static,
	{
		Self { inner: Rc::new(f) }
	}

	/// Calls the callback with the given arguments.
	pub fn call(&self, args: Args) -> Ret {
		(self.inner)(args)
	}
}

impl<Args, Ret> Clone for Callback<Args, Ret> {
	fn clone(&self) -> Self {
		Self {
			inner: Rc::clone(&self.inner),
		}
	}
}

impl<Args, Ret> std::fmt::Debug for Callback<Args, Ret> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Callback")
			.field("inner", &"<function>")
			.finish()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::cell::RefCell;

	#[test]
	fn test_callback_creation() {
		let callback = Callback::new(|_: i32| 42);
		assert_eq!(callback.call(0), 42);
	}

	#[test]
	fn test_callback_clone_shares_function() {
		let callback = Callback::new(|x: i32| x * 2);
		let alias = callback.clone();
		assert_eq!(callback.call(5), 10);
		assert_eq!(alias.call(5), 10);
	}

	#[test]
	fn test_callback_with_captured_state() {
		let counter = Rc::new(RefCell::new(0));
		let callback = Callback::new({
			let counter = counter.clone();
			move |increment: i32| {
				*counter.borrow_mut() += increment;
			}
		});

		callback.call(1);
		callback.call(2);
		callback.call(3);
		assert_eq!(*counter.borrow(), 6);
	}

	#[test]
	fn test_callback_debug() {
		let callback = Callback::new(|_: ()| {});
		assert!(format!("{callback:?}").contains("Callback"));
	}
}
