//! Crate-wide error type.
//!
//! Every fallible operation in sprig fails synchronously at the call site
//! with a [`PageError`]. There is no internal recovery, retry, or rollback:
//! a state write that already happened stays applied even when a later
//! binding callback fails (see [`PageError::Update`]).

/// Error type returned by a failing update callback.
///
/// Callbacks are user code; they report failures as any boxed error and the
/// store wraps them in [`PageError::Update`] without interpreting them.
pub type UpdateError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors raised by sprig operations.
#[derive(Debug, thiserror::Error)]
pub enum PageError {
	/// A required argument was missing or invalid (empty class name in
	/// `toggle_class`, unsupported attribute for a tag, malformed selector,
	/// detached element passed to `register_root`, ...).
	#[error("invalid argument: {0}")]
	InvalidArgument(String),

	/// The operation requires prior setup that has not happened, such as
	/// calling `create` before `register_root`.
	#[error("illegal state: {0}")]
	IllegalState(String),

	/// A user-supplied update callback failed during a state fan-out.
	///
	/// The write that triggered the fan-out stays applied; callbacks
	/// registered after the failing one did not run for this write.
	#[error("update callback for key '{key}' failed")]
	Update {
		/// State key whose fan-out was aborted.
		key: String,
		/// Error reported by the callback.
		#[source]
		source: UpdateError,
	},
}

impl PageError {
	/// Shorthand for [`PageError::InvalidArgument`].
	pub fn invalid_argument(message: impl Into<String>) -> Self {
		Self::InvalidArgument(message.into())
	}

	/// Shorthand for [`PageError::IllegalState`].
	pub fn illegal_state(message: impl Into<String>) -> Self {
		Self::IllegalState(message.into())
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_display_messages() {
		let err = PageError::invalid_argument("class name must not be empty");
		assert_eq!(
			err.to_string(),
			"invalid argument: class name must not be empty"
		);

		let err = PageError::illegal_state("no root registered");
		assert_eq!(err.to_string(), "illegal state: no root registered");
	}

	#[test]
	fn test_update_error_carries_source() {
		let source: UpdateError = "element went away".into();
		let err = PageError::Update {
			key: "count".to_string(),
			source,
		};
		assert_eq!(err.to_string(), "update callback for key 'count' failed");
		assert!(std::error::Error::source(&err).is_some());
	}
}
