// Shorthand for return Err(TagframeError::new(ErrorKind::Foo))
//
// Usage:
// - err!(Variant)          -> return Err(TagframeError::new(ErrorKind::Variant))
// - err!(Variant(Value))   -> return Err(TagframeError::new(ErrorKind::Variant(Value)))
macro_rules! err {
	($variant:ident) => {
		return Err(crate::error::TagframeError::new(
			crate::error::ErrorKind::$variant,
		))
	};
	($variant:ident($reason:expr)) => {
		return Err(crate::error::TagframeError::new(
			crate::error::ErrorKind::$variant($reason),
		))
	};
}

pub(crate) use err;
