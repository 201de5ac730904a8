//! Contains the errors that can arise within tagframe
//!
//! The primary error is [`TagframeError`]. The type of error is determined by [`ErrorKind`].
//!
//! Note that most editing operations never produce an error. Missing frames, unsupported frame
//! kinds and malformed legacy values are reported through `Option`s, `bool`s and sentinel values
//! instead. Errors are reserved for I/O and failures of the underlying native tag library.

use std::fmt::{Debug, Display, Formatter};
use std::path::PathBuf;

use lofty::error::LoftyError;

/// Alias for `Result<T, TagframeError>`
pub type Result<T> = std::result::Result<T, TagframeError>;

/// The types of errors that can occur
#[derive(Debug)]
#[non_exhaustive]
pub enum ErrorKind {
	/// Unable to determine the format of a file, or the format carries no editable tags
	UnknownFormat,
	/// Attempted to use a tag version that the file format does not support
	UnsupportedTag,
	/// A file was expected to be open, but no native handle exists
	FileNotOpen,
	/// A rename could not be performed because the target already exists
	RenameTarget(PathBuf),
	/// A frame index did not resolve to any native entry
	InvalidIndex,

	// Conversions for external errors
	/// Errors that arise from the native tag library
	Native(LoftyError),
	/// Represents all cases of [`std::io::Error`].
	Io(std::io::Error),
}

/// Errors that could occur within tagframe
pub struct TagframeError {
	pub(crate) kind: ErrorKind,
}

impl TagframeError {
	/// Create a `TagframeError` from an [`ErrorKind`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::error::{ErrorKind, TagframeError};
	///
	/// let unknown_format = TagframeError::new(ErrorKind::UnknownFormat);
	/// ```
	#[must_use]
	pub const fn new(kind: ErrorKind) -> Self {
		Self { kind }
	}

	/// Returns the [`ErrorKind`]
	pub fn kind(&self) -> &ErrorKind {
		&self.kind
	}
}

impl std::error::Error for TagframeError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self.kind {
			ErrorKind::Native(ref err) => Some(err),
			ErrorKind::Io(ref err) => Some(err),
			_ => None,
		}
	}
}

impl Debug for TagframeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{:?}", self.kind)
	}
}

impl From<ErrorKind> for TagframeError {
	fn from(input: ErrorKind) -> Self {
		Self { kind: input }
	}
}

impl From<LoftyError> for TagframeError {
	fn from(input: LoftyError) -> Self {
		Self {
			kind: ErrorKind::Native(input),
		}
	}
}

impl From<std::io::Error> for TagframeError {
	fn from(input: std::io::Error) -> Self {
		Self {
			kind: ErrorKind::Io(input),
		}
	}
}

impl Display for TagframeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.kind {
			// Conversions
			ErrorKind::Native(ref err) => write!(f, "{err}"),
			ErrorKind::Io(ref err) => write!(f, "{err}"),

			ErrorKind::UnknownFormat => {
				write!(f, "No taggable format could be determined for the file")
			},
			ErrorKind::UnsupportedTag => write!(
				f,
				"Attempted to use a tag version that the format does not support"
			),
			ErrorKind::FileNotOpen => write!(f, "The file has no open native handle"),
			ErrorKind::RenameTarget(ref path) => {
				write!(f, "Rename target already exists: {}", path.display())
			},
			ErrorKind::InvalidIndex => write!(f, "Frame index does not refer to a native entry"),
		}
	}
}
