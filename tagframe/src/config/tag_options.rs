use crate::text_encoding::TextEncoding;

/// The Vorbis Comment key used for newly added comments
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CommentField {
	/// `COMMENT`, understood by most players
	#[default]
	Comment,
	/// `DESCRIPTION`, the field name suggested by the Vorbis Comment specification
	Description,
}

impl CommentField {
	/// The Vorbis Comment key
	pub fn key(self) -> &'static str {
		match self {
			Self::Comment => "COMMENT",
			Self::Description => "DESCRIPTION",
		}
	}
}

/// Options to control how tags are read into frames and written back
///
/// This acts as a dumping ground for all sorts of format-specific settings. As such, this is best
/// used as an application global config that gets set once, and handed to every
/// [`TaggedFile`](crate::file::TaggedFile).
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub struct TagOptions {
	pub(crate) text_encoding: TextEncoding,
	pub(crate) genre_as_number: bool,
	pub(crate) comment_field: CommentField,
	pub(crate) track_number_digits: u8,
	pub(crate) read_properties: bool,
}

impl TagOptions {
	/// Creates a new `TagOptions`, alias for `Default` implementation
	///
	/// See also: [`TagOptions::default`]
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::TagOptions;
	///
	/// let tag_options = TagOptions::new();
	/// ```
	pub const fn new() -> Self {
		Self {
			text_encoding: TextEncoding::Latin1,
			genre_as_number: false,
			comment_field: CommentField::Comment,
			track_number_digits: 0,
			read_properties: true,
		}
	}

	/// The default encoding for ID3v2 text fields
	///
	/// Latin-1 will still be upgraded to UTF-8 for text that cannot be represented in it.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::TagOptions;
	/// use tagframe::text_encoding::TextEncoding;
	///
	/// // Always write UTF-16, for players that choke on UTF-8
	/// let options = TagOptions::new().text_encoding(TextEncoding::Utf16);
	/// ```
	pub const fn text_encoding(mut self, text_encoding: TextEncoding) -> Self {
		self.text_encoding = text_encoding;
		self
	}

	/// Whether to store known ID3v2 genres by number
	///
	/// If set to `true`, a genre such as "Metal" is written as `(9)`. Formats that only store text
	/// ignore this, and always receive the genre name.
	pub const fn genre_as_number(mut self, genre_as_number: bool) -> Self {
		self.genre_as_number = genre_as_number;
		self
	}

	/// The Vorbis Comment key used when adding a comment
	pub const fn comment_field(mut self, comment_field: CommentField) -> Self {
		self.comment_field = comment_field;
		self
	}

	/// Pad written track numbers with zeros to this many digits
	///
	/// `0` disables padding.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::config::TagOptions;
	///
	/// // Track 7 will be written as "07"
	/// let options = TagOptions::new().track_number_digits(2);
	/// ```
	pub const fn track_number_digits(mut self, track_number_digits: u8) -> Self {
		self.track_number_digits = track_number_digits;
		self
	}

	/// Whether or not to read the audio properties when opening a file
	pub const fn read_properties(mut self, read_properties: bool) -> Self {
		self.read_properties = read_properties;
		self
	}
}

impl Default for TagOptions {
	/// The default implementation for `TagOptions`
	///
	/// The defaults are as follows:
	///
	/// ```rust,ignore
	/// TagOptions {
	/// 	text_encoding: TextEncoding::Latin1,
	/// 	genre_as_number: false,
	/// 	comment_field: CommentField::Comment,
	/// 	track_number_digits: 0,
	/// 	read_properties: true,
	/// }
	/// ```
	fn default() -> Self {
		Self::new()
	}
}
