use data_encoding::{HEXLOWER, HEXLOWER_PERMISSIVE};

/// The kind of a [`Field`]
///
/// Every frame shape uses a fixed, ordered subset of these. For example, an ID3v2 comment is made
/// of `[TextEncoding, Language, Description, Text]`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldId {
	/// The text encoding of the frame (an ID3v2 encoding byte)
	TextEncoding,
	/// The primary text
	Text,
	/// A description, or a content descriptor
	Description,
	/// A MIME type
	MimeType,
	/// A picture type (0-20)
	PictureType,
	/// A short image format hint, such as "JPG" or "PNG"
	ImageFormat,
	/// Opaque binary data
	Data,
	/// A three character ISO-639-2 language code
	Language,
	/// The owner of a private or unique identifier frame
	Owner,
	/// A binary identifier
	Id,
	/// A file name
	Filename,
	/// A URL
	Url,
	/// An email address
	Email,
	/// A rating (0-255)
	Rating,
	/// A play counter
	Counter,
	/// A date
	Date,
	/// A price
	Price,
	/// The name of a seller
	Seller,
}

/// The value of a [`Field`]
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum FieldValue {
	/// An integer
	Number(u64),
	/// A string
	Text(String),
	/// Binary data
	Bytes(Vec<u8>),
}

impl FieldValue {
	/// Returns the value as a number, if it is one
	pub fn as_number(&self) -> Option<u64> {
		match self {
			Self::Number(number) => Some(*number),
			_ => None,
		}
	}

	/// Returns the value as a string, if it is one
	pub fn as_text(&self) -> Option<&str> {
		match self {
			Self::Text(text) => Some(text),
			_ => None,
		}
	}

	/// Returns the value as bytes, if it is binary
	pub fn as_bytes(&self) -> Option<&[u8]> {
		match self {
			Self::Bytes(bytes) => Some(bytes),
			_ => None,
		}
	}

	/// Converts the value into a string for display
	///
	/// Binary data is shown as an identifier (see [`id_to_string`]).
	pub fn to_display_string(&self) -> String {
		match self {
			Self::Number(number) => number.to_string(),
			Self::Text(text) => text.clone(),
			Self::Bytes(bytes) => id_to_string(bytes),
		}
	}
}

/// A typed sub-value of a [`Frame`](super::Frame)
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Field {
	/// The kind of the field
	pub id: FieldId,
	/// The value of the field
	pub value: FieldValue,
}

impl Field {
	/// Create a new `Field`
	pub fn new(id: FieldId, value: FieldValue) -> Self {
		Self { id, value }
	}

	/// Shorthand for a [`FieldValue::Text`] field
	pub fn text(id: FieldId, text: impl Into<String>) -> Self {
		Self::new(id, FieldValue::Text(text.into()))
	}

	/// Shorthand for a [`FieldValue::Number`] field
	pub fn number(id: FieldId, number: u64) -> Self {
		Self::new(id, FieldValue::Number(number))
	}

	/// Shorthand for a [`FieldValue::Bytes`] field
	pub fn bytes(id: FieldId, bytes: Vec<u8>) -> Self {
		Self::new(id, FieldValue::Bytes(bytes))
	}
}

/// Convert a binary identifier into a displayable string
///
/// Printable ASCII is kept as is, anything else is written as lowercase hex prefixed with `0x`.
///
/// # Examples
///
/// ```rust
/// use tagframe::frame::id_to_string;
///
/// assert_eq!(id_to_string(b"a7c2-11"), "a7c2-11");
/// assert_eq!(id_to_string(&[0x00, 0xFF]), "0x00ff");
/// ```
pub fn id_to_string(id: &[u8]) -> String {
	if !id.is_empty() && id.iter().all(|b| b.is_ascii_graphic() || *b == b' ') {
		return id.iter().map(|&b| char::from(b)).collect();
	}

	if id.is_empty() {
		return String::new();
	}

	format!("0x{}", HEXLOWER.encode(id))
}

/// The inverse of [`id_to_string`]
///
/// An invalid hex string degrades to an empty identifier.
pub fn string_to_id(value: &str) -> Vec<u8> {
	let Some(hex) = value.strip_prefix("0x") else {
		return value.as_bytes().to_vec();
	};

	match HEXLOWER_PERMISSIVE.decode(hex.as_bytes()) {
		Ok(id) => id,
		Err(e) => {
			log::warn!("Invalid hex identifier \"{value}\": {e}");
			Vec::new()
		},
	}
}
