//! The generic, format-agnostic tag model
//!
//! A [`Frame`] is a single tag entry: a [`FrameType`], a name, a scalar value and an optional list
//! of typed [`Field`]s. A [`FrameCollection`] holds all frames of one tag.

mod collection;
mod field;
mod filter;
mod frame_type;

pub use collection::FrameCollection;
pub use field::{Field, FieldId, FieldValue, id_to_string, string_to_id};
pub use filter::FrameFilter;
pub use frame_type::FrameType;

use std::fmt::{Display, Formatter};

/// The `(type, name)` key of a frame
///
/// For well-known frames the name is the native key the frame was read from (such as `TIT2`,
/// `TITLE` or `©nam`), or the display name of the type for frames created by the caller.
/// For [`FrameType::Other`] the name is what identifies the frame.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ExtendedType {
	ty: FrameType,
	name: String,
}

impl ExtendedType {
	/// Create a new `ExtendedType`
	pub fn new(ty: FrameType, name: impl Into<String>) -> Self {
		Self {
			ty,
			name: name.into(),
		}
	}

	/// The frame type
	pub fn ty(&self) -> FrameType {
		self.ty
	}

	/// The frame name
	pub fn name(&self) -> &str {
		&self.name
	}

	/// Whether two keys refer to the same frame
	///
	/// Well-known types match on type alone. Other frames also need matching names.
	pub fn matches(&self, other: &ExtendedType) -> bool {
		if self.ty != other.ty {
			return false;
		}

		match self.ty {
			FrameType::Other | FrameType::UnknownFrame => self.name.eq_ignore_ascii_case(&other.name),
			_ => true,
		}
	}
}

impl From<FrameType> for ExtendedType {
	fn from(input: FrameType) -> Self {
		Self::new(input, input.name())
	}
}

impl Display for ExtendedType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self.ty {
			FrameType::Other | FrameType::UnknownFrame => f.write_str(&self.name),
			ty => f.write_str(ty.name()),
		}
	}
}

/// The position of a frame within one enumeration of a native tag
///
/// Positions are only meaningful for the generation they were handed out in. Adding or deleting
/// entries starts a new generation, and a stale index makes the adapter re-enumerate the tag and
/// find the entry again through its key and ordinal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct FrameIndex {
	/// The enumeration generation of the tag
	pub generation: u64,
	/// The position in native enumeration order
	pub position: usize,
	/// The number of earlier entries with the same key
	pub ordinal: usize,
}

/// A generic tag entry
#[derive(Clone, Debug)]
pub struct Frame {
	key: ExtendedType,
	value: String,
	value_changed: bool,
	fields: Vec<Field>,
	index: Option<FrameIndex>,
}

impl Frame {
	/// Create a frame with a value and no fields
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::frame::{Frame, FrameType};
	///
	/// let frame = Frame::new(FrameType::Title, "Master of Puppets");
	/// assert_eq!(frame.name(), "Title");
	/// assert_eq!(frame.value(), "Master of Puppets");
	/// ```
	pub fn new(key: impl Into<ExtendedType>, value: impl Into<String>) -> Self {
		Self {
			key: key.into(),
			value: value.into(),
			value_changed: false,
			fields: Vec::new(),
			index: None,
		}
	}

	/// Create a frame of [`FrameType::Other`] identified by `name`
	pub fn other(name: impl Into<String>, value: impl Into<String>) -> Self {
		Self::new(ExtendedType::new(FrameType::Other, name), value)
	}

	/// Create a frame from a field list
	///
	/// The value is derived from the fields.
	pub fn with_fields(key: impl Into<ExtendedType>, fields: Vec<Field>) -> Self {
		let mut frame = Self::new(key, String::new());
		frame.fields = fields;
		frame.update_value_from_fields();
		frame
	}

	/// The `(type, name)` key
	pub fn key(&self) -> &ExtendedType {
		&self.key
	}

	/// The frame type
	pub fn ty(&self) -> FrameType {
		self.key.ty
	}

	/// The frame name
	pub fn name(&self) -> &str {
		&self.key.name
	}

	/// The primary value of the frame
	pub fn value(&self) -> &str {
		&self.value
	}

	/// Replace the value wholesale
	///
	/// Adapters will write this value rather than the field list.
	pub fn set_value(&mut self, value: impl Into<String>) {
		self.value = value.into();
		self.value_changed = true;
	}

	/// Whether the value was replaced with [`Frame::set_value`] since the fields were last set
	pub fn is_value_changed(&self) -> bool {
		self.value_changed
	}

	/// The value as it should be shown to a user
	///
	/// This is the value, or for binary-only frames, a short summary of their content.
	pub fn display_value(&self) -> String {
		if !self.value.is_empty() {
			return self.value.clone();
		}

		match self.field(FieldId::Data).and_then(FieldValue::as_bytes) {
			Some(data) => format!("<{} bytes>", data.len()),
			None => String::new(),
		}
	}

	/// The field list
	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	/// Replace the field list
	///
	/// The value is re-derived from the fields.
	pub fn set_fields(&mut self, fields: Vec<Field>) {
		self.fields = fields;
		self.update_value_from_fields();
	}

	/// Get the value of a field
	///
	/// Returns `None` if the frame has no field of this kind.
	pub fn field(&self, id: FieldId) -> Option<&FieldValue> {
		self.fields
			.iter()
			.find(|field| field.id == id)
			.map(|field| &field.value)
	}

	/// Get the value of a text field
	pub fn text_field(&self, id: FieldId) -> Option<&str> {
		self.field(id).and_then(FieldValue::as_text)
	}

	/// Set the value of a field
	///
	/// Returns `false` if the frame has no field of this kind. Fields cannot be added to a frame
	/// this way, since every frame shape has a fixed field list.
	pub fn set_field(&mut self, id: FieldId, value: FieldValue) -> bool {
		let Some(field) = self.fields.iter_mut().find(|field| field.id == id) else {
			return false;
		};

		field.value = value;
		self.update_value_from_fields();
		true
	}

	/// Whether the adapter should write [`Frame::value`] instead of the fields
	pub(crate) fn uses_value(&self) -> bool {
		self.fields.is_empty() || self.value_changed
	}

	/// The adapter assigned index
	pub fn index(&self) -> Option<FrameIndex> {
		self.index
	}

	pub(crate) fn set_index(&mut self, index: Option<FrameIndex>) {
		self.index = index;
	}

	/// Derive the value from the field list
	///
	/// The first text-bearing field wins, in the order: text, URL, rating, identifier,
	/// description, seller, owner.
	fn update_value_from_fields(&mut self) {
		const PRIORITY: [FieldId; 7] = [
			FieldId::Text,
			FieldId::Url,
			FieldId::Rating,
			FieldId::Id,
			FieldId::Description,
			FieldId::Seller,
			FieldId::Owner,
		];

		self.value_changed = false;

		if self.fields.is_empty() {
			return;
		}

		self.value = PRIORITY
			.iter()
			.find_map(|id| self.field(*id))
			.map(FieldValue::to_display_string)
			.unwrap_or_default();
	}
}

impl PartialEq for Frame {
	/// Frames are equal when their types, names and fields are
	///
	/// Frames without fields are compared by value instead.
	fn eq(&self, other: &Self) -> bool {
		if self.key != other.key || self.fields != other.fields {
			return false;
		}

		!self.fields.is_empty() || self.value == other.value
	}
}

impl Eq for Frame {}
