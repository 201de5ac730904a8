use std::fmt::{Display, Formatter};

use byteorder::{ByteOrder, LittleEndian};
use data_encoding::{HEXUPPER, HEXUPPER_PERMISSIVE};

/// The value of an [`AsfAttribute`]
///
/// These are the data types of the extended content description object.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum AsfValue {
	/// A UTF-16 string
	Unicode(String),
	/// Binary data
	Bytes(Vec<u8>),
	/// A boolean (stored as a 32-bit integer)
	Bool(bool),
	/// A 32-bit integer
	DWord(u32),
	/// A 64-bit integer
	QWord(u64),
	/// A 16-bit integer
	Word(u16),
	/// A 128-bit GUID, in its on-disk byte order
	Guid([u8; 16]),
}

impl AsfValue {
	/// Parse `text` into a value of the same kind as `self`
	///
	/// Returns `None` if the text does not fit the kind. Binary values cannot be parsed from text.
	pub fn parse_like(&self, text: &str) -> Option<AsfValue> {
		let trimmed = text.trim();

		let value = match self {
			AsfValue::Unicode(_) => AsfValue::Unicode(text.to_owned()),
			AsfValue::Bytes(_) => return None,
			AsfValue::Bool(_) => AsfValue::Bool(matches!(
				trimmed.to_ascii_lowercase().as_str(),
				"1" | "true" | "yes"
			)),
			AsfValue::DWord(_) => AsfValue::DWord(trimmed.parse().ok()?),
			AsfValue::QWord(_) => AsfValue::QWord(trimmed.parse().ok()?),
			AsfValue::Word(_) => AsfValue::Word(trimmed.parse().ok()?),
			AsfValue::Guid(_) => AsfValue::Guid(parse_guid(trimmed)?),
		};

		Some(value)
	}
}

impl Display for AsfValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			AsfValue::Unicode(text) => f.write_str(text),
			AsfValue::Bytes(bytes) => write!(f, "<{} bytes>", bytes.len()),
			AsfValue::Bool(value) => f.write_str(if *value { "1" } else { "0" }),
			AsfValue::DWord(value) => write!(f, "{value}"),
			AsfValue::QWord(value) => write!(f, "{value}"),
			AsfValue::Word(value) => write!(f, "{value}"),
			AsfValue::Guid(guid) => f.write_str(&format_guid(guid)),
		}
	}
}

/// A named, typed ASF attribute
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct AsfAttribute {
	name: String,
	value: AsfValue,
}

impl AsfAttribute {
	/// Create a new `AsfAttribute`
	pub fn new(name: impl Into<String>, value: AsfValue) -> Self {
		Self {
			name: name.into(),
			value,
		}
	}

	/// The attribute name, such as `WM/AlbumTitle`
	pub fn name(&self) -> &str {
		&self.name
	}

	/// The attribute value
	pub fn value(&self) -> &AsfValue {
		&self.value
	}

	/// Replace the value
	pub fn set_value(&mut self, value: AsfValue) {
		self.value = value;
	}
}

/// Format a GUID in its canonical form
///
/// The first three groups are stored little-endian.
///
/// # Examples
///
/// ```rust
/// use tagframe::asf::format_guid;
///
/// let guid = [
/// 	0x33, 0x26, 0xB2, 0x75, 0x8E, 0x66, 0xCF, 0x11, 0xA6, 0xD9, 0x00, 0xAA, 0x00, 0x62, 0xCE, 0x6C,
/// ];
/// assert_eq!(format_guid(&guid), "75B22633-668E-11CF-A6D9-00AA0062CE6C");
/// ```
pub fn format_guid(guid: &[u8; 16]) -> String {
	format!(
		"{:08X}-{:04X}-{:04X}-{}-{}",
		LittleEndian::read_u32(&guid[..4]),
		LittleEndian::read_u16(&guid[4..6]),
		LittleEndian::read_u16(&guid[6..8]),
		HEXUPPER.encode(&guid[8..10]),
		HEXUPPER.encode(&guid[10..]),
	)
}

/// The inverse of [`format_guid`]
///
/// Surrounding braces are accepted. Returns `None` for anything that is not a GUID.
pub fn parse_guid(text: &str) -> Option<[u8; 16]> {
	let text = text.trim_start_matches('{').trim_end_matches('}');
	let groups = text.split('-').collect::<Vec<_>>();

	let [first, second, third, fourth, fifth] = groups.as_slice() else {
		return None;
	};

	if [first.len(), second.len(), third.len(), fourth.len(), fifth.len()] != [8, 4, 4, 4, 12] {
		return None;
	}

	let mut guid = [0; 16];
	LittleEndian::write_u32(&mut guid[..4], u32::from_str_radix(first, 16).ok()?);
	LittleEndian::write_u16(&mut guid[4..6], u16::from_str_radix(second, 16).ok()?);
	LittleEndian::write_u16(&mut guid[6..8], u16::from_str_radix(third, 16).ok()?);

	let tail = HEXUPPER_PERMISSIVE
		.decode(format!("{fourth}{fifth}").as_bytes())
		.ok()?;
	guid[8..].copy_from_slice(&tail);

	Some(guid)
}
