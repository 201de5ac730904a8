//! Text encoding selection for formats that encode their own text
//!
//! Only ID3v2 stores an explicit encoding per text field. Vorbis Comments, APE and MP4 are always
//! UTF-8 (or UTF-16) internally, so the policy here is never consulted for them.

/// The encoding a text field should be written with
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TextEncoding {
	/// ISO-8859-1
	#[default]
	Latin1,
	/// UTF-8
	Utf8,
	/// UTF-16 with a byte order mark
	Utf16,
}

impl TextEncoding {
	/// Whether the encoding can represent every Unicode scalar value
	pub fn is_unicode(self) -> bool {
		self != Self::Latin1
	}

	/// The ID3v2 encoding byte for this encoding
	pub fn as_u8(self) -> u8 {
		match self {
			Self::Latin1 => 0,
			Self::Utf16 => 1,
			Self::Utf8 => 3,
		}
	}

	/// Map an ID3v2 encoding byte to a `TextEncoding`
	///
	/// UTF-16BE (2) has no counterpart of its own and is treated as [`TextEncoding::Utf16`].
	pub fn from_u8(byte: u8) -> Option<Self> {
		match byte {
			0 => Some(Self::Latin1),
			1 | 2 => Some(Self::Utf16),
			3 => Some(Self::Utf8),
			_ => None,
		}
	}
}

impl From<TextEncoding> for lofty::TextEncoding {
	fn from(input: TextEncoding) -> Self {
		match input {
			TextEncoding::Latin1 => lofty::TextEncoding::Latin1,
			TextEncoding::Utf8 => lofty::TextEncoding::UTF8,
			TextEncoding::Utf16 => lofty::TextEncoding::UTF16,
		}
	}
}

/// The ID3v2 encoding byte of a native encoding
pub(crate) fn native_code(encoding: lofty::TextEncoding) -> u8 {
	match encoding {
		lofty::TextEncoding::Latin1 => 0,
		lofty::TextEncoding::UTF16 => 1,
		lofty::TextEncoding::UTF16BE => 2,
		lofty::TextEncoding::UTF8 => 3,
	}
}

/// Whether `text` requires a Unicode encoding
///
/// This is the case if any character falls outside of Latin-1, or is NUL.
///
/// # Examples
///
/// ```rust
/// use tagframe::text_encoding::needs_unicode;
///
/// assert!(needs_unicode("Motörhead ❤"));
/// assert!(!needs_unicode("Metallica"));
/// ```
pub fn needs_unicode(text: &str) -> bool {
	text.chars().any(|c| c == '\0' || u32::from(c) > 0xFF)
}

/// Choose the encoding for a text field
///
/// A configured Unicode encoding is always kept. Otherwise, Latin-1 is only upgraded (to UTF-8)
/// when the text requires it.
pub fn choose_encoding(needs_unicode: bool, configured: TextEncoding) -> TextEncoding {
	if configured.is_unicode() {
		return configured;
	}

	if needs_unicode {
		TextEncoding::Utf8
	} else {
		TextEncoding::Latin1
	}
}

/// Shorthand for [`choose_encoding`] applied to a piece of text
pub fn encoding_for(text: &str, configured: TextEncoding) -> TextEncoding {
	choose_encoding(needs_unicode(text), configured)
}
