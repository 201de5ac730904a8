//! The canonical picture field layout, and its conversion to native pictures
//!
//! Every format that embeds images (ID3v2 `APIC`, FLAC/Vorbis picture blocks, MP4 `covr`,
//! APE cover art items and ASF `WM/Picture`) is read into the same field list:
//!
//! `[TextEncoding, ImageFormat, MimeType, PictureType, Description, Data]`

use crate::frame::{ExtendedType, Field, FieldId, FieldValue, Frame, FrameType};

use lofty::picture::{MimeType, Picture, PictureInformation, PictureType};

/// The data written for pictures and binary frames that are added without any payload
///
/// Native writers reject empty binary values.
pub const PLACEHOLDER_DATA: &[u8] = &[0];

/// The fields of a picture frame
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PictureFields {
	/// The ID3v2 text encoding byte of the description
	pub encoding: u8,
	/// A short image format hint ("JPG", "PNG", ...)
	pub image_format: String,
	/// The MIME type
	pub mime_type: String,
	/// The picture type (0-20, see the ID3v2 `APIC` frame)
	pub picture_type: u8,
	/// A description
	pub description: String,
	/// The image data
	pub data: Vec<u8>,
}

impl PictureFields {
	/// Read the picture fields of a frame
	///
	/// Missing fields are defaulted. Frames with no field list only provide a description
	/// (their value).
	pub fn from_frame(frame: &Frame) -> Self {
		if frame.fields().is_empty() {
			return Self {
				description: frame.value().to_owned(),
				picture_type: PictureType::CoverFront.as_u8(),
				..Self::default()
			};
		}

		let text = |id| frame.text_field(id).unwrap_or_default().to_owned();
		let number = |id| frame.field(id).and_then(FieldValue::as_number);

		let mut fields = Self {
			encoding: number(FieldId::TextEncoding).map_or(0, |n| n.min(3) as u8),
			image_format: text(FieldId::ImageFormat),
			mime_type: text(FieldId::MimeType),
			picture_type: number(FieldId::PictureType).map_or(0, |n| n.min(20) as u8),
			description: text(FieldId::Description),
			data: frame
				.field(FieldId::Data)
				.and_then(FieldValue::as_bytes)
				.map(<[u8]>::to_vec)
				.unwrap_or_default(),
		};

		if frame.is_value_changed() {
			fields.description = frame.value().to_owned();
		}

		fields
	}

	/// The canonical field list
	pub fn to_fields(&self) -> Vec<Field> {
		vec![
			Field::number(FieldId::TextEncoding, u64::from(self.encoding)),
			Field::text(FieldId::ImageFormat, self.image_format.clone()),
			Field::text(FieldId::MimeType, self.mime_type.clone()),
			Field::number(FieldId::PictureType, u64::from(self.picture_type)),
			Field::text(FieldId::Description, self.description.clone()),
			Field::bytes(FieldId::Data, self.data.clone()),
		]
	}

	/// Create a picture frame under the native name `name`
	pub fn into_frame(self, name: &str) -> Frame {
		Frame::with_fields(
			ExtendedType::new(FrameType::Picture, name),
			self.to_fields(),
		)
	}

	/// Replace empty image data with [`PLACEHOLDER_DATA`]
	pub fn with_placeholder(mut self) -> Self {
		if self.data.is_empty() {
			self.data = PLACEHOLDER_DATA.to_vec();
		}
		self
	}

	/// Build the fields from a native picture
	pub fn from_native(picture: &Picture, encoding: u8) -> Self {
		let mime_type = picture
			.mime_type()
			.map(|mime| mime.as_str().to_owned())
			.unwrap_or_default();

		Self {
			encoding,
			image_format: image_format_for_mime(&mime_type).to_owned(),
			mime_type,
			picture_type: picture.pic_type().as_u8(),
			description: picture.description().unwrap_or_default().to_owned(),
			data: picture.data().to_vec(),
		}
	}

	/// Build a native picture
	pub fn to_native(&self) -> Picture {
		let mime_type = match (self.mime_type.as_str(), self.image_format.as_str()) {
			("", "") => None,
			("", format) => Some(MimeType::from_str(mime_for_image_format(format))),
			(mime, _) => Some(MimeType::from_str(mime)),
		};

		let description = (!self.description.is_empty()).then(|| self.description.clone());

		Picture::new_unchecked(
			PictureType::from_u8(self.picture_type),
			mime_type,
			description,
			self.data.clone(),
		)
	}
}

/// Picture information for formats that store it (FLAC and Ogg)
///
/// Placeholder or otherwise unparseable images get empty information instead of an error.
pub(crate) fn information(picture: &Picture) -> PictureInformation {
	match PictureInformation::from_picture(picture) {
		Ok(info) => info,
		Err(e) => {
			log::debug!("Unable to read picture information, using defaults: {e}");
			PictureInformation::default()
		},
	}
}

/// The image format hint for a MIME type
///
/// # Examples
///
/// ```rust
/// use tagframe::picture::image_format_for_mime;
///
/// assert_eq!(image_format_for_mime("image/jpeg"), "JPG");
/// assert_eq!(image_format_for_mime("image/webp"), "");
/// ```
pub fn image_format_for_mime(mime_type: &str) -> &'static str {
	match mime_type.to_ascii_lowercase().as_str() {
		"image/jpeg" | "image/jpg" => "JPG",
		"image/png" => "PNG",
		"image/gif" => "GIF",
		"image/bmp" => "BMP",
		"image/tiff" => "TIF",
		_ => "",
	}
}

/// The MIME type for an image format hint
pub fn mime_for_image_format(image_format: &str) -> &'static str {
	match image_format.to_ascii_uppercase().as_str() {
		"JPG" | "JPEG" => "image/jpeg",
		"PNG" => "image/png",
		"GIF" => "image/gif",
		"BMP" => "image/bmp",
		"TIF" | "TIFF" => "image/tiff",
		_ => "application/octet-stream",
	}
}

/// Guess a MIME type from the leading bytes of an image
pub fn sniff_mime_type(data: &[u8]) -> Option<&'static str> {
	match data {
		[0xFF, 0xD8, 0xFF, ..] => Some("image/jpeg"),
		[0x89, b'P', b'N', b'G', ..] => Some("image/png"),
		[b'G', b'I', b'F', b'8', ..] => Some("image/gif"),
		[b'B', b'M', ..] => Some("image/bmp"),
		[b'I', b'I', 0x2A, 0x00, ..] | [b'M', b'M', 0x00, 0x2A, ..] => Some("image/tiff"),
		_ => None,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn jpeg() -> PictureFields {
		PictureFields {
			encoding: 0,
			image_format: String::from("JPG"),
			mime_type: String::from("image/jpeg"),
			picture_type: 3,
			description: String::from("Front"),
			data: vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3],
		}
	}

	#[test_log::test]
	fn frame_fields() {
		let frame = jpeg().into_frame("APIC");
		assert_eq!(frame.ty(), FrameType::Picture);
		assert_eq!(frame.value(), "Front");
		assert_eq!(PictureFields::from_frame(&frame), jpeg());
	}

	#[test_log::test]
	fn edited_value_becomes_description() {
		let mut frame = jpeg().into_frame("APIC");
		frame.set_value("Back");
		assert_eq!(PictureFields::from_frame(&frame).description, "Back");
	}

	#[test_log::test]
	fn native_conversion_keeps_bytes_and_mime() {
		let native = jpeg().to_native();
		assert_eq!(native.data(), jpeg().data.as_slice());
		assert_eq!(native.pic_type(), PictureType::CoverFront);

		let back = PictureFields::from_native(&native, 0);
		assert_eq!(back, jpeg());
	}

	#[test_log::test]
	fn placeholder() {
		let fields = PictureFields::default().with_placeholder();
		assert_eq!(fields.data, PLACEHOLDER_DATA);
		assert_eq!(jpeg().with_placeholder().data, jpeg().data);
	}

	#[test_log::test]
	fn mime_sniffing() {
		assert_eq!(sniff_mime_type(&jpeg().data), Some("image/jpeg"));
		assert_eq!(sniff_mime_type(b"\x89PNG\r\n"), Some("image/png"));
		assert_eq!(sniff_mime_type(&[0]), None);
	}
}
