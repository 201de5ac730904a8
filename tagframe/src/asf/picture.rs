use crate::error::Result;
use crate::picture::{PictureFields, image_format_for_mime};
use crate::util::text;

use std::io::{Cursor, Read};

use byteorder::{LittleEndian, ReadBytesExt};

fn read_wide_string<R>(reader: &mut R) -> Result<String>
where
	R: Read,
{
	let mut units = Vec::new();
	loop {
		match reader.read_u16::<LittleEndian>()? {
			0 => break,
			unit => units.push(unit),
		}
	}

	Ok(String::from_utf16_lossy(&units))
}

/// Decode a `WM/Picture` attribute value
///
/// Layout (all integers little-endian):
///
/// ```text
/// picture type   u8
/// data length    u32
/// MIME type      UTF-16, NUL terminated
/// description    UTF-16, NUL terminated
/// data           [u8; data length]
/// ```
///
/// # Errors
///
/// The value is shorter than its layout requires
pub fn decode_picture(value: &[u8]) -> Result<PictureFields> {
	let mut reader = Cursor::new(value);

	let picture_type = reader.read_u8()?;
	let data_length = reader.read_u32::<LittleEndian>()?;
	let mime_type = read_wide_string(&mut reader)?;
	let description = read_wide_string(&mut reader)?;

	let remaining = value.len() - reader.position() as usize;
	if data_length as usize > remaining {
		return Err(std::io::Error::new(
			std::io::ErrorKind::UnexpectedEof,
			"WM/Picture data length exceeds the attribute size",
		)
		.into());
	}

	let mut data = vec![0; data_length as usize];
	reader.read_exact(&mut data)?;

	let trailing = value.len() as u64 - reader.position();
	if trailing > 0 {
		log::debug!("ASF: Ignoring {trailing} trailing bytes after picture data");
	}

	Ok(PictureFields {
		encoding: text::UTF16,
		image_format: image_format_for_mime(&mime_type).to_owned(),
		mime_type,
		picture_type: picture_type.min(20),
		description,
		data,
	})
}

/// Encode a `WM/Picture` attribute value
///
/// See [`decode_picture`] for the layout.
pub fn encode_picture(picture: &PictureFields) -> Vec<u8> {
	let mime_type = if picture.mime_type.is_empty() && !picture.image_format.is_empty() {
		crate::picture::mime_for_image_format(&picture.image_format)
	} else {
		&picture.mime_type
	};

	let mut out = Vec::with_capacity(picture.data.len() + 64);
	out.push(picture.picture_type);
	out.extend((picture.data.len() as u32).to_le_bytes());
	out.extend(text::encode_utf16le(mime_type));
	out.extend([0, 0]);
	out.extend(text::encode_utf16le(&picture.description));
	out.extend([0, 0]);
	out.extend_from_slice(&picture.data);
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	fn cover() -> PictureFields {
		PictureFields {
			encoding: text::UTF16,
			image_format: String::from("JPG"),
			mime_type: String::from("image/jpeg"),
			picture_type: 3,
			description: String::from("Обложка"),
			data: vec![0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3],
		}
	}

	#[test_log::test]
	fn layout() {
		let encoded = encode_picture(&cover());

		assert_eq!(encoded[0], 3);
		assert_eq!(&encoded[1..5], &7_u32.to_le_bytes());
		assert_eq!(&encoded[5..7], &[b'i', 0]);
		assert!(encoded.ends_with(&[0xFF, 0xD8, 0xFF, 0xE0, 1, 2, 3]));

		assert_eq!(decode_picture(&encoded).unwrap(), cover());
	}

	#[test_log::test]
	fn mime_from_image_format() {
		let picture = PictureFields {
			mime_type: String::new(),
			..cover()
		};

		let decoded = decode_picture(&encode_picture(&picture)).unwrap();
		assert_eq!(decoded.mime_type, "image/jpeg");
	}

	#[test_log::test]
	fn truncated_data() {
		let encoded = encode_picture(&cover());
		assert!(decode_picture(&encoded[..encoded.len() - 1]).is_err());
		assert!(decode_picture(&[3]).is_err());
	}
}
