use super::mappings::ASF_MAP;
use super::{FieldReader, FrameAdapter, WriteContext};
use crate::asf::{
	AsfAttribute, AsfTag, AsfValue, PICTURE_ATTRIBUTE, decode_picture, encode_picture,
};
use crate::config::TagOptions;
use crate::frame::{ExtendedType, Field, FieldId, Frame, FrameType};
use crate::genre;
use crate::picture::PictureFields;
use crate::util::pairs::{self, NumberPair};

fn attribute_to_frame(attribute: &AsfAttribute) -> Frame {
	let name = attribute.name();
	let ty = ASF_MAP::frame_type(name).unwrap_or(FrameType::Other);

	match attribute.value() {
		AsfValue::Bytes(data) if name.eq_ignore_ascii_case(PICTURE_ATTRIBUTE) => {
			match decode_picture(data) {
				Ok(picture) => picture.into_frame(name),
				Err(e) => {
					log::warn!("ASF: Unable to decode picture, keeping it as raw data: {e}");
					Frame::with_fields(
						ExtendedType::new(FrameType::Other, name),
						vec![Field::bytes(FieldId::Data, data.clone())],
					)
				},
			}
		},
		AsfValue::Bytes(data) => Frame::with_fields(
			ExtendedType::new(ty, name),
			vec![Field::bytes(FieldId::Data, data.clone())],
		),
		value => Frame::new(ExtendedType::new(ty, name), value.to_string()),
	}
}

/// The value to store for `frame`
///
/// `existing` is the value being replaced, whose kind is kept.
fn attribute_value(frame: &Frame, existing: Option<&AsfValue>) -> Option<AsfValue> {
	let reader = FieldReader::new(frame);

	if frame.ty() == FrameType::Picture {
		let picture = PictureFields::from_frame(frame).with_placeholder();
		return Some(AsfValue::Bytes(encode_picture(&picture)));
	}

	if !frame.uses_value() {
		if let Some(data) = reader.bytes(FieldId::Data) {
			return Some(AsfValue::Bytes(data.to_vec()));
		}
	}

	let value = reader.primary(FieldId::Text);
	let value = match frame.ty() {
		FrameType::Genre => genre::parse_legacy(value).into_owned(),
		FrameType::Disc => pairs::normalize(value, 0),
		// Numeric track numbers have no room for the total
		FrameType::Track => match (existing, NumberPair::parse(value)) {
			(None, pair) => return pair.map(|pair| AsfValue::DWord(pair.number)),
			(Some(AsfValue::Unicode(_)), _) => pairs::normalize(value, 0),
			(Some(_), Some(pair)) => pair.number.to_string(),
			(Some(_), None) => value.to_owned(),
		},
		_ => value.to_owned(),
	};

	match existing {
		Some(existing) => {
			let parsed = existing.parse_like(&value);
			if parsed.is_none() {
				log::warn!("ASF: \"{value}\" does not fit the existing attribute type");
			}
			parsed
		},
		None => Some(AsfValue::Unicode(value)),
	}
}

/// The attribute name for a new frame
fn target_name(frame: &Frame) -> Option<&str> {
	match frame.ty() {
		FrameType::UnknownFrame => None,
		FrameType::Other => Some(frame.name()).filter(|name| !name.is_empty()),
		ty => ASF_MAP::native_key(ty),
	}
}

impl FrameAdapter for AsfTag {
	fn enumerate(&self, _: &TagOptions) -> Vec<Frame> {
		self.into_iter().map(attribute_to_frame).collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, _: &mut WriteContext<'_>) -> bool {
		let Some(existing) = self.attributes().get(position) else {
			return false;
		};

		let Some(value) = attribute_value(frame, Some(existing.value())) else {
			return false;
		};

		self.set_value_at(position, value)
	}

	fn add(&mut self, frame: &Frame, _: &mut WriteContext<'_>) -> bool {
		let Some(name) = target_name(frame) else {
			return false;
		};

		let Some(value) = attribute_value(frame, None) else {
			return false;
		};

		self.push(AsfAttribute::new(name, value));
		true
	}

	fn delete(&mut self, position: usize) -> bool {
		self.remove_at(position).is_some()
	}

	fn clear(&mut self) {
		AsfTag::clear(self);
	}

	fn entry_count(&self) -> usize {
		self.len()
	}
}
