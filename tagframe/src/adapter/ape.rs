use super::mappings::APE_MAP;
use super::{FieldReader, FrameAdapter, WriteContext};
use crate::config::TagOptions;
use crate::frame::{ExtendedType, Field, FieldId, Frame, FrameType};
use crate::genre;
use crate::picture::{PictureFields, image_format_for_mime, sniff_mime_type};
use crate::util::{pairs, text};

use lofty::ape::{ApeItem, ApeTag};
use lofty::tag::{ItemValue, TagExt};

const COVER_ART_PREFIX: &str = "Cover Art (";

// Indexed by picture type
const COVER_ART_KEYS: [&str; 21] = [
	"Cover Art (Other)",
	"Cover Art (Icon)",
	"Cover Art (Other Icon)",
	"Cover Art (Front)",
	"Cover Art (Back)",
	"Cover Art (Leaflet)",
	"Cover Art (Media)",
	"Cover Art (Lead Artist)",
	"Cover Art (Artist)",
	"Cover Art (Conductor)",
	"Cover Art (Band)",
	"Cover Art (Composer)",
	"Cover Art (Lyricist)",
	"Cover Art (Recording Location)",
	"Cover Art (During Recording)",
	"Cover Art (During Performance)",
	"Cover Art (Video Capture)",
	"Cover Art (Fish)",
	"Cover Art (Illustration)",
	"Cover Art (Band Logotype)",
	"Cover Art (Publisher Logotype)",
];

fn is_cover_art(key: &str) -> bool {
	key.get(..COVER_ART_PREFIX.len())
		.is_some_and(|prefix| prefix.eq_ignore_ascii_case(COVER_ART_PREFIX))
}

fn cover_art_type(key: &str) -> u8 {
	COVER_ART_KEYS
		.iter()
		.position(|known| known.eq_ignore_ascii_case(key))
		.map_or(0, |position| position as u8)
}

/// Decode a cover art item
///
/// Layout: description (UTF-8, usually the original file name), data
pub(crate) fn decode_cover_art(key: &str, value: &[u8]) -> PictureFields {
	let (description, data) = text::split_terminated(value, text::UTF8);
	let mime_type = sniff_mime_type(data).unwrap_or_default();

	PictureFields {
		encoding: text::UTF8,
		image_format: image_format_for_mime(mime_type).to_owned(),
		mime_type: mime_type.to_owned(),
		picture_type: cover_art_type(key),
		description,
		data: data.to_vec(),
	}
}

pub(crate) fn encode_cover_art(picture: &PictureFields) -> Vec<u8> {
	let mut out = text::encode_terminated(&picture.description, text::UTF8);
	out.extend_from_slice(&picture.data);
	out
}

fn item_to_frame(item: &ApeItem) -> Frame {
	let key = item.key();
	let ty = APE_MAP::frame_type(key).unwrap_or(FrameType::Other);

	match item.value() {
		ItemValue::Text(value) | ItemValue::Locator(value) => {
			Frame::new(ExtendedType::new(ty, key), value.clone())
		},
		ItemValue::Binary(value) if is_cover_art(key) => {
			decode_cover_art(key, value).into_frame(key)
		},
		ItemValue::Binary(value) => Frame::with_fields(
			ExtendedType::new(ty, key),
			vec![Field::bytes(FieldId::Data, value.clone())],
		),
	}
}

/// The key for a new item
fn target_key(frame: &Frame) -> Option<String> {
	let key = match frame.ty() {
		FrameType::UnknownFrame => return None,
		FrameType::Picture => {
			let picture_type = PictureFields::from_frame(frame).picture_type;
			COVER_ART_KEYS[usize::from(picture_type).min(COVER_ART_KEYS.len() - 1)]
		},
		FrameType::Other => frame.name(),
		ty => APE_MAP::native_key(ty)?,
	};

	Some(key.to_owned())
}

/// Build the item value for `frame`
///
/// `locator` selects a locator over a text value, for keys that already hold one.
fn item_value(frame: &Frame, locator: bool, options: &TagOptions) -> ItemValue {
	let reader = FieldReader::new(frame);

	if frame.ty() == FrameType::Picture {
		let picture = PictureFields::from_frame(frame).with_placeholder();
		return ItemValue::Binary(encode_cover_art(&picture));
	}

	if !frame.uses_value() {
		if let Some(data) = reader.bytes(FieldId::Data) {
			return ItemValue::Binary(data.to_vec());
		}
	}

	let value = reader.primary(FieldId::Text);
	let value = match frame.ty() {
		FrameType::Track => pairs::normalize(value, options.track_number_digits),
		FrameType::Disc => pairs::normalize(value, 0),
		FrameType::Genre => genre::parse_legacy(value).into_owned(),
		_ => value.to_owned(),
	};

	let is_url = matches!(
		frame.ty(),
		FrameType::Website | FrameType::WwwAudioFile | FrameType::WwwAudioSource
	);

	if locator || is_url {
		ItemValue::Locator(value)
	} else {
		ItemValue::Text(value)
	}
}

fn items(tag: &ApeTag) -> Vec<ApeItem> {
	tag.into_iter().cloned().collect()
}

fn replace_items(tag: &mut ApeTag, items: Vec<ApeItem>) {
	TagExt::clear(tag);
	for item in items {
		tag.insert(item);
	}
}

fn new_item(key: String, value: ItemValue) -> Option<ApeItem> {
	match ApeItem::new(key, value) {
		Ok(item) => Some(item),
		Err(e) => {
			log::debug!("APE: Unable to create item: {e}");
			None
		},
	}
}

impl FrameAdapter for ApeTag {
	fn enumerate(&self, _: &TagOptions) -> Vec<Frame> {
		self.into_iter().map(item_to_frame).collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let mut items = items(self);
		let Some(existing) = items.get(position) else {
			return false;
		};

		let key = existing.key().to_owned();
		let locator = matches!(existing.value(), ItemValue::Locator(_));
		let value = if is_cover_art(&key) {
			ItemValue::Binary(encode_cover_art(
				&PictureFields::from_frame(frame).with_placeholder(),
			))
		} else {
			item_value(frame, locator, ctx.options)
		};

		let Some(item) = new_item(key, value) else {
			return false;
		};

		items[position] = item;
		replace_items(self, items);
		true
	}

	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let Some(key) = target_key(frame) else {
			return false;
		};

		let Some(item) = new_item(key, item_value(frame, false, ctx.options)) else {
			return false;
		};

		self.insert(item);
		true
	}

	fn delete(&mut self, position: usize) -> bool {
		let mut items = items(self);
		if position >= items.len() {
			return false;
		}

		items.remove(position);
		replace_items(self, items);
		true
	}

	fn clear(&mut self) {
		TagExt::clear(self);
	}

	fn entry_count(&self) -> usize {
		self.into_iter().count()
	}
}
