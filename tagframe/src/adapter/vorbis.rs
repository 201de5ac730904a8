use super::mappings::VORBIS_MAP;
use super::{FieldReader, FrameAdapter, WriteContext};
use crate::config::{CommentField, TagOptions};
use crate::frame::{ExtendedType, FieldId, Frame, FrameType};
use crate::genre;
use crate::picture::{self, PictureFields};
use crate::util::{pairs, text};

use lofty::ogg::{OggPictureStorage, VorbisComments};
use lofty::tag::TagExt;

/// The name given to picture frames, which are stored outside of the comment list
pub(crate) const PICTURE_KEY: &str = "METADATA_BLOCK_PICTURE";

// A case-insensitive field name that may consist of ASCII 0x20 through 0x7D, 0x3D ('=') excluded.
fn is_valid_key(key: &str) -> bool {
	!key.is_empty()
		&& key
			.bytes()
			.all(|byte| (0x20..=0x7D).contains(&byte) && byte != b'=')
}

fn key_type(key: &str, options: &TagOptions) -> FrameType {
	if options.comment_field == CommentField::Description
		&& key.eq_ignore_ascii_case(CommentField::Description.key())
	{
		return FrameType::Comment;
	}

	VORBIS_MAP::frame_type(key).unwrap_or(FrameType::Other)
}

/// The key for a new item
fn target_key(frame: &Frame, options: &TagOptions) -> Option<String> {
	let key = match frame.ty() {
		FrameType::UnknownFrame => return None,
		FrameType::Comment => options.comment_field.key(),
		FrameType::Other => frame.name(),
		ty => VORBIS_MAP::native_key(ty)?,
	};

	if !is_valid_key(key) {
		log::debug!("Vorbis: `{key}` is not a valid comment key");
		return None;
	}

	Some(key.to_owned())
}

/// The stored form of a frame value
fn stored_value(frame: &Frame, options: &TagOptions) -> String {
	let value = FieldReader::new(frame).primary(FieldId::Text);

	match frame.ty() {
		FrameType::Track => pairs::normalize(value, options.track_number_digits),
		FrameType::Disc => pairs::normalize(value, 0),
		FrameType::Genre => genre::parse_legacy(value).into_owned(),
		_ => value.to_owned(),
	}
}

fn native_picture(frame: &Frame) -> (lofty::picture::Picture, lofty::picture::PictureInformation) {
	let picture = PictureFields::from_frame(frame)
		.with_placeholder()
		.to_native();
	let info = picture::information(&picture);
	(picture, info)
}

/// The keys of a number stored apart from its total
struct NumberKeys {
	ty: FrameType,
	number: &'static str,
	// The first one is used for new totals
	totals: [&'static str; 2],
}

const NUMBER_KEYS: [NumberKeys; 2] = [
	NumberKeys {
		ty: FrameType::Track,
		number: "TRACKNUMBER",
		totals: ["TRACKTOTAL", "TOTALTRACKS"],
	},
	NumberKeys {
		ty: FrameType::Disc,
		number: "DISCNUMBER",
		totals: ["DISCTOTAL", "TOTALDISCS"],
	},
];

impl NumberKeys {
	fn for_type(ty: FrameType) -> Option<&'static Self> {
		NUMBER_KEYS.iter().find(|keys| keys.ty == ty)
	}

	fn is_number(&self, key: &str) -> bool {
		key.eq_ignore_ascii_case(self.number)
	}

	fn is_total(&self, key: &str) -> bool {
		self.totals.iter().any(|total| key.eq_ignore_ascii_case(total))
	}

	/// Replace every total item with `total`
	fn write_total(&self, items: &mut Vec<(String, String)>, total: Option<u32>) {
		items.retain(|(key, _)| !self.is_total(key));
		if let Some(total) = total {
			items.push((self.totals[0].to_owned(), total.to_string()));
		}
	}
}

/// Which items are shown as frames
///
/// The first `TRACKNUMBER` and `TRACKTOTAL` (`DISCNUMBER` and `DISCTOTAL`) items are shown as a
/// single "N/total" frame, unless the number already carries a total.
struct Layout {
	visible: Vec<usize>,
	// (number, total) item indices
	folded: Vec<(usize, usize)>,
}

impl Layout {
	fn new(items: &[(String, String)]) -> Self {
		let mut folded = Vec::new();
		for keys in &NUMBER_KEYS {
			let number = items.iter().position(|(key, _)| keys.is_number(key));
			let total = items.iter().position(|(key, _)| keys.is_total(key));

			if let (Some(number), Some(total)) = (number, total) {
				if !items[number].1.contains(pairs::NUMBER_PAIR_SEPARATOR) {
					folded.push((number, total));
				}
			}
		}

		let visible = (0..items.len())
			.filter(|item| !folded.iter().any(|&(_, total)| total == *item))
			.collect();

		Self { visible, folded }
	}

	fn total_of(&self, item: usize) -> Option<usize> {
		self.folded
			.iter()
			.find(|&&(number, _)| number == item)
			.map(|&(_, total)| total)
	}
}

/// Split a track or disc frame into its number and total
fn split_number(
	frame: &Frame,
	options: &TagOptions,
) -> Option<(&'static NumberKeys, String, Option<u32>)> {
	let keys = NumberKeys::for_type(frame.ty())?;
	let digits = if keys.ty == FrameType::Track {
		options.track_number_digits
	} else {
		0
	};

	let pair = pairs::NumberPair::parse(FieldReader::new(frame).primary(FieldId::Text))?;
	let number = pairs::NumberPair {
		number: pair.number,
		total: None,
	}
	.format(digits);

	Some((keys, number, pair.total))
}

fn owned_items(tag: &VorbisComments) -> Vec<(String, String)> {
	tag.items()
		.map(|(key, value)| (key.to_owned(), value.to_owned()))
		.collect()
}

fn replace_items(tag: &mut VorbisComments, items: Vec<(String, String)>) {
	drop(tag.take_items());
	for (key, value) in items {
		tag.push(key, value);
	}
}

impl FrameAdapter for VorbisComments {
	fn enumerate(&self, options: &TagOptions) -> Vec<Frame> {
		let items = owned_items(self);
		let layout = Layout::new(&items);

		let items = layout.visible.iter().map(|&item| {
			let (key, value) = &items[item];
			let value = match layout.total_of(item) {
				Some(total) => format!("{value}{}{}", pairs::NUMBER_PAIR_SEPARATOR, items[total].1),
				None => value.clone(),
			};

			Frame::new(ExtendedType::new(key_type(key, options), key.as_str()), value)
		});

		let pictures = self.pictures().iter().map(|(picture, _)| {
			PictureFields::from_native(picture, text::UTF8).into_frame(PICTURE_KEY)
		});

		items.chain(pictures).collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let mut items = owned_items(self);
		let layout = Layout::new(&items);

		let Some(&item) = layout.visible.get(position) else {
			let index = position - layout.visible.len();
			if index >= self.pictures().len() {
				return false;
			}

			let (picture, info) = native_picture(frame);
			self.set_picture(index, picture, info);
			return true;
		};

		// Only the first number is stored apart from its total
		let split = split_number(frame, ctx.options).filter(|(keys, ..)| {
			items.iter().position(|(key, _)| keys.is_number(key)) == Some(item)
		});

		match split {
			Some((keys, number, total)) => {
				items[item].1 = number;
				keys.write_total(&mut items, total);
			},
			None => items[item].1 = stored_value(frame, ctx.options),
		}

		replace_items(self, items);
		true
	}

	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		if frame.ty() == FrameType::Picture {
			let (picture, info) = native_picture(frame);
			return match self.insert_picture(picture, Some(info)) {
				Ok(replaced) => {
					if replaced.is_some() {
						log::debug!("Vorbis: Replaced an existing icon picture");
					}
					true
				},
				Err(e) => {
					log::warn!("Vorbis: Unable to add picture: {e}");
					false
				},
			};
		}

		let Some(key) = target_key(frame, ctx.options) else {
			return false;
		};

		let mut items = owned_items(self);
		match split_number(frame, ctx.options) {
			Some((keys, number, total))
				if !items.iter().any(|(existing, _)| keys.is_number(existing)) =>
			{
				items.push((key, number));
				keys.write_total(&mut items, total);
			},
			_ => items.push((key, stored_value(frame, ctx.options))),
		}

		replace_items(self, items);
		true
	}

	fn delete(&mut self, position: usize) -> bool {
		let mut items = owned_items(self);
		let layout = Layout::new(&items);

		let Some(&item) = layout.visible.get(position) else {
			let index = position - layout.visible.len();
			if index >= self.pictures().len() {
				return false;
			}

			self.remove_picture(index);
			return true;
		};

		// A folded total goes with its number
		let mut removed = vec![item];
		removed.extend(layout.total_of(item));
		removed.sort_unstable_by(|a, b| b.cmp(a));
		for item in removed {
			items.remove(item);
		}

		replace_items(self, items);
		true
	}

	fn clear(&mut self) {
		TagExt::clear(self);
	}

	fn entry_count(&self) -> usize {
		Layout::new(&owned_items(self)).visible.len() + self.pictures().len()
	}
}
