//! ID3v1 only stores seven fixed fields, with fixed sizes
//!
//! Values that do not fit are clipped, and the clipped fields are recorded in the
//! [`TruncationFlags`](super::TruncationFlags) of the write.

use super::{FrameAdapter, WriteContext};
use crate::config::TagOptions;
use crate::frame::{Frame, FrameType};
use crate::genre;
use crate::util::pairs::NumberPair;

use std::borrow::Cow;

use lofty::id3::v1::Id3v1Tag;
use lofty::tag::Accessor;

/// The fields of an ID3v1 tag, in enumeration order
const FIELDS: [FrameType; 7] = [
	FrameType::Title,
	FrameType::Artist,
	FrameType::Album,
	FrameType::Comment,
	FrameType::Date,
	FrameType::Track,
	FrameType::Genre,
];

pub(crate) const TEXT_LIMIT: usize = 30;
// 2 bytes of the comment are taken by the track number in ID3v1.1
pub(crate) const COMMENT_LIMIT: usize = 28;
const MAX_TRACK: u32 = 255;

fn read(tag: &Id3v1Tag, ty: FrameType) -> Option<String> {
	match ty {
		FrameType::Title => tag.title().map(Cow::into_owned),
		FrameType::Artist => tag.artist().map(Cow::into_owned),
		FrameType::Album => tag.album().map(Cow::into_owned),
		FrameType::Comment => tag.comment().map(Cow::into_owned),
		FrameType::Date => tag.year().map(|year| year.to_string()),
		FrameType::Track => tag.track().map(|track| track.to_string()),
		FrameType::Genre => tag
			.genre
			.map(genre::number_to_name)
			.filter(|name| !name.is_empty())
			.map(str::to_owned),
		_ => None,
	}
}

fn remove(tag: &mut Id3v1Tag, ty: FrameType) {
	match ty {
		FrameType::Title => tag.remove_title(),
		FrameType::Artist => tag.remove_artist(),
		FrameType::Album => tag.remove_album(),
		FrameType::Comment => tag.remove_comment(),
		FrameType::Date => tag.remove_year(),
		FrameType::Track => tag.remove_track(),
		FrameType::Genre => tag.genre = None,
		_ => {},
	}
}

/// Clip `value` to `limit` characters
fn clip(value: &str, limit: usize) -> (String, bool) {
	match value.char_indices().nth(limit) {
		Some((end, _)) => (value[..end].to_owned(), true),
		None => (value.to_owned(), false),
	}
}

/// Write `value` into the field of `ty`, returning whether it had to be truncated
fn write(tag: &mut Id3v1Tag, ty: FrameType, value: &str) -> bool {
	let value = value.trim_end_matches('\0');
	if value.is_empty() {
		remove(tag, ty);
		return false;
	}

	match ty {
		FrameType::Title | FrameType::Artist | FrameType::Album => {
			let (value, truncated) = clip(value, TEXT_LIMIT);
			match ty {
				FrameType::Title => tag.set_title(value),
				FrameType::Artist => tag.set_artist(value),
				_ => tag.set_album(value),
			}
			truncated
		},
		FrameType::Comment => {
			let (value, truncated) = clip(value, COMMENT_LIMIT);
			tag.set_comment(value);
			truncated
		},
		FrameType::Date => {
			let digits = value.bytes().take_while(u8::is_ascii_digit).count();
			if digits < 4 {
				log::warn!("ID3v1: \"{value}\" is not a year, removing it");
				tag.remove_year();
				return true;
			}

			// The leading four digits are ASCII, so this cannot split a character
			match value[..4].parse::<u32>() {
				Ok(year) => tag.set_year(year),
				Err(_) => tag.remove_year(),
			}
			value.len() > 4
		},
		FrameType::Track => {
			let Some(pair) = NumberPair::parse(value) else {
				log::warn!("ID3v1: \"{value}\" is not a track number, removing it");
				tag.remove_track();
				return true;
			};

			let track = pair.number.min(MAX_TRACK);
			tag.set_track(track);
			track != pair.number || pair.total.is_some()
		},
		FrameType::Genre => {
			let name = genre::parse_legacy(value);
			let number = genre::name_to_number(&name);
			if number == genre::UNKNOWN_GENRE {
				log::warn!("ID3v1: \"{name}\" is not a known genre, storing it as unknown");
			}

			tag.genre = Some(number);
			number == genre::UNKNOWN_GENRE
		},
		_ => false,
	}
}

fn present_fields(tag: &Id3v1Tag) -> impl Iterator<Item = FrameType> + '_ {
	FIELDS.into_iter().filter(|ty| read(tag, *ty).is_some())
}

impl FrameAdapter for Id3v1Tag {
	fn enumerate(&self, _: &TagOptions) -> Vec<Frame> {
		FIELDS
			.into_iter()
			.filter_map(|ty| read(self, ty).map(|value| Frame::new(ty, value)))
			.collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let Some(ty) = present_fields(self).nth(position) else {
			return false;
		};

		let truncated = write(self, ty, frame.value());
		ctx.truncation.set(ty, truncated);
		true
	}

	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let ty = frame.ty();
		if !FIELDS.contains(&ty) || frame.value().is_empty() {
			return false;
		}

		let truncated = write(self, ty, frame.value());
		ctx.truncation.set(ty, truncated);
		true
	}

	fn delete(&mut self, position: usize) -> bool {
		let Some(ty) = present_fields(self).nth(position) else {
			return false;
		};

		remove(self, ty);
		true
	}

	fn clear(&mut self) {
		for ty in FIELDS {
			remove(self, ty);
		}
	}

	fn entry_count(&self) -> usize {
		present_fields(self).count()
	}
}
