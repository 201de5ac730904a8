//! Translation between native tags and [`Frame`]s
//!
//! Every supported tag format has an adapter implementing the same four operations:
//! enumerate its entries as frames, overwrite an entry, add an entry and delete entries.
//! [`TagAdapter`] wraps a [`NativeTag`] and ties these operations to [`FrameIndex`]es.
//!
//! ## Indices
//!
//! A frame returned by [`TagAdapter::frames`] carries the position of its native entry, stamped with
//! the current generation of the tag, and how many entries with the same key come before it. Adding
//! or deleting entries starts a new generation. Using a frame from an older generation is allowed,
//! the adapter will re-enumerate the tag and look the entry up by its key and ordinal instead.

mod ape;
mod asf;
mod id3v1;
mod id3v2;
pub(crate) mod mappings;
mod mp4;
mod truncation;
mod vorbis;

pub use truncation::TruncationFlags;

use crate::asf::AsfTag;
use crate::config::TagOptions;
use crate::frame::{FieldId, FieldValue, Frame, FrameCollection, FrameFilter, FrameIndex};

use lofty::ape::ApeTag;
use lofty::id3::v1::Id3v1Tag;
use lofty::id3::v2::{Id3v2Tag, Id3v2Version};
use lofty::mp4::Ilst;
use lofty::ogg::VorbisComments;

/// The state shared with an adapter during a write
pub(crate) struct WriteContext<'a> {
	pub(crate) options: &'a TagOptions,
	pub(crate) truncation: &'a mut TruncationFlags,
}

/// Reads the values to write out of a frame
///
/// Wholesale value edits (see [`Frame::set_value`]) replace the primary field, all other fields are
/// taken from the field list.
pub(crate) struct FieldReader<'a> {
	frame: &'a Frame,
}

impl<'a> FieldReader<'a> {
	pub(crate) fn new(frame: &'a Frame) -> Self {
		Self { frame }
	}

	/// The primary text, which follows the frame value
	pub(crate) fn primary(&self, id: FieldId) -> &'a str {
		if self.frame.uses_value() {
			return self.frame.value();
		}

		self.frame.text_field(id).unwrap_or_else(|| self.frame.value())
	}

	pub(crate) fn text(&self, id: FieldId) -> &'a str {
		self.frame.text_field(id).unwrap_or_default()
	}

	pub(crate) fn number(&self, id: FieldId) -> Option<u64> {
		self.frame.field(id).and_then(FieldValue::as_number)
	}

	pub(crate) fn bytes(&self, id: FieldId) -> Option<&'a [u8]> {
		self.frame.field(id).and_then(FieldValue::as_bytes)
	}

	/// The text encoding byte of the frame, if it has one
	pub(crate) fn encoding(&self) -> Option<u8> {
		self.number(FieldId::TextEncoding).map(|n| n.min(3) as u8)
	}
}

/// The number of frames before `position` that share its key
fn ordinal(frames: &[Frame], position: usize) -> usize {
	let key = frames[position].key();
	frames[..position]
		.iter()
		.filter(|frame| frame.key().matches(key))
		.count()
}

/// The operations every tag format supports
///
/// Positions are indices into the output of [`FrameAdapter::enumerate`].
pub(crate) trait FrameAdapter {
	/// Read every native entry as a frame, in native order
	fn enumerate(&self, options: &TagOptions) -> Vec<Frame>;

	/// Overwrite the entry at `position`
	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool;

	/// Create a new native entry for `frame`
	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool;

	/// Remove the entry at `position`
	fn delete(&mut self, position: usize) -> bool;

	/// Remove every entry enabled in `filter`
	fn delete_matching(&mut self, filter: &FrameFilter, options: &TagOptions) -> bool {
		let positions = self
			.enumerate(options)
			.iter()
			.enumerate()
			.filter(|(_, frame)| filter.is_enabled(frame.ty(), frame.name()))
			.map(|(position, _)| position)
			.collect::<Vec<_>>();

		let mut deleted = false;
		// Back to front, so the remaining positions stay valid
		for position in positions.into_iter().rev() {
			deleted |= self.delete(position);
		}

		deleted
	}

	/// Remove every entry
	fn clear(&mut self);

	/// The number of entries `enumerate` would produce
	fn entry_count(&self) -> usize;
}

/// A native tag of any supported format
#[derive(Clone, Debug)]
#[non_exhaustive]
pub enum NativeTag {
	/// An ID3v1 tag
	Id3v1(Id3v1Tag),
	/// An ID3v2 tag
	Id3v2(Id3v2Tag),
	/// Vorbis Comments, including FLAC/Ogg pictures
	Vorbis(VorbisComments),
	/// An APE tag
	Ape(ApeTag),
	/// MP4 `ilst` atoms
	Mp4(Ilst),
	/// ASF attributes
	Asf(AsfTag),
}

macro_rules! dispatch {
	($tag:expr, $inner:ident => $body:expr) => {
		match $tag {
			NativeTag::Id3v1($inner) => $body,
			NativeTag::Id3v2($inner) => $body,
			NativeTag::Vorbis($inner) => $body,
			NativeTag::Ape($inner) => $body,
			NativeTag::Mp4($inner) => $body,
			NativeTag::Asf($inner) => $body,
		}
	};
}

impl NativeTag {
	/// A short description of the tag format
	///
	/// ID3 tags include their version, such as "ID3v2.3.0" or "ID3v1.1".
	pub fn format_description(&self) -> String {
		match self {
			NativeTag::Id3v1(tag) => {
				if tag.track_number.is_some() {
					String::from("ID3v1.1")
				} else {
					String::from("ID3v1.0")
				}
			},
			NativeTag::Id3v2(tag) => {
				let minor = match tag.original_version() {
					Id3v2Version::V2 => 2,
					Id3v2Version::V3 => 3,
					Id3v2Version::V4 => 4,
				};
				format!("ID3v2.{minor}.0")
			},
			NativeTag::Vorbis(_) => String::from("Vorbis"),
			NativeTag::Ape(_) => String::from("APE"),
			NativeTag::Mp4(_) => String::from("MP4"),
			NativeTag::Asf(_) => String::from("ASF"),
		}
	}

	/// Whether the tag has no entries
	pub fn is_empty(&self) -> bool {
		self.entry_count() == 0
	}

	fn enumerate(&self, options: &TagOptions) -> Vec<Frame> {
		dispatch!(self, tag => tag.enumerate(options))
	}

	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		dispatch!(self, tag => tag.set(position, frame, ctx))
	}

	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		dispatch!(self, tag => tag.add(frame, ctx))
	}

	fn delete(&mut self, position: usize) -> bool {
		dispatch!(self, tag => tag.delete(position))
	}

	fn delete_matching(&mut self, filter: &FrameFilter, options: &TagOptions) -> bool {
		dispatch!(self, tag => tag.delete_matching(filter, options))
	}

	fn clear(&mut self) {
		dispatch!(self, tag => tag.clear())
	}

	fn entry_count(&self) -> usize {
		dispatch!(self, tag => tag.entry_count())
	}
}

/// A native tag together with the state needed to edit it through frames
#[derive(Clone, Debug)]
pub struct TagAdapter {
	tag: NativeTag,
	generation: u64,
	changed: bool,
	saved: bool,
	truncation: TruncationFlags,
}

impl TagAdapter {
	/// Wrap a native tag
	pub fn new(tag: NativeTag) -> Self {
		Self {
			tag,
			generation: 0,
			changed: false,
			saved: false,
			truncation: TruncationFlags::default(),
		}
	}

	/// Wrap a native tag that replaces one previously handed out at `generation`
	///
	/// Indices from the replaced tag stay stale instead of aliasing the new entries.
	pub(crate) fn resumed(tag: NativeTag, generation: u64) -> Self {
		Self {
			generation,
			..Self::new(tag)
		}
	}

	/// The native tag
	pub fn tag(&self) -> &NativeTag {
		&self.tag
	}

	/// Unwrap the native tag
	pub fn into_tag(self) -> NativeTag {
		self.tag
	}

	/// The current enumeration generation
	pub fn generation(&self) -> u64 {
		self.generation
	}

	/// Whether the tag was modified since it was read or last saved
	pub fn is_changed(&self) -> bool {
		self.changed
	}

	pub(crate) fn mark_saved(&mut self) {
		self.changed = false;
		self.saved = true;
	}

	/// The fields truncated by writes so far (ID3v1 only)
	pub fn truncation(&self) -> TruncationFlags {
		self.truncation
	}

	/// Reset the truncation flags
	pub fn clear_truncation(&mut self) {
		self.truncation.clear();
	}

	/// See [`NativeTag::format_description`]
	///
	/// Once saved, ID3v2 tags are described as ID3v2.4, the version they are written as.
	pub fn format_description(&self) -> String {
		match &self.tag {
			NativeTag::Id3v2(_) if self.saved => String::from("ID3v2.4.0"),
			tag => tag.format_description(),
		}
	}

	/// Whether the tag has no entries
	pub fn is_empty(&self) -> bool {
		self.tag.is_empty()
	}

	/// Read all entries as frames
	///
	/// Every frame is stamped with its [`FrameIndex`] in the current generation.
	pub fn frames(&self, options: &TagOptions) -> FrameCollection {
		let frames = self.tag.enumerate(options);
		let indices = (0..frames.len())
			.map(|position| FrameIndex {
				generation: self.generation,
				position,
				ordinal: ordinal(&frames, position),
			})
			.collect::<Vec<_>>();

		frames
			.into_iter()
			.zip(indices)
			.map(|(mut frame, index)| {
				frame.set_index(Some(index));
				frame
			})
			.collect()
	}

	/// Overwrite the native entry of `frame`
	///
	/// A frame without an index that does not match any existing entry is added instead.
	///
	/// Returns `false` if the frame could not be written.
	pub fn set_frame(&mut self, frame: &Frame, options: &TagOptions) -> bool {
		let Some(position) = self.resolve(frame, options) else {
			if frame.index().is_none() {
				return self.add_frame(&mut frame.clone(), options);
			}

			log::debug!("Unable to resolve the index of frame `{}`", frame.key());
			return false;
		};

		let count_before = self.tag.entry_count();
		let mut ctx = WriteContext {
			options,
			truncation: &mut self.truncation,
		};

		if !self.tag.set(position, frame, &mut ctx) {
			return false;
		}

		// Setting a value can merge or split entries for some formats
		if self.tag.entry_count() != count_before {
			self.generation += 1;
		}

		self.changed = true;
		true
	}

	/// Add a new native entry for `frame`
	///
	/// On success, `frame` receives the index of the new entry.
	pub fn add_frame(&mut self, frame: &mut Frame, options: &TagOptions) -> bool {
		let mut ctx = WriteContext {
			options,
			truncation: &mut self.truncation,
		};

		if !self.tag.add(frame, &mut ctx) {
			log::debug!("Unable to add frame `{}`", frame.key());
			return false;
		}

		self.generation += 1;
		self.changed = true;

		let frames = self.tag.enumerate(options);
		let position = frames
			.iter()
			.rposition(|existing| existing.key().matches(frame.key()));

		frame.set_index(position.map(|position| FrameIndex {
			generation: self.generation,
			position,
			ordinal: ordinal(&frames, position),
		}));

		true
	}

	/// Delete the native entry of `frame`
	pub fn delete_frame(&mut self, frame: &Frame, options: &TagOptions) -> bool {
		let Some(position) = self.resolve(frame, options) else {
			return false;
		};

		if !self.tag.delete(position) {
			return false;
		}

		self.generation += 1;
		self.changed = true;
		true
	}

	/// Delete every entry enabled in `filter`
	///
	/// A filter that enables everything clears the tag in one go.
	pub fn delete_frames(&mut self, filter: &FrameFilter, options: &TagOptions) {
		let deleted = if filter.is_all_enabled() {
			let had_entries = !self.tag.is_empty();
			self.tag.clear();
			had_entries
		} else {
			self.tag.delete_matching(filter, options)
		};

		if deleted {
			self.generation += 1;
			self.changed = true;
		}
	}

	/// Find the position of the native entry of `frame`
	fn resolve(&self, frame: &Frame, options: &TagOptions) -> Option<usize> {
		let Some(index) = frame.index() else {
			return self
				.tag
				.enumerate(options)
				.iter()
				.position(|existing| existing.key().matches(frame.key()));
		};

		if index.generation == self.generation {
			return (index.position < self.tag.entry_count()).then_some(index.position);
		}

		log::debug!(
			"Frame `{}` has a stale index (generation {}, current {}), re-enumerating",
			frame.key(),
			index.generation,
			self.generation
		);

		let position = self
			.tag
			.enumerate(options)
			.iter()
			.enumerate()
			.filter(|(_, existing)| existing.key().matches(frame.key()))
			.nth(index.ordinal)
			.map(|(position, _)| position);

		if position.is_none() {
			log::debug!(
				"Frame `{}` #{} no longer exists",
				frame.key(),
				index.ordinal
			);
		}

		position
	}
}

impl From<NativeTag> for TagAdapter {
	fn from(input: NativeTag) -> Self {
		Self::new(input)
	}
}
