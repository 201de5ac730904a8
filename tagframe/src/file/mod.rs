//! Files and their tag slots
//!
//! A [`TaggedFile`] exposes up to two tags of a file through the frame model: the legacy tag
//! ([`TagVersion::V1`], ID3v1) and the primary tag ([`TagVersion::V2`], which is ID3v2, Vorbis
//! Comments, APE or MP4 depending on the format).
//!
//! The file is read lazily. Every operation that needs the tags reads them first, including after the
//! file was [closed](TaggedFile::close), so frames and indices stay usable across a close. Indices
//! handed out before a close are stale afterwards, and are resolved by key like any other stale index.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tagframe::config::TagOptions;
//! use tagframe::file::{TagVersion, TaggedFile};
//! use tagframe::frame::{Frame, FrameType};
//!
//! # fn main() -> tagframe::error::Result<()> {
//! let mut file = TaggedFile::new("song.mp3", TagOptions::default());
//!
//! for frame in &file.frames(TagVersion::V2)? {
//! 	println!("{}: {}", frame.name(), frame.display_value());
//! }
//!
//! file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))?;
//! file.write_tags(false, true)?;
//! # Ok(()) }
//! ```

mod detail;
pub(crate) mod native;

pub use detail::{DetailInfo, format_name};

use crate::adapter::{NativeTag, TagAdapter, TruncationFlags};
use crate::config::TagOptions;
use crate::error::Result;
use crate::frame::{ExtendedType, Frame, FrameCollection, FrameFilter};
use crate::macros::err;
use crate::resource::ManagedFile;
use crate::track_data::TrackData;

use std::fs::{FileTimes, OpenOptions};
use std::path::{Path, PathBuf};

use lofty::file::FileType;
use lofty::properties::FileProperties;
use lofty::tag::TagType;

/// One of the two tag slots of a file
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TagVersion {
	/// The legacy tag (ID3v1)
	V1,
	/// The primary tag of the format
	V2,
}

/// The result of a successful [`TaggedFile::write_tags`]
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct WriteOutcome {
	pub(crate) written: bool,
	pub(crate) renamed: bool,
}

impl WriteOutcome {
	/// Whether any tag was written to or stripped from the file
	pub fn written(&self) -> bool {
		self.written
	}

	/// Whether a pending rename was applied
	pub fn renamed(&self) -> bool {
		self.renamed
	}
}

#[derive(Debug, Default)]
struct Slot {
	tag_type: Option<TagType>,
	adapter: Option<TagAdapter>,
	removed: bool,
	next_generation: u64,
	format: Option<String>,
}

impl Slot {
	fn load(&mut self, tag_type: Option<TagType>, tag: Option<NativeTag>) {
		self.release();

		self.tag_type = tag_type;
		self.adapter = tag.map(|tag| TagAdapter::resumed(tag, self.next_generation));
		self.removed = false;
		self.format = self.adapter.as_ref().map(TagAdapter::format_description);
	}

	// Drops the adapter, indices of its frames stay stale for any later adapter
	fn release(&mut self) {
		if let Some(adapter) = self.adapter.take() {
			self.next_generation = self.next_generation.max(adapter.generation() + 1);
			self.format = Some(adapter.format_description());
		}
	}

	fn is_changed(&self) -> bool {
		self.removed || self.adapter.as_ref().is_some_and(TagAdapter::is_changed)
	}

	fn adapter_or_insert(&mut self) -> Option<&mut TagAdapter> {
		if self.adapter.is_none() {
			let tag = native::empty_tag(self.tag_type?)?;
			self.adapter = Some(TagAdapter::resumed(tag, self.next_generation));
		}

		self.adapter.as_mut()
	}
}

/// An audio file and its tags
#[derive(Debug)]
pub struct TaggedFile {
	path: PathBuf,
	new_path: Option<PathBuf>,
	options: TagOptions,
	file_type: Option<FileType>,
	properties: FileProperties,
	open: bool,
	v1: Slot,
	v2: Slot,
}

impl TaggedFile {
	/// Create a `TaggedFile` for the file at `path`
	///
	/// Nothing is read until the tags are first needed.
	pub fn new(path: impl Into<PathBuf>, options: TagOptions) -> Self {
		Self {
			path: path.into(),
			new_path: None,
			options,
			file_type: None,
			properties: FileProperties::default(),
			open: false,
			v1: Slot::default(),
			v2: Slot::default(),
		}
	}

	/// The current path of the file
	pub fn path(&self) -> &Path {
		&self.path
	}

	/// The options used to read and write frames
	pub fn options(&self) -> TagOptions {
		self.options
	}

	/// The detected file type, if the file was read
	pub fn file_type(&self) -> Option<FileType> {
		self.file_type
	}

	/// Whether the tags are currently loaded
	pub fn is_open(&self) -> bool {
		self.open
	}

	/// Read the tags of the file
	///
	/// Unless `force` is set, this does nothing if the tags are already loaded. A forced read
	/// discards all unsaved changes.
	///
	/// # Errors
	///
	/// * The file could not be opened
	/// * The format is unknown
	/// * The native library failed to parse the file
	pub fn read_tags(&mut self, force: bool) -> Result<()> {
		if self.open && !force {
			return Ok(());
		}

		log::debug!("Reading tags from `{}`", self.path.display());

		let mut file = OpenOptions::new().read(true).open(&self.path)?;
		let native = native::read(&mut file, &self.options)?;

		self.v1.load(
			native::slot_tag_type(native.file_type, TagVersion::V1),
			native.v1,
		);
		self.v2.load(
			native::slot_tag_type(native.file_type, TagVersion::V2),
			native.v2,
		);

		self.file_type = Some(native.file_type);
		self.properties = native.properties;
		self.open = true;

		Ok(())
	}

	/// Release the loaded tags
	///
	/// The tags are read again when next needed. Returns `false` and keeps the tags if there are
	/// unsaved changes.
	pub fn close(&mut self) -> bool {
		if self.v1.is_changed() || self.v2.is_changed() {
			return false;
		}

		if self.open {
			log::trace!("Closing `{}`", self.path.display());
		}

		self.v1.release();
		self.v2.release();
		self.open = false;
		true
	}

	fn ensure_open(&mut self) -> Result<()> {
		if !self.open {
			self.read_tags(false)?;
		}

		Ok(())
	}

	// Reads the file once, later calls answer from the cached state even if closed
	fn ensure_probed(&mut self) -> Result<()> {
		if self.file_type.is_none() {
			self.read_tags(false)?;
		}

		Ok(())
	}

	fn slot(&self, version: TagVersion) -> &Slot {
		match version {
			TagVersion::V1 => &self.v1,
			TagVersion::V2 => &self.v2,
		}
	}

	fn slot_mut(&mut self, version: TagVersion) -> &mut Slot {
		match version {
			TagVersion::V1 => &mut self.v1,
			TagVersion::V2 => &mut self.v2,
		}
	}

	/// Whether the format has a slot for `version`
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn supports(&mut self, version: TagVersion) -> Result<bool> {
		self.ensure_probed()?;
		Ok(self.slot(version).tag_type.is_some())
	}

	/// Whether the file has a tag of `version`
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn has_tag(&mut self, version: TagVersion) -> Result<bool> {
		self.ensure_probed()?;

		let slot = self.slot(version);
		if self.open {
			return Ok(slot.adapter.is_some());
		}

		Ok(slot.format.is_some() && !slot.removed)
	}

	/// A short description of the tag format of `version`, such as "ID3v2.3.0" or "Vorbis"
	///
	/// Returns `None` if the file has no such tag.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn tag_format(&mut self, version: TagVersion) -> Result<Option<String>> {
		self.ensure_probed()?;

		let slot = self.slot(version);
		if self.open {
			return Ok(slot.adapter.as_ref().map(TagAdapter::format_description));
		}

		Ok(slot.format.clone())
	}

	/// All frames of the tag of `version`
	///
	/// The collection is empty if the file has no such tag.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn frames(&mut self, version: TagVersion) -> Result<FrameCollection> {
		self.ensure_open()?;

		let options = self.options;
		Ok(self
			.slot(version)
			.adapter
			.as_ref()
			.map(|adapter| adapter.frames(&options))
			.unwrap_or_default())
	}

	/// The common frames of the tag of `version`
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn track_data(&mut self, version: TagVersion) -> Result<TrackData> {
		Ok(TrackData::from_frames(&self.frames(version)?))
	}

	/// Overwrite the native entry of `frame`, creating the tag if needed
	///
	/// See [`TagAdapter::set_frame`]. Returns `false` if the format has no slot for `version`, or
	/// the frame could not be written.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn set_frame(&mut self, version: TagVersion, frame: &Frame) -> Result<bool> {
		self.ensure_open()?;

		let options = self.options;
		Ok(self
			.slot_mut(version)
			.adapter_or_insert()
			.is_some_and(|adapter| adapter.set_frame(frame, &options)))
	}

	/// Add a native entry for `frame`, creating the tag if needed
	///
	/// On success, `frame` receives its new index.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn add_frame(&mut self, version: TagVersion, frame: &mut Frame) -> Result<bool> {
		self.ensure_open()?;

		let options = self.options;
		Ok(self
			.slot_mut(version)
			.adapter_or_insert()
			.is_some_and(|adapter| adapter.add_frame(frame, &options)))
	}

	/// Delete the native entry of `frame`
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn delete_frame(&mut self, version: TagVersion, frame: &Frame) -> Result<bool> {
		self.ensure_open()?;

		let options = self.options;
		Ok(self
			.slot_mut(version)
			.adapter
			.as_mut()
			.is_some_and(|adapter| adapter.delete_frame(frame, &options)))
	}

	/// Delete every frame of `version` enabled in `filter`
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn delete_frames(&mut self, version: TagVersion, filter: &FrameFilter) -> Result<()> {
		self.ensure_open()?;

		let options = self.options;
		if let Some(adapter) = self.slot_mut(version).adapter.as_mut() {
			adapter.delete_frames(filter, &options);
		}

		Ok(())
	}

	/// Remove the tag of `version`
	///
	/// The tag is stripped from the file by the next [`TaggedFile::write_tags`]. Returns `false` if
	/// the format has no slot for `version`.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn remove_tags(&mut self, version: TagVersion) -> Result<bool> {
		self.ensure_open()?;

		let slot = self.slot_mut(version);
		if slot.tag_type.is_none() {
			return Ok(false);
		}

		slot.release();
		slot.format = None;
		slot.removed = true;
		Ok(true)
	}

	/// Copy the frames of `from` enabled in `filter` into `to`
	///
	/// Frames the target tag has no representation for are skipped. Returns the number of frames
	/// copied.
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn copy_frames(
		&mut self,
		from: TagVersion,
		to: TagVersion,
		filter: &FrameFilter,
	) -> Result<usize> {
		let mut frames = self.frames(from)?;
		frames.filter(filter);

		let mut copied = 0;
		let mut seen: Vec<ExtendedType> = Vec::new();
		for mut frame in frames {
			frame.set_index(None);

			// Repeated keys are added, so every value survives
			let stored = if seen.iter().any(|key| key.matches(frame.key())) {
				self.add_frame(to, &mut frame)?
			} else {
				seen.push(frame.key().clone());
				self.set_frame(to, &frame)?
			};

			if stored {
				copied += 1;
			}
		}

		log::debug!("Copied {copied} frames from {from:?} to {to:?}");
		Ok(copied)
	}

	/// The fields clipped by writes to the tag of `version` so far
	pub fn truncation(&self, version: TagVersion) -> TruncationFlags {
		self.slot(version)
			.adapter
			.as_ref()
			.map(TagAdapter::truncation)
			.unwrap_or_default()
	}

	/// Schedule a rename of the file, applied by the next [`TaggedFile::write_tags`]
	///
	/// `file_name` replaces the last component of the current path.
	pub fn set_filename(&mut self, file_name: impl AsRef<Path>) {
		let new_path = self.path.with_file_name(file_name.as_ref());
		self.new_path = (new_path != self.path).then_some(new_path);
	}

	/// The path of the file after pending renames
	pub fn filename(&self) -> &Path {
		self.new_path.as_deref().unwrap_or(&self.path)
	}

	/// Audio details of the file
	///
	/// # Errors
	///
	/// See [`TaggedFile::read_tags`]
	pub fn detail_info(&mut self) -> Result<DetailInfo> {
		self.ensure_probed()?;

		let Some(file_type) = self.file_type else {
			err!(UnknownFormat);
		};

		Ok(DetailInfo::new(file_type, &self.properties))
	}

	/// Whether there are unsaved changes, including a pending rename
	pub fn is_changed(&self) -> bool {
		self.new_path.is_some() || self.v1.is_changed() || self.v2.is_changed()
	}

	/// Whether the tag of `version` has unsaved changes
	pub fn is_changed_version(&self, version: TagVersion) -> bool {
		self.slot(version).is_changed()
	}

	/// Write all changed tags and apply a pending rename
	///
	/// With `force`, every tag is written even if unchanged. With `preserve_timestamps`, the
	/// access and modification times of the file are restored after writing.
	///
	/// Empty and removed tags are stripped from the file.
	///
	/// # Errors
	///
	/// * The file could not be opened or written
	/// * The native library failed to write a tag
	/// * The rename target already exists ([`ErrorKind::RenameTarget`])
	///
	/// [`ErrorKind::RenameTarget`]: crate::error::ErrorKind::RenameTarget
	pub fn write_tags(&mut self, force: bool, preserve_timestamps: bool) -> Result<WriteOutcome> {
		let mut outcome = WriteOutcome::default();

		if force {
			self.ensure_open()?;
		}

		if force || self.v1.is_changed() || self.v2.is_changed() {
			outcome.written = self.write_slots(force, preserve_timestamps)?;
		}

		if let Some(new_path) = &self.new_path {
			if new_path.exists() {
				err!(RenameTarget(new_path.clone()));
			}

			log::debug!(
				"Renaming `{}` to `{}`",
				self.path.display(),
				new_path.display()
			);

			std::fs::rename(&self.path, new_path)?;
			self.path = new_path.clone();
			self.new_path = None;
			outcome.renamed = true;
		}

		Ok(outcome)
	}

	fn write_slots(&mut self, force: bool, preserve_timestamps: bool) -> Result<bool> {
		let times = if preserve_timestamps {
			let metadata = std::fs::metadata(&self.path)?;
			Some(
				FileTimes::new()
					.set_accessed(metadata.accessed()?)
					.set_modified(metadata.modified()?),
			)
		} else {
			None
		};

		let mut file = OpenOptions::new()
			.read(true)
			.write(true)
			.open(&self.path)?;

		let mut written = false;
		for slot in [&mut self.v2, &mut self.v1] {
			let Some(tag_type) = slot.tag_type else {
				continue;
			};

			if !force && !slot.is_changed() {
				continue;
			}

			match &mut slot.adapter {
				Some(adapter) if !adapter.is_empty() => {
					log::debug!("Writing {tag_type:?} to `{}`", self.path.display());
					native::save(&mut file, adapter.tag())?;
					adapter.mark_saved();
				},
				Some(adapter) => {
					log::debug!("Stripping empty {tag_type:?} from `{}`", self.path.display());
					native::strip(&mut file, tag_type)?;
					adapter.mark_saved();
				},
				None if slot.removed => {
					log::debug!("Stripping {tag_type:?} from `{}`", self.path.display());
					native::strip(&mut file, tag_type)?;
				},
				None => continue,
			}

			slot.removed = false;
			slot.format = slot.adapter.as_ref().map(TagAdapter::format_description);
			written = true;
		}

		if let Some(times) = times {
			file.set_times(times)?;
		}

		Ok(written)
	}
}

impl ManagedFile for TaggedFile {
	fn path(&self) -> &Path {
		&self.path
	}

	fn is_open(&self) -> bool {
		self.open
	}

	fn is_changed(&self) -> bool {
		TaggedFile::is_changed(self)
	}

	fn open(&mut self) -> Result<()> {
		self.read_tags(false)
	}

	fn close(&mut self) -> bool {
		TaggedFile::close(self)
	}

	fn write(&mut self, force: bool, preserve_timestamps: bool) -> Result<WriteOutcome> {
		self.write_tags(force, preserve_timestamps)
	}
}
