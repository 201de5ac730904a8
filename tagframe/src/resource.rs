//! Bounding the number of files with loaded tags
//!
//! A [`ResourceManager`] owns a set of files and keeps the number of open ones near
//! [`ResourceOptions::max_open_files`]. Once the open count reaches the cap plus the
//! [slack](ResourceOptions::eviction_slack), files are closed until the cap is met again. Which files
//! are closed is decided by an [`EvictionPolicy`], files with unsaved changes are never closed.
//!
//! Closing is invisible to callers: a [`ManagedFile`] reopens itself when it is used again.
//!
//! # Examples
//!
//! ```rust,no_run
//! use tagframe::config::{ResourceOptions, TagOptions};
//! use tagframe::file::{TagVersion, TaggedFile};
//! use tagframe::resource::ResourceManager;
//!
//! # fn main() -> tagframe::error::Result<()> {
//! let mut manager = ResourceManager::new(ResourceOptions::default());
//! let id = manager.insert(TaggedFile::new("song.flac", TagOptions::default()));
//!
//! let frames = manager.open(id)?.frames(TagVersion::V2)?;
//! println!("{} frames", frames.len());
//!
//! for failed in manager.write_all(false, true) {
//! 	eprintln!("Unable to write `{}`", failed.display());
//! }
//! # Ok(()) }
//! ```

use crate::config::ResourceOptions;
use crate::error::Result;
use crate::file::WriteOutcome;
use crate::macros::err;

use std::path::{Path, PathBuf};

/// A file whose native resources can be released and reacquired
pub trait ManagedFile {
	/// The path of the file on disk
	fn path(&self) -> &Path;

	/// Whether the native resources are currently held
	fn is_open(&self) -> bool;

	/// Whether there are unsaved changes
	fn is_changed(&self) -> bool;

	/// Acquire the native resources
	///
	/// # Errors
	///
	/// Depends on the implementor, generally I/O and parsing errors.
	fn open(&mut self) -> Result<()>;

	/// Release the native resources
	///
	/// Returns `false` if the file refused to close.
	fn close(&mut self) -> bool;

	/// Write all unsaved changes
	///
	/// # Errors
	///
	/// Depends on the implementor, generally I/O errors.
	fn write(&mut self, force: bool, preserve_timestamps: bool) -> Result<WriteOutcome>;
}

/// A handle to a file owned by a [`ResourceManager`]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FileId(usize);

impl FileId {
	/// The slot of the file within its manager
	pub fn index(self) -> usize {
		self.0
	}
}

/// An open file considered for eviction
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Candidate {
	/// The file
	pub id: FileId,
	/// Whether the file has unsaved changes
	pub changed: bool,
}

/// Chooses which open files to close
pub trait EvictionPolicy {
	/// Pick up to `count` files to close
	///
	/// `candidates` are ordered from least to most recently used. Picking a changed file has no
	/// effect, it will refuse to close.
	fn select(&mut self, candidates: &[Candidate], count: usize) -> Vec<FileId>;
}

/// Close the least recently used files without unsaved changes
#[derive(Debug, Copy, Clone, Default)]
pub struct OldestCleanFirst;

impl EvictionPolicy for OldestCleanFirst {
	fn select(&mut self, candidates: &[Candidate], count: usize) -> Vec<FileId> {
		candidates
			.iter()
			.filter(|candidate| !candidate.changed)
			.take(count)
			.map(|candidate| candidate.id)
			.collect()
	}
}

#[derive(Debug)]
struct Entry<F> {
	file: F,
	last_used: u64,
}

/// Owns files and caps how many of them are open
#[derive(Debug)]
pub struct ResourceManager<F, P = OldestCleanFirst> {
	entries: Vec<Option<Entry<F>>>,
	options: ResourceOptions,
	policy: P,
	clock: u64,
}

impl<F: ManagedFile> ResourceManager<F> {
	/// Create an empty manager with the default [`EvictionPolicy`]
	pub fn new(options: ResourceOptions) -> Self {
		Self::with_policy(options, OldestCleanFirst)
	}
}

impl<F: ManagedFile, P: EvictionPolicy> ResourceManager<F, P> {
	/// Create an empty manager using `policy` to choose which files to close
	pub fn with_policy(options: ResourceOptions, policy: P) -> Self {
		Self {
			entries: Vec::new(),
			options,
			policy,
			clock: 0,
		}
	}

	/// The options of the manager
	pub fn options(&self) -> ResourceOptions {
		self.options
	}

	/// Take ownership of `file`
	///
	/// An already open file is registered immediately.
	pub fn insert(&mut self, file: F) -> FileId {
		let is_open = file.is_open();

		let id = FileId(self.entries.len());
		self.entries.push(Some(Entry { file, last_used: 0 }));

		if is_open {
			self.register_open(id);
		}

		id
	}

	/// Give up ownership of a file
	pub fn remove(&mut self, id: FileId) -> Option<F> {
		self.entries
			.get_mut(id.0)
			.and_then(Option::take)
			.map(|entry| entry.file)
	}

	/// The number of files owned
	pub fn len(&self) -> usize {
		self.entries.iter().flatten().count()
	}

	/// Whether no files are owned
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// The number of open files
	pub fn open_count(&self) -> usize {
		self.entries
			.iter()
			.flatten()
			.filter(|entry| entry.file.is_open())
			.count()
	}

	/// The handles of all owned files
	pub fn ids(&self) -> impl Iterator<Item = FileId> + '_ {
		self.entries
			.iter()
			.enumerate()
			.filter(|(_, entry)| entry.is_some())
			.map(|(index, _)| FileId(index))
	}

	/// Get a reference to a file, without touching its usage
	pub fn get(&self, id: FileId) -> Option<&F> {
		self.entries
			.get(id.0)
			.and_then(Option::as_ref)
			.map(|entry| &entry.file)
	}

	/// Get a mutable reference to a file about to be used
	///
	/// The file counts as the most recently used one, and room is made for it to open.
	pub fn get_mut(&mut self, id: FileId) -> Option<&mut F> {
		self.get(id)?;
		self.register_open(id);
		self.entry_mut(id).map(|entry| &mut entry.file)
	}

	/// Open a file, making room for it first
	///
	/// # Errors
	///
	/// * `id` does not refer to an owned file ([`ErrorKind::FileNotOpen`])
	/// * See [`ManagedFile::open`]
	///
	/// [`ErrorKind::FileNotOpen`]: crate::error::ErrorKind::FileNotOpen
	pub fn open(&mut self, id: FileId) -> Result<&mut F> {
		if self.get(id).is_none() {
			err!(FileNotOpen);
		}

		self.register_open(id);

		let Some(entry) = self.entry_mut(id) else {
			err!(FileNotOpen);
		};

		entry.file.open()?;
		Ok(&mut entry.file)
	}

	/// Mark `id` as the most recently used file, and evict others if the cap is exceeded
	///
	/// `id` is counted as open even if it is not open yet.
	pub fn register_open(&mut self, id: FileId) {
		self.clock += 1;
		let clock = self.clock;

		let Some(entry) = self.entry_mut(id) else {
			return;
		};

		entry.last_used = clock;
		let incoming = usize::from(!entry.file.is_open());

		let open = self.open_count() + incoming;
		let max_open = self.options.max_open_files;
		if open < max_open + self.options.eviction_slack {
			return;
		}

		let mut candidates = self
			.entries
			.iter()
			.enumerate()
			.filter_map(|(index, entry)| {
				let entry = entry.as_ref()?;
				(index != id.0 && entry.file.is_open()).then_some((
					entry.last_used,
					Candidate {
						id: FileId(index),
						changed: entry.file.is_changed(),
					},
				))
			})
			.collect::<Vec<_>>();

		candidates.sort_by_key(|(last_used, _)| *last_used);
		let candidates = candidates
			.into_iter()
			.map(|(_, candidate)| candidate)
			.collect::<Vec<_>>();

		let excess = open.saturating_sub(max_open);
		let mut closed = 0;
		for victim in self.policy.select(&candidates, excess) {
			let Some(entry) = self.entry_mut(victim) else {
				continue;
			};

			if entry.file.is_changed() || !entry.file.close() {
				log::debug!("Unable to evict `{}`", entry.file.path().display());
				continue;
			}

			log::trace!("Evicted `{}`", entry.file.path().display());
			closed += 1;
		}

		log::debug!("Evicted {closed} of {excess} files over the limit of {max_open}");
	}

	/// Write every changed file, or every file with `force`
	///
	/// A failing file does not stop the others. Returns the paths of the files that failed.
	pub fn write_all(&mut self, force: bool, preserve_timestamps: bool) -> Vec<PathBuf> {
		let mut failed = Vec::new();

		for entry in self.entries.iter_mut().flatten() {
			if !force && !entry.file.is_changed() {
				continue;
			}

			if let Err(e) = entry.file.write(force, preserve_timestamps) {
				log::warn!("Failed to write `{}`: {e}", entry.file.path().display());
				failed.push(entry.file.path().to_path_buf());
			}
		}

		failed
	}

	fn entry_mut(&mut self, id: FileId) -> Option<&mut Entry<F>> {
		self.entries.get_mut(id.0).and_then(Option::as_mut)
	}
}
