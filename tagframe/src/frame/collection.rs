use super::{ExtendedType, Frame, FrameFilter, FrameType};

/// The frames of one tag of one file
///
/// Frames are kept in native enumeration order. Inserting a frame whose key and index match an
/// existing frame replaces it. Formats that allow repeated keys (such as Vorbis Comments) produce
/// frames with the same key, distinguished by their indices.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameCollection {
	frames: Vec<Frame>,
}

impl FrameCollection {
	/// Create an empty `FrameCollection`
	pub fn new() -> Self {
		Self::default()
	}

	/// The number of frames
	pub fn len(&self) -> usize {
		self.frames.len()
	}

	/// Whether the collection is empty
	pub fn is_empty(&self) -> bool {
		self.frames.is_empty()
	}

	/// Returns an iterator over the frames
	pub fn iter(&self) -> impl Iterator<Item = &Frame> {
		self.frames.iter()
	}

	/// Returns a mutable iterator over the frames
	pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Frame> {
		self.frames.iter_mut()
	}

	/// Insert a frame
	///
	/// A frame with the same key and index is replaced and returned.
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::frame::{Frame, FrameCollection, FrameType};
	///
	/// let mut frames = FrameCollection::new();
	/// frames.insert(Frame::new(FrameType::Title, "Foo"));
	/// let old = frames.insert(Frame::new(FrameType::Title, "Bar"));
	///
	/// assert_eq!(old.map(|f| f.value().to_owned()), Some(String::from("Foo")));
	/// assert_eq!(frames.len(), 1);
	/// ```
	pub fn insert(&mut self, frame: Frame) -> Option<Frame> {
		match self
			.frames
			.iter_mut()
			.find(|existing| existing.key() == frame.key() && existing.index() == frame.index())
		{
			Some(existing) => Some(std::mem::replace(existing, frame)),
			None => {
				self.frames.push(frame);
				None
			},
		}
	}

	/// Find the first frame matching `key`
	///
	/// See [`ExtendedType::matches`].
	pub fn find(&self, key: &ExtendedType) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.key().matches(key))
	}

	/// Find the first frame matching `key`, mutably
	pub fn find_mut(&mut self, key: &ExtendedType) -> Option<&mut Frame> {
		self.frames.iter_mut().find(|frame| frame.key().matches(key))
	}

	/// Find the first frame of a type
	pub fn find_by_type(&self, ty: FrameType) -> Option<&Frame> {
		self.frames.iter().find(|frame| frame.ty() == ty)
	}

	/// Find the first frame with a name, ignoring ASCII case
	pub fn find_by_name(&self, name: &str) -> Option<&Frame> {
		self.frames
			.iter()
			.find(|frame| frame.name().eq_ignore_ascii_case(name))
	}

	/// Get the value of the first frame of a type
	pub fn value(&self, ty: FrameType) -> Option<&str> {
		self.find_by_type(ty).map(Frame::value)
	}

	/// Remove every frame matching `key`, returning them
	pub fn remove(&mut self, key: &ExtendedType) -> Vec<Frame> {
		let (removed, kept) = std::mem::take(&mut self.frames)
			.into_iter()
			.partition(|frame| frame.key().matches(key));
		self.frames = kept;
		removed
	}

	/// Retain frames by evaluating the predicate
	pub fn retain<P>(&mut self, predicate: P)
	where
		P: FnMut(&Frame) -> bool,
	{
		self.frames.retain(predicate)
	}

	/// Only keep the frames enabled in `filter`
	pub fn filter(&mut self, filter: &FrameFilter) {
		self.frames
			.retain(|frame| filter.is_enabled(frame.ty(), frame.name()));
	}

	/// Copy the frames of `other` into this collection
	///
	/// Frames matching an existing key overwrite its value and fields, everything else is appended.
	/// Copied frames carry no index, since they do not belong to the same native tag.
	pub fn merge(&mut self, other: &FrameCollection) {
		for frame in other.iter() {
			match self.find_mut(frame.key()) {
				Some(existing) => {
					if frame.fields().is_empty() || existing.fields().is_empty() {
						existing.set_value(frame.value());
					} else {
						existing.set_fields(frame.fields().to_vec());
					}
				},
				None => {
					let mut copied = frame.clone();
					copied.set_index(None);
					self.frames.push(copied);
				},
			}
		}
	}
}

impl IntoIterator for FrameCollection {
	type Item = Frame;
	type IntoIter = std::vec::IntoIter<Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.into_iter()
	}
}

impl<'a> IntoIterator for &'a FrameCollection {
	type Item = &'a Frame;
	type IntoIter = std::slice::Iter<'a, Frame>;

	fn into_iter(self) -> Self::IntoIter {
		self.frames.iter()
	}
}

impl FromIterator<Frame> for FrameCollection {
	fn from_iter<T: IntoIterator<Item = Frame>>(iter: T) -> Self {
		let mut collection = Self::new();
		for frame in iter {
			collection.insert(frame);
		}
		collection
	}
}
