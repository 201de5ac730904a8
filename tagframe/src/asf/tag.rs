use super::attribute::{AsfAttribute, AsfValue};

/// An ordered list of ASF attributes
///
/// Attribute names may repeat, as in the extended content description object.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsfTag {
	attributes: Vec<AsfAttribute>,
}

impl AsfTag {
	/// Create an empty `AsfTag`
	pub fn new() -> Self {
		Self::default()
	}

	/// The number of attributes
	pub fn len(&self) -> usize {
		self.attributes.len()
	}

	/// Whether the tag has no attributes
	pub fn is_empty(&self) -> bool {
		self.attributes.is_empty()
	}

	/// All attributes, in order
	pub fn attributes(&self) -> &[AsfAttribute] {
		&self.attributes
	}

	/// The first attribute named `name`, ignoring ASCII case
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::asf::{AsfAttribute, AsfTag, AsfValue};
	///
	/// let mut tag = AsfTag::new();
	/// tag.push(AsfAttribute::new("WM/TrackNumber", AsfValue::DWord(5)));
	///
	/// assert_eq!(tag.get("wm/tracknumber").map(AsfAttribute::value), Some(&AsfValue::DWord(5)));
	/// ```
	pub fn get(&self, name: &str) -> Option<&AsfAttribute> {
		self.attributes
			.iter()
			.find(|attribute| attribute.name().eq_ignore_ascii_case(name))
	}

	/// Append an attribute
	pub fn push(&mut self, attribute: AsfAttribute) {
		self.attributes.push(attribute);
	}

	/// Replace every attribute named like `attribute` with it
	///
	/// The new attribute takes the position of the first one it replaces.
	pub fn insert(&mut self, attribute: AsfAttribute) {
		match self
			.attributes
			.iter()
			.position(|existing| existing.name().eq_ignore_ascii_case(attribute.name()))
		{
			Some(position) => {
				self.attributes[position] = attribute;
				let name = self.attributes[position].name().to_owned();
				let mut current = 0;
				self.attributes.retain(|existing| {
					let keep = current <= position || !existing.name().eq_ignore_ascii_case(&name);
					current += 1;
					keep
				});
			},
			None => self.attributes.push(attribute),
		}
	}

	/// Remove every attribute named `name`, returning them
	pub fn remove(&mut self, name: &str) -> Vec<AsfAttribute> {
		let (removed, kept) = std::mem::take(&mut self.attributes)
			.into_iter()
			.partition(|attribute| attribute.name().eq_ignore_ascii_case(name));
		self.attributes = kept;
		removed
	}

	/// Remove the attribute at `position`
	pub fn remove_at(&mut self, position: usize) -> Option<AsfAttribute> {
		(position < self.attributes.len()).then(|| self.attributes.remove(position))
	}

	/// Replace the value of the attribute at `position`
	///
	/// Returns `false` if there is no such attribute.
	pub fn set_value_at(&mut self, position: usize, value: AsfValue) -> bool {
		match self.attributes.get_mut(position) {
			Some(attribute) => {
				attribute.set_value(value);
				true
			},
			None => false,
		}
	}

	/// Remove every attribute
	pub fn clear(&mut self) {
		self.attributes.clear();
	}
}

impl<'a> IntoIterator for &'a AsfTag {
	type Item = &'a AsfAttribute;
	type IntoIter = std::slice::Iter<'a, AsfAttribute>;

	fn into_iter(self) -> Self::IntoIter {
		self.attributes.iter()
	}
}

impl FromIterator<AsfAttribute> for AsfTag {
	fn from_iter<T: IntoIterator<Item = AsfAttribute>>(iter: T) -> Self {
		Self {
			attributes: iter.into_iter().collect(),
		}
	}
}
