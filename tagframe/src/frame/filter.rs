use super::FrameType;

use std::collections::HashSet;

/// Selects frames by type, and [`FrameType::Other`] frames by name
///
/// A new filter enables everything. Deleting the frames of a filter that enables everything
/// clears the whole tag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FrameFilter {
	disabled_types: HashSet<FrameType>,
	disabled_names: HashSet<String>,
}

impl FrameFilter {
	/// Create a filter enabling all frames
	pub fn new() -> Self {
		Self::default()
	}

	/// Create a filter enabling only the given types
	///
	/// # Examples
	///
	/// ```rust
	/// use tagframe::frame::{FrameFilter, FrameType};
	///
	/// let filter = FrameFilter::only(&[FrameType::Picture]);
	/// assert!(filter.is_enabled(FrameType::Picture, "APIC"));
	/// assert!(!filter.is_enabled(FrameType::Title, "TIT2"));
	/// ```
	pub fn only(types: &[FrameType]) -> Self {
		let mut filter = Self::new();
		for ty in FrameType::WELL_KNOWN
			.iter()
			.chain(&[FrameType::Other, FrameType::UnknownFrame])
		{
			filter.set_type_enabled(*ty, types.contains(ty));
		}
		filter
	}

	/// Enable or disable a frame type
	pub fn set_type_enabled(&mut self, ty: FrameType, enabled: bool) {
		if enabled {
			self.disabled_types.remove(&ty);
		} else {
			self.disabled_types.insert(ty);
		}
	}

	/// Enable or disable an [`FrameType::Other`] frame by name
	///
	/// Names are compared ignoring ASCII case.
	pub fn set_name_enabled(&mut self, name: &str, enabled: bool) {
		let name = name.to_ascii_uppercase();
		if enabled {
			self.disabled_names.remove(&name);
		} else {
			self.disabled_names.insert(name);
		}
	}

	/// Whether a frame is enabled
	pub fn is_enabled(&self, ty: FrameType, name: &str) -> bool {
		if self.disabled_types.contains(&ty) {
			return false;
		}

		match ty {
			FrameType::Other | FrameType::UnknownFrame => {
				!self.disabled_names.contains(&name.to_ascii_uppercase())
			},
			_ => true,
		}
	}

	/// Whether every frame is enabled
	pub fn is_all_enabled(&self) -> bool {
		self.disabled_types.is_empty() && self.disabled_names.is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn new_filter_enables_everything() {
		let filter = FrameFilter::new();
		assert!(filter.is_all_enabled());
		assert!(filter.is_enabled(FrameType::Title, "TIT2"));
		assert!(filter.is_enabled(FrameType::Other, "anything"));
	}

	#[test_log::test]
	fn names_only_apply_to_other_frames() {
		let mut filter = FrameFilter::new();
		filter.set_name_enabled("priv", false);

		assert!(!filter.is_all_enabled());
		assert!(!filter.is_enabled(FrameType::Other, "PRIV"));
		assert!(filter.is_enabled(FrameType::Other, "GEOB"));
		assert!(filter.is_enabled(FrameType::Title, "PRIV"));

		filter.set_name_enabled("PRIV", true);
		assert!(filter.is_all_enabled());
	}

	#[test_log::test]
	fn only() {
		let filter = FrameFilter::only(&[FrameType::Title, FrameType::Other]);
		assert!(filter.is_enabled(FrameType::Title, ""));
		assert!(filter.is_enabled(FrameType::Other, "MOOD"));
		assert!(!filter.is_enabled(FrameType::UnknownFrame, "????"));
		assert!(!filter.is_enabled(FrameType::Album, ""));
	}
}
