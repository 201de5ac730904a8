use crate::frame::FrameType;

/// Which ID3v1 fields were clipped by the last write into them
///
/// ID3v1 stores a fixed set of short fields. Values that do not fit are truncated rather than
/// rejected, and the affected frame types are recorded here.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct TruncationFlags(u8);

impl TruncationFlags {
	fn bit(ty: FrameType) -> u8 {
		match ty {
			FrameType::Title => 1,
			FrameType::Artist => 1 << 1,
			FrameType::Album => 1 << 2,
			FrameType::Comment => 1 << 3,
			FrameType::Date => 1 << 4,
			FrameType::Track => 1 << 5,
			FrameType::Genre => 1 << 6,
			_ => 0,
		}
	}

	/// Whether the field of `ty` was truncated
	pub fn is_truncated(self, ty: FrameType) -> bool {
		let bit = Self::bit(ty);
		bit != 0 && self.0 & bit == bit
	}

	/// Whether any field was truncated
	pub fn any(self) -> bool {
		self.0 != 0
	}

	/// The truncated frame types
	pub fn types(self) -> impl Iterator<Item = FrameType> {
		FrameType::WELL_KNOWN
			.iter()
			.copied()
			.filter(move |ty| self.is_truncated(*ty))
	}

	pub(crate) fn set(&mut self, ty: FrameType, truncated: bool) {
		let bit = Self::bit(ty);
		if truncated {
			self.0 |= bit;
		} else {
			self.0 &= !bit;
		}
	}

	pub(crate) fn clear(&mut self) {
		self.0 = 0;
	}
}
