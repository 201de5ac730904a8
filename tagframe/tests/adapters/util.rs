use tagframe::adapter::{NativeTag, TagAdapter};
use tagframe::asf::AsfTag;

use lofty::ape::ApeTag;
use lofty::id3::v1::Id3v1Tag;
use lofty::id3::v2::Id3v2Tag;
use lofty::mp4::Ilst;
use lofty::ogg::VorbisComments;

pub const PNG_DATA: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0";

/// An empty adapter for every multi-field format
pub fn adapters() -> Vec<TagAdapter> {
	vec![
		TagAdapter::new(NativeTag::Id3v2(Id3v2Tag::default())),
		TagAdapter::new(NativeTag::Vorbis(VorbisComments::default())),
		TagAdapter::new(NativeTag::Ape(ApeTag::default())),
		TagAdapter::new(NativeTag::Mp4(Ilst::default())),
		TagAdapter::new(NativeTag::Asf(AsfTag::new())),
	]
}

pub fn id3v1() -> TagAdapter {
	TagAdapter::new(NativeTag::Id3v1(Id3v1Tag::default()))
}
