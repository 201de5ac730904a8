use super::TagVersion;
use crate::adapter::NativeTag;
use crate::config::TagOptions;
use crate::error::Result;
use crate::macros::err;

use std::fs::File;
use std::io::{Seek, SeekFrom};

use lofty::aac::AacFile;
use lofty::ape::{ApeFile, ApeTag};
use lofty::config::{ParseOptions, WriteOptions};
use lofty::file::{AudioFile, FileType};
use lofty::flac::FlacFile;
use lofty::id3::v1::Id3v1Tag;
use lofty::id3::v2::Id3v2Tag;
use lofty::iff::aiff::AiffFile;
use lofty::iff::wav::WavFile;
use lofty::mp4::{Ilst, Mp4File};
use lofty::mpeg::MpegFile;
use lofty::musepack::MpcFile;
use lofty::ogg::{OggPictureStorage, OpusFile, SpeexFile, VorbisComments, VorbisFile};
use lofty::probe::Probe;
use lofty::properties::FileProperties;
use lofty::tag::{TagExt, TagType};
use lofty::wavpack::WavPackFile;

/// The tags and properties of a file, detached from the file itself
pub(crate) struct NativeFile {
	pub(crate) file_type: FileType,
	pub(crate) v1: Option<NativeTag>,
	pub(crate) v2: Option<NativeTag>,
	pub(crate) properties: FileProperties,
}

/// The tag type stored in a slot of `file_type`, if the slot exists
pub(crate) fn slot_tag_type(file_type: FileType, version: TagVersion) -> Option<TagType> {
	match (version, file_type) {
		(
			TagVersion::V1,
			FileType::Mpeg | FileType::Aac | FileType::Ape | FileType::WavPack | FileType::Mpc,
		) => Some(TagType::Id3v1),
		(TagVersion::V1, _) => None,
		(
			TagVersion::V2,
			FileType::Mpeg | FileType::Aac | FileType::Wav | FileType::Aiff | FileType::Mpc,
		) => Some(TagType::Id3v2),
		(
			TagVersion::V2,
			FileType::Flac | FileType::Vorbis | FileType::Opus | FileType::Speex,
		) => Some(TagType::VorbisComments),
		(TagVersion::V2, FileType::Ape | FileType::WavPack) => Some(TagType::Ape),
		(TagVersion::V2, FileType::Mp4) => Some(TagType::Mp4Ilst),
		_ => None,
	}
}

/// An empty native tag of `tag_type`
pub(crate) fn empty_tag(tag_type: TagType) -> Option<NativeTag> {
	let tag = match tag_type {
		TagType::Id3v1 => NativeTag::Id3v1(Id3v1Tag::default()),
		TagType::Id3v2 => NativeTag::Id3v2(Id3v2Tag::default()),
		TagType::VorbisComments => NativeTag::Vorbis(VorbisComments::default()),
		TagType::Ape => NativeTag::Ape(ApeTag::default()),
		TagType::Mp4Ilst => NativeTag::Mp4(Ilst::default()),
		_ => return None,
	};

	Some(tag)
}

fn properties<F>(file: &F) -> FileProperties
where
	F: AudioFile,
	F::Properties: Clone + Into<FileProperties>,
{
	file.properties().clone().into()
}

/// Detect the format of `file` and read its tags
///
/// # Errors
///
/// * The format could not be determined, or has no tag slots
/// * The native library failed to parse the file
pub(crate) fn read(file: &mut File, options: &TagOptions) -> Result<NativeFile> {
	let probe = Probe::new(&mut *file).guess_file_type()?;
	let Some(file_type) = probe.file_type() else {
		err!(UnknownFormat);
	};

	log::debug!("Detected file type: {file_type:?}");

	file.seek(SeekFrom::Start(0))?;

	let parse_options = ParseOptions::new().read_properties(options.read_properties);
	let (v1, v2, properties) = match file_type {
		FileType::Mpeg => {
			let mut mpeg = MpegFile::read_from(file, parse_options)?;
			(
				mpeg.remove_id3v1().map(NativeTag::Id3v1),
				mpeg.remove_id3v2().map(NativeTag::Id3v2),
				properties(&mpeg),
			)
		},
		FileType::Aac => {
			let mut aac = AacFile::read_from(file, parse_options)?;
			(
				aac.remove_id3v1().map(NativeTag::Id3v1),
				aac.remove_id3v2().map(NativeTag::Id3v2),
				properties(&aac),
			)
		},
		FileType::Mpc => {
			let mut mpc = MpcFile::read_from(file, parse_options)?;
			(
				mpc.remove_id3v1().map(NativeTag::Id3v1),
				mpc.remove_id3v2().map(NativeTag::Id3v2),
				properties(&mpc),
			)
		},
		FileType::Wav => {
			let mut wav = WavFile::read_from(file, parse_options)?;
			(
				None,
				wav.remove_id3v2().map(NativeTag::Id3v2),
				properties(&wav),
			)
		},
		FileType::Aiff => {
			let mut aiff = AiffFile::read_from(file, parse_options)?;
			(
				None,
				aiff.remove_id3v2().map(NativeTag::Id3v2),
				properties(&aiff),
			)
		},
		FileType::Ape => {
			let mut ape = ApeFile::read_from(file, parse_options)?;
			(
				ape.remove_id3v1().map(NativeTag::Id3v1),
				ape.remove_ape().map(NativeTag::Ape),
				properties(&ape),
			)
		},
		FileType::WavPack => {
			let mut wavpack = WavPackFile::read_from(file, parse_options)?;
			(
				wavpack.remove_id3v1().map(NativeTag::Id3v1),
				wavpack.remove_ape().map(NativeTag::Ape),
				properties(&wavpack),
			)
		},
		FileType::Flac => {
			let mut flac = FlacFile::read_from(file, parse_options)?;
			let mut comments = flac.remove_vorbis_comments();

			// Pictures live in their own metadata blocks, they are presented alongside the comments
			let pictures = flac.pictures().to_vec();
			if !pictures.is_empty() {
				let comments = comments.get_or_insert_with(VorbisComments::default);
				for (picture, info) in pictures {
					comments.insert_picture(picture, Some(info))?;
				}
			}

			(None, comments.map(NativeTag::Vorbis), properties(&flac))
		},
		FileType::Vorbis => {
			let mut vorbis = VorbisFile::read_from(file, parse_options)?;
			(
				None,
				Some(NativeTag::Vorbis(vorbis.remove_vorbis_comments())),
				properties(&vorbis),
			)
		},
		FileType::Opus => {
			let mut opus = OpusFile::read_from(file, parse_options)?;
			(
				None,
				Some(NativeTag::Vorbis(opus.remove_vorbis_comments())),
				properties(&opus),
			)
		},
		FileType::Speex => {
			let mut speex = SpeexFile::read_from(file, parse_options)?;
			(
				None,
				Some(NativeTag::Vorbis(speex.remove_vorbis_comments())),
				properties(&speex),
			)
		},
		FileType::Mp4 => {
			let mut mp4 = Mp4File::read_from(file, parse_options)?;
			(None, mp4.remove_ilst().map(NativeTag::Mp4), properties(&mp4))
		},
		_ => err!(UnknownFormat),
	};

	Ok(NativeFile {
		file_type,
		v1,
		v2,
		properties,
	})
}

/// Write `tag` into `file`, replacing any existing tag of the same kind
///
/// # Errors
///
/// * `tag` can not be stored in files (ASF)
/// * The native library failed to write the tag
pub(crate) fn save(file: &mut File, tag: &NativeTag) -> Result<()> {
	file.seek(SeekFrom::Start(0))?;

	let write_options = WriteOptions::default();
	match tag {
		NativeTag::Id3v1(tag) => tag.save_to(file, write_options)?,
		NativeTag::Id3v2(tag) => tag.save_to(file, write_options)?,
		NativeTag::Vorbis(tag) => tag.save_to(file, write_options)?,
		NativeTag::Ape(tag) => tag.save_to(file, write_options)?,
		NativeTag::Mp4(tag) => tag.save_to(file, write_options)?,
		NativeTag::Asf(_) => err!(UnsupportedTag),
	}

	Ok(())
}

/// Remove every tag of `tag_type` from `file`
pub(crate) fn strip(file: &mut File, tag_type: TagType) -> Result<()> {
	file.seek(SeekFrom::Start(0))?;
	tag_type.remove_from(file)?;
	Ok(())
}
