use tagframe::config::TagOptions;
use tagframe::file::TaggedFile;
use tagframe::frame::Frame;
use tagframe::picture::PictureFields;

use std::path::{Path, PathBuf};

use tempfile::TempDir;

// MPEG-1 Layer III, 128 kbps, 44.1 kHz, joint stereo
const MPEG_FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x64];
const MPEG_FRAME_LEN: usize = 417;

// 44.1 kHz, 2 channels, 16 bits per sample, unknown sample count
const FLAC_STREAMINFO_TAIL: [u8; 8] = [0x0A, 0xC4, 0x42, 0xF0, 0x00, 0x00, 0x00, 0x00];
const FLAC_PADDING_LEN: usize = 64;

pub const PNG_DATA: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR\0\0\0\x01\0\0\0\x01\x08\x02\0\0\0";

/// A few silent MPEG frames without any tags
pub fn mpeg_bytes() -> Vec<u8> {
	let mut data = Vec::with_capacity(MPEG_FRAME_LEN * 4);
	for _ in 0..4 {
		data.extend_from_slice(&MPEG_FRAME_HEADER);
		data.resize(data.len() + MPEG_FRAME_LEN - MPEG_FRAME_HEADER.len(), 0);
	}

	data
}

/// A few silent MPEG frames, preceded by an ID3v2.3 tag with a title
pub fn id3v23_mpeg_bytes() -> Vec<u8> {
	// TIT2, 4 bytes, no flags, Latin-1 "Foo"
	let frame = [b'T', b'I', b'T', b'2', 0, 0, 0, 4, 0, 0, 0, b'F', b'o', b'o'];

	let mut data = b"ID3\x03\x00\x00".to_vec();
	data.extend_from_slice(&[0, 0, 0, frame.len() as u8]);
	data.extend_from_slice(&frame);
	data.extend(mpeg_bytes());
	data
}

/// A FLAC stream with a STREAMINFO and a PADDING block
pub fn flac_bytes() -> Vec<u8> {
	let mut data = b"fLaC".to_vec();

	// STREAMINFO, 34 bytes
	data.extend_from_slice(&[0x00, 0x00, 0x00, 0x22]);
	// Min/max block size
	data.extend_from_slice(&[0x10, 0x00, 0x10, 0x00]);
	// Min/max frame size
	data.extend_from_slice(&[0; 6]);
	data.extend_from_slice(&FLAC_STREAMINFO_TAIL);
	// MD5
	data.extend_from_slice(&[0; 16]);

	// Last metadata block, PADDING
	data.extend_from_slice(&[0x81, 0x00, 0x00, FLAC_PADDING_LEN as u8]);
	data.extend_from_slice(&[0; FLAC_PADDING_LEN]);

	// Start of an audio frame
	data.extend_from_slice(&[0xFF, 0xF8, 0x69, 0x08, 0x00, 0x00, 0x00, 0x00]);
	data
}

/// Write `contents` to `name` inside `dir`
pub fn create(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
	let path = dir.path().join(name);
	std::fs::write(&path, contents).unwrap();
	path
}

pub fn options() -> TagOptions {
	TagOptions::new().read_properties(false)
}

pub fn open(path: &Path) -> TaggedFile {
	TaggedFile::new(path, options())
}

pub fn png_picture(name: &str) -> Frame {
	PictureFields {
		mime_type: String::from("image/png"),
		picture_type: 3,
		description: String::from("Front"),
		data: PNG_DATA.to_vec(),
		..PictureFields::default()
	}
	.into_frame(name)
}
