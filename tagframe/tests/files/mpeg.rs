use crate::util::{self, PNG_DATA};
use tagframe::error::ErrorKind;
use tagframe::file::TagVersion;
use tagframe::frame::{Frame, FrameFilter, FrameType};
use tagframe::picture::PictureFields;

use std::fs::FileTimes;
use std::time::{Duration, SystemTime};

#[test_log::test]
fn untagged() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "untagged.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	assert!(file.frames(TagVersion::V2).unwrap().is_empty());
	assert!(file.frames(TagVersion::V1).unwrap().is_empty());
	assert!(!file.has_tag(TagVersion::V2).unwrap());
	assert!(file.supports(TagVersion::V1).unwrap());
	assert_eq!(file.tag_format(TagVersion::V2).unwrap(), None);
	assert_eq!(file.detail_info().unwrap().format(), "MPEG");
}

#[test_log::test]
fn id3v2_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	assert!(
		file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
			.unwrap()
	);

	let mut artist = Frame::new(FrameType::Artist, "Motörhead");
	assert!(file.add_frame(TagVersion::V2, &mut artist).unwrap());
	assert!(artist.index().is_some());
	assert!(file.is_changed_version(TagVersion::V2));
	assert!(!file.is_changed_version(TagVersion::V1));

	let outcome = file.write_tags(false, false).unwrap();
	assert!(outcome.written());
	assert!(!outcome.renamed());
	assert!(!file.is_changed());

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.value(FrameType::Title), Some("Foo title"));
	assert_eq!(frames.value(FrameType::Artist), Some("Motörhead"));
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.4.0")
	);
}

#[test_log::test]
fn id3v1_truncation() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);

	let fits = "a".repeat(30);
	assert!(
		file.set_frame(TagVersion::V1, &Frame::new(FrameType::Artist, fits.as_str()))
			.unwrap()
	);
	assert!(!file.truncation(TagVersion::V1).any());

	let too_long = "b".repeat(31);
	assert!(
		file.set_frame(TagVersion::V1, &Frame::new(FrameType::Title, too_long.as_str()))
			.unwrap()
	);
	assert!(file.truncation(TagVersion::V1).is_truncated(FrameType::Title));
	assert!(!file.truncation(TagVersion::V1).is_truncated(FrameType::Artist));

	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V1).unwrap();
	assert_eq!(frames.value(FrameType::Title), Some("b".repeat(30).as_str()));
	assert_eq!(frames.value(FrameType::Artist), Some(fits.as_str()));
	assert_eq!(
		file.tag_format(TagVersion::V1).unwrap().as_deref(),
		Some("ID3v1.0")
	);
}

#[test_log::test]
fn picture_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	assert!(
		file.add_frame(TagVersion::V2, &mut util::png_picture("APIC"))
			.unwrap()
	);
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	let picture = PictureFields::from_frame(frames.find_by_type(FrameType::Picture).unwrap());
	assert_eq!(picture.data, PNG_DATA);
	assert_eq!(picture.mime_type, "image/png");
	assert_eq!(picture.description, "Front");
}

#[test_log::test]
fn copy_and_remove() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
		.unwrap();
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Album, "Baz album"))
		.unwrap();
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Composer, "Qux"))
		.unwrap();

	// ID3v1 has no composer
	let copied = file
		.copy_frames(TagVersion::V2, TagVersion::V1, &FrameFilter::new())
		.unwrap();
	assert_eq!(copied, 2);
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	assert!(file.has_tag(TagVersion::V1).unwrap());
	assert_eq!(
		file.frames(TagVersion::V1)
			.unwrap()
			.value(FrameType::Album),
		Some("Baz album")
	);

	assert!(file.remove_tags(TagVersion::V1).unwrap());
	assert!(!file.has_tag(TagVersion::V1).unwrap());
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	assert!(!file.has_tag(TagVersion::V1).unwrap());
	assert!(file.has_tag(TagVersion::V2).unwrap());
}

#[test_log::test]
fn deleting_everything_strips_the_tag() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
		.unwrap();
	file.write_tags(false, false).unwrap();

	file.delete_frames(TagVersion::V2, &FrameFilter::new())
		.unwrap();
	assert!(file.is_changed());
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	assert!(!file.has_tag(TagVersion::V2).unwrap());
}

#[test_log::test]
fn rename() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());
	util::create(&dir, "taken.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	file.set_filename("taken.mp3");
	let err = file.write_tags(false, false).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::RenameTarget(_)));
	assert!(path.exists());

	file.set_filename("b.mp3");
	let outcome = file.write_tags(false, false).unwrap();
	assert!(outcome.renamed());
	assert!(!outcome.written());
	assert!(!path.exists());
	assert_eq!(file.path(), dir.path().join("b.mp3"));
	assert!(!file.is_changed());
}

#[test_log::test]
fn close_is_transparent() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let mut file = util::open(&path);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
		.unwrap();
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Artist, "Bar artist"))
		.unwrap();

	// Unsaved changes keep the file open
	assert!(!file.close());
	file.write_tags(false, false).unwrap();

	let frames = file.frames(TagVersion::V2).unwrap();
	assert!(file.close());
	assert!(!file.is_open());
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.4.0")
	);
	assert!(!file.is_open());

	// The index is from before the close
	let mut artist = frames.find_by_type(FrameType::Artist).unwrap().clone();
	artist.set_value("Baz artist");
	assert!(file.set_frame(TagVersion::V2, &artist).unwrap());
	assert!(file.is_open());

	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.value(FrameType::Title), Some("Foo title"));
	assert_eq!(frames.value(FrameType::Artist), Some("Baz artist"));
}

#[test_log::test]
fn preserve_timestamps() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::mpeg_bytes());

	let old = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000_000_000);
	std::fs::File::options()
		.write(true)
		.open(&path)
		.unwrap()
		.set_times(FileTimes::new().set_modified(old).set_accessed(old))
		.unwrap();

	let mut file = util::open(&path);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
		.unwrap();
	file.write_tags(false, true).unwrap();

	let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
	assert_eq!(modified, old);
}

#[test_log::test]
fn id3v23_is_saved_as_id3v24() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.mp3", &util::id3v23_mpeg_bytes());

	let mut file = util::open(&path);
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.3.0")
	);
	assert_eq!(
		file.frames(TagVersion::V2).unwrap().value(FrameType::Title),
		Some("Foo")
	);

	assert!(
		file.set_frame(TagVersion::V2, &Frame::new(FrameType::Album, "Baz album"))
			.unwrap()
	);
	// Unsaved edits keep the version the tag was read with
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.3.0")
	);

	file.write_tags(false, false).unwrap();
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.4.0")
	);

	assert!(file.close());
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.4.0")
	);

	let mut file = util::open(&path);
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("ID3v2.4.0")
	);
	assert_eq!(
		file.frames(TagVersion::V2).unwrap().value(FrameType::Album),
		Some("Baz album")
	);
}
