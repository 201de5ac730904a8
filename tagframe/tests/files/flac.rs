use crate::util::{self, PNG_DATA};
use tagframe::config::CommentField;
use tagframe::file::{TagVersion, TaggedFile};
use tagframe::frame::{Frame, FrameType};
use tagframe::picture::PictureFields;

#[test_log::test]
fn no_legacy_tag() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.flac", &util::flac_bytes());

	let mut file = util::open(&path);
	assert!(!file.supports(TagVersion::V1).unwrap());
	assert!(
		!file.set_frame(TagVersion::V1, &Frame::new(FrameType::Title, "Foo title"))
			.unwrap()
	);
	assert_eq!(file.tag_format(TagVersion::V1).unwrap(), None);
	assert!(!file.is_changed());
	assert_eq!(file.detail_info().unwrap().format(), "FLAC");
}

#[test_log::test]
fn comments_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.flac", &util::flac_bytes());

	let mut file = util::open(&path);
	for frame in [
		Frame::new(FrameType::Title, "Foo title"),
		Frame::new(FrameType::Artist, "Bar artist"),
		Frame::new(FrameType::Artist, "Baz artist"),
		Frame::new(FrameType::Track, "3/12"),
		Frame::other("MY_KEY", "Qux"),
	] {
		assert!(file.add_frame(TagVersion::V2, &mut frame.clone()).unwrap());
	}
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	assert_eq!(
		file.tag_format(TagVersion::V2).unwrap().as_deref(),
		Some("Vorbis")
	);

	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.len(), 5);
	assert_eq!(frames.value(FrameType::Title), Some("Foo title"));
	assert_eq!(frames.value(FrameType::Track), Some("3/12"));
	assert_eq!(
		frames
			.iter()
			.filter(|frame| frame.ty() == FrameType::Artist)
			.map(Frame::value)
			.collect::<Vec<_>>(),
		["Bar artist", "Baz artist"]
	);
	assert_eq!(frames.find_by_name("my_key").map(Frame::value), Some("Qux"));
}

#[test_log::test]
fn description_field() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.flac", &util::flac_bytes());

	let options = util::options().comment_field(CommentField::Description);
	let mut file = TaggedFile::new(&path, options);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Comment, "Some words"))
		.unwrap();
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.find_by_name("DESCRIPTION").map(Frame::value), Some("Some words"));
}

#[test_log::test]
fn picture_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.flac", &util::flac_bytes());

	let mut file = util::open(&path);
	file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
		.unwrap();
	assert!(
		file.add_frame(TagVersion::V2, &mut util::png_picture("METADATA_BLOCK_PICTURE"))
			.unwrap()
	);
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.len(), 2);

	let picture = PictureFields::from_frame(frames.find_by_type(FrameType::Picture).unwrap());
	assert_eq!(picture.data, PNG_DATA);
	assert_eq!(picture.mime_type, "image/png");
	assert_eq!(picture.picture_type, 3);
}

#[test_log::test]
fn track_total_round_trip() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "a.flac", &util::flac_bytes());

	let mut file = util::open(&path);
	assert!(
		file.set_frame(TagVersion::V2, &Frame::new(FrameType::Track, "3/12"))
			.unwrap()
	);
	assert!(
		file.set_frame(TagVersion::V2, &Frame::new(FrameType::Disc, "1/2"))
			.unwrap()
	);
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.len(), 2);
	assert_eq!(frames.value(FrameType::Track), Some("3/12"));
	assert_eq!(frames.value(FrameType::Disc), Some("1/2"));
	assert!(frames.iter().all(|frame| frame.ty() != FrameType::Other));

	// Dropping the total removes it from the file
	let mut track = frames.find_by_type(FrameType::Track).unwrap().clone();
	track.set_value("4/0");
	assert!(file.set_frame(TagVersion::V2, &track).unwrap());
	file.write_tags(false, false).unwrap();

	let mut file = util::open(&path);
	let frames = file.frames(TagVersion::V2).unwrap();
	assert_eq!(frames.len(), 2);
	assert_eq!(frames.value(FrameType::Track), Some("4"));
}
