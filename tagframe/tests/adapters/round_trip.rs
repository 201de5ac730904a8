use crate::util;
use tagframe::config::TagOptions;
use tagframe::frame::{Frame, FrameType};

const COMMON: [(FrameType, &str); 7] = [
	(FrameType::Title, "Foo title"),
	(FrameType::Artist, "Bar artist"),
	(FrameType::Album, "Baz album"),
	(FrameType::Comment, "Some words"),
	(FrameType::Date, "1984"),
	(FrameType::Track, "7"),
	(FrameType::Genre, "Metal"),
];

#[test_log::test]
fn common_frames() {
	let options = TagOptions::default();

	for mut adapter in util::adapters().into_iter().chain([util::id3v1()]) {
		let format = adapter.format_description();

		for (ty, value) in COMMON {
			assert!(
				adapter.set_frame(&Frame::new(ty, value), &options),
				"{format}: unable to set {ty:?}"
			);
		}

		let frames = adapter.frames(&options);
		for (ty, value) in COMMON {
			assert_eq!(frames.value(ty), Some(value), "{format}: {ty:?}");
		}

		assert!(adapter.is_changed());
	}
}

#[test_log::test]
fn overwriting_keeps_one_frame() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();

		adapter.set_frame(&Frame::new(FrameType::Title, "Foo title"), &options);
		let mut title = adapter
			.frames(&options)
			.find_by_type(FrameType::Title)
			.unwrap()
			.clone();

		title.set_value("Bar title");
		assert!(adapter.set_frame(&title, &options), "{format}");

		let frames = adapter.frames(&options);
		assert_eq!(frames.len(), 1, "{format}");
		assert_eq!(frames.value(FrameType::Title), Some("Bar title"), "{format}");
	}
}

#[test_log::test]
fn unicode_text() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();

		adapter.set_frame(&Frame::new(FrameType::Artist, "Motörhead"), &options);
		adapter.set_frame(&Frame::new(FrameType::Title, "東京"), &options);

		let frames = adapter.frames(&options);
		assert_eq!(frames.value(FrameType::Artist), Some("Motörhead"), "{format}");
		assert_eq!(frames.value(FrameType::Title), Some("東京"), "{format}");
	}
}

#[test_log::test]
fn track_pairs() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();
		// ASF track numbers are integers without a total
		let with_total = if format == "ASF" { "3" } else { "3/12" };

		assert!(
			adapter.set_frame(&Frame::new(FrameType::Track, "3/12"), &options),
			"{format}"
		);
		let frames = adapter.frames(&options);
		assert_eq!(frames.value(FrameType::Track), Some(with_total), "{format}");
		assert_eq!(frames.len(), 1, "{format}");

		let mut track = frames.find_by_type(FrameType::Track).unwrap().clone();
		track.set_value("5/10");
		assert!(adapter.set_frame(&track, &options), "{format}");
		let expected = if format == "ASF" { "5" } else { "5/10" };
		assert_eq!(
			adapter.frames(&options).value(FrameType::Track),
			Some(expected),
			"{format}"
		);

		track.set_value("6/0");
		assert!(adapter.set_frame(&track, &options), "{format}");
		let frames = adapter.frames(&options);
		assert_eq!(frames.value(FrameType::Track), Some("6"), "{format}");
		assert_eq!(frames.len(), 1, "{format}");
	}

	let mut id3v1 = util::id3v1();
	assert!(id3v1.set_frame(&Frame::new(FrameType::Track, "3/12"), &options));
	assert_eq!(id3v1.frames(&options).value(FrameType::Track), Some("3"));
}
