use crate::util;
use tagframe::config::TagOptions;
use tagframe::frame::{Frame, FrameFilter, FrameType};

fn fill(adapter: &mut tagframe::adapter::TagAdapter, options: &TagOptions) {
	for (ty, value) in [
		(FrameType::Title, "Foo title"),
		(FrameType::Artist, "Bar artist"),
		(FrameType::Album, "Baz album"),
	] {
		assert!(adapter.add_frame(&mut Frame::new(ty, value), options));
	}
}

#[test_log::test]
fn stale_indices_after_delete() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();
		fill(&mut adapter, &options);

		let frames = adapter.frames(&options);
		let generation = adapter.generation();

		assert!(
			adapter.delete_frame(frames.find_by_type(FrameType::Title).unwrap(), &options),
			"{format}"
		);
		assert_ne!(adapter.generation(), generation, "{format}");

		// Still resolves, by key and ordinal
		let mut album = frames.find_by_type(FrameType::Album).unwrap().clone();
		album.set_value("Qux album");
		assert!(adapter.set_frame(&album, &options), "{format}");

		// Deleting the same frame twice finds nothing the second time
		let title = frames.find_by_type(FrameType::Title).unwrap();
		assert!(!adapter.delete_frame(title, &options), "{format}");

		let frames = adapter.frames(&options);
		assert_eq!(frames.len(), 2, "{format}");
		assert_eq!(frames.value(FrameType::Album), Some("Qux album"), "{format}");
		assert_eq!(frames.value(FrameType::Artist), Some("Bar artist"), "{format}");
		assert!(frames.find_by_type(FrameType::Title).is_none(), "{format}");
	}
}

#[test_log::test]
fn filtered_delete() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();
		fill(&mut adapter, &options);

		adapter.delete_frames(&FrameFilter::only(&[FrameType::Artist]), &options);
		let frames = adapter.frames(&options);
		assert_eq!(frames.len(), 2, "{format}");
		assert!(frames.find_by_type(FrameType::Artist).is_none(), "{format}");

		adapter.delete_frames(&FrameFilter::new(), &options);
		assert!(adapter.is_empty(), "{format}");
	}
}
