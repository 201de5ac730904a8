use crate::util::{self, PNG_DATA};
use tagframe::config::TagOptions;
use tagframe::frame::FrameType;
use tagframe::picture::PictureFields;

#[test_log::test]
fn picture_data_is_kept() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();

		let mut frame = PictureFields {
			mime_type: String::from("image/png"),
			picture_type: 3,
			data: PNG_DATA.to_vec(),
			..PictureFields::default()
		}
		.into_frame("");

		assert!(adapter.add_frame(&mut frame, &options), "{format}");

		let frames = adapter.frames(&options);
		let picture = PictureFields::from_frame(
			frames
				.find_by_type(FrameType::Picture)
				.unwrap_or_else(|| panic!("{format}: no picture")),
		);

		assert_eq!(picture.data, PNG_DATA, "{format}");
		assert_eq!(picture.mime_type, "image/png", "{format}");
	}
}

#[test_log::test]
fn empty_pictures_get_placeholder_data() {
	let options = TagOptions::default();

	for mut adapter in util::adapters() {
		let format = adapter.format_description();

		let mut frame = PictureFields::default().into_frame("");
		assert!(adapter.add_frame(&mut frame, &options), "{format}");

		let frames = adapter.frames(&options);
		let picture = PictureFields::from_frame(frames.find_by_type(FrameType::Picture).unwrap());
		assert!(!picture.data.is_empty(), "{format}");
	}
}
