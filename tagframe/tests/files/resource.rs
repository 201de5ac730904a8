use crate::util;
use tagframe::config::ResourceOptions;
use tagframe::file::TagVersion;
use tagframe::frame::{Frame, FrameType};
use tagframe::resource::ResourceManager;

const CAP: usize = 4;

#[test_log::test]
fn cap_keeps_dirty_files_open() {
	let dir = tempfile::tempdir().unwrap();
	let mut manager = ResourceManager::new(
		ResourceOptions::new()
			.max_open_files(CAP)
			.eviction_slack(2),
	);

	let mut dirty = Vec::new();
	for i in 0..CAP + 10 {
		let path = util::create(&dir, &format!("{i}.mp3"), &util::mpeg_bytes());
		let id = manager.insert(util::open(&path));
		let file = manager.open(id).unwrap();

		if i < 3 {
			file.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Dirty"))
				.unwrap();
			dirty.push(id);
		}
	}

	assert!(manager.open_count() <= CAP);
	for &id in &dirty {
		let file = manager.get(id).unwrap();
		assert!(file.is_open());
		assert!(file.is_changed());
	}

	// Evicted files reopen on their own
	let first_clean = manager.ids().nth(3).unwrap();
	assert!(!manager.get(first_clean).unwrap().is_open());
	let file = manager.get_mut(first_clean).unwrap();
	assert!(file.frames(TagVersion::V2).unwrap().is_empty());

	assert!(manager.write_all(false, false).is_empty());
	for id in dirty {
		let file = manager.get_mut(id).unwrap();
		assert!(!file.is_changed());
		assert_eq!(
			file.frames(TagVersion::V2).unwrap().value(FrameType::Title),
			Some("Dirty")
		);
	}
}

#[test_log::test]
fn write_all_reports_failures() {
	let dir = tempfile::tempdir().unwrap();
	let mut manager = ResourceManager::new(ResourceOptions::default());

	let good = util::create(&dir, "good.mp3", &util::mpeg_bytes());
	let bad = util::create(&dir, "bad.mp3", &util::mpeg_bytes());

	for path in [&good, &bad] {
		let id = manager.insert(util::open(path));
		manager
			.open(id)
			.unwrap()
			.set_frame(TagVersion::V2, &Frame::new(FrameType::Title, "Foo title"))
			.unwrap();
	}

	std::fs::remove_file(&bad).unwrap();

	let failed = manager.write_all(false, false);
	assert_eq!(failed, vec![bad]);
}
