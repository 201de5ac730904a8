use crate::util;
use tagframe::error::ErrorKind;
use tagframe::file::TagVersion;

#[test_log::test]
fn unknown_format() {
	let dir = tempfile::tempdir().unwrap();
	let path = util::create(&dir, "notes.txt", b"Just some plain text, nothing to see here");

	let mut file = util::open(&path);
	let err = file.frames(TagVersion::V2).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::UnknownFormat));
	assert!(!file.is_open());
}

#[test_log::test]
fn missing_file() {
	let dir = tempfile::tempdir().unwrap();

	let mut file = util::open(&dir.path().join("gone.mp3"));
	let err = file.read_tags(false).unwrap_err();
	assert!(matches!(err.kind(), ErrorKind::Io(_)));
}
