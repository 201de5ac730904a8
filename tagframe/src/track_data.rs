//! Deriving file names from tags
//!
//! [`TrackData`] holds the common values of a tag, and replaces format codes in a pattern with them:
//!
//! | Code | Long form      | Value                                  |
//! |------|----------------|----------------------------------------|
//! | `%s` | `%{title}`     | Title                                  |
//! | `%a` | `%{artist}`    | Artist                                 |
//! | `%l` | `%{album}`     | Album                                  |
//! | `%c` | `%{comment}`   | Comment                                |
//! | `%y` | `%{year}`      | Year                                   |
//! | `%t` | `%{track}`     | Track number, padded to two digits     |
//! | `%g` | `%{genre}`     | Genre                                  |
//! | `%f` | `%{filename}`  | Current file name, without extension   |
//! | `%e` | `%{extension}` | Current extension                      |
//! | `%%` |                | A literal `%`                          |
//!
//! Characters that are not allowed in file names are replaced by `_` in the substituted values.
//! Unknown codes are kept as they are.
//!
//! ```rust
//! use std::path::Path;
//! use tagframe::track_data::TrackData;
//!
//! let data = TrackData {
//! 	title: String::from("Foo title"),
//! 	artist: String::from("Bar artist"),
//! 	track: Some(3),
//! 	..TrackData::default()
//! };
//!
//! let name = data.format("%t %a - %s.%e", Path::new("music/old.mp3"));
//! assert_eq!(name, "03 Bar artist - Foo title.mp3");
//! ```

use crate::frame::{FrameCollection, FrameType};
use crate::util::pairs::NumberPair;

use std::path::Path;

const INVALID_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

/// The common values of a tag
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrackData {
	/// Title
	pub title: String,
	/// Artist
	pub artist: String,
	/// Album
	pub album: String,
	/// Comment
	pub comment: String,
	/// Year, or the full date if it does not start with one
	pub year: String,
	/// Track number, without the total
	pub track: Option<u32>,
	/// Genre
	pub genre: String,
}

impl TrackData {
	/// Collect the common values from `frames`
	pub fn from_frames(frames: &FrameCollection) -> Self {
		let text = |ty| frames.value(ty).unwrap_or_default().trim().to_owned();

		let date = text(FrameType::Date);
		let year = match date.get(..4) {
			Some(year) if year.bytes().all(|b| b.is_ascii_digit()) => year.to_owned(),
			_ => date,
		};

		Self {
			title: text(FrameType::Title),
			artist: text(FrameType::Artist),
			album: text(FrameType::Album),
			comment: text(FrameType::Comment),
			year,
			track: frames
				.value(FrameType::Track)
				.and_then(NumberPair::parse)
				.map(|pair| pair.number),
			genre: text(FrameType::Genre),
		}
	}

	fn expand(&self, code: &str, current: &Path) -> Option<String> {
		let value = match code {
			"s" | "title" => self.title.clone(),
			"a" | "artist" => self.artist.clone(),
			"l" | "album" => self.album.clone(),
			"c" | "comment" => self.comment.clone(),
			"y" | "year" => self.year.clone(),
			"t" | "track" => self
				.track
				.map(|track| format!("{track:02}"))
				.unwrap_or_default(),
			"g" | "genre" => self.genre.clone(),
			"f" | "filename" => current
				.file_stem()
				.map(|stem| stem.to_string_lossy().into_owned())
				.unwrap_or_default(),
			"e" | "extension" => current
				.extension()
				.map(|ext| ext.to_string_lossy().into_owned())
				.unwrap_or_default(),
			_ => return None,
		};

		Some(sanitize(&value))
	}

	/// Replace the format codes in `pattern`
	///
	/// `current` is the path used for `%f` and `%e`.
	pub fn format(&self, pattern: &str, current: &Path) -> String {
		let mut out = String::with_capacity(pattern.len());
		let mut rest = pattern;

		while let Some(start) = rest.find('%') {
			out.push_str(&rest[..start]);
			let after = &rest[start + 1..];

			let (code, consumed) = if let Some(long) = after.strip_prefix('{') {
				match long.find('}') {
					Some(end) => (&long[..end], end + 2),
					None => ("", 0),
				}
			} else {
				match after.chars().next() {
					Some(c) => (&after[..c.len_utf8()], c.len_utf8()),
					None => ("", 0),
				}
			};

			if code == "%" {
				out.push('%');
			} else if let Some(value) = self.expand(code, current) {
				out.push_str(&value);
			} else {
				log::trace!("Keeping unknown format code `%{code}`");
				out.push('%');
				out.push_str(&after[..consumed]);
			}

			rest = &after[consumed..];
		}

		out.push_str(rest);
		out
	}
}

/// Replace the characters that are not allowed in file names with `_`
pub fn sanitize(value: &str) -> String {
	value
		.chars()
		.map(|c| {
			if INVALID_FILENAME_CHARS.contains(&c) {
				'_'
			} else {
				c
			}
		})
		.collect()
}
