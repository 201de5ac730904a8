//! Conversions between ID3v1 genre numbers and genre names
//!
//! The canonical in-memory form of a genre is its name. Numbers only appear in ID3v1 tags and in
//! legacy ID3v2 strings such as `"(9)"` or `"(9)Metal"`.

use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::OnceLock;

/// The sentinel used for genres that have no number
pub const UNKNOWN_GENRE: u8 = 0xFF;

/// The genre list, indexed by genre number
///
/// This is the ID3v1 list including the Winamp extensions.
pub const GENRES: [&str; 192] = [
	"Blues",
	"Classic Rock",
	"Country",
	"Dance",
	"Disco",
	"Funk",
	"Grunge",
	"Hip-Hop",
	"Jazz",
	"Metal",
	"New Age",
	"Oldies",
	"Other",
	"Pop",
	"R&B",
	"Rap",
	"Reggae",
	"Rock",
	"Techno",
	"Industrial",
	"Alternative",
	"Ska",
	"Death Metal",
	"Pranks",
	"Soundtrack",
	"Euro-Techno",
	"Ambient",
	"Trip-Hop",
	"Vocal",
	"Jazz+Funk",
	"Fusion",
	"Trance",
	"Classical",
	"Instrumental",
	"Acid",
	"House",
	"Game",
	"Sound Clip",
	"Gospel",
	"Noise",
	"AlternRock",
	"Bass",
	"Soul",
	"Punk",
	"Space",
	"Meditative",
	"Instrumental Pop",
	"Instrumental Rock",
	"Ethnic",
	"Gothic",
	"Darkwave",
	"Techno-Industrial",
	"Electronic",
	"Pop-Folk",
	"Eurodance",
	"Dream",
	"Southern Rock",
	"Comedy",
	"Cult",
	"Gangsta",
	"Top 40",
	"Christian Rap",
	"Pop/Funk",
	"Jungle",
	"Native American",
	"Cabaret",
	"New Wave",
	"Psychedelic",
	"Rave",
	"Showtunes",
	"Trailer",
	"Lo-Fi",
	"Tribal",
	"Acid Punk",
	"Acid Jazz",
	"Polka",
	"Retro",
	"Musical",
	"Rock & Roll",
	"Hard Rock",
	"Folk",
	"Folk-Rock",
	"National Folk",
	"Swing",
	"Fast Fusion",
	"Bebop",
	"Latin",
	"Revival",
	"Celtic",
	"Bluegrass",
	"Avantgarde",
	"Gothic Rock",
	"Progressive Rock",
	"Psychedelic Rock",
	"Symphonic Rock",
	"Slow Rock",
	"Big Band",
	"Chorus",
	"Easy Listening",
	"Acoustic",
	"Humour",
	"Speech",
	"Chanson",
	"Opera",
	"Chamber Music",
	"Sonata",
	"Symphony",
	"Booty Bass",
	"Primus",
	"Porn Groove",
	"Satire",
	"Slow Jam",
	"Club",
	"Tango",
	"Samba",
	"Folklore",
	"Ballad",
	"Power Ballad",
	"Rhythmic Soul",
	"Freestyle",
	"Duet",
	"Punk Rock",
	"Drum Solo",
	"A capella",
	"Euro-House",
	"Dance Hall",
	"Goa",
	"Drum & Bass",
	"Club-House",
	"Hardcore",
	"Terror",
	"Indie",
	"BritPop",
	"Negerpunk",
	"Polsk Punk",
	"Beat",
	"Christian Gangsta Rap",
	"Heavy Metal",
	"Black Metal",
	"Crossover",
	"Contemporary Christian",
	"Christian Rock",
	"Merengue",
	"Salsa",
	"Thrash Metal",
	"Anime",
	"JPop",
	"Synthpop",
	"Abstract",
	"Art Rock",
	"Baroque",
	"Bhangra",
	"Big Beat",
	"Breakbeat",
	"Chillout",
	"Downtempo",
	"Dub",
	"EBM",
	"Eclectic",
	"Electro",
	"Electroclash",
	"Emo",
	"Experimental",
	"Garage",
	"Global",
	"IDM",
	"Illbient",
	"Industro-Goth",
	"Jam Band",
	"Krautrock",
	"Leftfield",
	"Lounge",
	"Math Rock",
	"New Romantic",
	"Nu-Breakz",
	"Post-Punk",
	"Post-Rock",
	"Psytrance",
	"Shoegaze",
	"Space Rock",
	"Trop Rock",
	"World Music",
	"Neoclassical",
	"Audiobook",
	"Audio Theatre",
	"Neue Deutsche Welle",
	"Podcast",
	"Indie Rock",
	"G-Funk",
	"Dubstep",
	"Garage Rock",
	"Psybient",
];

fn lookup() -> &'static HashMap<String, u8> {
	static INSTANCE: OnceLock<HashMap<String, u8>> = OnceLock::new();
	INSTANCE.get_or_init(|| {
		GENRES
			.iter()
			.enumerate()
			.map(|(number, name)| (name.to_ascii_lowercase(), number as u8))
			.collect()
	})
}

/// Get the name of a genre number
///
/// Returns an empty string for numbers outside of [`GENRES`].
///
/// # Examples
///
/// ```rust
/// use tagframe::genre;
///
/// assert_eq!(genre::number_to_name(9), "Metal");
/// assert_eq!(genre::number_to_name(255), "");
/// ```
pub fn number_to_name(number: u8) -> &'static str {
	GENRES.get(usize::from(number)).copied().unwrap_or_default()
}

/// Get the number of a genre name
///
/// The comparison ignores ASCII case. Returns [`UNKNOWN_GENRE`] if the name is not in [`GENRES`].
///
/// # Examples
///
/// ```rust
/// use tagframe::genre;
///
/// assert_eq!(genre::name_to_number("metal"), 9);
/// assert_eq!(genre::name_to_number("Nintendocore"), genre::UNKNOWN_GENRE);
/// ```
pub fn name_to_number(name: &str) -> u8 {
	lookup()
		.get(&name.trim().to_ascii_lowercase())
		.copied()
		.unwrap_or(UNKNOWN_GENRE)
}

// The two non-numeric references allowed by ID3v2.3
fn special_reference(reference: &str) -> Option<&'static str> {
	match reference {
		"RX" => Some("Remix"),
		"CR" => Some("Cover"),
		_ => None,
	}
}

fn numeric_reference(reference: &str) -> Option<&'static str> {
	if reference.is_empty() || !reference.bytes().all(|b| b.is_ascii_digit()) {
		return None;
	}

	let number = reference.parse::<u8>().ok()?;
	let name = number_to_name(number);
	(!name.is_empty()).then_some(name)
}

/// Parse a legacy genre string into a genre name
///
/// The forms `"N"`, `"(N)"` and `"(N)Name"` are handled, preferring the parenthesized number when
/// it refers to a known genre. `"((Name"` is an escaped literal parenthesis. Anything else is
/// returned verbatim.
///
/// # Examples
///
/// ```rust
/// use tagframe::genre;
///
/// assert_eq!(genre::parse_legacy("(9)Metal"), "Metal");
/// assert_eq!(genre::parse_legacy("(9)"), "Metal");
/// assert_eq!(genre::parse_legacy("9"), "Metal");
/// assert_eq!(genre::parse_legacy("Metal"), "Metal");
/// assert_eq!(genre::parse_legacy("(200)Doom"), "Doom");
/// ```
pub fn parse_legacy(value: &str) -> Cow<'_, str> {
	let trimmed = value.trim();

	if let Some(escaped) = trimmed.strip_prefix("((") {
		return Cow::Owned(format!("({escaped}"));
	}

	if let Some(name) = numeric_reference(trimmed) {
		return Cow::Borrowed(name);
	}

	let Some(rest) = trimmed.strip_prefix('(') else {
		return Cow::Borrowed(trimmed);
	};

	let Some((reference, refinement)) = rest.split_once(')') else {
		return Cow::Borrowed(trimmed);
	};

	if let Some(name) = numeric_reference(reference).or_else(|| special_reference(reference)) {
		return Cow::Borrowed(name);
	}

	if refinement.is_empty() {
		log::debug!("Genre: unmapped legacy reference `{trimmed}`, keeping it verbatim");
		return Cow::Borrowed(trimmed);
	}

	Cow::Borrowed(refinement)
}

/// Resolve every genre in a possibly multi-valued string
///
/// ID3v2.4 separates multiple genres with NUL, which are joined with `|` here.
pub fn parse_multi(value: &str) -> String {
	value
		.split('\0')
		.filter(|part| !part.is_empty())
		.map(parse_legacy)
		.collect::<Vec<_>>()
		.join("|")
}

/// Convert a genre name into the string written to an ID3v2 `TCON` frame
///
/// With `as_number`, known genres are written as `"(N)"`. Unknown genres are always written as text.
///
/// # Examples
///
/// ```rust
/// use tagframe::genre;
///
/// assert_eq!(genre::to_id3v2_string("Metal", true), "(9)");
/// assert_eq!(genre::to_id3v2_string("Metal", false), "Metal");
/// assert_eq!(genre::to_id3v2_string("Nintendocore", true), "Nintendocore");
/// ```
pub fn to_id3v2_string(value: &str, as_number: bool) -> String {
	let name = parse_legacy(value);
	if !as_number {
		return name.into_owned();
	}

	match name_to_number(&name) {
		UNKNOWN_GENRE => name.into_owned(),
		number => format!("({number})"),
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn numbers_round_trip() {
		for number in 0..GENRES.len() {
			let number = number as u8;
			assert_eq!(name_to_number(number_to_name(number)), number);
		}
	}

	#[test_log::test]
	fn unmapped_numbers() {
		assert_eq!(number_to_name(192), "");
		assert_eq!(number_to_name(UNKNOWN_GENRE), "");
		assert_eq!(name_to_number(""), UNKNOWN_GENRE);
	}

	#[test_log::test]
	fn name_lookup_ignores_case() {
		assert_eq!(name_to_number("HIP-HOP"), 7);
		assert_eq!(name_to_number(" rock & roll "), 78);
	}

	#[test_log::test]
	fn legacy_forms() {
		assert_eq!(parse_legacy("(9)Metal"), parse_legacy("Metal"));
		assert_eq!(parse_legacy("(17)"), "Rock");
		assert_eq!(parse_legacy("17"), "Rock");
		assert_eq!(parse_legacy("(RX)"), "Remix");
		assert_eq!(parse_legacy("(CR)"), "Cover");
		assert_eq!(parse_legacy("((Not a number)"), "(Not a number)");
		assert_eq!(parse_legacy("(abc"), "(abc");
		assert_eq!(parse_legacy("(255)"), "(255)");
		assert_eq!(parse_legacy("(255)Vaporwave"), "Vaporwave");
		assert_eq!(parse_legacy("300"), "300");
		assert_eq!(parse_legacy("Vaporwave"), "Vaporwave");
	}

	#[test_log::test]
	fn multiple_values() {
		assert_eq!(parse_multi("9\0Vaporwave"), "Metal|Vaporwave");
		assert_eq!(parse_multi("Rock"), "Rock");
	}

	#[test_log::test]
	fn id3v2_numeric_policy() {
		assert_eq!(to_id3v2_string("(9)Metal", true), "(9)");
		assert_eq!(to_id3v2_string("9", false), "Metal");
		assert_eq!(to_id3v2_string("Vaporwave", true), "Vaporwave");
	}
}
