macro_rules! gen_frame_types {
	(
		$(
			$variant:ident => $name:literal
		),+ $(,)?
	) => {
		/// The semantic kind of a [`Frame`](super::Frame)
		///
		/// Native entries that do not correspond to any well-known kind are [`FrameType::Other`],
		/// and entries the native library could not classify at all are [`FrameType::UnknownFrame`].
		#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
		pub enum FrameType {
			$(
				#[doc = $name]
				$variant,
			)+
			/// Any frame without a well-known kind, identified by its name
			Other,
			/// An entry of an unrecognized native shape
			UnknownFrame,
		}

		impl FrameType {
			/// Every well-known frame type, in display order
			pub const WELL_KNOWN: &'static [FrameType] = &[$(FrameType::$variant),+];

			/// The display name of the frame type
			pub fn name(self) -> &'static str {
				match self {
					$(FrameType::$variant => $name,)+
					FrameType::Other => "Other",
					FrameType::UnknownFrame => "Unknown",
				}
			}

			/// Find a well-known frame type by its display name
			///
			/// The comparison ignores ASCII case.
			pub fn from_name(name: &str) -> Option<Self> {
				Self::WELL_KNOWN
					.iter()
					.copied()
					.find(|ty| ty.name().eq_ignore_ascii_case(name))
			}
		}
	}
}

gen_frame_types! {
	// The frames every format can store
	Title                    => "Title",
	Artist                   => "Artist",
	Album                    => "Album",
	Comment                  => "Comment",
	Date                     => "Date",
	Track                    => "Track Number",
	Genre                    => "Genre",

	AlbumArtist              => "Album Artist",
	Arranger                 => "Arranger",
	Author                   => "Author",
	Bpm                      => "BPM",
	CatalogNumber            => "Catalog Number",
	Compilation              => "Compilation",
	Composer                 => "Composer",
	Conductor                => "Conductor",
	Copyright                => "Copyright",
	Disc                     => "Disc Number",
	EncodedBy                => "Encoded-by",
	EncoderSettings          => "Encoder Settings",
	EncodingTime             => "Encoding Time",
	Grouping                 => "Grouping",
	InitialKey               => "Initial Key",
	Isrc                     => "ISRC",
	Language                 => "Language",
	Lyricist                 => "Lyricist",
	Lyrics                   => "Lyrics",
	Media                    => "Media",
	Mood                     => "Mood",
	OriginalAlbum            => "Original Album",
	OriginalArtist           => "Original Artist",
	OriginalDate             => "Original Date",
	Description              => "Description",
	Performer                => "Performer",
	Picture                  => "Picture",
	Publisher                => "Publisher",
	ReleaseCountry           => "Release Country",
	Remixer                  => "Remixer",
	SortAlbum                => "Sort Album",
	SortAlbumArtist          => "Sort Album Artist",
	SortArtist               => "Sort Artist",
	SortComposer             => "Sort Composer",
	SortName                 => "Sort Name",
	Subtitle                 => "Subtitle",
	Website                  => "Website",
	WwwAudioFile             => "WWW Audio File",
	WwwAudioSource           => "WWW Audio Source",
	ReleaseDate              => "Release Date",
	Rating                   => "Rating",
	Work                     => "Work",
	Movement                 => "Movement Name",
	MovementNumber           => "Movement Number",
	MovementTotal            => "Movement Count",
	Label                    => "Label",
	Barcode                  => "Barcode",
	Director                 => "Director",
	Producer                 => "Producer",
	Engineer                 => "Engineer",
	Mixer                    => "Mixer",
	Podcast                  => "Podcast",
	MusicBrainzTrackId       => "MusicBrainz Track Id",
	MusicBrainzReleaseTrackId => "MusicBrainz Release Track Id",
	MusicBrainzArtistId      => "MusicBrainz Artist Id",
	MusicBrainzAlbumId       => "MusicBrainz Album Id",
	MusicBrainzAlbumArtistId => "MusicBrainz Album Artist Id",
	MusicBrainzReleaseGroupId => "MusicBrainz Release Group Id",
	MusicBrainzWorkId        => "MusicBrainz Work Id",
	AcoustIdId               => "AcoustID Id",
	AcoustIdFingerprint      => "AcoustID Fingerprint",
	ReplayGainTrackGain      => "ReplayGain Track Gain",
	ReplayGainTrackPeak      => "ReplayGain Track Peak",
	ReplayGainAlbumGain      => "ReplayGain Album Gain",
	ReplayGainAlbumPeak      => "ReplayGain Album Peak",
}

impl FrameType {
	/// Whether this is one of the seven frames every format (including ID3v1) can store
	pub fn is_standard(self) -> bool {
		matches!(
			self,
			Self::Title
				| Self::Artist
				| Self::Album
				| Self::Comment
				| Self::Date
				| Self::Track
				| Self::Genre
		)
	}
}
