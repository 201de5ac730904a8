//! Native key <-> [`FrameType`] tables

use crate::frame::FrameType;

use std::collections::HashMap;

macro_rules! first_key {
	($key:tt $(| $remaining:expr)*) => {
		$key
	};
}

// Creates a bidirectional map between native keys and frame types
//
// The first key of each line is the one used when writing. Lookups by key ignore ASCII case.
//
// Usage:
//
// gen_map!(
// 	MY_MAP;
//
// 	"KEY1" | "KEY2" => Title,
// 	"KEY3"          => Artist,
// );
macro_rules! gen_map {
	(
		$(#[$meta:meta])?
		$NAME:ident;

		$(
			$($key:literal)|+ => $variant:ident
		),+ $(,)?
	) => {
		paste::paste! {
			$(#[$meta])?
			#[allow(non_camel_case_types)]
			pub(crate) struct $NAME;

			$(#[$meta])?
			impl $NAME {
				pub(crate) fn frame_type(key: &str) -> Option<FrameType> {
					static [<$NAME _INSTANCE>]: std::sync::OnceLock<HashMap<String, FrameType>> =
						std::sync::OnceLock::new();

					[<$NAME _INSTANCE>]
						.get_or_init(|| {
							let mut map = HashMap::new();
							$(
								$(
									map.insert(String::from($key).to_ascii_uppercase(), FrameType::$variant);
								)+
							)+
							map
						})
						.get(&key.to_ascii_uppercase())
						.copied()
				}

				pub(crate) fn native_key(ty: FrameType) -> Option<&'static str> {
					match ty {
						$(
							FrameType::$variant => Some(first_key!($($key)|*)),
						)+
						_ => None,
					}
				}
			}
		}
	};
}

gen_map!(
	ID3V2_MAP;

	"TIT2"          => Title,
	"TPE1"          => Artist,
	"TALB"          => Album,
	"COMM"          => Comment,
	"TDRC" | "TYER" => Date,
	"TRCK"          => Track,
	"TCON"          => Genre,
	"TPE2"          => AlbumArtist,
	"TBPM"          => Bpm,
	"TCMP"          => Compilation,
	"TCOM"          => Composer,
	"TPE3"          => Conductor,
	"TCOP"          => Copyright,
	"TPOS"          => Disc,
	"TENC"          => EncodedBy,
	"TSSE"          => EncoderSettings,
	"TDEN"          => EncodingTime,
	"TIT1"          => Grouping,
	"TKEY"          => InitialKey,
	"TSRC"          => Isrc,
	"TLAN"          => Language,
	"TEXT"          => Lyricist,
	"USLT"          => Lyrics,
	"TMED"          => Media,
	"TMOO"          => Mood,
	"TOAL"          => OriginalAlbum,
	"TOPE"          => OriginalArtist,
	"TDOR" | "TORY" => OriginalDate,
	"APIC"          => Picture,
	"TPUB"          => Publisher,
	"TPE4"          => Remixer,
	"TSOA"          => SortAlbum,
	"TSO2"          => SortAlbumArtist,
	"TSOP"          => SortArtist,
	"TSOC"          => SortComposer,
	"TSOT"          => SortName,
	"TIT3"          => Subtitle,
	"WOAR"          => Website,
	"WOAF"          => WwwAudioFile,
	"WOAS"          => WwwAudioSource,
	"TDRL"          => ReleaseDate,
	"POPM"          => Rating,
	"MVNM"          => Movement,
	"MVIN"          => MovementNumber,
	"PCST"          => Podcast,
);

// Frame types stored in `TXXX` frames, keyed by description
gen_map!(
	ID3V2_TXXX_MAP;

	"ARRANGER"                                           => Arranger,
	"AUTHOR"                                             => Author,
	"CATALOGNUMBER"                                      => CatalogNumber,
	"DESCRIPTION"                                        => Description,
	"PERFORMER"                                          => Performer,
	"RELEASECOUNTRY" | "MusicBrainz Album Release Country" => ReleaseCountry,
	"WORK"                                               => Work,
	"MOVEMENTTOTAL"                                      => MovementTotal,
	"LABEL"                                              => Label,
	"BARCODE"                                            => Barcode,
	"DIRECTOR"                                           => Director,
	"PRODUCER"                                           => Producer,
	"ENGINEER"                                           => Engineer,
	"MIXER"                                              => Mixer,
	"MusicBrainz Release Track Id"                       => MusicBrainzReleaseTrackId,
	"MusicBrainz Artist Id"                              => MusicBrainzArtistId,
	"MusicBrainz Album Id"                               => MusicBrainzAlbumId,
	"MusicBrainz Album Artist Id"                        => MusicBrainzAlbumArtistId,
	"MusicBrainz Release Group Id"                       => MusicBrainzReleaseGroupId,
	"MusicBrainz Work Id"                                => MusicBrainzWorkId,
	"Acoustid Id"                                        => AcoustIdId,
	"Acoustid Fingerprint"                               => AcoustIdFingerprint,
	"REPLAYGAIN_TRACK_GAIN"                              => ReplayGainTrackGain,
	"REPLAYGAIN_TRACK_PEAK"                              => ReplayGainTrackPeak,
	"REPLAYGAIN_ALBUM_GAIN"                              => ReplayGainAlbumGain,
	"REPLAYGAIN_ALBUM_PEAK"                              => ReplayGainAlbumPeak,
);

gen_map!(
	VORBIS_MAP;

	"TITLE"                                   => Title,
	"ARTIST"                                  => Artist,
	"ALBUM"                                   => Album,
	"COMMENT"                                 => Comment,
	"DATE" | "YEAR"                           => Date,
	"TRACKNUMBER"                             => Track,
	"GENRE"                                   => Genre,
	"ALBUMARTIST" | "ALBUM ARTIST"            => AlbumArtist,
	"ARRANGER"                                => Arranger,
	"AUTHOR" | "WRITER"                       => Author,
	"BPM"                                     => Bpm,
	"CATALOGNUMBER"                           => CatalogNumber,
	"COMPILATION"                             => Compilation,
	"COMPOSER"                                => Composer,
	"CONDUCTOR"                               => Conductor,
	"COPYRIGHT"                               => Copyright,
	"DISCNUMBER"                              => Disc,
	"ENCODED-BY" | "ENCODEDBY" | "ENCODED_BY" => EncodedBy,
	"ENCODERSETTINGS" | "ENCODING"            => EncoderSettings,
	"ENCODINGTIME"                            => EncodingTime,
	"GROUPING"                                => Grouping,
	"INITIALKEY" | "KEY"                      => InitialKey,
	"ISRC"                                    => Isrc,
	"LANGUAGE"                                => Language,
	"LYRICIST"                                => Lyricist,
	"LYRICS" | "UNSYNCEDLYRICS"               => Lyrics,
	"MEDIA"                                   => Media,
	"MOOD"                                    => Mood,
	"ORIGINALALBUM"                           => OriginalAlbum,
	"ORIGINALARTIST"                          => OriginalArtist,
	"ORIGINALDATE" | "ORIGINALYEAR"           => OriginalDate,
	"DESCRIPTION"                             => Description,
	"PERFORMER"                               => Performer,
	"METADATA_BLOCK_PICTURE"                  => Picture,
	"PUBLISHER"                               => Publisher,
	"RELEASECOUNTRY"                          => ReleaseCountry,
	"REMIXER" | "MIXARTIST"                   => Remixer,
	"ALBUMSORT"                               => SortAlbum,
	"ALBUMARTISTSORT"                         => SortAlbumArtist,
	"ARTISTSORT"                              => SortArtist,
	"COMPOSERSORT"                            => SortComposer,
	"TITLESORT"                               => SortName,
	"SUBTITLE"                                => Subtitle,
	"WEBSITE"                                 => Website,
	"RELEASEDATE"                             => ReleaseDate,
	"RATING"                                  => Rating,
	"WORK"                                    => Work,
	"MOVEMENTNAME"                            => Movement,
	"MOVEMENT"                                => MovementNumber,
	"MOVEMENTTOTAL"                           => MovementTotal,
	"LABEL" | "ORGANIZATION"                  => Label,
	"BARCODE"                                 => Barcode,
	"DIRECTOR"                                => Director,
	"PRODUCER"                                => Producer,
	"ENGINEER"                                => Engineer,
	"MIXER"                                   => Mixer,
	"PODCAST"                                 => Podcast,
	"MUSICBRAINZ_TRACKID"                     => MusicBrainzTrackId,
	"MUSICBRAINZ_RELEASETRACKID"              => MusicBrainzReleaseTrackId,
	"MUSICBRAINZ_ARTISTID"                    => MusicBrainzArtistId,
	"MUSICBRAINZ_ALBUMID"                     => MusicBrainzAlbumId,
	"MUSICBRAINZ_ALBUMARTISTID"               => MusicBrainzAlbumArtistId,
	"MUSICBRAINZ_RELEASEGROUPID"              => MusicBrainzReleaseGroupId,
	"MUSICBRAINZ_WORKID"                      => MusicBrainzWorkId,
	"ACOUSTID_ID"                             => AcoustIdId,
	"ACOUSTID_FINGERPRINT"                    => AcoustIdFingerprint,
	"REPLAYGAIN_TRACK_GAIN"                   => ReplayGainTrackGain,
	"REPLAYGAIN_TRACK_PEAK"                   => ReplayGainTrackPeak,
	"REPLAYGAIN_ALBUM_GAIN"                   => ReplayGainAlbumGain,
	"REPLAYGAIN_ALBUM_PEAK"                   => ReplayGainAlbumPeak,
);

gen_map!(
	APE_MAP;

	"Title"                          => Title,
	"Artist"                         => Artist,
	"Album"                          => Album,
	"Comment"                        => Comment,
	// The ecosystem agreed on "Year", even for full dates
	"Year"                           => Date,
	"Track"                          => Track,
	"Genre"                          => Genre,
	"Album Artist" | "ALBUMARTIST"   => AlbumArtist,
	"Arranger"                       => Arranger,
	"Writer"                         => Author,
	"BPM"                            => Bpm,
	"CatalogNumber"                  => CatalogNumber,
	"Compilation"                    => Compilation,
	"Composer"                       => Composer,
	"Conductor"                      => Conductor,
	"Copyright"                      => Copyright,
	"Disc"                           => Disc,
	"EncodedBy"                      => EncodedBy,
	"EncoderSettings"                => EncoderSettings,
	"Grouping"                       => Grouping,
	"ISRC"                           => Isrc,
	"Language"                       => Language,
	"Lyricist"                       => Lyricist,
	"Lyrics" | "UnsynchedLyrics"     => Lyrics,
	"Media"                          => Media,
	"Mood"                           => Mood,
	"ORIGINALYEAR"                   => OriginalDate,
	"Performer"                      => Performer,
	"Cover Art (Front)"              => Picture,
	"Publisher"                      => Publisher,
	"RELEASECOUNTRY"                 => ReleaseCountry,
	"MixArtist"                      => Remixer,
	"ALBUMSORT"                      => SortAlbum,
	"ALBUMARTISTSORT"                => SortAlbumArtist,
	"ARTISTSORT"                     => SortArtist,
	"TITLESORT"                      => SortName,
	"Subtitle"                       => Subtitle,
	"Related"                        => Website,
	"RELEASEDATE"                    => ReleaseDate,
	"WORKTITLE"                      => Work,
	"MOVEMENTNAME"                   => Movement,
	"MOVEMENT"                       => MovementNumber,
	"MOVEMENTTOTAL"                  => MovementTotal,
	"Label"                          => Label,
	"Barcode"                        => Barcode,
	"Director"                       => Director,
	"Producer"                       => Producer,
	"Engineer"                       => Engineer,
	"Mixer"                          => Mixer,
	"MUSICBRAINZ_TRACKID"            => MusicBrainzTrackId,
	"MUSICBRAINZ_RELEASETRACKID"     => MusicBrainzReleaseTrackId,
	"MUSICBRAINZ_ARTISTID"           => MusicBrainzArtistId,
	"MUSICBRAINZ_ALBUMID"            => MusicBrainzAlbumId,
	"MUSICBRAINZ_ALBUMARTISTID"      => MusicBrainzAlbumArtistId,
	"MUSICBRAINZ_RELEASEGROUPID"     => MusicBrainzReleaseGroupId,
	"MUSICBRAINZ_WORKID"             => MusicBrainzWorkId,
	"ACOUSTID_ID"                    => AcoustIdId,
	"ACOUSTID_FINGERPRINT"           => AcoustIdFingerprint,
	"REPLAYGAIN_TRACK_GAIN"          => ReplayGainTrackGain,
	"REPLAYGAIN_TRACK_PEAK"          => ReplayGainTrackPeak,
	"REPLAYGAIN_ALBUM_GAIN"          => ReplayGainAlbumGain,
	"REPLAYGAIN_ALBUM_PEAK"          => ReplayGainAlbumPeak,
);

// Freeform atoms are keyed as "----:mean:name"
gen_map!(
	MP4_MAP;

	"\u{a9}nam"                                          => Title,
	"\u{a9}ART"                                          => Artist,
	"\u{a9}alb"                                          => Album,
	"\u{a9}cmt"                                          => Comment,
	"\u{a9}day"                                          => Date,
	"trkn"                                               => Track,
	"\u{a9}gen" | "gnre"                                 => Genre,
	"aART"                                               => AlbumArtist,
	"----:com.apple.iTunes:ARRANGER"                     => Arranger,
	"----:com.apple.iTunes:AUTHOR"                       => Author,
	"tmpo"                                               => Bpm,
	"----:com.apple.iTunes:CATALOGNUMBER"                => CatalogNumber,
	"cpil"                                               => Compilation,
	"\u{a9}wrt"                                          => Composer,
	"----:com.apple.iTunes:CONDUCTOR"                    => Conductor,
	"cprt"                                               => Copyright,
	"disk"                                               => Disc,
	"\u{a9}enc"                                          => EncodedBy,
	"\u{a9}too"                                          => EncoderSettings,
	"\u{a9}grp"                                          => Grouping,
	"----:com.apple.iTunes:initialkey"                   => InitialKey,
	"----:com.apple.iTunes:ISRC"                         => Isrc,
	"----:com.apple.iTunes:LANGUAGE"                     => Language,
	"----:com.apple.iTunes:LYRICIST"                     => Lyricist,
	"\u{a9}lyr"                                          => Lyrics,
	"----:com.apple.iTunes:MEDIA"                        => Media,
	"----:com.apple.iTunes:MOOD"                         => Mood,
	"----:com.apple.iTunes:ORIGINALDATE"                 => OriginalDate,
	"desc"                                               => Description,
	"covr"                                               => Picture,
	"----:com.apple.iTunes:PUBLISHER"                    => Publisher,
	"----:com.apple.iTunes:MusicBrainz Album Release Country" => ReleaseCountry,
	"----:com.apple.iTunes:REMIXER"                      => Remixer,
	"soal"                                               => SortAlbum,
	"soaa"                                               => SortAlbumArtist,
	"soar"                                               => SortArtist,
	"soco"                                               => SortComposer,
	"sonm"                                               => SortName,
	"----:com.apple.iTunes:SUBTITLE"                     => Subtitle,
	"----:com.apple.iTunes:RELEASEDATE"                  => ReleaseDate,
	"\u{a9}wrk"                                          => Work,
	"\u{a9}mvn"                                          => Movement,
	"\u{a9}mvi"                                          => MovementNumber,
	"\u{a9}mvc"                                          => MovementTotal,
	"----:com.apple.iTunes:LABEL"                        => Label,
	"----:com.apple.iTunes:BARCODE"                      => Barcode,
	"\u{a9}dir"                                          => Director,
	"----:com.apple.iTunes:PRODUCER"                     => Producer,
	"----:com.apple.iTunes:ENGINEER"                     => Engineer,
	"----:com.apple.iTunes:MIXER"                        => Mixer,
	"pcst"                                               => Podcast,
	"----:com.apple.iTunes:MusicBrainz Track Id"         => MusicBrainzTrackId,
	"----:com.apple.iTunes:MusicBrainz Release Track Id" => MusicBrainzReleaseTrackId,
	"----:com.apple.iTunes:MusicBrainz Artist Id"        => MusicBrainzArtistId,
	"----:com.apple.iTunes:MusicBrainz Album Id"         => MusicBrainzAlbumId,
	"----:com.apple.iTunes:MusicBrainz Album Artist Id"  => MusicBrainzAlbumArtistId,
	"----:com.apple.iTunes:MusicBrainz Release Group Id" => MusicBrainzReleaseGroupId,
	"----:com.apple.iTunes:MusicBrainz Work Id"          => MusicBrainzWorkId,
	"----:com.apple.iTunes:Acoustid Id"                  => AcoustIdId,
	"----:com.apple.iTunes:Acoustid Fingerprint"         => AcoustIdFingerprint,
	"----:com.apple.iTunes:replaygain_track_gain"        => ReplayGainTrackGain,
	"----:com.apple.iTunes:replaygain_track_peak"        => ReplayGainTrackPeak,
	"----:com.apple.iTunes:replaygain_album_gain"        => ReplayGainAlbumGain,
	"----:com.apple.iTunes:replaygain_album_peak"        => ReplayGainAlbumPeak,
);

gen_map!(
	ASF_MAP;

	"Title"                          => Title,
	"Author"                         => Artist,
	"WM/AlbumTitle"                  => Album,
	"Description"                    => Comment,
	"WM/Year"                        => Date,
	"WM/TrackNumber" | "WM/Track"    => Track,
	"WM/Genre"                       => Genre,
	"WM/AlbumArtist"                 => AlbumArtist,
	"WM/BeatsPerMinute"              => Bpm,
	"WM/CatalogNo"                   => CatalogNumber,
	"WM/IsCompilation"               => Compilation,
	"WM/Composer"                    => Composer,
	"WM/Conductor"                   => Conductor,
	"Copyright"                      => Copyright,
	"WM/PartOfSet"                   => Disc,
	"WM/EncodedBy"                   => EncodedBy,
	"WM/EncodingSettings"            => EncoderSettings,
	"WM/EncodingTime"                => EncodingTime,
	"WM/ContentGroupDescription"     => Grouping,
	"WM/InitialKey"                  => InitialKey,
	"WM/ISRC"                        => Isrc,
	"WM/Language"                    => Language,
	"WM/Writer"                      => Lyricist,
	"WM/Lyrics"                      => Lyrics,
	"WM/Mood"                        => Mood,
	"WM/OriginalAlbumTitle"          => OriginalAlbum,
	"WM/OriginalArtist"              => OriginalArtist,
	"WM/OriginalReleaseYear"         => OriginalDate,
	"WM/Picture"                     => Picture,
	"WM/Publisher"                   => Publisher,
	"WM/ModifiedBy"                  => Remixer,
	"WM/AlbumSortOrder"              => SortAlbum,
	"WM/AlbumArtistSortOrder"        => SortAlbumArtist,
	"WM/ArtistSortOrder"             => SortArtist,
	"WM/ComposerSortOrder"           => SortComposer,
	"WM/TitleSortOrder"              => SortName,
	"WM/SubTitle"                    => Subtitle,
	"WM/AuthorURL"                   => Website,
	"WM/AudioFileURL"                => WwwAudioFile,
	"WM/AudioSourceURL"              => WwwAudioSource,
	"WM/SharedUserRating"            => Rating,
	"WM/Director"                    => Director,
	"WM/Producer"                    => Producer,
	"MusicBrainz/Track Id"           => MusicBrainzTrackId,
	"MusicBrainz/Release Track Id"   => MusicBrainzReleaseTrackId,
	"MusicBrainz/Artist Id"          => MusicBrainzArtistId,
	"MusicBrainz/Album Id"           => MusicBrainzAlbumId,
	"MusicBrainz/Album Artist Id"    => MusicBrainzAlbumArtistId,
	"MusicBrainz/Release Group Id"   => MusicBrainzReleaseGroupId,
	"MusicBrainz/Work Id"            => MusicBrainzWorkId,
	"Acoustid/Id"                    => AcoustIdId,
	"Acoustid/Fingerprint"           => AcoustIdFingerprint,
	"ReplayGain/Track"               => ReplayGainTrackGain,
	"ReplayGain/Track Peak"          => ReplayGainTrackPeak,
	"ReplayGain/Album"               => ReplayGainAlbumGain,
	"ReplayGain/Album Peak"          => ReplayGainAlbumPeak,
);

#[cfg(test)]
mod tests {
	use super::*;

	#[test_log::test]
	fn lookups_ignore_case() {
		assert_eq!(VORBIS_MAP::frame_type("title"), Some(FrameType::Title));
		assert_eq!(APE_MAP::frame_type("ALBUM ARTIST"), Some(FrameType::AlbumArtist));
		assert_eq!(ID3V2_MAP::frame_type("tit2"), Some(FrameType::Title));
		assert_eq!(VORBIS_MAP::frame_type("NOT_A_KEY"), None);
	}

	#[test_log::test]
	fn first_key_is_written() {
		assert_eq!(VORBIS_MAP::native_key(FrameType::AlbumArtist), Some("ALBUMARTIST"));
		assert_eq!(ID3V2_MAP::native_key(FrameType::Date), Some("TDRC"));
		assert_eq!(MP4_MAP::native_key(FrameType::Genre), Some("\u{a9}gen"));
		assert_eq!(ID3V2_MAP::native_key(FrameType::Arranger), None);
		assert_eq!(ID3V2_TXXX_MAP::native_key(FrameType::Arranger), Some("ARRANGER"));
	}

	#[test_log::test]
	fn every_type_has_a_home() {
		for ty in FrameType::WELL_KNOWN.iter().copied() {
			let id3v2 = ID3V2_MAP::native_key(ty).or_else(|| ID3V2_TXXX_MAP::native_key(ty));
			if ty != FrameType::MusicBrainzTrackId {
				assert!(id3v2.is_some(), "{ty:?} has no ID3v2 key");
			}

			if let Some(key) = VORBIS_MAP::native_key(ty) {
				assert_eq!(VORBIS_MAP::frame_type(key), Some(ty));
			}
		}
	}
}
