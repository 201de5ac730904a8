use super::mappings::{ID3V2_MAP, ID3V2_TXXX_MAP};
use super::{FieldReader, FrameAdapter, WriteContext};
use crate::config::TagOptions;
use crate::frame::{ExtendedType, Field, FieldId, Frame, FrameType, string_to_id};
use crate::genre;
use crate::picture::{PLACEHOLDER_DATA, PictureFields};
use crate::text_encoding::{self, TextEncoding, native_code};
use crate::util::{pairs, text};

use lofty::id3::v2::{
	AttachedPictureFrame, BinaryFrame, CommentFrame, ExtendedTextFrame, ExtendedUrlFrame,
	Frame as NativeFrame, FrameId, Id3v2Tag, OwnershipFrame, PopularimeterFrame,
	TextInformationFrame, UniqueFileIdentifierFrame, UnsynchronizedTextFrame, UrlLinkFrame,
};
use lofty::tag::TagExt;

pub(crate) const MUSICBRAINZ_UFID_OWNER: &str = "http://musicbrainz.org";
pub(crate) const UNKNOWN_FRAME_NAME: &str = "????";
const DEFAULT_LANGUAGE: [u8; 3] = *b"eng";
const MULTI_VALUE_SEPARATOR: char = '|';

// Frames the native library keeps as raw bytes, which are still standard ID3v2.3/2.4 frames
const KNOWN_BINARY_IDS: &[&str] = &[
	"AENC", "ASPI", "CHAP", "COMR", "CTOC", "ENCR", "EQU2", "EQUA", "ETCO", "GEOB", "GRID", "LINK",
	"MCDI", "MLLT", "PCNT", "POSS", "PRIV", "RBUF", "RVA2", "RVAD", "RVRB", "SEEK", "SIGN", "SYLT",
	"SYTC", "USER",
];

// Text frames holding "role|name" pairs
const KEY_VALUE_IDS: &[&str] = &["TIPL", "TMCL", "IPLS"];

fn is_frame_id(name: &str) -> bool {
	name.len() == 4
		&& name
			.bytes()
			.all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
}

fn id_type(id: &str) -> FrameType {
	ID3V2_MAP::frame_type(id).unwrap_or(FrameType::Other)
}

fn natives(tag: &Id3v2Tag) -> impl Iterator<Item = &NativeFrame<'static>> {
	tag.into_iter()
}

// --- Reading ---

fn text_frame(ty: FrameType, name: &str, encoding: u8, value: String) -> Frame {
	Frame::with_fields(
		ExtendedType::new(ty, name),
		vec![
			Field::number(FieldId::TextEncoding, u64::from(encoding)),
			Field::text(FieldId::Text, value),
		],
	)
}

fn language_frame(
	ty: FrameType,
	name: &str,
	encoding: u8,
	language: [u8; 3],
	description: String,
	content: String,
) -> Frame {
	Frame::with_fields(
		ExtendedType::new(ty, name),
		vec![
			Field::number(FieldId::TextEncoding, u64::from(encoding)),
			Field::text(
				FieldId::Language,
				String::from_utf8_lossy(&language).into_owned(),
			),
			Field::text(FieldId::Description, description),
			Field::text(FieldId::Text, content),
		],
	)
}

/// Decode a `GEOB` frame body
///
/// Layout: encoding, MIME type (Latin-1), filename, description, data
pub(crate) fn decode_geob(data: &[u8]) -> Frame {
	let Some((&encoding, rest)) = data.split_first() else {
		return Frame::with_fields(
			ExtendedType::new(FrameType::Other, "GEOB"),
			vec![Field::bytes(FieldId::Data, Vec::new())],
		);
	};

	let encoding = encoding.min(text::UTF8);
	let (mime_type, rest) = text::split_terminated(rest, text::LATIN1);
	let (filename, rest) = text::split_terminated(rest, encoding);
	let (description, rest) = text::split_terminated(rest, encoding);

	Frame::with_fields(
		ExtendedType::new(FrameType::Other, "GEOB"),
		vec![
			Field::number(FieldId::TextEncoding, u64::from(encoding)),
			Field::text(FieldId::MimeType, mime_type),
			Field::text(FieldId::Filename, filename),
			Field::text(FieldId::Description, description),
			Field::bytes(FieldId::Data, rest.to_vec()),
		],
	)
}

pub(crate) fn encode_geob(
	encoding: u8,
	mime_type: &str,
	filename: &str,
	description: &str,
	data: &[u8],
) -> Vec<u8> {
	let mut out = vec![encoding];
	out.extend(text::encode_terminated(mime_type, text::LATIN1));
	out.extend(text::encode_terminated(filename, encoding));
	out.extend(text::encode_terminated(description, encoding));
	out.extend_from_slice(data);
	out
}

/// Decode a `PRIV` frame body
///
/// Layout: owner (Latin-1), data
pub(crate) fn decode_priv(data: &[u8]) -> Frame {
	let (owner, rest) = text::split_terminated(data, text::LATIN1);
	private_frame(owner, rest.to_vec())
}

fn private_frame(owner: String, data: Vec<u8>) -> Frame {
	Frame::with_fields(
		ExtendedType::new(FrameType::Other, "PRIV"),
		vec![
			Field::text(FieldId::Owner, owner),
			Field::bytes(FieldId::Data, data),
		],
	)
}

pub(crate) fn encode_priv(owner: &str, data: &[u8]) -> Vec<u8> {
	let mut out = text::encode_terminated(owner, text::LATIN1);
	out.extend_from_slice(data);
	out
}

fn binary_to_frame(id: &str, data: &[u8]) -> Frame {
	match id {
		"GEOB" => decode_geob(data),
		"PRIV" => decode_priv(data),
		_ if ID3V2_MAP::frame_type(id).is_some() || KNOWN_BINARY_IDS.contains(&id) => {
			Frame::with_fields(
				ExtendedType::new(id_type(id), id),
				vec![Field::bytes(FieldId::Data, data.to_vec())],
			)
		},
		_ => {
			log::debug!("ID3v2: Keeping unrecognized frame `{id}` as raw data");
			Frame::with_fields(
				ExtendedType::new(FrameType::UnknownFrame, UNKNOWN_FRAME_NAME),
				vec![Field::bytes(FieldId::Data, data.to_vec())],
			)
		},
	}
}

fn read_frame(native: &NativeFrame<'_>) -> Frame {
	let id = native.id_str();

	match native {
		NativeFrame::Text(frame) => {
			let value = match id {
				"TCON" => genre::parse_multi(&frame.value),
				_ => frame.value.to_string(),
			};
			text_frame(id_type(id), id, native_code(frame.encoding), value)
		},
		NativeFrame::UserText(frame) => {
			let description = frame.description.to_string();
			let ty = ID3V2_TXXX_MAP::frame_type(&description).unwrap_or(FrameType::Other);
			Frame::with_fields(
				ExtendedType::new(ty, description.clone()),
				vec![
					Field::number(FieldId::TextEncoding, u64::from(native_code(frame.encoding))),
					Field::text(FieldId::Description, description),
					Field::text(FieldId::Text, frame.content.to_string()),
				],
			)
		},
		NativeFrame::Url(frame) => Frame::with_fields(
			ExtendedType::new(id_type(id), id),
			vec![Field::text(FieldId::Url, frame.url())],
		),
		NativeFrame::UserUrl(frame) => Frame::with_fields(
			ExtendedType::new(FrameType::Other, id),
			vec![
				Field::number(FieldId::TextEncoding, u64::from(native_code(frame.encoding))),
				Field::text(FieldId::Description, frame.description.to_string()),
				Field::text(FieldId::Url, frame.content.to_string()),
			],
		),
		NativeFrame::Comment(frame) => language_frame(
			FrameType::Comment,
			id,
			native_code(frame.encoding),
			frame.language,
			frame.description.to_string(),
			frame.content.to_string(),
		),
		NativeFrame::UnsynchronizedText(frame) => language_frame(
			FrameType::Lyrics,
			id,
			native_code(frame.encoding),
			frame.language,
			frame.description.to_string(),
			frame.content.to_string(),
		),
		NativeFrame::Picture(frame) => {
			PictureFields::from_native(&frame.picture, native_code(frame.encoding)).into_frame(id)
		},
		NativeFrame::Popularimeter(frame) => Frame::with_fields(
			ExtendedType::new(FrameType::Rating, id),
			vec![
				Field::text(FieldId::Email, frame.email.to_string()),
				Field::number(FieldId::Rating, u64::from(frame.rating)),
				Field::number(FieldId::Counter, frame.counter),
			],
		),
		NativeFrame::UniqueFileIdentifier(frame) => {
			let ty = if frame.owner == MUSICBRAINZ_UFID_OWNER {
				FrameType::MusicBrainzTrackId
			} else {
				FrameType::Other
			};

			Frame::with_fields(
				ExtendedType::new(ty, id),
				vec![
					Field::text(FieldId::Owner, frame.owner.to_string()),
					Field::bytes(FieldId::Id, frame.identifier.clone()),
				],
			)
		},
		NativeFrame::Ownership(frame) => Frame::with_fields(
			ExtendedType::new(FrameType::Other, id),
			vec![
				Field::number(FieldId::TextEncoding, u64::from(native_code(frame.encoding))),
				Field::text(FieldId::Price, frame.price_paid.to_string()),
				Field::text(FieldId::Date, frame.date_of_purchase.to_string()),
				Field::text(FieldId::Seller, frame.seller.to_string()),
			],
		),
		NativeFrame::Private(frame) => {
			private_frame(frame.owner.to_string(), frame.private_data.clone())
		},
		NativeFrame::KeyValue(frame) => {
			let value = frame
				.key_value_pairs
				.iter()
				.flat_map(|(key, value)| [key.to_string(), value.to_string()])
				.collect::<Vec<_>>()
				.join(&MULTI_VALUE_SEPARATOR.to_string());
			text_frame(id_type(id), id, native_code(frame.encoding), value)
		},
		NativeFrame::Timestamp(frame) => text_frame(
			id_type(id),
			id,
			native_code(frame.encoding),
			frame.timestamp.to_string(),
		),
		NativeFrame::Binary(frame) => binary_to_frame(id, &frame.data),
		_ => {
			log::debug!("ID3v2: Frame `{id}` has no editable representation");
			Frame::new(ExtendedType::new(FrameType::Other, id), String::new())
		},
	}
}

// --- Writing ---

/// The encoding for a text-bearing frame
///
/// A Unicode encoding already used by the frame is kept, otherwise the configured policy decides.
fn policy_encoding(reader: &FieldReader<'_>, texts: &[&str], options: &TagOptions) -> TextEncoding {
	match reader.encoding().and_then(TextEncoding::from_u8) {
		Some(encoding) if encoding.is_unicode() => encoding,
		_ => text_encoding::choose_encoding(
			texts.iter().any(|text| text_encoding::needs_unicode(text)),
			options.text_encoding,
		),
	}
}

fn write_encoding(
	reader: &FieldReader<'_>,
	texts: &[&str],
	options: &TagOptions,
) -> lofty::TextEncoding {
	policy_encoding(reader, texts, options).into()
}

/// `COMM` frames are always written with a Unicode encoding, so the language and description are
/// laid out the same way for every reader
fn comment_encoding(reader: &FieldReader<'_>, options: &TagOptions) -> lofty::TextEncoding {
	let encoding = match reader.encoding().and_then(TextEncoding::from_u8) {
		Some(encoding) if encoding.is_unicode() => encoding,
		_ if options.text_encoding.is_unicode() => options.text_encoding,
		_ => TextEncoding::Utf8,
	};

	encoding.into()
}

fn language(code: &str) -> [u8; 3] {
	match code.as_bytes() {
		&[a, b, c] if [a, b, c].iter().all(u8::is_ascii_alphabetic) => [a, b, c],
		_ => DEFAULT_LANGUAGE,
	}
}

/// Convert a displayed text value into the stored form of frame `id`
fn stored_text(id: &str, value: &str, options: &TagOptions) -> String {
	match id {
		"TCON" => value
			.split(MULTI_VALUE_SEPARATOR)
			.map(str::trim)
			.filter(|genre| !genre.is_empty())
			.map(|genre| genre::to_id3v2_string(genre, options.genre_as_number))
			.collect::<Vec<_>>()
			.join("\0"),
		"TRCK" => pairs::normalize(value, options.track_number_digits),
		"TPOS" => pairs::normalize(value, 0),
		_ if KEY_VALUE_IDS.contains(&id) => value.replace(MULTI_VALUE_SEPARATOR, "\0"),
		_ => value.to_owned(),
	}
}

/// Build the native frame `id` from `frame`
///
/// `description` is the `TXXX`/`WXXX` description to use when the frame does not carry one.
fn build(
	id: &str,
	description: &str,
	frame: &Frame,
	options: &TagOptions,
) -> Option<NativeFrame<'static>> {
	let reader = FieldReader::new(frame);
	let description = if frame.fields().is_empty() {
		description
	} else {
		reader.text(FieldId::Description)
	};

	let native = match id {
		"TXXX" => {
			let content = reader.primary(FieldId::Text);
			let encoding = write_encoding(&reader, &[description, content], options);
			NativeFrame::UserText(ExtendedTextFrame::new(
				encoding,
				description.to_owned(),
				content.to_owned(),
			))
		},
		"WXXX" => {
			let url = reader.primary(FieldId::Url);
			let encoding = write_encoding(&reader, &[description], options);
			NativeFrame::UserUrl(ExtendedUrlFrame::new(
				encoding,
				description.to_owned(),
				url.to_owned(),
			))
		},
		"COMM" => NativeFrame::Comment(CommentFrame::new(
			comment_encoding(&reader, options),
			language(reader.text(FieldId::Language)),
			description.to_owned(),
			reader.primary(FieldId::Text).to_owned(),
		)),
		"USLT" => {
			let content = reader.primary(FieldId::Text);
			NativeFrame::UnsynchronizedText(UnsynchronizedTextFrame::new(
				write_encoding(&reader, &[description, content], options),
				language(reader.text(FieldId::Language)),
				description.to_owned(),
				content.to_owned(),
			))
		},
		"APIC" => {
			let picture = PictureFields::from_frame(frame).with_placeholder();
			let encoding = write_encoding(&reader, &[&picture.description], options);
			NativeFrame::Picture(AttachedPictureFrame::new(encoding, picture.to_native()))
		},
		"POPM" => {
			let rating = if frame.uses_value() {
				frame.value().trim().parse::<u8>().unwrap_or_default()
			} else {
				reader
					.number(FieldId::Rating)
					.map_or(0, |rating| rating.min(255) as u8)
			};

			NativeFrame::Popularimeter(PopularimeterFrame::new(
				reader.text(FieldId::Email).to_owned(),
				rating,
				reader.number(FieldId::Counter).unwrap_or_default(),
			))
		},
		"UFID" => {
			let owner = match reader.text(FieldId::Owner) {
				"" => MUSICBRAINZ_UFID_OWNER,
				owner => owner,
			};

			let identifier = if frame.uses_value() {
				string_to_id(frame.value())
			} else {
				reader.bytes(FieldId::Id).unwrap_or_default().to_vec()
			};

			NativeFrame::UniqueFileIdentifier(UniqueFileIdentifierFrame::new(
				owner.to_owned(),
				identifier,
			))
		},
		"OWNE" => {
			let seller = reader.primary(FieldId::Seller);
			NativeFrame::Ownership(OwnershipFrame::new(
				write_encoding(&reader, &[seller], options),
				reader.text(FieldId::Price).to_owned(),
				reader.text(FieldId::Date).to_owned(),
				seller.to_owned(),
			))
		},
		"PRIV" => {
			let data = reader.bytes(FieldId::Data).unwrap_or(PLACEHOLDER_DATA);
			NativeFrame::Binary(BinaryFrame::new(
				FrameId::new(id.to_owned()).ok()?,
				encode_priv(reader.primary(FieldId::Owner), data),
			))
		},
		"GEOB" => {
			let filename = reader.text(FieldId::Filename);
			let description = reader.primary(FieldId::Description);
			let encoding = policy_encoding(&reader, &[filename, description], options).as_u8();

			NativeFrame::Binary(BinaryFrame::new(
				FrameId::new(id.to_owned()).ok()?,
				encode_geob(
					encoding,
					reader.text(FieldId::MimeType),
					filename,
					description,
					reader.bytes(FieldId::Data).unwrap_or(PLACEHOLDER_DATA),
				),
			))
		},
		_ if id.starts_with('W') => NativeFrame::Url(UrlLinkFrame::new(
			FrameId::new(id.to_owned()).ok()?,
			reader.primary(FieldId::Url).to_owned(),
		)),
		_ if id.starts_with('T') => {
			let value = stored_text(id, reader.primary(FieldId::Text), options);
			NativeFrame::Text(TextInformationFrame::new(
				FrameId::new(id.to_owned()).ok()?,
				write_encoding(&reader, &[&value], options),
				value,
			))
		},
		_ => {
			let data = reader.bytes(FieldId::Data)?;
			NativeFrame::Binary(BinaryFrame::new(
				FrameId::new(id.to_owned()).ok()?,
				data.to_vec(),
			))
		},
	};

	Some(native)
}

/// The frame ID and fallback description for a new frame
fn target_id(frame: &Frame) -> Option<(String, String)> {
	match frame.ty() {
		FrameType::UnknownFrame => None,
		FrameType::MusicBrainzTrackId => Some((String::from("UFID"), String::new())),
		// Custom names that are valid frame IDs are written as-is
		FrameType::Other if is_frame_id(frame.name()) => {
			Some((frame.name().to_owned(), String::new()))
		},
		FrameType::Other => Some((String::from("TXXX"), frame.name().to_owned())),
		ty => ID3V2_MAP::native_key(ty)
			.map(|id| (id.to_owned(), String::new()))
			.or_else(|| {
				ID3V2_TXXX_MAP::native_key(ty)
					.map(|description| (String::from("TXXX"), description.to_owned()))
			}),
	}
}

impl FrameAdapter for Id3v2Tag {
	fn enumerate(&self, _: &TagOptions) -> Vec<Frame> {
		natives(self).map(read_frame).collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let mut frames = natives(self).cloned().collect::<Vec<_>>();
		let Some(existing) = frames.get(position) else {
			return false;
		};

		let id = existing.id_str().to_owned();
		let description = match existing {
			NativeFrame::UserText(existing) => existing.description.to_string(),
			NativeFrame::UserUrl(existing) => existing.description.to_string(),
			_ => String::new(),
		};

		let Some(replacement) = build(&id, &description, frame, ctx.options) else {
			log::debug!("ID3v2: Unable to rewrite frame `{id}` from `{}`", frame.key());
			return false;
		};

		frames[position] = replacement;

		TagExt::clear(self);
		for native in frames {
			self.insert(native);
		}

		true
	}

	fn add(&mut self, frame: &Frame, ctx: &mut WriteContext<'_>) -> bool {
		let Some((id, description)) = target_id(frame) else {
			return false;
		};

		let Some(native) = build(&id, &description, frame, ctx.options) else {
			return false;
		};

		self.insert(native);
		true
	}

	fn delete(&mut self, position: usize) -> bool {
		if position >= self.entry_count() {
			return false;
		}

		let mut current = 0;
		self.retain(|_| {
			let keep = current != position;
			current += 1;
			keep
		});

		true
	}

	fn clear(&mut self) {
		TagExt::clear(self);
	}

	fn entry_count(&self) -> usize {
		natives(self).count()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::adapter::{NativeTag, TagAdapter};
	use crate::frame::FieldValue;

	fn adapter() -> TagAdapter {
		TagAdapter::new(NativeTag::Id3v2(Id3v2Tag::default()))
	}

	fn native(adapter: &TagAdapter) -> &Id3v2Tag {
		let NativeTag::Id3v2(tag) = adapter.tag() else {
			unreachable!()
		};
		tag
	}

	#[test_log::test]
	fn text_frames_are_mapped() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		adapter.add_frame(&mut Frame::new(FrameType::Title, "Title"), &options);
		adapter.add_frame(&mut Frame::new(FrameType::Arranger, "Someone"), &options);
		adapter.add_frame(&mut Frame::other("MY KEY", "custom"), &options);

		let frames = adapter.frames(&options);
		let title = frames.find_by_type(FrameType::Title).unwrap();
		assert_eq!(title.name(), "TIT2");
		assert_eq!(title.value(), "Title");

		let arranger = frames.find_by_type(FrameType::Arranger).unwrap();
		assert_eq!(arranger.name(), "ARRANGER");
		assert_eq!(arranger.text_field(FieldId::Description), Some("ARRANGER"));

		let custom = frames
			.find(&ExtendedType::new(FrameType::Other, "MY KEY"))
			.unwrap();
		assert_eq!(custom.value(), "custom");
	}

	#[test_log::test]
	fn comments_are_always_unicode() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		adapter.add_frame(&mut Frame::new(FrameType::Comment, "plain ascii"), &options);
		adapter.add_frame(&mut Frame::new(FrameType::Album, "plain ascii"), &options);

		for frame in native(&adapter) {
			match frame {
				NativeFrame::Comment(comment) => {
					assert_eq!(comment.encoding, lofty::TextEncoding::UTF8);
					assert_eq!(comment.language, *b"eng");
				},
				NativeFrame::Text(text) => assert_eq!(text.encoding, lofty::TextEncoding::Latin1),
				_ => panic!("unexpected frame"),
			}
		}
	}

	#[test_log::test]
	fn encoding_upgrade() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		adapter.add_frame(&mut Frame::new(FrameType::Artist, "Мумий Тролль"), &options);
		let Some(NativeFrame::Text(text)) = native(&adapter).into_iter().next() else {
			panic!("expected a text frame");
		};
		assert_eq!(text.encoding, lofty::TextEncoding::UTF8);

		let options = TagOptions::new().text_encoding(TextEncoding::Utf16);
		let mut adapter = self::adapter();
		adapter.add_frame(&mut Frame::new(FrameType::Artist, "Metallica"), &options);
		let Some(NativeFrame::Text(text)) = native(&adapter).into_iter().next() else {
			panic!("expected a text frame");
		};
		assert_eq!(text.encoding, lofty::TextEncoding::UTF16);
	}

	#[test_log::test]
	fn genre_policy() {
		let tcon = FrameId::new("TCON").unwrap();

		let mut adapter = adapter();
		let numeric = TagOptions::new().genre_as_number(true);
		adapter.add_frame(&mut Frame::new(FrameType::Genre, "Metal"), &numeric);
		assert_eq!(native(&adapter).get_text(&tcon), Some("(9)"));
		assert_eq!(adapter.frames(&numeric).value(FrameType::Genre), Some("Metal"));

		let mut adapter = self::adapter();
		let textual = TagOptions::new();
		adapter.add_frame(&mut Frame::new(FrameType::Genre, "(9)"), &textual);
		assert_eq!(native(&adapter).get_text(&tcon), Some("Metal"));
	}

	#[test_log::test]
	fn track_padding() {
		let options = TagOptions::new().track_number_digits(2);
		let mut adapter = adapter();

		adapter.add_frame(&mut Frame::new(FrameType::Track, "7/12"), &options);
		adapter.add_frame(&mut Frame::new(FrameType::Disc, "1/0"), &options);

		let frames = adapter.frames(&options);
		assert_eq!(frames.value(FrameType::Track), Some("07/12"));
		assert_eq!(frames.value(FrameType::Disc), Some("1"));
	}

	#[test_log::test]
	fn musicbrainz_ufid() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		let mut frame = Frame::new(FrameType::MusicBrainzTrackId, "a7c2-11");
		assert!(adapter.add_frame(&mut frame, &options));

		let frames = adapter.frames(&options);
		let ufid = frames.find_by_type(FrameType::MusicBrainzTrackId).unwrap();
		assert_eq!(ufid.name(), "UFID");
		assert_eq!(ufid.value(), "a7c2-11");
		assert_eq!(ufid.text_field(FieldId::Owner), Some(MUSICBRAINZ_UFID_OWNER));

		// Invalid hex degrades to an empty identifier
		let mut edited = ufid.clone();
		edited.set_value("0xnothex");
		assert!(adapter.set_frame(&edited, &options));
		let frames = adapter.frames(&options);
		let ufid = frames.find_by_type(FrameType::MusicBrainzTrackId).unwrap();
		assert_eq!(ufid.field(FieldId::Id), Some(&FieldValue::Bytes(Vec::new())));
	}

	#[test_log::test]
	fn geob_fields() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		let fields = vec![
			Field::number(FieldId::TextEncoding, 0),
			Field::text(FieldId::MimeType, "application/octet-stream"),
			Field::text(FieldId::Filename, "blob.bin"),
			Field::text(FieldId::Description, "A blob"),
			Field::bytes(FieldId::Data, vec![1, 2, 3, 4]),
		];
		let mut frame = Frame::with_fields(ExtendedType::new(FrameType::Other, "GEOB"), fields.clone());
		assert!(adapter.add_frame(&mut frame, &options));

		let frames = adapter.frames(&options);
		let geob = frames
			.find(&ExtendedType::new(FrameType::Other, "GEOB"))
			.unwrap();
		assert_eq!(geob.fields(), fields.as_slice());
		assert_eq!(geob.value(), "A blob");
	}

	#[test_log::test]
	fn private_frame_codec() {
		let encoded = encode_priv("owner@example.com", &[9, 8, 7]);
		let frame = decode_priv(&encoded);
		assert_eq!(frame.value(), "owner@example.com");
		assert_eq!(
			frame.field(FieldId::Data),
			Some(&FieldValue::Bytes(vec![9, 8, 7]))
		);
	}

	#[test_log::test]
	fn empty_picture_gets_placeholder() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		let mut picture = PictureFields {
			mime_type: String::from("image/png"),
			picture_type: 3,
			..PictureFields::default()
		}
		.into_frame("APIC");
		assert!(adapter.add_frame(&mut picture, &options));

		let frames = adapter.frames(&options);
		let picture = PictureFields::from_frame(frames.find_by_type(FrameType::Picture).unwrap());
		assert_eq!(picture.data, PLACEHOLDER_DATA);
		assert_eq!(picture.mime_type, "image/png");
	}

	#[test_log::test]
	fn unknown_frames_are_kept() {
		let options = TagOptions::default();
		let mut tag = Id3v2Tag::default();
		tag.insert(NativeFrame::Binary(BinaryFrame::new(
			FrameId::new("XYZW").unwrap(),
			vec![0xDE, 0xAD],
		)));
		let mut adapter = TagAdapter::new(NativeTag::Id3v2(tag));

		let frames = adapter.frames(&options);
		let unknown = frames.iter().next().unwrap().clone();
		assert_eq!(unknown.ty(), FrameType::UnknownFrame);
		assert_eq!(unknown.name(), UNKNOWN_FRAME_NAME);
		assert_eq!(unknown.display_value(), "<2 bytes>");

		// Rewriting keeps the native ID
		let mut edited = unknown.clone();
		edited.set_field(FieldId::Data, FieldValue::Bytes(vec![0xBE, 0xEF]));
		assert!(adapter.set_frame(&edited, &options));
		assert_eq!(native(&adapter).into_iter().next().unwrap().id_str(), "XYZW");

		// But a new one cannot be created, there is no ID to give it
		assert!(!adapter.add_frame(&mut unknown.clone(), &options));
	}

	#[test_log::test]
	fn set_keeps_order() {
		let options = TagOptions::default();
		let mut adapter = adapter();
		adapter.add_frame(&mut Frame::new(FrameType::Title, "Title"), &options);
		adapter.add_frame(&mut Frame::new(FrameType::Artist, "Artist"), &options);
		adapter.add_frame(&mut Frame::new(FrameType::Album, "Album"), &options);

		let frames = adapter.frames(&options);
		let mut title = frames.find_by_type(FrameType::Title).unwrap().clone();
		title.set_value("New title");
		assert!(adapter.set_frame(&title, &options));

		let values = adapter
			.frames(&options)
			.iter()
			.map(|frame| frame.value().to_owned())
			.collect::<Vec<_>>();
		assert_eq!(values, ["New title", "Artist", "Album"]);
	}
}
