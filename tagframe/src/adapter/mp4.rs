use super::mappings::MP4_MAP;
use super::{FieldReader, FrameAdapter, WriteContext};
use crate::config::TagOptions;
use crate::frame::{ExtendedType, Field, FieldId, Frame, FrameType};
use crate::genre;
use crate::picture::PictureFields;
use crate::util::pairs::NumberPair;
use crate::util::text;

use std::borrow::Cow;

use lofty::mp4::{Atom, AtomData, AtomIdent, DataType, Ilst};
use lofty::tag::TagExt;

const ITUNES_MEAN: &str = "com.apple.iTunes";
const FREEFORM_PREFIX: &str = "----:";

const COVR: AtomIdent<'static> = AtomIdent::Fourcc(*b"covr");
const TRKN: AtomIdent<'static> = AtomIdent::Fourcc(*b"trkn");
const DISK: AtomIdent<'static> = AtomIdent::Fourcc(*b"disk");
const GNRE: AtomIdent<'static> = AtomIdent::Fourcc(*b"gnre");
const TMPO: AtomIdent<'static> = AtomIdent::Fourcc(*b"tmpo");

const FLAG_ATOMS: [AtomIdent<'static>; 4] = [
	AtomIdent::Fourcc(*b"cpil"),
	AtomIdent::Fourcc(*b"pgap"),
	AtomIdent::Fourcc(*b"pcst"),
	AtomIdent::Fourcc(*b"hdvd"),
];

type Entry = (AtomIdent<'static>, AtomData);

/// The table key and the frame name of an atom
fn ident_names(ident: &AtomIdent<'_>) -> (String, String) {
	match ident {
		AtomIdent::Fourcc(fourcc) => {
			let key = text::latin1_to_string(fourcc);
			(key.clone(), key)
		},
		AtomIdent::Freeform { mean, name } => {
			let key = format!("{FREEFORM_PREFIX}{mean}:{name}");
			if mean == ITUNES_MEAN {
				(key, name.to_string())
			} else {
				(key.clone(), key)
			}
		},
	}
}

/// Parse a frame name or table key into an atom identifier
///
/// Four Latin-1 characters make a FOURCC, `----:mean:name` a freeform atom, anything else becomes a
/// freeform atom under the iTunes mean.
fn parse_ident(name: &str) -> Option<AtomIdent<'static>> {
	if let Some(rest) = name.strip_prefix(FREEFORM_PREFIX) {
		let (mean, name) = rest.split_once(':')?;
		return Some(AtomIdent::Freeform {
			mean: Cow::Owned(mean.to_owned()),
			name: Cow::Owned(name.to_owned()),
		});
	}

	if let Some(fourcc) = text::string_to_latin1(name)
		.and_then(|bytes| <[u8; 4]>::try_from(bytes.as_slice()).ok())
	{
		return Some(AtomIdent::Fourcc(fourcc));
	}

	if name.is_empty() {
		return None;
	}

	Some(AtomIdent::Freeform {
		mean: Cow::Borrowed(ITUNES_MEAN),
		name: Cow::Owned(name.to_owned()),
	})
}

fn number_pair(data: &[u8]) -> Option<NumberPair> {
	let number = u16::from_be_bytes([*data.get(2)?, *data.get(3)?]);
	let total = match (data.get(4), data.get(5)) {
		(Some(&hi), Some(&lo)) => Some(u32::from(u16::from_be_bytes([hi, lo]))).filter(|t| *t > 0),
		_ => None,
	};

	Some(NumberPair {
		number: u32::from(number),
		total,
	})
}

fn encode_number_pair(ident: &AtomIdent<'_>, pair: NumberPair) -> Vec<u8> {
	let number = (pair.number.min(u32::from(u16::MAX)) as u16).to_be_bytes();
	let total = (pair.total.unwrap_or(0).min(u32::from(u16::MAX)) as u16).to_be_bytes();

	let mut data = vec![0, 0, number[0], number[1], total[0], total[1]];
	// Track numbers carry two trailing reserved bytes
	if *ident == TRKN {
		data.extend([0, 0]);
	}
	data
}

fn entry_to_frame(ident: &AtomIdent<'_>, data: &AtomData) -> Frame {
	let (key, name) = ident_names(ident);
	let ty = MP4_MAP::frame_type(&key).unwrap_or(FrameType::Other);
	let frame = |value: String| Frame::new(ExtendedType::new(ty, name.clone()), value);

	match data {
		AtomData::UTF8(value) | AtomData::UTF16(value) => frame(value.clone()),
		AtomData::Picture(picture) => PictureFields::from_native(picture, text::UTF8).into_frame(&name),
		AtomData::SignedInteger(value) => frame(value.to_string()),
		AtomData::UnsignedInteger(value) => frame(value.to_string()),
		AtomData::Bool(value) => frame(String::from(if *value { "1" } else { "0" })),
		AtomData::Unknown { data, .. } if *ident == TRKN || *ident == DISK => match number_pair(data) {
			Some(pair) => frame(pair.format(0)),
			None => frame(String::new()),
		},
		AtomData::Unknown { data, .. } if *ident == GNRE => {
			let number = match data.as_slice() {
				[hi, lo] => u16::from_be_bytes([*hi, *lo]),
				_ => 0,
			};

			// Stored off by one
			let name = u8::try_from(number.saturating_sub(1)).map_or("", genre::number_to_name);
			Frame::new(ExtendedType::new(FrameType::Genre, "gnre"), name)
		},
		AtomData::Unknown { data, .. } => Frame::with_fields(
			ExtendedType::new(ty, name.clone()),
			vec![Field::bytes(FieldId::Data, data.clone())],
		),
	}
}

fn parse_flag(value: &str) -> bool {
	matches!(value.trim(), "1" | "true" | "TRUE" | "True" | "yes")
}

/// Build the atom data for `frame`, stored under `ident`
///
/// `existing` is the data being replaced, whose kind is kept where possible.
fn build_data(
	ident: &AtomIdent<'_>,
	existing: Option<&AtomData>,
	frame: &Frame,
) -> Option<AtomData> {
	let reader = FieldReader::new(frame);

	if *ident == COVR || frame.ty() == FrameType::Picture {
		let picture = PictureFields::from_frame(frame).with_placeholder();
		return Some(AtomData::Picture(picture.to_native()));
	}

	if !frame.uses_value() {
		if let Some(data) = reader.bytes(FieldId::Data) {
			let code = match existing {
				Some(AtomData::Unknown { code, .. }) => *code,
				_ => DataType::Reserved,
			};
			return Some(AtomData::Unknown {
				code,
				data: data.to_vec(),
			});
		}
	}

	let value = reader.primary(FieldId::Text);

	if *ident == TRKN || *ident == DISK {
		let Some(pair) = NumberPair::parse(value) else {
			log::warn!("MP4: \"{value}\" is not a valid number pair");
			return None;
		};
		return Some(AtomData::Unknown {
			code: DataType::Reserved,
			data: encode_number_pair(ident, pair),
		});
	}

	if *ident == GNRE {
		let number = genre::name_to_number(&genre::parse_legacy(value));
		if number == genre::UNKNOWN_GENRE {
			log::warn!("MP4: \"{value}\" has no genre number, unable to store it in `gnre`");
			return None;
		}
		return Some(AtomData::Unknown {
			code: DataType::Reserved,
			data: (u16::from(number) + 1).to_be_bytes().to_vec(),
		});
	}

	if FLAG_ATOMS.contains(ident) || matches!(existing, Some(AtomData::Bool(_))) {
		return Some(AtomData::Bool(parse_flag(value)));
	}

	let integer = match existing {
		Some(AtomData::SignedInteger(_)) => Some(true),
		Some(AtomData::UnsignedInteger(_)) => Some(false),
		_ if *ident == TMPO => Some(false),
		_ => None,
	};

	if let Some(signed) = integer {
		let trimmed = value.trim();
		let data = if signed {
			trimmed.parse().ok().map(AtomData::SignedInteger)
		} else {
			trimmed.parse().ok().map(AtomData::UnsignedInteger)
		};

		if data.is_none() {
			log::warn!("MP4: \"{value}\" is not a valid integer");
		}
		return data;
	}

	let value = match frame.ty() {
		FrameType::Genre => genre::parse_legacy(value).into_owned(),
		_ => value.to_owned(),
	};

	match existing {
		Some(AtomData::UTF16(_)) => Some(AtomData::UTF16(value)),
		_ => Some(AtomData::UTF8(value)),
	}
}

/// The identifier for a new atom
fn target_ident(frame: &Frame) -> Option<AtomIdent<'static>> {
	match frame.ty() {
		FrameType::UnknownFrame => None,
		FrameType::Picture => Some(COVR),
		FrameType::Other => parse_ident(frame.name()),
		ty => parse_ident(MP4_MAP::native_key(ty)?),
	}
}

fn entries(ilst: &Ilst) -> Vec<Entry> {
	ilst.into_iter()
		.flat_map(|atom| {
			let ident = atom.ident().clone().into_owned();
			atom.data().map(move |data| (ident.clone(), data.clone()))
		})
		.collect()
}

/// Rebuild the atom list, grouping the entries of each identifier in order of first appearance
fn replace_entries(ilst: &mut Ilst, entries: Vec<Entry>) {
	let mut groups: Vec<(AtomIdent<'static>, Vec<AtomData>)> = Vec::new();
	for (ident, data) in entries {
		match groups.iter_mut().find(|(existing, _)| *existing == ident) {
			Some((_, values)) => values.push(data),
			None => groups.push((ident, vec![data])),
		}
	}

	TagExt::clear(ilst);
	for (ident, values) in groups {
		if let Some(atom) = Atom::from_collection(ident, values) {
			ilst.insert(atom);
		}
	}
}

impl FrameAdapter for Ilst {
	fn enumerate(&self, _: &TagOptions) -> Vec<Frame> {
		self.into_iter()
			.flat_map(|atom| atom.data().map(|data| entry_to_frame(atom.ident(), data)))
			.collect()
	}

	fn set(&mut self, position: usize, frame: &Frame, _: &mut WriteContext<'_>) -> bool {
		let mut entries = entries(self);
		let Some((ident, existing)) = entries.get(position) else {
			return false;
		};

		let Some(data) = build_data(ident, Some(existing), frame) else {
			return false;
		};

		entries[position].1 = data;
		replace_entries(self, entries);
		true
	}

	fn add(&mut self, frame: &Frame, _: &mut WriteContext<'_>) -> bool {
		let Some(ident) = target_ident(frame) else {
			return false;
		};

		let Some(data) = build_data(&ident, None, frame) else {
			return false;
		};

		// Freeform atoms and pictures hold multiple values, everything else is replaced
		if ident == COVR || matches!(ident, AtomIdent::Freeform { .. }) {
			self.insert(Atom::new(ident, data));
		} else {
			self.replace_atom(Atom::new(ident, data));
		}

		true
	}

	fn delete(&mut self, position: usize) -> bool {
		let mut entries = entries(self);
		if position >= entries.len() {
			return false;
		}

		entries.remove(position);
		replace_entries(self, entries);
		true
	}

	fn clear(&mut self) {
		TagExt::clear(self);
	}

	fn entry_count(&self) -> usize {
		self.into_iter().map(|atom| atom.data().count()).sum()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::adapter::{NativeTag, TagAdapter};

	use lofty::tag::Accessor;

	fn adapter() -> TagAdapter {
		let mut ilst = Ilst::default();
		ilst.set_title(String::from("Title"));
		ilst.set_track(3);
		ilst.set_track_total(12);
		ilst.insert(Atom::new(
			AtomIdent::Freeform {
				mean: Cow::Borrowed(ITUNES_MEAN),
				name: Cow::Borrowed("ARTISTS"),
			},
			AtomData::UTF8(String::from("Artist 1")),
		));
		ilst.insert(Atom::new(
			AtomIdent::Freeform {
				mean: Cow::Borrowed(ITUNES_MEAN),
				name: Cow::Borrowed("ARTISTS"),
			},
			AtomData::UTF8(String::from("Artist 2")),
		));
		TagAdapter::new(NativeTag::Mp4(ilst))
	}

	fn native(adapter: &TagAdapter) -> &Ilst {
		let NativeTag::Mp4(ilst) = adapter.tag() else {
			unreachable!()
		};
		ilst
	}

	#[test_log::test]
	fn atoms_are_flattened() {
		let options = TagOptions::default();
		let frames = adapter().frames(&options);

		assert_eq!(frames.len(), 4);
		assert_eq!(frames.value(FrameType::Title), Some("Title"));
		assert_eq!(frames.value(FrameType::Track), Some("3/12"));

		let artists = frames
			.iter()
			.filter(|frame| frame.name() == "ARTISTS")
			.map(Frame::value)
			.collect::<Vec<_>>();
		assert_eq!(artists, ["Artist 1", "Artist 2"]);
	}

	#[test_log::test]
	fn track_is_binary() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		let frames = adapter.frames(&options);
		let mut track = frames.find_by_type(FrameType::Track).unwrap().clone();
		track.set_value("4/10");
		assert!(adapter.set_frame(&track, &options));

		assert_eq!(native(&adapter).track(), Some(4));
		assert_eq!(native(&adapter).track_total(), Some(10));

		track.set_value("not a number");
		assert!(!adapter.set_frame(&track, &options));
	}

	#[test_log::test]
	fn set_single_value_of_many() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		let frames = adapter.frames(&options);
		let mut second = frames.iter().nth(3).unwrap().clone();
		assert_eq!(second.value(), "Artist 2");
		second.set_value("Changed");
		assert!(adapter.set_frame(&second, &options));

		let values = adapter
			.frames(&options)
			.iter()
			.map(|frame| frame.value().to_owned())
			.collect::<Vec<_>>();
		assert_eq!(values, ["Title", "3/12", "Artist 1", "Changed"]);
	}

	#[test_log::test]
	fn freeform_names() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		assert!(adapter.add_frame(&mut Frame::new(FrameType::Arranger, "Someone"), &options));
		assert!(adapter.add_frame(&mut Frame::other("----:org.example:KEY", "value"), &options));

		let frames = adapter.frames(&options);
		assert_eq!(frames.find_by_type(FrameType::Arranger).unwrap().name(), "ARRANGER");
		assert_eq!(
			frames.find_by_name("----:org.example:KEY").map(Frame::value),
			Some("value")
		);
	}

	#[test_log::test]
	fn single_valued_atoms_are_replaced() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		assert!(adapter.add_frame(&mut Frame::new(FrameType::Title, "Another"), &options));
		let titles = adapter
			.frames(&options)
			.iter()
			.filter(|frame| frame.ty() == FrameType::Title)
			.count();
		assert_eq!(titles, 1);
		assert_eq!(native(&adapter).title().as_deref(), Some("Another"));
	}

	#[test_log::test]
	fn flags_and_integers() {
		let options = TagOptions::default();
		let mut adapter = adapter();

		assert!(adapter.add_frame(&mut Frame::new(FrameType::Compilation, "1"), &options));
		assert!(adapter.add_frame(&mut Frame::new(FrameType::Bpm, "128"), &options));
		assert!(!adapter.add_frame(&mut Frame::new(FrameType::Bpm, "fast"), &options));

		let frames = adapter.frames(&options);
		assert_eq!(frames.value(FrameType::Compilation), Some("1"));
		assert_eq!(frames.value(FrameType::Bpm), Some("128"));
	}

	#[test_log::test]
	fn legacy_genre() {
		let options = TagOptions::default();
		let mut ilst = Ilst::default();
		ilst.insert(Atom::new(
			GNRE,
			AtomData::Unknown {
				code: DataType::Reserved,
				data: vec![0, 10],
			},
		));
		let adapter = TagAdapter::new(NativeTag::Mp4(ilst));

		assert_eq!(adapter.frames(&options).value(FrameType::Genre), Some("Metal"));
	}
}
