//! Byte level text helpers for the frame layouts encoded by tagframe itself (GEOB, PRIV, WM/Picture)

pub(crate) const LATIN1: u8 = 0;
pub(crate) const UTF16: u8 = 1;
pub(crate) const UTF16BE: u8 = 2;
pub(crate) const UTF8: u8 = 3;

pub(crate) fn latin1_to_string(bytes: &[u8]) -> String {
	bytes.iter().map(|&b| char::from(b)).collect()
}

/// Returns `None` if any character is outside of Latin-1
pub(crate) fn string_to_latin1(text: &str) -> Option<Vec<u8>> {
	text.chars().map(|c| u8::try_from(u32::from(c)).ok()).collect()
}

fn utf16_units(bytes: &[u8], big_endian: bool) -> Vec<u16> {
	bytes
		.chunks_exact(2)
		.map(|pair| {
			let pair = [pair[0], pair[1]];
			if big_endian {
				u16::from_be_bytes(pair)
			} else {
				u16::from_le_bytes(pair)
			}
		})
		.collect()
}

pub(crate) fn decode_utf16le(bytes: &[u8]) -> String {
	String::from_utf16_lossy(&utf16_units(bytes, false))
}

pub(crate) fn encode_utf16le(text: &str) -> Vec<u8> {
	text.encode_utf16().flat_map(u16::to_le_bytes).collect()
}

/// Decode a string in one of the ID3v2 encodings, without any terminator
pub(crate) fn decode(bytes: &[u8], encoding: u8) -> String {
	match encoding {
		UTF16 => match bytes {
			[0xFE, 0xFF, rest @ ..] => String::from_utf16_lossy(&utf16_units(rest, true)),
			[0xFF, 0xFE, rest @ ..] => decode_utf16le(rest),
			_ => decode_utf16le(bytes),
		},
		UTF16BE => String::from_utf16_lossy(&utf16_units(bytes, true)),
		UTF8 => String::from_utf8_lossy(bytes).into_owned(),
		_ => latin1_to_string(bytes),
	}
}

/// Encode a string in one of the ID3v2 encodings, followed by the encoding's terminator
///
/// Characters that cannot be represented in Latin-1 are replaced with `?`.
pub(crate) fn encode_terminated(text: &str, encoding: u8) -> Vec<u8> {
	match encoding {
		UTF16 => {
			let mut out = vec![0xFF, 0xFE];
			out.extend(encode_utf16le(text));
			out.extend([0, 0]);
			out
		},
		UTF16BE => {
			let mut out: Vec<u8> = text.encode_utf16().flat_map(u16::to_be_bytes).collect();
			out.extend([0, 0]);
			out
		},
		UTF8 => {
			let mut out = text.as_bytes().to_vec();
			out.push(0);
			out
		},
		_ => {
			let mut out: Vec<u8> = text
				.chars()
				.map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
				.collect();
			out.push(0);
			out
		},
	}
}

/// Split a terminated string off the front of `data`
///
/// Returns the decoded string and the remaining bytes. A missing terminator consumes everything.
pub(crate) fn split_terminated(data: &[u8], encoding: u8) -> (String, &[u8]) {
	let wide = matches!(encoding, UTF16 | UTF16BE);

	let end = if wide {
		data.chunks_exact(2)
			.position(|pair| pair == [0, 0])
			.map(|pos| (pos * 2, pos * 2 + 2))
	} else {
		data.iter().position(|&b| b == 0).map(|pos| (pos, pos + 1))
	};

	match end {
		Some((text_end, rest_start)) => (decode(&data[..text_end], encoding), &data[rest_start..]),
		None => (decode(data, encoding), &[]),
	}
}
