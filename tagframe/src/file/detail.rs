use std::fmt::{Display, Formatter};
use std::time::Duration;

use lofty::file::FileType;
use lofty::properties::FileProperties;

/// A human-readable name for a file type
pub fn format_name(file_type: FileType) -> &'static str {
	match file_type {
		FileType::Aac => "AAC",
		FileType::Aiff => "AIFF",
		FileType::Ape => "Monkey's Audio",
		FileType::Flac => "FLAC",
		FileType::Mpeg => "MPEG",
		FileType::Mp4 => "MP4",
		FileType::Mpc => "Musepack",
		FileType::Opus => "Opus",
		FileType::Vorbis => "Ogg Vorbis",
		FileType::Speex => "Speex",
		FileType::Wav => "WAV",
		FileType::WavPack => "WavPack",
		_ => "Unknown",
	}
}

/// Audio details of a file
///
/// Values the format does not store, or that were not read (see [`TagOptions::read_properties`]),
/// are `None`.
///
/// [`TagOptions::read_properties`]: crate::config::TagOptions::read_properties
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailInfo {
	pub(crate) format: &'static str,
	pub(crate) bitrate: Option<u32>,
	pub(crate) sample_rate: Option<u32>,
	pub(crate) channels: Option<u8>,
	pub(crate) bit_depth: Option<u8>,
	pub(crate) duration: Duration,
}

impl DetailInfo {
	pub(crate) fn new(file_type: FileType, properties: &FileProperties) -> Self {
		Self {
			format: format_name(file_type),
			bitrate: properties
				.audio_bitrate()
				.or_else(|| properties.overall_bitrate()),
			sample_rate: properties.sample_rate(),
			channels: properties.channels(),
			bit_depth: properties.bit_depth(),
			duration: properties.duration(),
		}
	}

	/// The format name, such as "MPEG" or "FLAC"
	pub fn format(&self) -> &'static str {
		self.format
	}

	/// Audio bitrate in kbps
	pub fn bitrate(&self) -> Option<u32> {
		self.bitrate
	}

	/// Sample rate in Hz
	pub fn sample_rate(&self) -> Option<u32> {
		self.sample_rate
	}

	/// Channel count
	pub fn channels(&self) -> Option<u8> {
		self.channels
	}

	/// Bits per sample
	pub fn bit_depth(&self) -> Option<u8> {
		self.bit_depth
	}

	/// Playback duration
	pub fn duration(&self) -> Duration {
		self.duration
	}
}

impl Display for DetailInfo {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.format)?;

		if let Some(bitrate) = self.bitrate {
			write!(f, " {bitrate} kbps")?;
		}

		if let Some(sample_rate) = self.sample_rate {
			write!(f, " {sample_rate} Hz")?;
		}

		match self.channels {
			Some(1) => f.write_str(" Mono")?,
			Some(2) => f.write_str(" Stereo")?,
			Some(channels) => write!(f, " {channels} channels")?,
			None => {},
		}

		let seconds = self.duration.as_secs();
		write!(f, " {}:{:02}", seconds / 60, seconds % 60)
	}
}
