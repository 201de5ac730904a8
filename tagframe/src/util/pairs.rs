//! Track and disc style number pairs (`"N"` or `"N/total"`)

pub(crate) const NUMBER_PAIR_SEPARATOR: char = '/';

/// A parsed number pair
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub(crate) struct NumberPair {
	pub(crate) number: u32,
	pub(crate) total: Option<u32>,
}

impl NumberPair {
	/// Parse `"N"` or `"N/total"`
	///
	/// A total of `0`, or one that cannot be parsed, is dropped. Only the number is required.
	pub(crate) fn parse(value: &str) -> Option<Self> {
		let trimmed = value.trim();
		if trimmed.is_empty() {
			return None;
		}

		let (number, total) = match trimmed.split_once(NUMBER_PAIR_SEPARATOR) {
			Some((number, total)) => (number.trim(), Some(total.trim())),
			None => (trimmed, None),
		};

		let number = match number.parse::<u32>() {
			Ok(number) => number,
			Err(parse_error) => {
				log::warn!("\"{value}\" cannot be parsed as a number pair: {parse_error}");
				return None;
			},
		};

		let total = match total {
			Some(total) => match total.parse::<u32>() {
				Ok(0) => None,
				Ok(total) => Some(total),
				Err(_) => {
					log::warn!("Dropping malformed total in number pair \"{value}\"");
					None
				},
			},
			None => None,
		};

		Some(Self { number, total })
	}

	/// Format the pair, padding both numbers to `digits`
	pub(crate) fn format(self, digits: u8) -> String {
		let width = usize::from(digits);
		match self.total {
			Some(total) if total > 0 => format!(
				"{:0width$}{NUMBER_PAIR_SEPARATOR}{:0width$}",
				self.number, total
			),
			_ => format!("{:0width$}", self.number),
		}
	}
}

/// Normalize a free-form number pair value for writing
///
/// Values that are not number pairs at all are kept verbatim, so nothing the user typed is lost.
pub(crate) fn normalize(value: &str, digits: u8) -> String {
	match NumberPair::parse(value) {
		Some(pair) => pair.format(digits),
		None => value.trim().to_owned(),
	}
}
