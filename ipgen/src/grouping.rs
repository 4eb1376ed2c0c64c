use std::ops::Deref;

use crate::address::Address;

/// How many segments the four octets are collapsed into.
///
/// Trailing octets are merged big-endian into the last segment, so
/// `Three` turns `a.b.c.d` into `a.b.(c << 8 | d)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Grouping {
	Four,
	Three,
	Two,
	One,
}

impl Grouping {
	pub const ALL: [Grouping; 4] = [
		Grouping::Four,
		Grouping::Three,
		Grouping::Two,
		Grouping::One,
	];

	pub fn width(self) -> usize {
		match self {
			Grouping::Four => 4,
			Grouping::Three => 3,
			Grouping::Two => 2,
			Grouping::One => 1,
		}
	}

	pub fn collapse(self, address: Address) -> Segments {
		let [b1, b2, b3, b4] = address.octets().map(u32::from);

		match self {
			Grouping::Four => Segments::from_slice(&[b1, b2, b3, b4]),
			Grouping::Three => Segments::from_slice(&[b1, b2, b3 << 8 | b4]),
			Grouping::Two => Segments::from_slice(&[b1, b2 << 16 | b3 << 8 | b4]),
			Grouping::One => Segments::from_slice(&[b1 << 24 | b2 << 16 | b3 << 8 | b4]),
		}
	}

	/// Reverses [`Grouping::collapse`].
	///
	/// Returns `None` when the number of segments doesn't match this grouping
	/// or a segment holds more octets than its position allows.
	pub fn expand(self, segments: &[u32]) -> Option<[u8; 4]> {
		if segments.len() != self.width() {
			return None;
		}

		let mut octets = [0u8; 4];
		let (last, leading) = segments.split_last()?;

		for (octet, &segment) in octets.iter_mut().zip(leading) {
			*octet = u8::try_from(segment).ok()?;
		}

		// the last segment spans every octet the leading ones didn't claim
		let trailing = 4 - leading.len();
		if trailing < 4 && *last >> (8 * trailing) != 0 {
			return None;
		}

		let last_bytes = last.to_be_bytes();
		octets[leading.len()..].copy_from_slice(&last_bytes[4 - trailing..]);

		Some(octets)
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segments {
	values: [u32; 4],
	len: usize,
}

impl Segments {
	fn from_slice(values: &[u32]) -> Self {
		let mut segments = Self {
			values: [0; 4],
			len: values.len(),
		};
		segments.values[..values.len()].copy_from_slice(values);

		segments
	}
}

impl Deref for Segments {
	type Target = [u32];

	fn deref(&self) -> &[u32] {
		&self.values[..self.len]
	}
}
