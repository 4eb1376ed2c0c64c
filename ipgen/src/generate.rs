use std::fmt::Write;

use log::{debug, trace};

use crate::{
	address::Address,
	base::{NumeralBase, Rendered},
	grouping::Grouping,
	odometer::Odometer,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
	pub bases: Vec<NumeralBase>,
	pub mix: bool,
	pub pad: usize,
}

impl Options {
	pub fn with_bases(mut self, bases: impl IntoIterator<Item = NumeralBase>) -> Self {
		self.bases = bases.into_iter().collect();
		self
	}

	pub fn with_mix(mut self, mix: bool) -> Self {
		self.mix = mix;
		self
	}

	pub fn with_pad(mut self, pad: usize) -> Self {
		self.pad = pad;
		self
	}
}

impl Default for Options {
	fn default() -> Self {
		Self {
			bases: NumeralBase::ALL.to_vec(),
			mix: false,
			pad: 0,
		}
	}
}

/// Generates every requested notation of `address`.
///
/// For each distinct base in `options.bases` the four groupings are rendered
/// widest first. With `options.mix` set, [`mixed`] is appended afterwards.
pub fn generate(address: Address, options: &Options) -> Vec<String> {
	debug!("generating notations of {address} with {options:?}");

	let mut seen = Vec::with_capacity(NumeralBase::ALL.len());
	let mut representations = Vec::new();

	for &base in &options.bases {
		if seen.contains(&base) {
			continue;
		}
		seen.push(base);

		representations.extend(plain(address, base, options.pad));
	}

	if options.mix {
		representations.extend(mixed(address, options.pad));
	}

	debug!("generated {} notations", representations.len());

	representations
}

/// The four groupings of `address`, every segment in `base`.
pub fn plain(address: Address, base: NumeralBase, pad: usize) -> Vec<String> {
	Grouping::ALL.iter()
		.map(|grouping| {
			let segments = grouping.collapse(address);
			join(segments.iter().map(|&value| Rendered::new(value, base, pad)))
		})
		.collect()
}

/// Every combination of per-segment bases for the multi-segment groupings.
///
/// Bases are tried in the order of [`NumeralBase::ALL`] with the last segment
/// changing fastest. The single-segment grouping has nothing to mix and is
/// left to [`plain`].
pub fn mixed(address: Address, pad: usize) -> Vec<String> {
	let mut representations = Vec::new();

	for grouping in Grouping::ALL {
		if grouping.width() < 2 {
			continue;
		}

		let segments = grouping.collapse(address);
		let before = representations.len();

		for reading in Odometer::new(segments.len(), NumeralBase::ALL.len()) {
			let rendered = segments.iter()
				.zip(reading)
				.map(|(&value, digit)| Rendered::new(value, NumeralBase::ALL[digit], pad));

			representations.push(join(rendered));
		}

		trace!("{grouping:?} grouping mixed into {} combinations", representations.len() - before);
	}

	representations
}

fn join(segments: impl Iterator<Item = Rendered>) -> String {
	let mut joined = String::new();

	for (index, segment) in segments.enumerate() {
		if index > 0 {
			joined.push('.');
		}
		write!(joined, "{segment}")
			.expect("writing to a String should never fail");
	}

	joined
}
