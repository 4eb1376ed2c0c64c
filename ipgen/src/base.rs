use std::{fmt::{self, Display}, str::FromStr};

use thiserror::Error;

/// The numeral systems an IPv4 parser accepts for a dotted segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralBase {
	Decimal,
	Octal,
	Hexadecimal,
}

impl NumeralBase {
	/// Every base, in the order mixed combinations cycle through them.
	pub const ALL: [NumeralBase; 3] = [
		NumeralBase::Decimal,
		NumeralBase::Octal,
		NumeralBase::Hexadecimal,
	];

	pub fn name(self) -> &'static str {
		match self {
			NumeralBase::Decimal => "dec",
			NumeralBase::Octal => "oct",
			NumeralBase::Hexadecimal => "hex",
		}
	}

	pub fn prefix(self) -> &'static str {
		match self {
			NumeralBase::Decimal => "",
			NumeralBase::Octal => "0",
			NumeralBase::Hexadecimal => "0x",
		}
	}

	pub fn render(self, value: u32, pad: usize) -> String {
		Rendered::new(value, self, pad).to_string()
	}
}

impl Display for NumeralBase {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

impl FromStr for NumeralBase {
	type Err = UnknownBase;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		Ok(match name {
			"dec" => NumeralBase::Decimal,
			"oct" => NumeralBase::Octal,
			"hex" => NumeralBase::Hexadecimal,
			_ => return Err(UnknownBase(name.to_owned())),
		})
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid format `{0}`, valid formats are dec, oct, hex, all")]
pub struct UnknownBase(pub String);

/// One segment as it appears in a dotted representation.
///
/// The pad is inserted literally between the prefix and the digits, it is
/// not a field width. Decimal segments ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rendered {
	pub value: u32,
	pub base: NumeralBase,
	pub pad: usize,
}

impl Rendered {
	pub fn new(value: u32, base: NumeralBase, pad: usize) -> Self {
		Self {
			value,
			base,
			pad,
		}
	}

	fn write_prefix(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.base.prefix())?;

		for _ in 0..self.pad {
			f.write_str("0")?;
		}

		Ok(())
	}
}

impl Display for Rendered {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let value = self.value;

		match self.base {
			NumeralBase::Decimal => write!(f, "{value}"),
			NumeralBase::Octal => {
				self.write_prefix(f)?;
				write!(f, "{value:o}")
			},
			NumeralBase::Hexadecimal => {
				self.write_prefix(f)?;
				write!(f, "{value:x}")
			},
		}
	}
}
