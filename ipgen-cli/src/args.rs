use clap::{ArgAction, Parser};
use ipgen::{NumeralBase, UnknownBase};

const BANNER: &str = "\
▪   ▄▄▄· ▄▄ • ▄▄▄ . ▐ ▄
██ ▐█ ▄█▐█ ▀ ▪▀▄.▀·•█▌▐█
▐█· ██▀·▄█ ▀█▄▐▀▀▪▄▐█▐▐▌
▐█▌▐█▪·•▐█▄▪▐█▐█▄▄▌██▐█▌
▀▀▀.▀   ·▀▀▀▀  ▀▀▀ ▀▀ █▪";

/// Generates the alternative notations of an IPv4 address.
#[derive(Debug, Parser)]
#[command(name = "ipgen", version, before_help = BANNER)]
pub struct Cli {
	/// IPv4 address to spell out
	pub address: String,

	/// Formats to generate: dec, oct, hex, all (comma separated)
	#[arg(long, default_value = "all")]
	pub format: String,

	/// Also generate all mixed combinations
	#[arg(long)]
	pub mix: bool,

	/// Number of 0s to pad hex and oct numbers with
	#[arg(long, default_value_t = 0)]
	pub pad: usize,

	/// Log more details to stderr, repeat for more
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

/// Parses a comma separated list of base names.
///
/// `all` expands to every base in place. Repeated bases keep their first
/// position.
pub fn parse_formats(list: &str) -> Result<Vec<NumeralBase>, UnknownBase> {
	let mut bases = Vec::new();

	for name in list.split(',') {
		let named = match name {
			"all" => NumeralBase::ALL.to_vec(),
			_ => vec![name.parse()?],
		};

		for base in named {
			if !bases.contains(&base) {
				bases.push(base);
			}
		}
	}

	Ok(bases)
}
