use std::{io::{self, BufWriter, Write}, process::ExitCode};

use clap::Parser;
use ipgen::{Address, AddressError, Options, UnknownBase};
use log::info;
use thiserror::Error;

use crate::args::{parse_formats, Cli};

mod args;
mod logger;

#[derive(Debug, Error)]
enum CliError {
	#[error(transparent)]
	Address(#[from] AddressError),
	#[error(transparent)]
	Format(#[from] UnknownBase),
	#[error("couldn't write output: {0}")]
	Output(#[from] io::Error),
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	if let Err(err) = logger::init(logger::level_for(cli.verbose)) {
		eprintln!("couldn't set up logging: {err}");
	}

	match run(&cli) {
		Ok(()) => ExitCode::SUCCESS,
		Err(err) => {
			eprintln!("error: {err}");
			ExitCode::FAILURE
		},
	}
}

fn run(cli: &Cli) -> Result<(), CliError> {
	let address = Address::parse(&cli.address)?;
	let bases = parse_formats(&cli.format)?;

	let options = Options::default()
		.with_bases(bases)
		.with_mix(cli.mix)
		.with_pad(cli.pad);

	info!("spelling out {address}");

	let notations = ipgen::generate(address, &options);

	let mut stdout = BufWriter::new(io::stdout().lock());
	for notation in notations {
		writeln!(stdout, "{notation}")?;
	}
	stdout.flush()?;

	Ok(())
}
