use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

pub fn level_for(verbosity: u8) -> LevelFilter {
	match verbosity {
		0 => LevelFilter::Warn,
		1 => LevelFilter::Info,
		2 => LevelFilter::Debug,
		_ => LevelFilter::Trace,
	}
}

/// Installs a stderr logger, stdout only carries the generated notations.
pub fn init(level: LevelFilter) -> Result<(), log::SetLoggerError> {
	TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
}
