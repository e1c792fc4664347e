use std::path::PathBuf;

use clap::Parser;
use recall_primitives::{Key, KeyParseError};

#[derive(Parser, Debug)]
#[command(name = "recall")]
#[command(about = "Replay keys against the last-command word picker")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Command history entry, oldest first (repeatable)
	#[arg(long = "history", value_name = "CMD")]
	pub history: Vec<String>,

	/// Newline-separated history file, read before --history entries
	#[arg(long, value_name = "PATH")]
	pub history_file: Option<PathBuf>,

	/// TOML configuration file
	#[arg(long, short = 'c', value_name = "PATH")]
	pub config: Option<PathBuf>,

	/// Rows shown per listing (overrides the config)
	#[arg(long)]
	pub height: Option<usize>,

	/// Initial contents of the edited line
	#[arg(long, default_value = "")]
	pub line: String,

	/// Log at debug level unless RUST_LOG is set
	#[arg(long, short = 'v')]
	pub verbose: bool,

	/// Keys to replay, in key notation (alt-1, enter, -, 2, ...)
	#[arg(value_name = "KEYS", value_parser = parse_key, trailing_var_arg = true, allow_hyphen_values = true)]
	pub keys: Vec<Key>,
}

fn parse_key(s: &str) -> Result<Key, KeyParseError> {
	s.parse()
}
