//! Error types for history access, mode startup and configuration.

use std::path::PathBuf;

use recall_primitives::KeyParseError;
use thiserror::Error;

/// Errors reported by a [`HistoryStore`](crate::HistoryStore).
#[derive(Debug, Error)]
pub enum HistoryError {
	/// No stored command line satisfies the query.
	#[error("no matching command line")]
	NoMatch,

	/// The store could not be reached.
	#[error("history store unavailable: {0}")]
	Unavailable(String),

	/// Error reading a history file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},
}

/// Errors that prevent a listing mode from starting.
#[derive(Debug, Error)]
pub enum StartError {
	/// Fetching the previous command failed.
	#[error("history error: {0}")]
	HistoryFetchFailed(#[source] HistoryError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax or shape.
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		#[source]
		error: std::io::Error,
	},

	/// A key binding used invalid key notation.
	#[error("invalid key {key:?}: {source}")]
	InvalidKey {
		key: String,
		#[source]
		source: KeyParseError,
	},

	/// A binding table named a mode that does not exist.
	#[error("unknown mode: {0}")]
	UnknownMode(String),

	/// A binding named an action that does not exist.
	#[error("unknown action: {0}")]
	UnknownAction(String),
}
