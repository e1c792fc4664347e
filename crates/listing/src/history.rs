//! Command history access.

use std::path::Path;

use tracing::debug;

use crate::error::HistoryError;


/// A stored command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
	/// 1-based sequence number in the store.
	pub seq: usize,
	pub text: String,
}

/// Query interface of the command-history service.
pub trait HistoryStore {
	/// Returns the newest command with sequence number below `upto` whose text
	/// starts with `prefix`. A negative `upto` searches from the newest entry.
	fn prev_cmd(&self, upto: i64, prefix: &str) -> Result<HistoryEntry, HistoryError>;
}

impl<S: HistoryStore + ?Sized> HistoryStore for Box<S> {
	fn prev_cmd(&self, upto: i64, prefix: &str) -> Result<HistoryEntry, HistoryError> {
		(**self).prev_cmd(upto, prefix)
	}
}

/// In-memory history, oldest command first.
#[derive(Debug, Clone, Default)]
pub struct MemoryHistory {
	commands: Vec<String>,
}

impl MemoryHistory {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_lines<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self {
			commands: lines.into_iter().map(Into::into).collect(),
		}
	}

	/// Reads a newline-separated history file, skipping blank lines.
	pub fn load(path: impl AsRef<Path>) -> Result<Self, HistoryError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| HistoryError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let history = Self::from_lines(content.lines().filter(|line| !line.trim().is_empty()));
		debug!(path = %path.display(), commands = history.len(), "history loaded");
		Ok(history)
	}

	/// Appends a command as the newest entry.
	pub fn push(&mut self, command: impl Into<String>) {
		self.commands.push(command.into());
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

impl HistoryStore for MemoryHistory {
	fn prev_cmd(&self, upto: i64, prefix: &str) -> Result<HistoryEntry, HistoryError> {
		let end = match usize::try_from(upto) {
			Ok(upto) => upto.saturating_sub(1).min(self.commands.len()),
			Err(_) => self.commands.len(),
		};
		self.commands[..end]
			.iter()
			.enumerate()
			.rev()
			.find(|(_, text)| text.starts_with(prefix))
			.map(|(index, text)| HistoryEntry {
				seq: index + 1,
				text: text.clone(),
			})
			.ok_or(HistoryError::NoMatch)
	}
}
