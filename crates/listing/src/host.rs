//! Host editor capability and a line-buffer implementation of it.

use recall_primitives::Mode;
use strum::{Display, IntoStaticStr};

/// Severity of a host notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Level {
	#[default]
	Info,
	Warn,
	Error,
}

/// Editor operations the listing core calls.
///
/// The core never renders or touches the terminal; everything it does to the
/// edited line goes through this trait.
pub trait Host {
	/// Inserts `text` at the dot and moves the dot past it.
	fn insert_at_cursor(&mut self, text: &str);

	/// Shows a message to the user.
	fn notify(&mut self, level: Level, message: String);

	/// Records that the active mode changed.
	fn set_mode(&mut self, mode: Mode);
}

/// A message delivered through [`Host::notify`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
	pub level: Level,
	pub message: String,
}

/// Single-line edit buffer with a dot, used by the harness and in tests.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
	text: String,
	/// Dot position in chars.
	dot: usize,
	mode: Mode,
	notifications: Vec<Notification>,
}

impl LineBuffer {
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a buffer holding `text` with the dot at the end.
	pub fn with_text(text: impl Into<String>) -> Self {
		let text = text.into();
		let dot = text.chars().count();
		Self {
			text,
			dot,
			..Self::default()
		}
	}

	pub fn text(&self) -> &str {
		&self.text
	}

	pub fn dot(&self) -> usize {
		self.dot
	}

	/// Moves the dot, clamped to the end of the line.
	pub fn set_dot(&mut self, dot: usize) {
		self.dot = dot.min(self.text.chars().count());
	}

	/// The mode last reported through [`Host::set_mode`].
	pub fn mode(&self) -> Mode {
		self.mode
	}

	pub fn notifications(&self) -> &[Notification] {
		&self.notifications
	}

	pub fn take_notifications(&mut self) -> Vec<Notification> {
		std::mem::take(&mut self.notifications)
	}

	/// Deletes the char before the dot. Returns false at the start of the line.
	pub fn delete_before_dot(&mut self) -> bool {
		if self.dot == 0 {
			return false;
		}
		let start = self.byte_offset(self.dot - 1);
		let end = self.byte_offset(self.dot);
		self.text.replace_range(start..end, "");
		self.dot -= 1;
		true
	}

	fn byte_offset(&self, char_idx: usize) -> usize {
		self.text
			.char_indices()
			.nth(char_idx)
			.map_or(self.text.len(), |(offset, _)| offset)
	}
}

impl Host for LineBuffer {
	fn insert_at_cursor(&mut self, text: &str) {
		let offset = self.byte_offset(self.dot);
		self.text.insert_str(offset, text);
		self.dot += text.chars().count();
	}

	fn notify(&mut self, level: Level, message: String) {
		self.notifications.push(Notification { level, message });
	}

	fn set_mode(&mut self, mode: Mode) {
		self.mode = mode;
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn insert_at_dot_advances_dot() {
		let mut line = LineBuffer::with_text("vim ");
		line.insert_at_cursor("main.rs");
		assert_eq!(line.text(), "vim main.rs");
		assert_eq!(line.dot(), 11);
	}

	#[test]
	fn insert_in_the_middle_respects_multibyte_chars() {
		let mut line = LineBuffer::with_text("çd");
		line.set_dot(1);
		line.insert_at_cursor("ab");
		assert_eq!(line.text(), "çabd");
		assert_eq!(line.dot(), 3);
	}

	#[test]
	fn delete_before_dot() {
		let mut line = LineBuffer::with_text("ls ç");
		assert!(line.delete_before_dot());
		assert_eq!(line.text(), "ls ");
		line.set_dot(0);
		assert!(!line.delete_before_dot());
	}

	#[test]
	fn notifications_are_drained() {
		let mut line = LineBuffer::new();
		line.notify(Level::Error, "history error: no matching command line".to_string());
		assert_eq!(line.notifications().len(), 1);
		let drained = line.take_notifications();
		assert_eq!(drained[0].level, Level::Error);
		assert!(line.notifications().is_empty());
	}
}
