//! Key representation for mode bindings.
//!
//! A [`Key`] is a [`KeyCode`] plus [`Modifiers`]. Keys parse from the notation used in
//! configuration files (`"alt-1"`, `"ctrl-["`, `"s-tab"`, `"pagedown"`) and display in
//! the compact form `A-1`, `C-[`, `S-tab`.

use std::fmt;

use serde::Deserialize;

mod parse;
#[cfg(test)]
mod tests;

pub use parse::KeyParseError;

/// Ctrl, Alt and Shift state of a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers {
	pub ctrl: bool,
	/// Alt or Meta.
	pub alt: bool,
	pub shift: bool,
}

impl Modifiers {
	pub const NONE: Self = Self {
		ctrl: false,
		alt: false,
		shift: false,
	};
	pub const CTRL: Self = Self { ctrl: true, ..Self::NONE };
	pub const ALT: Self = Self { alt: true, ..Self::NONE };

	pub fn is_empty(self) -> bool {
		self == Self::NONE
	}
}

/// Key identifier without modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
	/// A character key. Space is `Char(' ')`.
	Char(char),
	Backspace,
	Enter,
	Esc,
	Tab,
	BackTab,
	Up,
	Down,
	Left,
	Right,
	Home,
	End,
	PageUp,
	PageDown,
	Delete,
	Insert,
	/// Function key `F1` to `F24`.
	F(u8),
}

impl fmt::Display for KeyCode {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let name = match self {
			KeyCode::Char(' ') => "space",
			KeyCode::Char(c) => return write!(f, "{c}"),
			KeyCode::F(n) => return write!(f, "f{n}"),
			KeyCode::Backspace => "backspace",
			KeyCode::Enter => "enter",
			KeyCode::Esc => "esc",
			KeyCode::Tab => "tab",
			KeyCode::BackTab => "backtab",
			KeyCode::Up => "up",
			KeyCode::Down => "down",
			KeyCode::Left => "left",
			KeyCode::Right => "right",
			KeyCode::Home => "home",
			KeyCode::End => "end",
			KeyCode::PageUp => "pageup",
			KeyCode::PageDown => "pagedown",
			KeyCode::Delete => "del",
			KeyCode::Insert => "ins",
		};
		f.write_str(name)
	}
}

/// A key with optional modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub struct Key {
	pub code: KeyCode,
	pub modifiers: Modifiers,
}

impl Key {
	/// Create a key from a character with no modifiers.
	pub const fn char(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key from a key code with no modifiers.
	pub const fn new(code: KeyCode) -> Self {
		Self {
			code,
			modifiers: Modifiers::NONE,
		}
	}

	/// Create a key with Ctrl modifier.
	pub const fn ctrl(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::CTRL,
		}
	}

	/// Create a key with Alt modifier.
	pub const fn alt(c: char) -> Self {
		Self {
			code: KeyCode::Char(c),
			modifiers: Modifiers::ALT,
		}
	}

	/// Add Shift modifier.
	pub const fn with_shift(self) -> Self {
		Self {
			modifiers: Modifiers {
				shift: true,
				..self.modifiers
			},
			..self
		}
	}

	/// Returns the character a text field would receive for this key.
	///
	/// Shift is allowed (it only changes case); Ctrl, Alt and control
	/// characters never produce text.
	pub fn printable(&self) -> Option<char> {
		match self.code {
			KeyCode::Char(c) if !self.modifiers.ctrl && !self.modifiers.alt && !c.is_control() => Some(c),
			_ => None,
		}
	}

	/// Check if this key is backspace.
	pub fn is_backspace(&self) -> bool {
		matches!(self.code, KeyCode::Backspace) && self.modifiers.is_empty()
	}
}

impl TryFrom<String> for Key {
	type Error = KeyParseError;

	fn try_from(value: String) -> Result<Self, Self::Error> {
		value.parse()
	}
}

impl fmt::Display for Key {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.modifiers.ctrl {
			write!(f, "C-")?;
		}
		if self.modifiers.alt {
			write!(f, "A-")?;
		}
		if self.modifiers.shift {
			write!(f, "S-")?;
		}
		write!(f, "{}", self.code)
	}
}
