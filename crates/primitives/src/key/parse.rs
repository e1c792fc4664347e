//! Key notation parsing.
//!
//! ```text
//! key       = (modifier "-")* code
//! modifier  = "ctrl" | "c" | "alt" | "a" | "meta" | "m" | "shift" | "s"
//! code      = named | fn-key | char
//! fn-key    = "f" digit digit?
//! ```
//!
//! Modifier and key names are case-insensitive; a single character is taken
//! literally, so `"A"` is an uppercase `A` while `"A-x"` is Alt+x.

use std::str::FromStr;

use thiserror::Error;

use super::{Key, KeyCode, Modifiers};

/// Errors produced when parsing key notation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyParseError {
	/// The notation was an empty string.
	#[error("empty key notation")]
	Empty,

	/// The key part named no known key and was not a single character.
	#[error("unknown key `{0}`")]
	UnknownKey(String),

	/// The same modifier appeared twice.
	#[error("duplicate modifier `{0}`")]
	DuplicateModifier(String),
}

#[derive(Clone, Copy)]
enum Modifier {
	Ctrl,
	Alt,
	Shift,
}

fn modifier(name: &str) -> Option<Modifier> {
	match name.to_ascii_lowercase().as_str() {
		"ctrl" | "control" | "c" => Some(Modifier::Ctrl),
		"alt" | "meta" | "a" | "m" => Some(Modifier::Alt),
		"shift" | "s" => Some(Modifier::Shift),
		_ => None,
	}
}

fn code(name: &str) -> Option<KeyCode> {
	let mut chars = name.chars();
	if let (Some(c), None) = (chars.next(), chars.next()) {
		return Some(KeyCode::Char(c));
	}

	let lower = name.to_ascii_lowercase();
	let code = match lower.as_str() {
		"backspace" | "bs" => KeyCode::Backspace,
		"enter" | "ret" | "return" => KeyCode::Enter,
		"esc" | "escape" => KeyCode::Esc,
		"tab" => KeyCode::Tab,
		"backtab" => KeyCode::BackTab,
		"space" | "spc" => KeyCode::Char(' '),
		"up" => KeyCode::Up,
		"down" => KeyCode::Down,
		"left" => KeyCode::Left,
		"right" => KeyCode::Right,
		"home" => KeyCode::Home,
		"end" => KeyCode::End,
		"pageup" | "pgup" => KeyCode::PageUp,
		"pagedown" | "pgdn" => KeyCode::PageDown,
		"del" | "delete" => KeyCode::Delete,
		"ins" | "insert" => KeyCode::Insert,
		other => {
			let n: u8 = other.strip_prefix('f')?.parse().ok()?;
			if !(1..=24).contains(&n) {
				return None;
			}
			KeyCode::F(n)
		}
	};
	Some(code)
}

impl FromStr for Key {
	type Err = KeyParseError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(KeyParseError::Empty);
		}

		let mut modifiers = Modifiers::NONE;
		let mut rest = s;
		while let Some((head, tail)) = rest.split_once('-')
			&& !tail.is_empty()
			&& let Some(m) = modifier(head)
		{
			let flag = match m {
				Modifier::Ctrl => &mut modifiers.ctrl,
				Modifier::Alt => &mut modifiers.alt,
				Modifier::Shift => &mut modifiers.shift,
			};
			if *flag {
				return Err(KeyParseError::DuplicateModifier(head.to_string()));
			}
			*flag = true;
			rest = tail;
		}

		let code = code(rest).ok_or_else(|| KeyParseError::UnknownKey(rest.to_string()))?;
		Ok(Key { code, modifiers })
	}
}
