//! Key binding tables for modal input.
//!
//! A [`Keymap`] maps a [`Mode`] plus a [`KeyPattern`] to an action value. Each
//! mode may hold one [`KeyPattern::Default`] binding which receives every key the
//! mode does not bind explicitly. Lookups report which of the two matched so the
//! caller can tell an explicit binding from the fallback.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use recall_primitives::{Key, KeyParseError, Mode};


/// Left-hand side of a binding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyPattern {
	/// One specific key.
	Key(Key),
	/// Any key without an explicit binding in the mode.
	Default,
}

impl From<Key> for KeyPattern {
	fn from(key: Key) -> Self {
		Self::Key(key)
	}
}

impl FromStr for KeyPattern {
	type Err = KeyParseError;

	/// Parses `"default"` (any case) or key notation.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.eq_ignore_ascii_case("default") {
			return Ok(Self::Default);
		}
		s.parse().map(Self::Key)
	}
}

impl fmt::Display for KeyPattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Key(key) => key.fmt(f),
			Self::Default => f.write_str("default"),
		}
	}
}

/// Result of resolving a key in a mode.
#[derive(Debug, PartialEq, Eq)]
pub enum LookupOutcome<'a, A> {
	/// The key has an explicit binding.
	Match(&'a A),
	/// The key fell through to the mode's default binding.
	Default(&'a A),
	/// Nothing handles the key in this mode.
	None,
}

impl<'a, A> LookupOutcome<'a, A> {
	/// Returns the bound action, explicit or default.
	pub fn action(&self) -> Option<&'a A> {
		match *self {
			Self::Match(action) | Self::Default(action) => Some(action),
			Self::None => None,
		}
	}
}

/// Bindings of a single mode.
#[derive(Debug, Clone)]
pub struct ModeBindings<A> {
	keys: HashMap<Key, A>,
	default: Option<A>,
}

impl<A> Default for ModeBindings<A> {
	fn default() -> Self {
		Self {
			keys: HashMap::new(),
			default: None,
		}
	}
}

impl<A> ModeBindings<A> {
	fn slot(&mut self, pattern: KeyPattern) -> SlotMut<'_, A> {
		match pattern {
			KeyPattern::Key(key) => SlotMut::Key(&mut self.keys, key),
			KeyPattern::Default => SlotMut::Default(&mut self.default),
		}
	}

	/// Number of bindings, counting the default binding.
	pub fn len(&self) -> usize {
		self.keys.len() + usize::from(self.default.is_some())
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Iterates explicit bindings followed by the default binding.
	pub fn iter(&self) -> impl Iterator<Item = (KeyPattern, &A)> {
		self.keys
			.iter()
			.map(|(key, action)| (KeyPattern::Key(*key), action))
			.chain(self.default.iter().map(|action| (KeyPattern::Default, action)))
	}
}

enum SlotMut<'a, A> {
	Key(&'a mut HashMap<Key, A>, Key),
	Default(&'a mut Option<A>),
}

/// Binding table for every mode.
#[derive(Debug, Clone)]
pub struct Keymap<A> {
	modes: HashMap<Mode, ModeBindings<A>>,
}

impl<A> Default for Keymap<A> {
	fn default() -> Self {
		Self::new()
	}
}

impl<A> Keymap<A> {
	/// Creates an empty keymap.
	pub fn new() -> Self {
		Self { modes: HashMap::new() }
	}

	/// Binds `pattern` in `mode`, returning the action it replaced.
	pub fn bind(&mut self, mode: Mode, pattern: impl Into<KeyPattern>, action: A) -> Option<A> {
		match self.modes.entry(mode).or_default().slot(pattern.into()) {
			SlotMut::Key(keys, key) => keys.insert(key, action),
			SlotMut::Default(slot) => slot.replace(action),
		}
	}

	/// Removes a binding, returning the action it held.
	pub fn unbind(&mut self, mode: Mode, pattern: impl Into<KeyPattern>) -> Option<A> {
		let bindings = self.modes.get_mut(&mode)?;
		match bindings.slot(pattern.into()) {
			SlotMut::Key(keys, key) => keys.remove(&key),
			SlotMut::Default(slot) => slot.take(),
		}
	}

	/// Resolves `key` in `mode`: explicit bindings first, then the default binding.
	pub fn lookup(&self, mode: Mode, key: Key) -> LookupOutcome<'_, A> {
		let Some(bindings) = self.modes.get(&mode) else {
			return LookupOutcome::None;
		};
		if let Some(action) = bindings.keys.get(&key) {
			return LookupOutcome::Match(action);
		}
		match &bindings.default {
			Some(action) => LookupOutcome::Default(action),
			None => LookupOutcome::None,
		}
	}

	/// Returns the bindings of `mode`, if any were registered.
	pub fn mode(&self, mode: Mode) -> Option<&ModeBindings<A>> {
		self.modes.get(&mode)
	}

	/// Returns true if `mode` has at least one binding.
	pub fn has_mode(&self, mode: Mode) -> bool {
		self.modes.get(&mode).is_some_and(|bindings| !bindings.is_empty())
	}
}
