//! Minimal styled text used for listing rows.

use std::fmt;

use bitflags::bitflags;


bitflags! {
	/// Text attributes.
	#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
	pub struct Modifier: u8 {
		const BOLD = 1;
		const DIM = 1 << 1;
		const ITALIC = 1 << 2;
		const UNDERLINED = 1 << 3;
		const REVERSED = 1 << 4;
	}
}

/// Attributes a frontend applies to a run of text. Colors are left to the frontend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Style {
	pub add_modifier: Modifier,
}

impl Style {
	/// An empty style that changes nothing.
	pub const fn new() -> Self {
		Self {
			add_modifier: Modifier::empty(),
		}
	}

	/// Adds text attributes.
	pub fn add_modifier(self, modifier: Modifier) -> Self {
		Self {
			add_modifier: self.add_modifier | modifier,
		}
	}

	/// Layers `other` over `self`; attributes accumulate.
	pub fn patch(self, other: Style) -> Self {
		self.add_modifier(other.add_modifier)
	}

	/// Returns true if the style carries any attribute in `modifier`.
	pub fn has(&self, modifier: Modifier) -> bool {
		self.add_modifier.intersects(modifier)
	}
}

/// A run of text with a single style.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Styled {
	pub text: String,
	pub style: Style,
}

impl Styled {
	/// Text with the default style.
	pub fn unstyled(text: impl Into<String>) -> Self {
		Self {
			text: text.into(),
			style: Style::new(),
		}
	}

	/// Returns a copy with `style` layered over the current one.
	pub fn patch_style(mut self, style: Style) -> Self {
		self.style = self.style.patch(style);
		self
	}

	pub fn as_str(&self) -> &str {
		&self.text
	}
}

impl From<&str> for Styled {
	fn from(text: &str) -> Self {
		Self::unstyled(text)
	}
}

impl From<String> for Styled {
	fn from(text: String) -> Self {
		Self::unstyled(text)
	}
}

impl fmt::Display for Styled {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.text)
	}
}
