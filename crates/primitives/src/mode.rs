//! Editor modes known to the listing controller.

use strum::{Display, EnumString, IntoStaticStr};

/// A named keystroke-handling state. Exactly one mode is active at a time.
///
/// Names parse and display in kebab-case (`"insert"`, `"lastcmd"`), which is
/// how configuration files refer to modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, IntoStaticStr)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Mode {
	/// The host's text insertion mode.
	#[default]
	Insert,
	/// Last-command word picker.
	Lastcmd,
}

impl Mode {
	/// Returns a short display label for a status line.
	pub fn label(self) -> &'static str {
		match self {
			Mode::Insert => "INSERT",
			Mode::Lastcmd => "LASTCMD",
		}
	}
}
