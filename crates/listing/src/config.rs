//! TOML configuration for listing behavior and key bindings.
//!
//! ```toml
//! [listing]
//! page-size = 8
//! height = 10
//!
//! [lastcmd]
//! start-key = "alt-1"
//! fast-path-key = "alt-1"
//!
//! [keys.lastcmd]
//! "ctrl-n" = "listing:down"
//! "tab" = "none"
//! ```
//!
//! Binding overrides map a key (or `default`) to an action name; the action
//! `none` removes the binding.

use std::collections::BTreeMap;
use std::path::Path;

use recall_keymap::{KeyPattern, Keymap};
use recall_primitives::{Key, Mode};
use serde::Deserialize;
use tracing::debug;

use crate::actions::{Action, ActionId};
use crate::engine::DEFAULT_PAGE_SIZE;
use crate::error::ConfigError;

#[cfg(test)]
mod tests;

/// Action name that removes a binding.
pub const UNBIND: &str = "none";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct Config {
	pub listing: ListingConfig,
	pub lastcmd: LastcmdConfig,
	/// Mode name to key-to-action overrides.
	pub keys: BTreeMap<String, BTreeMap<String, String>>,
}

/// Settings shared by listing modes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ListingConfig {
	/// Rows moved by page-up and page-down.
	pub page_size: usize,
	/// Rows in a rendered view.
	pub height: usize,
}

impl Default for ListingConfig {
	fn default() -> Self {
		Self {
			page_size: DEFAULT_PAGE_SIZE,
			height: 10,
		}
	}
}

/// Settings of the last-command picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct LastcmdConfig {
	/// Insertion-mode key that opens the picker.
	pub start_key: Key,
	/// Picker key that inserts the whole line.
	pub fast_path_key: Key,
}

impl Default for LastcmdConfig {
	fn default() -> Self {
		Self {
			start_key: Key::alt('1'),
			fast_path_key: Key::alt('1'),
		}
	}
}

impl Config {
	pub fn from_toml(input: &str) -> Result<Self, ConfigError> {
		Ok(toml::from_str(input)?)
	}

	pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let config = Self::from_toml(&content)?;
		debug!(path = %path.display(), "config loaded");
		Ok(config)
	}

	/// Applies the `[keys.*]` tables on top of `keymap`.
	pub fn apply_key_overrides(&self, keymap: &mut Keymap<Action>) -> Result<(), ConfigError> {
		for (mode_name, bindings) in &self.keys {
			let mode: Mode = mode_name
				.parse()
				.map_err(|_| ConfigError::UnknownMode(mode_name.clone()))?;
			for (key, action) in bindings {
				let pattern: KeyPattern = key.parse().map_err(|source| ConfigError::InvalidKey {
					key: key.clone(),
					source,
				})?;
				if action == UNBIND {
					keymap.unbind(mode, pattern);
					debug!(%mode, %pattern, "binding removed");
					continue;
				}
				let id: ActionId = action
					.parse()
					.map_err(|_| ConfigError::UnknownAction(action.clone()))?;
				keymap.bind(mode, pattern, id.into());
				debug!(%mode, %pattern, action = %id, "binding overridden");
			}
		}
		Ok(())
	}
}
