//! Listing selector embedded in a line editor.
//!
//! * [`ListingProvider`]: capability a concrete picker implements
//! * [`Listing`]: generic engine owning filter text, selection and the provider
//! * [`LastcmdProvider`]: picks a word (or the whole line) of the previous command
//! * [`ModeController`]: resolves keys through the [`Keymap`] and drives mode changes
//!
//! The host editor plugs in through [`Host`], the history daemon through
//! [`HistoryStore`], and word splitting through [`WordSplitter`].
//!
//! [`Keymap`]: recall_keymap::Keymap

pub mod actions;
pub mod config;
pub mod controller;
pub mod dispatch;
pub mod engine;
pub mod error;
pub mod history;
pub mod host;
pub mod lastcmd;
pub mod provider;
pub mod words;

pub use actions::{Action, ActionId, init_keymap};
pub use config::Config;
pub use controller::ModeController;
pub use dispatch::{Dispatch, KeyOutcome};
pub use engine::{Listing, ListingRow, ListingView, ModeLine};
pub use error::{ConfigError, HistoryError, StartError};
pub use history::{HistoryEntry, HistoryStore, MemoryHistory};
pub use host::{Host, Level, LineBuffer, Notification};
pub use lastcmd::{EntryIndex, LastcmdEntry, LastcmdProvider};
pub use provider::{ListingProvider, Rendered};
pub use words::{ShellWords, WordSplitter};
