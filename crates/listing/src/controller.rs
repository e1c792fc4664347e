//! Mode controller: routes keys through the keymap and owns the active listing.

use recall_keymap::Keymap;
use recall_primitives::{Key, Mode};
use tracing::{debug, trace};

use crate::actions::Action;
use crate::config::Config;
use crate::dispatch::{Dispatch, KeyOutcome};
use crate::engine::{Listing, ListingView};
use crate::history::HistoryStore;
use crate::host::Host;
use crate::provider::ListingProvider;
use crate::words::{ShellWords, WordSplitter};


/// Values copied out of [`Config`] at construction.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Settings {
	pub fast_path_key: Key,
	pub page_size: usize,
	pub height: usize,
}

enum State {
	Inactive,
	Active {
		mode: Mode,
		listing: Listing<Box<dyn ListingProvider>>,
	},
}

/// Keystroke state machine over insertion mode and the listing modes.
///
/// While inactive, keys resolve in [`Mode::Insert`]. A listing mode is entered
/// by an action (`lastcmd:start`) and left on accept, on close, or when its
/// action reports a key as not handled; that key is then replayed once in
/// insertion mode.
pub struct ModeController {
	keymap: Keymap<Action>,
	history: Box<dyn HistoryStore>,
	splitter: Box<dyn WordSplitter>,
	settings: Settings,
	state: State,
}

impl ModeController {
	pub fn new(keymap: Keymap<Action>, history: impl HistoryStore + 'static, config: &Config) -> Self {
		Self {
			keymap,
			history: Box::new(history),
			splitter: Box::new(ShellWords),
			settings: Settings {
				fast_path_key: config.lastcmd.fast_path_key,
				page_size: config.listing.page_size,
				height: config.listing.height,
			},
			state: State::Inactive,
		}
	}

	/// Replaces the word splitter used for new listings.
	pub fn with_splitter(mut self, splitter: impl WordSplitter + 'static) -> Self {
		self.splitter = Box::new(splitter);
		self
	}

	/// The mode keys currently resolve in.
	pub fn mode(&self) -> Mode {
		match &self.state {
			State::Inactive => Mode::Insert,
			State::Active { mode, .. } => *mode,
		}
	}

	pub fn is_active(&self) -> bool {
		matches!(self.state, State::Active { .. })
	}

	pub fn listing(&self) -> Option<&Listing<Box<dyn ListingProvider>>> {
		match &self.state {
			State::Active { listing, .. } => Some(listing),
			State::Inactive => None,
		}
	}

	pub(crate) fn listing_mut(&mut self) -> Option<&mut Listing<Box<dyn ListingProvider>>> {
		match &mut self.state {
			State::Active { listing, .. } => Some(listing),
			State::Inactive => None,
		}
	}

	pub(crate) fn settings(&self) -> Settings {
		self.settings
	}

	pub(crate) fn history(&self) -> &dyn HistoryStore {
		self.history.as_ref()
	}

	pub(crate) fn splitter(&self) -> &dyn WordSplitter {
		self.splitter.as_ref()
	}

	pub fn keymap(&self) -> &Keymap<Action> {
		&self.keymap
	}

	/// Renders the active listing at the configured height.
	pub fn view(&self) -> Option<ListingView> {
		self.view_with_height(self.settings.height)
	}

	pub fn view_with_height(&self, height: usize) -> Option<ListingView> {
		self.listing().map(|listing| listing.view(height))
	}

	/// Processes one key to completion.
	pub fn handle_key(&mut self, key: Key, host: &mut dyn Host) -> KeyOutcome {
		match self.dispatch(key, host) {
			Dispatch::Handled => KeyOutcome::Consumed,
			Dispatch::HandledAndAccept => {
				self.close(host);
				KeyOutcome::Consumed
			}
			Dispatch::NotHandled(key) if self.is_active() => {
				debug!(%key, mode = %self.mode(), "listing passes key to insert mode");
				self.close(host);
				match self.dispatch(key, host) {
					Dispatch::Handled => KeyOutcome::Consumed,
					Dispatch::HandledAndAccept => {
						self.close(host);
						KeyOutcome::Consumed
					}
					Dispatch::NotHandled(key) => KeyOutcome::Unhandled(key),
				}
			}
			Dispatch::NotHandled(key) => KeyOutcome::Unhandled(key),
		}
	}

	fn dispatch(&mut self, key: Key, host: &mut dyn Host) -> Dispatch {
		let mode = self.mode();
		let Some(action) = self.keymap.lookup(mode, key).action().copied() else {
			trace!(%key, %mode, "unbound key");
			return Dispatch::NotHandled(key);
		};
		let result = (action.run)(self, host, key);
		trace!(%key, %mode, action = %action.id, ?result, "key dispatched");
		result
	}

	/// Enters `mode` with a fresh listing over `provider`, replacing any active one.
	pub fn open(&mut self, mode: Mode, provider: Box<dyn ListingProvider>, host: &mut dyn Host) {
		let listing = Listing::new(provider).with_page_size(self.settings.page_size);
		debug!(%mode, entries = listing.len(), "listing opened");
		self.state = State::Active { mode, listing };
		host.set_mode(mode);
	}

	/// Leaves the active listing mode, if any, and returns to insertion mode.
	pub fn close(&mut self, host: &mut dyn Host) {
		if let State::Active { mode, .. } = std::mem::replace(&mut self.state, State::Inactive) {
			debug!(%mode, "listing closed");
			host.set_mode(Mode::Insert);
		}
	}
}
