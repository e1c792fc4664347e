//! Named actions and the binding tables built from them.

use std::fmt;

use recall_keymap::{KeyPattern, Keymap};
use recall_primitives::{Key, KeyCode, Mode};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::config::Config;
use crate::controller::ModeController;
use crate::dispatch::Dispatch;
use crate::engine::Listing;
use crate::error::ConfigError;
use crate::host::Host;
use crate::lastcmd;
use crate::provider::ListingProvider;


/// Handler run for a bound key. Receives the key that triggered it.
pub type ActionFn = fn(&mut ModeController, &mut dyn Host, Key) -> Dispatch;

/// Every action a key can be bound to, by stable name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
pub enum ActionId {
	#[strum(serialize = "insert:default")]
	InsertDefault,
	#[strum(serialize = "listing:up")]
	ListingUp,
	#[strum(serialize = "listing:down")]
	ListingDown,
	#[strum(serialize = "listing:up-cycle")]
	ListingUpCycle,
	#[strum(serialize = "listing:down-cycle")]
	ListingDownCycle,
	#[strum(serialize = "listing:page-up")]
	ListingPageUp,
	#[strum(serialize = "listing:page-down")]
	ListingPageDown,
	#[strum(serialize = "listing:accept-close")]
	ListingAcceptClose,
	#[strum(serialize = "listing:close")]
	ListingClose,
	#[strum(serialize = "listing:default")]
	ListingDefault,
	#[strum(serialize = "lastcmd:start")]
	LastcmdStart,
	#[strum(serialize = "lastcmd:alt-default")]
	LastcmdAltDefault,
}

impl ActionId {
	/// Handler this action runs.
	pub fn handler(self) -> ActionFn {
		match self {
			Self::InsertDefault => insert_default,
			Self::ListingUp => up,
			Self::ListingDown => down,
			Self::ListingUpCycle => up_cycle,
			Self::ListingDownCycle => down_cycle,
			Self::ListingPageUp => page_up,
			Self::ListingPageDown => page_down,
			Self::ListingAcceptClose => accept_close,
			Self::ListingClose => close,
			Self::ListingDefault => listing_default,
			Self::LastcmdStart => lastcmd::start,
			Self::LastcmdAltDefault => lastcmd::alt_default,
		}
	}
}

/// An [`ActionId`] resolved to its handler.
#[derive(Clone, Copy)]
pub struct Action {
	pub id: ActionId,
	pub run: ActionFn,
}

impl Action {
	pub fn new(id: ActionId) -> Self {
		Self { id, run: id.handler() }
	}
}

impl PartialEq for Action {
	fn eq(&self, other: &Self) -> bool {
		self.id == other.id
	}
}

impl Eq for Action {}

impl fmt::Debug for Action {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Action").field(&self.id).finish()
	}
}

impl From<ActionId> for Action {
	fn from(id: ActionId) -> Self {
		Self::new(id)
	}
}

fn on_listing(controller: &mut ModeController, f: impl FnOnce(&mut Listing<Box<dyn ListingProvider>>)) -> Dispatch {
	if let Some(listing) = controller.listing_mut() {
		f(listing);
	}
	Dispatch::Handled
}

fn up(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, |listing| listing.up(false))
}

fn down(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, |listing| listing.down(false))
}

fn up_cycle(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, |listing| listing.up(true))
}

fn down_cycle(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, |listing| listing.down(true))
}

fn page_up(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, Listing::page_up)
}

fn page_down(controller: &mut ModeController, _host: &mut dyn Host, _key: Key) -> Dispatch {
	on_listing(controller, Listing::page_down)
}

fn insert_default(_: &mut ModeController, host: &mut dyn Host, key: Key) -> Dispatch {
	match key.printable() {
		Some(c) => {
			let mut buf = [0; 4];
			host.insert_at_cursor(c.encode_utf8(&mut buf));
			Dispatch::Handled
		}
		None => Dispatch::NotHandled(key),
	}
}

fn accept_close(controller: &mut ModeController, host: &mut dyn Host, _key: Key) -> Dispatch {
	match controller.listing_mut() {
		Some(listing) => listing.accept(host),
		None => Dispatch::Handled,
	}
}

fn close(controller: &mut ModeController, host: &mut dyn Host, _key: Key) -> Dispatch {
	controller.close(host);
	Dispatch::Handled
}

fn listing_default(controller: &mut ModeController, _host: &mut dyn Host, key: Key) -> Dispatch {
	if let Some(listing) = controller.listing_mut()
		&& listing.handle_filter_key(key)
	{
		Dispatch::Handled
	} else {
		Dispatch::NotHandled(key)
	}
}

/// Self-insert for insertion mode.
pub fn register_insert_bindings(keymap: &mut Keymap<Action>) {
	keymap.bind(Mode::Insert, KeyPattern::Default, ActionId::InsertDefault.into());
}

/// Navigation, accept and close keys shared by every listing mode.
pub fn register_listing_bindings(keymap: &mut Keymap<Action>, mode: Mode) {
	let bindings = [
		(Key::new(KeyCode::Up), ActionId::ListingUp),
		(Key::new(KeyCode::Down), ActionId::ListingDown),
		(Key::new(KeyCode::Tab), ActionId::ListingDownCycle),
		(Key::new(KeyCode::BackTab), ActionId::ListingUpCycle),
		(Key::new(KeyCode::Tab).with_shift(), ActionId::ListingUpCycle),
		(Key::new(KeyCode::PageUp), ActionId::ListingPageUp),
		(Key::new(KeyCode::PageDown), ActionId::ListingPageDown),
		(Key::new(KeyCode::Enter), ActionId::ListingAcceptClose),
		(Key::new(KeyCode::Esc), ActionId::ListingClose),
		(Key::ctrl('['), ActionId::ListingClose),
	];
	for (key, id) in bindings {
		keymap.bind(mode, key, id.into());
	}
	keymap.bind(mode, KeyPattern::Default, ActionId::ListingDefault.into());
}

/// Builds the complete binding table: insertion mode, the lastcmd listing,
/// then the overrides from `config`.
pub fn init_keymap(config: &Config) -> Result<Keymap<Action>, ConfigError> {
	let mut keymap = Keymap::new();
	register_insert_bindings(&mut keymap);
	register_listing_bindings(&mut keymap, Mode::Lastcmd);
	lastcmd::register(&mut keymap, &config.lastcmd);
	config.apply_key_overrides(&mut keymap)?;
	Ok(keymap)
}
