//! Last-command word picker.
//!
//! Lists the words of the previous command line plus the whole line itself. The
//! filter is a word index typed as digits: `2` picks the third word, and a
//! leading `-` counts from the end (`-1` is the last word). Typing narrows the
//! list by prefix of the index, and as soon as one candidate remains it is
//! inserted.

use recall_keymap::{KeyPattern, Keymap};
use recall_primitives::{Key, Mode, Styled};
use tracing::{debug, trace, warn};

use crate::actions::{Action, ActionId};
use crate::config::LastcmdConfig;
use crate::controller::ModeController;
use crate::dispatch::Dispatch;
use crate::error::StartError;
use crate::host::{Host, Level};
use crate::provider::{ListingProvider, Rendered};
use crate::words::WordSplitter;


/// Mode line title of the picker.
pub const LASTCMD_TITLE: &str = " LASTCMD ";

/// Label of the whole-line entry, named after the key that accepts it.
pub const WHOLE_LINE_LABEL: &str = "M-1";

/// Position of a candidate in the source line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryIndex {
	/// The entire command line.
	WholeLine,
	/// Zero-based word position.
	Word(usize),
}

impl EntryIndex {
	/// Index in the numbering where `-1` stands for the whole line.
	pub fn original_index(self) -> i64 {
		match self {
			Self::WholeLine => -1,
			Self::Word(i) => i as i64,
		}
	}
}

/// One candidate: a word of the previous command, or the whole command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LastcmdEntry {
	pub index: EntryIndex,
	pub text: String,
}

/// [`ListingProvider`] over the words of one command line.
#[derive(Debug, Clone)]
pub struct LastcmdProvider {
	line: String,
	words: Vec<String>,
	filtered: Vec<LastcmdEntry>,
	/// Set when the filter starts with `-`; word indices then count from the end.
	sign_mode: bool,
}

impl LastcmdProvider {
	/// Splits `line` once with `splitter`. No filter is applied yet.
	pub fn new(line: impl Into<String>, splitter: &dyn WordSplitter) -> Self {
		let line = line.into();
		let words = splitter.split(&line);
		Self {
			line,
			words,
			filtered: Vec::new(),
			sign_mode: false,
		}
	}

	pub fn line(&self) -> &str {
		&self.line
	}

	pub fn words(&self) -> &[String] {
		&self.words
	}

	/// Entries matching the last applied filter.
	pub fn entries(&self) -> &[LastcmdEntry] {
		&self.filtered
	}

	pub fn sign_mode(&self) -> bool {
		self.sign_mode
	}

	fn display_index(&self, word: usize, sign_mode: bool) -> i64 {
		if sign_mode {
			word as i64 - self.words.len() as i64
		} else {
			word as i64
		}
	}

	/// Label column text for `entry` under the current sign mode.
	pub fn label(&self, entry: &LastcmdEntry) -> String {
		match entry.index {
			EntryIndex::WholeLine => WHOLE_LINE_LABEL.to_string(),
			EntryIndex::Word(i) => self.display_index(i, self.sign_mode).to_string(),
		}
	}
}

impl ListingProvider for LastcmdProvider {
	fn mode_title(&self) -> &str {
		LASTCMD_TITLE
	}

	fn len(&self) -> usize {
		self.filtered.len()
	}

	fn render(&self, index: usize) -> Rendered {
		let entry = &self.filtered[index];
		Rendered {
			label: self.label(entry),
			content: Styled::unstyled(entry.text.as_str()),
		}
	}

	fn apply_filter(&mut self, filter: &str) -> Option<usize> {
		self.filtered.clear();
		self.sign_mode = filter.starts_with('-');

		if filter.is_empty() || filter == "-" {
			self.filtered.push(LastcmdEntry {
				index: EntryIndex::WholeLine,
				text: self.line.clone(),
			});
		} else if filter.parse::<i64>().is_err() {
			trace!(filter, "lastcmd filter is not an index");
			return None;
		}

		let sign_mode = self.sign_mode;
		let matches: Vec<LastcmdEntry> = self
			.words
			.iter()
			.enumerate()
			.filter(|&(i, _)| self.display_index(i, sign_mode).to_string().starts_with(filter))
			.map(|(i, word)| LastcmdEntry {
				index: EntryIndex::Word(i),
				text: word.clone(),
			})
			.collect();
		self.filtered.extend(matches);

		(!self.filtered.is_empty()).then_some(0)
	}

	fn accept(&mut self, index: usize, host: &mut dyn Host) {
		let entry = &self.filtered[index];
		debug!(index = entry.index.original_index(), text = %entry.text, "lastcmd insert");
		host.insert_at_cursor(&entry.text);
	}

	fn accepts_filter_char(&self, c: char) -> bool {
		c.is_ascii_digit() || c == '-'
	}
}

impl ModeController {
	/// Fetches the previous command line and enters the lastcmd listing.
	///
	/// On failure nothing changes and the controller stays in its current mode.
	pub fn start_lastcmd(&mut self, host: &mut dyn Host) -> Result<(), StartError> {
		let entry = self
			.history()
			.prev_cmd(-1, "")
			.map_err(StartError::HistoryFetchFailed)?;
		let provider = LastcmdProvider::new(entry.text, self.splitter());
		debug!(seq = entry.seq, words = provider.words().len(), "lastcmd start");
		self.open(Mode::Lastcmd, Box::new(provider), host);
		Ok(())
	}
}

/// `lastcmd:start`
pub(crate) fn start(controller: &mut ModeController, host: &mut dyn Host, _key: Key) -> Dispatch {
	if let Err(err) = controller.start_lastcmd(host) {
		warn!(error = %err, "lastcmd start failed");
		host.notify(Level::Error, err.to_string());
	}
	Dispatch::Handled
}

/// `lastcmd:alt-default`
pub(crate) fn alt_default(controller: &mut ModeController, host: &mut dyn Host, key: Key) -> Dispatch {
	let fast_path_key = controller.settings().fast_path_key;
	let Some(listing) = controller.listing_mut() else {
		return Dispatch::NotHandled(key);
	};

	if key == fast_path_key {
		return listing.accept_index(0, host);
	}
	if listing.handle_filter_key(key) {
		if listing.len() == 1 {
			return listing.accept(host);
		}
		return Dispatch::Handled;
	}
	Dispatch::NotHandled(key)
}

/// Binds the start key in insertion mode and the lastcmd fallback.
///
/// Expects the generic listing bindings for [`Mode::Lastcmd`] to be registered
/// first; the fallback replaces their `Default`.
pub(crate) fn register(keymap: &mut Keymap<Action>, config: &LastcmdConfig) {
	keymap.bind(Mode::Insert, config.start_key, Action::new(ActionId::LastcmdStart));
	keymap.bind(Mode::Lastcmd, KeyPattern::Default, Action::new(ActionId::LastcmdAltDefault));
}
