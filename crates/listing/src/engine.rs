//! Generic listing engine: filter text, selection and the render window.

use recall_primitives::Key;
use tracing::{debug, trace};

use crate::dispatch::Dispatch;
use crate::host::Host;
use crate::provider::ListingProvider;

mod view;
#[cfg(test)]
mod tests;

pub use view::{ListingRow, ListingView, ModeLine, NO_RESULT};

/// Rows moved by [`Listing::page_up`] and [`Listing::page_down`] unless configured.
pub const DEFAULT_PAGE_SIZE: usize = 8;

/// Selection state over a [`ListingProvider`].
///
/// The engine is policy-free about keys except for filter editing: it appends
/// characters the provider accepts and handles Backspace. Everything else is
/// decided by the bound actions.
///
/// Invariant: `selected` is `None` or a valid index into the provider's
/// filtered entries, and the provider has always applied the current `filter`.
#[derive(Debug)]
pub struct Listing<P> {
	provider: P,
	filter: String,
	selected: Option<usize>,
	page_size: usize,
}

impl<P: ListingProvider> Listing<P> {
	/// Wraps `provider` and applies the empty filter.
	pub fn new(provider: P) -> Self {
		let mut listing = Self {
			provider,
			filter: String::new(),
			selected: None,
			page_size: DEFAULT_PAGE_SIZE,
		};
		listing.refilter();
		listing
	}

	/// Sets the number of rows a page move covers (at least one).
	pub fn with_page_size(mut self, page_size: usize) -> Self {
		self.page_size = page_size.max(1);
		self
	}

	pub fn provider(&self) -> &P {
		&self.provider
	}

	pub fn filter(&self) -> &str {
		&self.filter
	}

	/// Selected index into the filtered entries, `None` when nothing is selectable.
	pub fn selected(&self) -> Option<usize> {
		self.selected
	}

	pub fn len(&self) -> usize {
		self.provider.len()
	}

	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Replaces the filter text and re-filters from scratch.
	pub fn set_filter(&mut self, filter: impl Into<String>) {
		self.filter = filter.into();
		self.refilter();
	}

	fn refilter(&mut self) {
		let selected = self.provider.apply_filter(&self.filter);
		let len = self.provider.len();
		self.selected = selected.filter(|&index| index < len);
		trace!(filter = %self.filter, matches = len, selected = ?self.selected, "listing filter applied");
	}

	/// Edits the filter for `key`.
	///
	/// Appends characters the provider accepts; Backspace drops the last filter
	/// char. Returns false when the key is not a filter edit (including
	/// Backspace on an empty filter).
	pub fn handle_filter_key(&mut self, key: Key) -> bool {
		if key.is_backspace() {
			return self.backspace();
		}
		match key.printable() {
			Some(c) if self.provider.accepts_filter_char(c) => {
				self.filter.push(c);
				self.refilter();
				true
			}
			_ => false,
		}
	}

	/// Removes the last filter char. Returns false if the filter was empty.
	pub fn backspace(&mut self) -> bool {
		if self.filter.pop().is_none() {
			return false;
		}
		self.refilter();
		true
	}

	/// Moves the selection by `delta`, clamped to the filtered entries.
	///
	/// Without a selection, a forward move starts before the first entry and a
	/// backward move after the last one.
	pub fn move_selection(&mut self, delta: isize) {
		let len = self.len();
		if len == 0 {
			return;
		}
		let last = len as isize - 1;
		let current = match self.selected {
			Some(index) => index as isize,
			None if delta >= 0 => -1,
			None => len as isize,
		};
		self.selected = Some(current.saturating_add(delta).clamp(0, last) as usize);
	}

	/// Moves up one row; with `cycle`, moving up from the first row wraps to the last.
	pub fn up(&mut self, cycle: bool) {
		let len = self.len();
		if cycle && len > 0 && self.selected == Some(0) {
			self.selected = Some(len - 1);
		} else {
			self.move_selection(-1);
		}
	}

	/// Moves down one row; with `cycle`, moving down from the last row wraps to the first.
	pub fn down(&mut self, cycle: bool) {
		let len = self.len();
		if cycle && len > 0 && self.selected == Some(len - 1) {
			self.selected = Some(0);
		} else {
			self.move_selection(1);
		}
	}

	pub fn page_up(&mut self) {
		self.move_selection(-(self.page_size as isize));
	}

	pub fn page_down(&mut self) {
		self.move_selection(self.page_size as isize);
	}

	/// Accepts the selected entry. Without a selection the key is consumed and
	/// nothing happens.
	pub fn accept(&mut self, host: &mut dyn Host) -> Dispatch {
		match self.selected {
			Some(index) => self.accept_index(index, host),
			None => {
				debug!(filter = %self.filter, "listing accept without selection");
				Dispatch::Handled
			}
		}
	}

	/// Accepts entry `index` if it exists.
	pub fn accept_index(&mut self, index: usize, host: &mut dyn Host) -> Dispatch {
		if index >= self.len() {
			debug!(index, len = self.len(), "listing accept out of range");
			return Dispatch::Handled;
		}
		debug!(index, title = self.provider.mode_title(), "listing accept");
		self.provider.accept(index, host);
		Dispatch::HandledAndAccept
	}

	/// Renders at most `height` rows around the selection.
	pub fn view(&self, height: usize) -> ListingView {
		let total = self.len();
		let window = view::find_window(total, self.selected, height);
		let first = window.start;
		let rows: Vec<ListingRow> = window
			.map(|index| {
				let rendered = self.provider.render(index);
				ListingRow::new(index, rendered, self.selected == Some(index))
			})
			.collect();
		let label_width = rows.iter().map(|row| row.label.chars().count()).max().unwrap_or(0);

		ListingView {
			mode_line: ModeLine {
				title: self.provider.mode_title().to_string(),
				filter: self.filter.clone(),
			},
			rows,
			label_width,
			first,
			total,
		}
	}
}
