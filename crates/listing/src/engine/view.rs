//! Render-ready snapshot of a listing.

use std::ops::Range;

use recall_primitives::{Style, Styled};
use recall_primitives::style::Modifier;

use crate::provider::Rendered;

/// Placeholder shown in place of rows when nothing matches.
pub const NO_RESULT: &str = "(no result)";

/// Title and filter text shown above the rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeLine {
	pub title: String,
	pub filter: String,
}

/// One visible candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
	/// Index into the filtered entries.
	pub index: usize,
	pub label: String,
	pub content: Styled,
	pub selected: bool,
}

impl ListingRow {
	pub(crate) fn new(index: usize, rendered: Rendered, selected: bool) -> Self {
		let content = if selected {
			rendered.content.patch_style(Style::new().add_modifier(Modifier::REVERSED))
		} else {
			rendered.content
		};
		Self {
			index,
			label: rendered.label,
			content,
			selected,
		}
	}
}

/// Everything a frontend needs to draw the listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
	pub mode_line: ModeLine,
	pub rows: Vec<ListingRow>,
	/// Widest label among `rows`, in chars.
	pub label_width: usize,
	/// Filtered index of the first visible row.
	pub first: usize,
	/// Number of filtered entries, visible or not.
	pub total: usize,
}

impl ListingView {
	pub fn is_empty(&self) -> bool {
		self.rows.is_empty()
	}

	/// Text to show instead of rows when the filter matched nothing.
	pub fn placeholder(&self) -> Option<&'static str> {
		(self.total == 0).then_some(NO_RESULT)
	}

	/// The visible row holding the selection.
	pub fn selected_row(&self) -> Option<&ListingRow> {
		self.rows.iter().find(|row| row.selected)
	}
}

/// Picks `height` consecutive rows out of `total` that contain `selected`,
/// keeping the selection near the middle.
pub(crate) fn find_window(total: usize, selected: Option<usize>, height: usize) -> Range<usize> {
	if total <= height {
		return 0..total;
	}
	if height == 0 {
		return 0..0;
	}
	let selected = selected.unwrap_or(0).min(total - 1);
	let low = selected.saturating_sub((height - 1) / 2);
	let high = (low + height).min(total);
	(high - height)..high
}
