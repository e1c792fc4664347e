//! Provider trait for listing candidates.

use recall_primitives::Styled;

use crate::host::Host;

/// One rendered candidate row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
	/// Short key shown in the label column.
	pub label: String,
	pub content: Styled,
}

/// Capability contract for a concrete picker driven by a [`Listing`](crate::Listing).
///
/// The provider owns the candidate set and the filtered view of it. The engine
/// owns the filter text and the selection, and only talks to the picker through
/// this trait.
pub trait ListingProvider {
	/// Label for the mode line.
	fn mode_title(&self) -> &str;

	/// Number of entries matching the last applied filter.
	fn len(&self) -> usize;

	fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Renders filtered entry `index`.
	///
	/// # Panics
	///
	/// May panic when `index >= self.len()`.
	fn render(&self, index: usize) -> Rendered;

	/// Recomputes the filtered entries from scratch for `filter`.
	///
	/// Returns the index to select, or `None` when nothing matches or the filter
	/// is not meaningful for this provider.
	fn apply_filter(&mut self, filter: &str) -> Option<usize>;

	/// Applies entry `index` to the host. The listing mode ends afterwards.
	fn accept(&mut self, index: usize, host: &mut dyn Host);

	/// Whether typing `c` edits the filter. Defaults to any non-control char.
	fn accepts_filter_char(&self, c: char) -> bool {
		!c.is_control()
	}
}

impl<P: ListingProvider + ?Sized> ListingProvider for Box<P> {
	fn mode_title(&self) -> &str {
		(**self).mode_title()
	}

	fn len(&self) -> usize {
		(**self).len()
	}

	fn is_empty(&self) -> bool {
		(**self).is_empty()
	}

	fn render(&self, index: usize) -> Rendered {
		(**self).render(index)
	}

	fn apply_filter(&mut self, filter: &str) -> Option<usize> {
		(**self).apply_filter(filter)
	}

	fn accept(&mut self, index: usize, host: &mut dyn Host) {
		(**self).accept(index, host)
	}

	fn accepts_filter_char(&self, c: char) -> bool {
		(**self).accepts_filter_char(c)
	}
}
