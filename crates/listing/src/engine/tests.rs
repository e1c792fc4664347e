use pretty_assertions::assert_eq;
use proptest::prelude::*;
use recall_primitives::style::Modifier;
use recall_primitives::{Key, KeyCode, Styled};

use super::view::find_window;
use super::{Listing, NO_RESULT};
use crate::dispatch::Dispatch;
use crate::host::{Host, LineBuffer};
use crate::provider::{ListingProvider, Rendered};

/// Substring-matching provider over a fixed list.
struct Fruits {
	all: Vec<&'static str>,
	filtered: Vec<&'static str>,
}

impl Fruits {
	fn new(all: &[&'static str]) -> Self {
		Self {
			all: all.to_vec(),
			filtered: Vec::new(),
		}
	}
}

impl ListingProvider for Fruits {
	fn mode_title(&self) -> &str {
		" FRUITS "
	}

	fn len(&self) -> usize {
		self.filtered.len()
	}

	fn render(&self, index: usize) -> Rendered {
		Rendered {
			label: index.to_string(),
			content: Styled::unstyled(self.filtered[index]),
		}
	}

	fn apply_filter(&mut self, filter: &str) -> Option<usize> {
		self.filtered = self.all.iter().copied().filter(|item| item.contains(filter)).collect();
		(!self.filtered.is_empty()).then_some(0)
	}

	fn accept(&mut self, index: usize, host: &mut dyn Host) {
		host.insert_at_cursor(self.filtered[index]);
	}
}

fn fruits() -> Listing<Fruits> {
	Listing::new(Fruits::new(&["apple", "banana", "cherry", "date", "elderberry"]))
}

#[test]
fn new_applies_empty_filter() {
	let listing = fruits();
	assert_eq!(listing.filter(), "");
	assert_eq!(listing.len(), 5);
	assert_eq!(listing.selected(), Some(0));
}

#[test]
fn set_filter_replaces_and_reselects() {
	let mut listing = fruits();
	listing.move_selection(3);
	listing.set_filter("rr");
	assert_eq!(listing.len(), 2);
	assert_eq!(listing.selected(), Some(0));

	listing.set_filter("zzz");
	assert!(listing.is_empty());
	assert_eq!(listing.selected(), None);
}

#[test]
fn move_selection_clamps() {
	let mut listing = fruits();
	listing.move_selection(100);
	assert_eq!(listing.selected(), Some(4));
	listing.move_selection(-2);
	assert_eq!(listing.selected(), Some(2));
	listing.move_selection(isize::MIN);
	assert_eq!(listing.selected(), Some(0));
}

#[test]
fn move_selection_is_noop_when_empty() {
	let mut listing = fruits();
	listing.set_filter("zzz");
	listing.move_selection(1);
	listing.down(true);
	listing.page_up();
	assert_eq!(listing.selected(), None);
}

#[test]
fn up_and_down_cycle_only_when_asked() {
	let mut listing = fruits();
	listing.up(false);
	assert_eq!(listing.selected(), Some(0));
	listing.up(true);
	assert_eq!(listing.selected(), Some(4));
	listing.down(false);
	assert_eq!(listing.selected(), Some(4));
	listing.down(true);
	assert_eq!(listing.selected(), Some(0));
}

#[test]
fn paging_uses_page_size() {
	let mut listing = fruits().with_page_size(2);
	listing.page_down();
	assert_eq!(listing.selected(), Some(2));
	listing.page_down();
	listing.page_down();
	assert_eq!(listing.selected(), Some(4));
	listing.page_up();
	assert_eq!(listing.selected(), Some(2));
}

#[test]
fn filter_keys_append_and_backspace() {
	let mut listing = fruits();
	assert!(listing.handle_filter_key(Key::char('e')));
	assert!(listing.handle_filter_key(Key::char('r')));
	assert_eq!(listing.filter(), "er");
	assert_eq!(listing.len(), 2);

	assert!(listing.handle_filter_key(Key::new(KeyCode::Backspace)));
	assert_eq!(listing.filter(), "e");
	assert_eq!(listing.len(), 4);

	assert!(listing.handle_filter_key(Key::new(KeyCode::Backspace)));
	assert!(!listing.handle_filter_key(Key::new(KeyCode::Backspace)));
	assert_eq!(listing.filter(), "");
}

#[test]
fn modified_and_special_keys_do_not_edit_filter() {
	let mut listing = fruits();
	assert!(!listing.handle_filter_key(Key::ctrl('a')));
	assert!(!listing.handle_filter_key(Key::alt('1')));
	assert!(!listing.handle_filter_key(Key::new(KeyCode::Enter)));
	assert_eq!(listing.filter(), "");
}

#[test]
fn accept_inserts_selected_entry() {
	let mut listing = fruits();
	listing.move_selection(1);
	let mut line = LineBuffer::new();
	assert_eq!(listing.accept(&mut line), Dispatch::HandledAndAccept);
	assert_eq!(line.text(), "banana");
}

#[test]
fn accept_without_selection_is_consumed_noop() {
	let mut listing = fruits();
	listing.set_filter("zzz");
	let mut line = LineBuffer::new();
	assert_eq!(listing.accept(&mut line), Dispatch::Handled);
	assert_eq!(listing.accept_index(0, &mut line), Dispatch::Handled);
	assert_eq!(line.text(), "");
}

#[test]
fn view_marks_selection_and_reports_window() {
	let mut listing = fruits();
	listing.move_selection(4);
	let view = listing.view(3);

	assert_eq!(view.mode_line.title, " FRUITS ");
	assert_eq!(view.total, 5);
	assert_eq!(view.first, 2);
	let labels: Vec<_> = view.rows.iter().map(|row| row.label.as_str()).collect();
	assert_eq!(labels, vec!["2", "3", "4"]);

	let selected = view.selected_row().unwrap();
	assert_eq!(selected.content.as_str(), "elderberry");
	assert!(selected.content.style.has(Modifier::REVERSED));
	assert!(!view.rows[0].content.style.has(Modifier::REVERSED));
	assert_eq!(view.placeholder(), None);
}

#[test]
fn empty_view_has_placeholder() {
	let mut listing = fruits();
	listing.set_filter("kiwi");
	let view = listing.view(10);
	assert!(view.is_empty());
	assert_eq!(view.mode_line.filter, "kiwi");
	assert_eq!(view.placeholder(), Some(NO_RESULT));
	assert_eq!(view.label_width, 0);
}

#[test]
fn window_keeps_selection_visible() {
	assert_eq!(find_window(3, Some(2), 10), 0..3);
	assert_eq!(find_window(10, Some(0), 4), 0..4);
	assert_eq!(find_window(10, Some(5), 4), 4..8);
	assert_eq!(find_window(10, Some(9), 4), 6..10);
	assert_eq!(find_window(10, None, 4), 0..4);
	assert_eq!(find_window(10, Some(3), 0), 0..0);
}

#[derive(Debug, Clone)]
enum Op {
	Filter(String),
	Move(i8),
	Up(bool),
	Down(bool),
	PageUp,
	PageDown,
	Backspace,
}

fn op() -> impl Strategy<Value = Op> {
	prop_oneof![
		"[a-z]{0,3}".prop_map(Op::Filter),
		any::<i8>().prop_map(Op::Move),
		any::<bool>().prop_map(Op::Up),
		any::<bool>().prop_map(Op::Down),
		Just(Op::PageUp),
		Just(Op::PageDown),
		Just(Op::Backspace),
	]
}

proptest! {
	#[test]
	fn selection_is_none_or_in_range(ops in prop::collection::vec(op(), 0..40)) {
		let mut listing = fruits();
		for op in ops {
			match op {
				Op::Filter(text) => listing.set_filter(text),
				Op::Move(delta) => listing.move_selection(delta as isize),
				Op::Up(cycle) => listing.up(cycle),
				Op::Down(cycle) => listing.down(cycle),
				Op::PageUp => listing.page_up(),
				Op::PageDown => listing.page_down(),
				Op::Backspace => {
					listing.backspace();
				}
			}
			match listing.selected() {
				Some(index) => prop_assert!(index < listing.len()),
				None => prop_assert!(listing.is_empty()),
			}
		}
	}
}
