//! Plain-text transcript of a replay session.

use std::io::{self, Write};

use recall_listing::{ListingView, Notification};
use recall_primitives::{Key, Mode};

/// Writes the mode and key, the listing if one is open, then pending notifications.
pub fn write_step(
	out: &mut impl Write,
	key: Key,
	mode: Mode,
	view: Option<&ListingView>,
	notifications: &[Notification],
) -> io::Result<()> {
	writeln!(out, "[{}] {}", mode.label(), key)?;
	if let Some(view) = view {
		write_view(out, view)?;
	}
	for note in notifications {
		writeln!(out, "{}: {}", note.level, note.message)?;
	}
	Ok(())
}

/// Writes the mode line and the visible rows, `>` marking the selection.
pub fn write_view(out: &mut impl Write, view: &ListingView) -> io::Result<()> {
	let mode_line = format!("{}{}", view.mode_line.title, view.mode_line.filter);
	writeln!(out, "{}", mode_line.trim_end())?;
	if let Some(placeholder) = view.placeholder() {
		return writeln!(out, "  {placeholder}");
	}
	for row in &view.rows {
		let marker = if row.selected { '>' } else { ' ' };
		writeln!(out, "{marker} {:<width$} {}", row.label, row.content, width = view.label_width)?;
	}
	Ok(())
}
