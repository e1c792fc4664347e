mod cli;
mod render;

use std::io::Write;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use recall_listing::{Config, KeyOutcome, LineBuffer, MemoryHistory, ModeController, init_keymap};
use tracing::debug;

fn main() -> anyhow::Result<()> {
	let cli = Cli::parse();
	setup_tracing(cli.verbose);

	let mut config = match &cli.config {
		Some(path) => Config::load(path).with_context(|| format!("failed to load config {}", path.display()))?,
		None => Config::default(),
	};
	if let Some(height) = cli.height {
		config.listing.height = height;
	}

	let mut history = match &cli.history_file {
		Some(path) => MemoryHistory::load(path)?,
		None => MemoryHistory::new(),
	};
	for command in cli.history {
		history.push(command);
	}
	debug!(commands = history.len(), keys = cli.keys.len(), "replay starting");

	let keymap = init_keymap(&config)?;
	let mut controller = ModeController::new(keymap, history, &config);
	let mut line = LineBuffer::with_text(cli.line);
	let mut out = std::io::stdout().lock();

	for key in cli.keys {
		match controller.handle_key(key, &mut line) {
			KeyOutcome::Consumed => {}
			KeyOutcome::Unhandled(key) if key.is_backspace() => {
				line.delete_before_dot();
			}
			KeyOutcome::Unhandled(key) => debug!(%key, "key ignored"),
		}
		let notifications = line.take_notifications();
		render::write_step(&mut out, key, controller.mode(), controller.view().as_ref(), &notifications)?;
	}

	writeln!(out, "{}", line.text())?;
	Ok(())
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("recall_listing=debug,warn")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(true)
		.init();
}
