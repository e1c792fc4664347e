use std::io::Write;

use pretty_assertions::assert_eq;
use recall_keymap::LookupOutcome;
use recall_primitives::KeyCode;

use super::*;
use crate::actions::init_keymap;

#[test]
fn empty_document_uses_defaults() {
	let config = Config::from_toml("").unwrap();
	assert_eq!(config, Config::default());
	assert_eq!(config.listing.page_size, 8);
	assert_eq!(config.listing.height, 10);
	assert_eq!(config.lastcmd.start_key, Key::alt('1'));
	assert_eq!(config.lastcmd.fast_path_key, Key::alt('1'));
}

#[test]
fn parses_all_sections() {
	let config = Config::from_toml(
		r#"
		[listing]
		page-size = 3

		[lastcmd]
		start-key = "alt-."
		fast-path-key = "ctrl-space"

		[keys.lastcmd]
		"ctrl-n" = "listing:down"
		"#,
	)
	.unwrap();

	assert_eq!(config.listing.page_size, 3);
	assert_eq!(config.listing.height, 10);
	assert_eq!(config.lastcmd.start_key, Key::alt('.'));
	assert_eq!(config.lastcmd.fast_path_key, Key::ctrl(' '));
	assert_eq!(config.keys["lastcmd"]["ctrl-n"], "listing:down");
}

#[test]
fn unknown_field_is_rejected() {
	let err = Config::from_toml("[listing]\nrows = 4\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn bad_key_in_section_is_rejected() {
	let err = Config::from_toml("[lastcmd]\nstart-key = \"hyper-x\"\n").unwrap_err();
	assert!(matches!(err, ConfigError::Toml(_)));
}

#[test]
fn overrides_rebind_and_unbind() {
	let config = Config::from_toml(
		r#"
		[keys.lastcmd]
		"ctrl-n" = "listing:down"
		"tab" = "none"
		"#,
	)
	.unwrap();
	let keymap = init_keymap(&config).unwrap();

	assert_eq!(
		keymap.lookup(Mode::Lastcmd, Key::ctrl('n')),
		LookupOutcome::Match(&Action::new(ActionId::ListingDown))
	);
	assert_eq!(
		keymap.lookup(Mode::Lastcmd, Key::new(KeyCode::Tab)),
		LookupOutcome::Default(&Action::new(ActionId::LastcmdAltDefault))
	);
}

#[test]
fn override_of_default_pattern() {
	let config = Config::from_toml("[keys.insert]\ndefault = \"none\"\n").unwrap();
	let keymap = init_keymap(&config).unwrap();
	assert_eq!(keymap.lookup(Mode::Insert, Key::char('a')), LookupOutcome::None);
}

#[test]
fn unknown_mode_is_an_error() {
	let config = Config::from_toml("[keys.normal]\n\"j\" = \"listing:down\"\n").unwrap();
	let err = init_keymap(&config).unwrap_err();
	assert!(matches!(err, ConfigError::UnknownMode(ref mode) if mode == "normal"));
}

#[test]
fn unknown_action_is_an_error() {
	let config = Config::from_toml("[keys.lastcmd]\n\"j\" = \"listing:jump\"\n").unwrap();
	let err = init_keymap(&config).unwrap_err();
	assert_eq!(err.to_string(), "unknown action: listing:jump");
}

#[test]
fn invalid_key_is_an_error() {
	let config = Config::from_toml("[keys.lastcmd]\n\"ctrl-ctrl-n\" = \"listing:down\"\n").unwrap();
	let err = init_keymap(&config).unwrap_err();
	assert!(matches!(err, ConfigError::InvalidKey { ref key, .. } if key == "ctrl-ctrl-n"));
}

#[test]
fn load_reads_file() {
	let mut file = tempfile::NamedTempFile::new().unwrap();
	writeln!(file, "[listing]\nheight = 4").unwrap();
	let config = Config::load(file.path()).unwrap();
	assert_eq!(config.listing.height, 4);
}

#[test]
fn load_missing_file_is_io_error() {
	let dir = tempfile::tempdir().unwrap();
	let err = Config::load(dir.path().join("recall.toml")).unwrap_err();
	assert!(matches!(err, ConfigError::Io { .. }));
}
