use pretty_assertions::assert_eq;
use rstest::rstest;

use super::{Key, KeyCode, KeyParseError, Modifiers};

#[rstest]
#[case("alt-1", Key::alt('1'))]
#[case("A-1", Key::alt('1'))]
#[case("meta-1", Key::alt('1'))]
#[case("ctrl-[", Key::ctrl('['))]
#[case("C-n", Key::ctrl('n'))]
#[case("x", Key::char('x'))]
#[case("X", Key::char('X'))]
#[case("-", Key::char('-'))]
#[case("alt--", Key::alt('-'))]
#[case("space", Key::char(' '))]
#[case("Enter", Key::new(KeyCode::Enter))]
#[case("esc", Key::new(KeyCode::Esc))]
#[case("backtab", Key::new(KeyCode::BackTab))]
#[case("s-tab", Key::new(KeyCode::Tab).with_shift())]
#[case("pagedown", Key::new(KeyCode::PageDown))]
#[case("f12", Key::new(KeyCode::F(12)))]
fn parses_notation(#[case] input: &str, #[case] expected: Key) {
	assert_eq!(input.parse::<Key>(), Ok(expected));
}

#[test]
fn combined_modifiers() {
	let key: Key = "ctrl-alt-x".parse().unwrap();
	assert_eq!(
		key.modifiers,
		Modifiers {
			ctrl: true,
			alt: true,
			shift: false,
		}
	);
	assert_eq!(key.code, KeyCode::Char('x'));
}

#[rstest]
#[case("", KeyParseError::Empty)]
#[case("alt-", KeyParseError::UnknownKey("alt-".to_string()))]
#[case("-1", KeyParseError::UnknownKey("-1".to_string()))]
#[case("hyper-x", KeyParseError::UnknownKey("hyper-x".to_string()))]
#[case("f25", KeyParseError::UnknownKey("f25".to_string()))]
#[case("ctrl-c-x", KeyParseError::DuplicateModifier("c".to_string()))]
fn rejects_bad_notation(#[case] input: &str, #[case] expected: KeyParseError) {
	assert_eq!(input.parse::<Key>(), Err(expected));
}

#[test]
fn display_uses_compact_prefixes() {
	assert_eq!(Key::alt('1').to_string(), "A-1");
	assert_eq!(Key::ctrl('[').to_string(), "C-[");
	assert_eq!(Key::new(KeyCode::Tab).with_shift().to_string(), "S-tab");
	assert_eq!(Key::char(' ').to_string(), "space");
}

#[test]
fn display_parses_back() {
	for key in [
		Key::alt('1'),
		Key::ctrl('n'),
		Key::new(KeyCode::PageUp),
		Key::new(KeyCode::F(3)).with_shift(),
		Key::char('-'),
	] {
		assert_eq!(key.to_string().parse::<Key>(), Ok(key));
	}
}

#[test]
fn printable_ignores_shift_but_not_ctrl_or_alt() {
	assert_eq!(Key::char('7').printable(), Some('7'));
	assert_eq!(Key::char('A').with_shift().printable(), Some('A'));
	assert_eq!(Key::alt('1').printable(), None);
	assert_eq!(Key::ctrl('a').printable(), None);
	assert_eq!(Key::new(KeyCode::Enter).printable(), None);
	assert_eq!(Key::char('\t').printable(), None);
}

#[test]
fn backspace_requires_no_modifiers() {
	assert!(Key::new(KeyCode::Backspace).is_backspace());
	assert!(!Key::new(KeyCode::Backspace).with_shift().is_backspace());
	assert!(!Key::ctrl('h').is_backspace());
	assert!(Modifiers::NONE.is_empty());
	assert!(!Modifiers::ALT.is_empty());
}
