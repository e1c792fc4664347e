//! Core types shared by the listing engine and its hosts: keys, modes, styled text.

/// Key event types and key notation parsing.
pub mod key;
/// Editor mode definitions.
pub mod mode;
/// Styled text for rendered listing rows.
pub mod style;

pub use key::{Key, KeyCode, KeyParseError, Modifiers};
pub use mode::Mode;
pub use style::{Style, Styled};
