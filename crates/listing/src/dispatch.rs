//! Control-flow results of key handling.

use recall_primitives::Key;

/// What an action did with a key.
///
/// Returned by every bound action and interpreted by the
/// [`ModeController`](crate::ModeController).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dispatch {
	/// Consumed; the current mode stays active.
	Handled,
	/// Consumed and a candidate was accepted; the listing mode ends.
	HandledAndAccept,
	/// Not meaningful in the current mode; the controller leaves the mode and
	/// replays the key in insertion mode.
	NotHandled(Key),
}

/// What the controller reports back to the host for one key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
	/// Some mode handled the key.
	Consumed,
	/// No mode handled the key, even after replay in insertion mode.
	Unhandled(Key),
}
