//! Panic hook that hands the terminal back before the message prints.

use super::setup::emergency_restore;
use std::panic;

/// Chain a terminal-restoring hook in front of the existing panic hook.
///
/// Call once in `main`, before creating the `TerminalManager`.
pub fn setup_panic_hook() {
    let previous = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        emergency_restore();
        tracing::error!(%info, "Panic");
        previous(info);
    }));
}
