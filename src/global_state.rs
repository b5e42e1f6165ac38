//! App-wide signals: which view is showing, whether the chat panel is open,
//! and launch requests travelling from the wizard to the chat transcript.

use leptos::SignalSet;

use crate::application::{LaunchRequest, Navigator, Route};

crate::app_signals! {
    current_route: Route = Route::default(),
    chat_open: bool = false,
    /// Set by the wizard's launch button, consumed by the chat panel.
    pending_launch: Option<LaunchRequest> = None,
}

/// `Navigator` backed by the global signals.
#[derive(Debug, Clone, Copy, Default)]
pub struct SignalNavigator;

impl Navigator for SignalNavigator {
    fn navigate(&self, route: Route) {
        current_route().set(route);
    }

    fn set_chat_open(&self, open: bool) {
        chat_open().set(open);
    }
}
