//! Exit-intent popup rules.
//!
//! The popup appears at most once per browser session: either after the page
//! has been open for a while, or when the pointer leaves through the top edge
//! after the visitor has scrolled into the page. The session flag lives in
//! `sessionStorage` under [`SESSION_KEY`].

use log::warn;

/// Session storage key marking the popup as already shown.
pub const SESSION_KEY: &str = "exitPopupShown";

/// Delay before the timed trigger fires.
pub const SHOW_DELAY_MS: i32 = 30_000;

/// The pointer must leave above this `clientY` to count as an exit.
pub const EXIT_EDGE: f64 = 5.0;

/// The visitor must have scrolled past this offset for an exit to count.
pub const MIN_SCROLL: f64 = 100.0;

/// What is asking the popup to appear.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ExitTrigger {
	/// The show delay elapsed.
	Timer {
		/// Whether the tab is currently visible.
		page_visible: bool,
	},
	/// The pointer left the document.
	PointerLeave {
		/// Vertical pointer position when it left.
		client_y: f64,
		/// Page scroll offset at that moment.
		scroll_y: f64,
	},
}

/// Whether `trigger` should open the popup, given whether it was already shown.
pub fn should_show_exit_popup(already_shown: bool, trigger: ExitTrigger) -> bool {
	if already_shown {
		return false;
	}
	match trigger {
		ExitTrigger::Timer { page_visible } => page_visible,
		ExitTrigger::PointerLeave { client_y, scroll_y } => {
			client_y < EXIT_EDGE && scroll_y > MIN_SCROLL
		}
	}
}

/// Whether a `keydown` with this key closes the popup.
pub fn closes_on_key(key: &str) -> bool {
	key == "Escape"
}

fn session_storage() -> Option<web_sys::Storage> {
	web_sys::window()?.session_storage().ok().flatten()
}

/// Whether the popup was already shown in this session.
pub fn shown_this_session() -> bool {
	session_storage()
		.and_then(|s| s.get_item(SESSION_KEY).ok().flatten())
		.is_some_and(|v| v == "true")
}

/// Record that the popup was shown in this session.
pub fn mark_shown() {
	let Some(storage) = session_storage() else {
		return;
	};
	if storage.set_item(SESSION_KEY, "true").is_err() {
		warn!("landing-fx: could not record exit popup in session storage");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn timer_shows_only_on_visible_page() {
		assert!(should_show_exit_popup(
			false,
			ExitTrigger::Timer { page_visible: true }
		));
		assert!(!should_show_exit_popup(
			false,
			ExitTrigger::Timer {
				page_visible: false
			}
		));
	}

	#[test]
	fn leaving_through_top_after_scrolling_shows() {
		let leave = |client_y, scroll_y| {
			should_show_exit_popup(false, ExitTrigger::PointerLeave { client_y, scroll_y })
		};
		assert!(leave(2.0, 400.0));
		assert!(!leave(5.0, 400.0));
		assert!(!leave(300.0, 400.0));
		assert!(!leave(2.0, 100.0));
		assert!(!leave(2.0, 0.0));
	}

	#[test]
	fn never_twice_per_session() {
		assert!(!should_show_exit_popup(
			true,
			ExitTrigger::Timer { page_visible: true }
		));
		assert!(!should_show_exit_popup(
			true,
			ExitTrigger::PointerLeave {
				client_y: 0.0,
				scroll_y: 900.0
			}
		));
	}

	#[test]
	fn escape_closes() {
		assert!(closes_on_key("Escape"));
		assert!(!closes_on_key("Enter"));
		assert!(!closes_on_key("Esc"));
	}
}
