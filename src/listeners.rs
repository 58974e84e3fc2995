//! DOM event listeners that unregister themselves when dropped.

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Event, EventTarget};

struct Entry {
	target: EventTarget,
	kind: &'static str,
	callback: Closure<dyn FnMut(Event)>,
}

/// A set of registered listeners. Each stays active while the set is held.
#[derive(Default)]
pub(crate) struct Listeners {
	entries: Vec<Entry>,
}

impl Listeners {
	pub(crate) fn new() -> Self {
		Self::default()
	}

	/// Register `handler` for `kind` events on `target`.
	pub(crate) fn add(
		&mut self,
		target: &EventTarget,
		kind: &'static str,
		handler: impl FnMut(Event) + 'static,
	) {
		let callback = Closure::<dyn FnMut(Event)>::new(handler);
		if target
			.add_event_listener_with_callback(kind, callback.as_ref().unchecked_ref())
			.is_err()
		{
			warn!("landing-fx: could not listen for {}", kind);
			return;
		}
		self.entries.push(Entry {
			target: target.clone(),
			kind,
			callback,
		});
	}

	pub(crate) fn len(&self) -> usize {
		self.entries.len()
	}
}

impl Drop for Listeners {
	fn drop(&mut self) {
		for entry in self.entries.drain(..) {
			let _ = entry.target.remove_event_listener_with_callback(
				entry.kind,
				entry.callback.as_ref().unchecked_ref(),
			);
		}
	}
}
