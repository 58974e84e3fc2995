//! Light/dark switch button.

use leptos::prelude::*;

use crate::scheme::{self, ColorScheme};

/// Flips `scheme` and remembers the choice. Whoever observes the signal
/// (document attribute, particle palette) follows along.
#[component]
pub fn ThemeToggle(scheme: RwSignal<ColorScheme>) -> impl IntoView {
	let on_click = move |_: leptos::ev::MouseEvent| {
		let next = scheme.get_untracked().toggled();
		scheme.set(next);
		scheme::persist(next);
	};

	// Icon shows what a click switches to.
	let icon = move || match scheme.get() {
		ColorScheme::Dark => "bx bx-sun",
		ColorScheme::Light => "bx bx-moon",
	};

	view! {
		<button class="theme-toggle" type="button" aria-label="Alternar tema" on:click=on_click>
			<i class=icon></i>
		</button>
	}
}
