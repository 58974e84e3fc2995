//! FAQ accordion.

use leptos::prelude::*;

use crate::faq::{Accordion, FaqEntry};

/// Questions that expand one at a time. Opening an item closes the one that
/// was open before.
#[component]
pub fn FaqAccordion(entries: Vec<FaqEntry>) -> impl IntoView {
	let accordion = RwSignal::new(Accordion::default());

	let items = entries
		.into_iter()
		.enumerate()
		.map(|(index, entry)| {
			let is_open = move || accordion.with(|a| a.is_open(index));
			let icon = move || if is_open() { "bx bx-minus" } else { "bx bx-plus" };
			view! {
				<div class="accordion-item" class:active=is_open>
					<button
						class="accordion-header"
						type="button"
						aria-expanded=move || is_open().to_string()
						on:click=move |_| accordion.update(|a| a.toggle(index))
					>
						<span>{entry.question}</span>
						<i class=icon></i>
					</button>
					<div class="accordion-content" hidden=move || !is_open()>
						<p>{entry.answer}</p>
					</div>
				</div>
			}
		})
		.collect_view();

	view! { <div class="accordion">{items}</div> }
}
