//! Work process timeline.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;

use crate::listeners::Listeners;
use crate::nav;

const STEPS: [(&str, &str); 4] = [
	("Diagnóstico", "Entendemos seu negócio, seu público e seus objetivos."),
	("Planejamento", "Definimos estrutura, conteúdo e identidade visual."),
	("Desenvolvimento", "Construímos e revisamos tudo junto com você."),
	("Lançamento", "Publicamos, medimos e ajustamos o que for preciso."),
];

fn step_id(index: usize) -> String {
	format!("passo-{}", index + 1)
}

/// Numbered steps. The one under the middle of the viewport gets `active`.
#[component]
pub fn ProcessSteps() -> impl IntoView {
	let list_ref = NodeRef::<leptos::html::Ol>::new();
	let current = RwSignal::new(None::<usize>);
	let listeners: Rc<RefCell<Option<Listeners>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if list_ref.get().is_none() || listeners.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let ids: Vec<String> = (0..STEPS.len()).map(step_id).collect();

		let update = {
			let window = window.clone();
			move || {
				let steps: Vec<_> = ids.iter().filter_map(|id| nav::measure(&window, id)).collect();
				let viewport_height = window
					.inner_height()
					.ok()
					.and_then(|v| v.as_f64())
					.unwrap_or(0.0);
				current.set(nav::current_step(&steps, nav::scroll_y(&window), viewport_height));
			}
		};
		update();

		let mut set = Listeners::new();
		set.add(&window, "scroll", move |_| update());
		*listeners.borrow_mut() = Some(set);
	});

	let steps = STEPS
		.iter()
		.enumerate()
		.map(|(index, (title, text))| {
			view! {
				<li
					id=step_id(index)
					class="process-item"
					class:active=move || current.get() == Some(index)
				>
					<span class="process-number">{index + 1}</span>
					<h3>{*title}</h3>
					<p>{*text}</p>
				</li>
			}
		})
		.collect_view();

	view! { <ol node_ref=list_ref class="process-steps">{steps}</ol> }
}
