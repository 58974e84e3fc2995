//! Exit-intent popup.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use leptos::prelude::*;
use log::{debug, info};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{KeyboardEvent, MouseEvent};

use crate::listeners::Listeners;
use crate::nav;
use crate::popup::{self, ExitTrigger};

/// Offer shown once per session, after [`popup::SHOW_DELAY_MS`] on a visible
/// page or when the pointer leaves through the top of the window. Closes on
/// Escape, on a click outside the card, or with either close button.
#[component]
pub fn ExitPopup() -> impl IntoView {
	let popup_ref = NodeRef::<leptos::html::Div>::new();
	let visible = RwSignal::new(false);
	let listeners: Rc<RefCell<Option<Listeners>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		if popup_ref.get().is_none() || listeners.borrow().is_some() {
			return;
		}
		let mut set = Listeners::new();
		if popup::shown_this_session() {
			debug!("landing-fx: exit popup already shown this session");
			*listeners.borrow_mut() = Some(set);
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let Some(document) = window.document() else {
			return;
		};

		let shown = Rc::new(Cell::new(false));
		let show: Rc<dyn Fn(ExitTrigger)> = Rc::new(move |trigger| {
			if popup::should_show_exit_popup(shown.get(), trigger) {
				shown.set(true);
				popup::mark_shown();
				visible.set(true);
				info!("landing-fx: exit popup shown ({:?})", trigger);
			}
		});

		let (timer_show, timer_document) = (show.clone(), document.clone());
		let timer = Closure::once_into_js(move || {
			timer_show(ExitTrigger::Timer {
				page_visible: !timer_document.hidden(),
			})
		});
		let _ = window.set_timeout_with_callback_and_timeout_and_arguments_0(
			timer.unchecked_ref(),
			popup::SHOW_DELAY_MS,
		);

		let leave_window = window.clone();
		set.add(&document, "mouseleave", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			show(ExitTrigger::PointerLeave {
				client_y: ev.client_y() as f64,
				scroll_y: nav::scroll_y(&leave_window),
			});
		});

		set.add(&document, "keydown", move |ev| {
			let Some(ev) = ev.dyn_ref::<KeyboardEvent>() else {
				return;
			};
			if popup::closes_on_key(&ev.key()) && visible.get_untracked() {
				visible.set(false);
			}
		});
		*listeners.borrow_mut() = Some(set);
	});

	let close = move |_: leptos::ev::MouseEvent| visible.set(false);

	view! {
		<div
			node_ref=popup_ref
			id="exitPopup"
			class="exit-popup"
			class:show=move || visible.get()
			role="dialog"
			aria-modal="true"
			on:click=close
		>
			<div class="popup-content" on:click=|ev| ev.stop_propagation()>
				<button class="popup-close" type="button" aria-label="Fechar" on:click=close>
					<i class="bx bx-x"></i>
				</button>
				<h3>"Antes de ir embora..."</h3>
				<p>"Receba uma análise gratuita da presença online da sua empresa."</p>
				<a href="#contato" class="btn btn-primary" on:click=close>
					"Quero minha análise"
				</a>
				<button class="popup-dismiss" type="button" on:click=close>
					"Não, obrigado"
				</button>
			</div>
		</div>
	}
}
