//! Leptos component wrapping the particle field canvas.
//!
//! The component renders a canvas that fills its parent, starts an
//! [`Animator`] on it once mounted, and forwards every change of the `scheme`
//! signal to it. If the animator cannot start the canvas simply stays blank.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use log::error;
use web_sys::HtmlCanvasElement;

use crate::scheme::ColorScheme;

use super::animator::Animator;
use super::config::FieldConfig;

/// Decorative particle background.
///
/// Place it inside a positioned container; the canvas sizes itself to that
/// container and follows it on window resize. The `scheme` signal is the
/// theme subscription: every value it takes recolors the particles.
#[component]
pub fn ParticleFieldCanvas(
	#[prop(into)] scheme: Signal<ColorScheme>,
	#[prop(optional)] config: FieldConfig,
) -> impl IntoView {
	let canvas_ref = NodeRef::<leptos::html::Canvas>::new();
	let animator: Rc<RefCell<Option<Animator>>> = Rc::new(RefCell::new(None));
	let (animator_init, animator_theme) = (animator.clone(), animator.clone());

	Effect::new(move |_| {
		let Some(canvas) = canvas_ref.get() else {
			return;
		};
		if animator_init.borrow().is_some() {
			return;
		}
		let canvas: HtmlCanvasElement = canvas.into();

		match Animator::start(canvas, config.clone(), scheme.get_untracked()) {
			Ok(a) => *animator_init.borrow_mut() = Some(a),
			Err(e) => error!("landing-fx: particle background disabled: {}", e),
		}
	});

	Effect::new(move |_| {
		let scheme = scheme.get();
		if let Some(ref a) = *animator_theme.borrow() {
			a.set_scheme(scheme);
		}
	});

	view! {
		<canvas
			node_ref=canvas_ref
			class="particles-canvas"
			aria-hidden="true"
			style="display: block; position: absolute; inset: 0; pointer-events: none;"
		/>
	}
}
