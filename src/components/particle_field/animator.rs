//! Browser driver for the particle field.
//!
//! An [`Animator`] binds a [`FieldState`] to a canvas: it sizes the canvas to
//! its container, runs the `requestAnimationFrame` loop, and listens on the
//! window for pointer, touch and resize events. Dropping it detaches the
//! listeners, cancels the pending frame and frees the frame callback.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{info, warn};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use wasm_bindgen::prelude::*;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent, TouchEvent, Window};

use crate::listeners::Listeners;
use crate::scheme::ColorScheme;

use super::config::FieldConfig;
use super::error::InitError;
use super::particles::Bounds;
use super::render;
use super::state::FieldState;

/// How long a finished touch keeps pushing particles around.
const TOUCH_LINGER_MS: i32 = 100;

fn viewport_width(window: &Window) -> f64 {
	window
		.inner_width()
		.ok()
		.and_then(|v| v.as_f64())
		.unwrap_or(0.0)
}

/// Canvas plus the handles needed to draw on and size it.
#[derive(Clone)]
struct Surface {
	window: Window,
	canvas: HtmlCanvasElement,
	ctx: CanvasRenderingContext2d,
}

impl Surface {
	fn acquire(canvas: HtmlCanvasElement) -> Result<Self, InitError> {
		let window = web_sys::window().ok_or(InitError::NoWindow)?;
		let ctx = canvas
			.get_context("2d")
			.ok()
			.flatten()
			.and_then(|c| c.dyn_into::<CanvasRenderingContext2d>().ok())
			.ok_or(InitError::NoContext)?;
		Ok(Self {
			window,
			canvas,
			ctx,
		})
	}

	/// Match the canvas to its container and report the new bounds.
	fn fit(&self) -> Result<Bounds, InitError> {
		let container = self.canvas.parent_element().ok_or(InitError::NoContainer)?;
		let (w, h) = (
			container.client_width().max(0) as u32,
			container.client_height().max(0) as u32,
		);
		self.canvas.set_width(w);
		self.canvas.set_height(h);
		Ok(Bounds::new(w as f64, h as f64))
	}

	fn viewport_width(&self) -> f64 {
		viewport_width(&self.window)
	}

	/// Top-left corner of the canvas in client coordinates.
	fn origin(&self) -> (f64, f64) {
		let rect = self.canvas.get_bounding_client_rect();
		(rect.left(), rect.top())
	}
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// The self-rescheduling frame callback and the id of its pending request.
struct FrameLoop<C = Closure<dyn FnMut()>> {
	callback: Rc<RefCell<Option<C>>>,
	pending: Rc<Cell<Option<i32>>>,
}

impl<C> FrameLoop<C> {
	/// Drop the callback and hand back the pending request id. The callback
	/// holds a handle to its own slot, so it is only freed once taken out.
	fn release(&self) -> Option<i32> {
		self.callback.borrow_mut().take();
		self.pending.take()
	}
}

impl FrameLoop {
	fn request(window: &Window, callback: &FrameCallback, pending: &Cell<Option<i32>>) {
		if let Some(ref cb) = *callback.borrow() {
			pending.set(window.request_animation_frame(cb.as_ref().unchecked_ref()).ok());
		}
	}

	/// Cancel the pending frame and free the callback.
	fn stop(&self, window: &Window) {
		if let Some(id) = self.release() {
			let _ = window.cancel_animation_frame(id);
		}
	}
}

/// A running particle field bound to a canvas.
pub struct Animator {
	state: Rc<RefCell<FieldState>>,
	running: Rc<Cell<bool>>,
	window: Window,
	listeners: Listeners,
	frame: FrameLoop,
}

impl Animator {
	/// Start animating on the canvas with the given element id.
	pub fn attach(
		canvas_id: &str,
		config: FieldConfig,
		scheme: ColorScheme,
	) -> Result<Self, InitError> {
		let canvas = web_sys::window()
			.ok_or(InitError::NoWindow)?
			.document()
			.and_then(|d| d.get_element_by_id(canvas_id))
			.and_then(|e| e.dyn_into::<HtmlCanvasElement>().ok())
			.ok_or(InitError::NoCanvas)?;
		Self::start(canvas, config, scheme)
	}

	/// Start animating on `canvas`, sized to its parent element.
	pub fn start(
		canvas: HtmlCanvasElement,
		config: FieldConfig,
		scheme: ColorScheme,
	) -> Result<Self, InitError> {
		let surface = Surface::acquire(canvas)?;
		let bounds = surface.fit()?;
		let seed = (js_sys::Math::random() * u64::MAX as f64) as u64;
		let state = FieldState::new(
			config,
			scheme,
			bounds,
			surface.viewport_width(),
			SmallRng::seed_from_u64(seed),
		);
		let particles = state.field.particles().len();

		let state = Rc::new(RefCell::new(state));
		let running = Rc::new(Cell::new(true));
		let frame = Self::start_loop(&surface, &state, &running);

		let mut animator = Self {
			state,
			running,
			window: surface.window.clone(),
			listeners: Listeners::new(),
			frame,
		};
		animator.listen(&surface);
		info!(
			"landing-fx: particle field started with {} particles on {}x{}, {} listeners",
			particles,
			bounds.width,
			bounds.height,
			animator.listeners.len()
		);
		Ok(animator)
	}

	fn start_loop(
		surface: &Surface,
		state: &Rc<RefCell<FieldState>>,
		running: &Rc<Cell<bool>>,
	) -> FrameLoop {
		let callback: FrameCallback = Rc::new(RefCell::new(None));
		let pending = Rc::new(Cell::new(None));
		let (frame_state, frame_running, frame_callback, frame_pending, frame_surface) = (
			state.clone(),
			running.clone(),
			callback.clone(),
			pending.clone(),
			surface.clone(),
		);

		*callback.borrow_mut() = Some(Closure::new(move || {
			frame_pending.set(None);
			if !frame_running.get() {
				return;
			}
			{
				let mut s = frame_state.borrow_mut();
				s.tick();
				render::render(&s, &frame_surface.ctx);
			}
			FrameLoop::request(&frame_surface.window, &frame_callback, &frame_pending);
		}));
		FrameLoop::request(&surface.window, &callback, &pending);
		FrameLoop { callback, pending }
	}

	fn listen(&mut self, surface: &Surface) {
		let window = surface.window.clone();

		let (state, s) = (self.state.clone(), surface.clone());
		self.listeners.add(&window, "mousemove", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			let (left, top) = s.origin();
			state
				.borrow_mut()
				.pointer_moved(ev.client_x() as f64, ev.client_y() as f64, left, top);
		});

		// Fires for every element boundary; only leaving the window counts.
		let state = self.state.clone();
		self.listeners.add(&window, "mouseout", move |ev| {
			let Some(ev) = ev.dyn_ref::<MouseEvent>() else {
				return;
			};
			if ev.related_target().is_none() {
				state.borrow_mut().pointer_left();
			}
		});

		let (state, s) = (self.state.clone(), surface.clone());
		self.listeners.add(&window, "touchmove", move |ev| {
			let Some(touch) = ev
				.dyn_ref::<TouchEvent>()
				.and_then(|ev| ev.touches().get(0))
			else {
				return;
			};
			let (left, top) = s.origin();
			state
				.borrow_mut()
				.pointer_moved(touch.client_x() as f64, touch.client_y() as f64, left, top);
		});

		let (state, timer_window) = (self.state.clone(), window.clone());
		self.listeners.add(&window, "touchend", move |_| {
			let state = state.clone();
			let clear = Closure::once_into_js(move || state.borrow_mut().pointer_left());
			let _ = timer_window.set_timeout_with_callback_and_timeout_and_arguments_0(
				clear.unchecked_ref(),
				TOUCH_LINGER_MS,
			);
		});

		let (state, s) = (self.state.clone(), surface.clone());
		self.listeners.add(&window, "resize", move |_| match s.fit() {
			Ok(bounds) => {
				let viewport_width = s.viewport_width();
				let mut state = state.borrow_mut();
				state.resize(bounds, viewport_width);
				info!(
					"landing-fx: surface resized to {}x{}, {} particles",
					bounds.width,
					bounds.height,
					state.field.particles().len()
				);
			}
			Err(e) => warn!("landing-fx: resize skipped: {}", e),
		});
	}

	/// Recolor the particles for `scheme`.
	pub fn set_scheme(&self, scheme: ColorScheme) {
		if self.state.borrow_mut().set_scheme(scheme) {
			info!("landing-fx: particle palette switched to {}", scheme);
		}
	}

	/// Replace the configuration and rebuild the field.
	pub fn reconfigure(&self, config: FieldConfig) {
		let viewport_width = viewport_width(&self.window);
		self.state.borrow_mut().field.reconfigure(config, viewport_width);
	}
}

impl Drop for Animator {
	fn drop(&mut self) {
		self.running.set(false);
		self.frame.stop(&self.window);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn release_breaks_the_self_reference() {
		let slot: Rc<RefCell<Option<Box<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
		let inner = slot.clone();
		*slot.borrow_mut() = Some(Box::new(move || {
			let _ = inner.borrow();
		}));
		let frame = FrameLoop {
			callback: slot.clone(),
			pending: Rc::new(Cell::new(Some(42))),
		};
		assert_eq!(Rc::strong_count(&slot), 3);

		assert_eq!(frame.release(), Some(42));
		assert_eq!(Rc::strong_count(&slot), 2);
		assert!(slot.borrow().is_none());
		assert_eq!(frame.release(), None);
	}
}
