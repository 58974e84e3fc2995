//! Animator state shared by the frame loop and the input listeners.
//!
//! Wraps the [`ParticleField`] with the pointer position and the active theme.
//! Listeners only ever touch this between frames, so plain `&mut` access
//! through a `RefCell` is enough.

use rand::rngs::SmallRng;

use crate::scheme::ColorScheme;

use super::config::FieldConfig;
use super::particles::{Bounds, ParticleField, Pointer};
use super::theme::FieldTheme;

/// Where the pointer is, if it is over the surface at all.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
	/// Surface-local position, `None` when absent.
	pub position: Option<(f64, f64)>,
}

impl PointerState {
	/// Record a surface-local position. Positions outside the surface clear
	/// the state.
	pub fn update(&mut self, x: f64, y: f64, bounds: Bounds) {
		self.position = bounds.contains(x, y).then_some((x, y));
	}

	/// Forget the pointer.
	pub fn clear(&mut self) {
		self.position = None;
	}

	/// The pointer as seen by the physics, with the given reach.
	pub fn with_radius(&self, radius: f64) -> Option<Pointer> {
		self.position.map(|(x, y)| Pointer { x, y, radius })
	}
}

/// Everything the animator mutates.
pub struct FieldState {
	/// The particles.
	pub field: ParticleField,
	/// Pointer or touch over the surface.
	pub pointer: PointerState,
	/// Active visual theme.
	pub theme: FieldTheme,
	/// Frames advanced since start, for diagnostics.
	pub frames: u64,
}

impl FieldState {
	/// Fresh state for a surface of `bounds`.
	pub fn new(
		config: FieldConfig,
		scheme: ColorScheme,
		bounds: Bounds,
		viewport_width: f64,
		rng: SmallRng,
	) -> Self {
		let theme = FieldTheme::for_scheme(scheme).with_trail(config.trail_fade);
		Self {
			field: ParticleField::new(config, theme.palette.clone(), bounds, viewport_width, rng),
			pointer: PointerState::default(),
			theme,
			frames: 0,
		}
	}

	/// Current pointer with the active profile's influence radius.
	pub fn pointer(&self) -> Option<Pointer> {
		self.pointer.with_radius(self.field.profile().influence_radius)
	}

	/// Advance one frame.
	pub fn tick(&mut self) {
		let pointer = self.pointer();
		self.field.tick(pointer);
		self.frames += 1;
	}

	/// Surface-local pointer position from client coordinates and the
	/// surface's top-left corner.
	pub fn pointer_moved(&mut self, client_x: f64, client_y: f64, left: f64, top: f64) {
		let bounds = self.field.bounds();
		self.pointer.update(client_x - left, client_y - top, bounds);
	}

	/// The pointer left the window or the touch ended.
	pub fn pointer_left(&mut self) {
		self.pointer.clear();
	}

	/// Adopt new surface bounds and rebuild.
	pub fn resize(&mut self, bounds: Bounds, viewport_width: f64) {
		self.field.resize(bounds, viewport_width);
		self.pointer.clear();
	}

	/// Switch to the theme for `scheme`. Returns `false` when nothing changed.
	pub fn set_scheme(&mut self, scheme: ColorScheme) -> bool {
		if self.theme.scheme == scheme {
			return false;
		}
		self.theme = FieldTheme::for_scheme(scheme).with_trail(self.field.config().trail_fade);
		self.field.recolor(self.theme.palette.clone());
		true
	}
}
