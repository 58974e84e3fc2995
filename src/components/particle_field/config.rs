//! Configuration for the particle field.
//!
//! Everything the animator needs to know is carried in one explicit
//! [`FieldConfig`] value, handed over at construction and again on every
//! reconfiguration.
//!
//! # Viewport profiles
//!
//! Particle count and the two interaction distances depend on how wide the
//! viewport is, so that a phone gets a sparser field with shorter reach and the
//! visual density stays comparable across screen sizes:
//!
//! - [`FieldConfig::mobile`] applies when the viewport is narrower than
//!   [`FieldConfig::mobile_breakpoint`].
//! - [`FieldConfig::desktop`] applies otherwise.
//!
//! All structs deserialize with per-field defaults, so a partial JSON object
//! overrides only what it names.

use serde::Deserialize;

/// Size-dependent parameters selected by viewport width.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ViewportProfile {
	/// Number of particles in the field.
	pub particle_count: usize,
	/// Distance within which the pointer pushes particles away.
	pub influence_radius: f64,
	/// Maximum distance between two particles that still draws a line.
	pub connection_distance: f64,
}

impl ViewportProfile {
	/// Sparser field for narrow viewports.
	pub fn mobile() -> Self {
		Self {
			particle_count: 40,
			influence_radius: 60.0,
			connection_distance: 90.0,
		}
	}

	/// Default field for wide viewports.
	pub fn desktop() -> Self {
		Self {
			particle_count: 80,
			influence_radius: 120.0,
			connection_distance: 120.0,
		}
	}
}

impl Default for ViewportProfile {
	fn default() -> Self {
		Self::desktop()
	}
}

/// Motion constants. Velocities are in pixels per frame.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Physics {
	/// Initial velocity per axis is drawn from `[-initial_speed, initial_speed]`.
	pub initial_speed: f64,
	/// Smallest original particle radius.
	pub size_min: f64,
	/// Largest original particle radius.
	pub size_max: f64,
	/// Amplitude of the sinusoidal drift added to each step.
	pub drift: f64,
	/// Phase advance per frame.
	pub phase_step: f64,
	/// Fraction of speed kept after bouncing off an edge.
	pub bounce_damping: f64,
	/// Scale of the pointer repulsion.
	pub push: f64,
	/// Displacement from the base position beyond which the anchor pulls back.
	pub restore_threshold: f64,
	/// Fraction of the displacement added to velocity while pulling back.
	pub restore_strength: f64,
	/// Per-frame velocity decay, below 1.
	pub damping: f64,
	/// Radius change per frame, as a fraction of the original radius.
	pub pulse_step: f64,
}

impl Default for Physics {
	fn default() -> Self {
		Self {
			initial_speed: 0.5,
			size_min: 1.0,
			size_max: 4.0,
			drift: 0.05,
			phase_step: 0.02,
			bounce_damping: 0.8,
			push: 0.6,
			restore_threshold: 40.0,
			restore_strength: 0.01,
			damping: 0.96,
			pulse_step: 0.01,
		}
	}
}

/// Complete animator configuration.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
	/// Viewports narrower than this use the mobile profile.
	pub mobile_breakpoint: f64,
	/// Profile below the breakpoint.
	pub mobile: ViewportProfile,
	/// Profile at or above the breakpoint.
	pub desktop: ViewportProfile,
	/// Motion constants shared by both profiles.
	pub physics: Physics,
	/// When set, frames fade into the background with this alpha instead of
	/// being cleared, leaving trails.
	pub trail_fade: Option<f64>,
}

impl Default for FieldConfig {
	fn default() -> Self {
		Self {
			mobile_breakpoint: 768.0,
			mobile: ViewportProfile::mobile(),
			desktop: ViewportProfile::desktop(),
			physics: Physics::default(),
			trail_fade: None,
		}
	}
}

impl FieldConfig {
	/// Whether a viewport of this width counts as mobile.
	pub fn is_mobile(&self, viewport_width: f64) -> bool {
		viewport_width < self.mobile_breakpoint
	}

	/// Profile in effect for a viewport of this width.
	pub fn profile_for(&self, viewport_width: f64) -> &ViewportProfile {
		if self.is_mobile(viewport_width) {
			&self.mobile
		} else {
			&self.desktop
		}
	}

	/// Same profile on every viewport. Handy for fixed-size embeds.
	pub fn uniform(profile: ViewportProfile) -> Self {
		Self {
			mobile: profile.clone(),
			desktop: profile,
			..Self::default()
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn breakpoint_selects_profile() {
		let config = FieldConfig::default();
		assert_eq!(config.profile_for(767.0).particle_count, 40);
		assert_eq!(config.profile_for(768.0).particle_count, 80);
		assert_eq!(config.profile_for(1440.0).influence_radius, 120.0);
		assert_eq!(config.profile_for(320.0).influence_radius, 60.0);
	}

	#[test]
	fn partial_json_keeps_defaults() {
		let config: FieldConfig = serde_json::from_str(
			r#"{ "mobile": { "particle_count": 30 }, "physics": { "push": 1.0 } }"#,
		)
		.unwrap();
		assert_eq!(config.mobile.particle_count, 30);
		assert_eq!(config.mobile.influence_radius, ViewportProfile::desktop().influence_radius);
		assert_eq!(config.desktop, ViewportProfile::desktop());
		assert_eq!(config.physics.push, 1.0);
		assert_eq!(config.physics.damping, 0.96);
		assert_eq!(config.mobile_breakpoint, 768.0);
	}

	#[test]
	fn uniform_ignores_viewport() {
		let config = FieldConfig::uniform(ViewportProfile {
			particle_count: 10,
			..ViewportProfile::desktop()
		});
		assert_eq!(config.profile_for(100.0).particle_count, 10);
		assert_eq!(config.profile_for(2000.0).particle_count, 10);
	}
}
