//! The particle field: a fixed-size set of drifting points.
//!
//! Particles are plain records in a `Vec`; the motion rules are free functions
//! applied to each record in turn every frame. The field never adds or removes
//! single particles. Resizing or reconfiguring rebuilds the whole collection,
//! while a theme change only recolors it.

use std::f64::consts::TAU;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::config::{FieldConfig, Physics, ViewportProfile};
use super::theme::{Color, Palette};

/// Smallest pulse radius, relative to a particle's original radius.
pub const PULSE_MIN: f64 = 0.7;
/// Largest pulse radius, relative to a particle's original radius.
pub const PULSE_MAX: f64 = 1.5;

/// Surface dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
	/// Surface width.
	pub width: f64,
	/// Surface height.
	pub height: f64,
}

impl Bounds {
	/// Bounds of the given size; negative sizes collapse to zero.
	pub fn new(width: f64, height: f64) -> Self {
		Self {
			width: width.max(0.0),
			height: height.max(0.0),
		}
	}

	/// Whether the point lies on or inside the edges.
	pub fn contains(&self, x: f64, y: f64) -> bool {
		(0.0..=self.width).contains(&x) && (0.0..=self.height).contains(&y)
	}
}

/// Pointer position in surface coordinates and its reach.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pointer {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Influence radius; particles farther away are not pushed.
	pub radius: f64,
}

/// A single point in the field.
#[derive(Clone, Debug)]
pub struct Particle {
	/// Horizontal position.
	pub x: f64,
	/// Vertical position.
	pub y: f64,
	/// Anchor the particle drifts back towards.
	pub base_x: f64,
	/// Vertical anchor.
	pub base_y: f64,
	/// Horizontal velocity in pixels per frame.
	pub vx: f64,
	/// Vertical velocity in pixels per frame.
	pub vy: f64,
	/// Current, pulsing radius.
	pub radius: f64,
	/// Radius at spawn; the pulse range is relative to it.
	pub original_radius: f64,
	/// +1.0 while growing, -1.0 while shrinking.
	pub pulse_dir: f64,
	/// Fill color from the active palette.
	pub color: Color,
	/// Drift phase angle in radians.
	pub phase: f64,
}

impl Particle {
	fn spawn(rng: &mut SmallRng, bounds: Bounds, physics: &Physics, palette: &Palette) -> Self {
		let x = rng.r#gen::<f64>() * bounds.width;
		let y = rng.r#gen::<f64>() * bounds.height;
		let speed = physics.initial_speed;
		let radius = physics.size_min + rng.r#gen::<f64>() * (physics.size_max - physics.size_min);

		Self {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: (rng.r#gen::<f64>() * 2.0 - 1.0) * speed,
			vy: (rng.r#gen::<f64>() * 2.0 - 1.0) * speed,
			radius,
			original_radius: radius,
			pulse_dir: 1.0,
			color: pick_color(rng, palette),
			phase: rng.r#gen::<f64>() * TAU,
		}
	}
}

fn pick_color(rng: &mut SmallRng, palette: &Palette) -> Color {
	if palette.is_empty() {
		return palette.get(0);
	}
	palette.get(rng.gen_range(0..palette.len()))
}

/// Move by velocity plus a small sinusoidal drift, then advance the phase.
pub fn integrate(p: &mut Particle, physics: &Physics) {
	p.x += p.vx + p.phase.cos() * physics.drift;
	p.y += p.vy + p.phase.sin() * physics.drift;
	p.phase = (p.phase + physics.phase_step) % TAU;
}

/// Bounce off the surface edges, losing some speed, and clamp back inside.
///
/// After a bounce the velocity component always points back into the
/// surface, so drift pushing outward cannot turn an inward velocity around.
pub fn reflect(p: &mut Particle, bounds: Bounds, physics: &Physics) {
	let damping = physics.bounce_damping;
	if p.x < 0.0 {
		p.vx = p.vx.abs() * damping;
		p.x = 0.0;
	} else if p.x > bounds.width {
		p.vx = -p.vx.abs() * damping;
		p.x = bounds.width;
	}
	if p.y < 0.0 {
		p.vy = p.vy.abs() * damping;
		p.y = 0.0;
	} else if p.y > bounds.height {
		p.vy = -p.vy.abs() * damping;
		p.y = bounds.height;
	}
}

/// Push the particle away from the pointer when it is within reach.
///
/// Without a pointer this does nothing at all. A particle sitting exactly on
/// the pointer has no direction to be pushed in and is left alone.
pub fn repel(p: &mut Particle, pointer: Option<&Pointer>, physics: &Physics) {
	let Some(pointer) = pointer else {
		return;
	};
	let (dx, dy) = (p.x - pointer.x, p.y - pointer.y);
	let distance = (dx * dx + dy * dy).sqrt();
	if distance <= f64::EPSILON || distance >= pointer.radius {
		return;
	}
	let force = (pointer.radius - distance) / pointer.radius;
	p.vx += dx / distance * force * physics.push;
	p.vy += dy / distance * force * physics.push;
}

/// Pull towards the base position once the particle wandered too far.
pub fn restore(p: &mut Particle, physics: &Physics) {
	let (dx, dy) = (p.base_x - p.x, p.base_y - p.y);
	if (dx * dx + dy * dy).sqrt() <= physics.restore_threshold {
		return;
	}
	p.vx += dx * physics.restore_strength;
	p.vy += dy * physics.restore_strength;
}

/// Velocity decay, applied every frame.
pub fn damp(p: &mut Particle, physics: &Physics) {
	p.vx *= physics.damping;
	p.vy *= physics.damping;
}

/// Grow or shrink the radius, turning around at the pulse bounds.
pub fn pulse(p: &mut Particle, physics: &Physics) {
	let (min, max) = (p.original_radius * PULSE_MIN, p.original_radius * PULSE_MAX);
	p.radius += p.pulse_dir * physics.pulse_step * p.original_radius;
	if p.radius >= max {
		p.radius = max;
		p.pulse_dir = -1.0;
	} else if p.radius <= min {
		p.radius = min;
		p.pulse_dir = 1.0;
	}
}

/// A line to draw between two particles.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Connection {
	/// Index of the first particle.
	pub a: usize,
	/// Index of the second particle, always above `a`.
	pub b: usize,
	/// Distance between the two.
	pub distance: f64,
	/// `1 - distance / connection_distance`, in `(0, 1]`.
	pub opacity: f64,
}

/// Owns the particles and everything needed to rebuild them.
pub struct ParticleField {
	particles: Vec<Particle>,
	config: FieldConfig,
	profile: ViewportProfile,
	palette: Palette,
	bounds: Bounds,
	rng: SmallRng,
}

impl ParticleField {
	/// Build a field sized for `viewport_width` and fill it.
	pub fn new(
		config: FieldConfig,
		palette: Palette,
		bounds: Bounds,
		viewport_width: f64,
		rng: SmallRng,
	) -> Self {
		let profile = config.profile_for(viewport_width).clone();
		let mut field = Self {
			particles: Vec::new(),
			config,
			profile,
			palette,
			bounds,
			rng,
		};
		field.rebuild();
		field
	}

	/// Build a field seeded with a fixed value, for reproducible layouts.
	pub fn seeded(
		config: FieldConfig,
		palette: Palette,
		bounds: Bounds,
		viewport_width: f64,
		seed: u64,
	) -> Self {
		Self::new(config, palette, bounds, viewport_width, SmallRng::seed_from_u64(seed))
	}

	/// Current particles.
	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	/// Surface the particles live in.
	pub fn bounds(&self) -> Bounds {
		self.bounds
	}

	/// Profile in effect.
	pub fn profile(&self) -> &ViewportProfile {
		&self.profile
	}

	/// Full configuration.
	pub fn config(&self) -> &FieldConfig {
		&self.config
	}

	/// Palette new particles are colored from.
	pub fn palette(&self) -> &Palette {
		&self.palette
	}

	/// Replace the whole collection with fresh particles at the target count.
	pub fn rebuild(&mut self) {
		let count = self.profile.particle_count;
		let physics = &self.config.physics;
		self.particles.clear();
		self.particles.reserve(count);
		for _ in 0..count {
			let particle = Particle::spawn(&mut self.rng, self.bounds, physics, &self.palette);
			self.particles.push(particle);
		}
	}

	/// Advance every particle by one frame.
	pub fn tick(&mut self, pointer: Option<Pointer>) {
		let physics = &self.config.physics;
		for p in &mut self.particles {
			integrate(p, physics);
			reflect(p, self.bounds, physics);
			repel(p, pointer.as_ref(), physics);
			restore(p, physics);
			damp(p, physics);
			pulse(p, physics);
		}
	}

	/// Every unordered pair closer than the connection distance.
	pub fn connections(&self) -> impl Iterator<Item = Connection> + '_ {
		let threshold = self.profile.connection_distance;
		let particles = &self.particles;
		(0..particles.len()).flat_map(move |a| {
			(a + 1..particles.len()).filter_map(move |b| {
				let (pa, pb) = (&particles[a], &particles[b]);
				let (dx, dy) = (pa.x - pb.x, pa.y - pb.y);
				let distance = (dx * dx + dy * dy).sqrt();
				(distance < threshold).then(|| Connection {
					a,
					b,
					distance,
					opacity: 1.0 - distance / threshold,
				})
			})
		})
	}

	/// Adopt new surface bounds and rebuild for the new viewport width.
	pub fn resize(&mut self, bounds: Bounds, viewport_width: f64) {
		self.bounds = bounds;
		self.profile = self.config.profile_for(viewport_width).clone();
		self.rebuild();
	}

	/// Swap the palette and recolor in place. Motion state is untouched.
	pub fn recolor(&mut self, palette: Palette) {
		self.palette = palette;
		for p in &mut self.particles {
			p.color = pick_color(&mut self.rng, &self.palette);
		}
	}

	/// Apply a new configuration and rebuild.
	pub fn reconfigure(&mut self, config: FieldConfig, viewport_width: f64) {
		self.profile = config.profile_for(viewport_width).clone();
		self.config = config;
		self.rebuild();
	}

	#[cfg(test)]
	fn particles_mut(&mut self) -> &mut Vec<Particle> {
		&mut self.particles
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn field_with(count: usize, width: f64, height: f64) -> ParticleField {
		let config = FieldConfig::uniform(ViewportProfile {
			particle_count: count,
			..ViewportProfile::desktop()
		});
		ParticleField::seeded(config, Palette::day(), Bounds::new(width, height), 1024.0, 7)
	}

	fn still_particle(x: f64, y: f64) -> Particle {
		Particle {
			x,
			y,
			base_x: x,
			base_y: y,
			vx: 0.0,
			vy: 0.0,
			radius: 2.0,
			original_radius: 2.0,
			pulse_dir: 1.0,
			color: Color::rgb(0, 0, 0),
			phase: 0.0,
		}
	}

	#[test]
	fn stays_in_bounds_under_pointer_pressure() {
		let mut field = field_with(60, 200.0, 150.0);
		for frame in 0..2000 {
			let pointer = (frame % 3 != 0).then_some(Pointer {
				x: (frame % 200) as f64,
				y: 75.0,
				radius: 120.0,
			});
			field.tick(pointer);
			for p in field.particles() {
				assert!(field.bounds().contains(p.x, p.y), "escaped at ({}, {})", p.x, p.y);
			}
		}
	}

	#[test]
	fn reflection_inverts_and_damps() {
		let physics = Physics::default();
		let mut p = still_particle(-3.0, 50.0);
		p.vx = -2.0;
		reflect(&mut p, Bounds::new(100.0, 100.0), &physics);
		assert_eq!(p.x, 0.0);
		assert!((p.vx - 2.0 * physics.bounce_damping).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);
	}

	#[test]
	fn bounce_keeps_inward_velocity_against_outward_drift() {
		let physics = Physics::default();
		let mut p = still_particle(-0.04, 50.0);
		p.vx = 0.01;
		reflect(&mut p, Bounds::new(100.0, 100.0), &physics);
		assert_eq!(p.x, 0.0);
		assert!((p.vx - 0.01 * physics.bounce_damping).abs() < 1e-12);

		let mut p = still_particle(100.5, 100.2);
		p.vx = -0.3;
		p.vy = 0.4;
		reflect(&mut p, Bounds::new(100.0, 100.0), &physics);
		assert_eq!((p.x, p.y), (100.0, 100.0));
		assert!(p.vx < 0.0);
		assert!(p.vy < 0.0);
	}

	#[test]
	fn slow_particle_at_edge_never_points_outward() {
		let mut field = field_with(1, 200.0, 200.0);
		let mut p = still_particle(0.0, 100.0);
		p.vx = 0.01;
		p.phase = std::f64::consts::PI;
		field.particles_mut()[0] = p;
		for _ in 0..60 {
			field.tick(None);
			let p = &field.particles()[0];
			assert!(p.vx >= 0.0, "velocity turned outward: {}", p.vx);
			assert!(p.x >= 0.0);
		}
	}

	#[test]
	fn pulse_stays_within_range() {
		let mut field = field_with(20, 300.0, 300.0);
		for _ in 0..500 {
			field.tick(None);
			for p in field.particles() {
				assert!(p.radius >= p.original_radius * PULSE_MIN - 1e-9);
				assert!(p.radius <= p.original_radius * PULSE_MAX + 1e-9);
			}
		}
	}

	#[test]
	fn pulse_turns_around_at_the_top() {
		let physics = Physics {
			pulse_step: 0.3,
			..Physics::default()
		};
		let mut p = still_particle(0.0, 0.0);
		p.radius = 2.9;
		pulse(&mut p, &physics);
		assert_eq!(p.radius, 3.0);
		assert_eq!(p.pulse_dir, -1.0);
	}

	#[test]
	fn absent_pointer_applies_no_force() {
		let physics = Physics::default();
		let mut p = still_particle(10.0, 10.0);
		p.vx = 0.123;
		p.vy = -0.456;
		repel(&mut p, None, &physics);
		assert_eq!((p.vx, p.vy), (0.123, -0.456));
	}

	#[test]
	fn pointer_pushes_away_proportionally() {
		let physics = Physics::default();
		let pointer = Pointer {
			x: 0.0,
			y: 0.0,
			radius: 100.0,
		};
		let mut p = still_particle(25.0, 0.0);
		repel(&mut p, Some(&pointer), &physics);
		assert!((p.vx - 0.75 * physics.push).abs() < 1e-12);
		assert_eq!(p.vy, 0.0);

		let mut outside = still_particle(100.0, 0.0);
		repel(&mut outside, Some(&pointer), &physics);
		assert_eq!(outside.vx, 0.0);

		let mut centered = still_particle(0.0, 0.0);
		repel(&mut centered, Some(&pointer), &physics);
		assert_eq!((centered.vx, centered.vy), (0.0, 0.0));
	}

	#[test]
	fn restore_only_beyond_threshold() {
		let physics = Physics::default();
		let mut near = still_particle(10.0, 10.0);
		near.x += physics.restore_threshold * 0.5;
		restore(&mut near, &physics);
		assert_eq!(near.vx, 0.0);

		let mut far = still_particle(10.0, 10.0);
		far.x += physics.restore_threshold * 2.0;
		restore(&mut far, &physics);
		assert!(far.vx < 0.0);
		assert_eq!(far.vy, 0.0);
	}

	#[test]
	fn damping_bounds_speed() {
		let mut field = field_with(10, 400.0, 300.0);
		for p in field.particles_mut() {
			p.vx = 50.0;
			p.vy = -50.0;
		}
		for _ in 0..300 {
			field.tick(None);
		}
		for p in field.particles() {
			assert!(p.vx.abs() < 5.0 && p.vy.abs() < 5.0);
		}
	}

	#[test]
	fn connection_opacity_is_linear_in_distance() {
		let mut field = field_with(3, 500.0, 500.0);
		let threshold = field.profile().connection_distance;
		let particles = field.particles_mut();
		particles[0] = still_particle(100.0, 100.0);
		particles[1] = still_particle(130.0, 140.0);
		particles[2] = still_particle(100.0, 100.0 - threshold);

		let connections: Vec<_> = field.connections().collect();
		assert_eq!(connections.len(), 1);
		let c = connections[0];
		assert_eq!((c.a, c.b), (0, 1));
		assert!((c.distance - 50.0).abs() < 1e-9);
		assert!((c.opacity - (1.0 - 50.0 / threshold)).abs() < 1e-9);
	}

	#[test]
	fn resize_across_breakpoint_rebuilds_at_profile_count() {
		let mut field = ParticleField::seeded(
			FieldConfig::default(),
			Palette::night(),
			Bounds::new(1280.0, 720.0),
			1280.0,
			3,
		);
		assert_eq!(field.particles().len(), 80);

		field.resize(Bounds::new(767.0, 600.0), 767.0);
		assert_eq!(field.particles().len(), 40);
		assert_eq!(field.profile().influence_radius, 60.0);
		assert!(field.particles().iter().all(|p| p.x <= 767.0));

		field.resize(Bounds::new(1024.0, 600.0), 1024.0);
		assert_eq!(field.particles().len(), 80);
	}

	#[test]
	fn recolor_keeps_motion_state() {
		let mut field = field_with(30, 400.0, 300.0);
		for _ in 0..10 {
			field.tick(None);
		}
		let before: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.x, p.y, p.vx, p.vy))
			.collect();

		field.recolor(Palette::night());

		let after: Vec<_> = field
			.particles()
			.iter()
			.map(|p| (p.x, p.y, p.vx, p.vy))
			.collect();
		assert_eq!(before, after);
		let night = Palette::night();
		assert!(field.particles().iter().all(|p| night.colors.contains(&p.color)));
	}

	#[test]
	fn reconfigure_rebuilds() {
		let mut field = field_with(10, 400.0, 300.0);
		let config = FieldConfig::uniform(ViewportProfile {
			particle_count: 25,
			..ViewportProfile::mobile()
		});
		field.reconfigure(config, 1024.0);
		assert_eq!(field.particles().len(), 25);
		assert_eq!(field.profile().connection_distance, 90.0);
	}

	#[test]
	fn zero_sized_surface_is_harmless() {
		let mut field = field_with(5, 0.0, 0.0);
		for _ in 0..10 {
			field.tick(None);
		}
		assert!(field.particles().iter().all(|p| p.x == 0.0 && p.y == 0.0));
	}

	#[test]
	fn hundred_ticks_on_small_surface() {
		let mut field = field_with(10, 400.0, 300.0);
		assert_eq!(field.particles().len(), 10);
		for _ in 0..100 {
			field.tick(None);
		}
		assert_eq!(field.particles().len(), 10);
		for p in field.particles() {
			assert!(p.x.is_finite() && p.y.is_finite());
			assert!(field.bounds().contains(p.x, p.y));
		}
	}
}
