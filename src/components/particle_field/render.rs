//! Canvas rendering for the particle field.
//!
//! Drawing happens in three passes so particles sit on top of their lines:
//! 1. Clear the surface, or fade it when the theme leaves trails
//! 2. Connection lines between nearby particles
//! 3. Particles as filled circles

use std::f64::consts::PI;

use web_sys::CanvasRenderingContext2d;

use super::particles::ParticleField;
use super::state::FieldState;
use super::theme::FieldTheme;

/// Renders one frame to the canvas.
pub fn render(state: &FieldState, ctx: &CanvasRenderingContext2d) {
	draw_background(&state.field, ctx, &state.theme);
	draw_connections(&state.field, ctx, &state.theme);
	draw_particles(&state.field, ctx, &state.theme);
}

fn draw_background(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	let bounds = field.bounds();
	match theme.trail {
		Some(fade) => {
			ctx.set_fill_style_str(&fade.to_css());
			ctx.fill_rect(0.0, 0.0, bounds.width, bounds.height);
		}
		None => ctx.clear_rect(0.0, 0.0, bounds.width, bounds.height),
	}
}

fn draw_connections(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	let particles = field.particles();
	let link = &theme.link;
	ctx.set_line_width(link.width);

	for c in field.connections() {
		let (a, b) = (&particles[c.a], &particles[c.b]);
		ctx.set_stroke_style_str(&link.color.with_alpha(link.color.a * c.opacity).to_css());
		ctx.begin_path();
		ctx.move_to(a.x, a.y);
		ctx.line_to(b.x, b.y);
		ctx.stroke();
	}
}

fn draw_particles(field: &ParticleField, ctx: &CanvasRenderingContext2d, theme: &FieldTheme) {
	ctx.set_global_alpha(theme.particle_alpha);
	for p in field.particles() {
		ctx.set_fill_style_str(&p.color.to_css());
		ctx.begin_path();
		let _ = ctx.arc(p.x, p.y, p.radius, 0.0, PI * 2.0);
		ctx.fill();
	}
	ctx.set_global_alpha(1.0);
}
