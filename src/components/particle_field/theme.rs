//! Visual theming for the particle field.
//!
//! Each [`ColorScheme`] maps to a [`FieldTheme`]: the palette particles are
//! colored from, plus the style of connection lines and the background fade.

use crate::scheme::ColorScheme;

/// RGBA color representation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
	/// Red.
	pub r: u8,
	/// Green.
	pub g: u8,
	/// Blue.
	pub b: u8,
	/// Alpha in `[0, 1]`.
	pub a: f64,
}

impl Color {
	/// Opaque color.
	pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b, a: 1.0 }
	}

	/// Color with explicit alpha.
	pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
		Self { r, g, b, a }
	}

	/// Same color at another alpha.
	pub fn with_alpha(self, a: f64) -> Self {
		Self { a, ..self }
	}

	/// CSS color string, hex when opaque.
	pub fn to_css(self) -> String {
		if (self.a - 1.0).abs() < 0.001 {
			format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
		} else {
			format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
		}
	}
}

/// Colors particles are sampled from.
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
	/// Palette entries.
	pub colors: Vec<Color>,
}

impl Palette {
	/// Brand colors readable on the dark background.
	pub fn night() -> Self {
		Self {
			colors: vec![
				Color::rgb(242, 48, 120), // Pink
				Color::rgb(207, 243, 5),  // Lime
				Color::rgb(245, 247, 255), // Ice
			],
		}
	}

	/// Brand colors readable on the light background.
	pub fn day() -> Self {
		Self {
			colors: vec![
				Color::rgb(242, 48, 120), // Pink
				Color::rgb(5, 18, 89),    // Navy
				Color::rgb(122, 140, 0),  // Olive
			],
		}
	}

	/// Number of colors.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	/// Whether the palette has no colors.
	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Color at `index`, wrapping around. An empty palette yields white.
	pub fn get(&self, index: usize) -> Color {
		if self.colors.is_empty() {
			return Color::rgb(255, 255, 255);
		}
		self.colors[index % self.colors.len()]
	}
}

/// Connection line style.
#[derive(Clone, Debug)]
pub struct LinkStyle {
	/// Base line color; its alpha is multiplied by the per-pair opacity.
	pub color: Color,
	/// Stroke width in pixels.
	pub width: f64,
}

/// Complete visual theme of the particle field.
#[derive(Clone, Debug)]
pub struct FieldTheme {
	/// Scheme this theme belongs to.
	pub scheme: ColorScheme,
	/// Page background behind the canvas, used for trail fading.
	pub background: Color,
	/// Colors particles are drawn in.
	pub palette: Palette,
	/// Connection line style.
	pub link: LinkStyle,
	/// Opacity particles are filled with.
	pub particle_alpha: f64,
	/// When set, each frame paints this over the previous one instead of
	/// clearing, leaving short trails behind moving particles.
	pub trail: Option<Color>,
}

impl FieldTheme {
	/// Theme for the dark scheme.
	pub fn night() -> Self {
		Self {
			scheme: ColorScheme::Dark,
			background: Color::rgb(5, 10, 46),
			palette: Palette::night(),
			link: LinkStyle {
				color: Color::rgba(255, 255, 255, 0.3),
				width: 0.6,
			},
			particle_alpha: 0.8,
			trail: None,
		}
	}

	/// Theme for the light scheme.
	pub fn day() -> Self {
		Self {
			scheme: ColorScheme::Light,
			background: Color::rgb(245, 247, 255),
			palette: Palette::day(),
			link: LinkStyle {
				color: Color::rgba(5, 18, 89, 0.25),
				width: 0.6,
			},
			particle_alpha: 0.8,
			trail: None,
		}
	}

	/// Theme for `scheme`.
	pub fn for_scheme(scheme: ColorScheme) -> Self {
		match scheme {
			ColorScheme::Dark => Self::night(),
			ColorScheme::Light => Self::day(),
		}
	}

	/// Fade previous frames with the background at `alpha` instead of clearing.
	pub fn with_trail(self, alpha: Option<f64>) -> Self {
		let trail = alpha.map(|a| self.background.with_alpha(a.clamp(0.0, 1.0)));
		Self { trail, ..self }
	}
}

impl Default for FieldTheme {
	fn default() -> Self {
		Self::day()
	}
}
