//! Animated particle background.
//!
//! Renders a field of drifting colored points on an HTML canvas with:
//! - Soft drift, edge reflection and a loose pull back to each point's anchor
//! - Pointer and touch repulsion within an influence radius
//! - Lines between nearby points, fading out with distance
//! - Particle count and reach adapted to the viewport width
//! - Palettes following the site's light/dark scheme
//!
//! # Example
//!
//! ```ignore
//! use landing_fx::components::particle_field::ParticleFieldCanvas;
//!
//! let scheme = RwSignal::new(ColorScheme::Dark);
//! view! {
//!     <section class="hero">
//!         <ParticleFieldCanvas scheme=scheme />
//!     </section>
//! }
//! ```
//!
//! Static pages without a Leptos tree can use [`Animator::attach`] with the id
//! of an existing canvas instead.

mod animator;
mod component;
pub mod config;
mod error;
pub mod particles;
mod render;
mod state;
pub mod theme;

pub use animator::Animator;
pub use component::ParticleFieldCanvas;
pub use config::{FieldConfig, Physics, ViewportProfile};
pub use error::InitError;
pub use particles::{Bounds, Connection, Particle, ParticleField, Pointer};
pub use state::{FieldState, PointerState};
pub use theme::{Color, FieldTheme, Palette};
