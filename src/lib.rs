//! landing-fx: client-side behavior for the landing page.
//!
//! This crate mounts a WASM application that renders the animated particle
//! background behind the hero section, switches between light and dark color
//! schemes, keeps the sticky header in step with the scroll position, runs the
//! FAQ accordion and the exit-intent popup, and turns the contact form into a
//! WhatsApp conversation.

use leptos::prelude::*;
use leptos_meta::*;
use log::{Level, info, warn};
use serde::Deserialize;
use wasm_bindgen::JsCast;
use web_sys::{HtmlScriptElement, Window};

pub mod components;
pub mod faq;
pub mod lead;
mod listeners;
pub mod nav;
pub mod popup;
pub mod scheme;

pub use components::exit_popup::ExitPopup;
pub use components::faq::FaqAccordion;
pub use components::lead_form::LeadForm;
pub use components::particle_field::{Animator, FieldConfig, ParticleFieldCanvas};
pub use components::process::ProcessSteps;
pub use components::site_header::SiteHeader;
pub use components::theme_toggle::ThemeToggle;
pub use faq::FaqEntry;
pub use lead::Service;
pub use scheme::ColorScheme;

/// Site settings read from the page.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
	/// Particle background configuration.
	pub particles: FieldConfig,
	/// Number that receives leads, in any formatting.
	pub whatsapp_number: Option<String>,
	/// Questions for the FAQ section.
	pub faq: Vec<FaqEntry>,
}

impl Default for SiteConfig {
	fn default() -> Self {
		Self {
			particles: FieldConfig::default(),
			whatsapp_number: None,
			faq: faq::default_entries(),
		}
	}
}

impl SiteConfig {
	/// Parse the JSON settings blob.
	pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
		serde_json::from_str(json)
	}
}

/// Initialize logging and panic hooks for the WASM target.
pub fn init_logging() {
	let _ = console_log::init_with_level(Level::Debug);
	console_error_panic_hook::set_once();
	info!("landing-fx: logging initialized");
}

/// Load settings from a script element with id="site-config".
/// Expected format: JSON with { particles: {...}, whatsapp_number: "...", faq: [...] }
fn load_site_config() -> Option<SiteConfig> {
	let window: Window = web_sys::window()?;
	let document = window.document()?;
	let element = document.get_element_by_id("site-config")?;
	let script: HtmlScriptElement = element.dyn_into().ok()?;
	let json_text = script.text().ok()?;

	match SiteConfig::from_json(&json_text) {
		Ok(config) => {
			info!(
				"landing-fx: loaded site config ({} desktop / {} mobile particles)",
				config.particles.desktop.particle_count, config.particles.mobile.particle_count
			);
			Some(config)
		}
		Err(e) => {
			warn!("landing-fx: failed to parse site config: {}", e);
			None
		}
	}
}

/// Main application component.
/// Loads settings from the DOM and wires the scheme through every consumer.
#[component]
pub fn App() -> impl IntoView {
	provide_meta_context();

	let config = load_site_config().unwrap_or_default();
	if config.whatsapp_number.is_none() {
		warn!("landing-fx: no whatsapp_number configured, contact form will refuse leads");
	}

	let scheme = RwSignal::new(scheme::initial_scheme());
	Effect::new(move |_| scheme::apply_to_document(scheme.get()));

	let services = Service::ALL
		.into_iter()
		.map(|service| view! { <article class="service-card"><h3>{service.label()}</h3></article> })
		.collect_view();

	view! {
		<Html attr:lang="pt-BR" />
		<Meta charset="UTF-8" />
		<Meta name="viewport" content="width=device-width, initial-scale=1.0" />

		<SiteHeader scheme=scheme />
		<main>
			<section id="inicio" class="hero" style="position: relative;">
				<ParticleFieldCanvas scheme=scheme config=config.particles />
			</section>
			<section id="servicos" class="services">
				<div class="services-grid">{services}</div>
			</section>
			<section id="processo" class="process">
				<ProcessSteps />
			</section>
			<section id="faq" class="faq">
				<FaqAccordion entries=config.faq />
			</section>
			<section id="contato" class="contact">
				<LeadForm whatsapp_number=config.whatsapp_number.unwrap_or_default() />
			</section>
		</main>
		<ExitPopup />
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn empty_config_uses_defaults() {
		let config = SiteConfig::from_json("{}").unwrap();
		assert_eq!(config.particles, FieldConfig::default());
		assert_eq!(config.whatsapp_number, None);
		assert_eq!(config.faq, faq::default_entries());
	}

	#[test]
	fn config_replaces_faq() {
		let config = SiteConfig::from_json(
			r#"{ "faq": [{ "question": "Atendem fora de SC?", "answer": "Sim, em todo o Brasil." }] }"#,
		)
		.unwrap();
		assert_eq!(config.faq.len(), 1);
		assert_eq!(config.faq[0].question, "Atendem fora de SC?");
	}

	#[test]
	fn config_overrides_nested_fields() {
		let config = SiteConfig::from_json(
			r#"{
				"whatsapp_number": "+55 48 0000-0000",
				"particles": { "mobile_breakpoint": 600, "desktop": { "particle_count": 100 } }
			}"#,
		)
		.unwrap();
		assert_eq!(config.whatsapp_number.as_deref(), Some("+55 48 0000-0000"));
		assert_eq!(config.particles.mobile_breakpoint, 600.0);
		assert_eq!(config.particles.desktop.particle_count, 100);
		assert_eq!(config.particles.mobile.particle_count, 40);
	}

	#[test]
	fn malformed_config_is_an_error() {
		assert!(SiteConfig::from_json("{ particles: ").is_err());
	}
}
