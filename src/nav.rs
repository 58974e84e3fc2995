//! Sticky header state derived from the scroll position.
//!
//! The header turns compact once the page has scrolled a little, and the nav
//! link of the section currently under the header is highlighted. Both are
//! recomputed on every `scroll` and `resize`. The process timeline uses the
//! same measurements to mark the step in the middle of the viewport.

use log::debug;
use wasm_bindgen::JsCast;
use web_sys::{HtmlElement, Window};

use crate::scheme::ColorScheme;

/// Scroll offset past which the header switches to its compact style.
pub const SCROLLED_OFFSET: f64 = 50.0;

/// How far below the top of the viewport a section counts as current.
pub const ACTIVE_OFFSET: f64 = 100.0;

/// A page section a nav link points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
	/// Element id of the section, without `#`.
	pub id: &'static str,
	/// Link text.
	pub label: &'static str,
}

/// Sections of the landing page, in page order.
pub const NAV_ITEMS: [NavItem; 5] = [
	NavItem {
		id: "inicio",
		label: "Início",
	},
	NavItem {
		id: "servicos",
		label: "Serviços",
	},
	NavItem {
		id: "processo",
		label: "Processo",
	},
	NavItem {
		id: "faq",
		label: "FAQ",
	},
	NavItem {
		id: "contato",
		label: "Contato",
	},
];

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionExtent<'a> {
	/// Element id.
	pub id: &'a str,
	/// Offset from the top of the document.
	pub top: f64,
	/// Rendered height.
	pub height: f64,
}

/// Header logo for the scheme and header style.
pub fn header_logo(scheme: ColorScheme, scrolled: bool) -> &'static str {
	match (scheme, scrolled) {
		(_, false) => "images/logo-blue-pink.webp",
		(ColorScheme::Light, true) => "images/logo-white-pink.webp",
		(ColorScheme::Dark, true) => "images/logo-yellow-pink.webp",
	}
}

/// Whether the header should use its scrolled style.
pub fn is_scrolled(scroll_y: f64) -> bool {
	scroll_y > SCROLLED_OFFSET
}

/// Id of the section to highlight for the given scroll position.
///
/// Section tops are shifted up by the header height. A section wins when the
/// reference line (`scroll_y + ACTIVE_OFFSET`) falls inside it or when its top
/// is the closest seen so far; later sections take precedence over earlier
/// ones on both counts.
pub fn active_section<'a>(
	sections: &[SectionExtent<'a>],
	scroll_y: f64,
	header_height: f64,
) -> Option<&'a str> {
	let position = scroll_y + ACTIVE_OFFSET;
	let mut current = None;
	let mut closest = f64::INFINITY;

	for section in sections {
		let top = section.top - header_height;
		let distance = (position - top).abs();
		let inside = position >= top && position < top + section.height;
		if inside || distance < closest {
			current = Some(section.id);
			closest = distance;
		}
	}
	current
}

/// Index of the step that contains the middle of the viewport.
pub fn current_step(steps: &[SectionExtent<'_>], scroll_y: f64, viewport_height: f64) -> Option<usize> {
	let position = scroll_y + viewport_height / 2.0;
	steps
		.iter()
		.position(|s| position >= s.top && position < s.top + s.height)
}

/// Extent of the element with `id`, if it is in the document.
pub fn measure<'a>(window: &Window, id: &'a str) -> Option<SectionExtent<'a>> {
	let element = window
		.document()?
		.get_element_by_id(id)?
		.dyn_into::<HtmlElement>()
		.ok()?;
	Some(SectionExtent {
		id,
		top: element.offset_top() as f64,
		height: element.offset_height() as f64,
	})
}

/// Current vertical scroll offset of the page.
pub fn scroll_y(window: &Window) -> f64 {
	window.scroll_y().unwrap_or(0.0)
}

/// Measure every section of [`NAV_ITEMS`] present in the document.
pub fn measure_sections(window: &Window) -> Vec<SectionExtent<'static>> {
	let sections: Vec<_> = NAV_ITEMS
		.iter()
		.filter_map(|item| measure(window, item.id))
		.collect();
	if sections.len() < NAV_ITEMS.len() {
		debug!(
			"landing-fx: {} of {} nav sections found",
			sections.len(),
			NAV_ITEMS.len()
		);
	}
	sections
}

#[cfg(test)]
mod tests {
	use super::*;

	fn page() -> Vec<SectionExtent<'static>> {
		vec![
			SectionExtent {
				id: "inicio",
				top: 0.0,
				height: 600.0,
			},
			SectionExtent {
				id: "servicos",
				top: 600.0,
				height: 800.0,
			},
			SectionExtent {
				id: "contato",
				top: 1400.0,
				height: 500.0,
			},
		]
	}

	#[test]
	fn header_compacts_past_fifty_pixels() {
		assert!(!is_scrolled(0.0));
		assert!(!is_scrolled(50.0));
		assert!(is_scrolled(50.5));
	}

	#[test]
	fn logo_follows_scheme_once_scrolled() {
		assert_eq!(header_logo(ColorScheme::Light, false), header_logo(ColorScheme::Dark, false));
		assert_eq!(header_logo(ColorScheme::Light, true), "images/logo-white-pink.webp");
		assert_eq!(header_logo(ColorScheme::Dark, true), "images/logo-yellow-pink.webp");
	}

	#[test]
	fn top_of_page_highlights_first_section() {
		assert_eq!(active_section(&page(), 0.0, 80.0), Some("inicio"));
	}

	#[test]
	fn section_under_header_is_active() {
		// Reference line at 900, servicos spans 520..1320 after the header shift.
		assert_eq!(active_section(&page(), 800.0, 80.0), Some("servicos"));
		// Reference line at 1400, contato starts at 1320.
		assert_eq!(active_section(&page(), 1300.0, 80.0), Some("contato"));
	}

	#[test]
	fn nearest_top_wins_and_header_shifts_it() {
		// Reference line at 250: inicio's top is nearer without a header,
		// servicos' top is nearer once both move up by 80.
		assert_eq!(active_section(&page(), 150.0, 0.0), Some("inicio"));
		assert_eq!(active_section(&page(), 150.0, 80.0), Some("servicos"));
	}

	#[test]
	fn past_the_last_section_picks_the_closest() {
		assert_eq!(active_section(&page(), 5000.0, 0.0), Some("contato"));
	}

	#[test]
	fn step_in_middle_of_viewport_is_current() {
		let steps = [
			SectionExtent {
				id: "passo-1",
				top: 2000.0,
				height: 200.0,
			},
			SectionExtent {
				id: "passo-2",
				top: 2200.0,
				height: 200.0,
			},
		];
		// Middle of an 800px viewport at 1900 + 400 = 2300.
		assert_eq!(current_step(&steps, 1900.0, 800.0), Some(1));
		assert_eq!(current_step(&steps, 1600.0, 800.0), Some(0));
		assert_eq!(current_step(&steps, 0.0, 800.0), None);
		// Bottom edge belongs to the next step.
		assert_eq!(current_step(&steps, 1800.0, 800.0), Some(1));
	}

	#[test]
	fn no_sections_means_no_highlight() {
		assert_eq!(active_section(&[], 300.0, 80.0), None);
	}
}
