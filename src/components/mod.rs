//! UI components of the landing page.

pub mod exit_popup;
pub mod faq;
pub mod lead_form;
pub mod particle_field;
pub mod process;
pub mod site_header;
pub mod theme_toggle;
