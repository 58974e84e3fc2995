//! Light/dark color scheme preference.
//!
//! The active scheme is stored under the `theme` key in `localStorage`. When no
//! preference was stored, the `prefers-color-scheme` media query decides. The
//! document exposes the scheme as a `data-theme` attribute on `<body>` so the
//! stylesheet can key off it.

use std::fmt;
use std::str::FromStr;

use log::warn;
use serde::Deserialize;

/// Storage key holding the user's explicit choice.
const STORAGE_KEY: &str = "theme";

/// The site-wide color scheme.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
	/// Light background, dark ink.
	#[default]
	Light,
	/// Dark background, light ink.
	Dark,
}

impl ColorScheme {
	/// Attribute/storage value for this scheme.
	pub fn as_str(self) -> &'static str {
		match self {
			ColorScheme::Light => "light",
			ColorScheme::Dark => "dark",
		}
	}

	/// The other scheme.
	pub fn toggled(self) -> Self {
		match self {
			ColorScheme::Light => ColorScheme::Dark,
			ColorScheme::Dark => ColorScheme::Light,
		}
	}
}

impl fmt::Display for ColorScheme {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Returned when a stored value is neither `"light"` nor `"dark"`.
#[derive(Debug, thiserror::Error)]
#[error("unknown color scheme {0:?}")]
pub struct UnknownScheme(String);

impl FromStr for ColorScheme {
	type Err = UnknownScheme;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s.trim() {
			"light" => Ok(ColorScheme::Light),
			"dark" => Ok(ColorScheme::Dark),
			other => Err(UnknownScheme(other.to_string())),
		}
	}
}

fn local_storage() -> Option<web_sys::Storage> {
	web_sys::window()?.local_storage().ok().flatten()
}

fn prefers_dark() -> bool {
	web_sys::window()
		.and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
		.map(|mq| mq.matches())
		.unwrap_or(false)
}

/// Scheme to start with: the stored choice, else the system preference.
pub fn initial_scheme() -> ColorScheme {
	let stored = local_storage().and_then(|s| s.get_item(STORAGE_KEY).ok().flatten());
	if let Some(value) = stored {
		match value.parse() {
			Ok(scheme) => return scheme,
			Err(e) => warn!("landing-fx: ignoring stored preference: {}", e),
		}
	}
	if prefers_dark() {
		ColorScheme::Dark
	} else {
		ColorScheme::Light
	}
}

/// Remember the user's choice across visits.
pub fn persist(scheme: ColorScheme) {
	let Some(storage) = local_storage() else {
		warn!("landing-fx: localStorage unavailable, theme choice not saved");
		return;
	};
	if storage.set_item(STORAGE_KEY, scheme.as_str()).is_err() {
		warn!("landing-fx: failed to save theme choice");
	}
}

/// Publish the scheme on `<body data-theme="...">`.
pub fn apply_to_document(scheme: ColorScheme) {
	let Some(body) = web_sys::window()
		.and_then(|w| w.document())
		.and_then(|d| d.body())
	else {
		return;
	};
	if body.set_attribute("data-theme", scheme.as_str()).is_err() {
		warn!("landing-fx: failed to set data-theme on body");
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn parses_stored_values() {
		assert_eq!("dark".parse::<ColorScheme>().unwrap(), ColorScheme::Dark);
		assert_eq!(" light ".parse::<ColorScheme>().unwrap(), ColorScheme::Light);
		assert!("sepia".parse::<ColorScheme>().is_err());
	}

	#[test]
	fn toggles_between_schemes() {
		assert_eq!(ColorScheme::Light.toggled(), ColorScheme::Dark);
		assert_eq!(ColorScheme::Dark.toggled().toggled(), ColorScheme::Dark);
	}

	#[test]
	fn round_trips_through_as_str() {
		for scheme in [ColorScheme::Light, ColorScheme::Dark] {
			assert_eq!(scheme.as_str().parse::<ColorScheme>().unwrap(), scheme);
			assert_eq!(scheme.to_string(), scheme.as_str());
		}
	}

	#[test]
	fn deserializes_lowercase() {
		let scheme: ColorScheme = serde_json::from_str("\"dark\"").unwrap();
		assert_eq!(scheme, ColorScheme::Dark);
	}
}
