//! Why the animator could not start.

use thiserror::Error;

/// A browser handle the animator needs is missing. Never fatal to the page:
/// the component logs it and renders without a background.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InitError {
	/// Not running in a browser window.
	#[error("no window object")]
	NoWindow,
	/// The canvas is missing or not a canvas.
	#[error("canvas element not mounted")]
	NoCanvas,
	/// The canvas is detached.
	#[error("canvas has no parent element to size against")]
	NoContainer,
	/// The browser refused a 2D context.
	#[error("could not get a 2D context from the canvas")]
	NoContext,
}
