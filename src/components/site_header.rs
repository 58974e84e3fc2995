//! Sticky header with scroll-aware navigation.

use std::cell::RefCell;
use std::rc::Rc;

use leptos::prelude::*;
use web_sys::HtmlElement;

use crate::components::theme_toggle::ThemeToggle;
use crate::listeners::Listeners;
use crate::nav::{self, NAV_ITEMS};
use crate::scheme::ColorScheme;

/// Page header. Gets the `scrolled` class once the page scrolls and marks the
/// nav link of the section under it as `active`. On narrow screens the links
/// collapse behind a menu button.
#[component]
pub fn SiteHeader(scheme: RwSignal<ColorScheme>) -> impl IntoView {
	let header_ref = NodeRef::<leptos::html::Header>::new();
	let scrolled = RwSignal::new(false);
	let active = RwSignal::new(None::<&'static str>);
	let menu_open = RwSignal::new(false);
	let listeners: Rc<RefCell<Option<Listeners>>> = Rc::new(RefCell::new(None));

	Effect::new(move |_| {
		let Some(header) = header_ref.get() else {
			return;
		};
		if listeners.borrow().is_some() {
			return;
		}
		let Some(window) = web_sys::window() else {
			return;
		};
		let header: HtmlElement = header.into();

		let update = {
			let window = window.clone();
			move || {
				let y = nav::scroll_y(&window);
				scrolled.set(nav::is_scrolled(y));
				let sections = nav::measure_sections(&window);
				active.set(nav::active_section(&sections, y, header.offset_height() as f64));
			}
		};
		let on_resize = update.clone();
		update();

		let mut set = Listeners::new();
		set.add(&window, "scroll", move |_| update());
		set.add(&window, "resize", move |_| on_resize());
		*listeners.borrow_mut() = Some(set);
	});

	let links = NAV_ITEMS
		.iter()
		.map(|item| {
			let id = item.id;
			view! {
				<li>
					<a
						href=format!("#{}", id)
						class="nav-link"
						class:active=move || active.get() == Some(id)
						on:click=move |_| {
							active.set(Some(id));
							menu_open.set(false);
						}
					>
						{item.label}
					</a>
				</li>
			}
		})
		.collect_view();

	view! {
		<header node_ref=header_ref class="header" class:scrolled=move || scrolled.get()>
			<a href="#inicio" class="logo">
				<img
					id="header-logo"
					src=move || nav::header_logo(scheme.get(), scrolled.get())
					alt="Logo"
				/>
			</a>
			<nav class="navbar" class:active=move || menu_open.get()>
				<ul class="nav-menu">{links}</ul>
			</nav>
			<ThemeToggle scheme=scheme />
			<button
				class="menu-toggle"
				class:active=move || menu_open.get()
				type="button"
				aria-label="Menu"
				on:click=move |_| menu_open.update(|open| *open = !*open)
			>
				<span class="bar"></span>
				<span class="bar"></span>
				<span class="bar"></span>
			</button>
		</header>
	}
}
