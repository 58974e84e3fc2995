//! Contact form that hands the lead over to WhatsApp.

use leptos::prelude::*;
use log::{info, warn};

use crate::lead::{Lead, Service};

/// Contact form. On submit the lead is validated and a WhatsApp chat with
/// `whatsapp_number` opens in a new tab; problems are shown under the form.
#[component]
pub fn LeadForm(#[prop(optional, into)] whatsapp_number: Option<String>) -> impl IntoView {
	let name = RwSignal::new(String::new());
	let company = RwSignal::new(String::new());
	let phone = RwSignal::new(String::new());
	let email = RwSignal::new(String::new());
	let message = RwSignal::new(String::new());
	let selected = RwSignal::new(Vec::<Service>::new());
	let error = RwSignal::new(None::<String>);

	let on_submit = move |ev: leptos::ev::SubmitEvent| {
		ev.prevent_default();
		let lead = Lead {
			name: name.get_untracked(),
			company: company.get_untracked(),
			phone: phone.get_untracked(),
			email: email.get_untracked(),
			message: message.get_untracked(),
			services: selected.with_untracked(|chosen| {
				Service::ALL
					.into_iter()
					.filter(|s| chosen.contains(s))
					.collect()
			}),
		};

		let number = whatsapp_number.as_deref().unwrap_or_default();
		match lead.validate().and_then(|lead| lead.whatsapp_url(number)) {
			Ok(url) => {
				error.set(None);
				let opened = web_sys::window()
					.and_then(|w| w.open_with_url_and_target(&url, "_blank").ok())
					.flatten();
				if opened.is_some() {
					info!("landing-fx: lead handed over to WhatsApp");
				} else {
					warn!("landing-fx: popup blocked, could not open WhatsApp");
				}
			}
			Err(e) => error.set(Some(e.to_string())),
		}
	};

	let services = Service::ALL
		.into_iter()
		.map(|service| {
			let is_selected = move || selected.with(|s| s.contains(&service));
			view! {
				<label class="service-option" class:selected=is_selected>
					<input
						type="checkbox"
						name="service"
						value=service.value()
						prop:checked=is_selected
						on:change=move |ev| {
							let checked = event_target_checked(&ev);
							selected.update(|s| {
								s.retain(|&x| x != service);
								if checked {
									s.push(service);
								}
							});
						}
					/>
					<span>{service.label()}</span>
				</label>
			}
		})
		.collect_view();

	view! {
		<form class="contact-form" on:submit=on_submit novalidate>
			<input
				id="name"
				type="text"
				placeholder="Nome"
				prop:value=move || name.get()
				on:input=move |ev| name.set(event_target_value(&ev))
			/>
			<input
				id="company"
				type="text"
				placeholder="Empresa"
				prop:value=move || company.get()
				on:input=move |ev| company.set(event_target_value(&ev))
			/>
			<input
				id="phone"
				type="tel"
				placeholder="Telefone"
				prop:value=move || phone.get()
				on:input=move |ev| phone.set(event_target_value(&ev))
			/>
			<input
				id="email"
				type="email"
				placeholder="Email"
				prop:value=move || email.get()
				on:input=move |ev| email.set(event_target_value(&ev))
			/>
			<div class="service-options">{services}</div>
			<textarea
				id="message"
				placeholder="Mensagem"
				prop:value=move || message.get()
				on:input=move |ev| message.set(event_target_value(&ev))
			></textarea>
			{move || error.get().map(|e| view! { <p class="form-error" role="alert">{e}</p> })}
			<button type="submit" class="btn btn-primary">"Enviar pelo WhatsApp"</button>
		</form>
	}
}
