//! Lead capture: turn the contact form into a WhatsApp conversation.
//!
//! The form never posts anywhere. A validated [`Lead`] is rendered into a
//! pre-filled message and handed to WhatsApp through a `wa.me` link.

use thiserror::Error;

/// Services a visitor can ask about.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Service {
	/// Professional website.
	Website,
	/// Google Business profile setup.
	GoogleBusiness,
	/// Social media management.
	SocialMedia,
}

impl Service {
	/// Every service, in form order.
	pub const ALL: [Service; 3] = [
		Service::Website,
		Service::GoogleBusiness,
		Service::SocialMedia,
	];

	/// Checkbox value.
	pub fn value(self) -> &'static str {
		match self {
			Service::Website => "site",
			Service::GoogleBusiness => "google",
			Service::SocialMedia => "redes",
		}
	}

	/// Human-readable name used in the form and the message.
	pub fn label(self) -> &'static str {
		match self {
			Service::Website => "Site Profissional",
			Service::GoogleBusiness => "Google Meu Negócio",
			Service::SocialMedia => "Gestão de Redes Sociais",
		}
	}
}

/// Why a lead cannot be sent.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeadError {
	/// A required field is empty after trimming.
	#[error("Por favor, preencha o campo obrigatório: {0}.")]
	MissingField(&'static str),
	/// The recipient number has no digits.
	#[error("Nenhum número de WhatsApp configurado.")]
	NoRecipient,
}

/// What the visitor typed into the contact form.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Lead {
	/// Required.
	pub name: String,
	/// Optional.
	pub company: String,
	/// Required.
	pub phone: String,
	/// Required.
	pub email: String,
	/// Required.
	pub message: String,
	/// Services ticked in the form, in form order.
	pub services: Vec<Service>,
}

impl Lead {
	/// Trim every field and check the required ones are filled in.
	pub fn validate(mut self) -> Result<Self, LeadError> {
		for field in [
			&mut self.name,
			&mut self.company,
			&mut self.phone,
			&mut self.email,
			&mut self.message,
		] {
			*field = field.trim().to_string();
		}

		let required = [
			("nome", &self.name),
			("telefone", &self.phone),
			("email", &self.email),
			("mensagem", &self.message),
		];
		if let Some((field, _)) = required.iter().find(|(_, value)| value.is_empty()) {
			return Err(LeadError::MissingField(*field));
		}
		Ok(self)
	}

	/// The pre-filled WhatsApp message.
	pub fn message(&self) -> String {
		let company: &str = if self.company.is_empty() {
			"Não informada"
		} else {
			&self.company
		};
		let services = if self.services.is_empty() {
			"Não especificado".to_string()
		} else {
			self.services
				.iter()
				.map(|s| s.label())
				.collect::<Vec<_>>()
				.join(", ")
		};

		format!(
			"Olá, meu nome é *{name}*!\n\
			───────────────\n\
			📋 *Dados do Contato*\n\
			- Empresa: *{company}*\n\
			- Email: *{email}*\n\
			- Telefone: *{phone}*\n\
			- Serviços: *{services}*\n\
			\n\
			💬 *Mensagem*\n\
			{message}\n\
			\n\
			Gostaria de mais informações. Aguardo seu retorno!",
			name = self.name,
			email = self.email,
			phone = self.phone,
			message = self.message,
		)
	}

	/// `wa.me` link opening a chat with `number` and the message pre-filled.
	///
	/// Anything but digits is stripped from the number, so `+55 (48) 9...`
	/// works as configured.
	pub fn whatsapp_url(&self, number: &str) -> Result<String, LeadError> {
		let digits: String = number.chars().filter(char::is_ascii_digit).collect();
		if digits.is_empty() {
			return Err(LeadError::NoRecipient);
		}
		Ok(format!(
			"https://wa.me/{}?text={}",
			digits,
			urlencoding::encode(&self.message())
		))
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn lead() -> Lead {
		Lead {
			name: "  Ana Souza ".into(),
			company: "".into(),
			phone: "48 99999-0000".into(),
			email: "ana@example.com".into(),
			message: "Quero um site novo".into(),
			services: vec![Service::Website, Service::SocialMedia],
		}
	}

	#[test]
	fn validate_trims_fields() {
		let lead = lead().validate().unwrap();
		assert_eq!(lead.name, "Ana Souza");
	}

	#[test]
	fn validate_reports_first_missing_field() {
		let missing_phone = Lead {
			phone: "   ".into(),
			message: "".into(),
			..lead()
		};
		assert_eq!(
			missing_phone.validate(),
			Err(LeadError::MissingField("telefone"))
		);
	}

	#[test]
	fn message_fills_defaults() {
		let text = Lead {
			services: vec![],
			..lead()
		}
		.validate()
		.unwrap()
		.message();
		assert!(text.contains("- Empresa: *Não informada*"));
		assert!(text.contains("- Serviços: *Não especificado*"));
		assert!(text.starts_with("Olá, meu nome é *Ana Souza*!"));
	}

	#[test]
	fn message_lists_services() {
		let text = lead().message();
		assert!(text.contains("*Site Profissional, Gestão de Redes Sociais*"));
	}

	#[test]
	fn url_encodes_message_and_cleans_number() {
		let url = lead().validate().unwrap().whatsapp_url("+55 (48) 0000-0000").unwrap();
		assert!(url.starts_with("https://wa.me/554800000000?text="));
		let query = url.split_once("?text=").unwrap().1;
		assert!(!query.contains(' '));
		assert!(!query.contains('\n'));
		assert_eq!(urlencoding::decode(query).unwrap(), lead().validate().unwrap().message());
	}

	#[test]
	fn url_requires_recipient() {
		assert_eq!(lead().whatsapp_url("n/a"), Err(LeadError::NoRecipient));
	}
}
