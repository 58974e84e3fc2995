//! FAQ entries and the accordion that shows them.

use serde::Deserialize;

/// One question with its answer.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct FaqEntry {
	/// Question shown in the accordion header.
	pub question: String,
	/// Answer revealed when the item opens.
	pub answer: String,
}

impl FaqEntry {
	fn new(question: &str, answer: &str) -> Self {
		Self {
			question: question.to_string(),
			answer: answer.to_string(),
		}
	}
}

/// Entries shown when the site config does not provide any.
pub fn default_entries() -> Vec<FaqEntry> {
	vec![
		FaqEntry::new(
			"Quanto tempo leva para o site ficar pronto?",
			"Em média de duas a quatro semanas, dependendo do conteúdo e das revisões.",
		),
		FaqEntry::new(
			"Preciso ter domínio e hospedagem?",
			"Não. Cuidamos do registro do domínio e da hospedagem se você ainda não tiver.",
		),
		FaqEntry::new(
			"Vocês configuram o Google Meu Negócio?",
			"Sim. Criamos ou otimizamos o perfil para que sua empresa apareça nas buscas locais.",
		),
		FaqEntry::new(
			"Posso pedir alterações depois da entrega?",
			"Sim. Ajustes de conteúdo estão incluídos no primeiro mês após a publicação.",
		),
	]
}

/// Which accordion item is expanded. At most one is open at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Accordion {
	open: Option<usize>,
}

impl Accordion {
	/// Open `index`, closing any other item, or close it if it was open.
	pub fn toggle(&mut self, index: usize) {
		self.open = if self.open == Some(index) {
			None
		} else {
			Some(index)
		};
	}

	/// Whether the item at `index` is expanded.
	pub fn is_open(&self, index: usize) -> bool {
		self.open == Some(index)
	}

	/// The expanded item, if any.
	pub fn open(&self) -> Option<usize> {
		self.open
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn starts_closed() {
		let accordion = Accordion::default();
		assert_eq!(accordion.open(), None);
		assert!(!accordion.is_open(0));
	}

	#[test]
	fn opening_one_closes_the_other() {
		let mut accordion = Accordion::default();
		accordion.toggle(1);
		assert!(accordion.is_open(1));
		accordion.toggle(3);
		assert!(accordion.is_open(3));
		assert!(!accordion.is_open(1));
	}

	#[test]
	fn toggling_the_open_item_closes_it() {
		let mut accordion = Accordion::default();
		accordion.toggle(2);
		accordion.toggle(2);
		assert_eq!(accordion.open(), None);
	}

	#[test]
	fn defaults_have_content() {
		let entries = default_entries();
		assert!(!entries.is_empty());
		assert!(entries.iter().all(|e| !e.question.is_empty() && !e.answer.is_empty()));
	}
}
