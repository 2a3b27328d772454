pub mod archetypes;
pub mod cards;

use crate::config::Config;
use crate::error::AppError;
use archetypes::KnowledgeBase;
use std::collections::BTreeSet;

/// Static game data: the card list and the archetype knowledge base.
/// Loaded once at startup and handed out by reference.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: BTreeSet<String>,
    knowledge_base: KnowledgeBase,
}

impl Catalog {
    pub fn builtin() -> Self {
        Catalog {
            cards: cards::CARD_NAMES.iter().map(|c| c.to_string()).collect(),
            knowledge_base: KnowledgeBase::builtin(),
        }
    }

    pub fn with_knowledge_base(knowledge_base: KnowledgeBase) -> Self {
        Catalog {
            knowledge_base,
            ..Self::builtin()
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, AppError> {
        match &config.archetypes_path {
            Some(path) => {
                let knowledge_base = KnowledgeBase::load(path)?;
                tracing::info!(
                    path = %path.display(),
                    archetypes = knowledge_base.len(),
                    "loaded archetype override"
                );
                Ok(Self::with_knowledge_base(knowledge_base))
            }
            None => Ok(Self::builtin()),
        }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    /// Card names in alphabetical order.
    pub fn card_names(&self) -> impl Iterator<Item = &str> {
        self.cards.iter().map(String::as_str)
    }

    pub fn archetype_names(&self) -> Vec<&str> {
        self.knowledge_base.names()
    }

    pub fn is_known_card(&self, name: &str) -> bool {
        self.cards.contains(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_card_list_is_sorted_and_complete() {
        let catalog = Catalog::builtin();
        let names: Vec<&str> = catalog.card_names().collect();
        assert_eq!(names.len(), cards::CARD_NAMES.len());
        assert!(names.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn card_lookup_is_case_sensitive() {
        let catalog = Catalog::builtin();
        assert!(catalog.is_known_card("Green Mega Penguin"));
        assert!(!catalog.is_known_card("green mega penguin"));
    }

    #[test]
    fn builtin_archetypes_only_reference_known_cards() {
        let catalog = Catalog::builtin();
        for archetype in catalog.knowledge_base().archetypes() {
            for card in archetype
                .signature_cards
                .iter()
                .chain(archetype.supporting_cards.iter())
            {
                assert!(
                    catalog.is_known_card(card),
                    "{} references unknown card {}",
                    archetype.name,
                    card
                );
            }
        }
    }

    #[test]
    fn override_replaces_archetypes_but_keeps_cards() {
        let kb = KnowledgeBase::from_json(
            r#"{"archetypes": [{"name": "Only", "signature": ["A"], "weight": 1}]}"#,
        )
        .unwrap();
        let catalog = Catalog::with_knowledge_base(kb);
        assert_eq!(catalog.archetype_names(), vec!["Only"]);
        assert!(catalog.is_known_card("Colosseum"));
    }
}
