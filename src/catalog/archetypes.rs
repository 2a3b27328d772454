use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fs;
use std::path::Path;

/// A named deck strategy and the cards that give it away.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArchetypeDefinition {
    pub name: String,
    #[serde(rename = "signature")]
    pub signature_cards: BTreeSet<String>,
    #[serde(rename = "supporting", default)]
    pub supporting_cards: BTreeSet<String>,
    pub weight: u32,
}

impl ArchetypeDefinition {
    pub fn new(name: &str, signature: &[&str], supporting: &[&str], weight: u32) -> Self {
        ArchetypeDefinition {
            name: name.to_string(),
            signature_cards: signature.iter().map(|c| c.to_string()).collect(),
            supporting_cards: supporting.iter().map(|c| c.to_string()).collect(),
            weight,
        }
    }
}

#[derive(Debug, Deserialize)]
struct KnowledgeBaseFile {
    archetypes: Vec<ArchetypeDefinition>,
}

/// Immutable set of archetype definitions, built once and shared by reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnowledgeBase {
    archetypes: Vec<ArchetypeDefinition>,
}

impl KnowledgeBase {
    /// Names must be unique and non-empty, weights at least 1.
    pub fn new(archetypes: Vec<ArchetypeDefinition>) -> Result<Self, AppError> {
        let mut seen = HashSet::new();
        for archetype in &archetypes {
            if archetype.name.trim().is_empty() {
                return Err(AppError::ConfigError(
                    "archetype name must not be empty".to_string(),
                ));
            }
            if archetype.weight == 0 {
                return Err(AppError::ConfigError(format!(
                    "archetype '{}' has weight 0 (must be positive)",
                    archetype.name
                )));
            }
            if !seen.insert(archetype.name.as_str()) {
                return Err(AppError::ConfigError(format!(
                    "duplicate archetype '{}'",
                    archetype.name
                )));
            }
        }

        Ok(KnowledgeBase { archetypes })
    }

    pub fn builtin() -> Self {
        let archetypes = BUILTIN_ARCHETYPES
            .iter()
            .map(|(name, signature, supporting, weight)| {
                ArchetypeDefinition::new(name, signature, supporting, *weight)
            })
            .collect();

        KnowledgeBase { archetypes }
    }

    pub fn from_json(content: &str) -> Result<Self, AppError> {
        let file: KnowledgeBaseFile = serde_json::from_str(content).map_err(|e| {
            AppError::ConfigError(format!("Failed to parse archetype file: {}", e))
        })?;
        Self::new(file.archetypes)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|e| {
            AppError::ConfigError(format!(
                "Failed to read archetype file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::from_json(&content)
    }

    pub fn archetypes(&self) -> &[ArchetypeDefinition] {
        &self.archetypes
    }

    pub fn get(&self, name: &str) -> Option<&ArchetypeDefinition> {
        self.archetypes.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.archetypes.iter().map(|a| a.name.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.archetypes.len()
    }
}

// (name, signature, supporting, weight)
type BuiltinArchetype = (&'static str, &'static [&'static str], &'static [&'static str], u32);

const BUILTIN_ARCHETYPES: &[BuiltinArchetype] = &[
    (
        "GMP Caffeine Colo",
        &["Green Mega Penguin", "Too Much Caffeine", "Colosseum"],
        &["Lil Bellyacher", "Lil Extrovert", "Mount Fuji", "Popcorn Penguin"],
        3,
    ),
    (
        "GMP Colo",
        &["Green Mega Penguin", "Colosseum"],
        &["Lil Bellyacher", "Lil Extrovert", "Lil Lookout", "Popcorn Penguin"],
        2,
    ),
    (
        "Red Removal",
        &["Potion Commotion", "Not a Rod Anymore!", "Layer a Lasagna"],
        &["Not Today!", "Lil Singer", "Silent Snow Globe", "Mount Fuji"],
        3,
    ),
    (
        "Red Control",
        &["Potion Commotion", "Layer a Lasagna"],
        &["Lil Moonlight", "Mount Fuji", "Inspiring Story", "Lil Singer"],
        2,
    ),
    (
        "Yellow Control",
        &["Silent Snow Globe", "Bashful Swordsman Penguin"],
        &["Serene Penguin", "Prosperous Penguin", "What a Twist!", "Heads I Win, Tails You Lose"],
        2,
    ),
    (
        "Bash Globe",
        &["Bashful Swordsman Penguin", "Silent Snow Globe"],
        &["Simon Smasher", "Lil Extrovert", "Toss Up"],
        3,
    ),
    (
        "Colo Bash Globe",
        &["Colosseum", "Bashful Swordsman Penguin", "Silent Snow Globe"],
        &["Green Mega Penguin", "Lil Bellyacher", "Simon Smasher"],
        3,
    ),
    (
        "Belly Colo",
        &["Lil Bellyacher", "Colosseum", "Penguin Whose Belly Aches"],
        &["Lil Extrovert", "Popcorn Penguin"],
        3,
    ),
    (
        "Yum Yum",
        &["Yum Yum"],
        &["Penguin Who Bakes", "Lil Baker", "Cooking Penguin"],
        2,
    ),
    (
        "Green Control",
        &["Green Mega Penguin", "Inspiring Story"],
        &["Mount Fuji", "Lil Moonlight", "Serene Penguin"],
        2,
    ),
    (
        "Green Aggro",
        &["Green Mega Penguin", "Lil Zoomer", "Lil Extrovert"],
        &["Too Much Caffeine", "Bounce House Rod"],
        2,
    ),
    (
        "GMP Aggro",
        &["Green Mega Penguin", "Lil Zoomer"],
        &["Too Much Caffeine", "Lil Extrovert", "Bounce House Rod"],
        2,
    ),
    (
        "Blue Mill",
        &["Blue Mega Penguin", "Galaxy Penguin"],
        &["Wizard of the Deep", "Blue Wizard Penguin"],
        2,
    ),
    (
        "Bizbunk",
        &["Bizmo, PhD Candidate"],
        &["Brainy Penguin", "Do a Lil Math"],
        2,
    ),
    (
        "Swordsman",
        &["Bashful Swordsman Penguin", "Charming Swordsman Penguin", "Dashing Swordsman Penguin"],
        &["Striking Swordsman Penguin", "Ornate Swordsman Penguin"],
        3,
    ),
    (
        "Purple Control",
        &["Purple Mega Penguin", "Potion Commotion"],
        &["Layer a Lasagna", "Wizard of the Void"],
        2,
    ),
    (
        "Wizard",
        &["Wizard Cap", "Green Wizard Penguin"],
        &["Blue Wizard Penguin", "Red Wizard Penguin", "Yellow Wizard Penguin", "Purple Wizard Penguin"],
        2,
    ),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_unique_names_and_positive_weights() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.len(), 17);
        assert!(KnowledgeBase::new(kb.archetypes().to_vec()).is_ok());
    }

    #[test]
    fn names_are_sorted() {
        let kb = KnowledgeBase::builtin();
        let names = kb.names();
        let mut sorted = names.clone();
        sorted.sort();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"Bash Globe"));
    }

    #[test]
    fn from_json_parses_definitions() {
        let kb = KnowledgeBase::from_json(
            r#"{"archetypes": [
                {"name": "X", "signature": ["A", "B"], "supporting": ["C"], "weight": 3}
            ]}"#,
        )
        .unwrap();

        let x = kb.get("X").unwrap();
        assert_eq!(x.signature_cards.len(), 2);
        assert!(x.supporting_cards.contains("C"));
        assert_eq!(x.weight, 3);
    }

    #[test]
    fn supporting_defaults_to_empty() {
        let kb = KnowledgeBase::from_json(
            r#"{"archetypes": [{"name": "Solo", "signature": ["A"], "weight": 1}]}"#,
        )
        .unwrap();
        assert!(kb.get("Solo").unwrap().supporting_cards.is_empty());
    }

    #[test]
    fn rejects_zero_weight() {
        let err = KnowledgeBase::new(vec![ArchetypeDefinition::new("X", &["A"], &[], 0)]);
        assert!(matches!(err, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn rejects_duplicate_names() {
        let err = KnowledgeBase::new(vec![
            ArchetypeDefinition::new("X", &["A"], &[], 1),
            ArchetypeDefinition::new("X", &["B"], &[], 2),
        ]);
        assert!(matches!(err, Err(AppError::ConfigError(_))));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = KnowledgeBase::from_json(r#"{"archetypes": [{"name": "X"}]}"#);
        assert!(matches!(err, Err(AppError::ConfigError(_))));
    }
}
