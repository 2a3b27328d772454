use crate::catalog::archetypes::{ArchetypeDefinition, KnowledgeBase};
use serde::Serialize;
use std::collections::HashSet;

pub const SIGNATURE_POINTS: u64 = 10;
pub const SUPPORTING_POINTS: u64 = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoredArchetype {
    pub archetype: String,
    pub score: u64,
    pub confidence: u32,
    pub signature_hits: usize,
    pub supporting_hits: usize,
}

pub struct ArchetypeDetector;

impl ArchetypeDetector {
    /// Score a single archetype against an already deduplicated card set.
    ///
    /// - signature card present: 10 points
    /// - supporting card present: 3 points
    /// - total is multiplied by the archetype weight
    ///
    /// Confidence is the share of signature cards seen, rounded half up.
    pub fn score_archetype(
        definition: &ArchetypeDefinition,
        observed: &HashSet<&str>,
    ) -> ScoredArchetype {
        let signature_hits = definition
            .signature_cards
            .iter()
            .filter(|card| observed.contains(card.as_str()))
            .count();
        let supporting_hits = definition
            .supporting_cards
            .iter()
            .filter(|card| observed.contains(card.as_str()))
            .count();

        // Saturates rather than wrapping for oversized override weights.
        let raw = (signature_hits as u64)
            .saturating_mul(SIGNATURE_POINTS)
            .saturating_add((supporting_hits as u64).saturating_mul(SUPPORTING_POINTS));
        let score = raw.saturating_mul(u64::from(definition.weight));

        let signature_total = definition.signature_cards.len();
        let confidence = if signature_total > 0 {
            ((signature_hits * 200 + signature_total) / (signature_total * 2)) as u32
        } else {
            0
        };

        ScoredArchetype {
            archetype: definition.name.clone(),
            score,
            confidence,
            signature_hits,
            supporting_hits,
        }
    }

    /// Rank every archetype with a positive score, highest first.
    /// Equal scores are ordered by archetype name.
    pub fn detect<S: AsRef<str>>(
        knowledge_base: &KnowledgeBase,
        cards_seen: &[S],
    ) -> Vec<ScoredArchetype> {
        if cards_seen.is_empty() {
            return Vec::new();
        }

        let observed: HashSet<&str> = cards_seen.iter().map(|card| card.as_ref()).collect();

        let mut results: Vec<ScoredArchetype> = knowledge_base
            .archetypes()
            .iter()
            .map(|definition| Self::score_archetype(definition, &observed))
            .filter(|scored| scored.score > 0)
            .collect();

        results.sort_by(|a, b| {
            b.score
                .cmp(&a.score)
                .then_with(|| a.archetype.cmp(&b.archetype))
        });

        tracing::debug!(
            observed = observed.len(),
            matched = results.len(),
            top = results.first().map(|r| r.archetype.as_str()).unwrap_or(""),
            "scored archetypes"
        );

        results
    }
}
