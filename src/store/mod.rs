pub mod models;

use crate::error::AppError;
use chrono::{Local, NaiveDateTime, Timelike};
use models::{Decklist, Match, MatchFilter, NewDecklist, NewMatch, DEFAULT_DECK_NAME};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Match log and decklists, persisted as one JSON document.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct MatchStore {
    #[serde(skip)]
    path: PathBuf,
    #[serde(default)]
    last_match_id: u64,
    #[serde(default)]
    last_decklist_id: u64,
    #[serde(default)]
    matches: Vec<Match>,
    #[serde(default)]
    decklists: Vec<Decklist>,
}

pub fn now_minute() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

impl MatchStore {
    pub fn new(path: &Path) -> Self {
        MatchStore {
            path: path.to_path_buf(),
            ..Default::default()
        }
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        match fs::read_to_string(path) {
            Ok(content) => {
                let mut store: MatchStore = serde_json::from_str(&content).map_err(|e| {
                    AppError::JsonError(format!("Failed to parse store {}: {}", path.display(), e))
                })?;
                store.path = path.to_path_buf();
                tracing::debug!(
                    path = %path.display(),
                    matches = store.matches.len(),
                    decklists = store.decklists.len(),
                    "loaded store"
                );
                Ok(store)
            }
            // Nothing logged yet
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(MatchStore::new(path)),
            Err(e) => Err(AppError::IoError(format!(
                "Failed to read store {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn save(&self) -> Result<(), AppError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                AppError::IoError(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let json = serde_json::to_string_pretty(self)
            .map_err(|e| AppError::JsonError(format!("Failed to serialize store: {}", e)))?;

        fs::write(&self.path, json).map_err(|e| {
            AppError::IoError(format!("Failed to write store {}: {}", self.path.display(), e))
        })?;

        tracing::debug!(path = %self.path.display(), "saved store");
        Ok(())
    }

    pub fn add_match(&mut self, new_match: NewMatch) -> u64 {
        self.add_match_at(new_match, now_minute())
    }

    pub fn add_match_at(&mut self, new_match: NewMatch, played_at: NaiveDateTime) -> u64 {
        self.last_match_id += 1;
        let id = self.last_match_id;

        self.matches.push(Match {
            id,
            played_at,
            my_deck: new_match.my_deck,
            opp_name: new_match.opp_name,
            opp_deck: new_match.opp_deck,
            won: new_match.won,
            on_play: new_match.on_play,
            notes: new_match.notes,
            cards_seen: new_match.cards_seen,
        });

        tracing::info!(id, "logged match");
        id
    }

    pub fn get_match(&self, id: u64) -> Result<&Match, AppError> {
        self.matches
            .iter()
            .find(|m| m.id == id)
            .ok_or(AppError::MatchNotFound(id))
    }

    fn get_match_mut(&mut self, id: u64) -> Result<&mut Match, AppError> {
        self.matches
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(AppError::MatchNotFound(id))
    }

    /// Removes the match together with its observed cards.
    pub fn delete_match(&mut self, id: u64) -> Result<(), AppError> {
        let before = self.matches.len();
        self.matches.retain(|m| m.id != id);
        if self.matches.len() == before {
            return Err(AppError::MatchNotFound(id));
        }

        tracing::info!(id, "deleted match");
        Ok(())
    }

    pub fn add_card_to_match(&mut self, id: u64, card: &str) -> Result<(), AppError> {
        let m = self.get_match_mut(id)?;
        m.cards_seen.push(card.to_string());
        Ok(())
    }

    /// Removes a single occurrence of `card`. Returns whether anything was removed.
    pub fn remove_card_from_match(&mut self, id: u64, card: &str) -> Result<bool, AppError> {
        let m = self.get_match_mut(id)?;
        match m.cards_seen.iter().position(|c| c == card) {
            Some(idx) => {
                m.cards_seen.remove(idx);
                Ok(true)
            }
            None => Ok(false),
        }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Newest first; matches logged in the same minute fall back to id order.
    pub fn list_matches(&self, filter: &MatchFilter) -> Vec<&Match> {
        let mut matches: Vec<&Match> = self.matches.iter().filter(|m| filter.accepts(m)).collect();
        matches.sort_by(|a, b| b.played_at.cmp(&a.played_at).then_with(|| b.id.cmp(&a.id)));
        matches
    }

    pub fn add_decklist(&mut self, new_deck: NewDecklist) -> u64 {
        self.add_decklist_at(new_deck, now_minute())
    }

    pub fn add_decklist_at(&mut self, new_deck: NewDecklist, created_at: NaiveDateTime) -> u64 {
        self.last_decklist_id += 1;
        let id = self.last_decklist_id;

        let name = if new_deck.name.trim().is_empty() {
            DEFAULT_DECK_NAME.to_string()
        } else {
            new_deck.name
        };

        self.decklists.push(Decklist {
            id,
            name,
            cards: new_deck.cards,
            is_public: new_deck.is_public,
            created_at,
        });

        tracing::info!(id, "saved decklist");
        id
    }

    pub fn delete_decklist(&mut self, id: u64) -> Result<(), AppError> {
        let before = self.decklists.len();
        self.decklists.retain(|d| d.id != id);
        if self.decklists.len() == before {
            return Err(AppError::DecklistNotFound(id));
        }
        Ok(())
    }

    pub fn list_decklists(&self) -> Vec<&Decklist> {
        let mut decks: Vec<&Decklist> = self.decklists.iter().collect();
        decks.sort_by(|a, b| b.created_at.cmp(&a.created_at).then_with(|| b.id.cmp(&a.id)));
        decks
    }

    pub fn my_deck_names(&self) -> Vec<String> {
        self.decklists
            .iter()
            .map(|d| d.name.clone())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::models::MatchResult;
    use super::*;
    use chrono::NaiveDate;
    use std::collections::BTreeMap;

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 6, day)
            .unwrap()
            .and_hms_opt(hour, 0, 0)
            .unwrap()
    }

    fn game(my_deck: &str, opp_deck: &str, won: bool) -> NewMatch {
        NewMatch {
            my_deck: my_deck.to_string(),
            opp_deck: opp_deck.to_string(),
            won,
            ..Default::default()
        }
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = MatchStore::load(&dir.path().join("store.json")).unwrap();
        assert!(store.matches().is_empty());
        assert!(store.list_decklists().is_empty());
    }

    #[test]
    fn save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.json");

        let mut store = MatchStore::new(&path);
        let id = store.add_match_at(
            NewMatch {
                cards_seen: vec!["Colosseum".to_string()],
                on_play: Some(true),
                ..game("GMP Colo", "Bash Globe", true)
            },
            at(1, 10),
        );
        let mut cards = BTreeMap::new();
        cards.insert("Colosseum".to_string(), 3);
        store.add_decklist_at(
            NewDecklist {
                name: "GMP Colo".to_string(),
                cards,
                is_public: true,
            },
            at(1, 9),
        );
        store.save().unwrap();

        let reloaded = MatchStore::load(&path).unwrap();
        assert_eq!(reloaded.get_match(id).unwrap(), store.get_match(id).unwrap());
        assert_eq!(reloaded.list_decklists()[0].cards["Colosseum"], 3);
    }

    #[test]
    fn corrupt_file_is_a_json_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("store.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(MatchStore::load(&path), Err(AppError::JsonError(_))));
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut store = MatchStore::default();
        let first = store.add_match_at(game("A", "", true), at(1, 1));
        store.delete_match(first).unwrap();
        let second = store.add_match_at(game("A", "", true), at(1, 2));
        assert!(second > first);
    }

    #[test]
    fn delete_unknown_match_fails() {
        let mut store = MatchStore::default();
        assert!(matches!(store.delete_match(7), Err(AppError::MatchNotFound(7))));
    }

    #[test]
    fn remove_card_drops_one_occurrence() {
        let mut store = MatchStore::default();
        let id = store.add_match_at(game("A", "", true), at(1, 1));
        store.add_card_to_match(id, "Yum Yum").unwrap();
        store.add_card_to_match(id, "Yum Yum").unwrap();

        assert!(store.remove_card_from_match(id, "Yum Yum").unwrap());
        assert_eq!(store.get_match(id).unwrap().cards_seen, vec!["Yum Yum"]);
        assert!(!store.remove_card_from_match(id, "Lil Baker").unwrap());
    }

    #[test]
    fn card_ops_on_unknown_match_fail() {
        let mut store = MatchStore::default();
        assert!(store.add_card_to_match(3, "Yum Yum").is_err());
        assert!(store.remove_card_from_match(3, "Yum Yum").is_err());
    }

    #[test]
    fn list_orders_newest_first_then_by_id() {
        let mut store = MatchStore::default();
        let a = store.add_match_at(game("A", "", true), at(1, 10));
        let b = store.add_match_at(game("A", "", false), at(2, 10));
        let c = store.add_match_at(game("A", "", true), at(2, 10));

        let ids: Vec<u64> = store
            .list_matches(&MatchFilter::default())
            .iter()
            .map(|m| m.id)
            .collect();
        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn list_applies_filter() {
        let mut store = MatchStore::default();
        store.add_match_at(game("GMP Colo", "Wizard", true), at(1, 10));
        store.add_match_at(game("GMP Colo", "Wizard", false), at(1, 11));
        store.add_match_at(game("Swordsman", "Wizard", false), at(1, 12));

        let filter = MatchFilter {
            my_deck: Some("Colo".to_string()),
            result: Some(MatchResult::Loss),
            ..Default::default()
        };
        let listed = store.list_matches(&filter);
        assert_eq!(listed.len(), 1);
        assert!(!listed[0].won);
    }

    #[test]
    fn decklists_default_name_and_distinct_names() {
        let mut store = MatchStore::default();
        store.add_decklist_at(NewDecklist::default(), at(1, 1));
        store.add_decklist_at(
            NewDecklist {
                name: "Belly Colo".to_string(),
                ..Default::default()
            },
            at(2, 1),
        );
        store.add_decklist_at(
            NewDecklist {
                name: "Belly Colo".to_string(),
                ..Default::default()
            },
            at(3, 1),
        );

        assert_eq!(store.my_deck_names(), vec!["Belly Colo", DEFAULT_DECK_NAME]);
        assert_eq!(store.list_decklists()[0].created_at, at(3, 1));
    }

    #[test]
    fn delete_decklist() {
        let mut store = MatchStore::default();
        let id = store.add_decklist_at(NewDecklist::default(), at(1, 1));
        store.delete_decklist(id).unwrap();
        assert!(matches!(
            store.delete_decklist(id),
            Err(AppError::DecklistNotFound(_))
        ));
    }
}
