use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const DEFAULT_DECK_NAME: &str = "Unnamed Deck";

/// A logged game against one opponent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub id: u64,
    pub played_at: NaiveDateTime,
    pub my_deck: String,
    #[serde(default)]
    pub opp_name: String,
    #[serde(default)]
    pub opp_deck: String,
    pub won: bool,
    /// `None` when the player did not record who went first.
    #[serde(default)]
    pub on_play: Option<bool>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub cards_seen: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewMatch {
    pub my_deck: String,
    pub opp_name: String,
    pub opp_deck: String,
    pub won: bool,
    pub on_play: Option<bool>,
    pub notes: String,
    pub cards_seen: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decklist {
    pub id: u64,
    pub name: String,
    pub cards: BTreeMap<String, u32>,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDecklist {
    pub name: String,
    pub cards: BTreeMap<String, u32>,
    pub is_public: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchResult {
    Win,
    Loss,
}

impl MatchResult {
    pub fn matches(self, won: bool) -> bool {
        match self {
            MatchResult::Win => won,
            MatchResult::Loss => !won,
        }
    }
}

/// Query over the match log. Empty fields do not filter.
#[derive(Debug, Clone, Default)]
pub struct MatchFilter {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    /// Substring of the player's deck label.
    pub my_deck: Option<String>,
    /// Substring of the opponent's deck label.
    pub opp_deck: Option<String>,
    pub result: Option<MatchResult>,
}

impl MatchFilter {
    pub fn accepts(&self, m: &Match) -> bool {
        within_dates(m, self.date_from, self.date_to)
            && self
                .my_deck
                .as_deref()
                .map_or(true, |deck| m.my_deck.contains(deck))
            && self
                .opp_deck
                .as_deref()
                .map_or(true, |deck| m.opp_deck.contains(deck))
            && self.result.map_or(true, |r| r.matches(m.won))
    }
}

/// Date bounds are inclusive of the whole day at both ends, minute precision.
pub fn within_dates(m: &Match, from: Option<NaiveDate>, to: Option<NaiveDate>) -> bool {
    let day = m.played_at.date();
    from.map_or(true, |d| day >= d) && to.map_or(true, |d| day <= d)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(my_deck: &str, opp_deck: &str, won: bool, day: u32) -> Match {
        Match {
            id: 1,
            played_at: NaiveDate::from_ymd_opt(2025, 3, day)
                .unwrap()
                .and_hms_opt(23, 59, 0)
                .unwrap(),
            my_deck: my_deck.to_string(),
            opp_name: String::new(),
            opp_deck: opp_deck.to_string(),
            won,
            on_play: None,
            notes: String::new(),
            cards_seen: Vec::new(),
        }
    }

    #[test]
    fn empty_filter_accepts_everything() {
        assert!(MatchFilter::default().accepts(&sample("GMP Colo", "", false, 1)));
    }

    #[test]
    fn deck_filters_are_substring_matches() {
        let filter = MatchFilter {
            my_deck: Some("Colo".to_string()),
            opp_deck: Some("Globe".to_string()),
            ..Default::default()
        };
        assert!(filter.accepts(&sample("GMP Colo", "Bash Globe", true, 1)));
        assert!(!filter.accepts(&sample("GMP Aggro", "Bash Globe", true, 1)));
    }

    #[test]
    fn date_bounds_include_whole_days() {
        let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        let filter = MatchFilter {
            date_from: Some(day),
            date_to: Some(day),
            ..Default::default()
        };
        assert!(filter.accepts(&sample("A", "", true, 10)));
        assert!(!filter.accepts(&sample("A", "", true, 9)));
        assert!(!filter.accepts(&sample("A", "", true, 11)));
    }

    #[test]
    fn result_filter() {
        let wins = MatchFilter {
            result: Some(MatchResult::Win),
            ..Default::default()
        };
        assert!(wins.accepts(&sample("A", "", true, 1)));
        assert!(!wins.accepts(&sample("A", "", false, 1)));
    }
}
