//! Parsing and validation of user-supplied values before they reach the
//! store or the detector.

use crate::error::AppError;
use crate::store::models::{MatchResult, NewMatch};
use chrono::NaiveDate;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Body of a detection request: `{"cards": ["...", ...]}`.
#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DetectRequest {
    #[serde(default)]
    pub cards: Vec<String>,
}

impl DetectRequest {
    pub fn from_json(body: &str) -> Result<Self, AppError> {
        serde_json::from_str(body)
            .map_err(|e| AppError::InvalidInput(format!("detection request: {}", e)))
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::InvalidInput(format!("'{}' is not a date (expected YYYY-MM-DD)", value))
    })
}

pub fn parse_result(value: &str) -> Result<MatchResult, AppError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "win" | "w" => Ok(MatchResult::Win),
        "loss" | "l" => Ok(MatchResult::Loss),
        other => Err(AppError::InvalidInput(format!(
            "result must be 'win' or 'loss', got '{}'",
            other
        ))),
    }
}

/// `"Card Name:3"`, or just `"Card Name"` for a single copy.
pub fn parse_deck_entry(value: &str) -> Result<(String, u32), AppError> {
    let (name, quantity) = match value.rsplit_once(':') {
        Some((name, qty)) => {
            let qty: u32 = qty.trim().parse().map_err(|_| {
                AppError::InvalidInput(format!("bad quantity in '{}'", value))
            })?;
            (name.trim(), qty)
        }
        None => (value.trim(), 1),
    };

    if name.is_empty() {
        return Err(AppError::InvalidInput(format!("missing card name in '{}'", value)));
    }
    if quantity == 0 {
        return Err(AppError::InvalidInput(format!(
            "quantity for '{}' must be at least 1",
            name
        )));
    }

    Ok((name.to_string(), quantity))
}

/// Repeated entries for the same card add up.
pub fn parse_deck_cards(entries: &[String]) -> Result<BTreeMap<String, u32>, AppError> {
    let mut cards = BTreeMap::new();
    for entry in entries {
        let (name, qty) = parse_deck_entry(entry)?;
        let total = cards.entry(name).or_insert(0u32);
        *total = total.checked_add(qty).ok_or_else(|| {
            AppError::InvalidInput(format!("quantity overflow in '{}'", entry))
        })?;
    }
    Ok(cards)
}

pub fn validate_new_match(new_match: &NewMatch) -> Result<(), AppError> {
    if new_match.my_deck.trim().is_empty() {
        return Err(AppError::InvalidInput("your deck name must not be empty".to_string()));
    }
    if new_match.cards_seen.iter().any(|c| c.trim().is_empty()) {
        return Err(AppError::InvalidInput("card names must not be empty".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detect_request_accepts_string_list() {
        let req = DetectRequest::from_json(r#"{"cards": ["Colosseum", "Yum Yum"]}"#).unwrap();
        assert_eq!(req.cards, vec!["Colosseum", "Yum Yum"]);
    }

    #[test]
    fn detect_request_defaults_to_no_cards() {
        assert!(DetectRequest::from_json("{}").unwrap().cards.is_empty());
    }

    #[test]
    fn detect_request_rejects_wrong_shapes() {
        for body in [
            r#"{"cards": "Colosseum"}"#,
            r#"{"cards": [1, 2]}"#,
            r#"{"cards": [["Colosseum"]]}"#,
            r#"["Colosseum"]"#,
            r#"{"card": ["Colosseum"]}"#,
        ] {
            assert!(
                matches!(DetectRequest::from_json(body), Err(AppError::InvalidInput(_))),
                "accepted {}",
                body
            );
        }
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_date("2025-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
        );
        assert!(parse_date("31/01/2025").is_err());
        assert!(parse_date("2025-02-30").is_err());
    }

    #[test]
    fn results() {
        assert_eq!(parse_result("Win").unwrap(), MatchResult::Win);
        assert_eq!(parse_result("l").unwrap(), MatchResult::Loss);
        assert!(parse_result("draw").is_err());
    }

    #[test]
    fn deck_entries() {
        assert_eq!(parse_deck_entry("Colosseum:3").unwrap(), ("Colosseum".to_string(), 3));
        assert_eq!(parse_deck_entry("Yum Yum").unwrap(), ("Yum Yum".to_string(), 1));
        assert!(parse_deck_entry("Colosseum:0").is_err());
        assert!(parse_deck_entry("Colosseum:many").is_err());
        assert!(parse_deck_entry(":2").is_err());
    }

    #[test]
    fn deck_entries_accumulate() {
        let cards = parse_deck_cards(&["Colosseum:2".to_string(), "Colosseum".to_string()]).unwrap();
        assert_eq!(cards["Colosseum"], 3);
    }

    #[test]
    fn deck_entry_totals_reject_overflow() {
        let entries = ["Colosseum:4294967295".to_string(), "Colosseum".to_string()];
        assert!(matches!(
            parse_deck_cards(&entries),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn new_match_needs_a_deck() {
        let mut m = NewMatch::default();
        assert!(validate_new_match(&m).is_err());
        m.my_deck = "GMP Colo".to_string();
        assert!(validate_new_match(&m).is_ok());
        m.cards_seen.push("  ".to_string());
        assert!(validate_new_match(&m).is_err());
    }
}
