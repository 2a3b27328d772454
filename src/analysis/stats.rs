use crate::store::models::{within_dates, Match};
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use std::collections::HashMap;

pub const TOP_CARDS_LIMIT: usize = 20;
pub const MIN_CARD_SAMPLE: usize = 3;

/// Percentage rounded to one decimal, 0 for an empty sample.
pub fn win_rate(wins: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        (wins as f64 / total as f64 * 1000.0).round() / 10.0
    }
}

#[derive(Debug, Clone, Default)]
pub struct StatsFilter {
    /// Exact deck label, unlike the substring match used when listing.
    pub my_deck: Option<String>,
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
}

impl StatsFilter {
    pub fn accepts(&self, m: &Match) -> bool {
        self.my_deck.as_deref().map_or(true, |deck| m.my_deck == deck)
            && within_dates(m, self.date_from, self.date_to)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchupStats {
    pub opp_deck: String,
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
    pub otp_total: usize,
    pub otp_wins: usize,
    pub otp_win_rate: f64,
    pub otd_total: usize,
    pub otd_wins: usize,
    pub otd_win_rate: f64,
    pub matchups: Vec<MatchupStats>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardCount {
    pub card: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardWinRate {
    pub card: String,
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSummary {
    pub matches: Vec<Match>,
    pub total: usize,
    pub wins: usize,
    pub losses: usize,
    pub win_rate: f64,
}

#[derive(Debug, Clone, Default)]
struct Record {
    total: usize,
    wins: usize,
}

impl Record {
    fn add(&mut self, won: bool) {
        self.total += 1;
        if won {
            self.wins += 1;
        }
    }
}

/// Tallies wins per key (opponent deck, card name).
struct RecordTracker {
    records: HashMap<String, Record>,
}

impl RecordTracker {
    fn new() -> Self {
        RecordTracker {
            records: HashMap::new(),
        }
    }

    fn add(&mut self, key: &str, won: bool) {
        self.records.entry(key.to_string()).or_default().add(won);
    }

    /// Most played first, ties by key.
    fn into_sorted(self) -> Vec<(String, Record)> {
        let mut rows: Vec<(String, Record)> = self.records.into_iter().collect();
        rows.sort_by(|a, b| b.1.total.cmp(&a.1.total).then_with(|| a.0.cmp(&b.0)));
        rows
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    pub fn summarize(matches: &[Match], filter: &StatsFilter) -> StatsSummary {
        let mut overall = Record::default();
        let mut on_play = Record::default();
        let mut on_draw = Record::default();
        let mut matchups = RecordTracker::new();

        for m in matches.iter().filter(|m| filter.accepts(m)) {
            overall.add(m.won);
            match m.on_play {
                Some(true) => on_play.add(m.won),
                Some(false) => on_draw.add(m.won),
                None => {}
            }
            if !m.opp_deck.is_empty() {
                matchups.add(&m.opp_deck, m.won);
            }
        }

        let matchups = matchups
            .into_sorted()
            .into_iter()
            .map(|(opp_deck, r)| MatchupStats {
                opp_deck,
                total: r.total,
                wins: r.wins,
                losses: r.total - r.wins,
                win_rate: win_rate(r.wins, r.total),
            })
            .collect();

        StatsSummary {
            total: overall.total,
            wins: overall.wins,
            losses: overall.total - overall.wins,
            win_rate: win_rate(overall.wins, overall.total),
            otp_total: on_play.total,
            otp_wins: on_play.wins,
            otp_win_rate: win_rate(on_play.wins, on_play.total),
            otd_total: on_draw.total,
            otd_wins: on_draw.wins,
            otd_win_rate: win_rate(on_draw.wins, on_draw.total),
            matchups,
        }
    }

    /// Cards most often seen in wins (`won = true`) or losses.
    pub fn cards_in_results(matches: &[Match], won: bool, my_deck: Option<&str>) -> Vec<CardCount> {
        let mut tracker = RecordTracker::new();
        for m in matches
            .iter()
            .filter(|m| m.won == won && my_deck.map_or(true, |deck| m.my_deck == deck))
        {
            for card in &m.cards_seen {
                tracker.add(card, m.won);
            }
        }

        let mut rows: Vec<CardCount> = tracker
            .into_sorted()
            .into_iter()
            .map(|(card, r)| CardCount {
                card,
                count: r.total,
            })
            .collect();
        rows.truncate(TOP_CARDS_LIMIT);
        rows
    }

    /// Win rate in matches where each card was seen, for cards seen at least three times.
    pub fn winrate_vs_card(matches: &[Match], my_deck: Option<&str>) -> Vec<CardWinRate> {
        let mut tracker = RecordTracker::new();
        for m in matches
            .iter()
            .filter(|m| my_deck.map_or(true, |deck| m.my_deck == deck))
        {
            for card in &m.cards_seen {
                tracker.add(card, m.won);
            }
        }

        tracker
            .into_sorted()
            .into_iter()
            .filter(|(_, r)| r.total >= MIN_CARD_SAMPLE)
            .map(|(card, r)| CardWinRate {
                card,
                total: r.total,
                wins: r.wins,
                losses: r.total - r.wins,
                win_rate: win_rate(r.wins, r.total),
            })
            .collect()
    }

    pub fn session(matches: &[Match], today: NaiveDate) -> SessionSummary {
        let start: NaiveDateTime = today.and_time(chrono::NaiveTime::MIN);
        let mut todays: Vec<Match> = matches
            .iter()
            .filter(|m| m.played_at >= start)
            .cloned()
            .collect();
        todays.sort_by(|a, b| b.played_at.cmp(&a.played_at).then_with(|| b.id.cmp(&a.id)));

        let total = todays.len();
        let wins = todays.iter().filter(|m| m.won).count();

        SessionSummary {
            matches: todays,
            total,
            wins,
            losses: total - wins,
            win_rate: win_rate(wins, total),
        }
    }
}
