use crate::error::AppError;
use crate::store::models::Match;
use chrono::NaiveDate;
use std::borrow::Cow;
use std::io::Write;

const HEADER: [&str; 7] = [
    "Date",
    "My Deck",
    "Opponent",
    "Their Deck",
    "Result",
    "On Play",
    "Notes",
];

pub fn default_file_name(today: NaiveDate) -> String {
    format!("vibes_matches_{}.csv", today.format("%Y%m%d"))
}

fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

fn write_row<W: Write>(out: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line: Vec<Cow<'_, str>> = fields.iter().map(|f| escape(f)).collect();
    write!(out, "{}\r\n", line.join(","))
}

/// Writes the match log as CSV, newest match first.
pub fn export_csv<W: Write>(matches: &[Match], out: &mut W) -> Result<usize, AppError> {
    let mut sorted: Vec<&Match> = matches.iter().collect();
    sorted.sort_by(|a, b| b.played_at.cmp(&a.played_at));

    let io_err = |e: std::io::Error| AppError::IoError(format!("Failed to write CSV: {}", e));

    write_row(out, &HEADER).map_err(io_err)?;
    for m in &sorted {
        let date = m.played_at.format("%Y-%m-%d %H:%M").to_string();
        let result = if m.won { "Win" } else { "Loss" };
        let on_play = match m.on_play {
            Some(true) => "Yes",
            Some(false) => "No",
            None => "Unknown",
        };
        write_row(
            out,
            &[
                date.as_str(),
                m.my_deck.as_str(),
                m.opp_name.as_str(),
                m.opp_deck.as_str(),
                result,
                on_play,
                m.notes.as_str(),
            ],
        )
        .map_err(io_err)?;
    }

    tracing::info!(rows = sorted.len(), "exported matches");
    Ok(sorted.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(day: u32, won: bool, on_play: Option<bool>, notes: &str) -> Match {
        Match {
            id: day as u64,
            played_at: NaiveDate::from_ymd_opt(2025, 2, day)
                .unwrap()
                .and_hms_opt(18, 30, 0)
                .unwrap(),
            my_deck: "GMP Colo".to_string(),
            opp_name: "sam".to_string(),
            opp_deck: "Wizard".to_string(),
            won,
            on_play,
            notes: notes.to_string(),
            cards_seen: Vec::new(),
        }
    }

    fn render(matches: &[Match]) -> String {
        let mut buf = Vec::new();
        export_csv(matches, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn header_only_for_empty_log() {
        assert_eq!(
            render(&[]),
            "Date,My Deck,Opponent,Their Deck,Result,On Play,Notes\r\n"
        );
    }

    #[test]
    fn rows_are_newest_first_with_labels() {
        let out = render(&[game(1, true, Some(true), ""), game(2, false, None, "")]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[1], "2025-02-02 18:30,GMP Colo,sam,Wizard,Loss,Unknown,");
        assert_eq!(lines[2], "2025-02-01 18:30,GMP Colo,sam,Wizard,Win,Yes,");
    }

    #[test]
    fn notes_are_quoted_when_needed() {
        let out = render(&[game(1, true, Some(false), "kept \"Colosseum\", mulled")]);
        assert!(out.ends_with(",Win,No,\"kept \"\"Colosseum\"\", mulled\"\r\n"));
    }

    #[test]
    fn file_name_uses_date() {
        let day = NaiveDate::from_ymd_opt(2025, 12, 24).unwrap();
        assert_eq!(default_file_name(day), "vibes_matches_20251224.csv");
    }
}
