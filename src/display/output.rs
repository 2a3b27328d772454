use crate::analysis::archetype::ScoredArchetype;
use crate::analysis::stats::{CardCount, CardWinRate, SessionSummary, StatsSummary};
use crate::catalog::archetypes::KnowledgeBase;
use crate::store::models::{Decklist, Match};
use colored::*;
use tabled::{settings::Style, Table, Tabled};

#[derive(Tabled)]
struct ArchetypeRow {
    rank: String,
    archetype: String,
    score: String,
    confidence: String,
    signature: String,
    supporting: String,
}

#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "#")]
    id: String,
    date: String,
    deck: String,
    opponent: String,
    their_deck: String,
    result: String,
    order: String,
    cards: String,
}

#[derive(Tabled)]
struct MatchupRow {
    opponent_deck: String,
    games: String,
    record: String,
    win_rate: String,
}

#[derive(Tabled)]
struct CardCountRow {
    rank: String,
    card: String,
    seen: String,
}

#[derive(Tabled)]
struct CardWinRateRow {
    card: String,
    games: String,
    record: String,
    win_rate: String,
}

#[derive(Tabled)]
struct DecklistRow {
    #[tabled(rename = "#")]
    id: String,
    name: String,
    cards: String,
    public: String,
    created: String,
}

fn colored_rate(rate: f64) -> String {
    let text = format!("{:.1}%", rate);
    if rate >= 55.0 {
        text.green().to_string()
    } else if rate < 45.0 {
        text.red().to_string()
    } else {
        text.yellow().to_string()
    }
}

fn header(title: &str, width: usize) {
    println!("\n{}", title.bold().cyan());
    println!("{}\n", "=".repeat(width).cyan());
}

pub fn display_error(error: &str) {
    eprintln!("{} {}", "❌ Error:".red().bold(), error);
}

pub fn display_warning(message: &str) {
    eprintln!("{} {}", "⚠️".yellow(), message);
}

pub fn display_info(message: &str) {
    println!("{} {}", "ℹ️".cyan(), message);
}

pub fn display_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

pub fn display_list(title: &str, items: &[&str]) {
    header(title, 60);
    if items.is_empty() {
        println!("{}", "(none)".yellow());
        return;
    }
    for item in items {
        println!("  {}", item);
    }
    println!();
}

pub fn display_archetypes(results: &[ScoredArchetype], knowledge_base: &KnowledgeBase) {
    header("🔎 ARCHETYPE DETECTION", 60);

    if results.is_empty() {
        println!("{}", "No archetype matches the cards seen".yellow());
        return;
    }

    let rows: Vec<ArchetypeRow> = results
        .iter()
        .enumerate()
        .map(|(idx, r)| {
            let signature_total = knowledge_base
                .get(&r.archetype)
                .map(|a| a.signature_cards.len())
                .unwrap_or(0);
            ArchetypeRow {
                rank: format!("#{}", idx + 1),
                archetype: r.archetype.clone(),
                score: r.score.to_string(),
                confidence: format!("{}%", r.confidence),
                signature: format!("{}/{}", r.signature_hits, signature_total),
                supporting: r.supporting_hits.to_string(),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}", table);

    if let Some(top) = results.first() {
        println!("\n{}", "Best Guess".bold().yellow());
        println!(
            "  {} ({} signature, {} supporting cards matched)",
            top.archetype.bold(),
            top.signature_hits,
            top.supporting_hits
        );
        if top.confidence == 100 {
            println!("  {} Every signature card seen", "🎯".green());
        } else if top.confidence < 50 {
            println!("  {} Low confidence - keep watching", "⚠️".yellow());
        }
    }

    println!();
}

pub fn display_matches(matches: &[&Match]) {
    header(&format!("📊 MATCH LOG ({} games)", matches.len()), 80);

    if matches.is_empty() {
        println!("{}", "No matches logged yet".yellow());
        return;
    }

    print_match_table(matches);
}

fn session_title(session: &SessionSummary) -> String {
    format!("📅 TODAY'S SESSION ({} games)", session.total)
}

fn print_match_table(matches: &[&Match]) {
    let rows: Vec<MatchRow> = matches
        .iter()
        .map(|m| MatchRow {
            id: m.id.to_string(),
            date: m.played_at.format("%Y-%m-%d %H:%M").to_string(),
            deck: m.my_deck.clone(),
            opponent: m.opp_name.clone(),
            their_deck: m.opp_deck.clone(),
            result: if m.won {
                "WIN".green().to_string()
            } else {
                "LOSS".red().to_string()
            },
            order: match m.on_play {
                Some(true) => "play".to_string(),
                Some(false) => "draw".to_string(),
                None => "-".to_string(),
            },
            cards: m.cards_seen.join(", "),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_stats(stats: &StatsSummary) {
    header("📈 STATISTICS", 60);

    if stats.total == 0 {
        println!("{}", "No matches for this selection".yellow());
        return;
    }

    println!(
        "{} {} W / {} L ({})",
        "Overall:".bold(),
        stats.wins.to_string().green(),
        stats.losses.to_string().red(),
        colored_rate(stats.win_rate)
    );
    println!(
        "{} {}/{} ({})",
        "On the play:".bold(),
        stats.otp_wins,
        stats.otp_total,
        colored_rate(stats.otp_win_rate)
    );
    println!(
        "{} {}/{} ({})\n",
        "On the draw:".bold(),
        stats.otd_wins,
        stats.otd_total,
        colored_rate(stats.otd_win_rate)
    );

    if stats.matchups.is_empty() {
        return;
    }

    let rows: Vec<MatchupRow> = stats
        .matchups
        .iter()
        .map(|m| MatchupRow {
            opponent_deck: m.opp_deck.clone(),
            games: m.total.to_string(),
            record: format!("{}-{}", m.wins, m.losses),
            win_rate: colored_rate(m.win_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);

    if let Some(worst) = stats
        .matchups
        .iter()
        .filter(|m| m.total >= 3)
        .min_by(|a, b| a.win_rate.partial_cmp(&b.win_rate).unwrap_or(std::cmp::Ordering::Equal))
    {
        println!("{}", "Toughest Matchup".bold().red());
        println!(
            "  {} at {:.1}% over {} games\n",
            worst.opp_deck, worst.win_rate, worst.total
        );
    }
}

pub fn display_card_counts(title: &str, rows: &[CardCount]) {
    header(title, 60);

    if rows.is_empty() {
        println!("{}", "No cards recorded".yellow());
        return;
    }

    let rows: Vec<CardCountRow> = rows
        .iter()
        .enumerate()
        .map(|(idx, r)| CardCountRow {
            rank: format!("#{}", idx + 1),
            card: r.card.clone(),
            seen: r.count.to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_card_winrates(rows: &[CardWinRate]) {
    header("🃏 WIN RATE WHEN CARD WAS SEEN", 60);

    if rows.is_empty() {
        println!("{}", "No card seen in at least 3 matches".yellow());
        return;
    }

    let rows: Vec<CardWinRateRow> = rows
        .iter()
        .map(|r| CardWinRateRow {
            card: r.card.clone(),
            games: r.total.to_string(),
            record: format!("{}-{}", r.wins, r.losses),
            win_rate: colored_rate(r.win_rate),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_decklists(decks: &[&Decklist]) {
    header("🗂️ DECKLISTS", 60);

    if decks.is_empty() {
        println!("{}", "No decklists saved".yellow());
        return;
    }

    let rows: Vec<DecklistRow> = decks
        .iter()
        .map(|d| DecklistRow {
            id: d.id.to_string(),
            name: d.name.clone(),
            cards: d.cards.values().sum::<u32>().to_string(),
            public: if d.is_public { "yes" } else { "no" }.to_string(),
            created: d.created_at.format("%Y-%m-%d %H:%M").to_string(),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    println!("{}\n", table);
}

pub fn display_session(session: &SessionSummary) {
    header(&session_title(session), 80);

    if session.matches.is_empty() {
        println!("{}", "No matches played today".yellow());
        return;
    }

    let refs: Vec<&Match> = session.matches.iter().collect();
    print_match_table(&refs);

    println!(
        "{} {} W / {} L ({})\n",
        "📅 Today:".bold(),
        session.wins.to_string().green(),
        session.losses.to_string().red(),
        colored_rate(session.win_rate)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_colour_bands() {
        colored::control::set_override(false);
        assert_eq!(colored_rate(60.0), "60.0%");
        assert_eq!(colored_rate(33.3), "33.3%");
        colored::control::unset_override();
    }

    #[test]
    fn session_has_its_own_heading() {
        let session = SessionSummary {
            matches: Vec::new(),
            total: 2,
            wins: 1,
            losses: 1,
            win_rate: 50.0,
        };
        let title = session_title(&session);
        assert!(title.contains("SESSION"));
        assert!(!title.contains("MATCH LOG"));
        assert!(title.contains("2 games"));
    }
}
