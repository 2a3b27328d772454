mod analysis;
mod catalog;
mod config;
mod display;
mod error;
mod export;
mod input;
mod logging;
mod store;

use analysis::archetype::ArchetypeDetector;
use analysis::stats::{StatsCalculator, StatsFilter};
use catalog::Catalog;
use chrono::Local;
use clap::{Parser, Subcommand};
use config::Config;
use display::output::{
    display_archetypes, display_card_counts, display_card_winrates, display_decklists,
    display_error, display_info, display_list, display_matches, display_session, display_stats,
    display_success, display_warning,
};
use error::AppError;
use input::DetectRequest;
use serde::Serialize;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use store::models::{MatchFilter, MatchResult, NewDecklist, NewMatch};
use store::MatchStore;

#[derive(Parser, Debug)]
#[command(name = "Vibes Tracker")]
#[command(about = "Log trading-card game matches, track win rates and guess opponent archetypes", long_about = None)]
struct Args {
    /// Directory holding store.json (overrides VIBES_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List every known card name
    Cards {
        /// Only show cards containing this text (case-insensitive)
        #[arg(short, long)]
        search: Option<String>,
    },

    /// List the archetypes the detector knows about
    Archetypes,

    /// Guess the opponent's archetype from cards seen
    Detect {
        /// Card names seen during the match
        #[arg(conflicts_with_all = ["body", "match_id"])]
        cards: Vec<String>,

        /// JSON request body: {"cards": [...]}
        #[arg(long = "json-body", conflicts_with = "match_id")]
        body: Option<String>,

        /// Use the cards recorded for a logged match
        #[arg(long = "match")]
        match_id: Option<u64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Log a finished match
    Log {
        /// The deck you played
        #[arg(short, long)]
        deck: String,

        /// Opponent's name
        #[arg(short, long, default_value = "")]
        opponent: String,

        /// Opponent's deck
        #[arg(long = "vs", default_value = "")]
        opp_deck: String,

        /// win or loss
        #[arg(short, long, value_parser = input::parse_result)]
        result: MatchResult,

        /// You went first
        #[arg(long, conflicts_with = "draw")]
        play: bool,

        /// You went second
        #[arg(long)]
        draw: bool,

        #[arg(short, long, default_value = "")]
        notes: String,

        /// Card seen from the opponent (repeatable)
        #[arg(short, long = "card")]
        cards: Vec<String>,
    },

    /// Show logged matches, newest first
    Matches {
        #[command(flatten)]
        filter: FilterArgs,

        /// Substring of the opponent's deck
        #[arg(long = "vs")]
        opp_deck: Option<String>,

        /// win or loss
        #[arg(short, long, value_parser = input::parse_result)]
        result: Option<MatchResult>,

        #[arg(long)]
        json: bool,
    },

    /// Delete a logged match
    Delete { id: u64 },

    /// Record another card seen in a logged match
    AddCard { id: u64, card: String },

    /// Remove one occurrence of a card from a logged match
    RemoveCard { id: u64, card: String },

    /// Overall, play/draw and matchup win rates
    Stats {
        #[command(flatten)]
        filter: FilterArgs,

        #[arg(long)]
        json: bool,
    },

    /// Card-level breakdowns
    Analytics {
        #[command(subcommand)]
        view: AnalyticsView,
    },

    /// Manage decklists
    Deck {
        #[command(subcommand)]
        action: DeckAction,
    },

    /// Distinct decklist names
    MyDecks,

    /// Today's matches
    Session,

    /// Write the match log as CSV
    Export {
        /// Output file (default: vibes_matches_<date>.csv)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(clap::Args, Debug)]
struct FilterArgs {
    /// First day to include (YYYY-MM-DD)
    #[arg(long, value_parser = input::parse_date)]
    from: Option<chrono::NaiveDate>,

    /// Last day to include (YYYY-MM-DD)
    #[arg(long, value_parser = input::parse_date)]
    to: Option<chrono::NaiveDate>,

    /// Your deck
    #[arg(short, long)]
    deck: Option<String>,
}

#[derive(Subcommand, Debug)]
enum AnalyticsView {
    /// Cards seen most often in wins
    Wins {
        #[arg(short, long)]
        deck: Option<String>,
    },
    /// Cards seen most often in losses
    Losses {
        #[arg(short, long)]
        deck: Option<String>,
    },
    /// Your win rate when each card showed up
    Winrate {
        #[arg(short, long)]
        deck: Option<String>,
    },
}

#[derive(Subcommand, Debug)]
enum DeckAction {
    /// Save a decklist
    Add {
        name: String,

        /// "Card Name:quantity" (repeatable)
        #[arg(short, long = "card")]
        cards: Vec<String>,

        #[arg(long)]
        public: bool,
    },
    /// Show saved decklists
    List,
    /// Delete a decklist
    Delete { id: u64 },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        display_error(&e.to_string());
        std::process::exit(1);
    }
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| AppError::JsonError(format!("Failed to serialize output: {}", e)))?;
    println!("{}", json);
    Ok(())
}

fn warn_unknown_cards<'a>(catalog: &Catalog, cards: impl IntoIterator<Item = &'a String>) {
    for card in cards {
        if !catalog.is_known_card(card) {
            tracing::warn!(card = %card, "card not in catalog");
            display_warning(&format!("'{}' is not a known card name", card));
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let mut config = Config::from_env()?;
    if let Some(dir) = args.data_dir {
        config.data_dir = dir;
    }

    logging::init_tracing(&config.log_filter);
    tracing::debug!(data_dir = %config.data_dir.display(), "starting");

    let catalog = Catalog::from_config(&config)?;

    match args.command {
        Command::Cards { search } => {
            let needle = search.map(|s| s.to_lowercase());
            let cards: Vec<&str> = catalog
                .card_names()
                .filter(|c| {
                    needle
                        .as_deref()
                        .map_or(true, |n| c.to_lowercase().contains(n))
                })
                .collect();
            display_list(&format!("🃏 CARDS ({})", cards.len()), &cards);
        }

        Command::Archetypes => {
            display_list("🧭 ARCHETYPES", &catalog.archetype_names());
        }

        Command::Detect {
            cards,
            body,
            match_id,
            json,
        } => {
            let cards = match (body, match_id) {
                (Some(body), _) => DetectRequest::from_json(&body)?.cards,
                (None, Some(id)) => {
                    let store = MatchStore::load(&config.store_path())?;
                    store.get_match(id)?.cards_seen.clone()
                }
                (None, None) => cards,
            };

            warn_unknown_cards(&catalog, &cards);
            let results = ArchetypeDetector::detect(catalog.knowledge_base(), &cards);

            if json {
                print_json(&results)?;
            } else {
                display_archetypes(&results, catalog.knowledge_base());
            }
        }

        Command::Log {
            deck,
            opponent,
            opp_deck,
            result,
            play,
            draw,
            notes,
            cards,
        } => {
            let on_play = match (play, draw) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };
            let new_match = NewMatch {
                my_deck: deck,
                opp_name: opponent,
                opp_deck,
                won: result == MatchResult::Win,
                on_play,
                notes,
                cards_seen: cards,
            };
            input::validate_new_match(&new_match)?;
            warn_unknown_cards(&catalog, &new_match.cards_seen);

            let mut store = MatchStore::load(&config.store_path())?;
            let id = store.add_match(new_match);
            store.save()?;
            display_success(&format!("Logged match #{}", id));

            let cards_seen = &store.get_match(id)?.cards_seen;
            if !cards_seen.is_empty() {
                let results = ArchetypeDetector::detect(catalog.knowledge_base(), cards_seen);
                if let Some(top) = results.first() {
                    display_info(&format!(
                        "Opponent looks like {} ({}% confidence)",
                        top.archetype, top.confidence
                    ));
                }
            }
        }

        Command::Matches {
            filter,
            opp_deck,
            result,
            json,
        } => {
            let store = MatchStore::load(&config.store_path())?;
            let matches = store.list_matches(&MatchFilter {
                date_from: filter.from,
                date_to: filter.to,
                my_deck: filter.deck,
                opp_deck,
                result,
            });

            if json {
                print_json(&matches)?;
            } else {
                display_matches(&matches);
            }
        }

        Command::Delete { id } => {
            let mut store = MatchStore::load(&config.store_path())?;
            store.delete_match(id)?;
            store.save()?;
            display_success(&format!("Deleted match #{}", id));
        }

        Command::AddCard { id, card } => {
            if card.trim().is_empty() {
                return Err(AppError::InvalidInput("card name must not be empty".to_string()));
            }
            warn_unknown_cards(&catalog, [&card]);

            let mut store = MatchStore::load(&config.store_path())?;
            store.add_card_to_match(id, &card)?;
            store.save()?;
            display_success(&format!("Added {} to match #{}", card, id));
        }

        Command::RemoveCard { id, card } => {
            let mut store = MatchStore::load(&config.store_path())?;
            if store.remove_card_from_match(id, &card)? {
                store.save()?;
                display_success(&format!("Removed {} from match #{}", card, id));
            } else {
                display_info(&format!("{} was not recorded for match #{}", card, id));
            }
        }

        Command::Stats { filter, json } => {
            let store = MatchStore::load(&config.store_path())?;
            let stats = StatsCalculator::summarize(
                store.matches(),
                &StatsFilter {
                    my_deck: filter.deck,
                    date_from: filter.from,
                    date_to: filter.to,
                },
            );

            if json {
                print_json(&stats)?;
            } else {
                display_stats(&stats);
            }
        }

        Command::Analytics { view } => {
            let store = MatchStore::load(&config.store_path())?;
            match view {
                AnalyticsView::Wins { deck } => {
                    let rows = StatsCalculator::cards_in_results(store.matches(), true, deck.as_deref());
                    display_card_counts("🏆 CARDS SEEN IN WINS", &rows);
                }
                AnalyticsView::Losses { deck } => {
                    let rows = StatsCalculator::cards_in_results(store.matches(), false, deck.as_deref());
                    display_card_counts("💀 CARDS SEEN IN LOSSES", &rows);
                }
                AnalyticsView::Winrate { deck } => {
                    let rows = StatsCalculator::winrate_vs_card(store.matches(), deck.as_deref());
                    display_card_winrates(&rows);
                }
            }
        }

        Command::Deck { action } => {
            let mut store = MatchStore::load(&config.store_path())?;
            match action {
                DeckAction::Add {
                    name,
                    cards,
                    public,
                } => {
                    let cards = input::parse_deck_cards(&cards)?;
                    warn_unknown_cards(&catalog, cards.keys());
                    let id = store.add_decklist(NewDecklist {
                        name,
                        cards,
                        is_public: public,
                    });
                    store.save()?;
                    display_success(&format!("Saved decklist #{}", id));
                }
                DeckAction::List => {
                    display_decklists(&store.list_decklists());
                }
                DeckAction::Delete { id } => {
                    store.delete_decklist(id)?;
                    store.save()?;
                    display_success(&format!("Deleted decklist #{}", id));
                }
            }
        }

        Command::MyDecks => {
            let store = MatchStore::load(&config.store_path())?;
            let names = store.my_deck_names();
            let names: Vec<&str> = names.iter().map(String::as_str).collect();
            display_list("🗂️ MY DECKS", &names);
        }

        Command::Session => {
            let store = MatchStore::load(&config.store_path())?;
            let session = StatsCalculator::session(store.matches(), Local::now().date_naive());
            display_session(&session);
        }

        Command::Export { output } => {
            let store = MatchStore::load(&config.store_path())?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(export::default_file_name(Local::now().date_naive()))
            });

            let file = File::create(&path).map_err(|e| {
                AppError::IoError(format!("Failed to create {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            let rows = export::export_csv(store.matches(), &mut writer)?;
            std::io::Write::flush(&mut writer)
                .map_err(|e| AppError::IoError(format!("Failed to write {}: {}", path.display(), e)))?;

            display_success(&format!("Exported {} matches to {}", rows, path.display()));
        }
    }

    Ok(())
}
