//! PantryVoice - Grocery lists from speech or text
//!
//! Command-line front-end over the transcript pipeline and the JSON list store.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::oneshot;
use tracing::{debug, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use pantryvoice::config::Config;
use pantryvoice::core::Confidence;
use pantryvoice::lexicon::CategoryId;
use pantryvoice::lexicon::pack::load_with_packs;
use pantryvoice::pipeline::{Pipeline, ProcessOutcome};
use pantryvoice::session::VoiceSession;
use pantryvoice::speech::{self, ChannelSource, TranscriptEvent};
use pantryvoice::store::{JsonListStore, ListKey, ListStore};
use pantryvoice::utils::find_matches;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// List owner (defaults to the configured user)
    #[arg(short, long, global = true)]
    user: Option<String>,

    /// List date, YYYY-MM-DD (defaults to today)
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Add typed items; only commas and semicolons separate them
    Add {
        text: String,
        #[command(flatten)]
        review: ReviewArgs,
    },
    /// Process one spoken utterance
    Say {
        text: String,
        #[command(flatten)]
        review: ReviewArgs,
    },
    /// Read transcript events from stdin: `~text` interim, a line final,
    /// an empty line ends the session, `/stop` stops it
    Listen {
        #[command(flatten)]
        review: ReviewArgs,
    },
    /// Print the list
    List,
    /// Show how a single phrase is corrected and categorized
    Check { text: String },
}

#[derive(ClapArgs, Debug, Clone, Copy)]
struct ReviewArgs {
    /// Accept every suggested correction
    #[arg(long, conflicts_with = "reject")]
    accept: bool,

    /// Keep the original text of every suggestion
    #[arg(long)]
    reject: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    let config = Config::load()?;

    // Setup logging
    let level = if args.verbose {
        Level::DEBUG
    } else {
        config.log_level.parse().unwrap_or(Level::INFO)
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber)?;

    debug!("🛒 PantryVoice v{} starting...", env!("CARGO_PKG_VERSION"));

    let lexicon = load_with_packs(&config.lexicon_packs)?;
    let pipeline = Arc::new(Pipeline::new(
        Arc::new(lexicon),
        config.pipeline_settings()?,
    ));
    info!("📚 Lexicon ready ({} entries)", pipeline.lexicon().len());

    let user = args.user.clone().unwrap_or_else(|| config.default_user.clone());
    let key = match args.date {
        Some(date) => ListKey::new(&user, date),
        None => ListKey::today(&user),
    };

    if let Command::Check { text } = &args.command {
        check(&pipeline, text);
        return Ok(());
    }

    let mut store = JsonListStore::open(config.store_path.clone())?;
    let mut session = VoiceSession::new(pipeline);

    match args.command {
        Command::Add { text, review } => {
            let current = store.item_texts(&key)?;
            let outcome = session.submit_manual(&text, &current);
            commit(&mut store, &key, &mut session, outcome, review)?;
        }
        Command::Say { text, review } => {
            session.begin_listening();
            session.handle_event(TranscriptEvent::Final(text), &[]);
            let current = store.item_texts(&key)?;
            let outcome = session
                .handle_event(TranscriptEvent::End, &current)
                .unwrap_or_default();
            commit(&mut store, &key, &mut session, outcome, review)?;
        }
        Command::Listen { review } => {
            let outcome = listen_stdin(&store, &key, &mut session).await;
            commit(&mut store, &key, &mut session, outcome, review)?;
        }
        Command::List => print_list(&store, &key)?,
        Command::Check { .. } => {}
    }

    Ok(())
}

/// Feed stdin lines to the session as transcript events
async fn listen_stdin(
    store: &JsonListStore,
    key: &ListKey,
    session: &mut VoiceSession,
) -> ProcessOutcome {
    let (tx, mut source) = ChannelSource::channel(32);
    let (stop_tx, stop_rx) = oneshot::channel();

    tokio::spawn(async move {
        let mut stop_tx = Some(stop_tx);
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Ok(Some(line)) = lines.next_line().await {
            let line = line.trim();
            let event = if line == "/stop" {
                if let Some(stop) = stop_tx.take() {
                    let _ = stop.send(());
                }
                break;
            } else if line.is_empty() {
                TranscriptEvent::End
            } else if let Some(interim) = line.strip_prefix('~') {
                TranscriptEvent::Interim(interim.trim().to_string())
            } else {
                TranscriptEvent::Final(line.to_string())
            };

            let end = event == TranscriptEvent::End;
            if tx.send(event).await.is_err() || end {
                break;
            }
        }
    });

    info!("🎙️ Listening on stdin (empty line to finish, /stop to stop)");
    let current_items = || {
        store.item_texts(key).unwrap_or_else(|e| {
            warn!("Could not read current list: {}", e);
            Vec::new()
        })
    };
    speech::listen(&mut source, session, current_items, stop_rx).await
}

/// Commit ready items, then settle pending suggestions per the review flags
fn commit(
    store: &mut JsonListStore,
    key: &ListKey,
    session: &mut VoiceSession,
    outcome: ProcessOutcome,
    review: ReviewArgs,
) -> Result<()> {
    if outcome.is_empty() {
        println!("Nothing to add.");
    }

    for item in store.add_items(key, &outcome.ready_items)? {
        println!("+ {} ({})", item.text, item.category);
    }

    if session.review().is_empty() {
        return Ok(());
    }

    for suggestion in session.review().pending() {
        println!(
            "? {} -> {} ({})",
            suggestion.original, suggestion.corrected, suggestion.category
        );
    }

    let current = store.item_texts(key)?;
    let resolved = if review.accept {
        session.accept_all(&current)
    } else if review.reject {
        session.reject_all(&current)
    } else {
        println!("Re-run with --accept or --reject to add the suggested items.");
        return Ok(());
    };

    for item in store.add_items(key, &resolved)? {
        println!("+ {} ({})", item.text, item.category);
    }
    Ok(())
}

fn print_list(store: &JsonListStore, key: &ListKey) -> Result<()> {
    let items = store
        .items(key)
        .with_context(|| format!("Failed to read list for {}", key.user))?;
    if items.is_empty() {
        println!("{} has no items for {}.", key.user, key.date);
        return Ok(());
    }

    println!("{} - {}", key.user, key.date);
    for category in CategoryId::ALL {
        for item in items.iter().filter(|i| i.category == category) {
            let mark = if item.completed { "x" } else { " " };
            println!("[{}] {} ({})", mark, item.text, item.category);
        }
    }
    Ok(())
}

fn check(pipeline: &Pipeline, text: &str) {
    let (correction, category) = pipeline.resolve_phrase(text);
    if correction.was_corrected {
        println!(
            "{} -> {} ({:?}, {:?})",
            correction.original_text,
            correction.corrected_text,
            correction.confidence,
            correction.conversion
        );
    } else {
        println!(
            "{} (unchanged, {:?})",
            correction.corrected_text, correction.confidence
        );
        if correction.confidence == Confidence::Low {
            let near = find_matches(
                &correction.original_text,
                pipeline.lexicon().canonical_names(),
                3,
                0.6,
            );
            if !near.is_empty() {
                let names: Vec<String> = near
                    .iter()
                    .map(|m| format!("{} ({:.2})", m.value, m.score))
                    .collect();
                println!("Closest: {}", names.join(", "));
            }
        }
    }
    println!("Category: {}", category);
}
