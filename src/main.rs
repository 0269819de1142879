//! deckbuilder - command-line front end for tcg-deckbuilder
//!
//! Catalog search and set listing go to the configured API; everything else
//! works on deck files produced by an export.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tcg_deckbuilder::catalog::{card_back_url, sets_to_csv, sort_newest_first};
use tcg_deckbuilder::core::config::DEFAULT_CONFIG_FILE;
use tcg_deckbuilder::io::{export_json, export_to_file, import_from_file};
use tcg_deckbuilder::{
    BuilderConfig, CardDetails, CatalogClient, DeckBuilder, DeckCommand, DeckEvent, DeckState,
    ExportFormat, HttpCatalogClient, PageOutcome, SearchSession,
};

#[derive(Parser, Debug)]
#[command(name = "deckbuilder", version, about = "Pokémon TCG deck builder")]
struct Cli {
    /// Config file, missing is fine
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Override the catalog API base URL
    #[arg(long)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search the catalog (`#set-num`, `@set`, `$tag`, or a name)
    Search {
        query: String,
        /// Pages to fetch
        #[arg(long, default_value_t = 1)]
        pages: usize,
    },
    /// Print a deck file grouped by card, with counters
    Show {
        file: PathBuf,
        /// Also print card details
        #[arg(long)]
        details: bool,
    },
    /// Sort a deck file by supertype, type and name
    Sort {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write into this directory under the configured export file name
        #[arg(long, conflicts_with = "output")]
        dir: Option<PathBuf>,
    },
    /// List all sets newest first as CSV
    Sets {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Shuffle a deck file and deal an opening hand
    Deal {
        file: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Convert a deck file to the simple image-pair format
    Convert {
        file: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Write into this directory under the configured export file name
        #[arg(long, conflicts_with = "output")]
        dir: Option<PathBuf>,
        /// Use the fallback card back instead of asking the catalog
        #[arg(long)]
        offline: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = BuilderConfig::load(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;
    if let Some(url) = cli.api_url {
        config = config.with_api_base_url(url);
    }

    match cli.command {
        Command::Search { query, pages } => search(&config, &query, pages).await,
        Command::Show { file, details } => show(&file, details),
        Command::Sort { file, output, dir } => {
            let mut deck = load_deck(&file)?;
            deck.sort_in_place();
            write_deck(&config, &deck, ExportFormat::Full, &config.card_back_fallback_url, output, dir)
        }
        Command::Sets { output } => {
            let client = HttpCatalogClient::new(&config)?;
            let mut sets = client.sets().await.context("fetching sets")?;
            sort_newest_first(&mut sets);
            write_output(output.as_deref(), &sets_to_csv(&sets))
        }
        Command::Deal { file, seed } => deal(config, &file, seed),
        Command::Convert {
            file,
            output,
            dir,
            offline,
        } => {
            let deck = load_deck(&file)?;
            let back = if offline {
                config.card_back_fallback_url.clone()
            } else {
                let client = HttpCatalogClient::new(&config)?;
                card_back_url(&client, &config.card_back_fallback_url).await
            };
            write_deck(&config, &deck, ExportFormat::Simple, &back, output, dir)
        }
    }
}

async fn search(config: &BuilderConfig, query: &str, pages: usize) -> Result<()> {
    let client = HttpCatalogClient::new(config)?;
    let mut session = SearchSession::new(config.page_size);

    let mut outcome = session
        .run_search(&client, query)
        .await
        .with_context(|| format!("searching for {query:?}"))?;
    for _ in 1..pages {
        if !session.has_more() {
            break;
        }
        outcome = session.load_more(&client).await.context("loading more results")?;
    }

    if matches!(outcome, PageOutcome::Ignored) {
        bail!("empty query");
    }

    for card in session.results() {
        println!("{}\t${:.2}", card.identity(), card.price());
    }
    info!(
        results = session.results().len(),
        has_more = session.has_more(),
        "search finished"
    );
    Ok(())
}

fn show(file: &Path, details: bool) -> Result<()> {
    let builder = DeckBuilder::default().with_deck(load_deck(file)?);
    let view = builder.view();

    for entry in &view.entries {
        println!("{:>2}x {}\t${:.2}", entry.count, entry.card.identity(), entry.subtotal());
        if details {
            println!("{}", CardDetails::for_card(&entry.card));
        }
    }
    println!();
    println!(
        "Total: {}  Pokémon: {}  Trainer: {}  Energy: {}  Price: {}",
        view.stats.total,
        view.stats.pokemon,
        view.stats.trainer,
        view.stats.energy,
        view.stats.price_label()
    );
    Ok(())
}

fn deal(config: BuilderConfig, file: &Path, seed: Option<u64>) -> Result<()> {
    let mut builder = DeckBuilder::new(config).with_deck(load_deck(file)?);

    match builder.apply(DeckCommand::Simulate { seed }) {
        DeckEvent::Dealt(deal) => {
            println!("seed {}", deal.seed);
            println!("Hand:");
            for (card, place) in deal.hand.iter().zip(&deal.layout.hand) {
                println!(
                    "  {}\t{:+.1}° at {} ms",
                    card.identity(),
                    place.angle_degrees,
                    place.deal_at_ms
                );
            }
            println!("Prizes:");
            for card in &deal.prizes {
                println!("  {}", card.identity());
            }
            Ok(())
        }
        DeckEvent::Ignored(reason) => bail!("cannot deal: {reason:?}"),
        other => bail!("unexpected result: {other:?}"),
    }
}

fn load_deck(file: &Path) -> Result<DeckState> {
    let cards = import_from_file(file).with_context(|| format!("reading deck {}", file.display()))?;
    Ok(DeckState::from_cards(cards.into_iter().map(std::sync::Arc::new)))
}

fn write_deck(
    config: &BuilderConfig,
    deck: &DeckState,
    format: ExportFormat,
    card_back: &str,
    output: Option<PathBuf>,
    dir: Option<PathBuf>,
) -> Result<()> {
    if let Some(dir) = dir {
        let path = export_to_file(deck, format, card_back, &dir, &config.export_file_name)
            .with_context(|| format!("exporting into {}", dir.display()))?;
        println!("{}", path.display());
        return Ok(());
    }
    let json = export_json(deck, format, card_back)?;
    write_output(output.as_deref(), &json)
}

fn write_output(path: Option<&Path>, contents: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, contents).with_context(|| format!("writing {}", path.display()))?;
            info!(path = %path.display(), "written");
        }
        None => println!("{contents}"),
    }
    Ok(())
}
