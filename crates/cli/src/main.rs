mod console;
mod menu;
mod render;

use anyhow::{Context, Result};
use booking::{BookingLedger, DEFAULT_TICKET_PRICE};
use catalog::Catalog;
use clap::{Parser, Subcommand};
use colored::Colorize;
use console::Console;
use menu::Menu;
use recommender::{recommend, ScriptedAnswers};
use std::io;
use std::path::PathBuf;

/// Cinema - ticket reservations and genre-based movie recommendations
#[derive(Parser)]
#[command(name = "cinema")]
#[command(
    about = "Cinema ticket reservation console with movie recommendations",
    long_about = None
)]
struct Cli {
    /// Catalog file (title::genre::duration::classification::showtimes); the
    /// built-in demo catalog is used when omitted
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Price of a single ticket
    #[arg(long, default_value_t = DEFAULT_TICKET_PRICE)]
    ticket_price: f32,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Search movies by title, genre or classification (case-sensitive substring match)
    Search {
        query: String,
    },

    /// Answer genre questions to get movie recommendations
    Recommend {
        /// Answer the questions from this string, one character per question
        /// (`y` for yes, anything else for no) instead of prompting
        #[arg(long)]
        answers: Option<String>,
    },
}

fn main() -> Result<()> {
    // Logs go to stderr so they don't interleave with prompts
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let catalog = match &cli.catalog {
        Some(path) => Catalog::load_from_file(path)
            .with_context(|| format!("Failed to load catalog from {}", path.display()))?,
        None => Catalog::demo(),
    };

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => handle_menu(&catalog, cli.ticket_price)?,
        Commands::Search { query } => handle_search(&catalog, &query)?,
        Commands::Recommend { answers } => handle_recommend(&catalog, answers)?,
    }

    Ok(())
}

/// Handle the 'menu' command
fn handle_menu(catalog: &Catalog, ticket_price: f32) -> Result<()> {
    let console = Console::new(io::stdin().lock(), io::stdout());
    let mut menu = Menu::new(catalog, BookingLedger::new(ticket_price), console);
    menu.run()
}

/// Handle the 'search' command
fn handle_search(catalog: &Catalog, query: &str) -> Result<()> {
    let matches = catalog.search(query);
    render::search_results(&mut io::stdout(), &matches)?;
    Ok(())
}

/// Handle the 'recommend' command
fn handle_recommend(catalog: &Catalog, answers: Option<String>) -> Result<()> {
    let movies = match answers {
        Some(script) => {
            let mut scripted = ScriptedAnswers::from_chars(&script);
            let movies = recommend(catalog.movies(), &mut scripted);
            for question in scripted.asked() {
                println!("{} {}", "?".cyan(), question);
            }
            movies
        }
        None => {
            let mut console = Console::new(io::stdin().lock(), io::stdout());
            recommend(catalog.movies(), &mut console)
        }
    }
    .context("Recommendation session ended without a result")?;

    render::recommendations(&mut io::stdout(), &movies)?;
    Ok(())
}
