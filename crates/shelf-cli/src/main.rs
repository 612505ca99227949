// Rust guideline compliant 2026-10-16

//! Shelf CLI Application
//!
//! Command-line interface for the Shelf library inventory.

use clap::Parser;
use shelf_cli::commands::{self, search::Query};
use shelf_cli::terminal::{color_choice, print_error};
use shelf_cli::{create_formatter, logging, menu};
use shelf_core::{Config, RecordFormat};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "shelf",
    version,
    about = "Shelf: a flat-file library inventory",
    long_about = "Shelf keeps a list of books in a plain text file and tracks which ones are issued. Run it without a subcommand for the interactive menu.",
    after_help = "Examples:\n  shelf init\n  shelf add \"Dune\" \"Frank Herbert\" 9780441013593\n  shelf issue 9780441013593\n  shelf list --status issued\n  shelf search --title dune\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Inventory data file (overrides config)
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Record format of the data file (overrides config)
    #[arg(long, value_enum, global = true)]
    record_format: Option<RecordFormatArg>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum RecordFormatArg {
    Pipe,
    Jsonl,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a default config and an empty data file
    Init,

    /// Add a book
    Add {
        /// Title of the book
        title: String,

        /// Author of the book
        author: String,

        /// ISBN (duplicates are allowed)
        isbn: String,
    },

    /// Issue the first book with this ISBN
    Issue {
        /// ISBN
        isbn: String,
    },

    /// Return the first book with this ISBN
    Return {
        /// ISBN
        isbn: String,
    },

    /// List books
    List {
        /// Filter by status
        #[arg(long, value_parser = ["available", "issued"])]
        status: Option<String>,
    },

    /// Search books by title or ISBN
    Search {
        /// Case-insensitive title substring
        #[arg(long, conflicts_with = "isbn", required_unless_present = "isbn")]
        title: Option<String>,

        /// Exact ISBN
        #[arg(long)]
        isbn: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let choice = color_choice(cli.no_color);

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            print_error(choice, &format!("{:#}", e));
            std::process::exit(2);
        }
    };

    let output_format = match cli.format {
        Some(OutputFormat::Json) => shelf_core::OutputFormat::Json,
        Some(OutputFormat::Table) => shelf_core::OutputFormat::Table,
        Some(OutputFormat::Plain) => shelf_core::OutputFormat::Plain,
        None if cli.json => shelf_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(output_format);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = run(cli.command, &config, choice, formatter.as_ref(), &mut out) {
        let code = e
            .downcast_ref::<shelf_core::Error>()
            .map_or("unknown", shelf_core::Error::code);
        let message = format!("{:#}", e);
        if output_format == shelf_core::OutputFormat::Json {
            let _ = writeln!(out, "{}", formatter.format_error(code, &message));
        } else {
            print_error(choice, &message);
        }
        std::process::exit(1);
    }
}

/// Loads the configuration and applies command-line overrides.
fn resolve_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_file(path)?,
        None => Config::load(Path::new("."))?,
    };

    if let Some(file) = &cli.file {
        config.data_file = file.clone();
    }
    if let Some(format) = cli.record_format {
        config.record_format = match format {
            RecordFormatArg::Pipe => RecordFormat::Pipe,
            RecordFormatArg::Jsonl => RecordFormat::Jsonl,
        };
    }

    config.validate()?;
    Ok(config)
}

fn run(
    command: Option<Commands>,
    config: &Config,
    choice: termcolor::ColorChoice,
    formatter: &dyn shelf_cli::OutputFormatter,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    tracing::debug!(
        data_file = %config.data_file.display(),
        record_format = %config.record_format,
        "configuration resolved"
    );
    let open = || commands::open_store(config, choice);
    let open_for_update = || commands::open_store_for_update(config);

    match command {
        Some(Commands::Init) => {
            commands::init::execute(Path::new("."), config, out)?;
        }
        Some(Commands::Add {
            title,
            author,
            isbn,
        }) => {
            let mut store = open_for_update()?;
            commands::add::execute(&mut store, title, author, isbn, formatter, out)?;
        }
        Some(Commands::Issue { isbn }) => {
            let mut store = open_for_update()?;
            commands::issue::execute(&mut store, &isbn, formatter, out)?;
        }
        Some(Commands::Return { isbn }) => {
            let mut store = open_for_update()?;
            commands::return_book::execute(&mut store, &isbn, formatter, out)?;
        }
        Some(Commands::List { status }) => {
            commands::list::execute(&open()?, status, formatter, out)?;
        }
        Some(Commands::Search { title, isbn }) => {
            let query = match (title, isbn) {
                (Some(title), _) => Query::Title(title),
                (None, Some(isbn)) => Query::Isbn(isbn),
                (None, None) => anyhow::bail!("search needs --title or --isbn"),
            };
            commands::search::execute(&open()?, &query, formatter, out)?;
        }
        None => {
            let mut store = open()?;
            let stdin = io::stdin();
            menu::run(&mut store, stdin.lock(), out, choice)?;
        }
    }

    Ok(())
}
