use anyhow::{Context, Result};
use bookrack_config::ConfigManager;
use bookrack_library::{LibraryConfig, LibraryStore};
use clap::{Arg, Command};

mod commands;

fn build_cli() -> Command {
    Command::new("bookrack")
        .version("0.1.0")
        .about("Personal book catalog")
        .arg(
            Arg::new("database")
                .short('d')
                .long("database")
                .value_name("PATH")
                .help("Path to the database file (overrides the config file)")
                .global(true),
        )
        .subcommand(Command::new("init").about("Initialize the database and config file"))
        .subcommand(Command::new("list").about("List all books in the catalog"))
        .subcommand(
            Command::new("add")
                .about("Add a new book to the catalog")
                .arg(Arg::new("title").short('t').long("title").value_name("TITLE").help("Book title (required)"))
                .arg(Arg::new("author").short('a').long("author").value_name("AUTHOR").help("Book author (required)"))
                .arg(Arg::new("series").short('s').long("series").value_name("SERIES").help("Series the book belongs to"))
                .arg(Arg::new("pages").short('p').long("pages").value_name("PAGES").help("Number of pages"))
                .arg(Arg::new("rating").short('r').long("rating").value_name("RATING").help("Your rating")),
        )
        .subcommand(
            Command::new("update")
                .about("Edit an existing book")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").help("Book ID to edit"))
                .arg(Arg::new("title").short('t').long("title").value_name("TITLE").help("New title"))
                .arg(Arg::new("author").short('a').long("author").value_name("AUTHOR").help("New author"))
                .arg(Arg::new("series").short('s').long("series").value_name("SERIES").help("New series"))
                .arg(Arg::new("pages").short('p').long("pages").value_name("PAGES").help("New page count"))
                .arg(Arg::new("rating").short('r').long("rating").value_name("RATING").help("New rating")),
        )
        .subcommand(
            Command::new("delete")
                .about("Delete a book from the catalog")
                .arg(Arg::new("id").required(true).value_name("BOOK_ID").help("Book ID to delete")),
        )
        .subcommand(
            Command::new("sort")
                .about("Reorder the catalog")
                .arg(
                    Arg::new("order")
                        .required(true)
                        .value_name("ORDER")
                        .value_parser(["title", "author", "rating", "entry"])
                        .help("Ordering to apply ('entry' restores insertion order)"),
                ),
        )
}

/// Resolves the database path: the --database flag wins, then the config
/// file, then the platform default.
fn resolve_database_path(flag: Option<&String>) -> String {
    if let Some(path) = flag {
        return path.clone();
    }

    let config = match ConfigManager::new() {
        Ok(manager) => manager.load_or_default(),
        Err(e) => {
            log::warn!("Could not resolve config directory: {}, using defaults", e);
            bookrack_config::Config::default()
        }
    };

    config.database_path.display().to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let matches = build_cli().get_matches();

    let db_path = resolve_database_path(matches.get_one::<String>("database"));

    // The database lives under the platform data dir by default, which may
    // not exist yet
    if let Some(parent) = std::path::Path::new(&db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
    }

    let mut store = LibraryStore::open(LibraryConfig::new(&db_path))
        .await
        .context("Failed to open the catalog")?;

    match matches.subcommand() {
        Some(("init", _)) => commands::init(&store, &db_path).await,
        Some(("list", _)) => commands::list_books(&store),
        Some(("add", sub_matches)) => commands::add_book(&mut store, sub_matches).await,
        Some(("update", sub_matches)) => commands::update_book(&mut store, sub_matches).await,
        Some(("delete", sub_matches)) => commands::delete_book(&mut store, sub_matches).await,
        Some(("sort", sub_matches)) => commands::sort_books(&mut store, sub_matches).await,
        _ => {
            build_cli().print_help()?;
            Ok(())
        }
    }
}
