use anyhow::{bail, Result};
use bookrack_config::ConfigManager;
use bookrack_core::{Book, BookId};
use bookrack_library::{parse_or_default, BookDraft, LibraryError, LibraryStore, SortOrder};
use bookrack_storage::verify_integrity;
use clap::ArgMatches;
use console::style;

/// Initialize the database and config file
pub async fn init(store: &LibraryStore, db_path: &str) -> Result<()> {
    verify_integrity(store.pool()).await.map_err(|e| {
        eprintln!("{}", style(e.user_message()).red());
        anyhow::Error::from(e)
    })?;

    match ConfigManager::new() {
        Ok(manager) => {
            if manager.initialize()? {
                println!("Created config at {}", manager.config_path().display());
            }
        }
        Err(e) => log::warn!("Skipping config file creation: {}", e),
    }

    println!("Catalog ready at {}", db_path);
    Ok(())
}

/// List all books in the catalog
pub fn list_books(store: &LibraryStore) -> Result<()> {
    print_catalog(store.books());
    Ok(())
}

/// Add a new book to the catalog
pub async fn add_book(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    let mut draft = BookDraft::new(
        matches.get_one::<String>("title").cloned().unwrap_or_default(),
        matches.get_one::<String>("author").cloned().unwrap_or_default(),
    );
    if let Some(series) = matches.get_one::<String>("series") {
        draft = draft.with_series(series.clone());
    }
    if let Some(pages) = matches.get_one::<String>("pages") {
        draft = draft.with_pages(pages.clone());
    }
    if let Some(rating) = matches.get_one::<String>("rating") {
        draft = draft.with_rating(rating.clone());
    }

    match store.add(draft).await {
        Ok(books) => {
            println!("{}", style("Book added.").green());
            print_catalog(books);
            Ok(())
        }
        Err(LibraryError::Validation(reason)) => {
            bail!("{}", reason)
        }
        Err(e) => Err(e.into()),
    }
}

/// Edit an existing book, overlaying only the provided fields
pub async fn update_book(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    let id = parse_book_id(matches)?;

    let mut book = match store.get(id) {
        Ok(book) => book,
        Err(LibraryError::BookNotFound(id)) => bail!("No book with id {}", id),
        Err(e) => return Err(e.into()),
    };

    if let Some(title) = matches.get_one::<String>("title") {
        book.title = title.clone();
    }
    if let Some(author) = matches.get_one::<String>("author") {
        book.author = author.clone();
    }
    if let Some(series) = matches.get_one::<String>("series") {
        book.series = series.clone();
    }
    if let Some(pages) = matches.get_one::<String>("pages") {
        book.pages = parse_or_default(Some(pages));
    }
    if let Some(rating) = matches.get_one::<String>("rating") {
        book.rating = parse_or_default(Some(rating));
    }

    let books = store.update(book).await?;
    println!("{}", style("Book updated.").green());
    print_catalog(books);
    Ok(())
}

/// Delete a book from the catalog
pub async fn delete_book(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    let id = parse_book_id(matches)?;
    let books = store.remove(id).await?;
    println!("{}", style("Book deleted.").green());
    print_catalog(books);
    Ok(())
}

/// Reorder the catalog
pub async fn sort_books(store: &mut LibraryStore, matches: &ArgMatches) -> Result<()> {
    let order: SortOrder = matches
        .get_one::<String>("order")
        .map(|s| s.as_str())
        .unwrap_or("entry")
        .parse()
        .map_err(|e: String| anyhow::anyhow!(e))?;

    let books = store.sort(order).await?;
    println!("Sorted by {}.", order);
    print_catalog(books);
    Ok(())
}

fn parse_book_id(matches: &ArgMatches) -> Result<BookId> {
    let raw = matches
        .get_one::<String>("id")
        .ok_or_else(|| anyhow::anyhow!("Book ID is required"))?;

    match BookId::from_string(raw) {
        Ok(id) => Ok(id),
        Err(_) => bail!("Invalid book id '{}' (expected a number)", raw),
    }
}

fn print_catalog(books: &[Book]) {
    if books.is_empty() {
        println!("No books in the catalog. Use 'add' to create one.");
        return;
    }

    println!("\n{} book(s)", style(books.len()).bold().cyan());
    println!("{}", "=".repeat(72));

    for book in books {
        print_book(book);
    }
}

fn print_book(book: &Book) {
    let series = if book.series.is_empty() {
        String::new()
    } else {
        format!("  [{}]", book.series)
    };

    println!(
        "{} by {}{}",
        style(&book.title).bold(),
        book.author,
        series
    );
    println!(
        "  {} pages, rated {}  {}",
        book.pages,
        book.rating,
        style(format!("id {}", book.id)).dim()
    );
}
