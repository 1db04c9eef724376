//! The library store
//!
//! Owns the canonical in-memory catalog. The persisted form is a single
//! serialized list under one key; every mutation rewrites it whole. The
//! store is an explicitly constructed handle with an open/close lifecycle,
//! and each mutating operation awaits its persist before returning, so
//! writes cannot interleave.

use crate::draft::BookDraft;
use crate::error::{LibraryError, Result};
use crate::sort::SortOrder;
use crate::LibraryConfig;
use bookrack_core::{Book, BookId, Timestamp, Validator};
use bookrack_storage::{
    connection::{connect, DatabaseConfig},
    kv,
    migrations::run_migrations,
    DbPool,
};
use log::{debug, error, info, warn};

/// Storage key the serialized catalog lives under
pub const BOOKS_KEY: &str = "books";

/// Owns the in-memory catalog and its persistent copy
pub struct LibraryStore {
    pool: DbPool,
    books: Vec<Book>,
    last_id: i64,
}

impl LibraryStore {
    /// Opens the store: connects, migrates, and performs the one-time load.
    ///
    /// A missing stored catalog yields an empty one. An unreadable stored
    /// catalog is logged and also yields an empty one; it is never an error
    /// to the caller.
    pub async fn open(config: LibraryConfig) -> Result<Self> {
        info!(
            "Opening library with database: {}",
            config.database_path
        );

        let db_config = DatabaseConfig::new(&config.database_path);
        let pool = connect(db_config).await?;
        run_migrations(&pool).await?;

        let books = Self::load(&pool).await;
        let last_id = books.iter().map(|b| b.id.as_millis()).max().unwrap_or(0);

        Ok(Self {
            pool,
            books,
            last_id,
        })
    }

    /// Reads the stored catalog, falling back to empty on any failure
    async fn load(pool: &DbPool) -> Vec<Book> {
        match kv::get(pool, BOOKS_KEY).await {
            Ok(Some(json)) => match serde_json::from_str(&json) {
                Ok(books) => books,
                Err(e) => {
                    warn!("Stored catalog is unreadable, starting empty: {}", e);
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Failed to read stored catalog, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Current catalog snapshot, in its last sorted or inserted order
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of books in the catalog
    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Fetches a book by id
    pub fn get(&self, id: BookId) -> Result<Book> {
        self.books
            .iter()
            .find(|b| b.id == id)
            .cloned()
            .ok_or_else(|| LibraryError::BookNotFound(id.to_string()))
    }

    /// Adds a new book from user-entered fields.
    ///
    /// Rejects the draft if title or author is missing, leaving the catalog
    /// untouched. Otherwise coerces the numeric fields, assigns a fresh id,
    /// appends, and persists.
    pub async fn add(&mut self, draft: BookDraft) -> Result<&[Book]> {
        if let Err(errors) = draft.validate() {
            return Err(LibraryError::Validation(errors.join("; ")));
        }

        let id = self.next_id();
        let book = draft.into_book(id);
        debug!("Adding book '{}' with id {}", book.title, book.id);

        self.books.push(book);
        self.persist().await;
        Ok(&self.books)
    }

    /// Replaces the entry whose id matches `book.id`; unknown ids are a
    /// no-op. The full catalog is persisted afterward either way.
    pub async fn update(&mut self, book: Book) -> Result<&[Book]> {
        match self.books.iter_mut().find(|b| b.id == book.id) {
            Some(slot) => {
                debug!("Updating book {}", book.id);
                *slot = book;
            }
            None => debug!("Update for unknown book {} ignored", book.id),
        }

        self.persist().await;
        Ok(&self.books)
    }

    /// Removes the entry with the given id; unknown ids are a no-op. The
    /// full catalog is persisted afterward either way.
    pub async fn remove(&mut self, id: BookId) -> Result<&[Book]> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);

        if self.books.len() == before {
            debug!("Delete for unknown book {} ignored", id);
        } else {
            debug!("Removed book {}", id);
        }

        self.persist().await;
        Ok(&self.books)
    }

    /// Reorders the catalog destructively and persists the new order
    pub async fn sort(&mut self, order: SortOrder) -> Result<&[Book]> {
        debug!("Sorting catalog by {}", order);
        order.apply(&mut self.books);
        self.persist().await;
        Ok(&self.books)
    }

    /// Assigns the next id: the current millisecond timestamp, bumped past
    /// the last assigned id when two additions land in the same millisecond.
    fn next_id(&mut self) -> BookId {
        let now = Timestamp::now().as_millis();
        let id = now.max(self.last_id + 1);
        self.last_id = id;
        BookId::from_millis(id)
    }

    /// Serializes the full catalog and overwrites the single stored record.
    ///
    /// The in-memory mutation has already been applied; a failed write is
    /// logged and swallowed, leaving the in-memory catalog ahead of the
    /// stored copy until the next successful write.
    async fn persist(&self) {
        let json = match serde_json::to_string(&self.books) {
            Ok(json) => json,
            Err(e) => {
                error!("Failed to serialize catalog: {}", e);
                return;
            }
        };

        if let Err(e) = kv::put(&self.pool, BOOKS_KEY, &json).await {
            error!("Failed to persist catalog: {}", e);
        }
    }

    /// Get database pool for advanced operations
    pub fn pool(&self) -> &DbPool {
        &self.pool
    }

    /// Closes the store, releasing the database pool
    pub async fn close(self) {
        bookrack_storage::close(self.pool).await;
    }
}
