use std::{collections::HashSet, path::Path};

use crate::{
    error::BookError,
    management::{Event, Notifier, Store},
    types::{Book, Review},
};

pub const STORE_KEY_BOOKS: &str = "books";

/// Owns the book collection and keeps the store in step with it.
///
/// Every successful mutation is written to the store before the notifier
/// hears about it. A store failure after a mutation is returned as
/// [`BookError::Store`] and leaves memory ahead of the store.
pub struct BookManager<S: Store, N: Notifier> {
    store: S,
    notifier: N,
    key: String,
    books: Vec<Book>,
}

impl<S: Store, N: Notifier> BookManager<S, N> {
    /// Creates a manager over the default key and loads what is stored there.
    pub async fn new(store: S, notifier: N) -> Self {
        Self::with_key(store, notifier, STORE_KEY_BOOKS).await
    }

    pub async fn with_key(store: S, notifier: N, key: &str) -> Self {
        let mut manager = Self {
            store,
            notifier,
            key: key.to_string(),
            books: Vec::new(),
        };
        manager.load_from_store().await;
        manager
    }

    /// Replaces the in-memory collection with the stored one.
    ///
    /// A missing, unreadable or malformed value yields an empty collection.
    /// Duplicate ids keep their first occurrence.
    pub async fn load_from_store(&mut self) {
        let stored = match self.store.get(&self.key).await {
            Ok(stored) => stored,
            Err(_) => {
                self.books.clear();
                self.notifier.notify(&Event::StoreReset);
                return;
            }
        };

        self.books = match stored.map(|json| serde_json::from_str::<Vec<Book>>(&json)) {
            None => Vec::new(),
            Some(Ok(mut books)) => {
                let mut seen = HashSet::new();
                books.retain(|b| seen.insert(b.id.clone()));
                books
            }
            Some(Err(_)) => {
                self.notifier.notify(&Event::StoreReset);
                Vec::new()
            }
        };
    }

    /// Writes the whole collection under the manager's key.
    pub async fn save_to_store(&mut self) -> Result<(), BookError> {
        let json = serde_json::to_string(&self.books).map_err(BookError::Serialize)?;
        self.store.set(&self.key, &json).await?;
        Ok(())
    }

    pub async fn add_book(&mut self, book: Book) -> Result<(), BookError> {
        if self.find_book_by_id(&book.id).is_some() {
            return Err(BookError::DuplicateId(book.id));
        }

        let id = book.id.clone();
        self.books.push(book);
        self.save_to_store().await?;
        self.signal(Event::BookAdded { id });
        Ok(())
    }

    /// Removes every book carrying `id` and returns how many were removed.
    ///
    /// The collection is persisted and the deletion signalled even when
    /// nothing matched.
    pub async fn delete_book(&mut self, id: &str) -> Result<usize, BookError> {
        let before = self.books.len();
        self.books.retain(|b| b.id != id);
        let removed = before - self.books.len();

        self.save_to_store().await?;
        self.signal(Event::BookDeleted {
            id: id.to_string(),
            removed,
        });
        Ok(removed)
    }

    pub fn find_book_by_id(&self, id: &str) -> Option<&Book> {
        self.books.iter().find(|b| b.id == id)
    }

    /// Overwrites both page counts; bounds are checked at the input boundary.
    pub async fn update_book_progress(
        &mut self,
        id: &str,
        pages: u32,
        pages_read: u32,
    ) -> Result<(), BookError> {
        let book = self.find_book_mut(id)?;
        book.pages = pages;
        book.pages_read = pages_read;

        self.save_to_store().await?;
        self.signal(Event::ProgressUpdated { id: id.to_string() });
        Ok(())
    }

    pub async fn add_review(&mut self, id: &str, rating: u8, text: &str) -> Result<(), BookError> {
        let book = self.find_book_mut(id)?;
        book.reviews.push(Review {
            rating,
            text: text.to_string(),
        });

        self.save_to_store().await?;
        self.signal(Event::ReviewAdded { id: id.to_string() });
        Ok(())
    }

    /// Swaps in a whole new collection, rejecting it if any id repeats.
    pub async fn replace_all(&mut self, books: Vec<Book>) -> Result<(), BookError> {
        let mut seen = HashSet::new();
        if let Some(dup) = books.iter().find(|b| !seen.insert(b.id.as_str())) {
            return Err(BookError::DuplicateId(dup.id.clone()));
        }

        let count = books.len();
        self.books = books;
        self.save_to_store().await?;
        self.signal(Event::BooksReplaced { count });
        Ok(())
    }

    /// Replaces the collection with the books in a JSON array.
    pub async fn import_json(&mut self, json: &str) -> Result<(), BookError> {
        let value: serde_json::Value = serde_json::from_str(json).map_err(BookError::Parse)?;
        if !value.is_array() {
            return Err(BookError::InvalidFormat);
        }

        let books: Vec<Book> = serde_json::from_value(value).map_err(BookError::Parse)?;
        self.replace_all(books).await
    }

    pub async fn import_file(&mut self, path: &Path) -> Result<(), BookError> {
        let json = async_fs::read_to_string(path)
            .await
            .map_err(|source| BookError::File {
                path: path.to_path_buf(),
                source,
            })?;
        self.import_json(&json).await
    }

    /// The collection as pretty JSON with two-space indentation.
    pub fn export_json(&self) -> Result<String, BookError> {
        serde_json::to_string_pretty(&self.books).map_err(BookError::Serialize)
    }

    pub async fn export_file(&self, path: &Path) -> Result<(), BookError> {
        let json = self.export_json()?;
        async_fs::write(path, json)
            .await
            .map_err(|source| BookError::File {
                path: path.to_path_buf(),
                source,
            })
    }

    pub fn books(&self) -> &[Book] {
        &self.books
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    fn find_book_mut(&mut self, id: &str) -> Result<&mut Book, BookError> {
        self.books
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or_else(|| BookError::NotFound(id.to_string()))
    }

    fn signal(&self, event: Event) {
        self.notifier.notify(&event);
        self.notifier.render(&self.books);
    }
}
