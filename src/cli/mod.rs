//! # CLI Module
//!
//! The command-line front end of the book tracker. Each public function maps
//! to one user action, validates its input at the boundary and then hands
//! the request to [`BookManager`], which persists the collection and reports
//! back through a [`TerminalNotifier`].
//!
//! ## Commands
//!
//! - [`add_book`] - Adds a new book from title, author and genre
//! - [`delete_book`] - Removes a book by id
//! - [`list_books`] - Shows the collection as a table
//! - [`show_book`] - Shows one book with its reviews
//! - [`update_progress`] - Records total pages and pages read
//! - [`add_review`] - Attaches a star rating and text to a book
//! - [`export_books`] - Writes the collection to a JSON file
//! - [`import_books`] - Replaces the collection with a JSON file
//!
//! ## Usage
//!
//! ```bash
//! booktrack add --title "Dune" --author "Frank Herbert" --genre "Sci-Fi"
//! booktrack progress 1700000000000 --total-pages 412 --pages-read 120
//! booktrack review 1700000000000 --rating 5 --text "Spice must flow"
//! booktrack export --output books.json
//! ```
//!
//! Validation failures and store errors are fatal for the command and are
//! reported with the `error!` macro; nothing is written in that case.

mod books;
mod progress;
mod review;
mod transfer;

pub use books::add_book;
pub use books::delete_book;
pub use books::list_books;
pub use books::show_book;
pub use progress::update_progress;
pub use review::add_review;
pub use transfer::export_books;
pub use transfer::import_books;

use crate::{
    config,
    management::{BookManager, FileStore, TerminalNotifier},
};

type CliManager = BookManager<FileStore, TerminalNotifier>;

async fn open_manager() -> CliManager {
    let store = FileStore::new(config::data_dir());
    BookManager::with_key(store, TerminalNotifier, &config::store_key()).await
}
