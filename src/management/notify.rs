use crate::{info, success, types::Book, warning};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

/// Completed mutations of the collection, reported to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    BookAdded { id: String },
    BookDeleted { id: String, removed: usize },
    ProgressUpdated { id: String },
    ReviewAdded { id: String },
    BooksReplaced { count: usize },
    /// The stored collection could not be read and was treated as empty.
    StoreReset,
}

impl Event {
    pub fn message(&self) -> String {
        match self {
            Event::BookAdded { .. } => "Book added successfully!".to_string(),
            Event::BookDeleted { .. } => "Book deleted.".to_string(),
            Event::ProgressUpdated { .. } => "Progress updated!".to_string(),
            Event::ReviewAdded { .. } => "Review added!".to_string(),
            Event::BooksReplaced { count } => format!("{count} books uploaded successfully!"),
            Event::StoreReset => "Stored books could not be read, starting empty.".to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            Event::BookAdded { .. } | Event::ReviewAdded { .. } | Event::BooksReplaced { .. } => {
                Severity::Success
            }
            Event::BookDeleted { .. } => Severity::Error,
            Event::ProgressUpdated { .. } | Event::StoreReset => Severity::Info,
        }
    }
}

/// Receives every completed mutation after it has been persisted.
pub trait Notifier {
    fn notify(&self, event: &Event);

    /// Called with the current collection after each notification.
    fn render(&self, _books: &[Book]) {}
}

/// Prints notifications with the terminal output macros.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalNotifier;

impl Notifier for TerminalNotifier {
    fn notify(&self, event: &Event) {
        match event.severity() {
            Severity::Success => success!("{}", event.message()),
            // deletions are reported as non-fatal; `error!` would exit the process
            Severity::Error => warning!("{}", event.message()),
            Severity::Info => info!("{}", event.message()),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SilentNotifier;

impl Notifier for SilentNotifier {
    fn notify(&self, _event: &Event) {}
}
