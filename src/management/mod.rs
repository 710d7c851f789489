mod book;
mod notify;
mod store;

pub use book::BookManager;
pub use book::STORE_KEY_BOOKS;
pub use notify::Event;
pub use notify::Notifier;
pub use notify::Severity;
pub use notify::SilentNotifier;
pub use notify::TerminalNotifier;
pub use store::FileStore;
pub use store::MemoryStore;
pub use store::Store;
