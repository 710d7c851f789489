use tabled::Table;

use crate::{
    cli::open_manager,
    error,
    types::{BookTableRow, ReviewTableRow},
    utils, warning,
};

pub async fn add_book(title: &str, author: &str, genre: &str) {
    let book = match utils::parse_new_book(utils::generate_book_id(), title, author, genre) {
        Ok(book) => book,
        Err(e) => error!("Please fill in all fields! {}", e),
    };

    let mut manager = open_manager().await;
    if let Err(e) = manager.add_book(book).await {
        error!("Cannot add book. Err: {}", e);
    }
}

pub async fn delete_book(id: &str) {
    if id.trim().is_empty() {
        error!("Please select a book to delete!");
    }

    let mut manager = open_manager().await;
    match manager.delete_book(id.trim()).await {
        Ok(0) => warning!("No book with id {} was found.", id.trim()),
        Ok(_) => {}
        Err(e) => error!("Cannot delete book. Err: {}", e),
    }
}

pub async fn list_books(search: Option<String>) {
    let manager = open_manager().await;

    let mut books: Vec<_> = manager.books().iter().collect();
    if let Some(term) = search {
        let term = term.to_lowercase();
        books.retain(|b| {
            b.title.to_lowercase().contains(&term)
                || b.author.to_lowercase().contains(&term)
                || b.genre.to_lowercase().contains(&term)
        });
    }

    if books.is_empty() {
        warning!("No books found.");
        return;
    }

    let rows: Vec<BookTableRow> = books.into_iter().map(BookTableRow::from).collect();
    println!("{}", Table::new(rows));
}

pub async fn show_book(id: &str) {
    let manager = open_manager().await;
    let Some(book) = manager.find_book_by_id(id.trim()) else {
        error!("No book with id {} was found.", id.trim());
    };

    println!("{}", Table::new([BookTableRow::from(book)]));

    if book.reviews.is_empty() {
        warning!("{}", book.average_rating());
        return;
    }

    let rows: Vec<ReviewTableRow> = book.reviews.iter().map(ReviewTableRow::from).collect();
    println!("{}", Table::new(rows));
}
