use chrono::Utc;

use crate::{error::ValidationError, types::Book};

/// Fresh book id: the current Unix time in milliseconds.
pub fn generate_book_id() -> String {
    Utc::now().timestamp_millis().to_string()
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingField(field));
    }
    Ok(trimmed.to_string())
}

/// Builds a new book from form input; all three fields are trimmed and required.
pub fn parse_new_book(
    id: String,
    title: &str,
    author: &str,
    genre: &str,
) -> Result<Book, ValidationError> {
    let title = required(title, "title")?;
    let author = required(author, "author")?;
    let genre = required(genre, "genre")?;
    Ok(Book::new(id, title, author, genre))
}

/// Checks a progress update and returns `(pages, pages_read)`.
///
/// Pages read may not exceed the total, so progress never passes 100%.
pub fn parse_progress(total_pages: i64, pages_read: i64) -> Result<(u32, u32), ValidationError> {
    let total = u32::try_from(total_pages)
        .ok()
        .filter(|t| *t > 0)
        .ok_or(ValidationError::TotalPages(total_pages))?;

    let read = u32::try_from(pages_read)
        .ok()
        .filter(|r| *r <= total)
        .ok_or(ValidationError::PagesRead {
            read: pages_read,
            total: total_pages,
        })?;

    Ok((total, read))
}

/// Checks a review and returns the rating with the trimmed text.
pub fn parse_review(rating: i64, text: &str) -> Result<(u8, String), ValidationError> {
    let text = required(text, "review text")?;
    let rating = u8::try_from(rating)
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or(ValidationError::Rating(rating))?;
    Ok((rating, text))
}
