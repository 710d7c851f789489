use serde::{Deserialize, Deserializer, Serialize};
use tabled::Tabled;

pub const NO_REVIEWS: &str = "No reviews yet";
pub const NOT_APPLICABLE: &str = "N/A";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: u8,
    pub text: String,
}

/// A single tracked book.
///
/// Serialized with the `books.json` field names (`bookId`, `pagesRead`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    #[serde(rename = "bookId")]
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub pages_read: u32,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub reviews: Vec<Review>,
}

impl Book {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        genre: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            author: author.into(),
            genre: genre.into(),
            pages: 0,
            pages_read: 0,
            reviews: Vec::new(),
        }
    }

    pub fn with_progress(mut self, pages: u32, pages_read: u32) -> Self {
        self.pages = pages;
        self.pages_read = pages_read;
        self
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    /// Mean rating with one decimal (ties round up), or [`NO_REVIEWS`].
    pub fn average_rating(&self) -> String {
        if self.reviews.is_empty() {
            return NO_REVIEWS.to_string();
        }

        let total: u64 = self.reviews.iter().map(|r| u64::from(r.rating)).sum();
        one_decimal(total, self.reviews.len() as u64)
    }

    /// Share of pages read as a percentage with one decimal, or [`NOT_APPLICABLE`]
    /// when the page count is unknown.
    pub fn progress(&self) -> String {
        if self.pages == 0 {
            return NOT_APPLICABLE.to_string();
        }

        let read = u64::from(self.pages_read) * 100;
        format!("{}%", one_decimal(read, u64::from(self.pages)))
    }
}

/// `numerator / denominator` rendered with one decimal, exact ties rounded up.
fn one_decimal(numerator: u64, denominator: u64) -> String {
    let tenths = (numerator * 20 + denominator) / (denominator * 2);
    format!("{}.{}", tenths / 10, tenths % 10)
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Review>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Review>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Tabled)]
pub struct BookTableRow {
    pub id: String,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub pages: u32,
    pub progress: String,
    pub rating: String,
}

impl From<&Book> for BookTableRow {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id.clone(),
            title: book.title.clone(),
            author: book.author.clone(),
            genre: book.genre.clone(),
            pages: book.pages,
            progress: book.progress(),
            rating: book.average_rating(),
        }
    }
}

#[derive(Tabled)]
pub struct ReviewTableRow {
    pub stars: String,
    pub text: String,
}

impl From<&Review> for ReviewTableRow {
    fn from(review: &Review) -> Self {
        Self {
            stars: "★".repeat(usize::from(review.rating)),
            text: review.text.clone(),
        }
    }
}
