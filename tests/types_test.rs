use booktrack::types::{
    Book, BookTableRow, NO_REVIEWS, NOT_APPLICABLE, Review, ReviewTableRow,
};

// Helper function to create a review
fn review(rating: u8, text: &str) -> Review {
    Review {
        rating,
        text: text.to_string(),
    }
}

#[test]
fn test_new_book_has_fresh_progress_and_no_reviews() {
    let book = Book::new("1", "Dune", "Frank Herbert", "Sci-Fi");

    assert_eq!(book.id, "1");
    assert_eq!(book.pages, 0);
    assert_eq!(book.pages_read, 0);
    assert!(book.reviews.is_empty());
}

#[test]
fn test_average_rating() {
    let book = Book::new("1", "T", "A", "G")
        .with_reviews(vec![review(4, "good"), review(5, "great")]);
    assert_eq!(book.average_rating(), "4.5");

    let book = Book::new("1", "T", "A", "G").with_reviews(vec![
        review(5, "a"),
        review(4, "b"),
        review(4, "c"),
    ]);
    assert_eq!(book.average_rating(), "4.3");

    let book = Book::new("1", "T", "A", "G").with_reviews(vec![review(3, "ok")]);
    assert_eq!(book.average_rating(), "3.0");
}

#[test]
fn test_average_rating_rounds_ties_up() {
    // 17 / 4 = 4.25
    let book = Book::new("1", "T", "A", "G").with_reviews(vec![
        review(4, "a"),
        review(4, "b"),
        review(4, "c"),
        review(5, "d"),
    ]);
    assert_eq!(book.average_rating(), "4.3");

    // 5 / 4 = 1.25
    let book = Book::new("1", "T", "A", "G").with_reviews(vec![
        review(1, "a"),
        review(1, "b"),
        review(1, "c"),
        review(2, "d"),
    ]);
    assert_eq!(book.average_rating(), "1.3");
}

#[test]
fn test_average_rating_without_reviews() {
    let book = Book::new("1", "T", "A", "G");
    assert_eq!(book.average_rating(), NO_REVIEWS);
    assert_eq!(book.average_rating(), "No reviews yet");
}

#[test]
fn test_progress() {
    let book = Book::new("1", "T", "A", "G").with_progress(200, 50);
    assert_eq!(book.progress(), "25.0%");

    let book = Book::new("1", "T", "A", "G").with_progress(3, 1);
    assert_eq!(book.progress(), "33.3%");

    let book = Book::new("1", "T", "A", "G").with_progress(100, 100);
    assert_eq!(book.progress(), "100.0%");

    let book = Book::new("1", "T", "A", "G").with_progress(3, 2);
    assert_eq!(book.progress(), "66.7%");
}

#[test]
fn test_progress_rounds_ties_up() {
    // 0.25% and 0.75%
    let book = Book::new("1", "T", "A", "G").with_progress(400, 1);
    assert_eq!(book.progress(), "0.3%");

    let book = Book::new("1", "T", "A", "G").with_progress(400, 3);
    assert_eq!(book.progress(), "0.8%");
}

#[test]
fn test_progress_is_not_clamped() {
    let book = Book::new("1", "T", "A", "G").with_progress(200, 250);
    assert_eq!(book.progress(), "125.0%");
}

#[test]
fn test_progress_without_pages() {
    let book = Book::new("1", "T", "A", "G").with_progress(0, 10);
    assert_eq!(book.progress(), NOT_APPLICABLE);
    assert_eq!(book.progress(), "N/A");
}

#[test]
fn test_derived_values_follow_current_state() {
    let mut book = Book::new("1", "T", "A", "G").with_progress(100, 10);
    assert_eq!(book.progress(), "10.0%");

    book.pages_read = 60;
    book.reviews.push(review(2, "meh"));
    assert_eq!(book.progress(), "60.0%");
    assert_eq!(book.average_rating(), "2.0");
}

#[test]
fn test_serializes_with_wire_field_names() {
    let book = Book::new("42", "T", "A", "G")
        .with_progress(100, 10)
        .with_reviews(vec![review(5, "loved it")]);

    let value = serde_json::to_value(&book).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "bookId": "42",
            "title": "T",
            "author": "A",
            "genre": "G",
            "pages": 100,
            "pagesRead": 10,
            "reviews": [{ "rating": 5, "text": "loved it" }]
        })
    );
}

#[test]
fn test_deserialize_defaults_missing_fields() {
    let json = r#"{"bookId":"1","title":"T","author":"A","genre":"G"}"#;
    let book: Book = serde_json::from_str(json).unwrap();

    assert_eq!(book, Book::new("1", "T", "A", "G"));
}

#[test]
fn test_deserialize_null_reviews_as_empty() {
    let json = r#"{"bookId":"1","title":"T","author":"A","genre":"G","pages":10,"pagesRead":2,"reviews":null}"#;
    let book: Book = serde_json::from_str(json).unwrap();

    assert!(book.reviews.is_empty());
    assert_eq!(book.pages, 10);
    assert_eq!(book.pages_read, 2);
}

#[test]
fn test_deserialize_requires_identity_fields() {
    let json = r#"{"title":"T","author":"A","genre":"G"}"#;
    assert!(serde_json::from_str::<Book>(json).is_err());
}

#[test]
fn test_table_rows() {
    let book = Book::new("7", "T", "A", "G")
        .with_progress(200, 50)
        .with_reviews(vec![review(4, "x"), review(5, "y")]);

    let row = BookTableRow::from(&book);
    assert_eq!(row.id, "7");
    assert_eq!(row.pages, 200);
    assert_eq!(row.progress, "25.0%");
    assert_eq!(row.rating, "4.5");

    let row = ReviewTableRow::from(&book.reviews[0]);
    assert_eq!(row.stars, "★★★★");
    assert_eq!(row.text, "x");
}
