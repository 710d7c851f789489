use crate::{cli::open_manager, error, utils};

pub async fn add_review(id: &str, rating: i64, text: &str) {
    let (rating, text) = match utils::parse_review(rating, text) {
        Ok(review) => review,
        Err(e) => error!("Please fill in all fields correctly! {}", e),
    };

    let mut manager = open_manager().await;
    if let Err(e) = manager.add_review(id.trim(), rating, &text).await {
        error!("Cannot add review. Err: {}", e);
    }
}
