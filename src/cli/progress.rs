use crate::{cli::open_manager, error, utils};

pub async fn update_progress(id: &str, total_pages: i64, pages_read: i64) {
    let (pages, read) = match utils::parse_progress(total_pages, pages_read) {
        Ok(progress) => progress,
        Err(e) => error!("Please fill in all fields correctly! {}", e),
    };

    let mut manager = open_manager().await;
    if let Err(e) = manager.update_book_progress(id.trim(), pages, read).await {
        error!("Cannot update progress. Err: {}", e);
    }
}
