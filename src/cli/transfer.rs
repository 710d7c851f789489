use std::path::PathBuf;

use crate::{cli::open_manager, config, error, success};

pub async fn export_books(output: Option<PathBuf>) {
    let path = output.unwrap_or_else(|| PathBuf::from(config::EXPORT_FILE_NAME));

    let manager = open_manager().await;
    if let Err(e) = manager.export_file(&path).await {
        error!("Cannot export books. Err: {}", e);
    }
    success!("Exported {} books to {}", manager.len(), path.display());
}

pub async fn import_books(file: PathBuf) {
    let mut manager = open_manager().await;
    if let Err(e) = manager.import_file(&file).await {
        error!("Cannot import books. Err: {}", e);
    }
}
