// System status display — DB stats and recent activity.

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::db::Storage;

/// Display system status to the terminal.
pub async fn show(storage: &Arc<dyn Storage>, db_display_path: &str) -> Result<()> {
    if !Path::new(db_display_path).exists() {
        println!("Database: not initialized");
        println!("\nRun `lantern init` to set up the database.");
        return Ok(());
    }

    let file_size = std::fs::metadata(db_display_path)
        .map(|m| format_bytes(m.len()))
        .unwrap_or_else(|_| "unknown".to_string());
    println!("Database: {} ({})", db_display_path, file_size);

    let centers = storage.center_count().await?;
    println!("Centers: {centers}");

    let analyses = storage.analysis_count().await?;
    match storage.last_analysis_at().await? {
        Some(at) => println!("Analyses: {analyses} (last at {at})"),
        None => println!("Analyses: none yet"),
    }

    Ok(())
}

fn format_bytes(bytes: u64) -> String {
    if bytes < 1024 {
        format!("{bytes} B")
    } else if bytes < 1024 * 1024 {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    } else {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    }
}
