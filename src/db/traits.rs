// Storage trait — backend-agnostic async interface for all DB operations.
//
// The pipeline itself only needs `append_analysis` (append-only, no
// read-back); the remaining methods serve the history, status, and center
// directory surfaces. Methods are async so a sync backend (rusqlite behind
// a Mutex) and any future native-async backend fit one interface.

use anyhow::Result;
use async_trait::async_trait;

use super::models::{AnalysisResult, Center, NewCenter};

#[async_trait]
pub trait Storage: Send + Sync {
    // --- Lifecycle ---

    /// Count the number of user-created tables in the database.
    async fn table_count(&self) -> Result<i64>;

    // --- Analysis history (append-only) ---

    /// Append an analysis result. Never updates prior rows.
    async fn append_analysis(&self, result: &AnalysisResult) -> Result<i64>;

    /// Most recent analysis results, newest first.
    async fn recent_analyses(&self, limit: u32) -> Result<Vec<AnalysisResult>>;

    /// Total number of stored analysis results.
    async fn analysis_count(&self) -> Result<i64>;

    /// Timestamp of the most recent analysis, if any.
    async fn last_analysis_at(&self) -> Result<Option<String>>;

    // --- Centers ---

    /// Insert a new center and return its id.
    async fn insert_center(&self, center: &NewCenter) -> Result<i64>;

    /// All centers, in insertion order.
    async fn list_centers(&self) -> Result<Vec<Center>>;

    /// Total number of centers.
    async fn center_count(&self) -> Result<i64>;
}
