// SqliteStorage — rusqlite backend implementing the Storage trait.
//
// The Connection is wrapped in tokio::sync::Mutex because Connection is !Send.
// Trait methods lock the mutex, do synchronous rusqlite work, and return.
// The lock is never held across .await points — Rust enforces this because
// MutexGuard is !Send.

use anyhow::Result;
use async_trait::async_trait;
use rusqlite::Connection;
use tokio::sync::Mutex;

use super::models::{AnalysisResult, Center, NewCenter};
use super::traits::Storage;

pub struct SqliteStorage {
    conn: Mutex<Connection>,
}

impl SqliteStorage {
    /// Wrap an already-opened rusqlite Connection.
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }
}

#[async_trait]
impl Storage for SqliteStorage {
    async fn table_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::schema::table_count(&conn)
    }

    async fn append_analysis(&self, result: &AnalysisResult) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::append_analysis(&conn, result)
    }

    async fn recent_analyses(&self, limit: u32) -> Result<Vec<AnalysisResult>> {
        let conn = self.conn.lock().await;
        super::queries::recent_analyses(&conn, limit)
    }

    async fn analysis_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::analysis_count(&conn)
    }

    async fn last_analysis_at(&self) -> Result<Option<String>> {
        let conn = self.conn.lock().await;
        super::queries::last_analysis_at(&conn)
    }

    async fn insert_center(&self, center: &NewCenter) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::insert_center(&conn, center)
    }

    async fn list_centers(&self) -> Result<Vec<Center>> {
        let conn = self.conn.lock().await;
        super::queries::list_centers(&conn)
    }

    async fn center_count(&self) -> Result<i64> {
        let conn = self.conn.lock().await;
        super::queries::center_count(&conn)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::corpus::Topic;
    use crate::db::models::AnalysisMode;
    use crate::db::schema::create_tables;

    fn test_storage() -> SqliteStorage {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        SqliteStorage::new(conn)
    }

    #[tokio::test]
    async fn append_and_read_back_analysis() {
        let storage = test_storage();

        let mut result = AnalysisResult::empty(AnalysisMode::Classification, "free tests");
        result.topic = Some(Topic::MedicalServices);
        result.topic_confidence = Some(0.9);

        let id = storage.append_analysis(&result).await.unwrap();
        assert_eq!(id, 1);

        let recent = storage.recent_analyses(10).await.unwrap();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].content, "free tests");
        assert_eq!(recent[0].mode, AnalysisMode::Classification);
        assert_eq!(recent[0].topic, Some(Topic::MedicalServices));
        assert_eq!(recent[0].topic_confidence, Some(0.9));
        assert!(recent[0].error.is_none());
    }

    #[tokio::test]
    async fn recent_analyses_is_newest_first() {
        let storage = test_storage();

        for content in ["first", "second", "third"] {
            let result = AnalysisResult::empty(AnalysisMode::Sentiment, content);
            storage.append_analysis(&result).await.unwrap();
        }

        let recent = storage.recent_analyses(2).await.unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].content, "third");
        assert_eq!(recent[1].content, "second");
        assert_eq!(storage.analysis_count().await.unwrap(), 3);
    }

    #[tokio::test]
    async fn error_round_trips_through_storage() {
        let storage = test_storage();

        let mut result = AnalysisResult::empty(AnalysisMode::AiGeneration, "anything");
        result.error = Some(crate::db::models::ErrorKind::GenerationUnavailable {
            reason: "timeout".to_string(),
        });
        storage.append_analysis(&result).await.unwrap();

        let recent = storage.recent_analyses(1).await.unwrap();
        assert_eq!(
            recent[0].error,
            Some(crate::db::models::ErrorKind::GenerationUnavailable {
                reason: "timeout".to_string(),
            })
        );
    }

    #[tokio::test]
    async fn insert_and_list_centers() {
        let storage = test_storage();

        let id = storage
            .insert_center(&NewCenter {
                name: "Northside Center".to_string(),
                address: "12 Oak Ave".to_string(),
                latitude: 41.5,
                longitude: -81.7,
                phone: Some("555-0100".to_string()),
                website: None,
                services: Some("pregnancy tests".to_string()),
                fact_check_score: Some(0.8),
            })
            .await
            .unwrap();
        assert_eq!(id, 1);

        let centers = storage.list_centers().await.unwrap();
        assert_eq!(centers.len(), 1);
        assert_eq!(centers[0].name, "Northside Center");
        assert_eq!(centers[0].fact_check_score, Some(0.8));
        assert_eq!(storage.center_count().await.unwrap(), 1);
    }
}
