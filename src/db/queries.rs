// Database queries — CRUD operations for all tables.
//
// Every database interaction goes through this module. This keeps SQL
// contained in one place and gives the rest of the app clean Rust interfaces.

use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension};

use crate::analysis::corpus::Topic;
use crate::analysis::risk::RiskLabel;

use super::models::{AnalysisMode, AnalysisResult, Center, ErrorKind, NewCenter};

// --- Analysis history ---

/// Append an analysis result and return its row id.
pub fn append_analysis(conn: &Connection, result: &AnalysisResult) -> Result<i64> {
    let error_json = match &result.error {
        Some(error) => Some(serde_json::to_string(error)?),
        None => None,
    };
    conn.execute(
        "INSERT INTO analysis_history
            (content, mode, topic, topic_confidence, sentiment,
             risk_label, risk_confidence, generated_text, error_json, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)",
        params![
            result.content,
            result.mode.as_str(),
            result.topic.map(|t| t.as_str()),
            result.topic_confidence,
            result.sentiment,
            result.risk_label.map(|r| r.as_str()),
            result.risk_confidence,
            result.generated_text,
            error_json,
            result.created_at,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// Most recent analysis results, newest first.
pub fn recent_analyses(conn: &Connection, limit: u32) -> Result<Vec<AnalysisResult>> {
    let mut stmt = conn.prepare(
        "SELECT content, mode, topic, topic_confidence, sentiment,
                risk_label, risk_confidence, generated_text, error_json, created_at
         FROM analysis_history
         ORDER BY id DESC
         LIMIT ?1",
    )?;

    let rows = stmt.query_map(params![limit], |row| {
        let mode_str: String = row.get(1)?;
        let topic_str: Option<String> = row.get(2)?;
        let risk_str: Option<String> = row.get(5)?;
        let error_json: Option<String> = row.get(8)?;
        Ok((
            AnalysisResult {
                content: row.get(0)?,
                // Mode is validated on the way in; fall back to comprehensive
                // rather than failing the whole listing on one bad row.
                mode: mode_str.parse().unwrap_or(AnalysisMode::Comprehensive),
                topic: topic_str.as_deref().map(Topic::from_str_lossy),
                topic_confidence: row.get(3)?,
                sentiment: row.get(4)?,
                risk_label: risk_str.as_deref().map(RiskLabel::from_str_lossy),
                risk_confidence: row.get(6)?,
                generated_text: row.get(7)?,
                error: None,
                created_at: row.get(9)?,
            },
            error_json,
        ))
    })?;

    let mut results = Vec::new();
    for row in rows {
        let (mut result, error_json) = row?;
        if let Some(json) = error_json {
            result.error = serde_json::from_str::<ErrorKind>(&json).ok();
        }
        results.push(result);
    }
    Ok(results)
}

/// Total number of stored analysis results.
pub fn analysis_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM analysis_history", [], |row| {
        row.get(0)
    })?;
    Ok(count)
}

/// Timestamp of the most recent analysis, if any.
pub fn last_analysis_at(conn: &Connection) -> Result<Option<String>> {
    let mut stmt =
        conn.prepare("SELECT created_at FROM analysis_history ORDER BY id DESC LIMIT 1")?;
    let result = stmt.query_row([], |row| row.get(0)).optional()?;
    Ok(result)
}

// --- Centers ---

/// Insert a new center and return its row id.
pub fn insert_center(conn: &Connection, center: &NewCenter) -> Result<i64> {
    conn.execute(
        "INSERT INTO centers
            (name, address, latitude, longitude, phone, website, services, fact_check_score)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
        params![
            center.name,
            center.address,
            center.latitude,
            center.longitude,
            center.phone,
            center.website,
            center.services,
            center.fact_check_score,
        ],
    )?;
    Ok(conn.last_insert_rowid())
}

/// All centers, in insertion order.
pub fn list_centers(conn: &Connection) -> Result<Vec<Center>> {
    let mut stmt = conn.prepare(
        "SELECT id, name, address, latitude, longitude, phone, website,
                services, fact_check_score, created_at
         FROM centers
         ORDER BY id",
    )?;

    let rows = stmt.query_map([], |row| {
        Ok(Center {
            id: row.get(0)?,
            name: row.get(1)?,
            address: row.get(2)?,
            latitude: row.get(3)?,
            longitude: row.get(4)?,
            phone: row.get(5)?,
            website: row.get(6)?,
            services: row.get(7)?,
            fact_check_score: row.get(8)?,
            created_at: row.get(9)?,
        })
    })?;

    let mut centers = Vec::new();
    for row in rows {
        centers.push(row?);
    }
    Ok(centers)
}

/// Total number of centers.
pub fn center_count(conn: &Connection) -> Result<i64> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM centers", [], |row| row.get(0))?;
    Ok(count)
}
