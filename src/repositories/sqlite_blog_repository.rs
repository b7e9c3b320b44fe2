// src/repositories/sqlite_blog_repository.rs
//
// SQLite-backed blog post persistence
//
// All parse failures are explicit errors, not silent defaults.
// Uses ConnectionPool for thread safety.

use crate::db::{migrations, ConnectionPool};
use crate::domain::blog::BlogPost;
use crate::error::{AppError, AppResult};
use crate::repositories::blog_repository::{BlogRepository, SaveOutcome};
use chrono::{DateTime, Utc};
use rusqlite::{params, Row};
use std::sync::Arc;

const SELECT_COLUMNS: &str = "id, title, content, tags, created_at";

pub struct SqliteBlogRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteBlogRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    /// Convert a database row to a BlogPost.
    ///
    /// Returns rusqlite::Error for query_map compatibility. Tags are a
    /// JSON-encoded string array; order is preserved exactly.
    fn row_to_blog(row: &Row) -> rusqlite::Result<BlogPost> {
        let id: u32 = row.get("id")?;
        let title: String = row.get("title")?;
        let content: String = row.get("content")?;
        let tags_json: String = row.get("tags")?;
        let created_at_str: String = row.get("created_at")?;

        let tags: Vec<String> = serde_json::from_str(&tags_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(std::io::Error::new(
                    std::io::ErrorKind::InvalidData,
                    format!("Invalid tags encoding '{}': {}", tags_json, e),
                )),
            )
        })?;

        let created_at = DateTime::parse_from_rfc3339(&created_at_str)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(
                    4,
                    rusqlite::types::Type::Text,
                    Box::new(std::io::Error::new(
                        std::io::ErrorKind::InvalidData,
                        format!("Invalid created_at timestamp '{}': {}", created_at_str, e),
                    )),
                )
            })?;

        Ok(BlogPost {
            id,
            title,
            content,
            tags,
            created_at,
        })
    }
}

impl BlogRepository for SqliteBlogRepository {
    fn load(&self, id: u32) -> AppResult<BlogPost> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM blogs WHERE id = ?1",
            SELECT_COLUMNS
        ))?;

        match stmt.query_row(params![id], Self::row_to_blog) {
            Ok(blog) => Ok(blog),
            // Zero rows is a distinct condition, never a generic store error
            Err(rusqlite::Error::QueryReturnedNoRows) => Err(AppError::NotFound),
            Err(e) => Err(AppError::Database(e)),
        }
    }

    fn list_all(&self) -> AppResult<Vec<BlogPost>> {
        let conn = self.pool.get()?;

        // No ORDER BY: store-native order, same as the paginated paths
        let mut stmt = conn.prepare(&format!("SELECT {} FROM blogs", SELECT_COLUMNS))?;

        let blogs: Vec<BlogPost> = stmt
            .query_map([], Self::row_to_blog)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blogs)
    }

    fn list(&self, offset: u32, limit: u32) -> AppResult<Vec<BlogPost>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM blogs LIMIT ?1 OFFSET ?2",
            SELECT_COLUMNS
        ))?;

        let blogs: Vec<BlogPost> = stmt
            .query_map(params![limit, offset], Self::row_to_blog)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blogs)
    }

    fn save(&self, blog: &mut BlogPost) -> AppResult<SaveOutcome> {
        let conn = self.pool.get()?;

        let tags_json = serde_json::to_string(&blog.tags)?;

        if blog.is_transient() {
            conn.execute(
                "INSERT INTO blogs (title, content, tags, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![
                    blog.title,
                    blog.content,
                    tags_json,
                    blog.created_at.to_rfc3339(),
                ],
            )?;

            // Write the store-assigned id back into the caller's record
            let id = u32::try_from(conn.last_insert_rowid())
                .map_err(|e| AppError::Other(format!("Assigned row id out of range: {}", e)))?;
            blog.id = id;

            Ok(SaveOutcome::Created)
        } else {
            conn.execute(
                "UPDATE blogs SET title = ?1, content = ?2, tags = ?3, created_at = ?4
                 WHERE id = ?5",
                params![
                    blog.title,
                    blog.content,
                    tags_json,
                    blog.created_at.to_rfc3339(),
                    blog.id,
                ],
            )?;

            Ok(SaveOutcome::Updated)
        }
    }

    fn delete(&self, id: u32) -> AppResult<()> {
        let conn = self.pool.get()?;

        // Affected-row count is deliberately ignored: delete is idempotent
        conn.execute("DELETE FROM blogs WHERE id = ?1", params![id])?;

        Ok(())
    }

    fn search_by_title(&self, query: &str, offset: u32, limit: u32) -> AppResult<Vec<BlogPost>> {
        let conn = self.pool.get()?;

        let mut stmt = conn.prepare(&format!(
            "SELECT {} FROM blogs WHERE title LIKE ?1 LIMIT ?2 OFFSET ?3",
            SELECT_COLUMNS
        ))?;

        let pattern = format!("%{}%", query);
        let blogs: Vec<BlogPost> = stmt
            .query_map(params![pattern, limit, offset], Self::row_to_blog)?
            .collect::<Result<Vec<_>, _>>()?;

        Ok(blogs)
    }

    fn migrate(&self) -> AppResult<()> {
        let conn = self.pool.get()?;
        migrations::initialize_database(&conn)
    }
}
