use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::FromRow;
use tracing::{debug, info};

use super::domain::{format_date, parse_date, Submission, SubmissionFields, SubmissionId};
use super::repository::{StoreError, SubmissionStore};

const CREATE_SUBMISSIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS submissions (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    product_name TEXT NOT NULL,
    country TEXT NOT NULL,
    submission_type TEXT NOT NULL,
    deadline_date TEXT NOT NULL
)
"#;

/// SQLite-backed store. `AUTOINCREMENT` keeps ids from being reused after deletes.
#[derive(Debug, Clone)]
pub struct SqliteSubmissionStore {
    pool: SqlitePool,
}

#[derive(Debug, FromRow)]
struct SubmissionRow {
    id: i64,
    product_name: String,
    country: String,
    submission_type: String,
    deadline_date: String,
}

impl TryFrom<SubmissionRow> for Submission {
    type Error = StoreError;

    fn try_from(row: SubmissionRow) -> Result<Self, Self::Error> {
        let id = SubmissionId(row.id);
        let deadline_date = parse_date(&row.deadline_date)
            .map_err(|source| StoreError::CorruptDeadline { id, source })?;

        Ok(Submission {
            id,
            product_name: row.product_name,
            country: row.country,
            submission_type: row.submission_type,
            deadline_date,
        })
    }
}

impl SqliteSubmissionStore {
    /// Open a pool against `url`, creating the database file when missing, and apply
    /// the schema.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        info!(%url, max_connections, "submission store ready");
        Ok(store)
    }

    /// A private database living on a single pinned connection.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .min_connections(1)
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        let store = Self { pool };
        store.migrate().await?;
        Ok(store)
    }

    pub async fn migrate(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_SUBMISSIONS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl SubmissionStore for SqliteSubmissionStore {
    #[tracing::instrument(name = "List submissions", skip(self))]
    async fn list_all(&self) -> Result<Vec<Submission>, StoreError> {
        let rows = sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, product_name, country, submission_type, deadline_date \
             FROM submissions ORDER BY deadline_date, id",
        )
        .fetch_all(&self.pool)
        .await?;

        debug!(count = rows.len(), "loaded submissions");
        rows.into_iter().map(Submission::try_from).collect()
    }

    #[tracing::instrument(name = "Fetch submission", skip(self))]
    async fn get(&self, id: SubmissionId) -> Result<Submission, StoreError> {
        let row = sqlx::query_as::<_, SubmissionRow>(
            "SELECT id, product_name, country, submission_type, deadline_date \
             FROM submissions WHERE id = ?",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(StoreError::NotFound(id))?;

        Submission::try_from(row)
    }

    #[tracing::instrument(name = "Insert submission", skip(self, fields))]
    async fn create(&self, fields: &SubmissionFields) -> Result<SubmissionId, StoreError> {
        let result = sqlx::query(
            "INSERT INTO submissions (product_name, country, submission_type, deadline_date) \
             VALUES (?, ?, ?, ?)",
        )
        .bind(&fields.product_name)
        .bind(&fields.country)
        .bind(&fields.submission_type)
        .bind(format_date(fields.deadline_date))
        .execute(&self.pool)
        .await?;

        Ok(SubmissionId(result.last_insert_rowid()))
    }

    #[tracing::instrument(name = "Update submission", skip(self, fields))]
    async fn update(&self, id: SubmissionId, fields: &SubmissionFields) -> Result<(), StoreError> {
        let result = sqlx::query(
            "UPDATE submissions \
             SET product_name = ?, country = ?, submission_type = ?, deadline_date = ? \
             WHERE id = ?",
        )
        .bind(&fields.product_name)
        .bind(&fields.country)
        .bind(&fields.submission_type)
        .bind(format_date(fields.deadline_date))
        .bind(id.0)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }

    #[tracing::instrument(name = "Delete submission", skip(self))]
    async fn delete(&self, id: SubmissionId) -> Result<(), StoreError> {
        let result = sqlx::query("DELETE FROM submissions WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id));
        }
        Ok(())
    }
}
