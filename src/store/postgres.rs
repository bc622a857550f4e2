//! PostgreSQL persistent store
//!
//! One row per record. `internal_id` is the store-assigned identifier handed
//! back from inserts; `id` is indexed but deliberately not unique. `seq` fixes
//! insertion order, which decides the "first match" among duplicate ids.

use async_trait::async_trait;
use sqlx::postgres::{PgPool, PgPoolOptions, PgRow};
use sqlx::Row;
use tracing::info;
use uuid::Uuid;

use crate::error::Result;
use crate::models::{InsertedId, StoredUser, User, UserPatch};
use crate::store::PersistentStore;

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        internal_id UUID PRIMARY KEY,
        id TEXT NOT NULL,
        name TEXT NOT NULL,
        seq BIGSERIAL NOT NULL
    )
"#;

const ADD_SEQ_COLUMN: &str = "ALTER TABLE users ADD COLUMN IF NOT EXISTS seq BIGSERIAL NOT NULL";

const CREATE_ID_INDEX: &str = "CREATE INDEX IF NOT EXISTS users_id_idx ON users (id)";

/// Store backed by a `sqlx` connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Opens a pool against `database_url`.
    pub async fn connect(database_url: &str, max_connections: u32) -> Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .connect(database_url)
            .await?;
        info!("Connected to PostgreSQL store");
        Ok(Self::new(pool))
    }

    /// Creates the users table and its non-unique `id` index if missing.
    pub async fn ensure_schema(&self) -> Result<()> {
        sqlx::query(CREATE_TABLE).execute(&self.pool).await?;
        sqlx::query(ADD_SEQ_COLUMN).execute(&self.pool).await?;
        sqlx::query(CREATE_ID_INDEX).execute(&self.pool).await?;
        Ok(())
    }
}

fn stored_user_from_row(row: &PgRow) -> Result<StoredUser> {
    let internal_id: Uuid = row.try_get("internal_id")?;
    Ok(StoredUser {
        internal_id: InsertedId(internal_id.simple().to_string()),
        user: User {
            id: row.try_get("id")?,
            name: row.try_get("name")?,
        },
    })
}

#[async_trait]
impl PersistentStore for PgStore {
    async fn insert(&self, user: &User) -> Result<InsertedId> {
        let internal_id = Uuid::new_v4();
        sqlx::query("INSERT INTO users (internal_id, id, name) VALUES ($1, $2, $3)")
            .bind(internal_id)
            .bind(&user.id)
            .bind(&user.name)
            .execute(&self.pool)
            .await?;
        Ok(InsertedId(internal_id.simple().to_string()))
    }

    async fn find_one(&self, id: &str) -> Result<Option<StoredUser>> {
        let row = sqlx::query(
            "SELECT internal_id, id, name FROM users WHERE id = $1 ORDER BY seq LIMIT 1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(stored_user_from_row).transpose()
    }

    async fn find_all(&self) -> Result<Vec<StoredUser>> {
        let rows = sqlx::query("SELECT internal_id, id, name FROM users ORDER BY seq")
            .fetch_all(&self.pool)
            .await?;

        rows.iter().map(stored_user_from_row).collect()
    }

    async fn update_one(&self, id: &str, patch: &UserPatch) -> Result<u64> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET name = COALESCE($2, name)
            WHERE internal_id = (
                SELECT internal_id FROM users WHERE id = $1 ORDER BY seq LIMIT 1
            )
            "#,
        )
        .bind(id)
        .bind(patch.name.as_deref())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected())
    }

    async fn delete_many(&self, id: &str) -> Result<u64> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn count(&self) -> Result<u64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.max(0) as u64)
    }
}
