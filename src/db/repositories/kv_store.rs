use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use rusqlite::{params, OptionalExtension};

use crate::db::{helpers::parse_datetime, Database};

/// A stored value together with the time it was last written.
#[derive(Debug, Clone, PartialEq)]
pub struct KvEntry {
    pub key: String,
    pub value: String,
    pub updated_at: DateTime<Utc>,
}

impl Database {
    pub async fn get_value(&self, key: &str) -> Result<Option<String>> {
        Ok(self.get_entry(key).await?.map(|entry| entry.value))
    }

    pub async fn get_entry(&self, key: &str) -> Result<Option<KvEntry>> {
        let key = key.to_string();
        self.execute(move |conn| {
            let row = conn
                .query_row(
                    "SELECT key, value, updated_at FROM kv_store WHERE key = ?1",
                    params![key],
                    |row| {
                        Ok((
                            row.get::<_, String>(0)?,
                            row.get::<_, String>(1)?,
                            row.get::<_, String>(2)?,
                        ))
                    },
                )
                .optional()
                .with_context(|| format!("failed to read key '{key}'"))?;

            row.map(|(key, value, updated_at)| -> Result<KvEntry> {
                Ok(KvEntry {
                    key,
                    value,
                    updated_at: parse_datetime(&updated_at, "updated_at")?,
                })
            })
            .transpose()
        })
        .await
    }

    pub async fn set_value(&self, key: &str, value: String) -> Result<()> {
        self.set_values(vec![(key.to_string(), value)]).await
    }

    /// Writes several keys atomically.
    pub async fn set_values(&self, entries: Vec<(String, String)>) -> Result<()> {
        self.execute(move |conn| {
            let now = Utc::now().to_rfc3339();
            let tx = conn.transaction().context("failed to open write transaction")?;
            for (key, value) in &entries {
                tx.execute(
                    "INSERT INTO kv_store (key, value, updated_at)
                     VALUES (?1, ?2, ?3)
                     ON CONFLICT(key) DO UPDATE SET
                         value = excluded.value,
                         updated_at = excluded.updated_at",
                    params![key, value, now],
                )
                .with_context(|| format!("failed to write key '{key}'"))?;
            }
            tx.commit().context("failed to commit write transaction")?;
            Ok(())
        })
        .await
    }

    /// Deletes the given keys, returning how many existed.
    pub async fn remove_values(&self, keys: &[&str]) -> Result<usize> {
        let keys: Vec<String> = keys.iter().map(|key| key.to_string()).collect();
        self.execute(move |conn| {
            let tx = conn.transaction().context("failed to open delete transaction")?;
            let mut removed = 0;
            for key in &keys {
                removed += tx
                    .execute("DELETE FROM kv_store WHERE key = ?1", params![key])
                    .with_context(|| format!("failed to delete key '{key}'"))?;
            }
            tx.commit().context("failed to commit delete transaction")?;
            Ok(removed)
        })
        .await
    }
}
