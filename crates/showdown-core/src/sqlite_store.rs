use std::path::Path;
use std::sync::Mutex;

use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};

use crate::store::{ListStore, ScopeKey, StoreError, StoredLists};

/// SQLite-backed implementation of the ListStore trait.
///
/// Each scope stores two JSON documents, one per sequence kind; saving
/// replaces both in a single transaction.
pub struct SqliteListStore {
    conn: Mutex<Connection>,
}

impl SqliteListStore {
    /// Open (or create) a database at the given path.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn =
            Connection::open(path).map_err(|e| StoreError::Storage(format!("open: {e}")))?;
        Self::init_with_connection(conn)
    }

    /// Create an in-memory database (for testing).
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()
            .map_err(|e| StoreError::Storage(format!("open_in_memory: {e}")))?;
        Self::init_with_connection(conn)
    }

    fn init_with_connection(conn: Connection) -> Result<Self, StoreError> {
        Self::init_schema(&conn)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn init_schema(conn: &Connection) -> Result<(), StoreError> {
        conn.execute_batch(
            "
            PRAGMA journal_mode = WAL;

            CREATE TABLE IF NOT EXISTS list_records (
                scope_key TEXT NOT NULL,
                kind TEXT NOT NULL,
                payload TEXT NOT NULL,
                updated_at INTEGER NOT NULL,
                PRIMARY KEY (scope_key, kind)
            );
            ",
        )
        .map_err(|e| StoreError::Storage(format!("init_schema: {e}")))?;
        Ok(())
    }

    fn read_record(
        conn: &Connection,
        scope: &ScopeKey,
        kind: &str,
    ) -> Result<Option<String>, StoreError> {
        conn.query_row(
            "SELECT payload FROM list_records WHERE scope_key = ?1 AND kind = ?2",
            params![scope.as_key(), kind],
            |row| row.get(0),
        )
        .optional()
        .map_err(|e| StoreError::Storage(format!("read {kind}: {e}")))
    }
}

impl ListStore for SqliteListStore {
    fn load(&self, scope: &ScopeKey) -> Result<Option<StoredLists>, StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Storage(e.to_string()))?;
        let ranked = Self::read_record(&conn, scope, "ranked")?;
        let wish = Self::read_record(&conn, scope, "wish")?;
        if ranked.is_none() && wish.is_none() {
            return Ok(None);
        }
        let decode = |payload: Option<String>| -> Result<Vec<crate::item::Show>, StoreError> {
            match payload {
                Some(json) => {
                    serde_json::from_str(&json).map_err(|e| StoreError::Serialization(e.to_string()))
                }
                None => Ok(Vec::new()),
            }
        };
        Ok(Some(StoredLists {
            ranked: decode(ranked)?,
            wish: decode(wish)?,
        }))
    }

    fn save(&self, scope: &ScopeKey, lists: &StoredLists) -> Result<(), StoreError> {
        let ranked = serde_json::to_string(&lists.ranked)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let wish = serde_json::to_string(&lists.wish)
            .map_err(|e| StoreError::Serialization(e.to_string()))?;
        let now = Utc::now().timestamp_millis();

        let mut conn = self.conn.lock().map_err(|e| StoreError::Storage(e.to_string()))?;
        let tx = conn
            .transaction()
            .map_err(|e| StoreError::Storage(format!("save: {e}")))?;
        for (kind, payload) in [("ranked", &ranked), ("wish", &wish)] {
            tx.execute(
                "INSERT INTO list_records (scope_key, kind, payload, updated_at)
                 VALUES (?1, ?2, ?3, ?4)
                 ON CONFLICT (scope_key, kind) DO UPDATE SET
                     payload = excluded.payload,
                     updated_at = excluded.updated_at",
                params![scope.as_key(), kind, payload, now],
            )
            .map_err(|e| StoreError::Storage(format!("save {kind}: {e}")))?;
        }
        tx.commit()
            .map_err(|e| StoreError::Storage(format!("save: {e}")))
    }

    fn clear(&self, scope: &ScopeKey) -> Result<(), StoreError> {
        let conn = self.conn.lock().map_err(|e| StoreError::Storage(e.to_string()))?;
        conn.execute(
            "DELETE FROM list_records WHERE scope_key = ?1",
            params![scope.as_key()],
        )
        .map_err(|e| StoreError::Storage(format!("clear: {e}")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Show;

    fn sample_lists() -> StoredLists {
        let mut ranked = Show::new("Severance").with_external_id(95396);
        ranked.poster_ref = Some("/lFf6LLrQjYldcZItzOkGmMMigP7.jpg".into());
        ranked.year = Some(2022);
        ranked.overview = Some("Mark leads a team of office workers.".into());
        ranked.genre_tags = vec!["Drama".into(), "Sci-Fi & Fantasy".into()];
        StoredLists {
            ranked: vec![ranked, Show::new("Local Only Pilot")],
            wish: vec![Show::new("Andor").with_external_id(83867)],
        }
    }

    #[test]
    fn load_before_save_is_none() {
        let store = SqliteListStore::open_in_memory().unwrap();
        assert!(store.load(&ScopeKey::Guest).unwrap().is_none());
    }

    #[test]
    fn every_field_round_trips() {
        let store = SqliteListStore::open_in_memory().unwrap();
        let scope = ScopeKey::User("u1".into());
        let lists = sample_lists();
        store.save(&scope, &lists).unwrap();
        let back = store.load(&scope).unwrap().unwrap();
        assert_eq!(back, lists);
    }

    #[test]
    fn save_replaces_prior_records() {
        let store = SqliteListStore::open_in_memory().unwrap();
        let scope = ScopeKey::Guest;
        store.save(&scope, &sample_lists()).unwrap();
        let smaller = StoredLists {
            ranked: vec![Show::new("Only One").with_external_id(7)],
            wish: vec![],
        };
        store.save(&scope, &smaller).unwrap();
        assert_eq!(store.load(&scope).unwrap().unwrap(), smaller);
    }

    #[test]
    fn scopes_do_not_leak_into_each_other() {
        let store = SqliteListStore::open_in_memory().unwrap();
        store.save(&ScopeKey::Guest, &sample_lists()).unwrap();
        assert!(store
            .load(&ScopeKey::User("u1".into()))
            .unwrap()
            .is_none());
    }

    #[test]
    fn clear_drops_only_the_given_scope() {
        let store = SqliteListStore::open_in_memory().unwrap();
        let guest = ScopeKey::Guest;
        let user = ScopeKey::User("u1".into());
        store.save(&guest, &sample_lists()).unwrap();
        store.save(&user, &sample_lists()).unwrap();
        store.clear(&guest).unwrap();
        assert!(store.load(&guest).unwrap().is_none());
        assert!(store.load(&user).unwrap().is_some());
    }

    #[test]
    fn persists_across_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lists.db");
        let lists = sample_lists();
        {
            let store = SqliteListStore::open(&path).unwrap();
            store.save(&ScopeKey::Guest, &lists).unwrap();
        }
        let store = SqliteListStore::open(&path).unwrap();
        assert_eq!(store.load(&ScopeKey::Guest).unwrap().unwrap(), lists);
    }
}
