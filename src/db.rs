// Copyright 2026 the railprep authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

use chrono::NaiveDateTime;
use rusqlite::Connection;
use rusqlite::Transaction;

use crate::error::ErrorReport;
use crate::error::Fallible;
use crate::types::trigger::TriggerRegistration;

const FIRE_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// The on-device store: a string-keyed, string-valued dictionary (structured
/// values are JSON-encoded by the caller), plus the registry of pending
/// notification triggers.
#[derive(Clone)]
pub struct Database {
    conn: Arc<Mutex<Connection>>,
}

impl Database {
    pub fn new(database_path: &str) -> Fallible<Self> {
        let mut conn = Connection::open(database_path)?;
        {
            let tx = conn.transaction()?;
            if !probe_schema_exists(&tx)? {
                tx.execute_batch(include_str!("schema.sql"))?;
                tx.commit()?;
            }
        }
        let conn = Arc::new(Mutex::new(conn));
        Ok(Self { conn })
    }

    /// Read the value stored under `key`, if any.
    pub fn get_value(&self, key: &str) -> Fallible<Option<String>> {
        let conn = self.acquire();
        let mut stmt = conn.prepare("select value from kv where key = ?;")?;
        let mut rows = stmt.query([key])?;
        match rows.next()? {
            Some(row) => Ok(Some(row.get(0)?)),
            None => Ok(None),
        }
    }

    /// Write `value` under `key`, replacing any previous value. A single
    /// statement, so either the whole value is replaced or nothing is.
    pub fn set_value(&self, key: &str, value: &str) -> Fallible<()> {
        log::debug!("Storing {} bytes under {key}.", value.len());
        let conn = self.acquire();
        conn.execute(
            "insert or replace into kv (key, value) values (?, ?);",
            (key, value),
        )?;
        Ok(())
    }

    /// Return the identifiers of all registered triggers.
    pub fn trigger_ids(&self) -> Fallible<Vec<String>> {
        let mut ids = Vec::new();
        let conn = self.acquire();
        let mut stmt = conn.prepare("select trigger_id from triggers order by trigger_id;")?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            ids.push(row.get(0)?);
        }
        Ok(ids)
    }

    /// Remove the given triggers from the registry.
    pub fn cancel_triggers(&self, trigger_ids: &[String]) -> Fallible<()> {
        let mut conn = self.acquire();
        let tx = conn.transaction()?;
        for trigger_id in trigger_ids {
            tx.execute("delete from triggers where trigger_id = ?;", [trigger_id])?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Register a trigger, replacing any previous registration with the same
    /// identifier.
    pub fn register_trigger(&self, registration: &TriggerRegistration) -> Fallible<()> {
        let conn = self.acquire();
        let sql = "insert or replace into triggers (trigger_id, title, body, fire_at, repeat_daily) values (?, ?, ?, ?, ?);";
        conn.execute(
            sql,
            (
                &registration.trigger_id,
                &registration.title,
                &registration.body,
                registration.fire_at.format(FIRE_AT_FORMAT).to_string(),
                registration.repeat_daily,
            ),
        )?;
        Ok(())
    }

    /// Return all registered triggers, ordered by identifier.
    pub fn list_triggers(&self) -> Fallible<Vec<TriggerRegistration>> {
        let mut triggers = Vec::new();
        let conn = self.acquire();
        let sql =
            "select trigger_id, title, body, fire_at, repeat_daily from triggers order by trigger_id;";
        let mut stmt = conn.prepare(sql)?;
        let mut rows = stmt.query([])?;
        while let Some(row) = rows.next()? {
            let fire_at: String = row.get(3)?;
            let fire_at = NaiveDateTime::parse_from_str(&fire_at, FIRE_AT_FORMAT)
                .map_err(|e| ErrorReport::new(e.to_string()))?;
            triggers.push(TriggerRegistration {
                trigger_id: row.get(0)?,
                title: row.get(1)?,
                body: row.get(2)?,
                fire_at,
                repeat_daily: row.get(4)?,
            });
        }
        Ok(triggers)
    }

    fn acquire(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock().unwrap()
    }
}

fn probe_schema_exists(tx: &Transaction) -> Fallible<bool> {
    let sql = "select count(*) from sqlite_master where type='table' AND name=?;";
    let count: i64 = tx.query_row(sql, ["kv"], |row| row.get(0))?;
    Ok(count > 0)
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use tempfile::tempdir;

    use super::*;

    fn open_test_db() -> (tempfile::TempDir, Database) {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railprep.db");
        let db = Database::new(path.to_str().unwrap()).unwrap();
        (dir, db)
    }

    #[test]
    fn test_absent_key() -> Fallible<()> {
        let (_dir, db) = open_test_db();
        assert_eq!(db.get_value("UserNameKey")?, None);
        Ok(())
    }

    #[test]
    fn test_set_get_overwrite() -> Fallible<()> {
        let (_dir, db) = open_test_db();
        db.set_value("UserNameKey", "Asha")?;
        assert_eq!(db.get_value("UserNameKey")?, Some("Asha".to_string()));
        db.set_value("UserNameKey", "Ravi")?;
        assert_eq!(db.get_value("UserNameKey")?, Some("Ravi".to_string()));
        Ok(())
    }

    #[test]
    fn test_reopen_persists() -> Fallible<()> {
        let dir = tempdir().unwrap();
        let path = dir.path().join("railprep.db");
        {
            let db = Database::new(path.to_str().unwrap())?;
            db.set_value("UserLastScoreKey", "7/10")?;
        }
        let db = Database::new(path.to_str().unwrap())?;
        assert_eq!(db.get_value("UserLastScoreKey")?, Some("7/10".to_string()));
        Ok(())
    }

    #[test]
    fn test_trigger_registry() -> Fallible<()> {
        let (_dir, db) = open_test_db();
        let fire_at = NaiveDate::from_ymd_opt(2026, 1, 5)
            .unwrap()
            .and_hms_opt(7, 0, 0)
            .unwrap();
        let registration = TriggerRegistration {
            trigger_id: "GK_0700".to_string(),
            title: "Good morning!".to_string(),
            body: "Your first fact of the day is waiting.".to_string(),
            fire_at,
            repeat_daily: true,
        };
        db.register_trigger(&registration)?;
        assert_eq!(db.trigger_ids()?, vec!["GK_0700".to_string()]);
        assert_eq!(db.list_triggers()?, vec![registration.clone()]);

        // Re-registering the same id does not accumulate rows.
        db.register_trigger(&registration)?;
        assert_eq!(db.trigger_ids()?.len(), 1);

        db.cancel_triggers(&["GK_0700".to_string()])?;
        assert!(db.trigger_ids()?.is_empty());
        Ok(())
    }
}
