pub mod schema;

use chrono::Utc;
use rusqlite::Connection;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::{Arc, Mutex};

/// A registered user (password hash never leaves this module).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub account_type: String,
}

/// A persisted scam report with its assessment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRecord {
    pub id: i64,
    pub username: String,
    pub recipient: String,
    pub amount: f64,
    pub description: String,
    pub risk_score: u8,
    pub risk_level: String,
    pub warnings_json: String,
    pub scam_types_json: String,
    pub created_at: String,
}

fn now_string() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

pub struct Database {
    conn: Connection,
}

/// Thread-safe wrapper around Database.
#[derive(Clone)]
pub struct SharedDatabase {
    inner: Arc<Mutex<Database>>,
}

impl SharedDatabase {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let db = Database::open(path)?;
        Ok(Self {
            inner: Arc::new(Mutex::new(db)),
        })
    }

    /// Register a user. Returns false if the username is already taken.
    pub fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        account_type: &str,
    ) -> Result<bool, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.create_user(username, password_hash, account_type)
    }

    /// Check credentials. Returns the user on a hash match, None otherwise.
    pub fn verify_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.verify_user(username, password_hash)
    }

    pub fn create_session(&self, token: &str, username: &str) -> Result<(), rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.create_session(token, username)
    }

    /// Resolve a session token to its username.
    pub fn session_user(&self, token: &str) -> Result<Option<String>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.session_user(token)
    }

    /// Remove a session. Returns true if the token existed.
    pub fn delete_session(&self, token: &str) -> Result<bool, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.delete_session(token)
    }

    /// Persist a report together with its assessment.
    #[allow(clippy::too_many_arguments)]
    pub fn store_report(
        &self,
        username: &str,
        recipient: &str,
        amount: f64,
        description: &str,
        risk_score: u8,
        risk_level: &str,
        warnings_json: &str,
        scam_types_json: &str,
    ) -> Result<(), rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.store_report(
            username,
            recipient,
            amount,
            description,
            risk_score,
            risk_level,
            warnings_json,
            scam_types_json,
        )
    }

    /// Most recent reports, newest first.
    pub fn get_recent_reports(&self, limit: usize) -> Result<Vec<ReportRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.get_recent_reports(limit)
    }

    /// Reports at or above a minimum score, highest first.
    pub fn get_reports_above_score(
        &self,
        min_score: u8,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.get_reports_above_score(min_score, limit)
    }

    pub fn get_report_count(&self) -> Result<usize, rusqlite::Error> {
        let db = self.inner.lock().unwrap();
        db.get_report_count()
    }
}

impl Database {
    pub fn open(path: &Path) -> Result<Self, rusqlite::Error> {
        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;
        schema::migrate(&conn)?;
        Ok(Self { conn })
    }

    pub fn create_user(
        &self,
        username: &str,
        password_hash: &str,
        account_type: &str,
    ) -> Result<bool, rusqlite::Error> {
        let inserted = self.conn.execute(
            "INSERT OR IGNORE INTO users (username, password, account_type, created_at)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![username, password_hash, account_type, now_string()],
        )?;
        Ok(inserted > 0)
    }

    pub fn verify_user(
        &self,
        username: &str,
        password_hash: &str,
    ) -> Result<Option<UserRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT username, account_type FROM users WHERE username = ?1 AND password = ?2",
        )?;
        let mut rows = stmt.query(rusqlite::params![username, password_hash])?;
        if let Some(row) = rows.next()? {
            Ok(Some(UserRecord {
                username: row.get(0)?,
                account_type: row.get(1)?,
            }))
        } else {
            Ok(None)
        }
    }

    pub fn create_session(&self, token: &str, username: &str) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT OR REPLACE INTO sessions (token, username, created_at)
             VALUES (?1, ?2, ?3)",
            rusqlite::params![token, username, now_string()],
        )?;
        Ok(())
    }

    pub fn session_user(&self, token: &str) -> Result<Option<String>, rusqlite::Error> {
        let mut stmt = self
            .conn
            .prepare("SELECT username FROM sessions WHERE token = ?1")?;
        let mut rows = stmt.query(rusqlite::params![token])?;
        if let Some(row) = rows.next()? {
            Ok(Some(row.get(0)?))
        } else {
            Ok(None)
        }
    }

    pub fn delete_session(&self, token: &str) -> Result<bool, rusqlite::Error> {
        let deleted = self
            .conn
            .execute("DELETE FROM sessions WHERE token = ?1", rusqlite::params![token])?;
        Ok(deleted > 0)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn store_report(
        &self,
        username: &str,
        recipient: &str,
        amount: f64,
        description: &str,
        risk_score: u8,
        risk_level: &str,
        warnings_json: &str,
        scam_types_json: &str,
    ) -> Result<(), rusqlite::Error> {
        self.conn.execute(
            "INSERT INTO reports (username, recipient, amount, description, risk_score, risk_level, warnings, scam_types, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
            rusqlite::params![
                username,
                recipient,
                amount,
                description,
                risk_score as i64,
                risk_level,
                warnings_json,
                scam_types_json,
                now_string()
            ],
        )?;
        Ok(())
    }

    fn row_to_report(row: &rusqlite::Row) -> rusqlite::Result<ReportRecord> {
        Ok(ReportRecord {
            id: row.get(0)?,
            username: row.get(1)?,
            recipient: row.get(2)?,
            amount: row.get(3)?,
            description: row.get(4)?,
            risk_score: row.get::<_, i64>(5)? as u8,
            risk_level: row.get(6)?,
            warnings_json: row.get::<_, Option<String>>(7)?.unwrap_or_default(),
            scam_types_json: row.get::<_, Option<String>>(8)?.unwrap_or_default(),
            created_at: row.get(9)?,
        })
    }

    pub fn get_recent_reports(&self, limit: usize) -> Result<Vec<ReportRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, recipient, amount, description, risk_score, risk_level, warnings, scam_types, created_at
             FROM reports ORDER BY id DESC LIMIT ?1",
        )?;
        let rows = stmt.query_map(rusqlite::params![limit as i64], Self::row_to_report)?;
        rows.collect()
    }

    pub fn get_reports_above_score(
        &self,
        min_score: u8,
        limit: usize,
    ) -> Result<Vec<ReportRecord>, rusqlite::Error> {
        let mut stmt = self.conn.prepare(
            "SELECT id, username, recipient, amount, description, risk_score, risk_level, warnings, scam_types, created_at
             FROM reports WHERE risk_score >= ?1 ORDER BY risk_score DESC LIMIT ?2",
        )?;
        let rows = stmt.query_map(
            rusqlite::params![min_score as i64, limit as i64],
            Self::row_to_report,
        )?;
        rows.collect()
    }

    pub fn get_report_count(&self) -> Result<usize, rusqlite::Error> {
        self.conn.query_row("SELECT COUNT(*) FROM reports", [], |row| {
            row.get::<_, i64>(0).map(|c| c as usize)
        })
    }
}
