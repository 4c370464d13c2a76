//! SQLite-backed keyed record storage.
//!
//! Every piece of persisted state is an independently-keyed JSON value in
//! a single `kv` table: profile, session history, resources, mood entries,
//! today's plan, and the parked timer engine. Values are replaced whole;
//! a missing key is first-run seeding, not an error. New keys append --
//! existing keys never change meaning.

use rusqlite::{params, Connection, OptionalExtension};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::path::Path;

use super::data_dir;
use crate::error::StoreError;
use crate::model::{seed, MoodEntry, PlannedSession, Resource, StudySession, UserProfile};
use crate::state::AppState;

const KEY_PROFILE: &str = "profile";
const KEY_SESSIONS: &str = "sessions";
const KEY_RESOURCES: &str = "resources";
const KEY_MOOD_ENTRIES: &str = "mood_entries";
const KEY_TODAYS_PLAN: &str = "todays_plan";

/// Keyed record store.
pub struct Store {
    conn: Connection,
}

impl Store {
    /// Open the store at `~/.config/studyflow/studyflow.db`.
    pub fn open() -> Result<Self, StoreError> {
        let path = data_dir()?.join("studyflow.db");
        Self::open_at(&path)
    }

    /// Open the store at an explicit path (tests use a temp dir).
    pub fn open_at(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|source| StoreError::OpenFailed {
            path: path.to_path_buf(),
            source,
        })?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    /// Open an in-memory store.
    pub fn open_memory() -> Result<Self, StoreError> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.migrate()?;
        Ok(store)
    }

    fn migrate(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS kv (
                key   TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );",
        )?;
        Ok(())
    }

    // ── Raw key-value access ─────────────────────────────────────────

    pub fn kv_get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1", params![key], |row| {
                row.get::<_, String>(0)
            })
            .optional()?;
        Ok(value)
    }

    pub fn kv_set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }

    fn load_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        match self.kv_get(key)? {
            Some(json) => {
                let value =
                    serde_json::from_str(&json).map_err(|source| StoreError::InvalidRecord {
                        key: key.into(),
                        source,
                    })?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    fn save_json<T: Serialize>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let json = serde_json::to_string(value).map_err(|source| StoreError::InvalidRecord {
            key: key.into(),
            source,
        })?;
        self.kv_set(key, &json)
    }

    // ── Typed keys ───────────────────────────────────────────────────

    /// The profile has no seed: absence means onboarding hasn't run.
    pub fn load_profile(&self) -> Result<Option<UserProfile>, StoreError> {
        self.load_json(KEY_PROFILE)
    }

    pub fn save_profile(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.save_json(KEY_PROFILE, profile)
    }

    pub fn load_sessions(&self) -> Result<Vec<StudySession>, StoreError> {
        Ok(self.load_json(KEY_SESSIONS)?.unwrap_or_else(seed::sessions))
    }

    pub fn save_sessions(&self, sessions: &[StudySession]) -> Result<(), StoreError> {
        self.save_json(KEY_SESSIONS, &sessions)
    }

    pub fn load_resources(&self) -> Result<Vec<Resource>, StoreError> {
        Ok(self
            .load_json(KEY_RESOURCES)?
            .unwrap_or_else(seed::resources))
    }

    pub fn save_resources(&self, resources: &[Resource]) -> Result<(), StoreError> {
        self.save_json(KEY_RESOURCES, &resources)
    }

    pub fn load_mood_entries(&self) -> Result<Vec<MoodEntry>, StoreError> {
        Ok(self
            .load_json(KEY_MOOD_ENTRIES)?
            .unwrap_or_else(seed::mood_entries))
    }

    pub fn save_mood_entries(&self, entries: &[MoodEntry]) -> Result<(), StoreError> {
        self.save_json(KEY_MOOD_ENTRIES, &entries)
    }

    pub fn load_todays_plan(&self) -> Result<Vec<PlannedSession>, StoreError> {
        Ok(self
            .load_json(KEY_TODAYS_PLAN)?
            .unwrap_or_else(seed::todays_plan))
    }

    pub fn save_todays_plan(&self, plan: &[PlannedSession]) -> Result<(), StoreError> {
        self.save_json(KEY_TODAYS_PLAN, &plan)
    }

    // ── Whole app state ──────────────────────────────────────────────

    /// Load everything. `None` until onboarding has created a profile.
    pub fn load_state(&self) -> Result<Option<AppState>, StoreError> {
        let Some(profile) = self.load_profile()? else {
            return Ok(None);
        };
        Ok(Some(AppState {
            profile,
            sessions: self.load_sessions()?,
            resources: self.load_resources()?,
            mood_entries: self.load_mood_entries()?,
            todays_plan: self.load_todays_plan()?,
        }))
    }

    /// Persist every logical key (whole-value replacement).
    pub fn save_state(&self, state: &AppState) -> Result<(), StoreError> {
        self.save_profile(&state.profile)?;
        self.save_sessions(&state.sessions)?;
        self.save_resources(&state.resources)?;
        self.save_mood_entries(&state.mood_entries)?;
        self.save_todays_plan(&state.todays_plan)?;
        Ok(())
    }
}
