//! Domain types shared across the library.
//!
//! All persisted types serialize with serde; timestamps are `DateTime<Utc>`
//! and identifiers are UUID strings.

pub mod seed;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Self-reported affect level attached to a study session.
///
/// Ordered: `Poor < Okay < Good < Excellent`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Poor,
    Okay,
    Good,
    Excellent,
}

impl Mood {
    /// Reward multiplier expressed in tenths, so point derivation stays in
    /// integer arithmetic: excellent 1.5x, good 1.2x, okay 1.0x, poor 0.8x.
    pub fn multiplier_tenths(self) -> u64 {
        match self {
            Mood::Excellent => 15,
            Mood::Good => 12,
            Mood::Okay => 10,
            Mood::Poor => 8,
        }
    }

    pub const ALL: [Mood; 4] = [Mood::Poor, Mood::Okay, Mood::Good, Mood::Excellent];

    pub fn as_str(self) -> &'static str {
        match self {
            Mood::Poor => "poor",
            Mood::Okay => "okay",
            Mood::Good => "good",
            Mood::Excellent => "excellent",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "poor" => Ok(Mood::Poor),
            "okay" => Ok(Mood::Okay),
            "good" => Ok(Mood::Good),
            "excellent" => Ok(Mood::Excellent),
            other => Err(format!("unknown mood: {other}")),
        }
    }
}

/// Subject priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "high" => Ok(Priority::High),
            "medium" => Ok(Priority::Medium),
            "low" => Ok(Priority::Low),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

/// A study subject with a target-hours goal.
///
/// `completed_hours` only grows, and only through the session recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    /// Hex color tag, e.g. `#3B82F6`.
    pub color: String,
    pub priority: Priority,
    pub target_hours: f64,
    pub completed_hours: f64,
}

/// Lightweight subject reference carried by the timer engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectRef {
    pub id: String,
    pub name: String,
}

impl From<&Subject> for SubjectRef {
    fn from(subject: &Subject) -> Self {
        Self {
            id: subject.id.clone(),
            name: subject.name.clone(),
        }
    }
}

/// An immutable record of a completed (or stopped) study interval.
///
/// Created exclusively by the session recorder; never edited afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub subject_id: String,
    pub subject_name: String,
    pub duration_secs: u64,
    pub completed_at: DateTime<Utc>,
    pub mood: Mood,
    #[serde(default)]
    pub note: Option<String>,
    pub points_earned: u64,
}

/// A scheduled study slot for today, distinct from a recorded session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlannedSession {
    pub id: String,
    pub subject_id: String,
    pub subject_name: String,
    /// Time of day, `HH:MM`.
    pub start_time: String,
    /// Time of day, `HH:MM`.
    pub end_time: String,
    pub duration_min: u32,
    pub completed: bool,
    pub color: String,
}

/// A mood check-in entry, independent of any study session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodEntry {
    pub id: String,
    pub mood: Mood,
    /// 1-5 scale.
    pub energy: u8,
    /// 1-5 scale.
    pub motivation: u8,
    #[serde(default)]
    pub note: Option<String>,
    pub timestamp: DateTime<Utc>,
}

/// Kind of a stored study resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Link,
    File,
    Note,
    Video,
    Book,
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "link" => Ok(ResourceKind::Link),
            "file" => Ok(ResourceKind::File),
            "note" => Ok(ResourceKind::Note),
            "video" => Ok(ResourceKind::Video),
            "book" => Ok(ResourceKind::Book),
            other => Err(format!("unknown resource kind: {other}")),
        }
    }
}

/// A study resource attached to a subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    pub id: String,
    pub title: String,
    pub kind: ResourceKind,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub subject_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub last_accessed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub favorite: bool,
}

/// UI theme preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
    Auto,
}

/// First day of the week used by weekly analytics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekStart {
    Sunday,
    Monday,
}

impl WeekStart {
    pub fn weekday(self) -> chrono::Weekday {
        match self {
            WeekStart::Sunday => chrono::Weekday::Sun,
            WeekStart::Monday => chrono::Weekday::Mon,
        }
    }
}

/// Notification preference toggles.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationPrefs {
    #[serde(default = "default_true")]
    pub study_reminders: bool,
    #[serde(default = "default_true")]
    pub break_reminders: bool,
    #[serde(default = "default_true")]
    pub motivational_messages: bool,
    #[serde(default = "default_true")]
    pub achievements: bool,
}

impl Default for NotificationPrefs {
    fn default() -> Self {
        Self {
            study_reminders: true,
            break_reminders: true,
            motivational_messages: true,
            achievements: true,
        }
    }
}

/// Per-user settings carried inside the profile.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub notifications: NotificationPrefs,
    pub theme: Theme,
    pub language: String,
    pub timezone: String,
    pub sound_enabled: bool,
    pub auto_start_breaks: bool,
    pub week_starts_on: WeekStart,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            notifications: NotificationPrefs::default(),
            theme: Theme::Light,
            language: "en".into(),
            timezone: "America/New_York".into(),
            sound_enabled: true,
            auto_start_breaks: false,
            week_starts_on: WeekStart::Monday,
        }
    }
}

/// The user profile: identity, goals, subjects, settings, and the gamified
/// progress counters maintained by the session recorder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub goals: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<Subject>,
    #[serde(default)]
    pub preferred_study_times: Vec<String>,
    /// Preferred session length in minutes.
    pub session_length_min: u32,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub settings: UserSettings,
    pub level: u32,
    pub experience: u64,
    pub total_points: u64,
}

impl UserProfile {
    pub fn subject(&self, id: &str) -> Option<&Subject> {
        self.subjects.iter().find(|s| s.id == id)
    }

    pub fn subject_mut(&mut self, id: &str) -> Option<&mut Subject> {
        self.subjects.iter_mut().find(|s| s.id == id)
    }
}

/// Category of a motivational message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MotivationKind {
    Encouragement,
    Reminder,
    Celebration,
    Challenge,
}

/// A motivational message as displayed to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MotivationMessage {
    pub message: String,
    pub kind: MotivationKind,
    pub timestamp: DateTime<Utc>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mood_ordering() {
        assert!(Mood::Poor < Mood::Okay);
        assert!(Mood::Okay < Mood::Good);
        assert!(Mood::Good < Mood::Excellent);
    }

    #[test]
    fn mood_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Excellent).unwrap(), "\"excellent\"");
        let parsed: Mood = serde_json::from_str("\"okay\"").unwrap();
        assert_eq!(parsed, Mood::Okay);
    }

    #[test]
    fn mood_multipliers() {
        assert_eq!(Mood::Excellent.multiplier_tenths(), 15);
        assert_eq!(Mood::Good.multiplier_tenths(), 12);
        assert_eq!(Mood::Okay.multiplier_tenths(), 10);
        assert_eq!(Mood::Poor.multiplier_tenths(), 8);
    }

    #[test]
    fn settings_defaults_match_first_run() {
        let settings = UserSettings::default();
        assert_eq!(settings.week_starts_on, WeekStart::Monday);
        assert!(!settings.auto_start_breaks);
        assert!(settings.notifications.break_reminders);
    }
}
