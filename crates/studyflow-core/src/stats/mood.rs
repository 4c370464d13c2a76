//! Mood distribution over the session history.

use serde::{Deserialize, Serialize};

use crate::model::{Mood, StudySession};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodShare {
    pub mood: Mood,
    pub count: usize,
    /// `count / total * 100`; 0 for every mood when the history is empty.
    pub percentage: f64,
}

/// Session counts and percentages for each of the four moods, ordered
/// poor through excellent.
pub fn mood_distribution(sessions: &[StudySession]) -> Vec<MoodShare> {
    let total = sessions.len();
    Mood::ALL
        .iter()
        .map(|&mood| {
            let count = sessions.iter().filter(|s| s.mood == mood).count();
            let percentage = if total == 0 {
                0.0
            } else {
                count as f64 / total as f64 * 100.0
            };
            MoodShare {
                mood,
                count,
                percentage,
            }
        })
        .collect()
}
