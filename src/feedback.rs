//! Progress tracking and achievement feedback.
//!
//! The store is an explicit handle passed into the server, keyed by user id
//! with init-on-first-access. Persistence lives behind other collaborators;
//! this one holds its state in memory for the life of the process.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;

use crate::config::ProgressConfig;

/// What unlocks an achievement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "value")]
pub enum UnlockCondition {
    TranscriptionCount(u32),
    AnalysisCount(u32),
    TotalDurationMinutes(u32),
}

#[derive(Debug, Clone, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub condition: UnlockCondition,
    pub reward: &'static str,
    pub level: &'static str,
}

static ACHIEVEMENTS: Lazy<Vec<Achievement>> = Lazy::new(|| {
    vec![
        Achievement {
            id: "first_transcription",
            name: "First Steps",
            description: "Complete your first transcription",
            icon: "star",
            condition: UnlockCondition::TranscriptionCount(1),
            reward: "Unlocks basic analysis",
            level: "beginner",
        },
        Achievement {
            id: "five_transcriptions",
            name: "Getting the Hang of It",
            description: "Complete five transcriptions",
            icon: "trophy",
            condition: UnlockCondition::TranscriptionCount(5),
            reward: "Unlocks advanced visualization",
            level: "intermediate",
        },
        Achievement {
            id: "ten_transcriptions",
            name: "Transcription Ace",
            description: "Complete ten transcriptions",
            icon: "crown",
            condition: UnlockCondition::TranscriptionCount(10),
            reward: "Unlocks all advanced features",
            level: "advanced",
        },
        Achievement {
            id: "first_analysis",
            name: "Thinker",
            description: "Run your first analysis",
            icon: "bulb",
            condition: UnlockCondition::AnalysisCount(1),
            reward: "Unlocks model suggestions",
            level: "beginner",
        },
        Achievement {
            id: "five_analyses",
            name: "Analysis Veteran",
            description: "Run five analyses",
            icon: "brain",
            condition: UnlockCondition::AnalysisCount(5),
            reward: "Unlocks personalized models",
            level: "advanced",
        },
        Achievement {
            id: "long_transcription",
            name: "Patient Listener",
            description: "Transcribe more than 30 minutes of audio",
            icon: "clock",
            condition: UnlockCondition::TotalDurationMinutes(30),
            reward: "Unlocks long-form processing",
            level: "intermediate",
        },
    ]
});

/// Per-user counters and unlock state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProgress {
    pub user_id: String,
    pub transcription_count: u32,
    pub analysis_count: u32,
    pub total_duration_minutes: u32,
    pub achievements_unlocked: Vec<String>,
    pub last_activity: DateTime<Utc>,
    pub history: Vec<ProgressEvent>,
}

impl UserProgress {
    fn new(user_id: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            transcription_count: 0,
            analysis_count: 0,
            total_duration_minutes: 0,
            achievements_unlocked: Vec::new(),
            last_activity: Utc::now(),
            history: Vec::new(),
        }
    }

    fn measure(&self, condition: UnlockCondition) -> (u32, u32) {
        match condition {
            UnlockCondition::TranscriptionCount(target) => (self.transcription_count, target),
            UnlockCondition::AnalysisCount(target) => (self.analysis_count, target),
            UnlockCondition::TotalDurationMinutes(target) => (self.total_duration_minutes, target),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub timestamp: DateTime<Utc>,
    pub transcriptions: u32,
    pub analyses: u32,
    pub duration_minutes: u32,
}

/// Increments applied by one `record` call
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProgressDelta {
    #[serde(default)]
    pub transcriptions: u32,
    #[serde(default)]
    pub analyses: u32,
    #[serde(default)]
    pub duration_minutes: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecordOutcome {
    pub progress: UserProgress,
    pub new_achievements: Vec<Achievement>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextAchievement {
    pub achievement: Achievement,
    /// 0..=100
    pub progress_pct: f64,
    pub remaining: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct UserStats {
    pub progress: UserProgress,
    pub achievements_total: usize,
    pub next_achievements: Vec<NextAchievement>,
}

/// Explicit progress-store handle; share it via `Arc`
pub struct ProgressStore {
    users: Mutex<HashMap<String, UserProgress>>,
    config: ProgressConfig,
}

impl ProgressStore {
    pub fn new(config: ProgressConfig) -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
            config,
        }
    }

    pub fn achievements() -> &'static [Achievement] {
        &ACHIEVEMENTS
    }

    /// Apply a delta, append to history, and unlock anything newly earned
    pub async fn record(&self, user_id: &str, delta: &ProgressDelta) -> RecordOutcome {
        let mut users = self.users.lock().await;
        let progress = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserProgress::new(user_id));

        progress.transcription_count += delta.transcriptions;
        progress.analysis_count += delta.analyses;
        progress.total_duration_minutes += delta.duration_minutes;
        progress.last_activity = Utc::now();
        progress.history.push(ProgressEvent {
            timestamp: progress.last_activity,
            transcriptions: delta.transcriptions,
            analyses: delta.analyses,
            duration_minutes: delta.duration_minutes,
        });
        if progress.history.len() > self.config.history_limit {
            let excess = progress.history.len() - self.config.history_limit;
            progress.history.drain(..excess);
        }

        let mut new_achievements = Vec::new();
        for achievement in ACHIEVEMENTS.iter() {
            if progress
                .achievements_unlocked
                .iter()
                .any(|id| id == achievement.id)
            {
                continue;
            }
            let (current, target) = progress.measure(achievement.condition);
            if current >= target {
                progress.achievements_unlocked.push(achievement.id.to_string());
                new_achievements.push(achievement.clone());
            }
        }

        RecordOutcome {
            progress: progress.clone(),
            new_achievements,
        }
    }

    /// Stats view with the closest locked achievements first
    pub async fn stats(&self, user_id: &str) -> UserStats {
        let mut users = self.users.lock().await;
        let progress = users
            .entry(user_id.to_string())
            .or_insert_with(|| UserProgress::new(user_id))
            .clone();

        let mut next_achievements: Vec<NextAchievement> = ACHIEVEMENTS
            .iter()
            .filter(|a| !progress.achievements_unlocked.iter().any(|id| id == a.id))
            .map(|a| {
                let (current, target) = progress.measure(a.condition);
                NextAchievement {
                    achievement: a.clone(),
                    progress_pct: (current as f64 / target as f64 * 100.0).min(100.0),
                    remaining: target.saturating_sub(current),
                }
            })
            .collect();
        next_achievements.sort_by(|a, b| b.progress_pct.total_cmp(&a.progress_pct));
        next_achievements.truncate(self.config.next_achievements);

        UserStats {
            progress,
            achievements_total: ACHIEVEMENTS.len(),
            next_achievements,
        }
    }
}
