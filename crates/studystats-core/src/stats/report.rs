//! Session summaries and their text renderings.
//!
//! Kept apart from any user interaction so the same reports can back the
//! console program, JSON output or another front end.

use serde::{Deserialize, Serialize};

use super::calculator;

/// Aggregate statistics across a set of study sessions.
///
/// Every field defaults to zero, so partially collected summaries (and JSON
/// documents with missing keys) still render.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionSummary {
    /// Number of sessions (length of the duration set)
    pub sessions: usize,
    /// Sum of all durations in minutes
    pub total_minutes: f64,
    /// `total_minutes / 60`
    pub total_hours: f64,
    /// Mean duration in minutes
    pub avg_duration: f64,
    /// Median duration in minutes
    pub median_duration: f64,
    /// Sum of pages read
    pub total_pages: f64,
    /// Pages per hour over the whole set
    pub pages_per_hour: f64,
    /// Mean self-rated focus
    pub avg_focus: f64,
}

/// Build a [`SessionSummary`] from three independent observation sets.
///
/// The sets need not have equal length; `sessions` counts durations.
pub fn summarize(durations: &[f64], pages: &[f64], focus_ratings: &[f64]) -> SessionSummary {
    let total_minutes: f64 = durations.iter().sum();
    let total_pages: f64 = pages.iter().sum();

    SessionSummary {
        sessions: durations.len(),
        total_minutes,
        total_hours: total_minutes / 60.0,
        avg_duration: calculator::mean(durations),
        median_duration: calculator::median(durations),
        total_pages,
        pages_per_hour: calculator::pages_per_hour(total_pages, total_minutes),
        avg_focus: calculator::mean(focus_ratings),
    }
}

/// Fixed-format text rendering of a summary (no trailing newline).
pub fn render(summary: &SessionSummary) -> String {
    let lines = [
        "Study Stats Summary".to_string(),
        "-------------------".to_string(),
        format!("Sessions:               {}", summary.sessions),
        format!(
            "Total time:             {:.1} minutes ({:.2} h)",
            summary.total_minutes, summary.total_hours
        ),
        format!("Average session length: {:.1} minutes", summary.avg_duration),
        format!("Median session length:  {:.1} minutes", summary.median_duration),
        format!("Total pages:            {}", summary.total_pages.trunc() as i64),
        format!("Pages per hour:         {:.2}", summary.pages_per_hour),
        format!("Average focus rating:   {:.2} / 10", summary.avg_focus),
    ];
    lines.join("\n")
}

/// Raw data for one study session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionInput {
    /// Minutes allocated to the session, breaks included
    pub minutes: f64,
    pub pages: f64,
    /// Distinct topics covered (informational)
    pub topics: u32,
    /// Self-rated focus, 1-10
    pub focus: f64,
    pub breaks: i64,
    pub break_minutes: f64,
}

/// Derived statistics for one study session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SingleSessionStats {
    pub total_minutes: f64,
    pub break_minutes: f64,
    pub effective_minutes: f64,
    pub pages: f64,
    pub topics: u32,
    pub pages_per_hour: f64,
    pub focus_score: f64,
}

/// Compute the one-session report.
///
/// Reading speed uses the full session length, breaks included.
pub fn analyze_session(input: &SessionInput) -> SingleSessionStats {
    SingleSessionStats {
        total_minutes: input.minutes,
        break_minutes: input.break_minutes,
        effective_minutes: calculator::effective_study_time(input.minutes, input.break_minutes),
        pages: input.pages,
        topics: input.topics,
        pages_per_hour: calculator::pages_per_hour(input.pages, input.minutes),
        focus_score: calculator::focus_score(input.focus, input.breaks),
    }
}

/// Text rendering of a single session (no trailing newline).
pub fn render_session(stats: &SingleSessionStats) -> String {
    let lines = [
        "--- Session Stats ---".to_string(),
        format!("Total time:       {:.0} minutes", stats.total_minutes),
        format!("Break time:       {:.0} minutes", stats.break_minutes),
        format!("Effective time:   {:.1} minutes", stats.effective_minutes),
        format!("Pages read:       {:.0}", stats.pages),
        format!("Pages per hour:   {:.2}", stats.pages_per_hour),
        format!("Focus score:      {:.2} / 10", stats.focus_score),
        "--------------------".to_string(),
    ];
    lines.join("\n")
}
