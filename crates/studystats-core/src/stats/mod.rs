//! Statistics module for StudyStats
//!
//! `calculator` holds the pure numeric functions; `report` composes them
//! into session summaries and text renderings.

pub mod calculator;
pub mod report;

pub use calculator::{
    effective_study_time, focus_score, mean, median, pages_per_hour, BREAK_PENALTY, FOCUS_MAX,
    FOCUS_MIN,
};

pub use report::{
    analyze_session, render, render_session, summarize, SessionInput, SessionSummary,
    SingleSessionStats,
};
