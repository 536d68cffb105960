//! Session analysis: one session from flags/prompts, or several prompted in a row.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use clap::Args;
use studystats_core::{
    analyze_session, parse_observation, render, render_session, summarize, Config, PromptConfig,
    SessionInput, SessionSummary, SingleSessionStats,
};

use crate::prompt::{Bounds, Prompter};

/// Values for a single session. Anything omitted is asked for.
#[derive(Args, Debug, Clone, Default)]
pub struct SessionArgs {
    /// Minutes studied in this session
    #[arg(long, allow_negative_numbers = true)]
    pub minutes: Option<i64>,
    /// Pages read
    #[arg(long, allow_negative_numbers = true)]
    pub pages: Option<i64>,
    /// Number of distinct topics
    #[arg(long)]
    pub topics: Option<u32>,
    /// Self-rated focus (1-10)
    #[arg(long, allow_negative_numbers = true)]
    pub focus: Option<i64>,
    /// Number of breaks taken
    #[arg(long, allow_negative_numbers = true)]
    pub breaks: Option<i64>,
    /// Total minutes spent on breaks (decimals allowed)
    #[arg(long, allow_negative_numbers = true, value_parser = parse_real)]
    pub break_minutes: Option<f64>,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_real(raw: &str) -> Result<f64, String> {
    parse_observation(raw).map_err(|e| e.to_string())
}

/// Check a value given on the command line against the prompt's bounds.
fn checked_preset<T>(flag: &str, value: T, bounds: Bounds<T>) -> io::Result<T>
where
    T: PartialOrd + Display + Copy,
{
    match bounds.violation(value) {
        Some(msg) => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("--{flag} {value}: {msg}"),
        )),
        None => Ok(value),
    }
}

fn value_or_prompt<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    (flag, preset): (&str, Option<i64>),
    message: &str,
    bounds: Bounds<i64>,
) -> io::Result<i64> {
    match preset {
        Some(value) => checked_preset(flag, value, bounds),
        None => p.int(message, bounds),
    }
}

fn focus_bounds(prompts: &PromptConfig) -> Bounds<i64> {
    Bounds::between(prompts.focus_min, prompts.focus_max)
}

/// Collect one session's raw values.
pub fn collect_session<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompts: &PromptConfig,
    args: &SessionArgs,
) -> io::Result<SessionInput> {
    let minutes = value_or_prompt(
        p,
        ("minutes", args.minutes),
        "Minutes studied in this session",
        Bounds::at_least(prompts.min_session_minutes),
    )?;
    let pages = value_or_prompt(
        p,
        ("pages", args.pages),
        "Pages read (0 if none)",
        Bounds::at_least(0),
    )?;
    let topics = match args.topics {
        Some(topics) => topics,
        None => {
            let raw = p.int(
                "Number of distinct topics (0 if not applicable)",
                Bounds::between(0, i64::from(u32::MAX)),
            )?;
            u32::try_from(raw).unwrap_or(u32::MAX)
        }
    };
    let focus = value_or_prompt(
        p,
        ("focus", args.focus),
        "Self-rated focus (1-10)",
        focus_bounds(prompts),
    )?;
    let breaks = value_or_prompt(
        p,
        ("breaks", args.breaks),
        "Number of breaks taken",
        Bounds::at_least(0),
    )?;
    let break_minutes = match args.break_minutes {
        Some(value) => checked_preset("break-minutes", value, Bounds::at_least(0.0))?,
        None if breaks > 0 => p.float("Total minutes spent on breaks", Bounds::at_least(0.0))?,
        None => 0.0,
    };

    Ok(SessionInput {
        minutes: minutes as f64,
        pages: pages as f64,
        topics,
        focus: focus as f64,
        breaks,
        break_minutes,
    })
}

/// Interactive single-session analysis; prints and returns the stats.
pub fn analyze_single<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompts: &PromptConfig,
    args: &SessionArgs,
) -> io::Result<SingleSessionStats> {
    p.header("Single Study Session Analysis")?;
    let input = collect_session(p, prompts, args)?;
    let stats = analyze_session(&input);
    tracing::debug!(?input, "analyzed single session");

    if args.json {
        let json = serde_json::to_string_pretty(&stats).map_err(io::Error::other)?;
        p.say(&json)?;
    } else {
        p.say("")?;
        p.say(&render_session(&stats))?;
        p.say("")?;
    }
    Ok(stats)
}

/// Interactive multi-session analysis; prints and returns the summary.
pub fn analyze_multiple<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompts: &PromptConfig,
) -> io::Result<SessionSummary> {
    p.header("Multi-Session Study Analysis")?;
    let n_sessions = p.int("How many sessions do you want to enter?", Bounds::at_least(1))?;

    let mut durations = Vec::new();
    let mut pages = Vec::new();
    let mut focus = Vec::new();

    for i in 1..=n_sessions {
        p.header(&format!("Session {i}/{n_sessions}"))?;
        let minutes = p.int(
            "Minutes studied in this session",
            Bounds::at_least(prompts.min_session_minutes),
        )?;
        let page_count = p.int("Pages read (0 if none)", Bounds::at_least(0))?;
        let rating = p.int("Self-rated focus (1-10)", focus_bounds(prompts))?;

        durations.push(minutes as f64);
        pages.push(page_count as f64);
        focus.push(rating as f64);
    }

    let summary = summarize(&durations, &pages, &focus);
    tracing::debug!(sessions = summary.sessions, "summarized sessions");

    p.say("")?;
    p.say(&render(&summary))?;
    p.say("")?;
    Ok(summary)
}

pub fn run(args: SessionArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());
    analyze_single(&mut prompter, &config.prompts, &args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(input: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
    }

    #[test]
    fn single_session_from_prompts() {
        // minutes, pages, topics, focus, breaks, break minutes
        let mut p = prompter("90\n30\n2\n8\n3\n15\n");
        let stats = analyze_single(&mut p, &PromptConfig::default(), &SessionArgs::default()).unwrap();

        assert_eq!(stats.effective_minutes, 75.0);
        assert_eq!(stats.pages_per_hour, 20.0);
        assert!((stats.focus_score - 7.4).abs() < 1e-9);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Single Study Session Analysis"));
        assert!(out.contains("Effective time:   75.0 minutes"));
    }

    #[test]
    fn break_minutes_accept_decimals() {
        // minutes, pages, topics, focus, breaks, break minutes
        let mut p = prompter("60\n10\n0\n9\n2\n-1\n7.5\n");
        let stats = analyze_single(&mut p, &PromptConfig::default(), &SessionArgs::default()).unwrap();
        assert_eq!(stats.break_minutes, 7.5);
        assert_eq!(stats.effective_minutes, 52.5);
        assert!(String::from_utf8(p.into_output()).unwrap().contains("Value must be at least 0."));
    }

    #[test]
    fn no_break_minutes_prompt_without_breaks() {
        let mut p = prompter("60\n10\n0\n9\n0\n");
        let stats = analyze_single(&mut p, &PromptConfig::default(), &SessionArgs::default()).unwrap();
        assert_eq!(stats.break_minutes, 0.0);
        assert_eq!(stats.effective_minutes, 60.0);
    }

    #[test]
    fn flags_skip_prompts() {
        let args = SessionArgs {
            minutes: Some(45),
            pages: Some(9),
            topics: Some(1),
            focus: Some(6),
            breaks: Some(1),
            break_minutes: Some(5.0),
            json: true,
        };
        let mut p = prompter("");
        let stats = analyze_single(&mut p, &PromptConfig::default(), &args).unwrap();
        assert_eq!(stats.effective_minutes, 40.0);
        assert_eq!(stats.pages_per_hour, 12.0);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("\"focus_score\": 6.0"));
    }

    #[test]
    fn out_of_range_flags_are_rejected() {
        let valid = SessionArgs {
            minutes: Some(30),
            pages: Some(5),
            topics: Some(0),
            focus: Some(8),
            breaks: Some(0),
            break_minutes: Some(0.0),
            json: false,
        };

        let mut p = prompter("");
        let args = SessionArgs { minutes: Some(-30), ..valid.clone() };
        let err = analyze_single(&mut p, &PromptConfig::default(), &args).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        assert_eq!(err.to_string(), "--minutes -30: Value must be at least 1.");
        assert!(!String::from_utf8(p.into_output()).unwrap().contains("Session Stats"));

        for (args, expected) in [
            (
                SessionArgs { pages: Some(-5), ..valid.clone() },
                "--pages -5: Value must be at least 0.",
            ),
            (
                SessionArgs { focus: Some(99), ..valid.clone() },
                "--focus 99: Value must be at most 10.",
            ),
            (
                SessionArgs { breaks: Some(-2), ..valid.clone() },
                "--breaks -2: Value must be at least 0.",
            ),
            (
                SessionArgs { break_minutes: Some(-5.0), ..valid.clone() },
                "--break-minutes -5: Value must be at least 0.",
            ),
        ] {
            let mut p = prompter("");
            let err = analyze_single(&mut p, &PromptConfig::default(), &args).unwrap_err();
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn break_minutes_flag_must_be_finite() {
        assert_eq!(parse_real(" 7.5 "), Ok(7.5));
        assert!(parse_real("NaN").is_err());
        assert!(parse_real("soon").is_err());
    }

    #[test]
    fn flags_respect_configured_bounds() {
        let prompts = PromptConfig {
            min_session_minutes: 30,
            ..PromptConfig::default()
        };
        let args = SessionArgs {
            minutes: Some(10),
            ..SessionArgs::default()
        };
        let mut p = prompter("");
        let err = analyze_single(&mut p, &prompts, &args).unwrap_err();
        assert_eq!(err.to_string(), "--minutes 10: Value must be at least 30.");
    }

    #[test]
    fn multiple_sessions_summary() {
        let input = "3\n30\n10\n8\n60\n20\n9\n90\n15\n7\n";
        let mut p = prompter(input);
        let summary = analyze_multiple(&mut p, &PromptConfig::default()).unwrap();

        assert_eq!(summary.sessions, 3);
        assert_eq!(summary.total_minutes, 180.0);
        assert_eq!(summary.pages_per_hour, 15.0);

        let out = String::from_utf8(p.into_output()).unwrap();
        assert!(out.contains("Session 2/3"));
        assert!(out.contains("Total pages:            45"));
    }
}
