use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use studystats_core::{parse_observations, render, summarize, SessionSummary};

#[derive(Args, Debug)]
pub struct SummarizeArgs {
    /// Session durations in minutes, e.g. "30,60,90"
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub durations: String,
    /// Pages read per session
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub pages: String,
    /// Focus ratings per session
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub focus: String,
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Summary JSON file (reads stdin when omitted)
    pub file: Option<PathBuf>,
}

pub fn run(args: SummarizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let durations = parse_observations(&args.durations)?;
    let pages = parse_observations(&args.pages)?;
    let focus = parse_observations(&args.focus)?;

    let summary = summarize(&durations, &pages, &focus);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render(&summary));
    }
    Ok(())
}

/// Render a summary JSON document; missing fields count as zero.
pub fn run_render(args: RenderArgs) -> Result<(), Box<dyn std::error::Error>> {
    let content = match args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };

    let summary: SessionSummary = if content.trim().is_empty() {
        SessionSummary::default()
    } else {
        serde_json::from_str(&content)?
    };
    println!("{}", render(&summary));
    Ok(())
}
