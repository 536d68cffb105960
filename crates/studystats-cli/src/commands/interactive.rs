//! Menu-driven console mode.

use std::io::{self, BufRead, Write};

use studystats_core::{Config, PromptConfig};

use super::session::{analyze_multiple, analyze_single, SessionArgs};
use crate::prompt::Prompter;

pub const APP_TITLE: &str = "StudyStats";

const MENU: [(&str, &str); 3] = [
    ("1", "Analyze a single study session"),
    ("2", "Analyze multiple sessions"),
    ("q", "Quit"),
];

/// Run the menu loop until the user quits.
pub fn menu_loop<R: BufRead, W: Write>(
    p: &mut Prompter<R, W>,
    prompts: &PromptConfig,
) -> io::Result<()> {
    p.header(APP_TITLE)?;

    loop {
        let choice = p.choice("What would you like to do?", &MENU)?;
        match choice.as_str() {
            "1" => {
                analyze_single(p, prompts, &SessionArgs::default())?;
            }
            "2" => {
                analyze_multiple(p, prompts)?;
            }
            _ => {
                if p.yes_no("Are you sure you want to quit?", None)? {
                    p.say("Goodbye.")?;
                    return Ok(());
                }
            }
        }
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let stdin = io::stdin();
    let mut prompter = Prompter::new(stdin.lock(), io::stdout());

    match menu_loop(&mut prompter, &config.prompts) {
        Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
            prompter.say("\nInput closed.")?;
            Ok(())
        }
        other => Ok(other?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run_menu(input: &str) -> (io::Result<()>, String) {
        let mut p = Prompter::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
        let result = menu_loop(&mut p, &PromptConfig::default());
        (result, String::from_utf8(p.into_output()).unwrap())
    }

    #[test]
    fn quit_requires_confirmation() {
        let (result, out) = run_menu("q\nn\nq\ny\n");
        assert!(result.is_ok());
        assert_eq!(out.matches("Are you sure you want to quit?").count(), 2);
        assert!(out.ends_with("Goodbye.\n"));
    }

    #[test]
    fn single_session_then_quit() {
        let (result, out) = run_menu("1\n50\n5\n0\n7\n0\nQ\nyes\n");
        assert!(result.is_ok());
        assert!(out.contains("Pages per hour:   6.00"));
    }

    #[test]
    fn unknown_choice_reprompts() {
        let (result, out) = run_menu("3\nq\ny\n");
        assert!(result.is_ok());
        assert!(out.contains("Invalid choice. Please try again."));
    }

    #[test]
    fn eof_ends_the_loop() {
        let (result, _) = run_menu("1\n");
        assert_eq!(result.unwrap_err().kind(), io::ErrorKind::UnexpectedEof);
    }
}
