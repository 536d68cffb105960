//! Line-oriented console prompts with validation.
//!
//! Every prompt repeats until it gets an acceptable answer. Reader and
//! writer are generic so the flows can be driven from tests.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use studystats_core::parse_observation;

/// Optional inclusive bounds for numeric prompts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds<T> {
    pub min_value: Option<T>,
    pub max_value: Option<T>,
}

impl<T> Default for Bounds<T> {
    fn default() -> Self {
        Self {
            min_value: None,
            max_value: None,
        }
    }
}

impl<T: PartialOrd + Display + Copy> Bounds<T> {
    pub fn at_least(min_value: T) -> Self {
        Self {
            min_value: Some(min_value),
            max_value: None,
        }
    }

    pub fn between(min_value: T, max_value: T) -> Self {
        Self {
            min_value: Some(min_value),
            max_value: Some(max_value),
        }
    }

    /// Message explaining why `value` is rejected, if it is.
    pub fn violation(&self, value: T) -> Option<String> {
        if let Some(min) = self.min_value {
            if value < min {
                return Some(format!("Value must be at least {min}."));
            }
        }
        if let Some(max) = self.max_value {
            if value > max {
                return Some(format!("Value must be at most {max}."));
            }
        }
        None
    }
}

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Print a section header framed by `=` rules.
    pub fn header(&mut self, title: &str) -> io::Result<()> {
        let rule = "=".repeat(60);
        writeln!(self.output, "\n{rule}\n{title}\n{rule}")
    }

    pub fn say(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")
    }

    fn ask(&mut self, prompt: &str) -> io::Result<String> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        Ok(line.trim().to_string())
    }

    /// Prompt for a whole number within `bounds`.
    pub fn int(&mut self, message: &str, bounds: Bounds<i64>) -> io::Result<i64> {
        loop {
            let raw = self.ask(&format!("{message}: "))?;
            let Ok(value) = raw.parse::<i64>() else {
                self.say("Please enter a whole number.")?;
                continue;
            };
            match bounds.violation(value) {
                Some(msg) => self.say(&msg)?,
                None => return Ok(value),
            }
        }
    }

    /// Prompt for a real number within `bounds`.
    pub fn float(&mut self, message: &str, bounds: Bounds<f64>) -> io::Result<f64> {
        loop {
            let raw = self.ask(&format!("{message}: "))?;
            let Ok(value) = parse_observation(&raw) else {
                self.say("Please enter a number (you can use decimals).")?;
                continue;
            };
            match bounds.violation(value) {
                Some(msg) => self.say(&msg)?,
                None => return Ok(value),
            }
        }
    }

    /// Prompt for one of `options` (key, label); matching ignores case.
    ///
    /// Returns the key as declared in `options`.
    pub fn choice(&mut self, message: &str, options: &[(&str, &str)]) -> io::Result<String> {
        let keys_display = options
            .iter()
            .map(|(key, label)| format!("{key}={label}"))
            .collect::<Vec<_>>()
            .join(", ");

        loop {
            let raw = self.ask(&format!("{message} ({keys_display}): "))?;
            if let Some((key, _)) = options.iter().find(|(key, _)| key.eq_ignore_ascii_case(&raw)) {
                return Ok(key.to_string());
            }
            self.say("Invalid choice. Please try again.")?;
        }
    }

    /// Yes/no question. With a default, an empty answer selects it.
    pub fn yes_no(&mut self, message: &str, default: Option<bool>) -> io::Result<bool> {
        let suffix = match default {
            Some(true) => " [Y/n]",
            Some(false) => " [y/N]",
            None => " [y/n]",
        };

        loop {
            let raw = self.ask(&format!("{message}{suffix}: "))?.to_lowercase();
            if raw.is_empty() {
                if let Some(value) = default {
                    return Ok(value);
                }
            }
            match raw.as_str() {
                "y" | "yes" => return Ok(true),
                "n" | "no" => return Ok(false),
                _ => self.say("Please enter 'y' or 'n'.")?,
            }
        }
    }
}
