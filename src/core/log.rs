use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use regex::Regex;
use std::fs;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").unwrap());

fn strip_ansi(s: &str) -> String {
    ANSI_RE.replace_all(s, "").into_owned()
}

/// Colour for a `tracing` level label.
fn color_for_level(level: &str) -> Colour {
    match level {
        "ERROR" => Colour::Red,
        "WARN" => Colour::Yellow,
        "INFO" => Colour::Green,
        "DEBUG" => Colour::Blue,
        "TRACE" => Colour::Purple,
        _ => Colour::White,
    }
}

/// Split a log line into (timestamp, level, rest).
fn split_line(line: &str) -> Option<(&str, &str, &str)> {
    let line = line.trim_start();
    let (ts, rest) = line.split_once(char::is_whitespace)?;
    let rest = rest.trim_start();
    let (level, rest) = rest.split_once(char::is_whitespace)?;
    Some((ts, level, rest.trim_start()))
}

pub struct LogLogic;

impl LogLogic {
    /// Print the application log file, optionally only its last `last` lines.
    pub fn print_log(cfg: &Config, last: Option<usize>) -> AppResult<()> {
        let path = cfg.log_path();

        if !path.exists() {
            info(format!("Log file is empty: {}", path.display()));
            return Ok(());
        }

        let content = strip_ansi(&fs::read_to_string(&path)?);
        let lines: Vec<&str> = content.lines().filter(|l| !l.trim().is_empty()).collect();

        let skip = match last {
            Some(n) => lines.len().saturating_sub(n),
            None => 0,
        };

        for line in &lines[skip..] {
            match split_line(line) {
                Some((ts, level, rest)) => {
                    let color = color_for_level(level);
                    println!("{} {} {}", ts, color.paint(format!("{level:<5}")), rest);
                }
                None => println!("{line}"),
            }
        }

        Ok(())
    }
}
