//! Naming conventions for derived controller names and the predicates that
//! check a candidate string against them.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use anyhow::{bail, Error};
use regex::Regex;
use serde::Serialize;

const SNAKE_PATTERN: &str = "^[a-z]+(_[a-z]+)*$";
const KEBAB_PATTERN: &str = "^[a-z]+(-[a-z]+)*$";

static SNAKE_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(SNAKE_PATTERN).ok());
static KEBAB_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(KEBAB_PATTERN).ok());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Convention {
    /// `snake_case`, used for metric names.
    Snake,
    /// `kebab-case`, used for logger names.
    Kebab,
}

impl Convention {
    pub fn separator(self) -> char {
        match self {
            Convention::Snake => '_',
            Convention::Kebab => '-',
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Convention::Snake => SNAKE_PATTERN,
            Convention::Kebab => KEBAB_PATTERN,
        }
    }

    fn regex(self) -> Option<&'static Regex> {
        match self {
            Convention::Snake => SNAKE_RE.as_ref(),
            Convention::Kebab => KEBAB_RE.as_ref(),
        }
    }
}

impl fmt::Display for Convention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Convention::Snake => f.write_str("snake_case"),
            Convention::Kebab => f.write_str("kebab-case"),
        }
    }
}

impl FromStr for Convention {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "snake" | "snake_case" | "metrics" => Ok(Convention::Snake),
            "kebab" | "kebab-case" | "logger" => Ok(Convention::Kebab),
            other => bail!("unknown naming convention: {other:?} (expected snake or kebab)"),
        }
    }
}

/// Returns true if `candidate` matches `pattern` as a whole.
///
/// The pattern is anchored at both ends, so `"[a-z]+"` behaves like
/// `"^[a-z]+$"`. A pattern that fails to compile is reported as a non-match.
pub fn matches_pattern(pattern: &str, candidate: &str) -> bool {
    Regex::new(&format!("^(?:{pattern})$"))
        .map(|re| re.is_match(candidate))
        .unwrap_or(false)
}

pub fn is_conforming(candidate: &str, convention: Convention) -> bool {
    convention
        .regex()
        .is_some_and(|re| re.is_match(candidate))
}

/// Metric names must be `snake_case`.
pub fn is_metrics_name(candidate: &str) -> bool {
    is_conforming(candidate, Convention::Snake)
}

/// Logger names must be `kebab-case`.
pub fn is_logger_name(candidate: &str) -> bool {
    is_conforming(candidate, Convention::Kebab)
}
