//! Derivation of metric and logger names from human-supplied fragments.
//!
//! A [`ControllerName`] holds the raw fragments exactly as given. Derived
//! names are computed on demand: each fragment is lowercased and split into
//! words at every run of whitespace or punctuation, and the words are joined
//! with the convention's separator. Digits and non-ASCII letters are kept, so
//! `"Cache v2"` still yields a name that fails validation; use
//! [`ControllerName::try_new`] or [`ControllerName::validate`] to reject such
//! input up front.

use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::convention::{is_conforming, Convention};

/// Joins the words of `fragments` with `separator`, in order.
///
/// Whitespace and punctuation (including either separator) never reach the
/// output: runs of them split a fragment into words, and words are lowercased.
/// Returns an empty string when no fragment contains a word.
pub fn normalize<S: AsRef<str>>(fragments: &[S], separator: char) -> String {
    let mut out = String::new();
    for fragment in fragments {
        for word in words(fragment.as_ref()) {
            if !out.is_empty() {
                out.push(separator);
            }
            out.push_str(&word.to_ascii_lowercase());
        }
    }
    out
}

fn words(fragment: &str) -> impl Iterator<Item = &str> {
    fragment
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ControllerName {
    fragments: Vec<String>,
}

impl ControllerName {
    pub fn new<I, S>(fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            fragments: fragments.into_iter().map(Into::into).collect(),
        }
    }

    /// Like [`ControllerName::new`], but fails unless both derived names
    /// conform to their conventions.
    pub fn try_new<I, S>(fragments: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = Self::new(fragments);
        name.validate()?;
        Ok(name)
    }

    /// Fails if the name is degenerate or either derived name does not
    /// conform to its convention.
    pub fn validate(&self) -> Result<()> {
        if self.is_degenerate() {
            bail!(
                "Controller name has no non-blank fragments: {:?}",
                self.fragments
            );
        }
        for convention in [Convention::Snake, Convention::Kebab] {
            let derived = self.name_for(convention);
            if !is_conforming(&derived, convention) {
                debug!(fragments = ?self.fragments, %derived, %convention, "derived name rejected");
                bail!("Derived name {derived:?} is not valid {convention}");
            }
        }
        Ok(())
    }

    pub fn fragments(&self) -> &[String] {
        &self.fragments
    }

    /// True when no fragment contains a word, so both derived names are empty.
    pub fn is_degenerate(&self) -> bool {
        self.fragments.iter().all(|f| words(f).next().is_none())
    }

    pub fn name_for(&self, convention: Convention) -> String {
        normalize(&self.fragments, convention.separator())
    }

    pub fn metrics_name(&self) -> String {
        self.name_for(Convention::Snake)
    }

    pub fn logger_name(&self) -> String {
        self.name_for(Convention::Kebab)
    }

    pub fn derive(&self) -> DerivedNames {
        DerivedNames {
            fragments: self.fragments.clone(),
            metrics_name: self.metrics_name(),
            logger_name: self.logger_name(),
        }
    }
}

impl fmt::Display for ControllerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.logger_name())
    }
}

impl<S: Into<String>> FromIterator<S> for ControllerName {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DerivedNames {
    pub fragments: Vec<String>,
    pub metrics_name: String,
    pub logger_name: String,
}
