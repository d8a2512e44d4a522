use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::controller_name::ControllerName;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "controller")]
    pub controllers: Vec<ControllerEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ControllerEntry {
    pub fragments: ControllerName,
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    pub fn into_names(self) -> Vec<ControllerName> {
        self.controllers.into_iter().map(|c| c.fragments).collect()
    }
}
