use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::common::types::ParamScheme;

fn default_true() -> bool {
    true
}

/// Annotator configuration as it would appear in a caller's JSON settings.
///
/// ```json
/// { "domains": ["example.com"], "match_subdomains": true, "param_scheme": "utm" }
/// ```
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AnnotatorSettings {
    #[serde(default)]
    pub domains: Vec<String>,
    #[serde(default = "default_true")]
    pub match_subdomains: bool,
    #[serde(default)]
    pub param_scheme: ParamScheme,
}

impl Default for AnnotatorSettings {
    fn default() -> Self {
        Self {
            domains: Vec::new(),
            match_subdomains: true,
            param_scheme: ParamScheme::default(),
        }
    }
}

impl AnnotatorSettings {
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let settings: AnnotatorSettings =
            serde_json::from_str(contents).context("Failed to parse annotator settings")?;

        debug!(
            "Annotator settings parsed: {} domain(s), subdomains {}, scheme {:?}.",
            settings.domains.len(),
            settings.match_subdomains,
            settings.param_scheme
        );
        Ok(settings)
    }

    pub fn to_json_string(&self) -> Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize annotator settings")
    }
}
