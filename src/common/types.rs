use serde::{Deserialize, Serialize};

use super::constants::{ParamKeys, DEFAULT_MEDIUM, MATOMO_KEYS, UTM_KEYS};

fn default_medium() -> Option<String> {
    Some(DEFAULT_MEDIUM.to_string())
}

/// Which family of query keys the annotator writes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamScheme {
    #[default]
    Utm,
    #[serde(alias = "piwik")]
    Matomo,
}

impl ParamScheme {
    pub fn keys(self) -> ParamKeys {
        match self {
            ParamScheme::Utm => UTM_KEYS,
            ParamScheme::Matomo => MATOMO_KEYS,
        }
    }
}

/// Tracking values to attach to every annotated URL.
///
/// Empty strings are treated the same as unset values, except for the
/// campaign, which is always written when the URL does not carry one yet.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct CampaignParams {
    pub campaign: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default = "default_medium")]
    pub medium: Option<String>,
    /// Keyword template; every `%d` becomes the URL number within one call.
    #[serde(default)]
    pub term: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl CampaignParams {
    pub fn new(campaign: impl Into<String>) -> Self {
        Self {
            campaign: campaign.into(),
            source: None,
            medium: default_medium(),
            term: None,
            content: None,
        }
    }

    pub fn source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn medium(mut self, medium: impl Into<String>) -> Self {
        self.medium = Some(medium.into());
        self
    }

    pub fn without_medium(mut self) -> Self {
        self.medium = None;
        self
    }

    pub fn term(mut self, term: impl Into<String>) -> Self {
        self.term = Some(term.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub(crate) fn source_value(&self) -> Option<&str> {
        non_empty(&self.source)
    }

    pub(crate) fn medium_value(&self) -> Option<&str> {
        non_empty(&self.medium)
    }

    pub(crate) fn term_template(&self) -> Option<&str> {
        non_empty(&self.term)
    }

    pub(crate) fn content_value(&self) -> Option<&str> {
        non_empty(&self.content)
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

/// Everything one annotate call needs besides the annotator's own settings.
#[derive(Debug, Clone, Copy)]
pub struct AnnotationRequest<'a> {
    pub params: &'a CampaignParams,
    pub href_only: bool,
}

impl<'a> AnnotationRequest<'a> {
    pub fn all(params: &'a CampaignParams) -> Self {
        Self {
            params,
            href_only: false,
        }
    }

    pub fn href_only(params: &'a CampaignParams) -> Self {
        Self {
            params,
            href_only: true,
        }
    }
}

/// Running number of the URL being annotated, starting at 1 for each call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeywordCounter(u32);

impl KeywordCounter {
    pub fn new() -> Self {
        Self(1)
    }

    pub fn current(&self) -> u32 {
        self.0
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

impl Default for KeywordCounter {
    fn default() -> Self {
        Self::new()
    }
}
