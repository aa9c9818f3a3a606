use regex::{Captures, Regex};
use std::ops::Range;
use std::sync::LazyLock;

use crate::common::constants::URL_PATTERN;

static URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_PATTERN).expect("Failed to compile URL regex"));

/// A URL found in a text, with the parts the annotator cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlMatch<'t> {
    /// Byte offsets of the whole match, href prefix included
    pub span: (usize, usize),
    pub full: &'t str,
    /// `href="` or `href='` as written, or empty
    pub href_prefix: &'t str,
    pub url: &'t str,
    pub host: &'t str,
    /// Path, query and fragment; always a suffix of `url`
    pub tail: &'t str,
}

impl<'t> UrlMatch<'t> {
    fn from_captures(caps: &Captures<'t>) -> Option<Self> {
        let full = caps.get(0)?;
        let url = caps.name("url")?;
        let host = caps.name("host")?;
        let tail = caps.name("tail")?;
        let href_prefix = caps.name("href").map_or("", |m| m.as_str());

        Some(Self {
            span: (full.start(), full.end()),
            full: full.as_str(),
            href_prefix,
            url: url.as_str(),
            host: host.as_str(),
            tail: tail.as_str(),
        })
    }

    /// Scheme, userinfo, host and port: the URL without its tail
    pub fn authority(&self) -> &'t str {
        &self.url[..self.url.len() - self.tail.len()]
    }

    pub fn range(&self) -> Range<usize> {
        self.span.0..self.span.1
    }

    pub fn in_href(&self) -> bool {
        !self.href_prefix.is_empty()
    }
}

/// Lazily yields every http(s) URL in `text`, left to right, without overlap.
pub fn find_urls(text: &str) -> impl Iterator<Item = UrlMatch<'_>> {
    URL_RE
        .captures_iter(text)
        .filter_map(|caps| UrlMatch::from_captures(&caps))
}
