use log::{trace, warn};

use crate::matcher::UrlMatch;

/// Decides which hosts get annotated.
///
/// An empty allow-list lets every host through. In subdomain mode (the
/// default) a configured `example.com` also admits `www.example.com`, but
/// never `notexample.com`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomainFilter {
    domains: Vec<String>,
    match_subdomains: bool,
}

impl DomainFilter {
    pub fn new() -> Self {
        Self {
            domains: Vec::new(),
            match_subdomains: true,
        }
    }

    pub fn add_domains<I, S>(&mut self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for domain in domains {
            let raw = domain.as_ref();
            let normalized = raw.trim().trim_start_matches('.').to_ascii_lowercase();
            if normalized.is_empty() {
                warn!("Ignoring blank domain entry '{}'.", raw);
                continue;
            }
            if !self.domains.contains(&normalized) {
                self.domains.push(normalized);
            }
        }
    }

    pub fn set_match_subdomains(&mut self, enabled: bool) {
        self.match_subdomains = enabled;
    }

    pub fn match_subdomains(&self) -> bool {
        self.match_subdomains
    }

    pub fn domains(&self) -> &[String] {
        &self.domains
    }

    pub fn allows_host(&self, host: &str) -> bool {
        if self.domains.is_empty() {
            return true;
        }

        let host = host.to_ascii_lowercase();
        self.domains.iter().any(|domain| {
            host == *domain
                || (self.match_subdomains
                    && host.len() > domain.len()
                    && host.ends_with(domain.as_str())
                    && host.as_bytes()[host.len() - domain.len() - 1] == b'.')
        })
    }

    /// Whether a found URL should be rewritten at all.
    pub fn is_eligible(&self, url_match: &UrlMatch<'_>, href_only: bool) -> bool {
        if href_only && !url_match.in_href() {
            trace!("Skipping '{}': not inside an href attribute.", url_match.url);
            return false;
        }
        if !self.allows_host(url_match.host) {
            trace!("Skipping '{}': host '{}' not allowed.", url_match.url, url_match.host);
            return false;
        }
        true
    }
}

impl Default for DomainFilter {
    fn default() -> Self {
        Self::new()
    }
}
