use log::debug;

use crate::common::types::{AnnotationRequest, CampaignParams, KeywordCounter, ParamScheme};
use crate::domain_filter::DomainFilter;
use crate::matcher::find_urls;
use crate::query::merge_campaign;
use crate::settings::AnnotatorSettings;

/// Adds campaign tracking parameters to the URLs in a text.
///
/// The annotator only holds configuration (allowed domains, subdomain mode
/// and key scheme). Everything that belongs to a single call lives on that
/// call's stack, so one instance can be shared between threads.
#[derive(Debug, Clone, Default)]
pub struct Annotator {
    filter: DomainFilter,
    scheme: ParamScheme,
}

impl Annotator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_domains<I, S>(domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut annotator = Self::new();
        annotator.add_domains(domains);
        annotator
    }

    pub fn from_settings(settings: &AnnotatorSettings) -> Self {
        let mut annotator = Self::with_domains(&settings.domains);
        annotator.set_subdomain_mode(settings.match_subdomains);
        annotator.set_param_scheme(settings.param_scheme);
        annotator
    }

    pub fn add_domains<I, S>(&mut self, domains: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.filter.add_domains(domains);
    }

    pub fn set_subdomain_mode(&mut self, enabled: bool) {
        self.filter.set_match_subdomains(enabled);
    }

    pub fn set_param_scheme(&mut self, scheme: ParamScheme) {
        self.scheme = scheme;
    }

    pub fn domain_filter(&self) -> &DomainFilter {
        &self.filter
    }

    pub fn param_scheme(&self) -> ParamScheme {
        self.scheme
    }

    /// Annotates every allowed URL in `text`.
    pub fn annotate(&self, text: &str, params: &CampaignParams) -> String {
        self.rewrite(text, AnnotationRequest::all(params))
    }

    /// Annotates only URLs that are the value of an `href` attribute.
    pub fn annotate_href_only(&self, text: &str, params: &CampaignParams) -> String {
        self.rewrite(text, AnnotationRequest::href_only(params))
    }

    /// Annotates a single URL; anything that is not a URL comes back as is.
    pub fn annotate_url(&self, url: &str, params: &CampaignParams) -> String {
        self.annotate(url, params)
    }

    fn rewrite(&self, text: &str, request: AnnotationRequest<'_>) -> String {
        let keys = self.scheme.keys();
        let mut counter = KeywordCounter::new();
        let mut output = String::with_capacity(text.len() + 64);
        let mut last_end = 0;
        let mut found = 0usize;

        for url_match in find_urls(text) {
            found += 1;
            let range = url_match.range();
            output.push_str(&text[last_end..range.start]);
            last_end = range.end;

            if !self.filter.is_eligible(&url_match, request.href_only) {
                output.push_str(url_match.full);
                continue;
            }

            output.push_str(url_match.href_prefix);
            output.push_str(&merge_campaign(
                &url_match,
                request.params,
                &keys,
                counter.current(),
            ));
            counter.advance();
        }
        output.push_str(&text[last_end..]);

        debug!(
            "Annotated {} of {} URLs with campaign '{}'.",
            counter.current() - 1,
            found,
            request.params.campaign
        );
        output
    }
}
