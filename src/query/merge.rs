use log::trace;

use super::keyword::format_keyword;
use super::params::QueryParams;
use crate::common::constants::ParamKeys;
use crate::common::types::CampaignParams;
use crate::matcher::UrlMatch;

/// A URL cut into the pieces that surround its query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct UrlParts<'u> {
    authority: &'u str,
    path: &'u str,
    query: Option<&'u str>,
    fragment: &'u str,
}

impl<'u> UrlParts<'u> {
    /// Only the tail is searched for `?` and `#`, since userinfo may hold both.
    fn split(url_match: &UrlMatch<'u>) -> Self {
        let tail = url_match.tail;
        let (before_fragment, fragment) = match tail.find('#') {
            Some(pos) => tail.split_at(pos),
            None => (tail, ""),
        };
        let (path, query) = match before_fragment.split_once('?') {
            Some((path, query)) => (path, Some(query)),
            None => (before_fragment, None),
        };
        Self {
            authority: url_match.authority(),
            path,
            query,
            fragment,
        }
    }
}

/// Adds the tracking parameters to a single URL.
///
/// An existing campaign is never overwritten. The keyword is only added
/// together with a campaign written in this pass. Source, medium and
/// content fill in whatever is missing or empty. New keys are appended in
/// the order campaign, term, source, medium, content.
pub fn merge_campaign(
    url_match: &UrlMatch<'_>,
    params: &CampaignParams,
    keys: &ParamKeys,
    url_number: u32,
) -> String {
    let url = url_match.url;
    let parts = UrlParts::split(url_match);
    let mut query = QueryParams::parse(parts.query.unwrap_or(""));

    let adds_campaign = !query.contains_key(keys.campaign);
    if adds_campaign {
        query.set(keys.campaign, &params.campaign);

        if let Some(template) = params.term_template() {
            if query.is_blank(keys.term) {
                query.set(keys.term, &format_keyword(template, url_number));
            }
        }
    } else {
        trace!("'{}' already carries {}, keeping it.", url, keys.campaign);
    }

    let extras = [
        (keys.source, params.source_value()),
        (keys.medium, params.medium_value()),
        (keys.content, params.content_value()),
    ];
    for (key, value) in extras {
        if let Some(value) = value {
            if query.is_blank(key) {
                query.set(key, value);
            }
        }
    }

    let new_query = query.to_query_string();
    if new_query.is_empty() {
        return url.to_string();
    }

    format!(
        "{}{}?{}{}",
        parts.authority, parts.path, new_query, parts.fragment
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::{MATOMO_KEYS, UTM_KEYS};
    use crate::matcher::find_urls;

    fn merge_with(url: &str, params: &CampaignParams, keys: &ParamKeys, number: u32) -> String {
        let url_match = find_urls(url).next().unwrap();
        assert_eq!(url_match.url, url);
        merge_campaign(&url_match, params, keys, number)
    }

    fn merge(url: &str, params: &CampaignParams) -> String {
        merge_with(url, params, &UTM_KEYS, 1)
    }

    fn split(url: &str) -> UrlParts<'_> {
        UrlParts::split(&find_urls(url).next().unwrap())
    }

    #[test]
    fn test_split_url_parts() {
        let parts = split("http://test.de/a?x=1#top");
        assert_eq!(parts.authority, "http://test.de");
        assert_eq!(parts.path, "/a");
        assert_eq!(parts.query, Some("x=1"));
        assert_eq!(parts.fragment, "#top");

        let parts = split("http://test.de?");
        assert_eq!(parts.query, Some(""));

        let parts = split("http://test.de/#a?b");
        assert_eq!(parts.path, "/");
        assert_eq!(parts.query, None);
        assert_eq!(parts.fragment, "#a?b");
    }

    #[test]
    fn test_split_ignores_question_mark_in_userinfo() {
        let parts = split("http://us?er@test.com/path");
        assert_eq!(parts.authority, "http://us?er@test.com");
        assert_eq!(parts.path, "/path");
        assert_eq!(parts.query, None);
    }

    #[test]
    fn test_merge_userinfo_with_question_mark() {
        assert_eq!(
            merge("http://us?er@test.com/path", &CampaignParams::new("news")),
            "http://us?er@test.com/path?utm_campaign=news&utm_medium=email"
        );
        assert_eq!(
            merge(
                "http://us?er@test.com/path?utm_campaign=keep",
                &CampaignParams::new("news")
            ),
            "http://us?er@test.com/path?utm_campaign=keep&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_without_query() {
        assert_eq!(
            merge("http://test.de", &CampaignParams::new("newsletter-nov-2012")),
            "http://test.de?utm_campaign=newsletter-nov-2012&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_bare_question_mark() {
        assert_eq!(
            merge("http://test.de?", &CampaignParams::new("news")),
            "http://test.de?utm_campaign=news&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_keeps_fragment_last() {
        assert_eq!(
            merge("http://test.de/page#section", &CampaignParams::new("news")),
            "http://test.de/page?utm_campaign=news&utm_medium=email#section"
        );
        assert_eq!(
            merge("http://test.de/page?a=1#section", &CampaignParams::new("news")),
            "http://test.de/page?a=1&utm_campaign=news&utm_medium=email#section"
        );
    }

    #[test]
    fn test_merge_full_parameter_order() {
        let params = CampaignParams::new("news")
            .source("mailer")
            .medium("mail")
            .term("link-%d")
            .content("footer");
        assert_eq!(
            merge_with("http://test.de?a=1", &params, &UTM_KEYS, 7),
            "http://test.de?a=1&utm_campaign=news&utm_term=link-7\
             &utm_source=mailer&utm_medium=mail&utm_content=footer"
        );
    }

    #[test]
    fn test_merge_existing_campaign_blocks_keyword() {
        let params = CampaignParams::new("override-attempt").term("override-attempt");
        assert_eq!(
            merge("http://test.de?utm_campaign=leave-me-alone", &params),
            "http://test.de?utm_campaign=leave-me-alone&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_existing_campaign_and_term_untouched() {
        let params = CampaignParams::new("override-attempt")
            .term("override-attempt")
            .without_medium();
        assert_eq!(
            merge("http://test.de?utm_campaign=leave-me-alone&utm_term=me-too", &params),
            "http://test.de?utm_campaign=leave-me-alone&utm_term=me-too"
        );
    }

    #[test]
    fn test_merge_fills_blank_values_in_place() {
        let params = CampaignParams::new("news").term("kw").source("src");
        assert_eq!(
            merge("http://test.de?utm_term=&utm_source=&x=1", &params),
            "http://test.de?utm_term=kw&utm_source=src&x=1&utm_campaign=news&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_keeps_non_blank_existing_values() {
        let params = CampaignParams::new("news").source("src");
        assert_eq!(
            merge("http://test.de?utm_source=partner&utm_medium=social", &params),
            "http://test.de?utm_source=partner&utm_medium=social&utm_campaign=news"
        );
    }

    #[test]
    fn test_merge_empty_campaign_still_written() {
        assert_eq!(
            merge("http://test.de", &CampaignParams::new("").without_medium()),
            "http://test.de?utm_campaign="
        );
    }

    #[test]
    fn test_merge_encodes_new_values() {
        let params = CampaignParams::new("newsletter nov,2012").term("link,1");
        assert_eq!(
            merge("http://test.de?p1=one%2Cvalue&param2=two", &params),
            "http://test.de?p1=one%2Cvalue&param2=two&utm_campaign=newsletter+nov%2C2012\
             &utm_term=link%2C1&utm_medium=email"
        );
    }

    #[test]
    fn test_merge_matomo_keys() {
        let params = CampaignParams::new("news").term("link1").without_medium();
        assert_eq!(
            merge_with("http://test.de", &params, &MATOMO_KEYS, 1),
            "http://test.de?pk_campaign=news&pk_keyword=link1"
        );
    }
}
