/// Medium used when the caller does not pick one
pub const DEFAULT_MEDIUM: &str = "email";

/// Placeholder in a keyword template that is replaced with the URL number
pub const KEYWORD_NUMBER_PLACEHOLDER: &str = "%d";

/// Pattern recognizing absolute http(s) URLs in running text.
///
/// Capture names: `href` is an optional preceding `href="` / `href='`,
/// `url` is the URL itself, `host` is the bare host without port and
/// `tail` is everything after the authority (path, query, fragment).
/// Letters are ASCII only.
pub const URL_PATTERN: &str = r#"(?ix-u)
    (?P<href>href\s*=\s*["'])?
    (?P<url>
        https?://
        (?:
            (?:[a-z0-9$_.+!*(),;?&=-]|%[0-9a-f]{2})+
            (?::(?:[a-z0-9$_.+!*(),;?&=-]|%[0-9a-f]{2})+)?
            @
        )?
        (?P<host>
            (?:(?:[a-z0-9]\.|[a-z0-9][a-z0-9-]*[a-z0-9]\.)*[a-z][a-z0-9-]*[a-z0-9])
            |
            (?:(?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])\.){3}
            (?:25[0-5]|2[0-4][0-9]|1[0-9]{2}|[1-9][0-9]|[0-9])
        )
        (?::[0-9]+)?
        (?P<tail>
            (?:
                (?:/+(?:[a-z0-9$_.+!*(),;:@&=-]|%[0-9a-f]{2})*)*
                (?:\?(?:[a-z0-9$_.+!*(),;:@&=-]|%[0-9a-f]{2})*)?
            )?
            (?:\#(?:[a-z0-9$_.+!*(),;:@&=-]|%[0-9a-f]{2})*)?
        )
    )
"#;

/// Query keys written for each tracking value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamKeys {
    pub campaign: &'static str,
    pub source: &'static str,
    pub medium: &'static str,
    pub term: &'static str,
    pub content: &'static str,
}

/// Google Analytics style keys
pub const UTM_KEYS: ParamKeys = ParamKeys {
    campaign: "utm_campaign",
    source: "utm_source",
    medium: "utm_medium",
    term: "utm_term",
    content: "utm_content",
};

/// Matomo (formerly Piwik) keys
pub const MATOMO_KEYS: ParamKeys = ParamKeys {
    campaign: "pk_campaign",
    source: "pk_source",
    medium: "pk_medium",
    term: "pk_keyword",
    content: "pk_content",
};
