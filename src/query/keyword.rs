use crate::common::constants::KEYWORD_NUMBER_PLACEHOLDER;

/// Fills a keyword template with the URL number.
///
/// Every `%d` becomes `number` and `%%` becomes a literal `%`. Any other
/// `%` sequence is copied as written.
pub fn format_keyword(template: &str, number: u32) -> String {
    let mut out = String::with_capacity(template.len() + 4);
    let mut rest = template;

    while let Some(pos) = rest.find('%') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        if tail.starts_with(KEYWORD_NUMBER_PLACEHOLDER) {
            out.push_str(&number.to_string());
            rest = &tail[KEYWORD_NUMBER_PLACEHOLDER.len()..];
        } else if tail.starts_with("%%") {
            out.push('%');
            rest = &tail[2..];
        } else {
            out.push('%');
            rest = &tail[1..];
        }
    }
    out.push_str(rest);
    out
}
