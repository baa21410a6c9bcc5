use once_cell::sync::Lazy;
use regex::Regex;

/// whitespace hugging a separator
static TRIM_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*([-:,])\s*").expect("trim pattern compiles"));
/// runs of commas left behind by empty segments
static COMMA_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r",{2,}").expect("comma pattern compiles"));

/// Normalizes raw range text before it is matched against the grammar.
///
/// Whitespace around `-`, `:` and `,` is dropped, repeated commas collapse
/// into one, and separators or whitespace at either end are stripped.
/// Nothing else is touched, so the result is a fixed point:
/// `canonicalize(&canonicalize(s)) == canonicalize(s)`.
pub fn canonicalize(raw: &str) -> String {
    let tight = TRIM_REGEX.replace_all(raw, "$1");
    let tight = COMMA_REGEX.replace_all(&tight, ",");
    tight
        .trim_matches(|c: char| c == ',' || c.is_whitespace())
        .to_string()
}
