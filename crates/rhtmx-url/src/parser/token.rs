//! Token matchers
//!
//! Pure functions over the unconsumed input. Each returns the longest
//! prefix free of its reserved delimiters, borrowed from the input.

use once_cell::sync::Lazy;
use regex::Regex;

/// Path tokens, outlet names and parameter keys/values
static SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/()?;=&#]*").expect("segment pattern is valid"));

/// Query values may also contain `;` and `=`
static QUERY_VALUE_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^()?&#]*").expect("query value pattern is valid"));

/// Longest prefix containing none of `/ ( ) ? ; = & #`
///
/// # Examples
///
/// ```
/// use rhtmx_url::parser::token::match_url_segment;
///
/// assert_eq!(match_url_segment("users;id=3/edit"), "users");
/// assert_eq!(match_url_segment("/users"), "");
/// assert_eq!(match_url_segment(""), "");
/// ```
pub fn match_url_segment(input: &str) -> &str {
    leading(&SEGMENT_REGEX, input)
}

/// Longest prefix containing none of `( ) ? & #`
///
/// # Examples
///
/// ```
/// use rhtmx_url::parser::token::match_url_query_param_value;
///
/// assert_eq!(match_url_query_param_value("a=b;c&next=1"), "a=b;c");
/// ```
pub fn match_url_query_param_value(input: &str) -> &str {
    leading(&QUERY_VALUE_REGEX, input)
}

fn leading<'a>(regex: &Regex, input: &'a str) -> &'a str {
    regex.find(input).map_or("", |m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_stops_at_every_delimiter() {
        for delimiter in ["/", "(", ")", "?", ";", "=", "&", "#"] {
            let input = format!("abc{}rest", delimiter);
            assert_eq!(match_url_segment(&input), "abc", "delimiter {}", delimiter);
        }
    }

    #[test]
    fn test_segment_keeps_outlet_colon() {
        assert_eq!(match_url_segment("popup:compose(x)"), "popup:compose");
    }

    #[test]
    fn test_query_value_allows_semicolon_and_equals() {
        assert_eq!(match_url_query_param_value("x=1;y=2#frag"), "x=1;y=2");
        assert_eq!(match_url_query_param_value("/a/b&c"), "/a/b");
        assert_eq!(match_url_query_param_value("&c"), "");
    }

    #[test]
    fn test_multibyte_input() {
        assert_eq!(match_url_segment("café/menu"), "café");
    }
}
