use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::Serialize;

pub const QUERY_PLACEHOLDER: &str = "{query}";
pub const DEFAULT_STORE_TEMPLATE: &str = "https://store.steampowered.com/search/?term={query}";
pub const DEFAULT_WEB_TEMPLATE: &str = "https://duckduckgo.com/?q={query}";

// Unreserved characters stay literal; spaces are handled separately as '+'.
const FORM_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchLinks {
    pub store_search_url: String,
    pub web_search_url: String,
}

impl SearchLinks {
    pub fn for_templates(name: &str, store_template: &str, web_template: &str) -> Self {
        let query = encode_query_value(name);
        Self {
            store_search_url: store_template.replace(QUERY_PLACEHOLDER, &query),
            web_search_url: web_template.replace(QUERY_PLACEHOLDER, &query),
        }
    }
}

/// Store and web search URLs for a folder name, using the built-in templates.
pub fn build_search_links(name: &str) -> SearchLinks {
    SearchLinks::for_templates(name, DEFAULT_STORE_TEMPLATE, DEFAULT_WEB_TEMPLATE)
}

/// Form-encodes a query-string value: space becomes `+`, everything outside
/// `[A-Za-z0-9-_.~]` is percent-escaped byte by byte.
pub fn encode_query_value(value: &str) -> String {
    value
        .split(' ')
        .map(|part| utf8_percent_encode(part, FORM_VALUE).to_string())
        .collect::<Vec<_>>()
        .join("+")
}
