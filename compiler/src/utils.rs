use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref IDENTIFIER: Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
}

/// JSON-quote `text` for use inside a `.proto` string literal.
pub fn quote(text: &str) -> String {
    serde_json::to_string(text).unwrap_or_else(|_| format!("\"{}\"", text))
}

/// Whether `name` is a legal protobuf identifier.
pub fn is_identifier(name: &str) -> bool {
    IDENTIFIER.is_match(name)
}
