use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref MESSAGE_NOISE: Regex = Regex::new(r"TGPP|[ \-]").unwrap();
}

/// Joins hyphen separated words, upper-casing the character after each
/// hyphen. A leading `3` (as in `3GPP`) becomes `T`, since identifiers may
/// not start with a digit. The case of the first character is kept.
pub fn kebab_to_camel_case(kebab: &str) -> String {
    let mut camel = String::with_capacity(kebab.len());
    let mut upper_next = false;
    for (i, c) in kebab.chars().enumerate() {
        if i == 0 && c == '3' {
            camel.push('T');
            continue;
        }
        if upper_next {
            camel.extend(c.to_uppercase());
            upper_next = false;
        } else if c == '-' {
            upper_next = true;
        } else {
            camel.push(c);
        }
    }
    camel
}

/// `Origin-Host` -> `originHost`.
pub fn to_field_name(name: &str) -> String {
    let camel = kebab_to_camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        None        => String::new(),
        Some(first) => first.to_lowercase().chain(chars).collect(),
    }
}

/// `Subscription-Id` -> `SubscriptionId`, `3GPP-User-Location-Info` -> `TGPPUserLocationInfo`.
pub fn to_type_name(name: &str) -> String {
    let camel = kebab_to_camel_case(name);
    let mut chars = camel.chars();
    match chars.next() {
        None        => String::new(),
        Some(first) => first.to_uppercase().chain(chars).collect(),
    }
}

/// Base name for a command's top-level messages: application and command
/// names joined with `TGPP`, spaces and hyphens removed.
pub fn message_base_name(app_name: &str, command_name: &str) -> String {
    let joined = format!("{}{}", app_name, command_name);
    MESSAGE_NOISE.replace_all(&joined, "").into_owned()
}
