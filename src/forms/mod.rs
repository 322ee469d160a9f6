use serde::{Deserialize, Deserializer};

pub mod categories;
pub mod products;
pub mod tags;

/// Collapse whitespace runs and strip control characters from user input.
pub(crate) fn sanitize_inline_text(input: &str) -> String {
    let mut sanitized = String::with_capacity(input.len());
    let mut previous_whitespace = false;

    for ch in input.trim().chars() {
        if ch.is_whitespace() {
            if !previous_whitespace {
                sanitized.push(' ');
                previous_whitespace = true;
            }
        } else if ch.is_control() {
            continue;
        } else {
            sanitized.push(ch);
            previous_whitespace = false;
        }
    }

    sanitized
}

/// Deserialize a field that distinguishes "absent" from "explicitly null".
///
/// Combined with `#[serde(default)]`: a missing field stays `None`, a JSON
/// `null` becomes `Some(None)`, and a value becomes `Some(Some(value))`.
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
