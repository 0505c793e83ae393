use crate::util::equals_ignore_case;
use indexmap::IndexMap;

/// Header storage keyed by lower-cased name, in insertion order.
pub type Headers = IndexMap<String, String>;

/// Adds `token` to the comma-separated `current` value unless an entry with
/// the same name (compared case-insensitively) is already present.
///
/// Existing entries keep their order and spelling; the new token goes last.
/// Empty segments are dropped and the result is joined with `", "`.
pub fn append_unique(current: Option<&str>, token: &str) -> String {
    let mut entries: Vec<&str> = current
        .map(|existing| {
            existing
                .split(',')
                .map(str::trim)
                .filter(|part| !part.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let incoming = token.trim();
    if !incoming.is_empty()
        && !entries
            .iter()
            .any(|existing| equals_ignore_case(existing, incoming))
    {
        entries.push(incoming);
    }

    entries.join(", ")
}

#[cfg(test)]
#[path = "headers_test.rs"]
mod headers_test;
