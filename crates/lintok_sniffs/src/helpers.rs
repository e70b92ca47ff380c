//! Shared name-convention checks used by the built-in sniffs.
//!
//! These are deliberately ASCII-only, matching the casing rules of the
//! checked language: characters outside `a-z`/`A-Z` are neither uppercase nor
//! lowercase and never fail a casing check on their own.

/// Uppercases the first ASCII character of `s`.
pub fn ucfirst(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Checks an "underscore-separated, each segment capitalized" name.
///
/// The name must not contain spaces, and neither the name nor any
/// `_`-separated segment may start with a lowercase ASCII letter. Empty
/// segments are skipped.
pub fn is_underscore_name(name: &str) -> bool {
    if name.is_empty() || name.contains(' ') {
        return false;
    }
    let first = name.chars().next().unwrap_or('_');
    if first.is_ascii_lowercase() {
        return false;
    }
    name.split('_')
        .filter(|bit| !bit.is_empty())
        .all(|bit| !bit.starts_with(|c: char| c.is_ascii_lowercase()))
}

/// Computes the suggested correction for an invalid underscore name:
/// each non-empty `_`-separated segment capitalized, empty segments dropped.
pub fn suggest_underscore_name(name: &str) -> String {
    name.split('_')
        .filter(|bit| !bit.is_empty())
        .map(ucfirst)
        .collect::<Vec<_>>()
        .join("_")
}

/// Checks a camelCase name: first character lowercase, only ASCII
/// alphanumerics afterwards (no underscores).
///
/// When `allow_underscore_prefix` is `true`, a single leading underscore is
/// stripped before checking. When `strict` is `true`, two consecutive
/// uppercase letters are also rejected; non-strict mode allows embedded
/// acronyms.
pub fn is_camel_caps(name: &str, allow_underscore_prefix: bool, strict: bool) -> bool {
    let mut name = name;
    if allow_underscore_prefix {
        name = name.strip_prefix('_').unwrap_or(name);
    }
    let mut chars = name.chars();
    match chars.next() {
        Some(first) if first.is_ascii_lowercase() => {}
        _ => return false,
    }
    let rest = chars.as_str();
    if !rest.chars().all(|c| c.is_ascii_alphanumeric()) {
        return false;
    }
    if strict {
        let mut prev_upper = false;
        for c in name.chars() {
            let upper = c.is_ascii_uppercase();
            if upper && prev_upper {
                return false;
            }
            prev_upper = upper;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ucfirst_basic() {
        assert_eq!(ucfirst("widget"), "Widget");
        assert_eq!(ucfirst("Widget"), "Widget");
        assert_eq!(ucfirst(""), "");
    }

    #[test]
    fn underscore_name_valid() {
        assert!(is_underscore_name("Acme_Widgets"));
        assert!(is_underscore_name("Acme"));
        assert!(is_underscore_name("Acme.Widgets"));
        assert!(is_underscore_name("Acme__Widgets"));
    }

    #[test]
    fn underscore_name_invalid() {
        assert!(!is_underscore_name("acme_Widgets"));
        assert!(!is_underscore_name("Acme_widgets"));
        assert!(!is_underscore_name("Acme Widgets"));
        assert!(!is_underscore_name(""));
    }

    #[test]
    fn suggest_capitalizes_segments() {
        assert_eq!(suggest_underscore_name("acme_widgets"), "Acme_Widgets");
        assert_eq!(suggest_underscore_name("acme__widgets"), "Acme_Widgets");
        assert_eq!(suggest_underscore_name("_acme_"), "Acme");
    }

    #[test]
    fn camel_caps_valid() {
        assert!(is_camel_caps("getName", false, false));
        assert!(is_camel_caps("render", false, false));
        assert!(is_camel_caps("parseXMLInput", false, false));
        assert!(is_camel_caps("_getName", true, false));
    }

    #[test]
    fn camel_caps_invalid() {
        assert!(!is_camel_caps("GetName", false, false));
        assert!(!is_camel_caps("get_name", false, false));
        assert!(!is_camel_caps("_getName", false, false));
        assert!(!is_camel_caps("", false, false));
    }

    #[test]
    fn camel_caps_strict_rejects_consecutive_capitals() {
        assert!(!is_camel_caps("parseXMLInput", false, true));
        assert!(is_camel_caps("parseXmlInput", false, true));
    }
}
