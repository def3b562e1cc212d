//! Slug validation and normalisation.
//!
//! Slugs appear in output paths and URLs, so the validator accepts
//! the RFC 3986 unreserved set while the normaliser emits a stricter
//! `a-z 0-9 -` alphabet. The validator is liberal, the normaliser
//! conservative.

/// Test a slug for validity.
///
/// Slugs containing characters outside the RFC 3986 unreserved set
/// (`a-z A-Z 0-9 - . _ ~`, plus percent-encoded characters) are
/// invalid, as is the empty string and any `%` not followed by two
/// hex digits. Only ASCII letters count.
///
/// Capital letters, periods, underscores and tildes are acceptable
/// but discouraged.
pub fn validate_slug(slug: &str) -> bool {
    if slug.is_empty() {
        return false;
    }
    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~' | '%'))
    {
        return false;
    }

    // Every percent sign must start a valid two-digit escape.
    let bytes = slug.as_bytes();
    for (i, &b) in bytes.iter().enumerate() {
        if b == b'%'
            && !(bytes.get(i + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(i + 2).is_some_and(u8::is_ascii_hexdigit))
        {
            return false;
        }
    }
    true
}

/// Rewrite a slug (or a title) to contain only valid characters.
///
/// Valid output characters are `a-z 0-9 -`. Lowercases the input,
/// turns common separators (dashes, `/:;,.~_`) and percent-encoded
/// characters into hyphens, changes spaces to hyphens, drops anything
/// else, collapses hyphen runs and trims hyphens from both ends.
///
/// A slug that normalises to nothing becomes `"untitled"` rather than
/// an empty path component.
pub fn normalise_slug(slug: &str) -> String {
    let lowered = slug.to_lowercase();

    // Percent-encoded characters become hyphens before the general
    // character filter removes the hex digits.
    let mut replaced = String::with_capacity(lowered.len());
    let chars: Vec<char> = lowered.chars().collect();
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if c == '%'
            && chars.get(i + 1).is_some_and(char::is_ascii_hexdigit)
            && chars.get(i + 2).is_some_and(char::is_ascii_hexdigit)
        {
            replaced.push('-');
            i += 3;
            continue;
        }
        if matches!(c, '\u{2014}' | '\u{2013}' | '/' | ':' | ';' | ',' | '.' | '~' | '_') {
            replaced.push('-');
        } else {
            replaced.push(c);
        }
        i += 1;
    }

    let mut out = String::with_capacity(replaced.len());
    let mut last_was_hyphen = false;
    for c in replaced.chars() {
        let mapped = match c {
            'a'..='z' | '0'..='9' => Some(c),
            '-' | ' ' => Some('-'),
            _ => None,
        };
        if let Some(c) = mapped {
            if c == '-' {
                if !last_was_hyphen {
                    out.push('-');
                }
                last_was_hyphen = true;
            } else {
                out.push(c);
                last_was_hyphen = false;
            }
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "untitled".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_unreserved() {
        for slug in ["hello-world", "Hello.World", "a_b~c", "a%20b", "2015"] {
            assert!(validate_slug(slug), "{slug} should be valid");
        }
    }

    #[test]
    fn test_validate_rejects_bad_chars() {
        for slug in ["hello world", "hello!", "caf\u{e9}", "a/b"] {
            assert!(!validate_slug(slug), "{slug} should be invalid");
        }
    }

    #[test]
    fn test_validate_rejects_empty() {
        assert!(!validate_slug(""));
    }

    #[test]
    fn test_validate_rejects_bad_percent_encoding() {
        assert!(!validate_slug("a%2"));
        assert!(!validate_slug("a%zz"));
        assert!(!validate_slug("trailing%"));
    }

    #[test]
    fn test_normalise_title() {
        assert_eq!(normalise_slug("Hello World"), "hello-world");
    }

    #[test]
    fn test_normalise_known_bad_slug() {
        let known_bad = "Here's a \u{2014} really! — bad.slug";
        let normalised = normalise_slug(known_bad);
        assert!(validate_slug(&normalised));
        assert!(
            normalised
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        );
    }

    #[test]
    fn test_normalise_separators_become_hyphens() {
        assert_eq!(normalise_slug("a/b:c;d"), "a-b-c-d");
        assert_eq!(normalise_slug("a_b.c~d"), "a-b-c-d");
    }

    #[test]
    fn test_normalise_percent_encoded_removed() {
        assert_eq!(normalise_slug("a%20b"), "a-b");
    }

    #[test]
    fn test_normalise_collapses_and_trims_hyphens() {
        assert_eq!(normalise_slug("--a---b--"), "a-b");
    }

    #[test]
    fn test_normalise_empty_result_falls_back() {
        assert_eq!(normalise_slug("!!!"), "untitled");
        assert_eq!(normalise_slug(""), "untitled");
    }
}
