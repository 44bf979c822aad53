// src/domain/slug/normalizer.rs
use deunicode::deunicode_char;

use super::friendly::generate_friendly_name;

const UNKNOWN_MARKER: char = '?';

/// Converts `input` to a Latin approximation.
///
/// ASCII is kept as-is. Non-ASCII letters and digits (kana, kanji, accented
/// Latin, full-width forms) are replaced with their romanized reading; other
/// non-ASCII whitespace becomes a plain space. Everything else, including
/// symbols such as `☆` or `♪`, becomes `?` so that later stripping removes it.
pub fn transliterate(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if ch.is_ascii() {
            out.push(ch);
        } else if ch.is_alphanumeric() {
            match deunicode_char(ch) {
                Some(latin) if latin.is_ascii() => out.push_str(latin),
                _ => out.push(UNKNOWN_MARKER),
            }
        } else if ch.is_whitespace() {
            out.push(' ');
        } else {
            out.push(UNKNOWN_MARKER);
        }
    }
    out
}

/// Runs the normalization pipeline and returns `None` when nothing
/// alphanumeric survives it.
pub fn normalize(input: &str) -> Option<String> {
    let lowered = transliterate(input).to_lowercase();

    let mut hyphenated = String::with_capacity(lowered.len());
    let mut in_whitespace = false;
    for ch in lowered.trim().chars() {
        if ch.is_whitespace() {
            if !in_whitespace {
                hyphenated.push('-');
            }
            in_whitespace = true;
        } else {
            hyphenated.push(ch);
            in_whitespace = false;
        }
    }

    let mut collapsed = String::with_capacity(hyphenated.len());
    for ch in hyphenated
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '-')
    {
        if ch == '-' && collapsed.ends_with('-') {
            continue;
        }
        collapsed.push(ch);
    }

    let slug = collapsed.trim_matches('-');
    if slug.bytes().any(|b| b.is_ascii_alphanumeric()) {
        Some(slug.to_owned())
    } else {
        None
    }
}

/// Produces a slug candidate for `input`, falling back to a random friendly
/// name when the input has no usable characters.
pub fn generate_base_slug(input: &str) -> String {
    normalize(input).unwrap_or_else(generate_friendly_name)
}
