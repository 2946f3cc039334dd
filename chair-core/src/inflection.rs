//! English singularization for table names.
//!
//! Only the last word of an identifier is inflected, so `beautiful_people`
//! becomes `beautiful_person` while the prefix and its delimiters are kept
//! verbatim.

/// Singularize the last word of an identifier.
///
/// Words are delimited by `_`, `-` or a lower-to-upper camel boundary.
/// Uncountable or already singular words pass through unchanged.
pub fn to_singular(s: &str) -> String {
    let start = last_word_start(s);
    let (prefix, word) = s.split_at(start);
    if word.is_empty() {
        return s.to_string();
    }

    let lower = word.to_lowercase();
    let singular = pluralizer::pluralize(&lower, 1, false);
    if singular == lower {
        return s.to_string();
    }
    format!("{}{}", prefix, restore_case(word, &singular))
}

/// Byte offset where the last word of `s` begins.
fn last_word_start(s: &str) -> usize {
    let mut start = 0;
    let mut prev: Option<char> = None;
    for (i, c) in s.char_indices() {
        if c == '_' || c == '-' {
            start = i + c.len_utf8();
        } else if c.is_uppercase() && prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit())
        {
            start = i;
        }
        prev = Some(c);
    }
    start
}

/// Copy the letter case of `original` onto `singular` character by character.
///
/// Characters past the end of `original` follow the case of its last character.
fn restore_case(original: &str, singular: &str) -> String {
    let mut mask = original.chars().map(char::is_uppercase);
    let mut last_upper = false;
    singular
        .chars()
        .map(|c| {
            if let Some(upper) = mask.next() {
                last_upper = upper;
            }
            if last_upper {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}
