//! Phrase to identifier conversion.

use convert_case::{Case, Casing};

fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '_' || c == '-'
}

/// Convert a human-readable label into a PascalCase identifier.
///
/// Characters that cannot appear in an identifier (apostrophes, periods,
/// parentheses) are dropped before word splitting, so `Sh'lach` becomes
/// `Shlach` rather than `ShLach`. Words of a mixed-case label keep their
/// inner capitals (`Ha'Azinu` becomes `HaAzinu`, `Adar II` becomes `AdarII`),
/// except that a dropped character after a capital folds the rest of the word
/// into it (`B'Av` becomes `Bav`). An all-capitals label such as
/// `SOLAR_EVENT` is cased word by word.
pub fn to_identifier_case(text: &str) -> String {
    let cleaned: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || is_separator(*c))
        .collect();
    if !cleaned.chars().any(char::is_lowercase) {
        return cleaned.to_case(Case::Pascal);
    }

    text.split(is_separator)
        .map(fold_word)
        .filter(|word| !word.is_empty())
        .map(|word| capitalize(&word))
        .collect()
}

/// Drop non-identifier characters from a single word, lowercasing whatever
/// follows one that came right after an uppercase letter.
fn fold_word(word: &str) -> String {
    let mut folded = String::with_capacity(word.len());
    let mut lower_rest = false;
    let mut prev_upper = false;
    for c in word.chars() {
        if !c.is_alphanumeric() {
            lower_rest |= prev_upper;
            continue;
        }
        prev_upper = c.is_uppercase();
        if lower_rest {
            folded.extend(c.to_lowercase());
        } else {
            folded.push(c);
        }
    }
    folded
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// True when `ident` can be emitted as a Rust identifier as-is.
pub fn is_valid_identifier(ident: &str) -> bool {
    let mut chars = ident.chars();
    match chars.next() {
        Some(first) if first.is_alphabetic() || first == '_' => {
            chars.all(|c| c.is_alphanumeric() || c == '_')
        }
        _ => false,
    }
}
