//! Abbreviation expansion over free-form text.

use serde::{Deserialize, Serialize};

use crate::dictionary::SlangDictionary;

/// Outcome of translating one input string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub original: String,
    pub translated: String,
    pub translations_count: usize,
}

/// Strip every character outside `[A-Za-z0-9-_.]`.
pub fn clean_token(token: &str) -> String {
    token
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        .collect()
}

/// Expand known abbreviations in `text`.
///
/// The input is split on single spaces and rejoined with single spaces, so
/// runs of spaces survive as empty tokens. A token is replaced when its
/// cleaned, uppercased form is a dictionary key; otherwise the original
/// token (punctuation included) is kept. Expansions are not re-scanned.
pub fn translate(text: &str, dictionary: &SlangDictionary) -> Translation {
    if text.is_empty() {
        return Translation {
            original: String::new(),
            translated: String::new(),
            translations_count: 0,
        };
    }

    let mut count = 0;
    let words: Vec<&str> = text
        .split(' ')
        .map(|word| {
            let key = clean_token(word).to_ascii_uppercase();
            match dictionary.get_canonical(&key) {
                Some(expansion) => {
                    count += 1;
                    expansion
                }
                None => word,
            }
        })
        .collect();

    Translation {
        original: text.to_string(),
        translated: words.join(" "),
        translations_count: count,
    }
}
