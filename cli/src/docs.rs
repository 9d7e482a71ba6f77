use lazy_static::lazy_static;
use regex::Regex;
use std::fs;

const MAX_DOC_WORDS: usize = 1000;

lazy_static! {
    static ref DOC_WORD: Regex = Regex::new(r"^[a-z]{1,100}$").expect("valid regex");
}

/// Read every configured file into a document slot.
///
/// A placeholder slot, an unreadable file, or a file failing validation
/// becomes an empty string, keeping positions (and so document ids)
/// stable. Never fails.
pub fn load_documents(file_names: &[Option<&str>]) -> Vec<String> {
    file_names
        .iter()
        .map(|name| match name {
            Some(name) => read_document(name),
            None => String::new(),
        })
        .collect()
}

fn read_document(name: &str) -> String {
    let content = match fs::read_to_string(name) {
        Ok(content) => content,
        Err(err) => {
            tracing::warn!(file = name, %err, "failed to open file, skipping");
            return String::new();
        }
    };
    let words: Vec<&str> = content.split_whitespace().collect();
    if words.len() > MAX_DOC_WORDS {
        tracing::warn!(
            file = name,
            words = words.len(),
            limit = MAX_DOC_WORDS,
            "file exceeds word limit, skipping"
        );
        return String::new();
    }
    if let Some(bad) = words.iter().find(|w| !DOC_WORD.is_match(w)) {
        tracing::warn!(file = name, word = *bad, "file contains invalid words, skipping");
        return String::new();
    }
    content
}
