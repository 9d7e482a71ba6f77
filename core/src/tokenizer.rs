use lazy_static::lazy_static;
use regex::Regex;
use std::collections::{HashMap, HashSet};

lazy_static! {
    static ref QUERY_TOKEN: Regex = Regex::new(r"[A-Za-z0-9]+").expect("valid regex");
}

/// Count whitespace-delimited tokens of a document text, case and
/// punctuation preserved verbatim.
pub fn tokenize_document(text: &str) -> HashMap<String, u32> {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for token in text.split_whitespace() {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

/// Distinct lower-cased alphanumeric runs of a query, in first-occurrence
/// order.
///
/// Queries are split more strictly than documents: the index keeps raw
/// whitespace tokens, while queries are reduced to lower-case alphanumeric
/// runs. Inputs are pre-validated to lower-case words upstream, so the two
/// rules agree on anything that can actually match. Kept asymmetric on
/// purpose; unifying them would change matching behavior.
pub fn tokenize_query(query: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut tokens = Vec::new();
    for m in QUERY_TOKEN.find_iter(query) {
        let token = m.as_str().to_lowercase();
        if seen.insert(token.clone()) {
            tokens.push(token);
        }
    }
    tokens
}
