use anyhow::{bail, Context, Result};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;
use std::fs;
use std::path::Path;

const MAX_REQUESTS: usize = 1000;
const MAX_REQUEST_WORDS: usize = 10;

lazy_static! {
    static ref REQUEST_WORD: Regex = Regex::new(r"^[a-z]+$").expect("valid regex");
}

#[derive(Debug, Deserialize)]
struct RequestsFile {
    requests: Vec<String>,
}

/// Load and validate `requests.json`. Unlike document loading, a bad
/// request is a hard error, not a placeholder.
pub fn load_requests(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("{} is missing or cannot be opened", path.display()))?;
    let parsed: RequestsFile = serde_json::from_str(&raw)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    if parsed.requests.len() > MAX_REQUESTS {
        bail!("requests file contains more than {} requests", MAX_REQUESTS);
    }
    for request in &parsed.requests {
        let words: Vec<&str> = request.split_whitespace().collect();
        if words.is_empty() || words.len() > MAX_REQUEST_WORDS {
            bail!(
                "each request must contain from 1 to {} words",
                MAX_REQUEST_WORDS
            );
        }
        if let Some(bad) = words.iter().find(|w| !REQUEST_WORD.is_match(w)) {
            bail!("word '{}' contains invalid characters", bad);
        }
    }
    Ok(parsed.requests)
}
