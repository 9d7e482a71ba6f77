use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::json;
use sift_core::{DocId, SearchHit};
use std::fs;
use std::path::Path;

#[derive(Debug, Serialize)]
struct Relevance {
    docid: DocId,
    rank: f32,
}

/// Write one answer object per request to `path`, keyed `request001`,
/// `request002`, ... in request order. An empty result list serializes as
/// `{"result": "false"}`, a non-empty one carries the ranked relevance
/// array.
pub fn write_answers(path: &Path, answers: &[Vec<SearchHit>]) -> Result<()> {
    let mut entries = serde_json::Map::new();
    for (i, hits) in answers.iter().enumerate() {
        let key = format!("request{:03}", i + 1);
        let value = if hits.is_empty() {
            json!({ "result": "false" })
        } else {
            let relevance: Vec<Relevance> = hits
                .iter()
                .map(|hit| Relevance {
                    docid: hit.doc_id,
                    rank: hit.rank,
                })
                .collect();
            json!({ "result": "true", "relevance": relevance })
        };
        entries.insert(key, value);
    }
    let root = json!({ "answers": entries });
    fs::write(path, serde_json::to_string_pretty(&root)?)
        .with_context(|| format!("cannot write {}", path.display()))?;
    Ok(())
}
