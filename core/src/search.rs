use crate::index::{DocId, InvertedIndex};
use crate::tokenizer::tokenize_query;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

/// Ranks closer than this count as tied and fall back to doc-id order.
pub const RANK_EPSILON: f32 = 1e-6;

/// One ranked document for one query. `rank` is the document's relevance
/// normalized by the best-matching document's, so it lies in (0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SearchHit {
    pub doc_id: DocId,
    pub rank: f32,
}

/// Answers query batches against a built index.
pub struct SearchServer<'a> {
    index: &'a InvertedIndex,
}

impl<'a> SearchServer<'a> {
    pub fn new(index: &'a InvertedIndex) -> Self {
        Self { index }
    }

    /// One ranked result list per query, in query order, each truncated to
    /// `max_responses` hits.
    pub fn search(&self, queries: &[String], max_responses: usize) -> Vec<Vec<SearchHit>> {
        queries
            .iter()
            .map(|query| {
                let mut hits = self.process_query(query);
                hits.truncate(max_responses);
                hits
            })
            .collect()
    }

    fn process_query(&self, query: &str) -> Vec<SearchHit> {
        let tokens = tokenize_query(query);
        if tokens.is_empty() {
            return Vec::new();
        }

        // Absolute relevance: occurrence counts summed over matching tokens.
        let mut relevance: HashMap<DocId, u32> = HashMap::new();
        for token in &tokens {
            for entry in self.index.postings(token) {
                *relevance.entry(entry.doc_id).or_insert(0) += entry.count;
            }
        }
        if relevance.is_empty() {
            return Vec::new();
        }

        let max_relevance = relevance.values().max().copied().unwrap_or(1) as f32;
        let mut hits: Vec<SearchHit> = relevance
            .into_iter()
            .map(|(doc_id, abs)| SearchHit {
                doc_id,
                rank: abs as f32 / max_relevance,
            })
            .collect();
        hits.sort_by(|a, b| {
            if (a.rank - b.rank).abs() < RANK_EPSILON {
                a.doc_id.cmp(&b.doc_id)
            } else {
                b.rank.partial_cmp(&a.rank).unwrap_or(Ordering::Equal)
            }
        });
        hits
    }
}
