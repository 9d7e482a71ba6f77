use crate::tokenizer::tokenize_document;
use serde::Serialize;
use std::collections::HashMap;
use std::thread;

pub type DocId = u32;

/// One token's occurrence count in one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Entry {
    pub doc_id: DocId,
    pub count: u32,
}

/// Token to postings map over a fixed document collection.
///
/// Rebuilt wholesale from a full document list and read-only between
/// rebuilds, so lookups need no synchronization. A rebuild must not run
/// concurrently with lookups on the same instance.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    docs: Vec<String>,
    postings: HashMap<String, Vec<Entry>>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn doc_count(&self) -> usize {
        self.docs.len()
    }

    /// Replace the whole index with one built from `documents`.
    ///
    /// Ids are input positions, starting at 0. Each worker thread counts
    /// tokens for a disjoint range of documents into per-document maps;
    /// the merge into the shared postings table runs on the calling thread
    /// only after every worker has joined.
    pub fn rebuild(&mut self, documents: Vec<String>) {
        self.docs = documents;
        self.postings.clear();
        if self.docs.is_empty() {
            return;
        }

        let mut locals: Vec<HashMap<String, u32>> = vec![HashMap::new(); self.docs.len()];
        let workers = thread::available_parallelism()
            .map(|n| n.get())
            .unwrap_or(1)
            .min(self.docs.len());
        let chunk = self.docs.len().div_ceil(workers);
        thread::scope(|s| {
            for (texts, slots) in self.docs.chunks(chunk).zip(locals.chunks_mut(chunk)) {
                s.spawn(move || {
                    for (text, slot) in texts.iter().zip(slots.iter_mut()) {
                        *slot = tokenize_document(text);
                    }
                });
            }
        });

        for (doc_id, counts) in locals.into_iter().enumerate() {
            for (token, count) in counts {
                self.postings.entry(token).or_default().push(Entry {
                    doc_id: doc_id as DocId,
                    count,
                });
            }
        }
        tracing::debug!(
            docs = self.docs.len(),
            terms = self.postings.len(),
            "index rebuilt"
        );
    }

    /// Stored postings for `token`, or an empty slice for an unknown token.
    /// Entry order within the slice is whatever the merge produced.
    pub fn postings(&self, token: &str) -> &[Entry] {
        self.postings.get(token).map(Vec::as_slice).unwrap_or_default()
    }
}
