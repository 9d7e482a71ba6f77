pub mod answers;
pub mod config;
pub mod docs;
pub mod requests;

use anyhow::Result;
use sift_core::{InvertedIndex, SearchServer};
use std::path::Path;

/// Run one batch: load config and documents, rebuild the index, answer
/// every request, write the answers file.
pub fn run(config_path: &Path, requests_path: &Path, answers_path: &Path) -> Result<()> {
    let cfg = config::ConfigFile::load(config_path)?;
    tracing::info!(name = cfg.name(), version = cfg.version(), "starting");

    let documents = docs::load_documents(&cfg.file_names());
    let mut index = InvertedIndex::new();
    index.rebuild(documents);

    let queries = requests::load_requests(requests_path)?;
    let server = SearchServer::new(&index);
    let results = server.search(&queries, cfg.max_responses());
    answers::write_answers(answers_path, &results)?;

    tracing::info!(requests = queries.len(), "completed successfully");
    Ok(())
}
