//! Shared types for explorer operations.

use mongodb::bson::Document;
use serde::Serialize;

/// Default cap on the number of documents sampled for field inference.
pub const DEFAULT_SAMPLE_SIZE: u64 = 100;

/// Basic statistics about one collection.
#[derive(Clone, Debug, Serialize)]
pub struct CollectionStats {
    /// Exact document count.
    pub document_count: u64,
    /// One arbitrary document, or `None` when the collection is empty.
    pub sample_document: Option<Document>,
    /// Field names observed in a bounded sample, sorted ascending.
    /// A heuristic, not a schema: fields absent from the sample are omitted.
    pub fields: Vec<String>,
}

impl CollectionStats {
    /// True when the collection holds no documents (or does not exist).
    pub fn is_empty(&self) -> bool {
        self.document_count == 0
    }
}
