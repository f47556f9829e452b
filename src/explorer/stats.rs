//! Per-collection statistics.

use crate::error::Result;
use crate::explorer::Explorer;
use crate::explorer::types::CollectionStats;

impl Explorer {
    /// Gather basic statistics about a collection: exact document count, one
    /// sample document, and the inferred field names.
    ///
    /// A collection that does not exist is reported as empty (count zero, no
    /// sample, no fields) rather than as an error.
    pub fn collection_stats(&self, collection: &str) -> Result<CollectionStats> {
        let document_count = self.document_count(collection)?;
        let sample_document = self.sample_document(collection)?;
        let fields = self.field_names(collection)?;

        Ok(CollectionStats { document_count, sample_document, fields })
    }
}
