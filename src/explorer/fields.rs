//! Field-name inference from sampled documents.

use std::collections::BTreeSet;

use futures::TryStreamExt;
use mongodb::bson::Document;

use crate::error::Result;
use crate::explorer::Explorer;

impl Explorer {
    /// Infer the field names used in a collection (runs in Tokio runtime).
    ///
    /// Scans the first `sample_size` documents and returns the sorted union
    /// of their top-level keys. Collections larger than the cap may have
    /// fields the sample never saw; those are silently omitted. An empty or
    /// missing collection yields an empty list.
    pub fn field_names(&self, collection: &str) -> Result<Vec<String>> {
        let coll = self.collection(collection);
        let sample_size = self.sample_size();

        let sample_docs = self.runtime.block_on(async {
            let mut options = mongodb::options::FindOptions::default();
            options.limit = Some(sample_size as i64);

            let cursor = coll.find(Document::new()).with_options(options).await?;
            let documents: Vec<Document> = cursor.try_collect().await?;

            Ok::<_, mongodb::error::Error>(documents)
        })?;

        log::debug!("sampled {} documents from {collection}", sample_docs.len());

        Ok(field_union(&sample_docs))
    }
}

/// Sorted union of top-level keys across a set of documents.
pub fn field_union(docs: &[Document]) -> Vec<String> {
    let mut fields: BTreeSet<String> = BTreeSet::new();
    for doc in docs {
        for key in doc.keys() {
            fields.insert(key.clone());
        }
    }
    fields.into_iter().collect()
}
