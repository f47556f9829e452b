//! Document read operations for MongoDB collections.

use futures::TryStreamExt;
use mongodb::bson::{Document, doc};

use crate::error::Result;
use crate::explorer::Explorer;

impl Explorer {
    /// Query documents from a collection (runs in Tokio runtime).
    ///
    /// Returns up to `limit` documents matching `filter` (`None` matches
    /// everything), materialized into a `Vec`. A `limit` of zero returns an
    /// empty result without touching the server.
    pub fn query(
        &self,
        collection: &str,
        filter: Option<Document>,
        limit: u64,
    ) -> Result<Vec<Document>> {
        if limit == 0 {
            return Ok(Vec::new());
        }

        let coll = self.collection(collection);
        let filter = filter.unwrap_or_default();

        self.runtime.block_on(async {
            let mut options = mongodb::options::FindOptions::default();
            options.limit = Some(limit as i64);

            let cursor = coll.find(filter).with_options(options).await?;
            let documents: Vec<Document> = cursor.try_collect().await?;

            Ok(documents)
        })
    }

    /// Fetch one arbitrary document from a collection (runs in Tokio runtime).
    /// Returns `None` when the collection is empty or does not exist.
    pub fn sample_document(&self, collection: &str) -> Result<Option<Document>> {
        let coll = self.collection(collection);
        self.runtime.block_on(async {
            let document = coll.find_one(Document::new()).await?;
            Ok(document)
        })
    }

    /// Exact document count for a collection (runs in Tokio runtime).
    /// A missing collection counts as zero.
    pub fn document_count(&self, collection: &str) -> Result<u64> {
        let coll = self.collection(collection);
        self.runtime.block_on(async {
            let count = coll.count_documents(doc! {}).await?;
            Ok(count)
        })
    }
}
