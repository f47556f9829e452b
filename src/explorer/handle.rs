//! Core Explorer struct and connection lifecycle.

use mongodb::bson::{Document, doc};
use mongodb::{Client, Collection};
use tokio::runtime::Runtime;

use crate::error::Result;
use crate::explorer::types::DEFAULT_SAMPLE_SIZE;

/// A handle to one MongoDB database, held for the lifetime of the value.
///
/// Every operation is a synchronous, blocking read: the explorer owns a
/// private Tokio runtime and runs each driver call to completion on it.
/// Do not call these methods from inside another async runtime.
pub struct Explorer {
    /// Tokio runtime for MongoDB async operations
    pub(crate) runtime: Runtime,
    client: Client,
    database: String,
    sample_size: u64,
}

impl Explorer {
    /// Connect to a database and verify the connection with a ping.
    pub fn connect(uri: &str, database: &str) -> Result<Self> {
        Self::connect_with_sample_size(uri, database, DEFAULT_SAMPLE_SIZE)
    }

    /// Connect with a custom cap on the number of documents sampled for
    /// field inference.
    pub fn connect_with_sample_size(uri: &str, database: &str, sample_size: u64) -> Result<Self> {
        let runtime = Runtime::new().expect("Failed to create Tokio runtime");

        let client = runtime.block_on(async {
            let client = Client::with_uri_str(uri).await?;

            // Ping to verify connection
            client.database("admin").run_command(doc! { "ping": 1 }).await?;

            Ok::<_, mongodb::error::Error>(client)
        })?;

        log::debug!("connected to {database}");

        Ok(Self { runtime, client, database: database.to_string(), sample_size })
    }

    /// Name of the database this explorer is bound to.
    pub fn database_name(&self) -> &str {
        &self.database
    }

    /// Cap on the number of documents sampled for field inference.
    pub fn sample_size(&self) -> u64 {
        self.sample_size
    }

    /// List collection names, sorted case-insensitively (runs in Tokio runtime).
    /// An empty database yields an empty list.
    pub fn list_collections(&self) -> Result<Vec<String>> {
        let db = self.client.database(&self.database);
        self.runtime.block_on(async {
            let mut collections = db.list_collection_names().await?;
            collections.sort_unstable_by_key(|name| name.to_lowercase());
            Ok(collections)
        })
    }

    /// Resolve a collection lazily; the name is not validated for existence.
    pub(crate) fn collection(&self, name: &str) -> Collection<Document> {
        self.client.database(&self.database).collection::<Document>(name)
    }
}
