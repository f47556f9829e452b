//! CLI argument parsing using clap.

use clap::Parser;
use mongodb::bson::{Bson, Document};

use crate::error::{Error, Result};
use crate::explorer::DEFAULT_SAMPLE_SIZE;

/// mongoscope - read-only MongoDB database explorer
#[derive(Parser, Debug)]
#[command(name = "mongoscope")]
#[command(about = "Inspect collections, fields, and documents in a MongoDB database", long_about = None)]
#[command(version)]
pub struct Args {
    /// Collection to inspect (prints a whole-database overview if omitted)
    #[arg(value_name = "COLLECTION")]
    pub collection: Option<String>,

    /// MongoDB connection string
    #[arg(short, long, default_value = "mongodb://localhost:27017", value_name = "URI")]
    pub uri: String,

    /// Database to explore
    #[arg(short, long, value_name = "NAME")]
    pub database: String,

    /// Filter document as JSON, passed through to the server unvalidated
    #[arg(short, long, value_name = "JSON", requires = "collection")]
    pub query: Option<String>,

    /// Maximum number of documents to print
    #[arg(short, long, value_name = "N")]
    pub limit: Option<u64>,

    /// Number of documents sampled for field inference
    #[arg(long, default_value_t = DEFAULT_SAMPLE_SIZE, value_name = "N")]
    pub sample_size: u64,
}

/// Parse a JSON string into a BSON filter document.
pub fn parse_query(input: &str) -> Result<Document> {
    let value: serde_json::Value = serde_json::from_str(input)?;
    let bson = Bson::try_from(value).map_err(|e| Error::Parse(e.to_string()))?;
    match bson {
        Bson::Document(doc) => Ok(doc),
        _ => Err(Error::Parse("query must be a JSON object".to_string())),
    }
}
