//! Console reporting built on the explorer's read operations.
//!
//! Formatting only: every function takes the documents the explorer hands
//! back and writes human-readable text to the given sink. Nothing here is a
//! stable machine-readable format.

use std::io::Write;

use mongodb::bson::{Bson, Document};

use crate::error::Result;
use crate::explorer::Explorer;

/// Default number of documents printed when dumping a collection.
pub const DEFAULT_DUMP_LIMIT: u64 = 10;

/// Default number of documents printed for a query.
pub const DEFAULT_QUERY_LIMIT: u64 = 5;

/// Print an overview of the whole database: collection count, then each
/// collection's document count, field names, and one sample document.
pub fn database_overview(explorer: &Explorer, out: &mut impl Write) -> Result<()> {
    let collections = explorer.list_collections()?;

    writeln!(out, "=== Database: {} ===", explorer.database_name())?;
    writeln!(out, "Found {} collections", collections.len())?;

    for name in &collections {
        let stats = explorer.collection_stats(name)?;

        writeln!(out)?;
        writeln!(out, "--- Collection: {name} ---")?;
        writeln!(out, "Documents: {}", format_number(stats.document_count))?;

        if stats.fields.is_empty() {
            writeln!(out, "Fields: (none)")?;
        } else {
            writeln!(out, "Fields:")?;
            for field in &stats.fields {
                writeln!(out, "  - {field}")?;
            }
        }

        match &stats.sample_document {
            Some(doc) => {
                writeln!(out, "Sample document:")?;
                writeln!(out, "{}", document_to_pretty_json(doc))?;
            }
            None => writeln!(out, "Sample document: (empty collection)")?,
        }
    }

    Ok(())
}

/// Print one collection's statistics followed by up to `limit` documents.
pub fn collection_report(
    explorer: &Explorer,
    collection: &str,
    limit: u64,
    out: &mut impl Write,
) -> Result<()> {
    let stats = explorer.collection_stats(collection)?;

    writeln!(out, "--- Collection: {collection} ---")?;
    writeln!(out, "Documents: {}", format_number(stats.document_count))?;
    if !stats.fields.is_empty() {
        writeln!(out, "Fields: {}", stats.fields.join(", "))?;
    }

    if stats.is_empty() {
        return Ok(());
    }

    let documents = explorer.query(collection, None, limit)?;
    writeln!(out)?;
    writeln!(out, "Showing {} of {}:", documents.len(), format_number(stats.document_count))?;
    print_documents(&documents, out)?;

    Ok(())
}

/// Run a filtered query and print every match up to `limit`.
pub fn query_report(
    explorer: &Explorer,
    collection: &str,
    filter: Document,
    limit: u64,
    out: &mut impl Write,
) -> Result<()> {
    let documents = explorer.query(collection, Some(filter), limit)?;

    writeln!(out, "{} matching documents (limit {limit}):", documents.len())?;
    print_documents(&documents, out)?;

    Ok(())
}

fn print_documents(documents: &[Document], out: &mut impl Write) -> Result<()> {
    for doc in documents {
        writeln!(out, "{}", document_to_pretty_json(doc))?;
    }
    Ok(())
}

/// Convert a BSON document to a pretty-printed relaxed Extended JSON string.
fn document_to_pretty_json(doc: &Document) -> String {
    let value = Bson::Document(doc.clone()).into_relaxed_extjson();
    serde_json::to_string_pretty(&value).unwrap_or_else(|_| format!("{doc:?}"))
}

fn format_number(value: u64) -> String {
    let raw = value.to_string();
    let mut out = String::with_capacity(raw.len() + raw.len() / 3);
    for (index, ch) in raw.chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out.chars().rev().collect()
}
