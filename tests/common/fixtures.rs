//! Test fixtures for integration tests.

#![allow(dead_code)]

use mongodb::bson::{Document, doc};

/// Three single-field user documents, the smallest interesting collection.
pub fn users_abc() -> Vec<Document> {
    vec![doc! { "name": "a" }, doc! { "name": "b" }, doc! { "name": "c" }]
}

/// Generate a batch of uniform test documents.
pub fn generate_documents(count: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            doc! {
                "index": i as i32,
                "name": format!("Document {}", i),
                "category": if i % 2 == 0 { "even" } else { "odd" },
            }
        })
        .collect()
}

/// Documents whose shape changes partway through: every document carries
/// `index`, and documents from `extra_from` on also carry `rare`.
pub fn staggered_documents(count: usize, extra_from: usize) -> Vec<Document> {
    (0..count)
        .map(|i| {
            if i >= extra_from {
                doc! { "index": i as i32, "rare": true }
            } else {
                doc! { "index": i as i32 }
            }
        })
        .collect()
}
