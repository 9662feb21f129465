use serde::{Deserialize, Serialize};

use crate::models::CollectionRef;

/// A failure attributable to a single collection, e.g. one sync or one cache
/// deletion that went wrong while the rest of the pass continued.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("{bucket}/{collection}: {message}")]
pub struct CollectionError {
    pub bucket: String,
    pub collection: String,
    pub message: String,
}

impl CollectionError {
    pub fn new(collection: &CollectionRef, message: impl Into<String>) -> Self {
        Self {
            bucket: collection.bucket.clone(),
            collection: collection.collection.clone(),
            message: message.into(),
        }
    }

    pub fn collection_ref(&self) -> CollectionRef {
        CollectionRef::new(&*self.bucket, &*self.collection)
    }
}
