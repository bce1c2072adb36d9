//! MongoDB-backed document store.

use async_trait::async_trait;
use futures::TryStreamExt;
use log::{debug, info};
use mongodb::bson::{doc, Document};
use mongodb::{Collection, Database};

use crate::errors::ApiError;
use crate::models::{filter_document, FilterCondition, FindQuery};
use crate::repositories::DocumentStore;

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    pub fn new(db: &Database) -> Self {
        Self { db: db.clone() }
    }

    fn collection(&self, name: &str) -> Collection<Document> {
        self.db.collection(name)
    }

    /// Round-trip to the server; used once at startup.
    pub async fn ping(&self) -> Result<(), ApiError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        info!("MongoDB database '{}' is reachable", self.db.name());
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    async fn count(
        &self,
        collection: &str,
        filters: &[FilterCondition],
    ) -> Result<u64, ApiError> {
        let filter = filter_document(filters);
        debug!("Repository: Counting '{}' with filter: {:?}", collection, filter);
        Ok(self.collection(collection).count_documents(filter).await?)
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, ApiError> {
        let filter = filter_document(&query.filters);
        debug!(
            "Repository: Finding '{}' with filter: {:?}, sort: {:?}, skip: {}, limit: {:?}",
            collection, filter, query.sort, query.skip, query.limit
        );

        let coll = self.collection(collection);
        let mut find = coll.find(filter).skip(query.skip);
        if let Some(sort) = &query.sort {
            find = find.sort(sort.to_document());
        }
        if let Some(limit) = query.limit {
            find = find.limit(i64::try_from(limit).unwrap_or(i64::MAX));
        }

        let cursor = find.await?;
        Ok(cursor.try_collect().await?)
    }
}
