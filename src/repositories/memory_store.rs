//! In-memory document store with the same matching and ordering rules as MongoStore.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};

use async_trait::async_trait;
use mongodb::bson::{Bson, Document};
use regex::RegexBuilder;
use tokio::sync::RwLock;

use crate::errors::ApiError;
use crate::models::{FilterCondition, FindQuery, SortOrder};
use crate::repositories::DocumentStore;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
    failing: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert_many(&self, collection: &str, docs: Vec<Document>) {
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .extend(docs);
    }

    /// Make every subsequent call fail as if the server were unreachable.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, AtomicOrdering::SeqCst);
    }

    fn check_available(&self) -> Result<(), ApiError> {
        if self.failing.load(AtomicOrdering::SeqCst) {
            return Err(ApiError::internal("memory store is failing"));
        }
        Ok(())
    }

    async fn matching(
        &self,
        collection: &str,
        filters: &[FilterCondition],
    ) -> Result<Vec<Document>, ApiError> {
        let mut compiled = Vec::with_capacity(filters.len());
        for condition in filters {
            let regex = RegexBuilder::new(&condition.pattern)
                .case_insensitive(true)
                .build()
                .map_err(ApiError::internal)?;
            compiled.push((condition.field.as_str(), regex));
        }

        let collections = self.collections.read().await;
        let docs = collections.get(collection).map(Vec::as_slice).unwrap_or(&[]);
        Ok(docs
            .iter()
            .filter(|doc| {
                compiled.iter().all(|(field, regex)| match doc.get(*field) {
                    Some(Bson::String(value)) => regex.is_match(value),
                    // A regex matches an array when any string element matches
                    Some(Bson::Array(items)) => items
                        .iter()
                        .any(|item| matches!(item, Bson::String(s) if regex.is_match(s))),
                    _ => false,
                })
            })
            .cloned()
            .collect())
    }
}

/// Rank of a BSON type in MongoDB's cross-type sort order (subset we store).
fn type_rank(value: Option<&Bson>) -> u8 {
    match value {
        None | Some(Bson::Null) => 0,
        Some(Bson::Int32(_)) | Some(Bson::Int64(_)) | Some(Bson::Double(_)) => 1,
        Some(Bson::String(_)) => 2,
        Some(Bson::Boolean(_)) => 3,
        Some(Bson::DateTime(_)) => 4,
        Some(_) => 5,
    }
}

fn as_f64(value: &Bson) -> Option<f64> {
    match value {
        Bson::Int32(n) => Some(f64::from(*n)),
        Bson::Int64(n) => Some(*n as f64),
        Bson::Double(n) => Some(*n),
        _ => None,
    }
}

fn compare_values(a: Option<&Bson>, b: Option<&Bson>) -> Ordering {
    let rank = type_rank(a).cmp(&type_rank(b));
    if rank != Ordering::Equal {
        return rank;
    }
    match (a, b) {
        (Some(Bson::String(x)), Some(Bson::String(y))) => x.cmp(y),
        (Some(Bson::Boolean(x)), Some(Bson::Boolean(y))) => x.cmp(y),
        (Some(Bson::DateTime(x)), Some(Bson::DateTime(y))) => x.cmp(y),
        (Some(x), Some(y)) => match (as_f64(x), as_f64(y)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            _ => Ordering::Equal,
        },
        _ => Ordering::Equal,
    }
}

#[async_trait]
impl DocumentStore for MemoryStore {
    async fn count(
        &self,
        collection: &str,
        filters: &[FilterCondition],
    ) -> Result<u64, ApiError> {
        self.check_available()?;
        Ok(self.matching(collection, filters).await?.len() as u64)
    }

    async fn find(&self, collection: &str, query: &FindQuery) -> Result<Vec<Document>, ApiError> {
        self.check_available()?;
        let mut docs = self.matching(collection, &query.filters).await?;

        // sort_by is stable, so ties keep insertion order in both directions
        if let Some(sort) = &query.sort {
            docs.sort_by(|a, b| {
                let ordering = compare_values(a.get(&sort.field), b.get(&sort.field));
                match sort.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        let skip = usize::try_from(query.skip).unwrap_or(usize::MAX);
        let take = query
            .limit
            .map(|limit| usize::try_from(limit).unwrap_or(usize::MAX))
            .unwrap_or(usize::MAX);
        Ok(docs.into_iter().skip(skip).take(take).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SortSpec;
    use mongodb::bson::doc;

    async fn seeded() -> MemoryStore {
        let store = MemoryStore::new();
        store
            .insert_many(
                "cities",
                vec![
                    doc! { "name": "Boston", "population": 650_000 },
                    doc! { "name": "albany", "population": 99_000 },
                    doc! { "name": "Chicago", "population": 2_700_000 },
                    doc! { "population": 10 },
                ],
            )
            .await;
        store
    }

    #[actix_web::test]
    async fn test_regex_match_is_case_insensitive() {
        let store = seeded().await;
        let filters = vec![FilterCondition::contains("name", "BOS").unwrap()];
        assert_eq!(store.count("cities", &filters).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_missing_field_sorts_first() {
        let store = seeded().await;
        let query = FindQuery {
            sort: Some(SortSpec {
                field: "name".to_string(),
                order: SortOrder::Asc,
            }),
            ..Default::default()
        };
        let docs = store.find("cities", &query).await.unwrap();
        assert!(docs[0].get("name").is_none());
        assert_eq!(docs[1].get_str("name").unwrap(), "Boston");
    }

    #[actix_web::test]
    async fn test_array_fields_match_any_element() {
        let store = MemoryStore::new();
        store
            .insert_many("blogs", vec![doc! { "tags": ["Freight", "Safety"] }])
            .await;
        let filters = vec![FilterCondition::contains("tags", "safe").unwrap()];
        assert_eq!(store.count("blogs", &filters).await.unwrap(), 1);
    }

    #[actix_web::test]
    async fn test_unknown_collection_is_empty() {
        let store = MemoryStore::new();
        assert_eq!(store.count("nothing", &[]).await.unwrap(), 0);
    }

    #[actix_web::test]
    async fn test_failing_store_errors() {
        let store = seeded().await;
        store.set_failing(true);
        assert!(store.count("cities", &[]).await.is_err());
        assert!(store.find("cities", &FindQuery::default()).await.is_err());
    }
}
