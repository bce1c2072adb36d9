//! Store-level query building blocks shared by services and repositories.

use mongodb::bson::{doc, Document, Regex};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Sort direction for listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    /// Parse `asc` / `desc`, ignoring case.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }

    /// MongoDB sort direction.
    pub fn direction(&self) -> i32 {
        match self {
            SortOrder::Asc => 1,
            SortOrder::Desc => -1,
        }
    }
}

/// Case-insensitive substring match on a single field.
///
/// The pattern is always regex-escaped, so caller input is matched literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterCondition {
    pub field: String,
    pub pattern: String,
}

impl FilterCondition {
    /// Build a substring condition, or `None` when the value is blank.
    pub fn contains(field: &str, value: &str) -> Option<Self> {
        let value = value.trim();
        if value.is_empty() {
            return None;
        }
        Some(Self {
            field: field.to_string(),
            pattern: regex::escape(value),
        })
    }

    pub fn to_regex(&self) -> Regex {
        Regex {
            pattern: self.pattern.clone(),
            options: "i".to_string(),
        }
    }
}

/// Combine conditions into a single MongoDB filter document (logical AND).
pub fn filter_document(conditions: &[FilterCondition]) -> Document {
    let mut filter = doc! {};
    for condition in conditions {
        filter.insert(
            condition.field.clone(),
            doc! { "$regex": condition.to_regex() },
        );
    }
    filter
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub field: String,
    pub order: SortOrder,
}

impl SortSpec {
    pub fn to_document(&self) -> Document {
        let mut sort = doc! {};
        sort.insert(self.field.clone(), self.order.direction());
        sort
    }
}

/// Everything a store needs to run one find.
#[derive(Debug, Clone, Default)]
pub struct FindQuery {
    pub filters: Vec<FilterCondition>,
    pub sort: Option<SortSpec>,
    pub skip: u64,
    pub limit: Option<u64>,
}
