//! Page request: the typed form of a listing endpoint's raw query string.

use std::collections::HashMap;

use log::warn;
use validator::Validate;

use crate::constants::{
    DEFAULT_PAGE_NUMBER, ERR_PAGE_OUT_OF_RANGE, MAX_PAGE_SIZE, QUERY_KEY_LIMIT, QUERY_KEY_ORDER,
    QUERY_KEY_PAGE, QUERY_KEY_SORT,
};
use crate::errors::ApiError;
use crate::models::{FilterCondition, FindQuery, ListingProfile, SortOrder, SortSpec};
use crate::utils::sanitize_for_log;
use crate::validators::{
    parse_positive, validate_page_number, validate_page_size, validate_sort_order,
    validation_messages,
};

/// Reserved pagination keys, still as the caller sent them.
#[derive(Debug, Validate)]
struct PageParams {
    #[validate(custom(function = "validate_page_number"))]
    page: Option<String>,
    #[validate(custom(function = "validate_page_size"))]
    limit: Option<String>,
    sort: Option<String>,
    #[validate(custom(function = "validate_sort_order"))]
    order: Option<String>,
}

impl PageParams {
    /// Remove the reserved keys from `raw`, leaving only filter conditions behind.
    fn extract(raw: &mut HashMap<String, String>) -> Self {
        Self {
            page: raw.remove(QUERY_KEY_PAGE),
            limit: raw.remove(QUERY_KEY_LIMIT),
            sort: raw.remove(QUERY_KEY_SORT),
            order: raw.remove(QUERY_KEY_ORDER),
        }
    }
}

#[derive(Debug, Clone)]
pub struct PageRequest {
    /// One-based page number, always >= 1.
    pub page: u64,
    /// Page size, always within 1..=MAX_PAGE_SIZE.
    pub limit: u64,
    pub sort: SortSpec,
    pub filters: Vec<FilterCondition>,
    skip: u64,
}

impl PageRequest {
    /// Resolve a raw query string against a listing profile.
    ///
    /// Every problem is collected and reported in one validation error:
    /// malformed `page`/`limit`/`order`, and sort or filter fields the
    /// profile does not allow.
    pub fn from_query(
        profile: &ListingProfile,
        mut raw: HashMap<String, String>,
    ) -> Result<Self, ApiError> {
        let params = PageParams::extract(&mut raw);

        let mut errors = match params.validate() {
            Ok(()) => Vec::new(),
            Err(e) => validation_messages(&e),
        };

        let sort_field = params
            .sort
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .unwrap_or(profile.default_sort);
        if !profile.is_sortable(sort_field) {
            errors.push(format!("'{}' is not a sortable field", sort_field));
        }

        // Sorted so the resulting store filter and error list are deterministic.
        let mut keys: Vec<&String> = raw.keys().collect();
        keys.sort();

        let mut filters = Vec::new();
        for key in keys {
            if !profile.is_filterable(key) {
                errors.push(format!("'{}' is not a filterable field", key));
                continue;
            }
            if let Some(condition) = FilterCondition::contains(key, &raw[key]) {
                filters.push(condition);
            }
        }

        if !errors.is_empty() {
            warn!(
                "Rejected query on '{}': {}",
                profile.collection,
                sanitize_for_log(&errors.join("; "))
            );
            return Err(ApiError::validation(errors));
        }

        let page = params
            .page
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(DEFAULT_PAGE_NUMBER);
        let limit = params
            .limit
            .as_deref()
            .and_then(parse_positive)
            .unwrap_or(profile.default_limit)
            .min(MAX_PAGE_SIZE);

        // The store takes the offset as a signed 64-bit integer.
        let skip = match (page - 1)
            .checked_mul(limit)
            .filter(|skip| i64::try_from(*skip).is_ok())
        {
            Some(skip) => skip,
            None => {
                warn!(
                    "Rejected query on '{}': page {} with limit {} is out of range",
                    profile.collection, page, limit
                );
                return Err(ApiError::validation(vec![
                    ERR_PAGE_OUT_OF_RANGE.to_string()
                ]));
            }
        };

        let order = params
            .order
            .as_deref()
            .and_then(SortOrder::parse)
            .unwrap_or(profile.default_order);

        Ok(Self {
            page,
            limit,
            sort: SortSpec {
                field: sort_field.to_string(),
                order,
            },
            filters,
            skip,
        })
    }

    /// Number of matching records that precede this page.
    pub fn skip(&self) -> u64 {
        self.skip
    }

    pub fn find_query(&self) -> FindQuery {
        FindQuery {
            filters: self.filters.clone(),
            sort: Some(self.sort.clone()),
            skip: self.skip(),
            limit: Some(self.limit),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{ERR_INVALID_LIMIT, ERR_INVALID_ORDER, ERR_INVALID_PAGE};
    use crate::models::listing::{BLOGS, CARRIERS, CITIES, COUNTRIES};

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn validation_errors(result: Result<PageRequest, ApiError>) -> Vec<String> {
        match result {
            Err(ApiError::ValidationError { errors, .. }) => errors,
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_defaults_follow_profile() {
        let req = PageRequest::from_query(&CARRIERS, HashMap::new()).unwrap();
        assert_eq!(req.page, 1);
        assert_eq!(req.limit, 10);
        assert_eq!(req.sort.field, "dotNumber");
        assert_eq!(req.sort.order, SortOrder::Asc);
        assert!(req.filters.is_empty());
        assert_eq!(req.skip(), 0);

        let req = PageRequest::from_query(&COUNTRIES, HashMap::new()).unwrap();
        assert_eq!(req.limit, 100);
        assert_eq!(req.sort.field, "name");

        let req = PageRequest::from_query(&BLOGS, HashMap::new()).unwrap();
        assert_eq!(req.sort.field, "publishedAt");
        assert_eq!(req.sort.order, SortOrder::Desc);
    }

    #[test]
    fn test_reserved_keys_are_not_filters() {
        let req = PageRequest::from_query(
            &CITIES,
            query(&[
                ("page", "3"),
                ("limit", "20"),
                ("sort", "state_name"),
                ("order", "DESC"),
                ("name", "bos"),
            ]),
        )
        .unwrap();
        assert_eq!(req.page, 3);
        assert_eq!(req.limit, 20);
        assert_eq!(req.skip(), 40);
        assert_eq!(req.sort.field, "state_name");
        assert_eq!(req.sort.order, SortOrder::Desc);
        assert_eq!(req.filters.len(), 1);
        assert_eq!(req.filters[0].field, "name");
    }

    #[test]
    fn test_non_positive_page_is_rejected() {
        for bad in ["0", "-1", "abc", ""] {
            let errors =
                validation_errors(PageRequest::from_query(&CITIES, query(&[("page", bad)])));
            assert_eq!(errors, vec![ERR_INVALID_PAGE.to_string()], "page={bad:?}");
        }
    }

    #[test]
    fn test_page_beyond_addressable_range_is_rejected() {
        for page in ["18446744073709551615", "100000000000000000"] {
            let errors = validation_errors(PageRequest::from_query(
                &CARRIERS,
                query(&[("page", page), ("limit", "100")]),
            ));
            assert_eq!(errors, vec![ERR_PAGE_OUT_OF_RANGE.to_string()], "page={page}");
        }
    }

    #[test]
    fn test_largest_addressable_page_is_accepted() {
        // (page - 1) * 100 stays just under i64::MAX
        let page = (i64::MAX as u64 / 100 + 1).to_string();
        let req =
            PageRequest::from_query(&CARRIERS, query(&[("page", page.as_str()), ("limit", "100")]))
                .unwrap();
        assert!(req.skip() <= i64::MAX as u64);
        assert_eq!(req.skip(), (req.page - 1) * 100);
    }

    #[test]
    fn test_malformed_limit_is_rejected() {
        for bad in ["0", "abc", "-5"] {
            let errors =
                validation_errors(PageRequest::from_query(&CITIES, query(&[("limit", bad)])));
            assert_eq!(errors, vec![ERR_INVALID_LIMIT.to_string()], "limit={bad:?}");
        }
    }

    #[test]
    fn test_oversized_limit_is_clamped() {
        let req = PageRequest::from_query(&CITIES, query(&[("limit", "1000")])).unwrap();
        assert_eq!(req.limit, MAX_PAGE_SIZE);
    }

    #[test]
    fn test_unknown_order_is_rejected() {
        let errors =
            validation_errors(PageRequest::from_query(&CITIES, query(&[("order", "up")])));
        assert_eq!(errors, vec![ERR_INVALID_ORDER.to_string()]);
    }

    #[test]
    fn test_fields_outside_allow_list_are_rejected() {
        let errors = validation_errors(PageRequest::from_query(
            &CARRIERS,
            query(&[("password", "x"), ("sort", "user"), ("phyCity", "bos")]),
        ));
        assert_eq!(
            errors,
            vec![
                "'user' is not a sortable field".to_string(),
                "'password' is not a filterable field".to_string(),
            ]
        );
    }

    #[test]
    fn test_all_problems_reported_together() {
        let errors = validation_errors(PageRequest::from_query(
            &CITIES,
            query(&[("page", "0"), ("limit", "x"), ("bogus", "1")]),
        ));
        assert_eq!(errors.len(), 3);
        assert!(errors.contains(&ERR_INVALID_PAGE.to_string()));
        assert!(errors.contains(&ERR_INVALID_LIMIT.to_string()));
        assert!(errors.contains(&"'bogus' is not a filterable field".to_string()));
    }

    #[test]
    fn test_blank_filter_values_are_dropped() {
        let req = PageRequest::from_query(&CITIES, query(&[("name", "  ")])).unwrap();
        assert!(req.filters.is_empty());
    }

    #[test]
    fn test_find_query_carries_window() {
        let req =
            PageRequest::from_query(&CITIES, query(&[("page", "2"), ("limit", "5")])).unwrap();
        let find = req.find_query();
        assert_eq!(find.skip, 5);
        assert_eq!(find.limit, Some(5));
        assert_eq!(find.sort, Some(req.sort.clone()));
    }
}
