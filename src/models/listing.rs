//! Listing profiles: per-collection defaults and the fields callers may filter or sort on.

use crate::constants::{
    COLLECTION_BLOGS, COLLECTION_CARRIERS, COLLECTION_CITIES, COLLECTION_COUNTRIES,
    COLLECTION_STATES, DEFAULT_PAGE_SIZE, DEFAULT_REFERENCE_PAGE_SIZE,
};
use crate::models::SortOrder;

#[derive(Debug, Clone, Copy)]
pub struct ListingProfile {
    pub collection: &'static str,
    pub default_sort: &'static str,
    pub default_order: SortOrder,
    pub default_limit: u64,
    /// Fields accepted as substring filters. Every one of them is also sortable.
    pub filterable: &'static [&'static str],
    /// Sortable fields that are not filterable (dates, numbers).
    pub extra_sortable: &'static [&'static str],
}

impl ListingProfile {
    pub fn is_filterable(&self, field: &str) -> bool {
        self.filterable.contains(&field)
    }

    pub fn is_sortable(&self, field: &str) -> bool {
        field == self.default_sort
            || self.is_filterable(field)
            || self.extra_sortable.contains(&field)
    }
}

pub const COUNTRIES: ListingProfile = ListingProfile {
    collection: COLLECTION_COUNTRIES,
    default_sort: "name",
    default_order: SortOrder::Asc,
    default_limit: DEFAULT_REFERENCE_PAGE_SIZE,
    filterable: &["name", "iso2", "iso3", "capital", "region", "subregion"],
    extra_sortable: &[],
};

pub const STATES: ListingProfile = ListingProfile {
    collection: COLLECTION_STATES,
    default_sort: "name",
    default_order: SortOrder::Asc,
    default_limit: DEFAULT_REFERENCE_PAGE_SIZE,
    filterable: &["name", "state_code", "country_code", "country_name"],
    extra_sortable: &[],
};

pub const CITIES: ListingProfile = ListingProfile {
    collection: COLLECTION_CITIES,
    default_sort: "name",
    default_order: SortOrder::Asc,
    default_limit: DEFAULT_PAGE_SIZE,
    filterable: &[
        "name",
        "state_code",
        "state_name",
        "country_code",
        "country_name",
    ],
    extra_sortable: &[],
};

pub const CARRIERS: ListingProfile = ListingProfile {
    collection: COLLECTION_CARRIERS,
    default_sort: "dotNumber",
    default_order: SortOrder::Asc,
    default_limit: DEFAULT_PAGE_SIZE,
    filterable: &[
        "legalName",
        "dbaName",
        "dotNumber",
        "mcNumber",
        "phyCity",
        "phyState",
        "phyCountry",
    ],
    extra_sortable: &["createdAt"],
};

pub const BLOGS: ListingProfile = ListingProfile {
    collection: COLLECTION_BLOGS,
    default_sort: "publishedAt",
    default_order: SortOrder::Desc,
    default_limit: DEFAULT_PAGE_SIZE,
    filterable: &["title", "content", "tags"],
    extra_sortable: &["createdAt"],
};
