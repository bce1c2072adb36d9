//! Data models organized by type.

pub mod listing;
pub mod query;
pub mod requests;
pub mod responses;

pub use listing::ListingProfile;
pub use query::*;
pub use requests::*;
pub use responses::*;
