//! Input validators shared by request models.

pub mod common;
pub mod page;

pub use common::*;
pub use page::*;
