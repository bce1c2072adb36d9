//! Repository layer for database operations.
//!
//! Services talk to the database only through [`DocumentStore`], so they can be
//! exercised against [`MemoryStore`] in tests.

pub mod document_store;
#[cfg(test)]
pub mod memory_store;
pub mod mongo_store;

pub use document_store::DocumentStore;
#[cfg(test)]
pub use memory_store::MemoryStore;
pub use mongo_store::MongoStore;
