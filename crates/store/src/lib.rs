//! In-memory key-value storage core.
//! - Generic over key and value types; the server deploys `KvStore<String, String>`.
//! - A single reader-writer lock guards the whole map.
//! - Provides clear error types and a trait seam for alternative backends.

pub mod errors;
pub mod kv_store;
pub mod storer;

pub use errors::StoreError;
pub use kv_store::KvStore;
pub use storer::Storer;
