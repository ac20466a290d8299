mod backend;
mod in_memory;
mod s3;

pub use backend::{ObjectPage, ObjectStore, StoreError};
pub use in_memory::InMemoryStore;
pub use s3::S3Store;
