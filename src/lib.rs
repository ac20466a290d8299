// Library exports for integration tests
pub mod app_state;
pub mod duration;
pub mod handlers;
pub mod inspector;
pub mod server;
pub mod storage;
pub mod types;

// Re-export commonly used types
pub use app_state::AppState;
pub use inspector::BucketInspector;
pub use storage::{InMemoryStore, ObjectStore, S3Store};

// Re-export server creation function
pub use server::create_app;
