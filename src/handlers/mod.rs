mod freshness;
mod not_found;
mod usage;

pub use freshness::freshness;
pub use not_found::not_found;
pub use usage::usage;
