mod sqlite;

pub use sqlite::{CacheKey, CacheManager};
