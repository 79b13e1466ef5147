pub use crate::builder::CacheBuilder;
pub use crate::error::ConfigError;
pub use crate::lru::LruCache;
pub use crate::traits::Cache;
