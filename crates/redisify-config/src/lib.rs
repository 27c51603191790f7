//! # Redisify Config
//!
//! Configuration types for redisify.
//!
//! This crate provides:
//!
//! - [`environment`]: an immutable snapshot of the process environment
//! - [`settings`]: resolution settings loaded from environment variables
//!
//! # Example
//!
//! ```ignore
//! use redisify_config::{Environment, RedisifySettings};
//!
//! let env = Environment::capture();
//! let settings = RedisifySettings::from_environment(&env)
//!     .with_fallback_url("redis://localhost");
//! ```

pub mod environment;
pub mod settings;

// Re-export commonly used types at crate root
pub use environment::Environment;
pub use settings::{
    DEFAULT_BACKEND, DEFAULT_PARSER_CLASS, DEFAULT_REDIS_PORT, RedisifySettings, SETTINGS_PREFIX,
};
