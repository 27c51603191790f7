//! Redisify Observability Module
//!
//! Provides console logging for the redisify binary.
//!
//! This module can be enabled or disabled at compile time via the `observability` feature flag.
//!
//! # Features
//!
//! - `observability` (default): Enables `tracing-subscriber` based console logging
//!
//! # Examples
//!
//! ```no_run
//! use redisify_observability::init_logging;
//!
//! init_logging();
//! ```

#[cfg(feature = "observability")]
pub mod basic_logging;

#[cfg(feature = "observability")]
pub use basic_logging::{LogFormat, init_logging};

// No-op stubs when observability is disabled
#[cfg(not(feature = "observability"))]
pub mod stubs {
    /// No-op logging initialization when feature disabled
    pub fn init_logging() {}
}

#[cfg(not(feature = "observability"))]
pub use stubs::*;
