//! Configuration data models
//!
//! This module defines the configuration structures of the standalone server.

pub mod health;
pub mod probe;
pub mod server;

// Re-export all configuration types
pub use health::*;
pub use probe::*;
pub use server::*;

/// Default server host
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    8000
}

/// Default route prefix for probes
pub fn default_prefix() -> String {
    "/health".to_string()
}

/// Default status for healthy probes (204 No Content)
pub fn default_success_status() -> u16 {
    204
}

/// Default status for unhealthy probes (503 Service Unavailable)
pub fn default_failure_status() -> u16 {
    503
}

/// Default check timeout in seconds
pub fn default_check_timeout() -> f64 {
    5.0
}

/// Default for boolean flags that are on unless disabled
pub fn default_true() -> bool {
    true
}
