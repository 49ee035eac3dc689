//! Health check capability and the bundled check adapters
//!
//! The probe engine only consumes the [`HealthCheck`] trait. Each adapter
//! here performs one trivial operation against a backend, enforces its own
//! timeout and reports backend failures as an unhealthy result.

mod function;
#[cfg(feature = "postgres")]
mod postgres;
#[cfg(feature = "redis")]
mod redis;
mod tcp;
mod types;
#[cfg(feature = "http")]
mod url;


pub use function::FunctionHealthCheck;
#[cfg(feature = "postgres")]
pub use postgres::PostgresHealthCheck;
#[cfg(feature = "redis")]
pub use redis::RedisHealthCheck;
pub use tcp::TcpHealthCheck;
pub use types::{BoxError, Check, CheckError, DEFAULT_HC_TIMEOUT, HealthCheck};
#[cfg(feature = "http")]
pub use url::UrlHealthCheck;
