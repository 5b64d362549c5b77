//! Application services
//!
//! Services depend on I/O boundary traits (HttpTransport, ConfigProvider)
//! but are themselves concrete structs, not traits.

pub mod endpoints;
mod executor;

pub use endpoints::{DeploymentFilter, EventOptions};
pub use executor::{join_url, RequestExecutor};
