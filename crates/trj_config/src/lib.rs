//! Environment-variable configuration for the windtrace trajectory tools.
//!
//! Both the integrator and the aggregator are single-shot batch programs:
//! configuration is read once from the process environment at startup and
//! never touched again, so each tool builds one value here in `main()`
//! and threads it through by reference.

mod density;
mod env;
mod error;
mod trace;

pub use density::DensityConfig;
pub use error::ConfigError;
pub use trace::TraceConfig;
