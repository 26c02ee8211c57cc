//! Small env-var parsing helpers shared by [`crate::TraceConfig`] and
//! [`crate::DensityConfig`].
//!
//! Per the external interface: an unset variable falls back to the
//! built-in default; a variable that is set but fails to parse as a
//! number falls back to the zero value of its type, not the default.

use std::env;
use std::str::FromStr;

pub(crate) fn num<T>(name: &str, default: T) -> T
where
    T: FromStr + Default,
{
    match env::var(name) {
        Ok(raw) => raw.trim().parse().unwrap_or_default(),
        Err(_) => default,
    }
}

pub(crate) fn text(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}
