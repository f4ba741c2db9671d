//! Core module: requirement extraction, cross-referencing and record I/O

pub mod config;
pub mod crossref;
pub mod io;
pub mod models;
pub mod parser;

/// Returns the current version of the `coursereqs` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
