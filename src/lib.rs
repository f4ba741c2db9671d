//! Shared library for `coursereqs`
//! Contains the requirement extraction engine used by the CLI

pub mod core;
pub mod logger;

pub use core::config;
pub use core::get_version;
