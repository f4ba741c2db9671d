//! CLI command handlers for `coursereqs`.
//!
//! Each command is implemented in its own submodule.

pub mod extract;
