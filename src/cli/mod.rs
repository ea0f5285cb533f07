//! Command-line front end
//!
//! Console input, the subcommands of the `noughts` binary, and nothing the
//! game core depends on.

pub mod commands;
pub mod console;
