//! CLI subcommand modules.
//!
//! This module contains the implementations for all crossings CLI subcommands.

pub(crate) mod clean;
pub(crate) mod study;
