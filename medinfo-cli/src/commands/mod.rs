//! Command implementations for the CLI.
//!
//! Each submodule contains the implementation of a specific command.

/// Module containing the `check` command, which looks for mediainfo.
pub mod check;
/// Module containing the `info` command, which prints the metadata record.
pub mod info;
/// Module containing the `is-media` command.
pub mod is_media;
