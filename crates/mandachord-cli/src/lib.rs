//! Mandachord CLI library.
//!
//! This crate provides the core functionality for the `mandachord` binary:
//! scanning a game log for shared songs and logging setup.

pub mod commands;
pub mod logging;
