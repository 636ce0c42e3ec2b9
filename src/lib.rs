//! List snapshots with positional change detection, and a terminal app
//! built on them.
//!
//! [`datasource::RowDataSource`] is the core: an immutable row snapshot that
//! knows how to decide whether a row must be redrawn. The [`ui`] module drives
//! it from two screens, a generated numbers list and a video search backed by
//! a local [`catalog`].

pub mod catalog;
pub mod cli;
pub mod config;
pub mod datasource;
pub mod logging;
pub mod ui;
