//! Ladder Race - command-line shell around `strictly_ladders`.
//!
//! Board files, a file-backed result recorder, and text drivers for
//! playing races and printing optimal routes.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod driver;
pub mod recorder;

// Crate-level exports
pub use config::{BoardConfig, BoardFileError, load_topology};
pub use driver::{
    finish, play_interactive, play_to_end, report_routes, show_saved_results, write_route,
};
pub use recorder::FileRecorder;
