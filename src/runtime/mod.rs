//! Caller-facing command surface.

pub mod api;

pub use api::{execute_command, execute_script, CommandResponse, LibraryCommand};
