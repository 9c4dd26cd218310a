//! Library crate root re-exporting CLI and bootstrap modules.

#[path = "lib/mod.rs"]
pub mod lib_mod;
pub use lib_mod as lib;
pub mod bootstrap;
pub mod cli;
