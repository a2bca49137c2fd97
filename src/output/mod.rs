//! Generated source file writers.

pub mod typescript;

pub use typescript::{render_module, write_module};
