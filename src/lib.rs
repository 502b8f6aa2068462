//! Secgen library crate.
//!
//! Exposes the event model, sources, and output format for the CLI.

pub mod core;
pub mod formats;
pub mod sources;

pub use self::core::builder;
pub use self::core::event;
pub use self::core::traits;
