//! Common utilities for the wattle layout engine.
//!
//! This crate provides shared infrastructure used by the engine and its
//! front-ends:
//! - **Warning System** - deduplicated diagnostics for quirks and known limitations

pub mod warning;
